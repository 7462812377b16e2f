//! Process-wide loader registry with an explicitly installed strategy.
//!
//! Lives in its own integration test binary: the registry is process
//! global, and these scenarios need to win the installation.

use gui_image::{
    DecodedImage,
    ImageChannels,
    ImageLoader,
    install_loader,
    load_image,
};
use resource_store::ResourceName;
use std::sync::atomic::{AtomicUsize, Ordering};
use anyhow::{Result, bail};


static LOADS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
struct StubLoader;

impl ImageLoader for StubLoader {
    fn load_image(&self, name: ResourceName<&str>) -> Result<DecodedImage> {
        LOADS.fetch_add(1, Ordering::SeqCst);
        if name.rel() == "present.png" {
            DecodedImage::new([2, 2], ImageChannels::Rgba, vec![0; 16])
        } else {
            bail!("not found: {}", name)
        }
    }
}

#[test]
fn test_installed_loader_used_exclusively() {
    install_loader(StubLoader).unwrap();

    let present = ResourceName::try_new("present.png").unwrap();
    let image = load_image(present).unwrap();
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 2);
    assert_eq!(image.channels(), ImageChannels::Rgba);
    assert_eq!(image.data(), &[0u8; 16][..]);

    let absent = ResourceName::try_new("absent.png").unwrap();
    let e = load_image(absent).unwrap_err();
    assert!(e.to_string().contains("not found"));

    // both loads went through the stub, and a second installation is
    // rejected rather than replacing it
    assert_eq!(LOADS.load(Ordering::SeqCst), 2);
    assert!(install_loader(StubLoader).is_err());
}
