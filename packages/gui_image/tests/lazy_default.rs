//! Lazy default-strategy installation on first use.
//!
//! Lives in its own integration test binary: the registry is process
//! global, and this scenario must be the first to touch it.

use gui_image::{
    DecodedImage,
    ImageChannels,
    ImageLoader,
    install_loader,
    load_image,
};
use resource_store::ResourceName;
use anyhow::Result;


#[derive(Debug)]
struct StubLoader;

impl ImageLoader for StubLoader {
    fn load_image(&self, _name: ResourceName<&str>) -> Result<DecodedImage> {
        DecodedImage::new([1, 1], ImageChannels::Gray, vec![0])
    }
}

#[test]
fn test_first_use_installs_default_once() {
    let name = ResourceName::try_new("gui/absent.png").unwrap();

    // no loader installed: first use falls back to the filesystem default,
    // which fails on the absent assets directory but names the resource
    let e = load_image(name).unwrap_err();
    assert!(e.to_string().contains("gui/absent.png"));

    // the lazily installed default occupies the registry
    assert!(install_loader(StubLoader).is_err());

    // and later loads keep using it rather than re-initializing
    let e = load_image(name).unwrap_err();
    assert!(e.to_string().contains("gui/absent.png"));
}
