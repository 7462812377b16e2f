//! Pluggable image loading.
//!
//! Components that need an image loaded take a strategy as an explicit
//! dependency. A process-wide strategy can additionally be registered for
//! hosts that want one; registration is single-assignment, with a
//! filesystem-backed default installed lazily on first use.

use crate::{
    channels::ImageChannels,
    decoded::DecodedImage,
};
use resource_store::{
    ResourceName,
    ResourceStore,
    DirStore,
};
use image::DynamicImage;
use once_cell::sync::OnceCell;
use anyhow::{
    Result,
    Context,
    anyhow,
};


static LOADER: OnceCell<Box<dyn ImageLoader>> = OnceCell::new();


/// Strategy turning a resource name into a decoded image.
///
/// A single blocking attempt per call; failures are terminal for that call
/// and carry the underlying I/O or decoder reason.
pub trait ImageLoader: Send + Sync {
    fn load_image(&self, name: ResourceName<&str>) -> Result<DecodedImage>;
}

/// Default strategy: resolve the name through a resource store, then decode
/// the bytes.
#[derive(Debug, Clone)]
pub struct StoreImageLoader<S>(pub S);

impl<S: ResourceStore> ImageLoader for StoreImageLoader<S> {
    fn load_image(&self, name: ResourceName<&str>) -> Result<DecodedImage> {
        debug!(%name, "loading image");
        let bytes = self.0.read(name)?;
        decode_image(&bytes)
            .with_context(|| format!("unable to decode image {}", name))
    }
}

/// Decode encoded image bytes (PNG, JPEG, anything the decoder recognizes)
/// into a [`DecodedImage`].
///
/// The encoder's channel layout is kept when it is one of the supported
/// 8-bit layouts; anything else is converted to RGBA.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage> {
    match image::load_from_memory(bytes)? {
        DynamicImage::ImageLuma8(buf) => {
            let size = [buf.width(), buf.height()];
            DecodedImage::new(size, ImageChannels::Gray, buf.into_raw())
        }
        DynamicImage::ImageLumaA8(buf) => {
            let size = [buf.width(), buf.height()];
            DecodedImage::new(size, ImageChannels::GrayAlpha, buf.into_raw())
        }
        DynamicImage::ImageRgb8(buf) => {
            let size = [buf.width(), buf.height()];
            DecodedImage::new(size, ImageChannels::Rgb, buf.into_raw())
        }
        DynamicImage::ImageRgba8(buf) => {
            let size = [buf.width(), buf.height()];
            DecodedImage::new(size, ImageChannels::Rgba, buf.into_raw())
        }
        other => {
            let buf = other.to_rgba8();
            let size = [buf.width(), buf.height()];
            DecodedImage::new(size, ImageChannels::Rgba, buf.into_raw())
        }
    }
}

/// Register the process-wide image loader.
///
/// Registration is single-assignment: errors if a loader is already
/// registered, including the default one installed lazily by
/// [`load_image`].
pub fn install_loader<L: ImageLoader + 'static>(loader: L) -> Result<()> {
    LOADER.set(Box::new(loader))
        .map_err(|_| anyhow!("image loader already installed"))
}

/// Load an image through the process-wide loader, installing the default
/// strategy first if none was registered.
pub fn load_image(name: ResourceName<&str>) -> Result<DecodedImage> {
    LOADER
        .get_or_init(|| Box::new(StoreImageLoader(DirStore::new())))
        .load_image(name)
}


#[cfg(test)]
fn encode_png(pixels: &[u8], width: u32, height: u32, color: image::ColorType) -> Vec<u8> {
    use image::{codecs::png::PngEncoder, ImageEncoder};
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(pixels, width, height, color)
        .unwrap();
    bytes
}

#[test]
fn test_decode_preserves_encoder_layout() {
    let cases = [
        (ImageChannels::Gray, image::ColorType::L8),
        (ImageChannels::GrayAlpha, image::ColorType::La8),
        (ImageChannels::Rgb, image::ColorType::Rgb8),
        (ImageChannels::Rgba, image::ColorType::Rgba8),
    ];
    for (channels, color) in cases {
        let pixels = vec![0x40; 3 * 2 * channels.count()];
        let image = decode_image(&encode_png(&pixels, 3, 2, color)).unwrap();
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.channels(), channels);
        assert_eq!(image.data(), &pixels[..]);
    }
}

#[test]
fn test_decode_corrupt_bytes() {
    assert!(decode_image(b"not an image").is_err());

    let png = encode_png(&[1, 2, 3, 4], 1, 1, image::ColorType::Rgba8);
    assert!(decode_image(&png[..png.len() / 2]).is_err());
}

#[test]
fn test_store_loader_reads_through_store() {
    use resource_store::MemStore;

    let mut store = MemStore::new();
    let name = ResourceName::try_new("gui/button.png").unwrap();
    store.insert(name, encode_png(&[1, 2, 3], 1, 1, image::ColorType::Rgb8));

    let loader = StoreImageLoader(store);
    let image = loader.load_image(name).unwrap();
    assert_eq!(image.channels(), ImageChannels::Rgb);
    assert_eq!(image.data(), &[1, 2, 3]);

    let absent = ResourceName::try_new("gui/nope.png").unwrap();
    assert!(loader.load_image(absent).is_err());
}
