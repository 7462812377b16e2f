//! End-to-end loads through an in-memory store.

use gui_image::{
    ImageChannels,
    ImageLoader,
    StoreImageLoader,
};
use resource_store::{
    MemStore,
    ResourceName,
};
use image::{
    codecs::png::PngEncoder,
    ColorType,
    ImageEncoder,
};


fn encode_png(pixels: &[u8], width: u32, height: u32, color: ColorType) -> Vec<u8> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(pixels, width, height, color)
        .unwrap();
    bytes
}

#[test]
fn test_encoded_properties_survive_decode() {
    let mut store = MemStore::new();
    let name = ResourceName::try_new("gui/widgets.png").unwrap();
    let pixels = (0u8..=255).collect::<Vec<u8>>();
    store.insert(name, encode_png(&pixels, 8, 8, ColorType::Rgba8));

    let image = StoreImageLoader(store).load_image(name).unwrap();
    assert_eq!(image.width(), 8);
    assert_eq!(image.height(), 8);
    assert_eq!(image.channels(), ImageChannels::Rgba);
    assert_eq!(image.data(), &pixels[..]);
}

#[test]
fn test_corrupt_resource_fails_decode() {
    let mut store = MemStore::new();
    let name = ResourceName::try_new("gui/corrupt.png").unwrap();
    let png = encode_png(&[0; 4], 1, 1, ColorType::Rgba8);
    store.insert(name, png[..png.len() / 2].to_vec());

    let e = StoreImageLoader(store).load_image(name).unwrap_err();
    assert!(format!("{:#}", e).contains("gui/corrupt.png"));
}

#[test]
fn test_missing_resource_fails_load() {
    let name = ResourceName::try_new("gui/nope.png").unwrap();
    let e = StoreImageLoader(MemStore::new()).load_image(name).unwrap_err();
    assert!(e.to_string().contains("gui/nope.png"));
}
