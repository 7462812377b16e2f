//! Image data model and pluggable image loading for GUI components embedded
//! in a real-time rendering host.
//!
//! The host supplies encoded image bytes through a
//! [`resource_store::ResourceStore`]; this crate decodes them into
//! [`DecodedImage`]s through a pluggable [`ImageLoader`] strategy. Decoding
//! is blocking (I/O plus decompression), so callers on a rendering thread
//! should load off-frame.

#[macro_use]
extern crate tracing;

mod channels;
mod decoded;
mod loader;
mod atlas;

pub use crate::{
    channels::ImageChannels,
    decoded::DecodedImage,
    loader::{
        ImageLoader,
        StoreImageLoader,
        decode_image,
        install_loader,
        load_image,
    },
    atlas::ImageAtlas,
};
