//! Decoded images held in main memory.

use crate::channels::ImageChannels;
use std::fmt::{self, Formatter, Debug};
use anyhow::{Result, ensure};
use vek::*;


const MISSING_PNG: &'static [u8] = include_bytes!("missing.png");


/// A fully decoded image: dimensions, channel layout, and an exclusively
/// owned pixel buffer.
///
/// Construction checks that the buffer length matches
/// `width * height * channels`, so a partially populated image is never
/// observable.
#[derive(Clone, Eq, PartialEq)]
pub struct DecodedImage {
    size: Extent2<u32>,
    channels: ImageChannels,
    data: Vec<u8>,
}

impl DecodedImage {
    pub fn new<E>(size: E, channels: ImageChannels, data: Vec<u8>) -> Result<Self>
    where
        E: Into<Extent2<u32>>,
    {
        let size = size.into();
        let expected = size.w as usize * size.h as usize * channels.count();
        ensure!(
            data.len() == expected,
            "pixel buffer of {} bytes for {}x{} {:?} image, expected {}",
            data.len(), size.w, size.h, channels, expected,
        );
        Ok(DecodedImage { size, channels, data })
    }

    /// Size in pixels.
    pub fn size(&self) -> Extent2<u32> {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.w
    }

    pub fn height(&self) -> u32 {
        self.size.h
    }

    pub fn channels(&self) -> ImageChannels {
        self.channels
    }

    /// Raw pixel bytes, row-major, tightly packed.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Take ownership of the pixel buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Expand to 4-channel RGBA, for consumers that upload textures in one
    /// fixed format.
    pub fn to_rgba8(&self) -> DecodedImage {
        let data = match self.channels {
            ImageChannels::Gray => self.data.iter()
                .flat_map(|&l| [l, l, l, 0xff])
                .collect(),
            ImageChannels::GrayAlpha => self.data.chunks_exact(2)
                .flat_map(|la| [la[0], la[0], la[0], la[1]])
                .collect(),
            ImageChannels::Rgb => self.data.chunks_exact(3)
                .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 0xff])
                .collect(),
            ImageChannels::Rgba => self.data.clone(),
        };
        DecodedImage {
            size: self.size,
            channels: ImageChannels::Rgba,
            data,
        }
    }

    /// Copy out a pixel rectangle.
    pub fn crop<V, E>(&self, start: V, extent: E) -> Result<DecodedImage>
    where
        V: Into<Vec2<u32>>,
        E: Into<Extent2<u32>>,
    {
        let start = start.into();
        let extent = extent.into();
        ensure!(
            start.x as u64 + extent.w as u64 <= self.size.w as u64
                && start.y as u64 + extent.h as u64 <= self.size.h as u64,
            "crop of {}x{} at {},{} out of bounds for {}x{} image",
            extent.w, extent.h, start.x, start.y, self.size.w, self.size.h,
        );
        let stride = self.channels.count();
        let mut data =
            Vec::with_capacity(extent.w as usize * extent.h as usize * stride);
        for row in 0..extent.h as usize {
            let begin =
                ((start.y as usize + row) * self.size.w as usize
                    + start.x as usize) * stride;
            let end = begin + extent.w as usize * stride;
            data.extend_from_slice(&self.data[begin..end]);
        }
        DecodedImage::new(extent, self.channels, data)
    }

    /// The embedded placeholder substituted for images that fail to load.
    pub fn missing() -> DecodedImage {
        crate::loader::decode_image(MISSING_PNG)
            .expect("missing.png bytes failed to parse")
    }

    /// Unwrap a load result, logging the error and substituting the
    /// placeholder on failure.
    pub fn or_missing(result: Result<DecodedImage>) -> DecodedImage {
        result.unwrap_or_else(|e| {
            error!(%e, "image failed to load, substituting placeholder");
            DecodedImage::missing()
        })
    }
}

impl Debug for DecodedImage {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("size", &self.size)
            .field("channels", &self.channels)
            .field("data", &format_args!("{} bytes", self.data.len()))
            .finish()
    }
}


#[test]
fn test_buffer_length_invariant() {
    assert!(DecodedImage::new([2, 2], ImageChannels::Rgba, vec![0; 16]).is_ok());
    assert!(DecodedImage::new([2, 2], ImageChannels::Rgba, vec![0; 15]).is_err());
    assert!(DecodedImage::new([2, 2], ImageChannels::Gray, vec![0; 16]).is_err());
    assert!(DecodedImage::new([0, 0], ImageChannels::Rgb, vec![]).is_ok());
}

#[test]
fn test_to_rgba8() {
    let gray = DecodedImage::new([2, 1], ImageChannels::Gray, vec![7, 9]).unwrap();
    assert_eq!(gray.to_rgba8().data(), &[7, 7, 7, 255, 9, 9, 9, 255]);

    let gray_alpha =
        DecodedImage::new([1, 1], ImageChannels::GrayAlpha, vec![7, 128]).unwrap();
    assert_eq!(gray_alpha.to_rgba8().data(), &[7, 7, 7, 128]);

    let rgb = DecodedImage::new([1, 1], ImageChannels::Rgb, vec![1, 2, 3]).unwrap();
    assert_eq!(rgb.to_rgba8().data(), &[1, 2, 3, 255]);

    let rgba =
        DecodedImage::new([1, 1], ImageChannels::Rgba, vec![1, 2, 3, 4]).unwrap();
    assert_eq!(rgba.to_rgba8(), rgba);
}

#[test]
fn test_crop() {
    let image = DecodedImage::new(
        [4, 2],
        ImageChannels::Gray,
        vec![0, 1, 2, 3, 4, 5, 6, 7],
    ).unwrap();
    let cropped = image.crop([1, 0], [2, 2]).unwrap();
    assert_eq!(cropped.size(), Extent2::new(2, 2));
    assert_eq!(cropped.data(), &[1, 2, 5, 6]);
    assert!(image.crop([3, 0], [2, 1]).is_err());
    assert!(image.crop([0, 0], [4, 3]).is_err());
}

#[test]
fn test_missing_placeholder() {
    let missing = DecodedImage::missing();
    assert_eq!(missing.size(), Extent2::new(16, 16));
    assert_eq!(missing.channels(), ImageChannels::Rgba);
    // magenta/black checkerboard, top-left quadrant magenta
    assert_eq!(&missing.data()[0..4], &[0xff, 0x00, 0xff, 0xff]);
}

#[test]
fn test_or_missing_substitutes() {
    let loaded = DecodedImage::new([1, 1], ImageChannels::Gray, vec![3]).unwrap();
    assert_eq!(DecodedImage::or_missing(Ok(loaded.clone())), loaded);
    assert_eq!(
        DecodedImage::or_missing(Err(anyhow::anyhow!("nope"))),
        DecodedImage::missing(),
    );
}
