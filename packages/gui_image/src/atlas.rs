//! Sprite sheets.
//!
//! GUI skins pack many widget images into one sheet; an atlas divides a
//! decoded sheet into a grid and copies individual sprites back out.

use crate::decoded::DecodedImage;
use anyhow::{Result, ensure};
use vek::*;


/// A decoded sheet divided into a grid of equally sized sprites.
#[derive(Debug, Clone)]
pub struct ImageAtlas {
    sheet: DecodedImage,
    sprites: Extent2<u32>,
}

impl ImageAtlas {
    pub fn new<E>(sheet: DecodedImage, sprites: E) -> Result<Self>
    where
        E: Into<Extent2<u32>>,
    {
        let sprites = sprites.into();
        ensure!(
            sprites.w > 0 && sprites.h > 0,
            "image atlas with empty {}x{} sprite grid",
            sprites.w, sprites.h,
        );
        Ok(ImageAtlas { sheet, sprites })
    }

    pub fn sheet(&self) -> &DecodedImage {
        &self.sheet
    }

    /// Size of one grid cell in pixels.
    pub fn sprite_size(&self) -> Extent2<u32> {
        self.sheet.size() / self.sprites
    }

    /// Copy out the sprite at the given grid position.
    pub fn sprite<V>(&self, pos: V) -> Result<DecodedImage>
    where
        V: Into<Vec2<u32>>,
    {
        let pos = pos.into();
        ensure!(
            pos.x < self.sprites.w && pos.y < self.sprites.h,
            "sprite {},{} out of range for {}x{} grid",
            pos.x, pos.y, self.sprites.w, self.sprites.h,
        );
        let ext = self.sprite_size();
        self.sheet.crop(pos * Vec2::from(ext), ext)
    }

    /// Copy out an arbitrary pixel region of the sheet.
    pub fn clip<V, E>(&self, start: V, extent: E) -> Result<DecodedImage>
    where
        V: Into<Vec2<u32>>,
        E: Into<Extent2<u32>>,
    {
        self.sheet.crop(start, extent)
    }
}


#[test]
fn test_sprite_extraction() {
    use crate::channels::ImageChannels;

    // 4x4 gray sheet, 2x2 sprite grid, each quadrant a constant value
    let mut data = vec![0; 16];
    for y in 0..4usize {
        for x in 0..4usize {
            data[y * 4 + x] = (x / 2 + (y / 2) * 2) as u8;
        }
    }
    let sheet = DecodedImage::new([4, 4], ImageChannels::Gray, data).unwrap();
    let atlas = ImageAtlas::new(sheet, [2, 2]).unwrap();
    assert_eq!(atlas.sprite_size(), Extent2::new(2, 2));

    for (pos, value) in [([0u32, 0], 0u8), ([1, 0], 1), ([0, 1], 2), ([1, 1], 3)] {
        let sprite = atlas.sprite(pos).unwrap();
        assert_eq!(sprite.size(), Extent2::new(2, 2));
        assert_eq!(sprite.data(), &[value; 4][..]);
    }
    assert!(atlas.sprite([2, 0]).is_err());
    assert!(atlas.sprite([0, 2]).is_err());
}

#[test]
fn test_clip_region() {
    use crate::channels::ImageChannels;

    let sheet = DecodedImage::new(
        [2, 2],
        ImageChannels::Rgba,
        (0..16).collect::<Vec<u8>>(),
    ).unwrap();
    let atlas = ImageAtlas::new(sheet, [1, 1]).unwrap();
    let clip = atlas.clip([1, 1], [1, 1]).unwrap();
    assert_eq!(clip.data(), &[12, 13, 14, 15]);
    assert!(atlas.clip([1, 1], [2, 1]).is_err());
}

#[test]
fn test_empty_grid_rejected() {
    use crate::channels::ImageChannels;

    let sheet = DecodedImage::new([2, 2], ImageChannels::Gray, vec![0; 4]).unwrap();
    assert!(ImageAtlas::new(sheet, [0, 2]).is_err());
}
