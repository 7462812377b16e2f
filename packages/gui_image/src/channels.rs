//! Pixel channel layouts.

use anyhow::{Result, bail};


/// Classification of how many color/alpha components each pixel carries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ImageChannels {
    /// 1 channel, grayscale.
    Gray,
    /// 2 channels, grayscale + alpha.
    GrayAlpha,
    /// 3 channels, red/green/blue.
    Rgb,
    /// 4 channels, red/green/blue/alpha.
    Rgba,
}

impl ImageChannels {
    /// Channel layout for a per-pixel component count.
    pub fn try_from_count(count: u32) -> Result<Self> {
        Ok(match count {
            1 => ImageChannels::Gray,
            2 => ImageChannels::GrayAlpha,
            3 => ImageChannels::Rgb,
            4 => ImageChannels::Rgba,
            _ => bail!("invalid image channel count: {}", count),
        })
    }

    /// Bytes each pixel occupies in this layout.
    pub fn count(self) -> usize {
        match self {
            ImageChannels::Gray => 1,
            ImageChannels::GrayAlpha => 2,
            ImageChannels::Rgb => 3,
            ImageChannels::Rgba => 4,
        }
    }
}


#[test]
fn test_channel_count_round_trip() {
    for count in 1..=4 {
        assert_eq!(
            ImageChannels::try_from_count(count).unwrap().count(),
            count as usize,
        );
    }
    assert!(ImageChannels::try_from_count(0).is_err());
    assert!(ImageChannels::try_from_count(5).is_err());
}
