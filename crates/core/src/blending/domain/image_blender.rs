use thiserror::Error;

use crate::shared::blend_weight::BlendWeight;
use crate::shared::pixel_buffer::PixelBuffer;
use crate::shared::region::Region;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BlendError {
    #[error("region {region:?} does not fit within the {which} image ({width}x{height})")]
    RegionOutOfBounds {
        region: Region,
        which: &'static str,
        width: u32,
        height: u32,
    },
    #[error("channel counts differ: first has {first}, second has {second}")]
    ChannelMismatch { first: u8, second: u8 },
}

/// Domain interface for combining two images into a new one.
///
/// Implementations never mutate their inputs; the output has the region's
/// width and height and the inputs' channel count.
pub trait ImageBlender: Send {
    fn blend(
        &self,
        first: &PixelBuffer,
        second: &PixelBuffer,
        region: Region,
        weight: BlendWeight,
    ) -> Result<PixelBuffer, BlendError>;
}
