use thiserror::Error;

use crate::shared::pixel_buffer::PixelBuffer;
use crate::shared::region::Region;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegionError {
    #[error("image sizes differ: first is {first_width}x{first_height}, second is {second_width}x{second_height}")]
    SizeMismatch {
        first_width: u32,
        first_height: u32,
        second_width: u32,
        second_height: u32,
    },
    #[error("channel counts differ: first has {first}, second has {second}")]
    ChannelMismatch { first: u8, second: u8 },
    #[error("images have no overlapping pixels")]
    EmptyRegion,
}

/// How to treat sources whose dimensions differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizePolicy {
    /// Blend over the first image's extent clamped to the second image's bounds.
    #[default]
    Intersect,
    /// Refuse to blend unless both images have identical dimensions.
    RequireEqual,
}

/// Computes the region to blend over: the first buffer's full extent,
/// restricted so it never reaches outside the second buffer.
///
/// The result always satisfies [`Region::fits_within`] for both inputs.
pub fn compute_region(
    first: &PixelBuffer,
    second: &PixelBuffer,
    policy: SizePolicy,
) -> Result<Region, RegionError> {
    if first.channels() != second.channels() {
        return Err(RegionError::ChannelMismatch {
            first: first.channels(),
            second: second.channels(),
        });
    }

    let same_size = first.dimensions() == second.dimensions();
    if !same_size && policy == SizePolicy::RequireEqual {
        return Err(RegionError::SizeMismatch {
            first_width: first.width(),
            first_height: first.height(),
            second_width: second.width(),
            second_height: second.height(),
        });
    }

    let region = Region::full_extent(first).intersect(&Region::full_extent(second));
    if region.is_empty() {
        return Err(RegionError::EmptyRegion);
    }
    if !same_size {
        log::warn!(
            "Image sizes differ ({}x{} vs {}x{}); blending the overlapping {}x{} region",
            first.width(),
            first.height(),
            second.width(),
            second.height(),
            region.width,
            region.height
        );
    }
    Ok(region)
}
