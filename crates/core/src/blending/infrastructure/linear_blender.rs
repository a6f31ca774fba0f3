use ndarray::{s, ArrayView3, Zip};

use crate::blending::domain::image_blender::{BlendError, ImageBlender};
use crate::shared::blend_weight::BlendWeight;
use crate::shared::pixel_buffer::PixelBuffer;
use crate::shared::region::Region;

/// CPU weighted average: `out = round(α·first + β·second)` per channel.
///
/// Rounds half away from zero (black and white at α = 0.5 give 128) and
/// clamps to `[0, 255]`. Swapping the sources and complementing the weight
/// gives bit-identical output.
pub struct LinearBlender;

impl LinearBlender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinearBlender {
    fn default() -> Self {
        Self::new()
    }
}

fn region_view<'a>(
    buffer: &'a PixelBuffer,
    region: Region,
    which: &'static str,
) -> Result<ArrayView3<'a, u8>, BlendError> {
    if !region.fits_within(buffer) {
        return Err(BlendError::RegionOutOfBounds {
            region,
            which,
            width: buffer.width(),
            height: buffer.height(),
        });
    }
    let x = region.x as usize;
    let y = region.y as usize;
    let w = region.width as usize;
    let h = region.height as usize;
    Ok(buffer.as_ndarray().slice_move(s![y..y + h, x..x + w, ..]))
}

/// The larger of the two weights, and whether it belongs to the first source.
///
/// The blend is evaluated from the larger weight only, with the other taken
/// as its complement. For a weight >= 0.5 the complement is exact in
/// floating point, so both source orders evaluate the same expression.
fn dominant_weight(weight: BlendWeight) -> (f64, bool) {
    let alpha = weight.alpha();
    let beta = weight.beta();
    if alpha >= beta {
        (alpha, true)
    } else {
        (beta, false)
    }
}

fn mix(a: u8, b: u8, dominant: f64, first_dominant: bool) -> u8 {
    let (p, q) = if first_dominant { (a, b) } else { (b, a) };
    (dominant * f64::from(p) + (1.0 - dominant) * f64::from(q))
        .round()
        .clamp(0.0, 255.0) as u8
}

impl ImageBlender for LinearBlender {
    fn blend(
        &self,
        first: &PixelBuffer,
        second: &PixelBuffer,
        region: Region,
        weight: BlendWeight,
    ) -> Result<PixelBuffer, BlendError> {
        if first.channels() != second.channels() {
            return Err(BlendError::ChannelMismatch {
                first: first.channels(),
                second: second.channels(),
            });
        }
        let a = region_view(first, region, "first")?;
        let b = region_view(second, region, "second")?;

        let (dominant, first_dominant) = dominant_weight(weight);
        let mut output = PixelBuffer::filled(region.width, region.height, first.channels(), 0);
        Zip::from(output.as_ndarray_mut())
            .and(a)
            .and(b)
            .for_each(|out, &x, &y| *out = mix(x, y, dominant, first_dominant));

        Ok(output)
    }
}
