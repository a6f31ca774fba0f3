use crate::shared::pixel_buffer::PixelBuffer;

/// Axis-aligned pixel rectangle a blend operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole buffer, anchored at the origin.
    pub fn full_extent(buffer: &PixelBuffer) -> Self {
        Self::new(0, 0, buffer.width(), buffer.height())
    }

    /// Geometric intersection. Disjoint rectangles yield an empty region
    /// anchored at the overlap's would-be origin.
    pub fn intersect(&self, other: &Region) -> Region {
        let ix1 = self.x.max(other.x);
        let iy1 = self.y.max(other.y);
        let ix2 = self.right().min(other.right());
        let iy2 = self.bottom().min(other.bottom());
        Region::new(ix1, iy1, span(ix1, ix2), span(iy1, iy2))
    }

    pub fn fits_within(&self, buffer: &PixelBuffer) -> bool {
        self.right() <= u64::from(buffer.width()) && self.bottom() <= u64::from(buffer.height())
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }
}

/// Length of `[start, end)`; never exceeds a `u32` because `end` is bounded
/// by the narrower rectangle.
fn span(start: u32, end: u64) -> u32 {
    u32::try_from(end.saturating_sub(u64::from(start))).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_full_extent_covers_buffer() {
        let buffer = PixelBuffer::filled(100, 80, 3, 0);
        assert_eq!(Region::full_extent(&buffer), Region::new(0, 0, 100, 80));
    }

    #[test]
    fn test_intersect_identical() {
        let a = Region::new(10, 10, 100, 100);
        assert_eq!(a.intersect(&a), a);
    }

    #[test]
    fn test_intersect_partial_overlap() {
        // a: [0,0]-[100,100], b: [50,20]-[150,120]
        let a = Region::new(0, 0, 100, 100);
        let b = Region::new(50, 20, 100, 100);
        assert_eq!(a.intersect(&b), Region::new(50, 20, 50, 80));
    }

    #[test]
    fn test_intersect_contained() {
        let a = Region::new(0, 0, 100, 100);
        let b = Region::new(25, 25, 50, 50);
        assert_eq!(a.intersect(&b), b);
        assert_eq!(b.intersect(&a), b);
    }

    #[test]
    fn test_intersect_near_coordinate_limit() {
        let a = Region::new(u32::MAX - 10, 0, 10, 5);
        let b = Region::new(u32::MAX - 5, 2, 100, 5);
        assert_eq!(a.intersect(&b), Region::new(u32::MAX - 5, 2, 5, 3));
    }

    #[rstest]
    #[case::touching_edges(Region::new(0, 0, 50, 50), Region::new(50, 0, 50, 50))]
    #[case::disjoint(Region::new(0, 0, 50, 50), Region::new(100, 100, 50, 50))]
    #[case::zero_width(Region::new(0, 0, 0, 100), Region::new(0, 0, 50, 50))]
    fn test_intersect_empty(#[case] a: Region, #[case] b: Region) {
        let result = a.intersect(&b);
        assert!(result.is_empty());
        assert_eq!(result.area(), 0);
    }

    #[rstest]
    #[case::exact(Region::new(0, 0, 10, 10), true)]
    #[case::inset(Region::new(2, 3, 8, 7), true)]
    #[case::too_wide(Region::new(0, 0, 11, 10), false)]
    #[case::offset_overflows(Region::new(5, 0, 6, 10), false)]
    #[case::huge_origin(Region::new(u32::MAX, 0, 1, 1), false)]
    fn test_fits_within(#[case] region: Region, #[case] expected: bool) {
        let buffer = PixelBuffer::filled(10, 10, 1, 0);
        assert_eq!(region.fits_within(&buffer), expected);
    }

    #[test]
    fn test_area() {
        assert_eq!(Region::new(3, 4, 80, 90).area(), 7200);
    }
}
