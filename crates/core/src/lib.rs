//! Weighted linear blending of two raster images.
//!
//! Organised by context, each split into a `domain` layer (types, traits and
//! pure logic) and an `infrastructure` layer (filesystem and codec adapters):
//!
//! - [`catalog`]: listing candidate source images
//! - [`blending`]: ratio validation, region computation and the blend itself
//! - [`io`]: loading, writing and displaying images
//! - [`pipeline`]: the end-to-end use case tying the stages together

pub mod blending;
pub mod catalog;
pub mod io;
pub mod pipeline;
pub mod shared;
