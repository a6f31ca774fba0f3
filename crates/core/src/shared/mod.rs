pub mod blend_config;
pub mod blend_weight;
pub mod constants;
pub mod pixel_buffer;
pub mod region;
