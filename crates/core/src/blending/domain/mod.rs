pub mod image_blender;
pub mod ratio_validator;
pub mod region_intersector;
