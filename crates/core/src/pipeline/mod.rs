pub mod blend_images_use_case;
pub mod output_name;
