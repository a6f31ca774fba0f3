pub mod image_catalog;
