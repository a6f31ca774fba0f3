pub mod linear_blender;
