pub mod camera;
pub mod error;
pub mod film;
pub mod hittable;
pub mod interval;
pub mod material;
pub mod output;
pub mod ray;
pub mod scenes;
pub mod vec3;
pub mod vec3_ext;
