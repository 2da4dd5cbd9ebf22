pub mod camera;
pub mod color;
pub mod gradient;
pub mod surface;
