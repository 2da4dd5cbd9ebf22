pub mod angle;
pub mod clock;
pub mod rng;
