pub mod body;
pub mod ship;
pub mod star;
pub mod trail;
