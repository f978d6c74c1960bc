pub mod bounds;
pub mod constants;
pub mod fit;
pub mod geo;
pub mod map;
