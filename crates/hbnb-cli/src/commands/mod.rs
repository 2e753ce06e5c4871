pub mod console;
pub mod params;
pub mod render;
