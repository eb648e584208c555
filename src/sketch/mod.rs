pub mod driver;
pub mod params;
