pub mod hub;
pub mod registry;
pub mod resolver;
