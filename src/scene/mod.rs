pub mod appearance;
pub mod background;
pub mod composite;
pub mod draw;
pub mod entity;
pub mod recorder;
pub mod shape;
