pub mod clock;
pub mod throttle;
pub mod timeline;
