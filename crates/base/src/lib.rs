pub mod logging;
pub mod vec2;

pub use logging::{format_clock, init_file_logger, init_stdout_logger};
pub use vec2::Vec2;
