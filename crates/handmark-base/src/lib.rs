pub mod logging;

pub use logging::{init_logging, FileLogger, LogConfig, StdoutLogger, UtcTime};

// Re-export log crate so downstream crates can use handmark_base::log::*
pub use log;
