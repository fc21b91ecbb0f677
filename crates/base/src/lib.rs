pub mod logging;
pub mod tensor;

pub use logging::{FileLogger, StderrLogger, default_level, init_file_logger, init_stderr_logger};
pub use tensor::{Tensor, TensorError};

// Downstream crates log through base::log::* without their own dependency
pub use log;
