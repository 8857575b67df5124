//! Core logger types: values, rendering, and the delivery stream

pub mod color;
pub mod error;
pub mod level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod render;
pub mod stream;
pub mod template;
pub mod timestamp;

pub use color::{paint, Color};
pub use error::{LoggerError, Result};
pub use level::{Level, LevelTable};
pub use logger::{Logger, LoggerBuilder};
pub use message::Message;
pub use metrics::StreamMetrics;
pub use render::render;
pub use stream::{MessageStream, DEFAULT_SHUTDOWN_TIMEOUT};
pub use template::{Template, DEFAULT_TEMPLATE};
pub use timestamp::TimestampFormat;
