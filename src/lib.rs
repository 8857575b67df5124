//! # streamlog
//!
//! A colorized console logger built around an asynchronous, strictly
//! ordered delivery stream.
//!
//! ## Features
//!
//! - **Non-blocking producers**: `write` hands the message to an unbounded
//!   queue and returns; producers never wait on I/O
//! - **Single-writer sinks**: exactly one consumer thread per backend
//!   performs all rendering and I/O, in strict FIFO order
//! - **Best-effort rendering**: malformed templates degrade to literal
//!   placeholders instead of erroring
//! - **Thread safe**: any number of threads may share a logger

pub mod backends;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::backends::{Backend, MultiWriterBackend, WriterBackend};
    pub use crate::core::{
        paint, render, Color, Level, LevelTable, Logger, LoggerBuilder, LoggerError, Message,
        MessageStream, Result, StreamMetrics, Template, TimestampFormat, DEFAULT_SHUTDOWN_TIMEOUT,
        DEFAULT_TEMPLATE,
    };
}

pub use backends::{Backend, MultiWriterBackend, WriterBackend};
pub use core::{
    paint, render, Color, Level, LevelTable, Logger, LoggerBuilder, LoggerError, Message,
    MessageStream, Result, StreamMetrics, Template, TimestampFormat, DEFAULT_SHUTDOWN_TIMEOUT,
    DEFAULT_TEMPLATE,
};
