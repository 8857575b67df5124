//! Backend implementations

pub mod multi;
pub mod writer;

use crate::core::message::Message;

/// The sink-facing capability: accept a message for eventual output.
///
/// `write` must be safe under concurrent producers and must not block on
/// I/O; implementations hand the message to an internal queue and return.
/// There is no return channel, so failures past this point are invisible to
/// the caller.
pub trait Backend: Send + Sync {
    fn write(&self, message: Message);
}

pub use multi::MultiWriterBackend;
pub use writer::WriterBackend;
