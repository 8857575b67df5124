//! Multi-writer backend: one stream fanning out to several sinks

use super::Backend;
use crate::core::error::{LoggerError, Result};
use crate::core::message::Message;
use crate::core::metrics::StreamMetrics;
use crate::core::render::render;
use crate::core::stream::MessageStream;
use crate::core::template::Template;
use parking_lot::RwLock;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// A backend that renders each message once and writes the line to every
/// sink.
///
/// Fan-out happens inside the single delivery function, so the sinks stay
/// serialized behind one consumer thread just like [`WriterBackend`]'s
/// single sink, and all sinks observe the same FIFO order.
///
/// [`WriterBackend`]: super::WriterBackend
pub struct MultiWriterBackend {
    stream: MessageStream,
    template: Arc<RwLock<Arc<Template>>>,
    metrics: Arc<StreamMetrics>,
}

impl MultiWriterBackend {
    /// Build a backend over the given sinks with the default template.
    ///
    /// Fails with `InvalidConfiguration` when `sinks` is empty: a fan-out
    /// to nothing silently discards every message.
    pub fn new(sinks: Vec<Box<dyn Write + Send>>) -> Result<Self> {
        Self::with_template(sinks, Template::default())
    }

    pub fn with_template(
        mut sinks: Vec<Box<dyn Write + Send>>,
        template: Template,
    ) -> Result<Self> {
        if sinks.is_empty() {
            return Err(LoggerError::config(
                "MultiWriterBackend",
                "no sinks supplied",
            ));
        }

        let template = Arc::new(RwLock::new(Arc::new(template)));
        let active_template = Arc::clone(&template);
        let metrics = Arc::new(StreamMetrics::new());
        let consumer_metrics = Arc::clone(&metrics);

        let stream = MessageStream::new(move |message: Message| {
            let template = active_template.read().clone();
            let line = render(&message, &template);
            let mut failed = false;
            for sink in sinks.iter_mut() {
                if let Err(e) = writeln!(sink, "{line}") {
                    failed = true;
                    let prior = consumer_metrics.record_write_failure();
                    if prior == 0 || (prior + 1).is_multiple_of(1000) {
                        eprintln!(
                            "[LOGGER ERROR] sink write failed ({} so far): {}",
                            prior + 1,
                            e
                        );
                    }
                }
            }
            if !failed {
                consumer_metrics.record_delivered();
            }
        });

        Ok(Self {
            stream,
            template,
            metrics,
        })
    }

    /// Replace the active rendering template.
    pub fn set_template(&self, template: Template) {
        *self.template.write() = Arc::new(template);
    }

    /// Block until every message written before this call has reached all
    /// sinks.
    pub fn flush(&self, timeout: Duration) -> Result<()> {
        self.stream.flush(timeout)
    }

    /// Drain the queue and stop the consumer thread.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        self.stream.shutdown(timeout)
    }

    pub fn metrics(&self) -> &StreamMetrics {
        &self.metrics
    }
}

impl Backend for MultiWriterBackend {
    fn write(&self, message: Message) {
        self.stream.enqueue(message);
    }
}
