//! Writer backend: one stream, one sink

use super::Backend;
use crate::core::error::Result;
use crate::core::message::Message;
use crate::core::metrics::StreamMetrics;
use crate::core::render::render;
use crate::core::stream::MessageStream;
use crate::core::template::Template;
use parking_lot::RwLock;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// A backend that renders messages and writes them, one line each, to a
/// single sink.
///
/// All I/O happens on the stream's consumer thread; `write` only enqueues.
/// The sink is moved into that thread and touched by it exclusively, which
/// is what makes an unsynchronized sink safe here.
pub struct WriterBackend {
    stream: MessageStream,
    template: Arc<RwLock<Arc<Template>>>,
    metrics: Arc<StreamMetrics>,
}

impl WriterBackend {
    /// Build a backend over `sink` with the default template.
    pub fn new<W: Write + Send + 'static>(sink: W) -> Self {
        Self::with_template(sink, Template::default())
    }

    pub fn with_template<W: Write + Send + 'static>(mut sink: W, template: Template) -> Self {
        // The template is swapped whole, so an in-flight render never sees
        // a half-updated one
        let template = Arc::new(RwLock::new(Arc::new(template)));
        let active_template = Arc::clone(&template);
        let metrics = Arc::new(StreamMetrics::new());
        let consumer_metrics = Arc::clone(&metrics);

        let stream = MessageStream::new(move |message: Message| {
            let template = active_template.read().clone();
            let line = render(&message, &template);
            match writeln!(sink, "{line}") {
                Ok(()) => consumer_metrics.record_delivered(),
                Err(e) => {
                    let prior = consumer_metrics.record_write_failure();
                    // Alert on the first failure and every 1000th after
                    if prior == 0 || (prior + 1).is_multiple_of(1000) {
                        eprintln!(
                            "[LOGGER ERROR] sink write failed ({} so far): {}",
                            prior + 1,
                            e
                        );
                    }
                }
            }
        });

        Self {
            stream,
            template,
            metrics,
        }
    }

    /// Replace the active rendering template. Messages already rendered
    /// keep their old shape; everything delivered afterwards uses the new
    /// one.
    pub fn set_template(&self, template: Template) {
        *self.template.write() = Arc::new(template);
    }

    /// Block until every message written before this call has reached the
    /// sink.
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

    /// Messages accepted but not yet handed to the consumer.
    pub fn pending(&self) -> usize {
        self.stream.pending()
    }
}

impl Backend for WriterBackend {
    fn write(&self, message: Message) {
        self.stream.enqueue(message);
    }
}
