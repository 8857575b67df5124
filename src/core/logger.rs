//! Logger façade

use super::level::{self, LevelTable};
use super::message::Message;
use crate::backends::{Backend, WriterBackend};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A named log producer.
///
/// Each logger owns its prefix, its level table, a swappable backend
/// reference, and a per-instance sequence counter. Sequence assignment and
/// submission happen under the same lock, so the backend observes this
/// logger's sequences strictly increasing with no gaps — regardless of how
/// many threads share the logger.
pub struct Logger {
    prefix: String,
    levels: Arc<LevelTable>,
    backend: RwLock<Arc<dyn Backend>>,
    debug_enabled: AtomicBool,
    sequence: Mutex<u64>,
}

impl Logger {
    /// A logger with stock configuration: stdout backend, default level
    /// table and template, debug disabled.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::builder(prefix).build()
    }

    #[must_use]
    pub fn builder(prefix: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(prefix)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Replace the active backend. Messages already submitted stay with the
    /// backend that accepted them; everything logged after this call goes
    /// to the new one.
    pub fn set_backend(&self, backend: Arc<dyn Backend>) {
        *self.backend.write() = backend;
    }

    /// Gate DEBUG-level messages. When disabled (the default), a debug call
    /// returns before a message is even constructed.
    pub fn set_debug(&self, enabled: bool) {
        self.debug_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled.load(Ordering::Relaxed)
    }

    /// Submit a message at the named level.
    ///
    /// Unknown level names render with the INFO style. Never blocks on the
    /// sink and never reports failure; the backend contract is
    /// fire-and-forget.
    pub fn log(&self, level_name: &str, text: impl Into<String>) {
        if level_name == level::DEBUG && !self.debug_enabled() {
            return;
        }

        let level = self.levels.get(level_name);
        // Assignment and submission share one critical section so sequence
        // order equals submission order
        let mut sequence = self.sequence.lock();
        let message = Message::new(*sequence, self.prefix.clone(), level, text);
        *sequence += 1;
        self.backend.read().write(message);
    }

    #[inline]
    pub fn init(&self, text: impl Into<String>) {
        self.log(level::INIT, text);
    }

    #[inline]
    pub fn info(&self, text: impl Into<String>) {
        self.log(level::INFO, text);
    }

    #[inline]
    pub fn debug(&self, text: impl Into<String>) {
        self.log(level::DEBUG, text);
    }

    #[inline]
    pub fn warning(&self, text: impl Into<String>) {
        self.log(level::WARNING, text);
    }

    #[inline]
    pub fn error(&self, text: impl Into<String>) {
        self.log(level::ERROR, text);
    }

    #[inline]
    pub fn fatal(&self, text: impl Into<String>) {
        self.log(level::FATAL, text);
    }

    #[inline]
    pub fn success(&self, text: impl Into<String>) {
        self.log(level::SUCCESS, text);
    }
}

/// Builder for constructing a [`Logger`] with a fluent API.
///
/// Defaults come from here, not from process-wide mutable state: absent an
/// explicit backend, `build` creates a fresh [`WriterBackend`] over stdout.
///
/// # Example
/// ```no_run
/// use streamlog::prelude::*;
///
/// let logger = Logger::builder("api")
///     .debug(true)
///     .build();
/// logger.info("listening");
/// ```
pub struct LoggerBuilder {
    prefix: String,
    levels: Option<Arc<LevelTable>>,
    backend: Option<Arc<dyn Backend>>,
    debug_enabled: bool,
}

impl LoggerBuilder {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            levels: None,
            backend: None,
            debug_enabled: false,
        }
    }

    /// Use a custom level table instead of the stock one.
    #[must_use = "builder methods return a new value"]
    pub fn levels(mut self, levels: LevelTable) -> Self {
        self.levels = Some(Arc::new(levels));
        self
    }

    /// Share an existing level table between loggers.
    #[must_use = "builder methods return a new value"]
    pub fn shared_levels(mut self, levels: Arc<LevelTable>) -> Self {
        self.levels = Some(levels);
        self
    }

    /// Use the given backend instead of a fresh stdout writer.
    #[must_use = "builder methods return a new value"]
    pub fn backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Enable or disable DEBUG-level messages (disabled by default).
    #[must_use = "builder methods return a new value"]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    pub fn build(self) -> Logger {
        let backend = self
            .backend
            .unwrap_or_else(|| Arc::new(WriterBackend::new(std::io::stdout())));

        Logger {
            prefix: self.prefix,
            levels: self.levels.unwrap_or_default(),
            backend: RwLock::new(backend),
            debug_enabled: AtomicBool::new(self.debug_enabled),
            sequence: Mutex::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex as PlMutex;

    #[derive(Default)]
    struct RecordingBackend {
        messages: PlMutex<Vec<Message>>,
    }

    impl RecordingBackend {
        fn sequences(&self) -> Vec<u64> {
            self.messages.lock().iter().map(|m| m.sequence).collect()
        }
    }

    impl Backend for RecordingBackend {
        fn write(&self, message: Message) {
            self.messages.lock().push(message);
        }
    }

    #[test]
    fn test_sequences_are_gapless_and_increasing() {
        let backend = Arc::new(RecordingBackend::default());
        let logger = Logger::builder("svc").backend(backend.clone()).build();

        for _ in 0..10 {
            logger.info("m");
        }
        assert_eq!(backend.sequences(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_sequences_are_gapless_across_threads() {
        let backend = Arc::new(RecordingBackend::default());
        let logger = Arc::new(Logger::builder("svc").backend(backend.clone()).build());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        logger.info("m");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(backend.sequences(), (0..400).collect::<Vec<_>>());
    }

    #[test]
    fn test_debug_disabled_constructs_no_message() {
        let backend = Arc::new(RecordingBackend::default());
        let logger = Logger::builder("svc").backend(backend.clone()).build();

        logger.debug("dropped");
        assert!(backend.messages.lock().is_empty());

        logger.set_debug(true);
        logger.debug("kept");
        assert_eq!(backend.messages.lock().len(), 1);
    }

    #[test]
    fn test_debug_gating_leaves_no_sequence_gap() {
        let backend = Arc::new(RecordingBackend::default());
        let logger = Logger::builder("svc").backend(backend.clone()).build();

        logger.info("a");
        logger.debug("suppressed");
        logger.info("b");
        assert_eq!(backend.sequences(), vec![0, 1]);
    }

    #[test]
    fn test_unknown_level_uses_info_style() {
        let backend = Arc::new(RecordingBackend::default());
        let logger = Logger::builder("svc").backend(backend.clone()).build();

        logger.log("VERBOSE", "m");
        let messages = backend.messages.lock();
        assert_eq!(messages[0].level.name, "VERBOSE");
        assert_eq!(
            messages[0].level.foreground,
            LevelTable::default().get(level::INFO).foreground
        );
    }

    #[test]
    fn test_set_backend_routes_later_messages() {
        let first = Arc::new(RecordingBackend::default());
        let second = Arc::new(RecordingBackend::default());
        let logger = Logger::builder("svc").backend(first.clone()).build();

        logger.info("early");
        logger.set_backend(second.clone());
        logger.info("late");

        assert_eq!(first.sequences(), vec![0]);
        assert_eq!(second.sequences(), vec![1]);
    }
}
