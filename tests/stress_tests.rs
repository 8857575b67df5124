//! Stress tests for the delivery stream
//!
//! These tests verify:
//! - No message is lost, duplicated, or interleaved under heavy concurrent
//!   load
//! - Whole lines reach the sink even when many producers race
//! - Shutdown drains a large backlog

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use streamlog::prelude::*;

#[derive(Clone, Default)]
struct VecSink(Arc<Mutex<Vec<u8>>>);

impl VecSink {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }
}

impl Write for VecSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn unpaint(line: &str) -> &str {
    let start = line.find('m').map(|i| i + 1).unwrap_or(0);
    let end = line.rfind('\x1b').unwrap_or(line.len());
    line[start..end].trim()
}

#[test]
fn test_no_loss_or_duplication_under_load() {
    const PRODUCERS: usize = 8;
    const PER_PRODUCER: usize = 500;

    let sink = VecSink::default();
    let backend = Arc::new(WriterBackend::with_template(
        sink.clone(),
        Template::parse("{message}"),
    ));
    let logger = Arc::new(Logger::builder("stress").backend(backend.clone()).build());

    let handles: Vec<_> = (0..PRODUCERS)
        .map(|producer| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..PER_PRODUCER {
                    logger.info(format!("p{}-{}", producer, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    backend.flush(Duration::from_secs(30)).unwrap();

    let mut seen: Vec<String> = sink.lines().iter().map(|l| unpaint(l).to_string()).collect();
    assert_eq!(seen.len(), PRODUCERS * PER_PRODUCER);

    // Every expected message appears exactly once, no torn lines
    let mut expected: Vec<String> = (0..PRODUCERS)
        .flat_map(|p| (0..PER_PRODUCER).map(move |i| format!("p{}-{}", p, i)))
        .collect();
    seen.sort();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn test_painted_lines_never_interleave() {
    const PRODUCERS: usize = 4;
    const PER_PRODUCER: usize = 250;

    let sink = VecSink::default();
    let backend = Arc::new(WriterBackend::new(sink.clone()));
    let logger = Arc::new(Logger::builder("stress").backend(backend.clone()).build());

    let handles: Vec<_> = (0..PRODUCERS)
        .map(|producer| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..PER_PRODUCER {
                    logger.error(format!("p{} message {}", producer, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    backend.flush(Duration::from_secs(30)).unwrap();

    // A single consumer writes whole lines: every line carries exactly one
    // SGR prefix and one reset suffix
    for line in sink.lines() {
        assert!(line.starts_with("\x1b[37;41m"), "torn line: {:?}", line);
        assert!(line.ends_with("\x1b[0m"), "torn line: {:?}", line);
        assert_eq!(line.matches('\x1b').count(), 2, "interleaved line: {:?}", line);
    }
}

#[test]
fn test_shutdown_drains_large_backlog() {
    let sink = VecSink::default();
    let mut backend = WriterBackend::with_template(sink.clone(), Template::parse("{sequence}"));

    let table = LevelTable::default();
    for i in 0..10_000 {
        backend.write(Message::new(i, "stress", table.get("INFO"), "backlog"));
    }
    assert!(backend.shutdown(Duration::from_secs(30)));
    assert_eq!(sink.lines().len(), 10_000);
}

#[test]
fn test_many_loggers_one_backend() {
    const LOGGERS: usize = 6;
    const PER_LOGGER: usize = 200;

    let sink = VecSink::default();
    let backend = Arc::new(WriterBackend::with_template(
        sink.clone(),
        Template::parse("{prefix}:{sequence}"),
    ));

    let handles: Vec<_> = (0..LOGGERS)
        .map(|n| {
            let backend = Arc::clone(&backend);
            std::thread::spawn(move || {
                let logger = Logger::builder(format!("svc{}", n))
                    .backend(backend)
                    .build();
                for _ in 0..PER_LOGGER {
                    logger.info("m");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    backend.flush(Duration::from_secs(30)).unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), LOGGERS * PER_LOGGER);

    // Per-logger sequences are gap-free and in order even though the
    // backend is shared
    let mut next_sequence = vec![0u64; LOGGERS];
    for line in &lines {
        let text = unpaint(line);
        let (prefix, sequence) = text.split_once(':').expect("unexpected line shape");
        let n: usize = prefix.strip_prefix("svc").unwrap().parse().unwrap();
        let sequence: u64 = sequence.parse().unwrap();
        assert_eq!(sequence, next_sequence[n], "logger {} out of order", n);
        next_sequence[n] += 1;
    }
}
