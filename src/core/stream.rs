//! Ordered, unbounded message stream with a single consumer thread
//!
//! This is the concurrency core of the crate: any number of producers
//! enqueue concurrently, exactly one consumer thread drains in FIFO order
//! and invokes the delivery function one message at a time. Because the
//! delivery function is never run concurrently with itself, the sink behind
//! it needs no locking of its own.

use super::error::{LoggerError, Result};
use super::message::Message;
use crossbeam_channel::{bounded, unbounded, Sender};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;
use std::time::Duration;

/// Default drain timeout applied when a stream is dropped without an
/// explicit `shutdown()`.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

enum Command {
    Deliver(Message),
    Flush(Sender<()>),
}

/// An unbounded FIFO queue of messages drained by one dedicated thread.
///
/// The delivery function is fixed at construction; there is no way to swap
/// it afterwards. `enqueue` never blocks on the consumer: a slow sink grows
/// the queue instead of slowing producers, a deliberate latency/memory
/// trade-off.
pub struct MessageStream {
    sender: Option<Sender<Command>>,
    consumer: Option<thread::JoinHandle<()>>,
}

impl MessageStream {
    /// Spawn the consumer thread and return the stream handle.
    ///
    /// `deliver` runs on the consumer thread for every message, in enqueue
    /// order. A panic inside it drops that one message; the consumer keeps
    /// running.
    pub fn new<F>(deliver: F) -> Self
    where
        F: FnMut(Message) + Send + 'static,
    {
        let (sender, receiver) = unbounded::<Command>();

        let handle = thread::spawn(move || {
            let mut deliver = deliver;
            for command in receiver {
                match command {
                    Command::Deliver(message) => {
                        let outcome =
                            catch_unwind(AssertUnwindSafe(|| deliver(message)));
                        if outcome.is_err() {
                            eprintln!(
                                "[LOGGER CRITICAL] delivery function panicked; \
                                 message dropped, consumer continues"
                            );
                        }
                    }
                    // FIFO channel: everything enqueued before this token
                    // has already been delivered
                    Command::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });

        Self {
            sender: Some(sender),
            consumer: Some(handle),
        }
    }

    /// Append a message to the tail of the queue and return immediately.
    ///
    /// Safe under arbitrary concurrent callers; the only contention is the
    /// channel's internal critical section, never the sink. After shutdown
    /// the message is silently discarded — there is no caller to tell.
    pub fn enqueue(&self, message: Message) {
        if let Some(ref sender) = self.sender {
            let _ = sender.send(Command::Deliver(message));
        }
    }

    /// Number of messages enqueued but not yet handed to the consumer.
    pub fn pending(&self) -> usize {
        self.sender.as_ref().map_or(0, Sender::len)
    }

    /// Block until every message enqueued before this call has been
    /// delivered, or the timeout expires.
    pub fn flush(&self, timeout: Duration) -> Result<()> {
        let sender = self.sender.as_ref().ok_or(LoggerError::StreamStopped)?;
        let (ack_sender, ack_receiver) = bounded(1);
        sender
            .send(Command::Flush(ack_sender))
            .map_err(|_| LoggerError::StreamStopped)?;
        ack_receiver
            .recv_timeout(timeout)
            .map_err(|_| LoggerError::FlushTimeout { timeout })
    }

    /// Close the queue, let the consumer drain everything still pending,
    /// and join it.
    ///
    /// Returns `true` if the consumer finished within the timeout. After
    /// shutdown the stream accepts no further messages.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        // Closing the channel is the stop signal; the consumer exits once
        // the queue is drained
        drop(self.sender.take());

        if let Some(handle) = self.consumer.take() {
            let start = std::time::Instant::now();

            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!(
                            "[LOGGER ERROR] consumer thread panicked during shutdown: {:?}",
                            e
                        );
                        return false;
                    }
                    break;
                }

                if start.elapsed() >= timeout {
                    eprintln!(
                        "[LOGGER WARNING] consumer thread did not drain within {:?}. \
                         Some messages may be lost.",
                        timeout
                    );
                    return false;
                }

                // Avoid busy-waiting while the consumer drains
                thread::sleep(Duration::from_millis(10));
            }
        }

        true
    }
}

impl Drop for MessageStream {
    fn drop(&mut self) {
        if self.sender.is_some() || self.consumer.is_some() {
            self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
        }
    }
}
