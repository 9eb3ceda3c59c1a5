// Logging module - in-memory log capture for TUI mode
//
// A custom tracing layer stores events in a bounded ring buffer instead
// of writing to stdout, which would garble the alternate screen. Lesson
// progress and search failures are log-only by default, so the buffer is
// also where those errors end up.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Maximum number of entries retained
const CAPACITY: usize = 500;

/// One captured log event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Bounded, shareable ring buffer of log entries.
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(CAPACITY))),
        }
    }

    /// Append an entry, evicting the oldest when full.
    pub fn push(&self, entry: LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() >= CAPACITY {
            let _ = entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Snapshot of all entries, oldest first.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

/// Tracing layer that feeds the buffer.
pub struct BufferLayer {
    buffer: LogBuffer,
}

impl BufferLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for BufferLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));

        self.buffer.push(LogEntry {
            timestamp: Utc::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message,
        });
    }

    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Level filtering happens at the subscriber's EnvFilter
        true
    }
}

/// Extracts the `message` field from a tracing event.
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{:?}", value);
            // Strip the quotes Debug adds around string values
            if self.0.starts_with('"') && self.0.ends_with('"') && self.0.len() >= 2 {
                *self.0 = self.0[1..self.0.len() - 1].to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: Level::INFO,
            target: "ecolearn::test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_evicts_oldest_at_capacity() {
        let buffer = LogBuffer::new();
        for i in 0..CAPACITY + 10 {
            buffer.push(entry(&format!("entry {}", i)));
        }

        let entries = buffer.snapshot();
        assert_eq!(entries.len(), CAPACITY);
        assert_eq!(entries[0].message, "entry 10");
    }
}
