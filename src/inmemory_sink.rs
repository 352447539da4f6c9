// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! This module provides an in-memory sink for testing and debugging purposes.
//! The [`InMemorySink`] captures enriched events in memory rather than writing
//! them to stderr or other outputs, making it ideal for:
//!
//! - Unit testing code that emits through a hostwise [`Logger`](crate::Logger)
//! - Asserting on the properties that enrichment attached
//! - Capturing logs in environments where stderr is redirected or unavailable
//!
//! ## Architecture
//!
//! The sink stores whole [`LogEvent`]s behind a mutex rather than pre-rendered
//! strings, so tests can assert on individual properties instead of parsing
//! output text.

use crate::log_event::LogEvent;
use crate::sink::Sink;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

/**
A sink that stores enriched events in memory.

Thread-safe; share it across threads with `Arc`.  All operations on the
internal buffer are protected by a mutex.

# Example

```rust
use hostwise::{InMemorySink, LoggerConfiguration};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let logger = LoggerConfiguration::new()
    .write_to_shared(sink.clone())
    .create_logger();

logger.information("captured in memory");

let events = sink.recorded_events();
assert_eq!(events.len(), 1);
assert_eq!(events[0].message(), "captured in memory");
```
*/
#[derive(Debug, Default)]
pub struct InMemorySink {
    events: Mutex<Vec<LogEvent>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// A snapshot of all events captured so far, in arrival order.
    pub fn recorded_events(&self) -> Vec<LogEvent> {
        self.events.lock().unwrap().clone()
    }

    /**
    Drains all events into a single rendered string, clearing the internal
    buffer.  Events are rendered with their [`Display`](std::fmt::Display)
    implementation and joined by newlines.
    */
    pub fn drain_logs(&self) -> String {
        let mut events = self.events.lock().unwrap();
        let result = events
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        events.clear();
        result
    }
}

impl Sink for InMemorySink {
    fn finish_log_event(&self, event: LogEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn finish_log_event_async<'s>(
        &'s self,
        event: LogEvent,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 's>> {
        // Simple async wrapper around the synchronous implementation
        Box::pin(async move {
            self.finish_log_event(event);
        })
    }

    fn prepare_to_die(&self) {
        // No-op since we're storing in memory, no flushing needed
    }
}

// Boilerplate notes: Clone is NOT implemented (the buffer is the sink's
// identity; duplicating it would fork captured history).  PartialEq/Eq/Hash
// are not meaningful for a mutex-guarded buffer.  Default mirrors new().

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn test_records_and_drains() {
        let sink = InMemorySink::new();
        sink.finish_log_event(LogEvent::new(Level::Information, "first"));
        sink.finish_log_event(LogEvent::new(Level::Warning, "second"));

        assert_eq!(sink.recorded_events().len(), 2);

        let drained = sink.drain_logs();
        assert!(drained.contains("first"));
        assert!(drained.contains("second"));

        // Buffer is now empty
        assert_eq!(sink.drain_logs(), "");
    }

    #[test_executors::async_test]
    async fn test_async_path_matches_sync() {
        let sink = InMemorySink::new();
        sink.finish_log_event_async(LogEvent::new(Level::Debug, "via async"))
            .await;
        let events = sink.recorded_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message(), "via async");
    }
}
