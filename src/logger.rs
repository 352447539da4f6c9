// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logger: an explicitly owned object binding a level filter, an
//! enrichment pipeline, and a set of sinks.
//!
//! Deliberately not a process-wide global.  The embedding application
//! constructs one at startup via [`LoggerConfiguration`](crate::LoggerConfiguration),
//! holds it (or shares it with `Arc`) wherever logging happens, and calls
//! [`Logger::close_and_flush`] at shutdown.  Keeping the logger an explicit
//! value keeps the enrichment core testable in isolation: a test builds its
//! own logger over an [`InMemorySink`](crate::InMemorySink) without touching
//! shared state.
//!
//! # Example
//!
//! ```rust
//! use hostwise::{Bitness, Level, LoggerConfiguration, StaticEnvironment, StdErrorSink};
//! use std::sync::Arc;
//!
//! let environment = Arc::new(
//!     StaticEnvironment::new(Bitness::X64)
//!         .with_version(16)
//!         .with_install_path("/opt/host/addin.xll"),
//! );
//!
//! let logger = LoggerConfiguration::new()
//!     .minimum_level(Level::Verbose)
//!     .host_environment(environment)
//!     .enrich_with_host_path()
//!     .enrich_with_host_version()
//!     .enrich_with_host_version_name(true)
//!     .enrich_with_host_bitness()
//!     .write_to(StdErrorSink::new())
//!     .create_logger();
//!
//! logger.information("Hello from the add-in!");
//! logger.close_and_flush();
//! ```

use crate::level::Level;
use crate::log_event::LogEvent;
use crate::pipeline::EnrichmentPipeline;
use crate::sink::Sink;
use std::sync::Arc;

/**
An owned logger configuration: level filter, enrichment pipeline, sinks.

Constructed once at configuration time and kept for the process/logger
lifetime; the enrichers inside live exactly as long as the logger does.
*/
#[derive(Debug)]
pub struct Logger {
    minimum_level: Level,
    pipeline: EnrichmentPipeline,
    sinks: Vec<Arc<dyn Sink>>,
}

impl Logger {
    pub(crate) fn new(
        minimum_level: Level,
        pipeline: EnrichmentPipeline,
        sinks: Vec<Arc<dyn Sink>>,
    ) -> Self {
        Self {
            minimum_level,
            pipeline,
            sinks,
        }
    }

    /**
    Emits a pre-built event: level filter, then enrichment, then fan-out to
    every sink in registration order.

    Events below the minimum level are dropped before enrichment runs.
    */
    pub fn emit(&self, mut event: LogEvent) {
        if event.level() < self.minimum_level {
            return;
        }
        self.pipeline.enrich(&mut event);
        // The last sink takes the event by move; earlier sinks get clones.
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.finish_log_event(event.clone());
            }
            last.finish_log_event(event);
        }
    }

    pub fn verbose(&self, message: impl Into<String>) {
        self.emit(LogEvent::new(Level::Verbose, message));
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.emit(LogEvent::new(Level::Debug, message));
    }

    pub fn information(&self, message: impl Into<String>) {
        self.emit(LogEvent::new(Level::Information, message));
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.emit(LogEvent::new(Level::Warning, message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.emit(LogEvent::new(Level::Error, message));
    }

    pub fn fatal(&self, message: impl Into<String>) {
        self.emit(LogEvent::new(Level::Fatal, message));
    }

    pub fn minimum_level(&self) -> Level {
        self.minimum_level
    }

    /// The number of enrichers bound to this logger.
    pub fn enricher_count(&self) -> usize {
        self.pipeline.len()
    }

    /**
    The application may imminently exit.  Tells every sink to flush.
    */
    pub fn close_and_flush(&self) {
        for sink in &self.sinks {
            sink.prepare_to_die();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::LoggerConfiguration;
    use crate::inmemory_sink::InMemorySink;

    #[test]
    fn test_minimum_level_filters_before_sinks() {
        let sink = Arc::new(InMemorySink::new());
        let logger = LoggerConfiguration::new()
            .minimum_level(Level::Warning)
            .write_to_shared(sink.clone())
            .create_logger();

        logger.information("dropped");
        logger.warning("kept");
        logger.fatal("also kept");

        let events = sink.recorded_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message(), "kept");
        assert_eq!(events[1].message(), "also kept");
    }

    #[test]
    fn test_fan_out_to_multiple_sinks() {
        let sink1 = Arc::new(InMemorySink::new());
        let sink2 = Arc::new(InMemorySink::new());
        let logger = LoggerConfiguration::new()
            .write_to_shared(sink1.clone())
            .write_to_shared(sink2.clone())
            .create_logger();

        logger.information("both");

        assert_eq!(sink1.recorded_events().len(), 1);
        assert_eq!(sink2.recorded_events().len(), 1);
    }

    #[test]
    fn test_zero_sinks_is_harmless() {
        let logger = LoggerConfiguration::new().create_logger();
        logger.information("nowhere to go");
        logger.close_and_flush();
    }
}
