// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fluent logger configuration: the registry half of the enrichment pipeline.
//!
//! [`LoggerConfiguration`] is a by-value builder; every method consumes and
//! returns the configuration so calls chain.  Registration order is
//! preserved into the finalized pipeline, which matters under accidental
//! property-name collisions: enrichment is add-if-absent, so the
//! first-registered enricher wins.
//!
//! The four `enrich_with_host_*` convenience methods mirror the built-in
//! enricher kinds.  They capture the configuration's current host
//! environment, so set [`host_environment`](LoggerConfiguration::host_environment)
//! before calling them; with no environment configured they fall back to
//! [`ProcessEnvironment`], which knows bitness but reports version and path
//! unavailable.
//!
//! # Example
//!
//! ```rust
//! use hostwise::{Bitness, InMemorySink, LoggerConfiguration, StaticEnvironment, Value};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemorySink::new());
//! let logger = LoggerConfiguration::new()
//!     .host_environment(Arc::new(StaticEnvironment::new(Bitness::X64).with_version(17)))
//!     .enrich_with_host_version_name(false)
//!     .enrich_with_host_bitness()
//!     .write_to_shared(sink.clone())
//!     .create_logger();
//!
//! logger.information("configured");
//!
//! let event = &sink.recorded_events()[0];
//! assert_eq!(event.property("HostVersionName"), Some(&Value::from("Host 2019")));
//! assert_eq!(event.property("HostBitness"), Some(&Value::from("64-bit")));
//! ```

use crate::enricher::Enricher;
use crate::enrichers::{
    HostBitnessEnricher, HostPathEnricher, HostVersionEnricher, HostVersionNameEnricher,
};
use crate::host::{HostEnvironment, ProcessEnvironment};
use crate::level::Level;
use crate::logger::Logger;
use crate::pipeline::EnrichmentPipeline;
use crate::property::{DefaultPropertyFactory, PropertyFactory};
use crate::sink::Sink;
use std::sync::Arc;

/**
Builds a [`Logger`] from enrichers, sinks, a level filter, and the host
environment the built-in enrichers read from.
*/
#[derive(Debug)]
pub struct LoggerConfiguration {
    minimum_level: Level,
    environment: Arc<dyn HostEnvironment>,
    factory: Arc<dyn PropertyFactory>,
    enrichers: Vec<Arc<dyn Enricher>>,
    sinks: Vec<Arc<dyn Sink>>,
}

impl Default for LoggerConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerConfiguration {
    pub fn new() -> Self {
        Self {
            minimum_level: Level::Information,
            environment: Arc::new(ProcessEnvironment::new()),
            factory: Arc::new(DefaultPropertyFactory::new()),
            enrichers: Vec::new(),
            sinks: Vec::new(),
        }
    }

    /// Events below this level are dropped before enrichment.
    pub fn minimum_level(mut self, level: Level) -> Self {
        self.minimum_level = level;
        self
    }

    /**
    The host environment the built-in enrichers read from.

    Set this before the `enrich_with_host_*` methods; enrichers registered
    earlier keep whatever environment was current when they were registered.
    */
    pub fn host_environment(mut self, environment: Arc<dyn HostEnvironment>) -> Self {
        self.environment = environment;
        self
    }

    /// Interposes a custom property factory; the default delegates to
    /// [`Property::new`](crate::Property::new).
    pub fn property_factory(mut self, factory: Arc<dyn PropertyFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// Registers an enricher.  Order of registration is preserved.
    pub fn enrich_with(mut self, enricher: impl Enricher + 'static) -> Self {
        self.enrichers.push(Arc::new(enricher));
        self
    }

    /// Registers an already-shared enricher.
    pub fn enrich_with_shared(mut self, enricher: Arc<dyn Enricher>) -> Self {
        self.enrichers.push(enricher);
        self
    }

    /// Enrich log events with a `HostPath` property containing the host
    /// installation path.
    pub fn enrich_with_host_path(self) -> Self {
        let enricher = HostPathEnricher::from_environment(self.environment.clone());
        self.enrich_with(enricher)
    }

    /// Enrich log events with a `HostVersion` property containing the raw
    /// numeric host version.
    pub fn enrich_with_host_version(self) -> Self {
        let enricher = HostVersionEnricher::from_environment(self.environment.clone());
        self.enrich_with(enricher)
    }

    /// Enrich log events with a `HostVersionName` property containing a
    /// human-readable host version, e.g. `"Host 2016"`.  With
    /// `include_bitness` the process bitness is appended: `"Host 2016 64-bit"`.
    pub fn enrich_with_host_version_name(self, include_bitness: bool) -> Self {
        let enricher =
            HostVersionNameEnricher::from_environment(self.environment.clone(), include_bitness);
        self.enrich_with(enricher)
    }

    /// Enrich log events with a `HostBitness` property, `"32-bit"` or
    /// `"64-bit"`.
    pub fn enrich_with_host_bitness(self) -> Self {
        let enricher = HostBitnessEnricher::from_environment(self.environment.clone());
        self.enrich_with(enricher)
    }

    /// Registers a sink.  Every emitted event reaching the sinks is delivered
    /// to all of them, in registration order.
    pub fn write_to(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Registers an already-shared sink.
    pub fn write_to_shared(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /**
    Finalizes the configuration into an owned [`Logger`].

    The registered enrichers become the logger's ordered enrichment pipeline;
    they live until the logger is dropped.
    */
    pub fn create_logger(self) -> Logger {
        let pipeline = EnrichmentPipeline::new(self.enrichers, self.factory);
        Logger::new(self.minimum_level, pipeline, self.sinks)
    }
}
