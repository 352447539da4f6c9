// SPDX-License-Identifier: MIT OR Apache-2.0

//! The finalized enrichment pipeline: an ordered sequence of enrichers bound
//! to a property factory.
//!
//! Built by [`LoggerConfiguration`](crate::LoggerConfiguration); applied on
//! the emit path to every event that passes the level filter.  Enrichers run
//! in registration order for a single event; no ordering exists across
//! concurrent events on different threads.  Because enrichment is
//! add-if-absent, registration order decides which property wins when two
//! enrichers collide on a name: the first one registered.

use crate::enricher::Enricher;
use crate::log_event::LogEvent;
use crate::property::PropertyFactory;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct EnrichmentPipeline {
    enrichers: Vec<Arc<dyn Enricher>>,
    factory: Arc<dyn PropertyFactory>,
}

impl EnrichmentPipeline {
    pub fn new(enrichers: Vec<Arc<dyn Enricher>>, factory: Arc<dyn PropertyFactory>) -> Self {
        Self { enrichers, factory }
    }

    /**
    Runs every enricher over the event, in registration order.

    Synchronous and non-blocking; invoked on whatever thread emits the event.
    */
    pub fn enrich(&self, event: &mut LogEvent) {
        for enricher in &self.enrichers {
            enricher.enrich(event, self.factory.as_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.enrichers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enrichers.is_empty()
    }
}
