// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::cached_enricher::{CachedEnricher, PropertyComputer};
use crate::error::EnrichError;
use crate::host::HostEnvironment;
use crate::value::Value;
use std::sync::Arc;

/**
Computes the `HostBitness` property: `"64-bit"` when the process runs as a
64-bit process, else `"32-bit"`.

A pure function of the process architecture; bitness is always available.
*/
#[derive(Debug)]
pub struct HostBitness {
    environment: Arc<dyn HostEnvironment>,
}

impl HostBitness {
    /// The property name added to enriched log events.
    pub const PROPERTY_NAME: &'static str = "HostBitness";

    pub fn new(environment: Arc<dyn HostEnvironment>) -> Self {
        Self { environment }
    }
}

impl PropertyComputer for HostBitness {
    fn property_name(&self) -> &'static str {
        Self::PROPERTY_NAME
    }

    fn compute(&self) -> Result<Value, EnrichError> {
        Ok(Value::String(self.environment.bitness().to_string()))
    }
}

/// Enriches log events with a `HostBitness` property.
pub type HostBitnessEnricher = CachedEnricher<HostBitness>;

impl HostBitnessEnricher {
    pub fn from_environment(environment: Arc<dyn HostEnvironment>) -> Self {
        CachedEnricher::new(HostBitness::new(environment))
    }
}
