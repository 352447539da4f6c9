// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::cached_enricher::{CachedEnricher, PropertyComputer};
use crate::error::EnrichError;
use crate::host::HostEnvironment;
use crate::value::Value;
use std::sync::Arc;

/**
Computes the `HostVersion` property: the raw numeric host-application
version, forwarded verbatim from the environment.

Unavailable until the host integration layer can report the version.
*/
#[derive(Debug)]
pub struct HostVersion {
    environment: Arc<dyn HostEnvironment>,
}

impl HostVersion {
    /// The property name added to enriched log events.
    pub const PROPERTY_NAME: &'static str = "HostVersion";

    pub fn new(environment: Arc<dyn HostEnvironment>) -> Self {
        Self { environment }
    }
}

impl PropertyComputer for HostVersion {
    fn property_name(&self) -> &'static str {
        Self::PROPERTY_NAME
    }

    fn compute(&self) -> Result<Value, EnrichError> {
        Ok(Value::Integer(self.environment.version()?))
    }
}

/// Enriches log events with a `HostVersion` property.
pub type HostVersionEnricher = CachedEnricher<HostVersion>;

impl HostVersionEnricher {
    pub fn from_environment(environment: Arc<dyn HostEnvironment>) -> Self {
        CachedEnricher::new(HostVersion::new(environment))
    }
}
