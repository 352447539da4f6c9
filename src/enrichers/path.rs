// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::cached_enricher::{CachedEnricher, PropertyComputer};
use crate::error::EnrichError;
use crate::host::HostEnvironment;
use crate::value::Value;
use std::sync::Arc;

/**
Computes the `HostPath` property: the host-application installation path,
forwarded verbatim from the environment.

Unavailable until the host integration layer can report the path.
*/
#[derive(Debug)]
pub struct HostPath {
    environment: Arc<dyn HostEnvironment>,
}

impl HostPath {
    /// The property name added to enriched log events.
    pub const PROPERTY_NAME: &'static str = "HostPath";

    pub fn new(environment: Arc<dyn HostEnvironment>) -> Self {
        Self { environment }
    }
}

impl PropertyComputer for HostPath {
    fn property_name(&self) -> &'static str {
        Self::PROPERTY_NAME
    }

    fn compute(&self) -> Result<Value, EnrichError> {
        Ok(Value::String(self.environment.install_path()?))
    }
}

/// Enriches log events with a `HostPath` property.
pub type HostPathEnricher = CachedEnricher<HostPath>;

impl HostPathEnricher {
    pub fn from_environment(environment: Arc<dyn HostEnvironment>) -> Self {
        CachedEnricher::new(HostPath::new(environment))
    }
}
