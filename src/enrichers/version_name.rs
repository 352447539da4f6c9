// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::cached_enricher::{CachedEnricher, PropertyComputer};
use crate::error::EnrichError;
use crate::host::HostEnvironment;
use crate::value::Value;
use std::sync::Arc;

/**
Computes the `HostVersionName` property: a human-readable label for the
numeric host version, e.g. `"Host 2016"`.

Known versions map through a fixed table; versions below the table floor
render as `"Host < 2003"` and versions above the ceiling as `"Host > 2019"`.
When `include_bitness` is set the process bitness is appended,
space-separated: `"Host 2016 64-bit"`.

Unavailable until the host integration layer can report the version.
*/
#[derive(Debug)]
pub struct HostVersionName {
    environment: Arc<dyn HostEnvironment>,
    include_bitness: bool,
}

impl HostVersionName {
    /// The property name added to enriched log events.
    pub const PROPERTY_NAME: &'static str = "HostVersionName";

    pub fn new(environment: Arc<dyn HostEnvironment>, include_bitness: bool) -> Self {
        Self {
            environment,
            include_bitness,
        }
    }
}

fn version_label(version: i64) -> &'static str {
    match version {
        17 => "Host 2019", // Office-generation 17.0
        16 => "Host 2016", // 16.0
        15 => "Host 2013", // 15.0
        14 => "Host 2010", // 14.0
        12 => "Host 2007", // 12.0
        11 => "Host 2003", // 11.0
        v if v < 11 => "Host < 2003",
        _ => "Host > 2019",
    }
}

impl PropertyComputer for HostVersionName {
    fn property_name(&self) -> &'static str {
        Self::PROPERTY_NAME
    }

    fn compute(&self) -> Result<Value, EnrichError> {
        let label = version_label(self.environment.version()?);
        let name = if self.include_bitness {
            format!("{} {}", label, self.environment.bitness())
        } else {
            label.to_string()
        };
        Ok(Value::String(name))
    }
}

/// Enriches log events with a `HostVersionName` property.
pub type HostVersionNameEnricher = CachedEnricher<HostVersionName>;

impl HostVersionNameEnricher {
    pub fn from_environment(environment: Arc<dyn HostEnvironment>, include_bitness: bool) -> Self {
        CachedEnricher::new(HostVersionName::new(environment, include_bitness))
    }
}
