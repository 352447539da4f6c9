// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for the hostwise enrichment system.
//!
//! Two failure classes exist and they propagate differently:
//!
//! - [`ConfigError`] is raised immediately to the caller of the configuration
//!   API.  Configuration mistakes must be visible at setup time, not silently
//!   ignored.
//! - [`EnrichError`] occurs on the per-event enrichment path and is swallowed
//!   there: the affected property is omitted from that event.  Enriching a log
//!   event must never abort logging, so nothing on that path escalates.

use thiserror::Error;

/// A failure raised at logger-configuration time.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A property name was empty or otherwise not a valid token.
    #[error("invalid property name: {0:?}")]
    InvalidPropertyName(String),
}

/// A failure on the per-event enrichment path.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnrichError {
    /// The ambient host fact cannot be read right now, e.g. the host
    /// integration layer has not been initialized yet.  Callers omit the
    /// property rather than failing the event.
    #[error("host fact `{fact}` is unavailable")]
    Unavailable {
        /// Which fact could not be read.
        fact: &'static str,
    },
}

impl EnrichError {
    pub fn unavailable(fact: &'static str) -> Self {
        EnrichError::Unavailable { fact }
    }
}
