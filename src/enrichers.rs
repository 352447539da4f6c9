// SPDX-License-Identifier: MIT OR Apache-2.0

//! The built-in host-environment enrichers.
//!
//! Four enrichers ship with the crate, each a [`CachedEnricher`] around one
//! [`PropertyComputer`] reading through the [`HostEnvironment`] boundary:
//!
//! - [`HostPathEnricher`]: `HostPath`, the host-application installation path
//! - [`HostVersionEnricher`]: `HostVersion`, the raw numeric host version
//! - [`HostVersionNameEnricher`]: `HostVersionName`, a human-readable label
//!   such as `"Host 2016"`, optionally suffixed with the process bitness
//! - [`HostBitnessEnricher`]: `HostBitness`, `"32-bit"` or `"64-bit"`
//!
//! Path and raw version are verbatim passthroughs of what the environment
//! exposes; bitness and version name involve the only real computation.
//! All four are registered most conveniently through the
//! [`LoggerConfiguration`](crate::LoggerConfiguration) methods, but can be
//! constructed directly for use in a custom pipeline:
//!
//! ```rust
//! use hostwise::enrichers::HostBitnessEnricher;
//! use hostwise::{Bitness, DefaultPropertyFactory, Enricher, Level, LogEvent, StaticEnvironment, Value};
//! use std::sync::Arc;
//!
//! let env = Arc::new(StaticEnvironment::new(Bitness::X64));
//! let enricher = HostBitnessEnricher::from_environment(env);
//!
//! let mut event = LogEvent::new(Level::Information, "ready");
//! enricher.enrich(&mut event, &DefaultPropertyFactory);
//! assert_eq!(event.property("HostBitness"), Some(&Value::from("64-bit")));
//! ```
//!
//! [`CachedEnricher`]: crate::CachedEnricher
//! [`PropertyComputer`]: crate::PropertyComputer
//! [`HostEnvironment`]: crate::HostEnvironment

mod bitness;
mod path;
mod version;
mod version_name;


pub use bitness::{HostBitness, HostBitnessEnricher};
pub use path::{HostPath, HostPathEnricher};
pub use version::{HostVersion, HostVersionEnricher};
pub use version_name::{HostVersionName, HostVersionNameEnricher};
