//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# hostwise

hostwise attaches host-environment metadata to structured log events.

# Development status

hostwise is experimental and the API may change.

# The problem

Code that runs inside a host application (a spreadsheet add-in, a plugin, an
embedded scripting runtime) produces logs that are useless without context:
*which* host, *which* version, 32-bit or 64-bit?  Asking every call site to
attach those facts is repetitive and error-prone, and the facts are ambient
anyway: they describe the process, not the call site.

hostwise solves this with *enrichers*: small components registered into a
logger at configuration time that attach computed properties to every event
on its way to output.  Because the facts in scope are immutable for the
lifetime of the process, each enricher computes its value at most once and
caches it.

# The API

```rust
use hostwise::{Bitness, Level, LoggerConfiguration, StaticEnvironment, StdErrorSink};
use std::sync::Arc;

let environment = Arc::new(
    StaticEnvironment::new(Bitness::X64)
        .with_version(16)
        .with_install_path("/opt/host/addin.xll"),
);

let logger = LoggerConfiguration::new()
    .minimum_level(Level::Verbose)
    .host_environment(environment)
    .enrich_with_host_path()
    .enrich_with_host_version()
    .enrich_with_host_version_name(true)
    .enrich_with_host_bitness()
    .write_to(StdErrorSink::new())
    .create_logger();

logger.information("Hello from the add-in!");
// … at shutdown:
logger.close_and_flush();
```

Four enrichers ship with the crate: `HostPath`, `HostVersion`,
`HostVersionName` (e.g. `"Host 2016 64-bit"`), and `HostBitness`.  Custom
enrichers implement the one-method [`Enricher`] trait, or implement
[`PropertyComputer`] and wrap it in [`CachedEnricher`] to get the caching for
free.

# Precedence

Enrichment is strictly *add-if-absent*.  A property the call site attached
itself is never overwritten by an enricher, and when two registered enrichers
collide on a property name, the first one registered wins.

# Unavailability

A host fact may be unreadable early in startup (the host API is not
initialized yet).  Enrichment then simply omits that property from the event;
it never fails logging.  The cache stays empty, so a later event picks the
property up once the fact becomes readable.

# Multithreading

One logger — and every enricher inside it — may be shared across all emitting
threads.  The memoization slot in [`CachedEnricher`] is safe under concurrent
first calls: the computations are deterministic functions of immutable
process state, so a racing redundant compute is benign and at most one result
is stored.
*/

mod cached_enricher;
mod configuration;
mod enricher;
pub mod enrichers;
mod error;
mod host;
mod inmemory_sink;
mod level;
mod log_event;
mod logger;
mod pipeline;
mod property;
mod sink;
mod stderror_sink;
mod value;

pub use cached_enricher::{CachedEnricher, PropertyComputer};
pub use configuration::LoggerConfiguration;
pub use enricher::Enricher;
pub use error::{ConfigError, EnrichError};
pub use host::{Bitness, HostEnvironment, ProcessEnvironment, StaticEnvironment};
pub use inmemory_sink::InMemorySink;
pub use level::Level;
pub use log_event::LogEvent;
pub use logger::Logger;
pub use pipeline::EnrichmentPipeline;
pub use property::{DefaultPropertyFactory, Property, PropertyFactory};
pub use sink::Sink;
pub use stderror_sink::StdErrorSink;
pub use value::Value;
