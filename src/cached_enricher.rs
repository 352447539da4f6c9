// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cached, idempotent property computation.
//!
//! This module defines [`PropertyComputer`], a pure mapping from ambient
//! process/host state to one named value, and [`CachedEnricher`], which turns
//! a computer into an [`Enricher`] with single-slot memoization.
//!
//! # Caching model
//!
//! The facts in scope (bitness, host version, install path) are immutable for
//! the lifetime of the process, so each enricher instance computes its value
//! at most once and reuses the cached [`Property`] for every subsequent event.
//! The cache slot is a [`OnceLock`]; if several threads race the first
//! enrichment, at most one computed property is stored and every racer
//! observes that one.  Redundant computes in the race window are benign: the
//! computation is a deterministic function of immutable state, so every racer
//! produces an equal value.
//!
//! # Unavailability
//!
//! A computer may fail with [`EnrichError::Unavailable`] (host API not
//! initialized yet).  The enricher then skips the property for that event and
//! leaves the cache slot empty, so a later event retries once the fact
//! becomes readable.  Unavailability never propagates past the pipeline.
//!
//! # Example
//!
//! ```rust
//! use hostwise::{
//!     CachedEnricher, DefaultPropertyFactory, EnrichError, Enricher, Level, LogEvent,
//!     PropertyComputer, Value,
//! };
//!
//! #[derive(Debug)]
//! struct BuildChannel;
//!
//! impl PropertyComputer for BuildChannel {
//!     fn property_name(&self) -> &'static str {
//!         "BuildChannel"
//!     }
//!     fn compute(&self) -> Result<Value, EnrichError> {
//!         Ok(Value::from("stable"))
//!     }
//! }
//!
//! let enricher = CachedEnricher::new(BuildChannel);
//! let mut event = LogEvent::new(Level::Information, "started");
//! enricher.enrich(&mut event, &DefaultPropertyFactory);
//! assert_eq!(event.property("BuildChannel"), Some(&Value::from("stable")));
//! ```

use crate::enricher::Enricher;
use crate::error::EnrichError;
use crate::log_event::LogEvent;
use crate::property::{Property, PropertyFactory};
use crate::value::Value;
use std::fmt::Debug;
use std::sync::OnceLock;

/**
A pure function from ambient process/host state to a single named value.

Implementations must be cheap, deterministic within a process lifetime, and
must signal [`EnrichError::Unavailable`] rather than panicking when the
backing host state cannot be read.
*/
pub trait PropertyComputer: Debug + Send + Sync {
    /// The property name this computer produces, e.g. `"HostBitness"`.
    fn property_name(&self) -> &'static str;

    /// Computes the value from ambient state.
    fn compute(&self) -> Result<Value, EnrichError>;
}

/**
Wraps a [`PropertyComputer`] into an [`Enricher`] with single-slot memoization.

Once a value has been computed and stored, this instance attaches the
identical property to every subsequent event for the lifetime of the process,
even if the underlying environment could theoretically change.  Environment
facts are treated as immutable per process.
*/
#[derive(Debug)]
pub struct CachedEnricher<C> {
    computer: C,
    cached: OnceLock<Property>,
}

impl<C: PropertyComputer> CachedEnricher<C> {
    pub fn new(computer: C) -> Self {
        Self {
            computer,
            cached: OnceLock::new(),
        }
    }

    /// The property this instance has computed and cached, if any.
    pub fn cached_property(&self) -> Option<&Property> {
        self.cached.get()
    }

    fn compute_property(&self, factory: &dyn PropertyFactory) -> Option<Property> {
        let value = match self.computer.compute() {
            Ok(value) => value,
            // Fact not readable yet; omit the property for this event and
            // leave the slot empty so a later event can retry.
            Err(EnrichError::Unavailable { .. }) => return None,
        };
        // Computer names are compile-time constants, so factory validation
        // only fails for a user-defined computer with a malformed name.  The
        // pipeline must never abort logging, so that mistake also degrades to
        // an omitted property.
        factory.create_property(self.computer.property_name(), value).ok()
    }
}

impl<C: PropertyComputer> Enricher for CachedEnricher<C> {
    fn enrich(&self, event: &mut LogEvent, factory: &dyn PropertyFactory) {
        let property = match self.cached.get() {
            Some(cached) => cached,
            None => {
                let Some(computed) = self.compute_property(factory) else {
                    return;
                };
                // First write wins under a race; every racer computed an
                // equal value, so the losers' work is discarded harmlessly.
                self.cached.get_or_init(|| computed)
            }
        };
        event.add_property_if_absent(property.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::property::DefaultPropertyFactory;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts how many times compute runs; optionally fails the first N calls.
    #[derive(Debug)]
    struct CountingComputer {
        computes: AtomicUsize,
        fail_first: usize,
    }

    impl CountingComputer {
        fn new() -> Self {
            Self {
                computes: AtomicUsize::new(0),
                fail_first: 0,
            }
        }

        fn failing_first(n: usize) -> Self {
            Self {
                computes: AtomicUsize::new(0),
                fail_first: n,
            }
        }
    }

    impl PropertyComputer for CountingComputer {
        fn property_name(&self) -> &'static str {
            "Count"
        }

        fn compute(&self) -> Result<Value, EnrichError> {
            let call = self.computes.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_first {
                return Err(EnrichError::unavailable("count"));
            }
            Ok(Value::from("computed"))
        }
    }

    #[test]
    fn test_computes_once_across_events() {
        let enricher = CachedEnricher::new(CountingComputer::new());
        let factory = DefaultPropertyFactory;
        for _ in 0..10 {
            let mut event = LogEvent::new(Level::Information, "msg");
            enricher.enrich(&mut event, &factory);
            assert_eq!(event.property("Count"), Some(&Value::from("computed")));
        }
        assert_eq!(enricher.computer.computes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_does_not_overwrite_existing_property() {
        let enricher = CachedEnricher::new(CountingComputer::new());
        let mut event = LogEvent::new(Level::Information, "msg");
        event.add_property_if_absent(Property::new("Count", "call-site").unwrap());
        enricher.enrich(&mut event, &DefaultPropertyFactory);
        assert_eq!(event.property("Count"), Some(&Value::from("call-site")));
    }

    #[test]
    fn test_unavailable_omits_property_then_retries() {
        let enricher = CachedEnricher::new(CountingComputer::failing_first(1));
        let factory = DefaultPropertyFactory;

        let mut first = LogEvent::new(Level::Information, "msg");
        enricher.enrich(&mut first, &factory);
        assert_eq!(first.property("Count"), None);
        assert!(enricher.cached_property().is_none());

        // The fact became readable; the next event gets the property.
        let mut second = LogEvent::new(Level::Information, "msg");
        enricher.enrich(&mut second, &factory);
        assert_eq!(second.property("Count"), Some(&Value::from("computed")));
    }

    #[test]
    fn test_concurrent_first_enrichment_yields_single_value() {
        use std::thread;

        let enricher = Arc::new(CachedEnricher::new(CountingComputer::new()));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let enricher = enricher.clone();
            handles.push(thread::spawn(move || {
                let mut event = LogEvent::new(Level::Information, "msg");
                enricher.enrich(&mut event, &DefaultPropertyFactory);
                event.property("Count").cloned()
            }));
        }
        for handle in handles {
            let observed = handle.join().expect("enriching thread panicked");
            assert_eq!(observed, Some(Value::from("computed")));
        }
        // Redundant computes in the race window are fine; a torn or partial
        // store would have shown up as a non-equal observed value above.
        assert_eq!(
            enricher.cached_property().unwrap().value(),
            &Value::from("computed")
        );
    }
}
