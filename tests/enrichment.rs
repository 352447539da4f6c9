// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end enrichment behavior through the public API.

use hostwise::{
    Bitness, CachedEnricher, EnrichError, InMemorySink, Level, LogEvent, LoggerConfiguration,
    Property, PropertyComputer, StaticEnvironment, Value,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn environment() -> Arc<StaticEnvironment> {
    Arc::new(
        StaticEnvironment::new(Bitness::X64)
            .with_version(16)
            .with_install_path("/opt/host/addin.xll"),
    )
}

#[derive(Debug)]
struct Counting {
    name: &'static str,
    value: &'static str,
    computes: Arc<AtomicUsize>,
}

impl PropertyComputer for Counting {
    fn property_name(&self) -> &'static str {
        self.name
    }
    fn compute(&self) -> Result<Value, EnrichError> {
        self.computes.fetch_add(1, Ordering::SeqCst);
        Ok(Value::from(self.value))
    }
}

#[test]
fn test_cached_value_identical_across_many_events() {
    let computes = Arc::new(AtomicUsize::new(0));
    let sink = Arc::new(InMemorySink::new());
    let logger = LoggerConfiguration::new()
        .enrich_with(CachedEnricher::new(Counting {
            name: "Session",
            value: "abc123",
            computes: computes.clone(),
        }))
        .write_to_shared(sink.clone())
        .create_logger();

    for i in 0..25 {
        logger.information(format!("event {}", i));
    }

    let events = sink.recorded_events();
    assert_eq!(events.len(), 25);
    for event in &events {
        assert_eq!(event.property("Session"), Some(&Value::from("abc123")));
    }
    assert_eq!(computes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_call_site_property_beats_enrichment() {
    let sink = Arc::new(InMemorySink::new());
    let logger = LoggerConfiguration::new()
        .host_environment(environment())
        .enrich_with_host_bitness()
        .write_to_shared(sink.clone())
        .create_logger();

    let mut event = LogEvent::new(Level::Information, "explicit bitness");
    event.add_property_if_absent(Property::new("HostBitness", "call-site").unwrap());
    logger.emit(event);

    let events = sink.recorded_events();
    assert_eq!(
        events[0].property("HostBitness"),
        Some(&Value::from("call-site"))
    );
}

#[test]
fn test_first_registered_enricher_wins_collision() {
    let sink = Arc::new(InMemorySink::new());
    let logger = LoggerConfiguration::new()
        .enrich_with(CachedEnricher::new(Counting {
            name: "Dup",
            value: "from-a",
            computes: Arc::new(AtomicUsize::new(0)),
        }))
        .enrich_with(CachedEnricher::new(Counting {
            name: "Dup",
            value: "from-b",
            computes: Arc::new(AtomicUsize::new(0)),
        }))
        .write_to_shared(sink.clone())
        .create_logger();

    logger.information("collision");

    assert_eq!(
        sink.recorded_events()[0].property("Dup"),
        Some(&Value::from("from-a"))
    );
}

#[test]
fn test_full_host_enrichment_rendering() {
    let sink = Arc::new(InMemorySink::new());
    let logger = LoggerConfiguration::new()
        .host_environment(environment())
        .enrich_with_host_version_name(true)
        .write_to_shared(sink.clone())
        .create_logger();

    logger.information("render me");

    let rendered = sink.drain_logs();
    assert!(rendered.contains("[INF] render me"));
    assert!(rendered.contains("HostVersionName=Host 2016 64-bit"));
}

#[test]
fn test_unavailable_fact_never_fails_logging() {
    // Default ProcessEnvironment: version and path unavailable.
    let sink = Arc::new(InMemorySink::new());
    let logger = LoggerConfiguration::new()
        .enrich_with_host_path()
        .enrich_with_host_version()
        .enrich_with_host_bitness()
        .write_to_shared(sink.clone())
        .create_logger();

    logger.information("still logged");

    let events = sink.recorded_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].property("HostPath"), None);
    assert_eq!(events[0].property("HostVersion"), None);
    // Bitness is always known.
    assert!(events[0].property("HostBitness").is_some());
}
