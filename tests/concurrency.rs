// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concurrent enrichment through a shared logger.

use hostwise::{
    Bitness, InMemorySink, Level, LoggerConfiguration, StaticEnvironment, Value,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_emission_observes_single_cached_value() {
    let environment = Arc::new(StaticEnvironment::new(Bitness::X64).with_version(17));
    let sink = Arc::new(InMemorySink::new());
    let logger = Arc::new(
        LoggerConfiguration::new()
            .minimum_level(Level::Verbose)
            .host_environment(environment)
            .enrich_with_host_version_name(true)
            .enrich_with_host_bitness()
            .write_to_shared(sink.clone())
            .create_logger(),
    );

    let mut handles = Vec::new();
    for t in 0..8 {
        let logger = logger.clone();
        handles.push(thread::spawn(move || {
            for i in 0..50 {
                logger.verbose(format!("thread {} event {}", t, i));
            }
        }));
    }
    for handle in handles {
        handle.join().expect("emitting thread panicked");
    }

    let events = sink.recorded_events();
    assert_eq!(events.len(), 8 * 50);
    // Every event, no matter which thread raced the first enrichment,
    // observes the same fully-written values.
    for event in &events {
        assert_eq!(
            event.property("HostVersionName"),
            Some(&Value::from("Host 2019 64-bit"))
        );
        assert_eq!(event.property("HostBitness"), Some(&Value::from("64-bit")));
    }
}
