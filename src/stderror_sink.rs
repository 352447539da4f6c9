// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_event::LogEvent;
use crate::sink::Sink;

/**
A reference sink that writes events to stderr.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StdErrorSink {}

impl StdErrorSink {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Sink for StdErrorSink {
    fn finish_log_event(&self, event: LogEvent) {
        use std::io::Write;
        let mut lock = std::io::stderr().lock();
        writeln!(lock, "{}", event).expect("Can't log to stderr");
    }

    fn finish_log_event_async<'s>(
        &'s self,
        event: LogEvent,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + 's>> {
        Box::pin(async move { self.finish_log_event(event) })
    }

    fn prepare_to_die(&self) {
        //nothing to do since we are unbuffered
    }
}
