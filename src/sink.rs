// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_event::LogEvent;
use std::fmt::Debug;

pub trait Sink: Debug + Send + Sync {
    /**
        Submits the enriched event for output.
    */
    fn finish_log_event(&self, event: LogEvent);

    /**
    Submits the enriched event for output asynchronously.

    This allows sinks to reuse an async context that already exists.
    Sinks may choose to implement this as a simple wrapper around
    [Self::finish_log_event] if they wish.
    */
    fn finish_log_event_async<'s>(
        &'s self,
        event: LogEvent,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + 's>>;

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn prepare_to_die(&self);
}

/*
Boilerplate notes.

# Sink

Clone on Sink doesn't make sense; sinks hold unique output resources.
PartialEq and Eq are possible but it's unclear whether we'd mean data equality
or provenance, so neither is required.
Default is not necessarily sensible since who knows how a sink is constructed
(does it need a filename to log to, etc.)
Display is not very sensible.
Send/Sync are required: one sink instance receives events from every emitting
thread.
*/
