// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_event::LogEvent;
use crate::property::PropertyFactory;
use std::fmt::Debug;

pub trait Enricher: Debug + Send + Sync {
    /**
    Attaches computed properties to the event.

    Called on the emit path for every event that passes the level filter, in
    registration order.  Implementations mutate the event only via
    [`LogEvent::add_property_if_absent`] and must never panic past the
    pipeline; if an ambient fact cannot be read, skip the property for this
    event.
    */
    fn enrich(&self, event: &mut LogEvent, factory: &dyn PropertyFactory);
}

/*
Boilerplate notes.

# Enricher

Clone on a trait object doesn't compose; enrichers are shared via Arc instead.
PartialEq/Eq are unclear (data equality vs provenance), so not required.
Default makes no sense, construction varies per enricher kind.
Send + Sync are required: one enricher instance is shared by every thread that
emits events, and the cached variants memoize internally.
Debug is required so a pipeline can be dumped while debugging configuration.
*/
