// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log event type for the hostwise enrichment system.
//!
//! This module defines [`LogEvent`], the core data structure that carries a
//! message and its attached properties from the emitting call site, through
//! the enrichment pipeline, to the sinks.
//!
//! # Design Philosophy
//!
//! Properties are stored in insertion order in a flat vector rather than a
//! hash map. The property sets here are tiny (a handful of host facts), so a
//! linear name scan beats hashing, and preserved insertion order gives sinks a
//! stable display order for free.
//!
//! # Usage Pattern
//!
//! 1. Create a new `LogEvent` with a level and message
//! 2. The emitting call site may attach properties with `add_property_if_absent`
//! 3. The enrichment pipeline runs, attaching ambient properties the event
//!    does not already carry
//! 4. The complete event is submitted to sinks via `Sink::finish_log_event()`
//!
//! # Example
//!
//! ```rust
//! use hostwise::{Level, LogEvent, Property};
//!
//! let mut event = LogEvent::new(Level::Information, "host attached");
//! event.add_property_if_absent(Property::new("HostBitness", "64-bit").unwrap());
//!
//! // A second property with the same name is ignored; first write wins.
//! event.add_property_if_absent(Property::new("HostBitness", "32-bit").unwrap());
//! assert_eq!(event.properties().count(), 1);
//! ```

use crate::level::Level;
use crate::property::Property;
use crate::value::Value;
use std::fmt::Display;
use std::time::SystemTime;

/**
A log event: timestamp, level, message, and an ordered set of named properties.

The event is mutable only between emission and delivery to a sink; enrichers
mutate it solely through [`add_property_if_absent`](Self::add_property_if_absent).
*/
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    timestamp: SystemTime,
    level: Level,
    message: String,
    properties: Vec<Property>,
}

impl LogEvent {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: SystemTime::now(),
            level,
            message: message.into(),
            properties: Vec::new(),
        }
    }

    /**
    Adds the property only if no property with that name is already present.

    This is the only mutation enrichers perform.  The if-absent rule is what
    lets call-site-supplied properties take precedence over ambient
    enrichment, and makes first-registered win when two enrichers collide on
    a name.

    Returns `true` if the property was added.
    */
    pub fn add_property_if_absent(&mut self, property: Property) -> bool {
        if self.properties.iter().any(|p| p.name() == property.name()) {
            return false;
        }
        self.properties.push(property);
        true
    }

    /// Looks up a property value by name.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.value())
    }

    /// Iterates the properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for LogEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)?;
        if !self.properties.is_empty() {
            write!(f, " {{")?;
            for (i, property) in self.properties.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}={}", property.name(), property.value())?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}

/*
Boilerplate notes for LogEvent:

IMPLEMENTED:
- Debug: Derived - essential for diagnostics
- Clone: Derived - events are cloned when fanned out to multiple sinks
- PartialEq: Derived - enables event comparison in tests
- Display: Implemented - human-readable rendering for plain text sinks

NOT IMPLEMENTED:
- Eq/Hash: SystemTime is Eq but events are not useful as map keys
- Copy: String/Vec contain heap-allocated data
- Ord/PartialOrd: no meaningful total ordering (timestamp ordering is a sink
  concern, not an event concern)
- Default: an event without a level and message is not meaningful

AUTOMATIC:
- Send: all fields are Send
- Sync: all fields are Sync, but events are owned by single threads while
  being built anyway
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_if_absent_keeps_first_value() {
        let mut event = LogEvent::new(Level::Information, "msg");
        assert!(event.add_property_if_absent(Property::new("X", "first").unwrap()));
        assert!(!event.add_property_if_absent(Property::new("X", "second").unwrap()));
        assert_eq!(event.property("X"), Some(&Value::String("first".into())));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut event = LogEvent::new(Level::Debug, "msg");
        event.add_property_if_absent(Property::new("B", 2).unwrap());
        event.add_property_if_absent(Property::new("A", 1).unwrap());
        let names: Vec<&str> = event.properties().map(|p| p.name()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_display_includes_properties() {
        let mut event = LogEvent::new(Level::Warning, "low disk");
        event.add_property_if_absent(Property::new("HostBitness", "64-bit").unwrap());
        let rendered = event.to_string();
        assert!(rendered.contains("[WRN] low disk"));
        assert!(rendered.contains("HostBitness=64-bit"));
    }
}
