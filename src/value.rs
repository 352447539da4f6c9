// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property value type for the hostwise enrichment system.
//!
//! This module defines [`Value`], the closed set of shapes a log event property
//! may carry. The set is deliberately small: host-environment facts are strings,
//! integers, booleans, timestamps, or small structured groups of those, and
//! keeping the variant set closed lets sinks render every property without
//! downcasting.

use std::fmt::Display;
use std::time::SystemTime;

/**
A property value attached to a log event.

Enrichers and emitting call sites produce these; sinks consume them via
[`Display`] or by matching on the variant.
*/
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Boolean(bool),
    Timestamp(SystemTime),
    /// A named group of nested values.  Nesting is allowed but host facts in
    /// practice stay one level deep.
    Structured(Vec<(String, Value)>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<SystemTime> for Value {
    fn from(t: SystemTime) -> Self {
        Value::Timestamp(t)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Timestamp(t) => {
                // Render as seconds since the epoch; a timestamp before the
                // epoch has no meaningful rendering here.
                match t.duration_since(SystemTime::UNIX_EPOCH) {
                    Ok(d) => write!(f, "{}.{:03}", d.as_secs(), d.subsec_millis()),
                    Err(_) => write!(f, "<pre-epoch>"),
                }
            }
            Value::Structured(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/*
Boilerplate notes for Value:

IMPLEMENTED:
- Debug: Derived - essential for diagnostics
- Clone: Derived - values are copied into the per-enricher cache and into events
- PartialEq: Derived - enables the equality assertions the enrichment invariants need
- Display: Implemented - sinks render properties without matching on variants
- From: Implemented for the common source types so call sites read naturally

NOT IMPLEMENTED:
- Eq/Hash: Timestamp wraps SystemTime which is Eq, but a future float variant
  would break it; leaving it off keeps the variant set free to grow
- Copy: String/Structured contain heap data
- Ord/PartialOrd: no meaningful ordering across variants
- Default: no sensible zero-value for a property

AUTOMATIC:
- Send/Sync: all payload types are Send + Sync
*/
