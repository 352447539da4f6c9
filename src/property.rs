// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named property type and the factory seam the enrichment pipeline uses to
//! construct properties.
//!
//! A [`Property`] is a validated `(name, value)` pair.  Names are non-empty
//! tokens, unique within one event's property set; validation happens at
//! construction so a bad name surfaces at configuration time rather than in
//! a sink.
//!
//! [`PropertyFactory`] exists so a hosting logging system can interpose its
//! own property construction (interning, capturing limits, and so on).  The
//! pipeline only ever constructs properties through this trait;
//! [`DefaultPropertyFactory`] is the plain implementation used when nothing
//! is interposed.
//!
//! # Example
//!
//! ```rust
//! use hostwise::{DefaultPropertyFactory, Property, PropertyFactory, Value};
//!
//! let factory = DefaultPropertyFactory;
//! let property = factory
//!     .create_property("HostBitness", Value::from("64-bit"))
//!     .expect("valid name");
//! assert_eq!(property.name(), "HostBitness");
//!
//! // Empty names are a configuration mistake and fail fast.
//! assert!(Property::new("", Value::from(1)).is_err());
//! ```

use crate::error::ConfigError;
use crate::value::Value;
use std::fmt::Debug;

/**
A named value attached to a log event.

The name is validated at construction: it must be a non-empty token without
whitespace.  Within one event's property set the name is unique; uniqueness is
enforced by [`LogEvent::add_property_if_absent`](crate::LogEvent::add_property_if_absent),
not here.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    value: Value,
}

impl Property {
    /**
    Creates a new property, validating the name.

    Returns [`ConfigError::InvalidPropertyName`] if the name is empty or
    contains whitespace.
    */
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidPropertyName(name));
        }
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/**
Constructs named properties on behalf of the enrichment pipeline.

Supplied by the hosting logging system; enrichers never construct a
[`Property`] directly, they go through whatever factory the pipeline was
given so the host can intern or otherwise shape property construction.
*/
pub trait PropertyFactory: Debug + Send + Sync {
    /**
    Builds a property with the given name and value.

    Implementations must apply the same name validation as [`Property::new`].
    */
    fn create_property(&self, name: &str, value: Value) -> Result<Property, ConfigError>;
}

/**
The plain factory: delegates straight to [`Property::new`].
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DefaultPropertyFactory;

impl DefaultPropertyFactory {
    pub const fn new() -> Self {
        Self
    }
}

impl PropertyFactory for DefaultPropertyFactory {
    fn create_property(&self, name: &str, value: Value) -> Result<Property, ConfigError> {
        Property::new(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let p = Property::new("HostVersion", 16).unwrap();
        assert_eq!(p.name(), "HostVersion");
        assert_eq!(p.value(), &Value::Integer(16));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Property::new("", "anything").unwrap_err();
        assert_eq!(err, ConfigError::InvalidPropertyName(String::new()));
    }

    #[test]
    fn test_whitespace_name_rejected() {
        assert!(Property::new("Host Version", 16).is_err());
    }

    #[test]
    fn test_default_factory_matches_direct_construction() {
        let factory = DefaultPropertyFactory::new();
        let via_factory = factory
            .create_property("HostPath", Value::from("/opt/host"))
            .unwrap();
        let direct = Property::new("HostPath", "/opt/host").unwrap();
        assert_eq!(via_factory, direct);
    }
}
