// SPDX-License-Identifier: MIT OR Apache-2.0

//! The host environment boundary: a read-only query surface over ambient
//! facts about the process and the host application it runs inside.
//!
//! Three facts are exposed, all argument-free:
//!
//! - process bitness, always known (it is a property of the running binary)
//! - the numeric host-application version
//! - the host-application installation path
//!
//! Version and path come from whatever integration layer embeds this crate
//! into the host application, and may be unavailable early in startup before
//! that layer is initialized.  [`ProcessEnvironment`] is the implementation
//! used when nothing else is wired up; [`StaticEnvironment`] lets an embedder
//! supply the facts it obtained from its own host API, and doubles as the
//! test double.
//!
//! These facts are treated as immutable for the lifetime of the process:
//! bitness cannot change, and a host application does not change version or
//! installation path mid-run.  The enrichment layer relies on this to cache.

use crate::error::EnrichError;
use std::fmt::Debug;

/// Whether the process runs as a 32-bit or 64-bit process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bitness {
    X86,
    X64,
}

impl Bitness {
    /// The bitness of the currently running process.
    pub const fn current() -> Self {
        if cfg!(target_pointer_width = "64") {
            Bitness::X64
        } else {
            Bitness::X86
        }
    }
}

impl std::fmt::Display for Bitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bitness::X86 => f.write_str("32-bit"),
            Bitness::X64 => f.write_str("64-bit"),
        }
    }
}

/**
Read-only query surface over ambient host facts.

Implementations must be cheap, non-blocking local reads; no I/O or network
calls belong behind this trait.  `version` and `install_path` return
[`EnrichError::Unavailable`] when the backing host API cannot be read yet.
*/
pub trait HostEnvironment: Debug + Send + Sync {
    /// The bitness of the process the host application runs as.
    fn bitness(&self) -> Bitness;

    /// The numeric host-application version, e.g. 16 for a 2016-era host.
    fn version(&self) -> Result<i64, EnrichError>;

    /// The host-application installation path.
    fn install_path(&self) -> Result<String, EnrichError>;
}

/**
The ambient process environment, with no host integration wired up.

Bitness comes from the compiled pointer width.  Version and path are
unavailable; embedders that can query their host API should use
[`StaticEnvironment`] instead.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub const fn new() -> Self {
        Self
    }
}

impl HostEnvironment for ProcessEnvironment {
    fn bitness(&self) -> Bitness {
        Bitness::current()
    }

    fn version(&self) -> Result<i64, EnrichError> {
        Err(EnrichError::unavailable("version"))
    }

    fn install_path(&self) -> Result<String, EnrichError> {
        Err(EnrichError::unavailable("install_path"))
    }
}

/**
A host environment with facts supplied up front.

Integration layers that query their host API at startup build one of these
and hand it to the logger configuration.  Also the natural test double.

# Example

```rust
use hostwise::{Bitness, HostEnvironment, StaticEnvironment};

let env = StaticEnvironment::new(Bitness::X64)
    .with_version(16)
    .with_install_path("/opt/host/host.xll");
assert_eq!(env.version().unwrap(), 16);
```
*/
#[derive(Debug, Clone, PartialEq)]
pub struct StaticEnvironment {
    bitness: Bitness,
    version: Option<i64>,
    install_path: Option<String>,
}

impl StaticEnvironment {
    pub fn new(bitness: Bitness) -> Self {
        Self {
            bitness,
            version: None,
            install_path: None,
        }
    }

    pub fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_install_path(mut self, path: impl Into<String>) -> Self {
        self.install_path = Some(path.into());
        self
    }
}

impl HostEnvironment for StaticEnvironment {
    fn bitness(&self) -> Bitness {
        self.bitness
    }

    fn version(&self) -> Result<i64, EnrichError> {
        self.version.ok_or(EnrichError::unavailable("version"))
    }

    fn install_path(&self) -> Result<String, EnrichError> {
        self.install_path
            .clone()
            .ok_or(EnrichError::unavailable("install_path"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitness_display() {
        assert_eq!(Bitness::X64.to_string(), "64-bit");
        assert_eq!(Bitness::X86.to_string(), "32-bit");
    }

    #[test]
    fn test_process_environment_matches_pointer_width() {
        let env = ProcessEnvironment::new();
        #[cfg(target_pointer_width = "64")]
        assert_eq!(env.bitness(), Bitness::X64);
        #[cfg(not(target_pointer_width = "64"))]
        assert_eq!(env.bitness(), Bitness::X86);
    }

    #[test]
    fn test_process_environment_host_facts_unavailable() {
        let env = ProcessEnvironment::new();
        assert_eq!(
            env.version().unwrap_err(),
            EnrichError::unavailable("version")
        );
        assert!(env.install_path().is_err());
    }

    #[test]
    fn test_static_environment_partial_facts() {
        let env = StaticEnvironment::new(Bitness::X86).with_version(17);
        assert_eq!(env.version().unwrap(), 17);
        assert!(env.install_path().is_err());
    }
}
