// SPDX-License-Identifier: MIT OR Apache-2.0
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Noisy diagnostics, off in most configurations
    Verbose,
    /// Internal events useful while developing
    Debug,
    /// Normal operational messages
    Information,
    /// Suspicious condition, still degrading gracefully
    Warning,
    /// Functionality unavailable or an invariant broken
    Error,
    /// The process is about to lose data or stop entirely
    Fatal,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Level::Verbose => "VRB",
            Level::Debug => "DBG",
            Level::Information => "INF",
            Level::Warning => "WRN",
            Level::Error => "ERR",
            Level::Fatal => "FTL",
        };
        f.write_str(s)
    }
}
