//! Shortest path options.

use std::fmt;

/// What `shortest_path` returns when the target is never reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnreachablePolicy {
    /// Fail with [`GraphError::NoPath`](crate::GraphError::NoPath).
    #[default]
    Error,
    /// Return whatever the predecessor walk from the target collects.
    ///
    /// The chain stops at a vertex with no predecessor, so the returned
    /// sequence does not begin at the source. Kept for callers that relied
    /// on the old silent behavior.
    Truncated,
}

impl fmt::Display for UnreachablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Truncated => write!(f, "truncated"),
        }
    }
}

/// Options for shortest path queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathConfig {
    /// Behavior for an unreachable target.
    pub unreachable: UnreachablePolicy,
    /// Stop scanning a vertex's neighbors once the target is discovered.
    pub early_exit: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            unreachable: UnreachablePolicy::Error,
            early_exit: true,
        }
    }
}

impl PathConfig {
    /// Default options: strict unreachable handling, early exit on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unreachable-target policy.
    #[must_use]
    pub fn with_unreachable(mut self, policy: UnreachablePolicy) -> Self {
        self.unreachable = policy;
        self
    }

    /// Enables or disables the early exit on target discovery.
    #[must_use]
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PathConfig::default();
        assert_eq!(config.unreachable, UnreachablePolicy::Error);
        assert!(config.early_exit);
        assert_eq!(config, PathConfig::new());
    }

    #[test]
    fn test_builder() {
        let config = PathConfig::new()
            .with_unreachable(UnreachablePolicy::Truncated)
            .with_early_exit(false);
        assert_eq!(config.unreachable, UnreachablePolicy::Truncated);
        assert!(!config.early_exit);
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(UnreachablePolicy::Error.to_string(), "error");
        assert_eq!(UnreachablePolicy::Truncated.to_string(), "truncated");
    }
}
