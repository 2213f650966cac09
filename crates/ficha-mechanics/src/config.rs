//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::rules::RuleRevision;

/// Tunables shared by every pool builder and the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Which rule revision checks are built under.
    pub revision: RuleRevision,
    /// Most dice physically rolled for one pool.
    pub max_pool_size: u32,
    /// A die at or above this value is a success.
    pub success_threshold: u32,
    /// A die showing exactly this value cancels a success.
    pub cancel_face: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            revision: RuleRevision::Current,
            max_pool_size: 8,
            success_threshold: 6,
            cancel_face: 1,
        }
    }
}

impl RulesConfig {
    /// Set the rule revision.
    pub fn with_revision(mut self, revision: RuleRevision) -> Self {
        self.revision = revision;
        self
    }

    /// Set the pool cap (at least 2, so a penalty roll always fits).
    pub fn with_max_pool_size(mut self, max: u32) -> Self {
        self.max_pool_size = max.max(2);
        self
    }

    /// Set the success threshold (at least 2, so it never overlaps a cancellation).
    pub fn with_success_threshold(mut self, threshold: u32) -> Self {
        self.success_threshold = threshold.max(2);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = RulesConfig::default();
        assert_eq!(cfg.revision, RuleRevision::Current);
        assert_eq!(cfg.max_pool_size, 8);
        assert_eq!(cfg.success_threshold, 6);
        assert_eq!(cfg.cancel_face, 1);
    }

    #[test]
    fn builder_methods() {
        let cfg = RulesConfig::default()
            .with_revision(RuleRevision::Legacy)
            .with_max_pool_size(10)
            .with_success_threshold(5);
        assert_eq!(cfg.revision, RuleRevision::Legacy);
        assert_eq!(cfg.max_pool_size, 10);
        assert_eq!(cfg.success_threshold, 5);
    }

    #[test]
    fn floors_are_enforced() {
        let cfg = RulesConfig::default()
            .with_max_pool_size(0)
            .with_success_threshold(1);
        assert_eq!(cfg.max_pool_size, 2);
        assert_eq!(cfg.success_threshold, 2);
    }
}
