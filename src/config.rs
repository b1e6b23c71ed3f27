//! Fixed census configuration and the runtime knobs around it.

use crate::registry::OversizePolicy;

/// Largest ship size the reference histogram can represent.
pub const SHIP_MAX_LENGTH: usize = 3;

/// Character marking an occupied cell in the reference input.
pub const OCCUPIED_MARKER: char = '#';

/// Runtime settings for a single census pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CensusConfig {
    pub marker: char,
    pub policy: OversizePolicy,
}

impl CensusConfig {
    /// Reference configuration: `#` marker, oversized ships rejected.
    pub const fn new() -> Self {
        Self {
            marker: OCCUPIED_MARKER,
            policy: OversizePolicy::Reject,
        }
    }

    pub const fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    pub const fn with_policy(mut self, policy: OversizePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self::new()
    }
}
