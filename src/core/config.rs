//! Engine configuration.
//!
//! The rules themselves are fixed; configuration only covers how a level is
//! seeded and how loudly logic faults are surfaced.

use serde::{Deserialize, Serialize};

/// What to do when a logic fault is detected at runtime.
///
/// The only fault checked today is inserting an actor into the slip list
/// while it is already there, which points at double processing upstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultPolicy {
    /// Emit a `tracing` error and leave the slip list unchanged.
    #[default]
    Log,
    /// Emit a `tracing` error, then panic.
    Panic,
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the level's default RNG.
    /// Same seed and same inputs replay identically.
    pub seed: u64,

    /// Handling of slip-list double insertion.
    pub slip_fault: FaultPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            slip_fault: FaultPolicy::Log,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom slip-list fault policy.
    pub fn with_slip_fault(mut self, policy: FaultPolicy) -> Self {
        self.slip_fault = policy;
        self
    }
}
