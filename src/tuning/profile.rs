//! Protocol generation profiles.

use std::fmt;

/// Protocol generation targeted by the generator.
///
/// Profiles are cumulative: each one understands every knob of the
/// previous one and adds its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Profile {
    /// Multicast liveness and ring membership only
    RingOnly,
    /// Adds acceptor windows and phase-1 batching
    WithAcceptor,
    /// Adds the recovery sub-protocol, unicast channels and the learner sentinel
    WithRecovery,
}

impl Profile {
    /// All profiles, oldest generation first
    pub const ALL: [Profile; 3] = [Profile::RingOnly, Profile::WithAcceptor, Profile::WithRecovery];

    /// Whether host records carry a unicast listen address
    pub fn has_unicast(self) -> bool {
        matches!(self, Self::WithRecovery)
    }

    /// Whether a learner sentinel is appended to the host list
    pub fn has_learner(self) -> bool {
        matches!(self, Self::WithRecovery)
    }

    pub fn has_acceptor_tuning(self) -> bool {
        matches!(self, Self::WithAcceptor | Self::WithRecovery)
    }

    pub fn has_recovery_tuning(self) -> bool {
        matches!(self, Self::WithRecovery)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::RingOnly => "ring_only",
            Self::WithAcceptor => "with_acceptor",
            Self::WithRecovery => "with_recovery",
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::WithRecovery
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
