use super::models::PlayerProfile;

/// Result of one per-player lookup inside a top-profiles batch
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileOutcome {
    Resolved(PlayerProfile),
    Degraded { profile: PlayerProfile, reason: String },
}

impl ProfileOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, ProfileOutcome::Degraded { .. })
    }

    pub fn profile(&self) -> &PlayerProfile {
        match self {
            ProfileOutcome::Resolved(profile) => profile,
            ProfileOutcome::Degraded { profile, .. } => profile,
        }
    }

    pub fn into_profile(self) -> PlayerProfile {
        match self {
            ProfileOutcome::Resolved(profile) => profile,
            ProfileOutcome::Degraded { profile, .. } => profile,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeSummary {
    pub resolved: usize,
    pub degraded: usize,
}

impl OutcomeSummary {
    pub fn tally(outcomes: &[ProfileOutcome]) -> Self {
        let degraded = outcomes.iter().filter(|o| o.is_degraded()).count();
        Self {
            resolved: outcomes.len() - degraded,
            degraded,
        }
    }
}
