//! Signed-in user identity and subscription plan

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub country_of_origin: String,
    /// Current immigration status string shown on the dashboard
    pub immigration_status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Free,
    Essential,
    Premium,
}

impl PlanTier {
    pub fn is_paid(&self) -> bool {
        !matches!(self, PlanTier::Free)
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanTier::Free => write!(f, "free"),
            PlanTier::Essential => write!(f, "essential"),
            PlanTier::Premium => write!(f, "premium"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_is_not_paid() {
        assert!(!PlanTier::Free.is_paid());
        assert!(PlanTier::Essential.is_paid());
        assert!(PlanTier::Premium.is_paid());
    }
}
