//! User profile and subscription stores

use shared_types::{PlanTier, UserProfile};

use crate::changes::ChangeNotifier;

pub struct ProfileStore {
    profile: UserProfile,
    pub changes: ChangeNotifier,
}

impl ProfileStore {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            changes: ChangeNotifier::new(),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn set_immigration_status(&mut self, status: &str) {
        self.profile.immigration_status = status.to_string();
        self.changes.emit();
    }

    pub fn update_contact(&mut self, name: &str, email: &str) {
        self.profile.name = name.to_string();
        self.profile.email = email.to_string();
        self.changes.emit();
    }
}

/// Surfaces gated behind a paid plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    CaseTracking,
    DocumentUpload,
    KnowledgeBase,
    AttorneyMessaging,
    FormGeneration,
    AdjudicatorInsights,
}

pub struct SubscriptionStore {
    tier: PlanTier,
    pub changes: ChangeNotifier,
}

impl SubscriptionStore {
    pub fn new(tier: PlanTier) -> Self {
        Self {
            tier,
            changes: ChangeNotifier::new(),
        }
    }

    pub fn tier(&self) -> PlanTier {
        self.tier
    }

    pub fn is_paid(&self) -> bool {
        self.tier.is_paid()
    }

    pub fn upgrade(&mut self, tier: PlanTier) {
        self.tier = tier;
        tracing::info!(%tier, "plan changed");
        self.changes.emit();
    }

    /// Whether the current plan allows a feature. Core tracking surfaces
    /// are always available; the rest require a paid tier.
    pub fn allows(&self, feature: Feature) -> bool {
        match feature {
            Feature::CaseTracking | Feature::DocumentUpload | Feature::KnowledgeBase => true,
            Feature::AttorneyMessaging | Feature::FormGeneration | Feature::AdjudicatorInsights => {
                self.tier.is_paid()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn free_plan_gates_premium_features() {
        let store = SubscriptionStore::new(PlanTier::Free);
        assert!(store.allows(Feature::CaseTracking));
        assert!(store.allows(Feature::KnowledgeBase));
        assert!(!store.allows(Feature::AttorneyMessaging));
        assert!(!store.allows(Feature::FormGeneration));
        assert!(!store.allows(Feature::AdjudicatorInsights));
    }

    #[test]
    fn upgrade_unlocks_gated_features() {
        let mut store = SubscriptionStore::new(PlanTier::Free);
        store.upgrade(PlanTier::Essential);
        assert!(store.is_paid());
        assert!(store.allows(Feature::AttorneyMessaging));
    }

    #[test]
    fn immigration_status_update_is_observable() {
        let mut store = ProfileStore::new(UserProfile {
            id: "user-1".to_string(),
            name: "Maria Gonzalez".to_string(),
            email: "maria@example.com".to_string(),
            country_of_origin: "Mexico".to_string(),
            immigration_status: "H-1B".to_string(),
        });

        store.set_immigration_status("Adjustment of Status Pending");

        assert_eq!(
            store.profile().immigration_status,
            "Adjustment of Status Pending"
        );
        assert_eq!(store.changes.version(), 1);
    }
}
