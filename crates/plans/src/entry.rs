//! What a single plan unlocks.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::grant::AppGrant;

/// AI credit allowance attached to a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditGrant {
    /// Credits granted on signup, expiring after `free_expiry_days`.
    pub free_credits: u32,
    /// Ceiling on additionally purchasable credits. Zero means none.
    pub paid_credit_limit: u32,
    pub free_expiry_days: u32,
}

impl CreditGrant {
    /// When free credits granted at `from` expire.
    ///
    /// Saturates at the end of chrono's representable range; an expiry
    /// that far out never arrives.
    pub fn free_expiry_at(&self, from: DateTime<Utc>) -> DateTime<Utc> {
        from.checked_add_signed(Duration::days(i64::from(self.free_expiry_days)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// One row of the plan-access projection.
///
/// `applications` carries the resolver's outer walk order. `modules` narrows
/// which modules each application surfaces in navigation. `permissions` is
/// the grant map embedded verbatim into provisioned roles; an application
/// listed in `applications` but absent from `permissions` is navigable yet
/// grants nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanAccessEntry {
    pub applications: Vec<String>,
    pub modules: BTreeMap<String, Vec<String>>,
    pub permissions: BTreeMap<String, AppGrant>,
    pub credits: CreditGrant,
}

impl PlanAccessEntry {
    /// Whether the plan unlocks `app_code` at all.
    pub fn unlocks(&self, app_code: &str) -> bool {
        self.applications.iter().any(|a| a == app_code)
    }

    pub fn grant_for(&self, app_code: &str) -> Option<&AppGrant> {
        self.permissions.get(app_code)
    }
}
