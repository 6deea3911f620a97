//! Super-admin role provisioning for tenant onboarding.
//!
//! Onboarding must not fail because billing sent a plan token we have never
//! heard of, so this path degrades to the free plan instead of erroring.
//! Callers that want the strict behavior resolve the plan themselves first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use meridian_catalog::FullCode;
use meridian_core::{DomainError, DomainResult, OrgId, TenantId, UserId};
use meridian_plans::{AppGrant, PlanAccess, PlanId};

/// Badge color of the provisioned super-admin role.
pub const SUPER_ADMIN_COLOR: &str = "#B91C1C";

/// Priority of the provisioned super-admin role. Higher wins when roles
/// conflict downstream.
pub const SUPER_ADMIN_PRIORITY: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleScope {
    Organization,
    Team,
    Personal,
}

/// A ready-to-persist role record.
///
/// The `permissions` map keeps the plan's nested shape verbatim; downstream
/// authorization does a direct three-level lookup against the persisted
/// JSON without re-flattening. Lifecycle metadata (timestamps, row ids) is
/// the storage subsystem's concern, not part of this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleConfig {
    pub tenant_id: TenantId,
    pub org_id: OrgId,
    pub name: String,
    pub description: String,
    pub permissions: BTreeMap<String, AppGrant>,
    pub is_system_role: bool,
    pub is_default: bool,
    pub priority: i32,
    pub scope: RoleScope,
    pub is_inheritable: bool,
    pub color: String,
    pub created_by: UserId,
    pub restrictions: Vec<String>,
}

impl RoleConfig {
    /// Whether this role grants the fully-qualified `"app.module.code"`.
    ///
    /// The same three-level lookup downstream authorization performs
    /// against the persisted shape. Malformed codes grant nothing.
    pub fn grants(&self, full_code: &str) -> bool {
        let Some(parsed) = FullCode::parse(full_code) else {
            return false;
        };
        self.permissions
            .get(&parsed.app_code)
            .is_some_and(|grant| grant.permits(&parsed.module_code, &parsed.code))
    }
}

/// Builds administrator roles from plan entries.
#[derive(Debug, Clone, Copy)]
pub struct RoleProvisioner<'a> {
    plans: &'a PlanAccess,
}

impl<'a> RoleProvisioner<'a> {
    pub fn new(plans: &'a PlanAccess) -> Self {
        Self { plans }
    }

    /// Build the tenant's super-admin role from `plan`.
    ///
    /// An unrecognized plan falls back to the free plan with a warning;
    /// the only error is the free plan itself missing from the table,
    /// which no deployed configuration should ever exhibit.
    pub fn build_super_admin_role(
        &self,
        plan: &PlanId,
        tenant_id: TenantId,
        org_id: OrgId,
        created_by: UserId,
    ) -> DomainResult<RoleConfig> {
        let entry = match self.plans.entry(plan) {
            Some(entry) => entry,
            None => {
                tracing::warn!(
                    "unknown plan '{}' while provisioning super admin for tenant {}, falling back to '{}'",
                    plan,
                    tenant_id,
                    PlanId::FREE
                );
                self.plans.entry(&PlanId::FREE).ok_or_else(|| {
                    DomainError::invariant("free plan missing from the plan-access table")
                })?
            }
        };

        Ok(RoleConfig {
            tenant_id,
            org_id,
            name: "Super Admin".to_string(),
            description:
                "Full administrative access across every application the subscription unlocks"
                    .to_string(),
            permissions: entry.permissions.clone(),
            is_system_role: true,
            is_default: true,
            priority: SUPER_ADMIN_PRIORITY,
            scope: RoleScope::Organization,
            is_inheritable: true,
            color: SUPER_ADMIN_COLOR.to_string(),
            created_by,
            restrictions: Vec::new(),
        })
    }
}
