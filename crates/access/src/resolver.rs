//! Plan resolution: from a plan id to the flat permission list it grants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use meridian_catalog::{full_code, Catalog, CatalogQuery, Permission};
use meridian_plans::{AppGrant, PermissionGrant, PlanAccess, PlanId};

/// One granted permission with its catalog metadata attached.
///
/// The flat shape consumers render directly: permission pickers, role
/// detail screens, onboarding summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPermission {
    pub code: String,
    pub name: String,
    pub description: String,
    pub full_code: String,
    pub app_code: String,
    pub module_code: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown plan '{0}'")]
    UnknownPlan(String),
}

/// Expands plan grants against the current catalog.
///
/// Wildcards are resolved at call time: a plan resolved after a catalog
/// deployment sees the new permissions without any migration. Borrows both
/// inputs, so callers choose the catalog and table (production, fixture,
/// tenant-specific variant) explicitly.
///
/// - No IO
/// - No caching; resolution is cheap and re-derived per call
/// - No deduplication; a code granted twice appears twice
#[derive(Debug, Clone, Copy)]
pub struct PlanResolver<'a> {
    query: CatalogQuery<'a>,
    plans: &'a PlanAccess,
}

impl<'a> PlanResolver<'a> {
    pub fn new(catalog: &'a Catalog, plans: &'a PlanAccess) -> Self {
        Self {
            query: CatalogQuery::new(catalog),
            plans,
        }
    }

    /// Resolve `plan` into every permission it grants, in walk order:
    /// applications as listed by the entry, modules in map order, explicit
    /// codes as listed.
    ///
    /// Unknown plans are the caller's problem. Callers wanting graceful
    /// degradation pick their fallback plan before calling.
    pub fn resolve(&self, plan: &PlanId) -> Result<Vec<ResolvedPermission>, ResolveError> {
        let entry = self
            .plans
            .entry(plan)
            .ok_or_else(|| ResolveError::UnknownPlan(plan.as_str().to_string()))?;

        let mut resolved = Vec::new();
        for app_code in &entry.applications {
            // An application listed without a grant unlocks navigation only.
            let Some(grant) = entry.grant_for(app_code) else {
                continue;
            };
            match grant {
                AppGrant::All => {
                    for module in self.query.modules(app_code) {
                        for permission in &module.permissions {
                            resolved.push(self.from_catalog(
                                app_code,
                                &module.module_code,
                                permission,
                            ));
                        }
                    }
                }
                AppGrant::PerModule(modules) => {
                    for (module_code, module_grant) in modules {
                        match module_grant {
                            PermissionGrant::All => {
                                for permission in self.query.permissions(app_code, module_code) {
                                    resolved.push(self.from_catalog(
                                        app_code,
                                        module_code,
                                        permission,
                                    ));
                                }
                            }
                            PermissionGrant::Codes(codes) => {
                                for code in codes {
                                    resolved.push(self.from_code(app_code, module_code, code));
                                }
                            }
                        }
                    }
                }
            }
        }
        Ok(resolved)
    }

    fn from_catalog(
        &self,
        app_code: &str,
        module_code: &str,
        permission: &Permission,
    ) -> ResolvedPermission {
        ResolvedPermission {
            code: permission.code.clone(),
            name: permission.name.clone(),
            description: permission.description.clone(),
            full_code: full_code(app_code, module_code, &permission.code),
            app_code: app_code.to_string(),
            module_code: module_code.to_string(),
        }
    }

    /// Build from an explicit code. Codes a plan grants but the catalog no
    /// longer defines keep working with degraded display metadata.
    fn from_code(&self, app_code: &str, module_code: &str, code: &str) -> ResolvedPermission {
        ResolvedPermission {
            code: code.to_string(),
            name: self.query.permission_name(app_code, module_code, code),
            description: self.query.permission_description(app_code, module_code, code),
            full_code: full_code(app_code, module_code, code),
            app_code: app_code.to_string(),
            module_code: module_code.to_string(),
        }
    }
}
