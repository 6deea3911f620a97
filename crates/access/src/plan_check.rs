//! Cross-checking plan entries against the catalog.
//!
//! The resolver deliberately tolerates plan references the catalog no
//! longer defines, so drift between the two tables surfaces as degraded
//! output rather than failure. This check makes the drift visible: run it
//! in CI and at startup, never in the request path.

use meridian_catalog::{Catalog, CatalogQuery};
use meridian_plans::{AppGrant, PermissionGrant, PlanAccess};

/// Report every plan reference the catalog does not back.
///
/// Wildcards are never flagged; they resolve against whatever exists.
/// An unknown application suppresses the per-module checks beneath it,
/// one defect per root cause.
pub fn cross_check(catalog: &Catalog, plans: &PlanAccess) -> Vec<String> {
    let query = CatalogQuery::new(catalog);
    let mut defects = Vec::new();

    for (plan, entry) in plans.entries() {
        for app in &entry.applications {
            if query.application(app).is_none() {
                defects.push(format!("plan '{plan}': application '{app}' is not in the catalog"));
            }
        }
        for app in entry.modules.keys() {
            if !entry.unlocks(app) {
                defects.push(format!(
                    "plan '{plan}': modules key '{app}' is not a listed application"
                ));
            }
        }
        for app in entry.permissions.keys() {
            if !entry.unlocks(app) {
                defects.push(format!(
                    "plan '{plan}': permissions key '{app}' is not a listed application"
                ));
            }
        }

        for (app, modules) in &entry.modules {
            if query.application(app).is_none() {
                continue;
            }
            for module in modules {
                if query.module(app, module).is_none() {
                    defects.push(format!(
                        "plan '{plan}': module '{app}.{module}' is not in the catalog"
                    ));
                }
            }
        }

        for (app, grant) in &entry.permissions {
            if query.application(app).is_none() {
                continue;
            }
            let AppGrant::PerModule(modules) = grant else {
                continue;
            };
            for (module, module_grant) in modules {
                if query.module(app, module).is_none() {
                    defects.push(format!(
                        "plan '{plan}': module '{app}.{module}' is not in the catalog"
                    ));
                    continue;
                }
                let PermissionGrant::Codes(codes) = module_grant else {
                    continue;
                };
                for code in codes {
                    if query.permission(app, module, code).is_none() {
                        defects.push(format!(
                            "plan '{plan}': permission '{app}.{module}.{code}' is not in the catalog"
                        ));
                    }
                }
            }
        }
    }

    defects
}
