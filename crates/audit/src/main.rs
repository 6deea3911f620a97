//! Consistency audit over the builtin catalog and plan tables.
//!
//! Runs in CI and before rollout: structural validation of the catalog,
//! then the plan/catalog cross-check. Exits non-zero when either reports
//! a defect, so a bad table never ships.

use anyhow::bail;

use meridian_access::cross_check;
use meridian_catalog::{builtin_catalog, validate};
use meridian_plans::builtin_plans;

fn main() -> anyhow::Result<()> {
    meridian_observability::init();

    let catalog = builtin_catalog();
    let plans = builtin_plans();

    let mut defects = validate(&catalog);
    defects.extend(cross_check(&catalog, &plans));

    if !defects.is_empty() {
        for defect in &defects {
            tracing::warn!("{}", defect);
        }
        bail!("{} defect(s) in the builtin catalog/plan tables", defects.len());
    }

    let modules: usize = catalog.applications().iter().map(|a| a.modules.len()).sum();
    let permissions: usize = catalog
        .applications()
        .iter()
        .flat_map(|a| &a.modules)
        .map(|m| m.permissions.len())
        .sum();
    tracing::info!(
        "audit clean: {} applications, {} modules, {} permissions, {} plans",
        catalog.applications().len(),
        modules,
        permissions,
        plans.len()
    );
    Ok(())
}
