//! Legacy action names for not-yet-migrated authorization checks.
//!
//! Before permissions were fully qualified, callers checked coarse action
//! names like `manage_invoices`. This map translates each of those into the
//! fully-qualified codes that satisfy it. New code must not mint new
//! legacy-style names; it adds an alias here instead.

use std::collections::{BTreeMap, HashSet};

use meridian_catalog::{full_code, Catalog, CatalogQuery, ACCOUNTING_APP};

/// Build the legacy action map for `app_code`.
///
/// Per module: `manage_<module>` covers every permission in declaration
/// order; `view_<module>` covers only `read` and `read_all` and is omitted
/// entirely when the module defines neither.
pub fn legacy_action_map(catalog: &Catalog, app_code: &str) -> BTreeMap<String, Vec<String>> {
    let query = CatalogQuery::new(catalog);
    let mut map = BTreeMap::new();

    for module in query.modules(app_code) {
        let manage: Vec<String> = module
            .permissions
            .iter()
            .map(|p| full_code(app_code, &module.module_code, &p.code))
            .collect();
        map.insert(format!("manage_{}", module.module_code), manage);

        let view: Vec<String> = module
            .permissions
            .iter()
            .filter(|p| p.code == "read" || p.code == "read_all")
            .map(|p| full_code(app_code, &module.module_code, &p.code))
            .collect();
        if !view.is_empty() {
            map.insert(format!("view_{}", module.module_code), view);
        }
    }

    map
}

/// The accounting legacy map plus its hand-assembled composites:
/// `manage_accounting`/`view_accounting` union the ledger and chart
/// entries, `manage_entities`/`view_entities` alias `multi_entity`.
pub fn accounting_legacy_actions(catalog: &Catalog) -> BTreeMap<String, Vec<String>> {
    let mut map = legacy_action_map(catalog, ACCOUNTING_APP);

    insert_union(
        &mut map,
        "manage_accounting",
        &["manage_general_ledger", "manage_chart_of_accounts"],
    );
    insert_union(
        &mut map,
        "view_accounting",
        &["view_general_ledger", "view_chart_of_accounts"],
    );
    insert_union(&mut map, "manage_entities", &["manage_multi_entity"]);
    insert_union(&mut map, "view_entities", &["view_multi_entity"]);

    map
}

/// Union the values of `sources` under `key`, deduplicating while keeping
/// first occurrence. Nothing is inserted when every source is absent.
fn insert_union(map: &mut BTreeMap<String, Vec<String>>, key: &str, sources: &[&str]) {
    let mut seen = HashSet::new();
    let mut union = Vec::new();
    for source in sources {
        if let Some(values) = map.get(*source) {
            for value in values {
                if seen.insert(value.clone()) {
                    union.push(value.clone());
                }
            }
        }
    }
    if !union.is_empty() {
        map.insert(key.to_string(), union);
    }
}
