//! Keyword to module-set map for loose permission checks.
//!
//! Older callers gate navigation on a single keyword ("does this user have
//! anything accounts_receivable-ish?"). This map translates such keywords
//! into the catalog modules they should unlock. Re-derived from the catalog
//! on every call; cheap enough that callers needing a cache add their own.

use std::collections::{BTreeMap, HashSet};

use meridian_catalog::{Catalog, CatalogQuery, ACCOUNTING_APP};

/// A hand-curated keyword covering several related modules.
#[derive(Debug, Clone, Copy)]
pub struct UmbrellaAlias {
    pub keyword: &'static str,
    pub modules: &'static [&'static str],
}

/// Accounting umbrella keywords plus naming-drift aliases.
///
/// The `banking` alias carries module names older consumers used before
/// the banking module absorbed them; they are not catalog modules.
pub const ACCOUNTING_ALIASES: &[UmbrellaAlias] = &[
    UmbrellaAlias {
        keyword: "accounts_receivable",
        modules: &["invoices", "customers", "credit_notes", "sales_orders", "estimates"],
    },
    UmbrellaAlias {
        keyword: "accounts_payable",
        modules: &["bills", "vendors", "purchase_orders", "expense_reports", "vendor_credits"],
    },
    UmbrellaAlias {
        keyword: "banking",
        modules: &["banking", "bank_accounts", "bank_reconciliation", "cash_flow"],
    },
    UmbrellaAlias {
        keyword: "entities",
        modules: &["multi_entity"],
    },
];

/// Build the keyword map for `app_code`: every module registers itself,
/// then `aliases` layer curated groups on top. Value lists are deduplicated
/// preserving first occurrence.
pub fn module_access_map(
    catalog: &Catalog,
    app_code: &str,
    aliases: &[UmbrellaAlias],
) -> BTreeMap<String, Vec<String>> {
    let query = CatalogQuery::new(catalog);
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for module in query.modules(app_code) {
        map.entry(module.module_code.clone())
            .or_default()
            .push(module.module_code.clone());
    }

    for alias in aliases {
        let entry = map.entry(alias.keyword.to_string()).or_default();
        entry.extend(alias.modules.iter().map(|m| (*m).to_string()));
    }

    for values in map.values_mut() {
        dedup_preserving_order(values);
    }

    map
}

/// The accounting map with its curated aliases applied.
pub fn accounting_module_access(catalog: &Catalog) -> BTreeMap<String, Vec<String>> {
    module_access_map(catalog, ACCOUNTING_APP, ACCOUNTING_ALIASES)
}

/// Whether `keyword` unlocks `module_code` under `map`.
pub fn keyword_unlocks(
    map: &BTreeMap<String, Vec<String>>,
    keyword: &str,
    module_code: &str,
) -> bool {
    map.get(keyword)
        .is_some_and(|modules| modules.iter().any(|m| m == module_code))
}

fn dedup_preserving_order(values: &mut Vec<String>) {
    let mut seen = HashSet::new();
    values.retain(|v| seen.insert(v.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_catalog::builtin_catalog;

    #[test]
    fn every_module_is_its_own_keyword() {
        let catalog = builtin_catalog();
        let map = accounting_module_access(&catalog);
        let query = CatalogQuery::new(&catalog);
        for module in query.modules(ACCOUNTING_APP) {
            assert!(
                keyword_unlocks(&map, &module.module_code, &module.module_code),
                "{} does not unlock itself",
                module.module_code
            );
        }
    }

    #[test]
    fn receivable_umbrella_groups_the_sales_side() {
        let catalog = builtin_catalog();
        let map = accounting_module_access(&catalog);
        assert_eq!(
            map["accounts_receivable"],
            ["invoices", "customers", "credit_notes", "sales_orders", "estimates"]
        );
        assert!(keyword_unlocks(&map, "accounts_receivable", "invoices"));
        assert!(!keyword_unlocks(&map, "accounts_receivable", "bills"));
    }

    #[test]
    fn banking_alias_layers_drift_names_over_self_registration() {
        let catalog = builtin_catalog();
        let map = accounting_module_access(&catalog);
        // Self-registration puts "banking" first; the alias appends the
        // drift names and the duplicate collapses.
        assert_eq!(
            map["banking"],
            ["banking", "bank_accounts", "bank_reconciliation", "cash_flow"]
        );
    }

    #[test]
    fn entities_alias_points_at_multi_entity() {
        let catalog = builtin_catalog();
        let map = accounting_module_access(&catalog);
        assert_eq!(map["entities"], ["multi_entity"]);
    }

    #[test]
    fn unknown_keyword_unlocks_nothing() {
        let catalog = builtin_catalog();
        let map = accounting_module_access(&catalog);
        assert!(!keyword_unlocks(&map, "payables", "bills"));
    }

    #[test]
    fn unknown_app_still_applies_aliases() {
        let catalog = builtin_catalog();
        let map = module_access_map(&catalog, "nonexistent", ACCOUNTING_ALIASES);
        assert!(map.contains_key("accounts_receivable"));
        assert!(!map.contains_key("invoices"));
    }

    #[test]
    fn rebuilding_yields_identical_output() {
        let catalog = builtin_catalog();
        assert_eq!(accounting_module_access(&catalog), accounting_module_access(&catalog));
    }
}
