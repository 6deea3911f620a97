//! The plan-access projection and the builtin plan ladder.
//!
//! Like the catalog, the builtin table ships inside the binary. The grants
//! here are intentionally loose references into the catalog: a wildcard
//! means "whatever the catalog defines at resolution time", so adding a
//! permission to the catalog widens every wildcard plan without touching
//! this file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entry::{CreditGrant, PlanAccessEntry};
use crate::grant::{AppGrant, PermissionGrant};
use crate::plan::PlanId;

/// All plan entries, keyed by plan id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanAccess {
    entries: BTreeMap<PlanId, PlanAccessEntry>,
}

impl PlanAccess {
    pub fn new(entries: BTreeMap<PlanId, PlanAccessEntry>) -> Self {
        Self { entries }
    }

    pub fn entry(&self, plan: &PlanId) -> Option<&PlanAccessEntry> {
        self.entries.get(plan)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&PlanId, &PlanAccessEntry)> {
        self.entries.iter()
    }

    pub fn plan_ids(&self) -> impl Iterator<Item = &PlanId> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn codes(items: &[&str]) -> PermissionGrant {
    PermissionGrant::Codes(strings(items))
}

fn per_module<const N: usize>(entries: [(&str, PermissionGrant); N]) -> AppGrant {
    AppGrant::PerModule(
        entries
            .into_iter()
            .map(|(module, grant)| (module.to_string(), grant))
            .collect(),
    )
}

fn module_map<const N: usize>(entries: [(&str, &[&str]); N]) -> BTreeMap<String, Vec<String>> {
    entries
        .into_iter()
        .map(|(app, modules)| (app.to_string(), strings(modules)))
        .collect()
}

fn permission_map<const N: usize>(entries: [(&str, AppGrant); N]) -> BTreeMap<String, AppGrant> {
    entries
        .into_iter()
        .map(|(app, grant)| (app.to_string(), grant))
        .collect()
}

const ACCOUNTING_MODULES: &[&str] = &[
    "invoices",
    "estimates",
    "credit_notes",
    "customers",
    "sales_orders",
    "bills",
    "vendors",
    "purchase_orders",
    "expense_reports",
    "vendor_credits",
    "banking",
    "general_ledger",
    "chart_of_accounts",
    "multi_entity",
];

fn free() -> PlanAccessEntry {
    PlanAccessEntry {
        applications: strings(&["accounting"]),
        modules: module_map([("accounting", &["invoices", "customers", "banking"][..])]),
        permissions: permission_map([(
            "accounting",
            per_module([
                ("invoices", codes(&["create", "read", "update", "send"])),
                ("customers", codes(&["create", "read", "update"])),
                ("banking", codes(&["read"])),
            ]),
        )]),
        credits: CreditGrant {
            free_credits: 25,
            paid_credit_limit: 0,
            free_expiry_days: 14,
        },
    }
}

fn starter() -> PlanAccessEntry {
    PlanAccessEntry {
        applications: strings(&["accounting", "crm"]),
        modules: module_map([
            (
                "accounting",
                &["invoices", "estimates", "customers", "bills", "vendors", "banking"][..],
            ),
            ("crm", &["leads", "contacts", "deals"][..]),
        ]),
        permissions: permission_map([
            (
                "accounting",
                per_module([
                    ("invoices", PermissionGrant::All),
                    ("estimates", PermissionGrant::All),
                    ("customers", PermissionGrant::All),
                    ("bills", codes(&["create", "read", "read_all", "update"])),
                    ("vendors", codes(&["create", "read", "read_all", "update"])),
                    ("banking", codes(&["read", "reconcile"])),
                ]),
            ),
            (
                "crm",
                per_module([
                    ("leads", PermissionGrant::All),
                    ("contacts", PermissionGrant::All),
                    ("deals", codes(&["create", "read", "read_all", "update", "advance"])),
                ]),
            ),
        ]),
        credits: CreditGrant {
            free_credits: 100,
            paid_credit_limit: 500,
            free_expiry_days: 30,
        },
    }
}

fn professional() -> PlanAccessEntry {
    PlanAccessEntry {
        applications: strings(&["accounting", "crm", "inventory", "analytics"]),
        modules: module_map([
            ("accounting", ACCOUNTING_MODULES),
            ("crm", &["leads", "contacts", "deals", "activities"][..]),
            (
                "inventory",
                &["items", "warehouses", "stock_adjustments", "transfer_orders"][..],
            ),
            ("analytics", &["dashboard", "reports"][..]),
        ]),
        permissions: permission_map([
            ("accounting", AppGrant::All),
            ("crm", AppGrant::All),
            (
                "inventory",
                per_module([
                    ("items", PermissionGrant::All),
                    ("warehouses", PermissionGrant::All),
                    (
                        "stock_adjustments",
                        codes(&["create", "read", "read_all", "update"]),
                    ),
                    (
                        "transfer_orders",
                        codes(&["create", "read", "read_all", "update", "receive"]),
                    ),
                ]),
            ),
            (
                "analytics",
                per_module([
                    ("dashboard", PermissionGrant::All),
                    ("reports", codes(&["read", "read_all", "create", "export"])),
                ]),
            ),
        ]),
        credits: CreditGrant {
            free_credits: 500,
            paid_credit_limit: 5_000,
            free_expiry_days: 60,
        },
    }
}

fn enterprise() -> PlanAccessEntry {
    PlanAccessEntry {
        applications: strings(&["accounting", "crm", "inventory", "analytics", "payroll"]),
        modules: module_map([
            ("accounting", ACCOUNTING_MODULES),
            ("crm", &["leads", "contacts", "deals", "activities"][..]),
            (
                "inventory",
                &["items", "warehouses", "stock_adjustments", "transfer_orders"][..],
            ),
            ("analytics", &["dashboard", "reports"][..]),
            ("payroll", &["employees", "pay_runs", "pay_schedules"][..]),
        ]),
        permissions: permission_map([
            ("accounting", AppGrant::All),
            ("crm", AppGrant::All),
            ("inventory", AppGrant::All),
            ("analytics", AppGrant::All),
            ("payroll", AppGrant::All),
        ]),
        credits: CreditGrant {
            free_credits: 2_000,
            paid_credit_limit: 50_000,
            free_expiry_days: 90,
        },
    }
}

/// The builtin plan ladder.
pub fn builtin_plans() -> PlanAccess {
    PlanAccess::new(BTreeMap::from([
        (PlanId::FREE, free()),
        (PlanId::from_static("starter"), starter()),
        (PlanId::from_static("professional"), professional()),
        (PlanId::from_static("enterprise"), enterprise()),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_carries_the_four_builtin_plans() {
        let plans = builtin_plans();
        assert_eq!(plans.len(), 4);
        for id in ["free", "starter", "professional", "enterprise"] {
            assert!(plans.entry(&PlanId::new(id)).is_some(), "missing plan {id}");
        }
    }

    #[test]
    fn free_plan_stays_inside_accounting() {
        let plans = builtin_plans();
        let free = plans.entry(&PlanId::FREE).unwrap();
        assert_eq!(free.applications, ["accounting"]);
        assert_eq!(free.permissions.len(), 1);
        assert_eq!(free.credits.paid_credit_limit, 0);
    }

    #[test]
    fn credits_grow_with_the_tier() {
        let plans = builtin_plans();
        let ladder = ["free", "starter", "professional", "enterprise"];
        let grants: Vec<CreditGrant> = ladder
            .iter()
            .map(|id| plans.entry(&PlanId::new(*id)).unwrap().credits)
            .collect();
        for pair in grants.windows(2) {
            assert!(pair[0].free_credits < pair[1].free_credits);
            assert!(pair[0].paid_credit_limit < pair[1].paid_credit_limit);
            assert!(pair[0].free_expiry_days < pair[1].free_expiry_days);
        }
    }

    #[test]
    fn every_permissions_key_is_a_listed_application() {
        let plans = builtin_plans();
        for (plan, entry) in plans.entries() {
            for app in entry.permissions.keys() {
                assert!(entry.unlocks(app), "{plan}: permissions key {app} not in applications");
            }
            for app in entry.modules.keys() {
                assert!(entry.unlocks(app), "{plan}: modules key {app} not in applications");
            }
        }
    }

    #[test]
    fn table_serializes_keyed_by_plan_id() {
        let plans = builtin_plans();
        let json = serde_json::to_value(&plans).unwrap();
        assert!(json.get("free").is_some());
        assert_eq!(json["enterprise"]["permissions"]["payroll"], "*");
        let back: PlanAccess = serde_json::from_value(json).unwrap();
        assert_eq!(back, plans);
    }
}
