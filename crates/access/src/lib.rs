//! `meridian-access` — plan resolution, role provisioning and the derived
//! compatibility maps.
//!
//! This crate is intentionally decoupled from HTTP and storage: everything
//! here is a pure function of an injected catalog and plan table.

pub mod legacy;
pub mod module_access;
pub mod plan_check;
pub mod provision;
pub mod resolver;


pub use legacy::{accounting_legacy_actions, legacy_action_map};
pub use module_access::{
    accounting_module_access, keyword_unlocks, module_access_map, UmbrellaAlias,
    ACCOUNTING_ALIASES,
};
pub use plan_check::cross_check;
pub use provision::{
    RoleConfig, RoleProvisioner, RoleScope, SUPER_ADMIN_COLOR, SUPER_ADMIN_PRIORITY,
};
pub use resolver::{PlanResolver, ResolveError, ResolvedPermission};
