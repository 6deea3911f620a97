//! meridian-plans — subscription plans projected onto the catalog.
//!
//! A plan never owns permissions; it references catalog coordinates, with
//! wildcards standing for "everything defined there". Resolution against
//! the catalog lives in meridian-access; this crate owns the shapes and the
//! builtin ladder.

pub mod entry;
pub mod grant;
pub mod plan;
pub mod table;

pub use entry::{CreditGrant, PlanAccessEntry};
pub use grant::{AppGrant, PermissionGrant, WILDCARD};
pub use plan::PlanId;
pub use table::{builtin_plans, PlanAccess};
