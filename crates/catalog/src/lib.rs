//! meridian-catalog — the capability catalog of the Meridian suite.
//!
//! Applications contain modules, modules contain permissions, and the
//! whole tree is compiled into the product. This crate owns the data
//! model, the builtin suite definition, typed lookups over it, and the
//! structural validation that keeps the definition honest.

pub mod builtin;
pub mod query;
pub mod types;
pub mod validate;

pub use builtin::{builtin_catalog, ACCOUNTING_APP};
pub use query::CatalogQuery;
pub use types::{full_code, Application, Catalog, FullCode, Module, Permission};
pub use validate::validate;
