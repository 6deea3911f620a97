//! `meridian-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the
//! permission-matrix crates (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{OrgId, TenantId, UserId};
