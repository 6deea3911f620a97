//! Read-side lookups over a catalog.
//!
//! Every lookup takes the catalog it reads from, so callers can query a
//! test fixture as easily as the builtin suite. Lookups return `Option`
//! where a code may legitimately be unknown; the display helpers fall back
//! instead, because rendering a permission list should never fail just
//! because one code predates the running catalog.

use crate::types::{Application, Catalog, Module, Permission};

/// Borrowing query handle over a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// All applications in declaration order.
    pub fn applications(&self) -> &'a [Application] {
        self.catalog.applications()
    }

    /// All applications sorted by `sort_order`.
    ///
    /// The sort is stable, so applications sharing a `sort_order` keep
    /// their declaration order relative to each other.
    pub fn applications_by_display_order(&self) -> Vec<&'a Application> {
        let mut apps: Vec<&'a Application> = self.catalog.applications().iter().collect();
        apps.sort_by_key(|a| a.sort_order);
        apps
    }

    pub fn application(&self, app_code: &str) -> Option<&'a Application> {
        self.catalog
            .applications()
            .iter()
            .find(|a| a.app_code == app_code)
    }

    /// Modules of an application, or an empty slice for an unknown app.
    pub fn modules(&self, app_code: &str) -> &'a [Module] {
        self.application(app_code)
            .map(|a| a.modules.as_slice())
            .unwrap_or(&[])
    }

    pub fn module(&self, app_code: &str, module_code: &str) -> Option<&'a Module> {
        self.application(app_code)?
            .modules
            .iter()
            .find(|m| m.module_code == module_code)
    }

    /// Permissions of a module, or an empty slice when either code is unknown.
    pub fn permissions(&self, app_code: &str, module_code: &str) -> &'a [Permission] {
        self.module(app_code, module_code)
            .map(|m| m.permissions.as_slice())
            .unwrap_or(&[])
    }

    pub fn permission(
        &self,
        app_code: &str,
        module_code: &str,
        code: &str,
    ) -> Option<&'a Permission> {
        self.module(app_code, module_code)?
            .permissions
            .iter()
            .find(|p| p.code == code)
    }

    /// Display name of a permission, falling back to the raw code.
    pub fn permission_name(&self, app_code: &str, module_code: &str, code: &str) -> String {
        self.permission(app_code, module_code, code)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| code.to_string())
    }

    /// Description of a permission, falling back to the empty string.
    pub fn permission_description(&self, app_code: &str, module_code: &str, code: &str) -> String {
        self.permission(app_code, module_code, code)
            .map(|p| p.description.clone())
            .unwrap_or_default()
    }
}
