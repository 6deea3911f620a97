//! Capability catalog data model.
//!
//! The catalog is a three-level tree (application → module → permission)
//! describing every grantable capability in the suite. It is pure data:
//! declaration order is preserved at every level and nothing here mutates
//! after construction.

use serde::{Deserialize, Serialize};

/// An atomic grantable action inside a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Unique within the owning module.
    pub code: String,
    /// Human label shown in role editors.
    pub name: String,
    pub description: String,
}

/// A functional area inside an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Unique within the owning application (not globally).
    pub module_code: String,
    pub module_name: String,
    pub description: String,
    /// Whether the module is part of the application's default surface.
    pub is_core: bool,
    pub permissions: Vec<Permission>,
}

/// A top-level product area of the suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Globally unique slug; stable across releases.
    pub app_code: String,
    pub app_name: String,
    pub description: String,
    pub icon: String,
    pub base_url: String,
    pub version: String,
    /// Whether the application is bundled by default.
    pub is_core: bool,
    /// Display ordering (ascending).
    pub sort_order: i32,
    pub modules: Vec<Module>,
}

/// The full application → module → permission tree.
///
/// Built once at process start (configuration as code) and passed by
/// reference into the query service, resolver and provisioner; never
/// accessed as ambient global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    applications: Vec<Application>,
}

impl Catalog {
    pub fn new(applications: Vec<Application>) -> Self {
        Self { applications }
    }

    /// All applications in declaration order.
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }
}

/// Render the storage form of a fully-qualified permission code.
///
/// This exact three-segment, dot-joined string is the format persisted in
/// role records and consumed by authorization checks.
pub fn full_code(app_code: &str, module_code: &str, code: &str) -> String {
    format!("{app_code}.{module_code}.{code}")
}

/// Parsed view of a fully-qualified permission code.
///
/// The tuple `(app_code, module_code, code)` is the only globally unique
/// identifier in the catalog; segments never contain literal dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullCode {
    pub app_code: String,
    pub module_code: String,
    pub code: String,
}

impl FullCode {
    pub fn new(
        app_code: impl Into<String>,
        module_code: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            app_code: app_code.into(),
            module_code: module_code.into(),
            code: code.into(),
        }
    }

    /// Parse `"app.module.code"`.
    ///
    /// Returns `None` unless the input has exactly three non-empty segments.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(app), Some(module), Some(code), None)
                if !app.is_empty() && !module.is_empty() && !code.is_empty() =>
            {
                Some(Self::new(app, module, code))
            }
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        full_code(&self.app_code, &self.module_code, &self.code)
    }
}

impl core::fmt::Display for FullCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.app_code, self.module_code, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_code_renders_three_segments() {
        assert_eq!(full_code("crm", "leads", "read"), "crm.leads.read");
    }

    #[test]
    fn parse_valid_code() {
        let fc = FullCode::parse("accounting.invoices.send").unwrap();
        assert_eq!(fc.app_code, "accounting");
        assert_eq!(fc.module_code, "invoices");
        assert_eq!(fc.code, "send");
        assert_eq!(fc.render(), "accounting.invoices.send");
    }

    #[test]
    fn parse_rejects_wrong_segment_count() {
        assert!(FullCode::parse("accounting.invoices").is_none());
        assert!(FullCode::parse("a.b.c.d").is_none());
        assert!(FullCode::parse("").is_none());
    }

    #[test]
    fn parse_rejects_empty_segments() {
        assert!(FullCode::parse("accounting..read").is_none());
        assert!(FullCode::parse(".invoices.read").is_none());
        assert!(FullCode::parse("accounting.invoices.").is_none());
    }

    #[test]
    fn application_serializes_with_camel_case_keys() {
        let app = Application {
            app_code: "crm".to_string(),
            app_name: "CRM".to_string(),
            description: "Pipeline".to_string(),
            icon: "handshake".to_string(),
            base_url: "/crm".to_string(),
            version: "1.0.0".to_string(),
            is_core: true,
            sort_order: 2,
            modules: vec![Module {
                module_code: "leads".to_string(),
                module_name: "Leads".to_string(),
                description: String::new(),
                is_core: true,
                permissions: vec![Permission {
                    code: "read".to_string(),
                    name: "View Leads".to_string(),
                    description: String::new(),
                }],
            }],
        };
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["appCode"], "crm");
        assert_eq!(json["baseUrl"], "/crm");
        assert_eq!(json["isCore"], true);
        assert_eq!(json["sortOrder"], 2);
        assert_eq!(json["modules"][0]["moduleCode"], "leads");
        assert_eq!(json["modules"][0]["permissions"][0]["code"], "read");
    }
}
