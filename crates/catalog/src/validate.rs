//! Structural validation of a catalog.
//!
//! Meant for CI and startup checks: collects every defect instead of
//! stopping at the first, so one run reports everything that needs fixing.

use crate::types::Catalog;

/// Check catalog structure and return a human-readable line per defect.
///
/// An empty result means the catalog is well-formed. The checks are
/// independent; an application with no name still has its modules checked.
pub fn validate(catalog: &Catalog) -> Vec<String> {
    let mut defects = Vec::new();

    for app in catalog.applications() {
        if app.app_name.trim().is_empty() {
            defects.push(format!("application '{}' has an empty name", app.app_code));
        }
        if app.modules.is_empty() {
            defects.push(format!("application '{}' has no modules", app.app_code));
        }
        for m in &app.modules {
            if m.permissions.is_empty() {
                defects.push(format!(
                    "module '{}.{}' has no permissions",
                    app.app_code, m.module_code
                ));
            }
            for p in &m.permissions {
                if p.code.trim().is_empty() || p.name.trim().is_empty() {
                    defects.push(format!(
                        "module '{}.{}' has a permission with an empty code or name",
                        app.app_code, m.module_code
                    ));
                }
            }
        }
    }

    defects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_catalog;
    use crate::types::{Application, Module, Permission};

    fn app(code: &str, name: &str, modules: Vec<Module>) -> Application {
        Application {
            app_code: code.to_string(),
            app_name: name.to_string(),
            description: String::new(),
            icon: String::new(),
            base_url: String::new(),
            version: "0.0.0".to_string(),
            is_core: false,
            sort_order: 0,
            modules,
        }
    }

    #[test]
    fn builtin_catalog_is_clean() {
        assert!(validate(&builtin_catalog()).is_empty());
    }

    #[test]
    fn reports_empty_application_name() {
        let catalog = Catalog::new(vec![app(
            "ghost",
            "  ",
            vec![Module {
                module_code: "m".to_string(),
                module_name: "M".to_string(),
                description: String::new(),
                is_core: false,
                permissions: vec![Permission {
                    code: "read".to_string(),
                    name: "Read".to_string(),
                    description: String::new(),
                }],
            }],
        )]);
        let defects = validate(&catalog);
        assert_eq!(defects, ["application 'ghost' has an empty name"]);
    }

    #[test]
    fn reports_every_defect_not_just_the_first() {
        let catalog = Catalog::new(vec![app(
            "broken",
            "",
            vec![
                Module {
                    module_code: "empty".to_string(),
                    module_name: "Empty".to_string(),
                    description: String::new(),
                    is_core: false,
                    permissions: vec![],
                },
                Module {
                    module_code: "nameless".to_string(),
                    module_name: "Nameless".to_string(),
                    description: String::new(),
                    is_core: false,
                    permissions: vec![Permission {
                        code: "x".to_string(),
                        name: "".to_string(),
                        description: String::new(),
                    }],
                },
            ],
        )]);
        let defects = validate(&catalog);
        assert_eq!(defects.len(), 3);
        assert!(defects[0].contains("empty name"));
        assert!(defects[1].contains("broken.empty"));
        assert!(defects[2].contains("broken.nameless"));
    }

    #[test]
    fn application_without_modules_is_a_defect() {
        let catalog = Catalog::new(vec![app("bare", "Bare", vec![])]);
        let defects = validate(&catalog);
        assert_eq!(defects, ["application 'bare' has no modules"]);
    }
}
