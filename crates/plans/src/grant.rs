//! Grant values used inside a plan's permission map.
//!
//! On the wire a grant is either the literal `"*"`, an array of permission
//! codes, or (at the application level) an object keyed by module code.
//! In memory the wildcard is a distinct variant, never a magic string, so
//! exhaustive matches keep every consumer honest about handling it.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire literal meaning "everything below this point".
pub const WILDCARD: &str = "*";

/// Grant for one module: everything, or an explicit list of codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionGrant {
    All,
    Codes(Vec<String>),
}

impl PermissionGrant {
    /// Whether this grant covers `code`.
    ///
    /// `All` covers any code, including codes the catalog has never heard
    /// of; catalog membership is the resolver's concern, not the grant's.
    pub fn permits(&self, code: &str) -> bool {
        match self {
            Self::All => true,
            Self::Codes(codes) => codes.iter().any(|c| c == code),
        }
    }
}

impl Serialize for PermissionGrant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::All => serializer.serialize_str(WILDCARD),
            Self::Codes(codes) => codes.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PermissionGrant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PermissionGrantVisitor;

        impl<'de> Visitor<'de> for PermissionGrantVisitor {
            type Value = PermissionGrant;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "\"{WILDCARD}\" or an array of permission codes")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value == WILDCARD {
                    Ok(PermissionGrant::All)
                } else {
                    Err(de::Error::invalid_value(de::Unexpected::Str(value), &self))
                }
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut codes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(code) = seq.next_element::<String>()? {
                    codes.push(code);
                }
                Ok(PermissionGrant::Codes(codes))
            }
        }

        deserializer.deserialize_any(PermissionGrantVisitor)
    }
}

/// Grant for one application: everything, or a per-module breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppGrant {
    All,
    PerModule(BTreeMap<String, PermissionGrant>),
}

impl AppGrant {
    /// Whether this grant covers `code` inside `module_code`.
    ///
    /// A module absent from a per-module breakdown grants nothing.
    pub fn permits(&self, module_code: &str, code: &str) -> bool {
        match self {
            Self::All => true,
            Self::PerModule(modules) => modules
                .get(module_code)
                .is_some_and(|grant| grant.permits(code)),
        }
    }
}

impl Serialize for AppGrant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::All => serializer.serialize_str(WILDCARD),
            Self::PerModule(modules) => modules.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AppGrant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AppGrantVisitor;

        impl<'de> Visitor<'de> for AppGrantVisitor {
            type Value = AppGrant;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "\"{WILDCARD}\" or a map of module codes to grants")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value == WILDCARD {
                    Ok(AppGrant::All)
                } else {
                    Err(de::Error::invalid_value(de::Unexpected::Str(value), &self))
                }
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut modules = BTreeMap::new();
                while let Some((module_code, grant)) =
                    map.next_entry::<String, PermissionGrant>()?
                {
                    modules.insert(module_code, grant);
                }
                Ok(AppGrant::PerModule(modules))
            }
        }

        deserializer.deserialize_any(AppGrantVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn permission_grant_wildcard_round_trips_as_the_literal() {
        let value = serde_json::to_value(&PermissionGrant::All).unwrap();
        assert_eq!(value, json!("*"));
        let back: PermissionGrant = serde_json::from_value(value).unwrap();
        assert_eq!(back, PermissionGrant::All);
    }

    #[test]
    fn permission_grant_codes_round_trip_as_an_array() {
        let grant = PermissionGrant::Codes(vec!["create".to_string(), "read".to_string()]);
        let value = serde_json::to_value(&grant).unwrap();
        assert_eq!(value, json!(["create", "read"]));
        let back: PermissionGrant = serde_json::from_value(value).unwrap();
        assert_eq!(back, grant);
    }

    #[test]
    fn permission_grant_rejects_strings_other_than_the_wildcard() {
        let err = serde_json::from_value::<PermissionGrant>(json!("all")).unwrap_err();
        assert!(err.to_string().contains("\"*\""));
    }

    #[test]
    fn app_grant_map_shape() {
        let grant = AppGrant::PerModule(BTreeMap::from([
            ("invoices".to_string(), PermissionGrant::All),
            (
                "customers".to_string(),
                PermissionGrant::Codes(vec!["read".to_string()]),
            ),
        ]));
        let value = serde_json::to_value(&grant).unwrap();
        assert_eq!(value, json!({ "customers": ["read"], "invoices": "*" }));
        let back: AppGrant = serde_json::from_value(value).unwrap();
        assert_eq!(back, grant);
    }

    #[test]
    fn permits_checks_membership_at_each_level() {
        let grant = AppGrant::PerModule(BTreeMap::from([
            ("invoices".to_string(), PermissionGrant::All),
            (
                "customers".to_string(),
                PermissionGrant::Codes(vec!["read".to_string()]),
            ),
        ]));
        assert!(grant.permits("invoices", "anything"));
        assert!(grant.permits("customers", "read"));
        assert!(!grant.permits("customers", "delete"));
        assert!(!grant.permits("bills", "read"));
        assert!(AppGrant::All.permits("bills", "read"));
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        fn permission_grant_strategy() -> impl Strategy<Value = PermissionGrant> {
            prop_oneof![
                Just(PermissionGrant::All),
                prop::collection::vec("[a-z_]{1,12}", 0..6).prop_map(PermissionGrant::Codes),
            ]
        }

        fn app_grant_strategy() -> impl Strategy<Value = AppGrant> {
            prop_oneof![
                Just(AppGrant::All),
                prop::collection::btree_map("[a-z_]{1,12}", permission_grant_strategy(), 0..6)
                    .prop_map(AppGrant::PerModule),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any grant survives a JSON round trip unchanged.
            #[test]
            fn app_grant_round_trips_through_json(grant in app_grant_strategy()) {
                let json = serde_json::to_string(&grant).unwrap();
                let back: AppGrant = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(back, grant);
            }

            /// Property: the wildcard covers every code an explicit list covers.
            #[test]
            fn wildcard_dominates_explicit_codes(
                codes in prop::collection::vec("[a-z_]{1,12}", 1..6)
            ) {
                let explicit = PermissionGrant::Codes(codes.clone());
                for code in &codes {
                    prop_assert!(explicit.permits(code));
                    prop_assert!(PermissionGrant::All.permits(code));
                }
            }
        }
    }
}
