//! # Domain Model: Server Records
//!
//! A [`ServerRecord`] describes one database server: where it runs, who owns it,
//! which operating system and DBMS it carries, how it is reached, and where it is
//! in its lifecycle.
//!
//! ## Shape
//!
//! ```text
//! ServerRecord
//! ├── id: Option<ServerId>      <-- assigned by the store, never by the user
//! └── fields: ServerFields      <-- 27 free-form text fields
//! ```
//!
//! The fields are flattened on the wire, so a serialized record is a single flat
//! mapping: `id` first (when present) followed by the 27 keys in canonical order.
//! The canonical order and the display labels live in [`crate::columns`].
//!
//! ## Identity
//!
//! - A record that has not been persisted has no identifier.
//! - [`crate::store::DataStore::create`] assigns one; after that it never changes.
//! - Updates address a record by its identifier and keep it.
//!
//! ## Validation
//!
//! The only rule is that the server name is not empty or whitespace-only, and it is
//! enforced when a record is created or updated (see [`ServerFields::validate`]).
//! Imports are deliberately permissive and skip it.
//!
//! ## Lenient Scalars
//!
//! Hand-edited YAML tends to contain values like `majorRelease: 15` or
//! `dmz: no`. Every field accepts strings, numbers, booleans, and null; non-string
//! scalars are kept as their textual form and null becomes the empty string.

use crate::error::{Result, ServzError};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type ServerId = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerFields {
    #[serde(deserialize_with = "lenient_string")]
    pub server_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub standort: String,
    #[serde(deserialize_with = "lenient_string")]
    pub dmz: String,
    #[serde(deserialize_with = "lenient_string")]
    pub verfuegbarkeit: String,
    #[serde(deserialize_with = "lenient_string")]
    pub schutzbedarf: String,
    #[serde(deserialize_with = "lenient_string")]
    pub art_der_umgebung: String,
    #[serde(deserialize_with = "lenient_string")]
    pub fqdn_prod: String,
    #[serde(deserialize_with = "lenient_string")]
    pub fqdn_admin: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ip_prod: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ip_admin: String,
    #[serde(deserialize_with = "lenient_string")]
    pub betriebssystem: String,
    #[serde(deserialize_with = "lenient_string")]
    pub dbms: String,
    #[serde(deserialize_with = "lenient_string")]
    pub dbms_edition: String,
    #[serde(deserialize_with = "lenient_string")]
    pub major_release: String,
    #[serde(deserialize_with = "lenient_string")]
    pub kunde: String,
    #[serde(deserialize_with = "lenient_string")]
    pub instanzname: String,
    #[serde(deserialize_with = "lenient_string")]
    pub verbindungsart: String,
    #[serde(deserialize_with = "lenient_string")]
    pub sicherungsmethode: String,
    #[serde(deserialize_with = "lenient_string")]
    pub verfahren_zweck: String,
    #[serde(deserialize_with = "lenient_string")]
    pub kommentar: String,
    #[serde(deserialize_with = "lenient_string")]
    pub clustername: String,
    #[serde(deserialize_with = "lenient_string")]
    pub itsm_business_service: String,
    #[serde(deserialize_with = "lenient_string")]
    pub lebenszyklus: String,
    #[serde(deserialize_with = "lenient_string")]
    pub support_ende: String,
    #[serde(deserialize_with = "lenient_string")]
    pub anzeigename: String,
    #[serde(deserialize_with = "lenient_string")]
    pub cc_und_mem: String,
    #[serde(deserialize_with = "lenient_string")]
    pub service: String,
}

impl ServerFields {
    pub fn with_server_name(name: impl Into<String>) -> Self {
        Self {
            server_name: name.into(),
            ..Default::default()
        }
    }

    /// Value of the field with the given canonical key, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "serverName" => &self.server_name,
            "standort" => &self.standort,
            "dmz" => &self.dmz,
            "verfuegbarkeit" => &self.verfuegbarkeit,
            "schutzbedarf" => &self.schutzbedarf,
            "artDerUmgebung" => &self.art_der_umgebung,
            "fqdnProd" => &self.fqdn_prod,
            "fqdnAdmin" => &self.fqdn_admin,
            "ipProd" => &self.ip_prod,
            "ipAdmin" => &self.ip_admin,
            "betriebssystem" => &self.betriebssystem,
            "dbms" => &self.dbms,
            "dbmsEdition" => &self.dbms_edition,
            "majorRelease" => &self.major_release,
            "kunde" => &self.kunde,
            "instanzname" => &self.instanzname,
            "verbindungsart" => &self.verbindungsart,
            "sicherungsmethode" => &self.sicherungsmethode,
            "verfahrenZweck" => &self.verfahren_zweck,
            "kommentar" => &self.kommentar,
            "clustername" => &self.clustername,
            "itsmBusinessService" => &self.itsm_business_service,
            "lebenszyklus" => &self.lebenszyklus,
            "supportEnde" => &self.support_ende,
            "anzeigename" => &self.anzeigename,
            "ccUndMem" => &self.cc_und_mem,
            "service" => &self.service,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        let value = match key {
            "serverName" => &mut self.server_name,
            "standort" => &mut self.standort,
            "dmz" => &mut self.dmz,
            "verfuegbarkeit" => &mut self.verfuegbarkeit,
            "schutzbedarf" => &mut self.schutzbedarf,
            "artDerUmgebung" => &mut self.art_der_umgebung,
            "fqdnProd" => &mut self.fqdn_prod,
            "fqdnAdmin" => &mut self.fqdn_admin,
            "ipProd" => &mut self.ip_prod,
            "ipAdmin" => &mut self.ip_admin,
            "betriebssystem" => &mut self.betriebssystem,
            "dbms" => &mut self.dbms,
            "dbmsEdition" => &mut self.dbms_edition,
            "majorRelease" => &mut self.major_release,
            "kunde" => &mut self.kunde,
            "instanzname" => &mut self.instanzname,
            "verbindungsart" => &mut self.verbindungsart,
            "sicherungsmethode" => &mut self.sicherungsmethode,
            "verfahrenZweck" => &mut self.verfahren_zweck,
            "kommentar" => &mut self.kommentar,
            "clustername" => &mut self.clustername,
            "itsmBusinessService" => &mut self.itsm_business_service,
            "lebenszyklus" => &mut self.lebenszyklus,
            "supportEnde" => &mut self.support_ende,
            "anzeigename" => &mut self.anzeigename,
            "ccUndMem" => &mut self.cc_und_mem,
            "service" => &mut self.service,
            _ => return None,
        };
        Some(value)
    }

    /// Set a field by canonical key.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let slot = self
            .get_mut(key)
            .ok_or_else(|| ServzError::Validation(format!("Unknown field: {}", key)))?;
        *slot = value.into();
        Ok(())
    }

    /// All field values in canonical column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        crate::columns::COLUMNS
            .iter()
            .filter_map(move |col| self.get(col.key))
    }

    /// Required-field check applied on create and update.
    pub fn validate(&self) -> Result<()> {
        if self.server_name.trim().is_empty() {
            return Err(ServzError::Validation(
                "Server name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ServerId>,
    #[serde(flatten)]
    pub fields: ServerFields,
}

impl ServerRecord {
    pub fn new(fields: ServerFields) -> Self {
        Self { id: None, fields }
    }

    pub fn with_id(id: ServerId, fields: ServerFields) -> Self {
        Self {
            id: Some(id),
            fields,
        }
    }

    pub fn server_name(&self) -> &str {
        &self.fields.server_name
    }

    /// Identifier as shown to users, `-` for unsaved records.
    pub fn display_id(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientString;

    impl<'de> Visitor<'de> for LenientString {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, number, boolean or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<String, E> {
            Ok(String::new())
        }

        fn visit_some<D2>(self, deserializer: D2) -> std::result::Result<String, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(LenientString)
}
