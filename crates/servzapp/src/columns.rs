//! Column table.
//!
//! The single source of truth for the 27 server fields: their canonical key (used in
//! documents and assignments), their display label, and whether the table view offers
//! a per-column filter for them. The filter engine, the `key=value` parser, and the
//! CLI table all read from here instead of carrying their own lists.

/// A single column of the server table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Canonical field key (e.g. "serverName", "fqdnProd")
    pub key: &'static str,

    /// Human readable label shown in tables and forms
    pub label: &'static str,

    /// Whether the column is shown in the default table and carries its own filter
    pub filterable: bool,
}

impl Column {
    const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            filterable: false,
        }
    }

    const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }
}

/// All columns in canonical order. Serialized records follow this order.
pub const COLUMNS: &[Column] = &[
    Column::new("serverName", "Server").filterable(),
    Column::new("standort", "Standort").filterable(),
    Column::new("dmz", "DMZ"),
    Column::new("verfuegbarkeit", "Verfügbarkeit"),
    Column::new("schutzbedarf", "Schutzbedarf"),
    Column::new("artDerUmgebung", "Art der Umgebung"),
    Column::new("fqdnProd", "FQDN (Prod)"),
    Column::new("fqdnAdmin", "FQDN (Admin)"),
    Column::new("ipProd", "IP (Prod)"),
    Column::new("ipAdmin", "IP (Admin)"),
    Column::new("betriebssystem", "Betriebssystem").filterable(),
    Column::new("dbms", "DBMS").filterable(),
    Column::new("dbmsEdition", "DBMS Edition"),
    Column::new("majorRelease", "Major Release"),
    Column::new("kunde", "Kunde").filterable(),
    Column::new("instanzname", "Instanzname"),
    Column::new("verbindungsart", "Verbindungsart"),
    Column::new("sicherungsmethode", "Sicherungsmethode"),
    Column::new("verfahrenZweck", "Verfahren / Zweck"),
    Column::new("kommentar", "Kommentar"),
    Column::new("clustername", "Clustername"),
    Column::new("itsmBusinessService", "ITSM Business Service"),
    Column::new("lebenszyklus", "Lebenszyklus"),
    Column::new("supportEnde", "Support Ende"),
    Column::new("anzeigename", "Anzeigename"),
    Column::new("ccUndMem", "CC und MEM"),
    Column::new("service", "Service").filterable(),
];

/// Display order of the table view. Every entry is a filterable column.
pub const VISIBLE_COLUMNS: &[&str] = &[
    "serverName",
    "standort",
    "kunde",
    "betriebssystem",
    "dbms",
    "service",
];

/// Look up a column by its canonical key.
pub fn get_column(key: &str) -> Option<&'static Column> {
    COLUMNS.iter().find(|col| col.key == key)
}

/// Columns that carry a per-column filter, in canonical order.
pub fn filterable_columns() -> impl Iterator<Item = &'static Column> {
    COLUMNS.iter().filter(|col| col.filterable)
}

/// Visible columns in table display order.
pub fn visible_columns() -> impl Iterator<Item = &'static Column> {
    VISIBLE_COLUMNS.iter().filter_map(|key| get_column(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_all_fields_once() {
        assert_eq!(COLUMNS.len(), 27);
        for col in COLUMNS {
            assert_eq!(COLUMNS.iter().filter(|c| c.key == col.key).count(), 1);
        }
    }

    #[test]
    fn lookup_by_key() {
        let col = get_column("fqdnAdmin").unwrap();
        assert_eq!(col.label, "FQDN (Admin)");
        assert!(!col.filterable);
        assert!(get_column("FQDNADMIN").is_none());
    }

    #[test]
    fn visible_columns_are_exactly_the_filterable_ones() {
        let visible: Vec<_> = visible_columns().map(|c| c.key).collect();
        assert_eq!(
            visible,
            vec![
                "serverName",
                "standort",
                "kunde",
                "betriebssystem",
                "dbms",
                "service"
            ]
        );

        let mut filterable: Vec<_> = filterable_columns().map(|c| c.key).collect();
        let mut sorted_visible = visible.clone();
        filterable.sort();
        sorted_visible.sort();
        assert_eq!(filterable, sorted_visible);
    }
}
