use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ServerFields;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, fields: ServerFields) -> Result<CmdResult> {
    fields.validate()?;
    let record = store.create(fields)?;
    info!(id = ?record.id, name = %record.server_name(), "server created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Server created: {} (id {})",
        record.server_name(),
        record.display_id()
    )));
    Ok(result.with_affected_servers(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServzError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_create_assigns_id_and_reports() {
        let mut store = InMemoryStore::new();
        let mut fields = ServerFields::with_server_name("db01");
        fields.dbms = "PostgreSQL".into();

        let result = run(&mut store, fields).unwrap();

        assert_eq!(result.affected_servers.len(), 1);
        assert_eq!(result.affected_servers[0].id, Some(1));
        assert_eq!(result.affected_servers[0].fields.dbms, "PostgreSQL");
        assert!(result.messages[0].content.contains("Server created: db01"));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_blank_name_is_rejected_and_store_unchanged() {
        let mut store = InMemoryStore::new();
        for name in ["", "  ", "\t\n"] {
            let result = run(&mut store, ServerFields::with_server_name(name));
            assert!(matches!(result, Err(ServzError::Validation(_))));
        }
        assert!(store.list().unwrap().is_empty());

        // no identifier was consumed by the rejected attempts
        let ok = run(&mut store, ServerFields::with_server_name("db01")).unwrap();
        assert_eq!(ok.affected_servers[0].id, Some(1));
    }
}
