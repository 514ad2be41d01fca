use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ServerId;
use crate::store::DataStore;
use tracing::info;

/// Apply `(key, value)` assignments to an existing server.
pub fn run<S: DataStore>(
    store: &mut S,
    id: ServerId,
    assignments: &[(String, String)],
) -> Result<CmdResult> {
    let mut record = store.get(id)?;
    for (key, value) in assignments {
        record.fields.set(key, value.as_str())?;
    }
    record.fields.validate()?;

    let updated = store.update(&record)?;
    info!(id, changed = assignments.len(), "server updated");

    let mut result = CmdResult::default();
    if assignments.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for server {}",
            updated.display_id()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Server updated: {} (id {})",
            updated.server_name(),
            updated.display_id()
        )));
    }
    Ok(result.with_affected_servers(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServzError;
    use crate::store::memory::fixtures::StoreFixture;

    fn assign(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_update_applies_assignments() {
        let mut fixture = StoreFixture::new().with_servers(2);
        let result = run(
            &mut fixture.store,
            2,
            &[assign("standort", "Hamburg"), assign("kunde", "Acme")],
        )
        .unwrap();

        let record = fixture.store.get(2).unwrap();
        assert_eq!(record.fields.standort, "Hamburg");
        assert_eq!(record.fields.kunde, "Acme");
        assert_eq!(result.affected_servers[0], record);
        assert!(result.messages[0].content.contains("Server updated: db02"));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut fixture = StoreFixture::new().with_servers(1);
        let result = run(&mut fixture.store, 5, &[assign("standort", "Hamburg")]);
        assert!(matches!(result, Err(ServzError::NotFound(5))));
    }

    #[test]
    fn test_blanking_name_is_rejected() {
        let mut fixture = StoreFixture::new().with_servers(1);
        let result = run(&mut fixture.store, 1, &[assign("serverName", "   ")]);
        assert!(matches!(result, Err(ServzError::Validation(_))));
        assert_eq!(fixture.store.get(1).unwrap().server_name(), "db01");
    }

    #[test]
    fn test_unknown_field_is_rejected_before_writing() {
        let mut fixture = StoreFixture::new().with_servers(1);
        let result = run(
            &mut fixture.store,
            1,
            &[assign("standort", "Hamburg"), assign("rack", "R1")],
        );
        assert!(matches!(result, Err(ServzError::Validation(_))));
        assert_eq!(fixture.store.get(1).unwrap().fields.standort, "Berlin");
    }

    #[test]
    fn test_empty_assignments_is_a_noop() {
        let mut fixture = StoreFixture::new().with_servers(1);
        let result = run(&mut fixture.store, 1, &[]).unwrap();
        assert!(result.messages[0].content.contains("Nothing to change"));
    }
}
