use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::ServerFilter;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, filter: &ServerFilter) -> Result<CmdResult> {
    let records = store.list()?;
    let listed = filter.apply(&records);

    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No servers yet."));
    } else if listed.is_empty() {
        result.add_message(CmdMessage::info("No servers match the current filters."));
    }
    Ok(result.with_listed_servers(listed))
}
