use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ServerId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, ids: &[ServerId]) -> Result<CmdResult> {
    let records = ids
        .iter()
        .map(|id| store.get(*id))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_servers(records))
}
