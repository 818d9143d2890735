use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::ItemRepository;
use crate::store::snapshot::SnapshotStore;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    repo: &mut ItemRepository,
    snapshots: &SnapshotStore<S>,
    confirmed: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !confirmed {
        result.add_message(CmdMessage::warning(
            "This removes every tracked item. Pass --yes to confirm.",
        ));
        return Ok(result);
    }

    let removed = repo.len();
    repo.clear();
    snapshots.clear()?;

    result.add_message(CmdMessage::success(format!("Cleared {} item(s)", removed)));
    Ok(result)
}
