use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model;
use crate::repository::ItemRepository;
use crate::store::snapshot::SnapshotStore;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    repo: &mut ItemRepository,
    snapshots: &SnapshotStore<S>,
    name: String,
    calories_raw: &str,
) -> Result<CmdResult> {
    // Calories are validated at this boundary; the repository only ever
    // sees integers.
    let calories = model::parse_calories(calories_raw)?;

    let item = repo.add(name, calories);
    snapshots.append(&item)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} ({} kcal)",
        item.name, item.calories
    )));
    result.affected_items.push(item);
    Ok(result)
}
