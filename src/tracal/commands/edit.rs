use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model;
use crate::repository::ItemRepository;
use crate::store::snapshot::SnapshotStore;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    repo: &mut ItemRepository,
    snapshots: &SnapshotStore<S>,
    id: u64,
    name: String,
    calories_raw: &str,
) -> Result<CmdResult> {
    let calories = model::parse_calories(calories_raw)?;

    let mut result = CmdResult::default();
    if repo.set_current(id).is_none() {
        result.add_message(CmdMessage::warning(format!("No item with id {}", id)));
        return Ok(result);
    }

    if let Some(updated) = repo.update_current(name, calories) {
        snapshots.replace(&updated)?;
        result.add_message(CmdMessage::success(format!(
            "Updated {} ({} kcal)",
            updated.name, updated.calories
        )));
        result.affected_items.push(updated);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::commands::MessageLevel;
    use crate::store::memory::MemoryStore;

    fn setup_with_items() -> (ItemRepository, SnapshotStore<MemoryStore>) {
        let mut repo = ItemRepository::new();
        let snapshots = SnapshotStore::new(MemoryStore::new());
        add::run(&mut repo, &snapshots, "Rice".into(), "500").unwrap();
        add::run(&mut repo, &snapshots, "Egg".into(), "150").unwrap();
        (repo, snapshots)
    }

    #[test]
    fn updates_item_and_mirrors_snapshot() {
        let (mut repo, snapshots) = setup_with_items();
        let result = run(&mut repo, &snapshots, 0, "Rice".into(), "600").unwrap();

        assert_eq!(result.affected_items.len(), 1);
        assert_eq!(result.affected_items[0].calories, 600);
        assert_eq!(repo.total_calories(), 750);
        assert_eq!(snapshots.load_all().unwrap(), repo.items().to_vec());
    }

    #[test]
    fn absent_id_warns_and_mutates_nothing() {
        let (mut repo, snapshots) = setup_with_items();
        let before = snapshots.load_all().unwrap();

        let result = run(&mut repo, &snapshots, 99, "X".into(), "1").unwrap();

        assert!(result.affected_items.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert_eq!(repo.total_calories(), 650);
        assert_eq!(snapshots.load_all().unwrap(), before);
    }

    #[test]
    fn invalid_calories_rejected_before_any_mutation() {
        let (mut repo, snapshots) = setup_with_items();
        assert!(run(&mut repo, &snapshots, 0, "Rice".into(), "??").is_err());
        assert_eq!(repo.total_calories(), 650);
    }
}
