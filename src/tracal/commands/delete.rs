use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::ItemRepository;
use crate::store::snapshot::SnapshotStore;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    repo: &mut ItemRepository,
    snapshots: &SnapshotStore<S>,
    id: u64,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match repo.remove(id) {
        Some(item) => {
            snapshots.remove(item.id)?;
            result.add_message(CmdMessage::success(format!("Deleted {}", item.name)));
            result.affected_items.push(item);
        }
        None => result.add_message(CmdMessage::warning(format!("No item with id {}", id))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};
    use crate::store::memory::MemoryStore;

    fn setup_with_items() -> (ItemRepository, SnapshotStore<MemoryStore>) {
        let mut repo = ItemRepository::new();
        let snapshots = SnapshotStore::new(MemoryStore::new());
        add::run(&mut repo, &snapshots, "Rice".into(), "500").unwrap();
        add::run(&mut repo, &snapshots, "Egg".into(), "150").unwrap();
        (repo, snapshots)
    }

    #[test]
    fn deletes_item_and_mirrors_snapshot() {
        let (mut repo, snapshots) = setup_with_items();
        let result = run(&mut repo, &snapshots, 1).unwrap();

        assert_eq!(result.affected_items[0].name, "Egg");
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.total_calories(), 500);
        assert_eq!(snapshots.load_all().unwrap(), repo.items().to_vec());
    }

    #[test]
    fn absent_id_warns_and_mutates_nothing() {
        let (mut repo, snapshots) = setup_with_items();
        let result = run(&mut repo, &snapshots, 99).unwrap();

        assert!(result.affected_items.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert_eq!(repo.len(), 2);
        assert_eq!(snapshots.load_all().unwrap().len(), 2);
    }
}
