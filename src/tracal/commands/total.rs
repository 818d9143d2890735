use crate::commands::{CmdMessage, CmdResult};
use crate::config::TracalConfig;
use crate::error::Result;
use crate::repository::ItemRepository;

pub fn run(repo: &ItemRepository, config: &TracalConfig) -> Result<CmdResult> {
    let total = repo.total_calories();
    let mut result = CmdResult::default().with_total(total);

    if let Some(limit) = config.daily_limit {
        let remaining = limit - total;
        if remaining >= 0 {
            result.add_message(CmdMessage::info(format!(
                "{} kcal left of the {} kcal daily limit",
                remaining, limit
            )));
        } else {
            result.add_message(CmdMessage::warning(format!(
                "{} kcal over the {} kcal daily limit",
                -remaining, limit
            )));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};
    use crate::store::memory::MemoryStore;
    use crate::store::snapshot::SnapshotStore;

    fn repo_with(calories: &[i64]) -> ItemRepository {
        let mut repo = ItemRepository::new();
        let snapshots = SnapshotStore::new(MemoryStore::new());
        for (i, c) in calories.iter().enumerate() {
            add::run(&mut repo, &snapshots, format!("Item {}", i), &c.to_string()).unwrap();
        }
        repo
    }

    #[test]
    fn total_without_limit_has_no_messages() {
        let repo = repo_with(&[500, 150]);
        let result = run(&repo, &TracalConfig::default()).unwrap();
        assert_eq!(result.total, Some(650));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn under_limit_reports_remaining() {
        let repo = repo_with(&[500]);
        let config = TracalConfig {
            daily_limit: Some(2000),
        };
        let result = run(&repo, &config).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Info));
        assert!(result.messages[0].content.contains("1500 kcal left"));
    }

    #[test]
    fn over_limit_warns() {
        let repo = repo_with(&[1500, 800]);
        let config = TracalConfig {
            daily_limit: Some(2000),
        };
        let result = run(&repo, &config).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert!(result.messages[0].content.contains("300 kcal over"));
    }
}
