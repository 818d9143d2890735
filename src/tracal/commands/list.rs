use crate::commands::CmdResult;
use crate::error::Result;
use crate::repository::ItemRepository;

pub fn run(repo: &ItemRepository) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_listed_items(repo.items().to_vec())
        .with_total(repo.total_calories()))
}
