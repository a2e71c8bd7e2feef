use super::Session;
use crate::cli::OutputArgs;
use crate::ui;
use anyhow::Result;

pub fn execute(session: &Session, output: &OutputArgs) -> Result<()> {
    let mut list = session.load()?;
    let before = list.len();
    list.deduplicate();

    let dropped = before - list.len();
    if dropped > 0 {
        let noun = if dropped == 1 { "entry" } else { "entries" };
        ui::info(format!("Removed {dropped} duplicate {noun}."));
    }

    session.emit(&list, output)
}
