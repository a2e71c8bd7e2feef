use super::Session;
use crate::cli::OutputArgs;
use anyhow::{Context, Result};
use tracing::info;

pub fn execute(session: &Session, index: i64, output: &OutputArgs) -> Result<()> {
    let mut list = session.load()?;
    let removed = list
        .remove(index)
        .with_context(|| format!("Cannot remove from {}", session.source().describe()))?;
    info!(index, removed = %removed, "Removed entry");

    session.emit(&list, output)
}
