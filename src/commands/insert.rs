use super::Session;
use crate::cli::OutputArgs;
use anyhow::Result;
use tracing::info;

pub fn execute(
    session: &Session,
    path: String,
    index: Option<i64>,
    output: &OutputArgs,
) -> Result<()> {
    let mut list = session.load()?;
    let index = index.unwrap_or_else(|| i64::try_from(list.len()).unwrap_or(i64::MAX));

    info!(path = %path, index, "Inserting entry");
    list.insert(path, index);

    session.emit(&list, output)
}
