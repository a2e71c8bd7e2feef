use super::Session;
use crate::cli::OutputArgs;
use anyhow::{Context, Result};

pub fn execute(session: &Session, a: i64, b: i64, output: &OutputArgs) -> Result<()> {
    let mut list = session.load()?;
    list.swap(a, b)
        .with_context(|| format!("Cannot swap entries {a} and {b}"))?;

    session.emit(&list, output)
}
