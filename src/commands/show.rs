use super::Session;
use crate::cli::OutputArgs;
use anyhow::Result;

pub fn execute(session: &Session, output: &OutputArgs) -> Result<()> {
    let list = session.load()?;
    session.emit(&list, output)
}
