use super::Session;
use crate::cli::OutputArgs;
use crate::ui;
use anyhow::Result;

pub fn execute(session: &Session, index: i64, path: String, output: &OutputArgs) -> Result<()> {
    let mut list = session.load()?;
    if usize::try_from(index).map_or(true, |i| i >= list.len()) {
        ui::warn(format!(
            "Index {index} is outside the list ({} entries); nothing replaced.",
            list.len()
        ));
    }
    list.replace(index, path);

    session.emit(&list, output)
}
