use super::Session;
use crate::cli::OutputArgs;
use crate::ui;
use anyhow::Result;

pub fn execute(session: &Session, src: i64, dst: i64, output: &OutputArgs) -> Result<()> {
    let mut list = session.load()?;
    if usize::try_from(src).map_or(true, |i| i >= list.len()) {
        ui::warn(format!(
            "Index {src} is outside the list ({} entries); nothing moved.",
            list.len()
        ));
    }
    list.move_entry(src, dst);

    session.emit(&list, output)
}
