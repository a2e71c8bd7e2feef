use super::Session;
use crate::cli::OutputArgs;
use crate::render::MultiPipeline;
use crate::ui;
use anyhow::Result;

/// Drive the `[[render]]` pipelines; fall back to the output flags when the
/// config defines none. Only `--save` applies on top of configured pipelines.
pub fn execute(session: &Session, output: &OutputArgs) -> Result<()> {
    let renders = &session.config().renders;
    if renders.is_empty() {
        return super::show::execute(session, output);
    }

    if output.shapes_output() {
        ui::warn(
            "--format, --write, --append and --quiet are ignored while the config defines [[render]] pipelines.",
        );
    }

    let list = session.load()?;
    let mut pipelines = MultiPipeline::new();
    for render in renders {
        pipelines.push(render.pipeline(session.var())?);
    }

    session.dump(&list, pipelines, output.save)
}
