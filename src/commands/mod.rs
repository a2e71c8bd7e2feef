use crate::cli::{Cli, Commands, OutputArgs};
use crate::render::{AppendFile, Console, MultiPipeline, OverwriteFile, Pipeline, Structured};
use crate::source::PathSource;
use crate::{ui, Config, PathList};
use anyhow::{Context, Result};
use tracing::debug;

mod dedupe;
mod insert;
mod move_cmd;
mod remove;
mod render;
mod replace;
mod show;
mod swap;

pub fn execute(cli: Cli) -> Result<()> {
    // Resolve config and list source once; every command works from this
    let session = Session::new(&cli)?;

    match cli.command {
        Commands::Show { output } => show::execute(&session, &output),

        Commands::Insert {
            path,
            index,
            output,
        } => insert::execute(&session, path, index, &output),

        Commands::Remove { index, output } => remove::execute(&session, index, &output),

        Commands::Move { src, dst, output } => move_cmd::execute(&session, src, dst, &output),

        Commands::Replace {
            index,
            path,
            output,
        } => replace::execute(&session, index, path, &output),

        Commands::Swap { a, b, output } => swap::execute(&session, a, b, &output),

        Commands::Dedupe { output } => dedupe::execute(&session, &output),

        Commands::Render { output } => render::execute(&session, &output),
    }
}

/// Config plus the resolved list source for one invocation
pub(crate) struct Session {
    config: Config,
    source: PathSource,
    var: String,
}

impl Session {
    fn new(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        let config = Config::load(&config_path)?;

        let source = match (&cli.from, &cli.env_var) {
            (Some(file), _) => PathSource::File(file.clone()),
            (None, Some(name)) => PathSource::Env(name.clone()),
            (None, None) => match config.list_file()? {
                Some(file) => PathSource::File(file),
                None => PathSource::Env(config.env_var.clone()),
            },
        };
        let var = cli
            .env_var
            .clone()
            .unwrap_or_else(|| config.env_var.clone());
        debug!(source = %source.describe(), var = %var, "Resolved path source");

        Ok(Self {
            config,
            source,
            var,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &PathSource {
        &self.source
    }

    /// Variable name used by the export format
    pub fn var(&self) -> &str {
        &self.var
    }

    pub fn load(&self) -> Result<PathList> {
        self.source
            .load()
            .with_context(|| format!("Failed to load paths from {}", self.source.describe()))
    }

    /// Pipeline described by the output flags, or `None` when it has no sinks
    pub fn output_pipeline(&self, output: &OutputArgs) -> Option<Pipeline> {
        let mut pipeline = Pipeline::new(output.format().formatter(&self.var));
        if !output.quiet {
            pipeline = pipeline.with_sink(Console);
        }
        for path in &output.write {
            pipeline = pipeline.with_sink(OverwriteFile::new(path));
        }
        for path in &output.append {
            pipeline = pipeline.with_sink(AppendFile::new(path));
        }
        (pipeline.sink_count() > 0).then_some(pipeline)
    }

    /// Pipeline writing the list back to its source file for `--save`
    fn save_pipeline(&self) -> Result<Pipeline> {
        let file = self.source.file().with_context(|| {
            format!(
                "Cannot save: the list was read from {}, not from a file",
                self.source.describe()
            )
        })?;
        Ok(Pipeline::new(Structured).with_sink(OverwriteFile::new(file)))
    }

    /// Render `list` through `pipelines`, adding the save pipeline when asked.
    pub fn dump(&self, list: &PathList, mut pipelines: MultiPipeline, save: bool) -> Result<()> {
        if save {
            pipelines.push(self.save_pipeline()?);
        }
        pipelines.dump(list).context("Failed to render paths")?;

        if save {
            if let Some(file) = self.source.file() {
                ui::success("Saved", file.display());
            }
        }
        Ok(())
    }

    /// Render `list` as the output flags describe
    pub fn emit(&self, list: &PathList, output: &OutputArgs) -> Result<()> {
        let mut pipelines = MultiPipeline::new();
        if let Some(pipeline) = self.output_pipeline(output) {
            pipelines.push(pipeline);
        }
        self.dump(list, pipelines, output.save)
    }
}
