//! Turning a [`PathList`] into text and delivering that text somewhere.
//!
//! A [`Pipeline`] pairs one [`Formatter`] with an ordered set of [`Sink`]s,
//! and a [`MultiPipeline`] drives several pipelines over the same list.
//! Rendering never mutates the list.

use tracing::debug;

use crate::error::Result;
use crate::path_list::PathList;

mod formatters;
mod sinks;

pub use formatters::{Format, Indexed, ShellExport, Structured};
pub use sinks::{AppendFile, Console, OverwriteFile};

/// Renders a list as text. Implementations must be deterministic.
pub trait Formatter {
    fn format(&self, list: &PathList) -> Result<String>;
}

/// Delivers rendered text to a destination.
pub trait Sink {
    fn send(&self, text: &str) -> Result<()>;
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, list: &PathList) -> Result<String> {
        (**self).format(list)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn send(&self, text: &str) -> Result<()> {
        (**self).send(text)
    }
}

/// One formatter feeding an ordered list of sinks
pub struct Pipeline {
    formatter: Box<dyn Formatter>,
    sinks: Vec<Box<dyn Sink>>,
}

impl Pipeline {
    pub fn new(formatter: impl Formatter + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
            sinks: Vec::new(),
        }
    }

    /// Append a sink; sinks receive the text in the order they were added
    pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn push_sink(&mut self, sink: Box<dyn Sink>) {
        self.sinks.push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Format `list` once and send the text to every sink in order.
    ///
    /// A formatting error is returned before any sink runs. The first sink
    /// error stops delivery; sinks that already ran keep their output.
    pub fn dump(&self, list: &PathList) -> Result<()> {
        let text = self.formatter.format(list)?;
        debug!(
            bytes = text.len(),
            sinks = self.sinks.len(),
            "Dispatching rendered path list"
        );

        for sink in &self.sinks {
            sink.send(&text)?;
        }
        Ok(())
    }
}

/// Independent pipelines run one after another over the same list
#[derive(Default)]
pub struct MultiPipeline {
    pipelines: Vec<Pipeline>,
}

impl MultiPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pipeline built from `formatter` and `sinks`
    pub fn add(
        &mut self,
        formatter: impl Formatter + 'static,
        sinks: Vec<Box<dyn Sink>>,
    ) -> &mut Self {
        let mut pipeline = Pipeline::new(formatter);
        for sink in sinks {
            pipeline.push_sink(sink);
        }
        self.push(pipeline)
    }

    pub fn push(&mut self, pipeline: Pipeline) -> &mut Self {
        self.pipelines.push(pipeline);
        self
    }

    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    /// Run every pipeline in order, stopping at the first failure.
    pub fn dump(&self, list: &PathList) -> Result<()> {
        for (idx, pipeline) in self.pipelines.iter().enumerate() {
            debug!(pipeline = idx, "Running render pipeline");
            pipeline.dump(list)?;
        }
        Ok(())
    }
}
