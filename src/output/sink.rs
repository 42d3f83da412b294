//! Destinations for rendered product fragments

use crate::output::OutputResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Receives the rendered fragments of a finished crawl
pub trait ProductSink {
    /// Writes every fragment, each followed by a newline
    fn write_fragments(&mut self, fragments: &[String]) -> OutputResult<()>;
}

/// Writes fragments to a file, replacing any previous content
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Creates a sink for the given path; nothing is touched until written
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSink for FileSink {
    fn write_fragments(&mut self, fragments: &[String]) -> OutputResult<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for fragment in fragments {
            writeln!(writer, "{}", fragment)?;
        }
        writer.flush()?;

        tracing::debug!(
            "Wrote {} fragments to {}",
            fragments.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory sink, one entry per line written
impl ProductSink for Vec<String> {
    fn write_fragments(&mut self, fragments: &[String]) -> OutputResult<()> {
        self.extend(fragments.iter().map(|fragment| format!("{}\n", fragment)));
        Ok(())
    }
}
