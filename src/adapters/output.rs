use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn new(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, OutputTarget::Stdout)
    }

    /// Writes `content` plus a trailing newline. Files are replaced, not appended.
    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", content)?;
                out.flush()?;
            }
            OutputTarget::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                fs::write(path, format!("{}\n", content))?;
                tracing::debug!("Wrote {} bytes to {}", content.len() + 1, path.display());
            }
        }
        Ok(())
    }
}
