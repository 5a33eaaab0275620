use crate::error::{EngineError, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// One input to display, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// `-` は標準入力として扱う
    pub fn from_operand(operand: impl Into<PathBuf>) -> Self {
        let path = operand.into();
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::Path(path)
        }
    }

    /// Sources for a list of operands; standard input when the list is empty.
    #[must_use]
    pub fn from_operands(operands: &[PathBuf]) -> Vec<Self> {
        if operands.is_empty() {
            vec![Self::Stdin]
        } else {
            operands.iter().cloned().map(Self::from_operand).collect()
        }
    }

    /// Name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Open the source for sequential reading.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SourceOpen`] when a path cannot be opened.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::Path(path) => open_file(path).map(|f| Box::new(f) as Box<dyn Read>),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| EngineError::SourceOpen {
        path: path.to_path_buf(),
        source: e,
    })
}
