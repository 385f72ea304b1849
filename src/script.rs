use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};

#[derive(Debug, thiserror::Error)]
pub enum ScriptLoadError {
    #[error("Por favor selecciona un archivo .{extension} válido ({name})")]
    InvalidExtension { name: String, extension: String },

    #[error("read script {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The console's editable script text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptBuffer {
    text: String,
}

impl ScriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn insert_newline(&mut self) {
        self.text.push('\n');
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

pub struct ScriptLoader {
    extension: String,
    matcher: GlobMatcher,
}

impl ScriptLoader {
    pub fn new(extension: &str) -> Result<Self> {
        let extension = extension.trim_start_matches('.').to_string();
        let matcher = Glob::new(&format!("*.{}", extension))
            .with_context(|| format!("compile script pattern for .{}", extension))?
            .compile_matcher();
        Ok(Self { extension, matcher })
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn accepts(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => self.matcher.is_match(Path::new(name)),
            None => false,
        }
    }

    /// Replace `buf` with the file's content. On any failure `buf` is left as it was.
    pub fn load_from_file(
        &self,
        path: &Path,
        buf: &mut ScriptBuffer,
    ) -> Result<(), ScriptLoadError> {
        if !self.accepts(path) {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            return Err(ScriptLoadError::InvalidExtension {
                name,
                extension: self.extension.clone(),
            });
        }

        let text = fs::read_to_string(path).map_err(|source| ScriptLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "script loaded");
        buf.replace(text);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
