//! Liquid template rendering.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{Error, Result};

/// Renders templates found below a base directory.
pub struct TemplateEngine {
    base_dir: PathBuf,
    parser: liquid::Parser,
}

impl TemplateEngine {
    /// Create an engine with the liquid standard library filters.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| Error::template(&base_dir, e))?;
        Ok(Self { base_dir, parser })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Render `<base_dir>/<template>` with the given variables.
    pub fn render<T: Serialize>(&self, template: &Path, variables: &T) -> Result<String> {
        let path = self.base_dir.join(template);
        let source = std::fs::read_to_string(&path).map_err(|e| Error::template(&path, e))?;
        tracing::debug!(template = %path.display(), "rendering template");
        self.render_source(&path, &source, variables)
    }

    /// Render template source text. `path` only labels errors.
    pub fn render_source<T: Serialize>(
        &self,
        path: &Path,
        source: &str,
        variables: &T,
    ) -> Result<String> {
        let template = self.parser.parse(source).map_err(|e| Error::template(path, e))?;
        let globals = liquid::to_object(variables).map_err(|e| Error::template(path, e))?;
        template
            .render(&globals)
            .map_err(|e| Error::template(path, e))
    }
}
