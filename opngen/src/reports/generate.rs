//! Generate command report data structures.

use std::path::PathBuf;

use opngen_codegen::{ArtifactKind, ModuleType};

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub group: String,
    pub command: String,
    pub module_type: ModuleType,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk (or skipped).
    Written(Vec<GeneratedFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

#[derive(Debug)]
pub struct GeneratedFile {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// Left alone because it already existed.
    pub skipped: bool,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Where the file would be written.
    pub path: PathBuf,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(files) => self.render_written(out, files),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, files: &[GeneratedFile]) {
        out.section(&format!(
            "{} {} {} (generated)",
            self.module_type, self.group, self.command
        ));
        for file in files {
            let line = format!("{}: {}", file.kind, file.path.display());
            if file.skipped {
                out.list_item(&format!("{} (exists, skipped)", line));
            } else {
                out.added_item(&line);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
