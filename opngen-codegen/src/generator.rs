//! Command and facade generators.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use opngen_core::{File, Overwrite, WriteResult};
use opngen_model::resolve;

use crate::{
    Error, Result,
    policy::Policy,
    template::TemplateEngine,
    variables::{CommandSpec, ModuleType, TemplateVariables, derive_template_variables},
};

/// The two artifacts generated per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// The click command module.
    Command,
    /// The facade the command delegates API calls to.
    Facade,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Command, ArtifactKind::Facade];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Command => "command",
            ArtifactKind::Facade => "facade",
        }
    }

    /// Template path relative to the template base directory.
    pub fn default_template(&self) -> &'static Path {
        match self {
            ArtifactKind::Command => Path::new("code_generator/command/command.py.liquid"),
            ArtifactKind::Facade => Path::new("code_generator/command/facade.py.liquid"),
        }
    }

    pub fn default_output_dir(&self, module_type: ModuleType) -> PathBuf {
        match self {
            ArtifactKind::Command => Path::new("output/commands").join(module_type.as_str()),
            ArtifactKind::Facade => Path::new("output/facades/command").join(module_type.as_str()),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates one artifact from resolved template variables.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    kind: ArtifactKind,
    template: PathBuf,
    variables: TemplateVariables,
}

impl CodeGenerator {
    pub fn new(kind: ArtifactKind, template: impl Into<PathBuf>, variables: TemplateVariables) -> Self {
        Self {
            kind,
            template: template.into(),
            variables,
        }
    }

    /// Resolve `tag` in the model behind `locator` and derive the variables.
    ///
    /// Model failures are returned unchanged; nothing is rendered.
    pub fn generate(
        kind: ArtifactKind,
        locator: &str,
        tag: &str,
        spec: &CommandSpec,
        policy: &Policy,
        template: impl Into<PathBuf>,
    ) -> Result<Self> {
        let root = resolve(locator, tag)?;
        let variables = derive_template_variables(&root, policy, spec);
        tracing::info!(
            artifact = %kind,
            columns = variables.column_names.len(),
            create = variables.options_create.len(),
            update = variables.options_update.len(),
            "derived template variables"
        );
        Ok(Self::new(kind, template, variables))
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn variables(&self) -> &TemplateVariables {
        &self.variables
    }

    /// `<group>/<command>.py`, named like the modules the templates import.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.variables.click_group_module)
            .join(format!("{}.py", self.variables.click_command_module))
    }

    pub fn render(&self, engine: &TemplateEngine) -> Result<RenderedArtifact> {
        let content = engine.render(&self.template, &self.variables)?;
        Ok(RenderedArtifact {
            kind: self.kind,
            relative_path: self.relative_path(),
            content,
        })
    }
}

/// Rendered artifact text, not yet written.
#[derive(Debug, Clone)]
pub struct RenderedArtifact {
    pub kind: ArtifactKind,
    pub relative_path: PathBuf,
    pub content: String,
}

impl RenderedArtifact {
    /// Write below `output_dir` and return where the file went.
    pub fn write(&self, output_dir: &Path, overwrite: Overwrite) -> Result<WrittenArtifact> {
        let path = output_dir.join(&self.relative_path);
        let result = File::new(&path, self.content.as_str())
            .overwrite(overwrite)
            .write()
            .map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
        tracing::info!(artifact = %self.kind, path = %path.display(), ?result, "wrote artifact");
        Ok(WrittenArtifact {
            kind: self.kind,
            path,
            result,
        })
    }
}

/// A written (or skipped) artifact.
#[derive(Debug, Clone)]
pub struct WrittenArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Template and output location of one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Relative to the template base directory.
    pub template: PathBuf,
    pub output_dir: PathBuf,
}

/// Everything needed to generate a command and its facade.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub locator: String,
    pub tag: String,
    pub spec: CommandSpec,
    pub policy: Policy,
    pub template_dir: PathBuf,
    pub command: ArtifactPaths,
    pub facade: ArtifactPaths,
    pub overwrite: Overwrite,
}

impl GenerateRequest {
    /// A request using the default templates and output directories.
    pub fn new(
        locator: impl Into<String>,
        tag: impl Into<String>,
        spec: CommandSpec,
        template_dir: impl Into<PathBuf>,
    ) -> Self {
        let module_type = spec.module_type;
        let paths = |kind: ArtifactKind| ArtifactPaths {
            template: kind.default_template().to_path_buf(),
            output_dir: kind.default_output_dir(module_type),
        };
        Self {
            locator: locator.into(),
            tag: tag.into(),
            command: paths(ArtifactKind::Command),
            facade: paths(ArtifactKind::Facade),
            spec,
            policy: Policy::default(),
            template_dir: template_dir.into(),
            overwrite: Overwrite::Always,
        }
    }

    pub fn paths(&self, kind: ArtifactKind) -> &ArtifactPaths {
        match kind {
            ArtifactKind::Command => &self.command,
            ArtifactKind::Facade => &self.facade,
        }
    }
}

/// Render both artifacts without writing anything.
///
/// Each artifact resolves the model on its own.
pub fn render_all(request: &GenerateRequest) -> Result<Vec<RenderedArtifact>> {
    let engine = TemplateEngine::new(&request.template_dir)?;

    ArtifactKind::ALL
        .iter()
        .map(|&kind| {
            let generator = CodeGenerator::generate(
                kind,
                &request.locator,
                &request.tag,
                &request.spec,
                &request.policy,
                &request.paths(kind).template,
            )?;
            generator.render(&engine)
        })
        .collect()
}

/// Render both artifacts, then write them to their output directories.
///
/// Nothing is written unless both renders succeed.
pub fn generate_all(request: &GenerateRequest) -> Result<Vec<WrittenArtifact>> {
    render_all(request)?
        .iter()
        .map(|rendered| {
            rendered.write(&request.paths(rendered.kind).output_dir, request.overwrite)
        })
        .collect()
}
