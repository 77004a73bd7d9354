//! Generate operation - command and facade code from a model document.

use opngen_codegen::{GenerateRequest, Result, generate_all, render_all};
use opngen_core::WriteResult;

use crate::reports::{GenerateReport, GeneratedFile, GenerationResult, PreviewFile};

/// Options for the generate operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(request: &GenerateRequest, opts: GenerateOptions) -> Result<GenerateReport> {
    tracing::debug!(locator = %request.locator, tag = %request.tag, dry_run = opts.dry_run, "generating");

    let result = if opts.dry_run {
        let files = render_all(request)?
            .into_iter()
            .map(|rendered| PreviewFile {
                path: request
                    .paths(rendered.kind)
                    .output_dir
                    .join(&rendered.relative_path),
                content: rendered.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let files = generate_all(request)?
            .into_iter()
            .map(|written| GeneratedFile {
                kind: written.kind,
                path: written.path,
                skipped: written.result == WriteResult::Skipped,
            })
            .collect();
        GenerationResult::Written(files)
    };

    Ok(GenerateReport {
        group: request.spec.group.clone(),
        command: request.spec.command.clone(),
        module_type: request.spec.module_type,
        result,
    })
}

#[cfg(test)]
mod tests {
    use opngen_codegen::{CommandSpec, ErrorKind, ModuleType};
    use tempfile::TempDir;

    use super::*;

    const MODEL: &str = r#"<HAProxy><servers><server type="ArrayField">
        <name type="TextField"/><port type="PortField"/>
    </server></servers></HAProxy>"#;
    const TEMPLATE: &str = "{{ click_group }} {{ click_command }} {{ column_list }}";

    fn request(dir: &TempDir) -> GenerateRequest {
        let root = dir.path();
        std::fs::write(root.join("HAProxy.xml"), MODEL).unwrap();
        std::fs::create_dir_all(root.join("tpl")).unwrap();
        std::fs::write(root.join("tpl/command.liquid"), TEMPLATE).unwrap();
        std::fs::write(root.join("tpl/facade.liquid"), TEMPLATE).unwrap();

        let mut request = GenerateRequest::new(
            root.join("HAProxy.xml").display().to_string(),
            "server",
            CommandSpec::new("haproxy", "server", ModuleType::Plugin),
            root.join("tpl"),
        );
        request.command.template = "command.liquid".into();
        request.facade.template = "facade.liquid".into();
        request.command.output_dir = root.join("commands");
        request.facade.output_dir = root.join("facades");
        request
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let request = request(&dir);

        let report = generate(&request, GenerateOptions { dry_run: true }).unwrap();

        let GenerationResult::Preview(files) = report.result else {
            panic!("expected a preview");
        };
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, dir.path().join("commands/haproxy/server.py"));
        assert_eq!(files[0].content, "haproxy server ['name', 'port']");
        assert!(!dir.path().join("commands").exists());
    }

    #[test]
    fn test_writes_files() {
        let dir = TempDir::new().unwrap();
        let request = request(&dir);

        let report = generate(&request, GenerateOptions::default()).unwrap();

        let GenerationResult::Written(files) = report.result else {
            panic!("expected written files");
        };
        assert_eq!(files[1].path, dir.path().join("facades/haproxy/server.py"));
        assert!(files.iter().all(|f| !f.skipped));
        assert_eq!(
            std::fs::read_to_string(&files[1].path).unwrap(),
            "haproxy server ['name', 'port']"
        );
    }

    #[test]
    fn test_errors_pass_through() {
        let dir = TempDir::new().unwrap();
        let mut request = request(&dir);
        request.tag = "backends".to_string();

        let err = generate(&request, GenerateOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
