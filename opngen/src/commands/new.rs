use std::path::PathBuf;

use clap::{Args, Subcommand};
use eyre::Result;
use opngen_codegen::{CommandSpec, Config, GenerateRequest, ModuleType};
use opngen_core::Overwrite;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

/// Template base directory used when neither flag nor config names one.
const DEFAULT_TEMPLATE_DIR: &str = "templates";

#[derive(Args)]
pub struct NewCommand {
    #[command(subcommand)]
    target: NewTarget,
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        match &self.target {
            NewTarget::Command(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum NewTarget {
    /// Generate code for a new command
    #[command(subcommand)]
    Command(CommandTarget),
}

#[derive(Subcommand)]
enum CommandTarget {
    /// Generate new command code for a core module.
    ///
    /// For a list of core modules see:
    /// https://docs.opnsense.org/development/api.html#core-api
    ///
    /// Search model.xml files here:
    /// https://github.com/opnsense/core/tree/master/src/opnsense/mvc/app/models/OPNsense
    ///
    /// Example:
    ///
    /// $ opngen new command core unbound dnsbl --tag dnsbl --url https://raw.githubusercontent.com/opnsense/core/master/src/opnsense/mvc/app/models/OPNsense/Unbound/Unbound.xml
    #[command(verbatim_doc_comment)]
    Core(CommandArgs),

    /// Generate new command code for a plugin module.
    ///
    /// For a list of plugin modules see:
    /// https://docs.opnsense.org/development/api.html#plugins-api
    ///
    /// Search for model.xml under this url:
    /// https://github.com/opnsense/plugins
    ///
    /// Example:
    ///
    /// $ opngen new command plugin haproxy server --tag servers --url https://raw.githubusercontent.com/opnsense/plugins/master/net/haproxy/src/opnsense/mvc/app/models/OPNsense/HAProxy/HAProxy.xml
    #[command(verbatim_doc_comment)]
    Plugin(CommandArgs),
}

impl CommandTarget {
    fn run(&self) -> Result<()> {
        match self {
            CommandTarget::Core(args) => args.run(ModuleType::Core),
            CommandTarget::Plugin(args) => args.run(ModuleType::Plugin),
        }
    }
}

#[derive(Args, Debug)]
pub struct CommandArgs {
    /// The click group, e.g. unbound
    #[arg(value_name = "CLICK_GROUP")]
    pub click_group: String,

    /// The click command, e.g. dnsbl
    #[arg(value_name = "CLICK_COMMAND")]
    pub click_command: String,

    /// The url (or local path) of the model xml
    #[arg(short, long)]
    pub url: String,

    /// The xml tag from the model xml, e.g. dnsbl for the unbound dnsbl command
    #[arg(short, long)]
    pub tag: String,

    /// The template basedir path [default: templates]
    #[arg(long, visible_alias = "tb")]
    pub template_basedir: Option<PathBuf>,

    /// The command template, relative to the template basedir
    #[arg(long, visible_alias = "tc")]
    pub template_command: Option<PathBuf>,

    /// The facade template, relative to the template basedir
    #[arg(long, visible_alias = "tf")]
    pub template_facade: Option<PathBuf>,

    /// The output directory for the generated command [default: output/commands/<module>]
    #[arg(long, visible_alias = "cod")]
    pub command_output_dir: Option<PathBuf>,

    /// The output directory for the generated facade [default: output/facades/command/<module>]
    #[arg(long, visible_alias = "fod")]
    pub facade_output_dir: Option<PathBuf>,

    /// Path to opngen.toml (defaults to ./opngen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub skip_existing: bool,
}

impl CommandArgs {
    fn run(&self, module_type: ModuleType) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let request = self.request(module_type, config);

        let report = ops::generate(
            &request,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Merge flags over `config` over the built-in defaults.
    pub fn request(&self, module_type: ModuleType, config: Config) -> GenerateRequest {
        let Config { policy, paths } = config;

        let template_dir = pick(&self.template_basedir, paths.template_basedir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR));
        let spec = CommandSpec::new(&self.click_group, &self.click_command, module_type);

        let mut request = GenerateRequest::new(&self.url, &self.tag, spec, template_dir);
        request.policy = policy;

        if let Some(template) = pick(&self.template_command, paths.template_command) {
            request.command.template = template;
        }
        if let Some(template) = pick(&self.template_facade, paths.template_facade) {
            request.facade.template = template;
        }
        if let Some(dir) = pick(&self.command_output_dir, paths.command_output_dir) {
            request.command.output_dir = dir;
        }
        if let Some(dir) = pick(&self.facade_output_dir, paths.facade_output_dir) {
            request.facade.output_dir = dir;
        }
        if self.skip_existing {
            request.overwrite = Overwrite::IfMissing;
        }

        request
    }
}

fn pick(flag: &Option<PathBuf>, config: Option<PathBuf>) -> Option<PathBuf> {
    flag.clone().or(config)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;
    use opngen_codegen::Policy;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: CommandArgs,
    }

    fn parse(extra: &[&str]) -> CommandArgs {
        let mut argv = vec!["opngen", "unbound", "dnsbl", "-u", "Unbound.xml", "-t", "dnsbl"];
        argv.extend_from_slice(extra);
        Harness::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn test_defaults() {
        let request = parse(&[]).request(ModuleType::Core, Config::default());

        assert_eq!(request.locator, "Unbound.xml");
        assert_eq!(request.tag, "dnsbl");
        assert_eq!(request.spec, CommandSpec::new("unbound", "dnsbl", ModuleType::Core));
        assert_eq!(request.template_dir, Path::new("templates"));
        assert_eq!(
            request.command.template,
            Path::new("code_generator/command/command.py.liquid")
        );
        assert_eq!(request.command.output_dir, Path::new("output/commands/core"));
        assert_eq!(request.facade.output_dir, Path::new("output/facades/command/core"));
        assert_eq!(request.policy, Policy::default());
        assert_eq!(request.overwrite, Overwrite::Always);
    }

    #[test]
    fn test_plugin_output_dirs() {
        let request = parse(&[]).request(ModuleType::Plugin, Config::default());

        assert_eq!(request.command.output_dir, Path::new("output/commands/plugin"));
        assert_eq!(request.facade.output_dir, Path::new("output/facades/command/plugin"));
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::parse(
            r#"
            [policy]
            ignored_types = ["UniqueIdField", "ModelRelationField"]

            [paths]
            template_basedir = "from-config"
            command_output_dir = "config/commands"
            facade_output_dir = "config/facades"
            "#,
            "opngen.toml",
        )
        .unwrap();

        let request = parse(&["--command-output-dir", "cli/commands", "--skip-existing"])
            .request(ModuleType::Plugin, config);

        assert_eq!(request.template_dir, Path::new("from-config"));
        assert_eq!(request.command.output_dir, Path::new("cli/commands"));
        assert_eq!(request.facade.output_dir, Path::new("config/facades"));
        assert!(request.policy.ignores_type(Some("ModelRelationField")));
        assert_eq!(request.overwrite, Overwrite::IfMissing);
    }

    #[test]
    fn test_short_flag_aliases() {
        let request = parse(&[
            "--tb", "tpl", "--tc", "cmd.liquid", "--tf", "facade.liquid", "--cod", "cmds", "--fod",
            "facades",
        ])
        .request(ModuleType::Plugin, Config::default());

        assert_eq!(request.template_dir, Path::new("tpl"));
        assert_eq!(request.command.template, Path::new("cmd.liquid"));
        assert_eq!(request.facade.template, Path::new("facade.liquid"));
        assert_eq!(request.command.output_dir, Path::new("cmds"));
        assert_eq!(request.facade.output_dir, Path::new("facades"));
    }

    #[test]
    fn test_template_flags() {
        let request = parse(&[
            "--template-basedir",
            "tpl",
            "--template-command",
            "cmd.liquid",
            "--template-facade",
            "facade.liquid",
        ])
        .request(ModuleType::Core, Config::default());

        assert_eq!(request.template_dir, Path::new("tpl"));
        assert_eq!(request.command.template, Path::new("cmd.liquid"));
        assert_eq!(request.facade.template, Path::new("facade.liquid"));
    }
}
