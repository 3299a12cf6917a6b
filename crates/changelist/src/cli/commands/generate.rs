//! Generate command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use changelist_changelog::{write_changelist, ChangelistGenerator};
use changelist_core::config::{load_config_or_default, TagCommitPolicy};
use changelist_git::GitRepo;

use crate::cli::{output, Cli, OutputFormat};

/// Generate the changelist
#[derive(Debug, Default, Args)]
pub struct GenerateCommand {
    /// Output file (defaults to the configured file, docs/changelist.md)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the document to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Render each tagged commit in its own tag's section
    #[arg(long)]
    pub include_tag_commits: bool,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            output = ?self.output,
            stdout = self.stdout,
            include_tag_commits = self.include_tag_commits,
            "executing generate command"
        );
        let dir = cli.working_dir()?;
        let (mut config, config_path) = load_config_or_default(&dir)?;

        if self.include_tag_commits {
            config.changelist.tag_commits = TagCommitPolicy::Inclusive;
        }

        if let Some(path) = &config_path {
            if cli.verbose {
                output::info(&format!(
                    "Using config {}",
                    output::path_style().apply_to(path.display())
                ));
            }
        }

        let repo = GitRepo::discover(&dir)?;
        let generator = ChangelistGenerator::new(config.changelist.clone());
        let changelist = generator.generate_from_repo(&repo, config.git.tag_pattern.as_deref())?;

        if cli.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&changelist)?);
            return Ok(());
        }

        let document = generator.format(&changelist);

        if self.stdout {
            print!("{}", document);
            return Ok(());
        }

        let target = self
            .output
            .clone()
            .unwrap_or_else(|| config.changelist.file.clone());
        let output_path = dir.join(target);
        write_changelist(&output_path, &document)?;

        if !cli.quiet {
            output::success(&format!(
                "Changelist written to {} ({} sections, {} entries)",
                output::path_style().apply_to(output_path.display()),
                changelist.sections.len(),
                changelist.entry_count()
            ));
        }

        Ok(())
    }
}
