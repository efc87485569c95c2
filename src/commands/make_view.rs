//! `make:view` command

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use bladegen_lib::scaffold::{
    NameHelpers, ScaffoldConfig, ViewGenerator, ViewKind, ViewRequest, WriteOutcome,
};

/// Which view kinds the user asked for on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct KindFlags {
    pub index: bool,
    pub show: bool,
    pub create: bool,
    pub edit: bool,
    pub crud: bool,
}

impl KindFlags {
    /// Resolve flags to kinds; `--crud` implies all four.
    fn kinds(self) -> Vec<ViewKind> {
        if self.crud {
            return ViewKind::ALL.to_vec();
        }

        let mut kinds = Vec::new();
        if self.index {
            kinds.push(ViewKind::Index);
        }
        if self.show {
            kinds.push(ViewKind::Show);
        }
        if self.create {
            kinds.push(ViewKind::Create);
        }
        if self.edit {
            kinds.push(ViewKind::Edit);
        }
        kinds
    }
}

/// Generate Blade view files for a model
pub struct MakeViewCommand {
    model: String,
    kinds: Vec<ViewKind>,
    config: ScaffoldConfig,
}

impl MakeViewCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `model` - Raw model name, may include a namespace prefix
    /// * `flags` - Requested view kinds
    /// * `base_path` - Application base path (defaults to the current directory)
    /// * `views_root` - Views directory; relative paths resolve against the base path
    pub fn new(
        model: String,
        flags: KindFlags,
        base_path: Option<PathBuf>,
        views_root: PathBuf,
    ) -> Result<Self> {
        if NameHelpers::basename(&model).is_empty() {
            anyhow::bail!("Invalid model name: '{model}'. Expected a name like `Example` or `Admin/Example`.");
        }

        let base_path = base_path.map_or_else(
            || env::current_dir().context("Failed to get current directory"),
            Ok,
        )?;

        let views_root = if views_root.is_absolute() {
            views_root
        } else {
            base_path.join(views_root)
        };

        Ok(Self {
            model,
            kinds: flags.kinds(),
            config: ScaffoldConfig {
                base_path,
                views_root,
            },
        })
    }

    /// Execute the command
    ///
    /// Prints one line per target file; a pre-existing file is reported and
    /// skipped without failing the command.
    pub fn execute(&self) -> Result<()> {
        if self.kinds.is_empty() {
            println!(
                "{}",
                style("Nothing to generate: pass --index, --show, --create, --edit or --crud.")
                    .yellow()
            );
            return Ok(());
        }

        let generator = ViewGenerator::new(self.config.clone());
        let request = ViewRequest::new(self.model.clone(), self.kinds.clone());

        let views = generator
            .generate(&request)
            .context("Failed to generate view files")?;

        for view in &views {
            match view.outcome {
                WriteOutcome::Created => println!(
                    "  {} View {}/{} created successfully.",
                    style("✓").green(),
                    view.dir,
                    view.file_name
                ),
                WriteOutcome::SkippedExisting => eprintln!(
                    "  {} {}",
                    style("✗").red(),
                    style(format!(
                        "View {}/{} already exists!",
                        view.dir, view.file_name
                    ))
                    .red()
                ),
            }
        }

        Ok(())
    }
}
