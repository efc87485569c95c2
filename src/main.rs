//! bladegen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::struct_excessive_bools)]

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{KindFlags, MakeViewCommand};

#[derive(Parser)]
#[command(name = "bladegen")]
#[command(version)]
#[command(about = "Scaffolding CLI that generates Blade view files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create new view files for a model
    #[command(name = "make:view")]
    MakeView {
        /// Model name; may include a namespace prefix (e.g. `Admin/Example`)
        model: String,

        /// Create a new index.blade.php for the model
        #[arg(short = 'i', long)]
        index: bool,

        /// Create a new show.blade.php for the model
        #[arg(short = 's', long)]
        show: bool,

        /// Create a new create.blade.php for the model
        #[arg(short = 'c', long)]
        create: bool,

        /// Create a new edit.blade.php for the model
        #[arg(short = 'e', long)]
        edit: bool,

        /// Create a new index, show, create and edit for the model
        #[arg(short = 'C', long)]
        crud: bool,

        /// Application base path; stub overrides live under `<base-path>/stubs/`
        /// (default: current directory)
        #[arg(long, value_name = "DIR")]
        base_path: Option<PathBuf>,

        /// Views directory; relative paths resolve against the base path
        #[arg(long, value_name = "DIR", default_value = "resources/views")]
        views_root: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::MakeView {
            model,
            index,
            show,
            create,
            edit,
            crud,
            base_path,
            views_root,
        } => {
            let flags = KindFlags {
                index,
                show,
                create,
                edit,
                crud,
            };
            let cmd = MakeViewCommand::new(model, flags, base_path, views_root)?;
            cmd.execute()?;
        }
    }

    Ok(())
}
