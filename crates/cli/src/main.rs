use anyhow::Result;
use bulk_renamer_core::{
    list_files, load_config, run_naming, run_rollback, split_entries, Formula, IgnoreList,
    NamingScope, RunOptions,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bulk-renamer")]
#[command(about = "Bulk-rename files and folders from a naming formula")]
struct Cli {
    /// Naming formula, e.g. "finance{increment} - {current}".
    /// Mandatory unless --listAll is set.
    #[arg(long)]
    formula: Option<String>,

    /// Root directory to work on.
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Starting increment value.
    #[arg(long)]
    start: Option<i64>,

    /// Zero-pad width for {increment}; 4 renders 0001, 0002, ...
    #[arg(long = "formatIncrement")]
    format_increment: Option<usize>,

    /// Reconstruct original names from a previous pass instead of renaming.
    #[arg(long, default_value_t = false)]
    rollback: bool,

    /// Rename files only.
    #[arg(long = "fileOnly", default_value_t = false)]
    file_only: bool,

    /// Rename folders only.
    #[arg(long = "folderOnly", default_value_t = false)]
    folder_only: bool,

    /// Print every file path in the tree and exit.
    #[arg(long = "listAll", default_value_t = false)]
    list_all: bool,

    /// Continue past per-entry rename failures (forward mode only).
    #[arg(long = "skipError", default_value_t = false)]
    skip_error: bool,

    /// Comma-separated ignore entries: exact names or *.ext wildcards.
    #[arg(long)]
    ignore: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_all {
        for path in list_files(&cli.path)? {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let config = load_config()?;

    let Some(raw_formula) = cli.formula.as_deref() else {
        anyhow::bail!("--formula is mandatory unless --listAll is set");
    };
    let formula = Formula::parse(raw_formula)?;

    let mut ignore_entries = config.ignore.clone();
    if let Some(raw) = cli.ignore.as_deref() {
        ignore_entries.extend(split_entries(raw));
    }

    let scope = NamingScope::from_flags(cli.file_only, cli.folder_only);
    let start = cli.start.unwrap_or(config.start);
    let options = RunOptions {
        formula,
        scope,
        ignore: IgnoreList::from_entries(ignore_entries),
        pad: cli.format_increment.unwrap_or(config.format_increment),
        skip_errors: cli.skip_error || config.skip_error,
    };

    if cli.rollback {
        let final_counter = run_rollback(&options, &cli.path, start)?;
        println!(
            "Successfully rolled back {} items for {}",
            final_counter - start,
            scope.label()
        );
    } else {
        let final_counter = run_naming(&options, &cli.path, start)?;
        println!(
            "Successfully renamed {} items for {}",
            final_counter - start,
            scope.label()
        );
    }

    Ok(())
}
