use crate::formula::Formula;
use crate::ignore::IgnoreList;
use crate::scan::read_entries;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingScope {
    FilesOnly,
    FoldersOnly,
    FilesAndFolders,
}

impl NamingScope {
    pub fn from_flags(file_only: bool, folder_only: bool) -> Self {
        if file_only {
            return Self::FilesOnly;
        }
        if folder_only {
            return Self::FoldersOnly;
        }
        Self::FilesAndFolders
    }

    pub fn includes_files(self) -> bool {
        matches!(self, Self::FilesOnly | Self::FilesAndFolders)
    }

    pub fn includes_folders(self) -> bool {
        matches!(self, Self::FoldersOnly | Self::FilesAndFolders)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FilesOnly => "file_only",
            Self::FoldersOnly => "folder_only",
            Self::FilesAndFolders => "file_and_folder",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub formula: Formula,
    pub scope: NamingScope,
    pub ignore: IgnoreList,
    pub pad: usize,
    pub skip_errors: bool,
}

#[derive(Clone, Copy)]
enum Mode {
    Forward,
    Rollback,
}

pub fn run_naming(options: &RunOptions, root: &Path, start: i64) -> Result<i64> {
    visit_dir(options, root, start, Mode::Forward)
}

pub fn run_rollback(options: &RunOptions, root: &Path, start: i64) -> Result<i64> {
    visit_dir(options, root, start, Mode::Rollback)
}

fn visit_dir(options: &RunOptions, dir: &Path, mut counter: i64, mode: Mode) -> Result<i64> {
    let entries = read_entries(dir)?;

    if options.scope.includes_files() {
        counter = rename_batch(options, dir, &entries.files, counter, mode)?;
    }

    let mut folders = entries.folders;
    if options.scope.includes_folders() {
        counter = rename_batch(options, dir, &folders, counter, mode)?;
        // Recursion must use the post-rename folder names.
        folders = read_entries(dir)?.folders;
    }

    for folder in &folders {
        counter = visit_dir(options, &dir.join(folder), counter, mode)?;
    }

    Ok(counter)
}

fn rename_batch(
    options: &RunOptions,
    dir: &Path,
    names: &[String],
    mut counter: i64,
    mode: Mode,
) -> Result<i64> {
    for name in names {
        if !options.ignore.is_rename_allowed(name) {
            continue;
        }
        let dest = match mode {
            Mode::Forward => options.formula.expand(name, counter, options.pad),
            Mode::Rollback => options.formula.rollback_name(name),
        };
        match rename_entry(dir, name, &dest) {
            Ok(()) => counter += 1,
            Err(_) if matches!(mode, Mode::Forward) && options.skip_errors => {}
            Err(err) => return Err(err),
        }
    }
    Ok(counter)
}

fn rename_entry(dir: &Path, from: &str, to: &str) -> Result<()> {
    let src = dir.join(from);
    let dst = dir.join(to);
    fs::rename(&src, &dst)
        .with_context(|| format!("failed to rename: {} -> {}", src.display(), dst.display()))
}
