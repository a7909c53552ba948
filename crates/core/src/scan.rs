use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct DirEntries {
    pub files: Vec<String>,
    pub folders: Vec<String>,
}

pub fn read_entries(dir: &Path) -> Result<DirEntries> {
    let meta =
        fs::metadata(dir).with_context(|| format!("cannot access path: {}", dir.display()))?;
    if !meta.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = DirEntries::default();
    for entry in
        fs::read_dir(dir).with_context(|| format!("cannot read directory: {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("cannot read entry in: {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("cannot stat entry in: {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().to_string();
        if file_type.is_dir() {
            entries.folders.push(name);
        } else {
            entries.files.push(name);
        }
    }

    // fs::read_dir order is unspecified; the increment order must be stable.
    entries.files.sort();
    entries.folders.sort();
    Ok(entries)
}

pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    collect_files(root, &mut out)?;
    Ok(out)
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = read_entries(dir)?;
    for file in &entries.files {
        out.push(dir.join(file));
    }
    for folder in &entries.folders {
        collect_files(&dir.join(folder), out)?;
    }
    Ok(())
}
