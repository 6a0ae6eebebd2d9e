use anyhow::Context;
use camino::Utf8Path;
use rayon::prelude::*;
use std::io::Read;
use styleguard_types::RepoPath;

/// A loaded source buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: RepoPath,
    pub text: String,
}

/// Read one file. Invalid UTF-8 is replaced, never rejected.
pub fn read_source(repo_root: &Utf8Path, path: &RepoPath) -> anyhow::Result<SourceFile> {
    let abs = repo_root.join(path.as_str());
    let bytes = std::fs::read(&abs).with_context(|| format!("read {abs}"))?;
    Ok(SourceFile {
        path: path.clone(),
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Read files in parallel. Results keep the order of `paths`.
pub fn read_sources(
    repo_root: &Utf8Path,
    paths: &[RepoPath],
) -> Vec<anyhow::Result<SourceFile>> {
    paths
        .par_iter()
        .map(|p| read_source(repo_root, p))
        .collect()
}

/// Drain a reader (typically stdin) into a `<stdin>` buffer.
pub fn read_stdin_source<R: Read>(mut reader: R) -> anyhow::Result<SourceFile> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).context("read stdin")?;
    Ok(SourceFile {
        path: RepoPath::stdin(),
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}
