use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;
use styleguard_types::RepoPath;
use walkdir::WalkDir;

/// Compiled include/exclude globs, matched against root-relative paths.
#[derive(Clone, Debug)]
pub struct SourceFilter {
    include: GlobSet,
    exclude: GlobSet,
}

impl SourceFilter {
    pub fn new(include: &[String], exclude: &[String]) -> anyhow::Result<Self> {
        Ok(Self {
            include: build_globset(include).context("compile include globset")?,
            exclude: build_globset(exclude).context("compile exclude globset")?,
        })
    }

    pub fn is_included(&self, rel: &str) -> bool {
        self.include.is_match(rel) && !self.is_excluded(rel)
    }

    /// Excluded directories are not descended into.
    pub fn is_excluded(&self, rel: &str) -> bool {
        self.exclude.is_match(rel)
    }
}

/// Discover source files under `repo_root` matching the filter.
///
/// Returned paths are root-relative and sorted.
pub fn discover_sources(
    repo_root: &Utf8Path,
    filter: &SourceFilter,
) -> anyhow::Result<Vec<RepoPath>> {
    if !repo_root.is_dir() {
        anyhow::bail!("root is not a directory: {repo_root}");
    }
    let mut out = walk(repo_root, repo_root, filter);
    out.sort();
    out.dedup();
    Ok(out)
}

/// Expand explicit command-line paths.
///
/// Files are taken as given, even when the include globs would not select them.
/// Directories are walked with the filter. Relative paths resolve against `repo_root`.
pub fn expand_paths(
    repo_root: &Utf8Path,
    paths: &[Utf8PathBuf],
    filter: &SourceFilter,
) -> anyhow::Result<Vec<RepoPath>> {
    let mut out = Vec::new();
    for path in paths {
        let abs = repo_root.join(path);
        if abs.is_dir() {
            let mut found = walk(repo_root, &abs, filter);
            found.sort();
            out.extend(found);
        } else if abs.is_file() {
            out.push(relative_to(repo_root, &abs));
        } else {
            anyhow::bail!("no such file or directory: {path}");
        }
    }

    // Keep the first occurrence so explicit order wins.
    let mut seen = std::collections::BTreeSet::new();
    out.retain(|p| seen.insert(p.clone()));
    Ok(out)
}

fn walk(repo_root: &Utf8Path, start: &Utf8Path, filter: &SourceFilter) -> Vec<RepoPath> {
    WalkDir::new(start)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            pathbuf_to_utf8(e.path().to_path_buf())
                .map(|abs| {
                    let rel = relative_to(repo_root, &abs);
                    !filter.is_excluded(rel.as_str())
                        && !filter.is_excluded(&format!("{}/", rel.as_str()))
                })
                .unwrap_or(false)
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
        .map(|abs| relative_to(repo_root, &abs))
        .filter(|rel| filter.is_included(rel.as_str()))
        .collect()
}

fn relative_to(repo_root: &Utf8Path, abs: &Utf8Path) -> RepoPath {
    RepoPath::new(abs.strip_prefix(repo_root).unwrap_or(abs).as_str())
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p).with_context(|| format!("invalid glob: {p}"))?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
