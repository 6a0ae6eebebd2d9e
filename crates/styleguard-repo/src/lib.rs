//! Repository adapters: discover JavaScript sources and load them as text.
//!
//! This crate is allowed to do filesystem IO. It does not interpret file contents.

#![forbid(unsafe_code)]

mod discover;
mod load;

pub use discover::{discover_sources, expand_paths, SourceFilter};
pub use load::{read_source, read_sources, read_stdin_source, SourceFile};

/// Fuzz-friendly API for glob handling without filesystem access.
/// These functions never panic on any input.
pub mod fuzz {
    use super::SourceFilter;

    /// Compile `include`/`exclude` and report which candidates are selected.
    pub fn filter_paths(
        include: &[String],
        exclude: &[String],
        candidates: &[String],
    ) -> anyhow::Result<Vec<String>> {
        let filter = SourceFilter::new(include, exclude)?;
        Ok(candidates
            .iter()
            .filter(|c| filter.is_included(c))
            .cloned()
            .collect())
    }
}
