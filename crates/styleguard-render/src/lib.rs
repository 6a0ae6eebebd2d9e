//! Rendering for every output surface: terminal text, JSON records, Markdown and
//! GitHub annotations.
//!
//! Renderers work on [`RenderableReport`], a flattened view that does not depend on
//! the report schema version. None of them can fail.

#![forbid(unsafe_code)]

mod format;
mod gha;
mod json;
mod markdown;
mod model;
mod text;

#[cfg(test)]
mod test_support;

pub use format::OutputFormat;
pub use gha::render_github_annotations;
pub use json::render_json_records;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFile, RenderableFinding, RenderableLocation, RenderableReport,
    RenderableSeverity, RenderableVerdictStatus,
};
pub use text::render_text;

/// Render `report` in the requested format.
pub fn render(report: &RenderableReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json_records(report),
        OutputFormat::Markdown => render_markdown(report),
        OutputFormat::Github => {
            let annotations = render_github_annotations(report);
            if annotations.is_empty() {
                return "::notice::styleguard: no violations\n".to_string();
            }
            let mut out = annotations.join("\n");
            out.push('\n');
            out
        }
    }
}
