#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Warning,
    Error,
}

impl RenderableSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLocation {
    pub path: String,
    pub line: u32,
    pub col: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub rule_id: String,
    pub code: String,
    pub message: String,
    pub location: RenderableLocation,
    pub snippet: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFile {
    pub path: String,
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableData {
    pub files_scanned: u32,
    pub lines_scanned: u32,
    pub warnings: u32,
    pub errors: u32,
    pub suppressed: u32,
}

impl RenderableData {
    pub fn violations_total(&self) -> u32 {
        self.warnings + self.errors
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub files: Vec<RenderableFile>,
    pub data: RenderableData,
}

impl RenderableReport {
    /// A passing report that scanned nothing.
    pub fn empty() -> Self {
        Self {
            verdict: RenderableVerdictStatus::Pass,
            files: Vec::new(),
            data: RenderableData::default(),
        }
    }

    /// Every finding, file by file.
    pub fn findings(&self) -> impl Iterator<Item = &RenderableFinding> {
        self.files.iter().flat_map(|f| f.findings.iter())
    }
}
