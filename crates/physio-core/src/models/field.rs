use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of rows shown for multi-line text areas.
pub const MULTILINE_ROWS: u32 = 2;

/// The editor a field is rendered with. Every kind stores a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Single-line text, including numeric-looking values such as age or BMI.
    Text,
    /// ISO date editor (`YYYY-MM-DD`).
    Date,
    /// Multi-row free text (complaint narratives, notes).
    Multiline,
}

impl FieldKind {
    pub fn rows(&self) -> Option<u32> {
        match self {
            FieldKind::Multiline => Some(MULTILINE_ROWS),
            FieldKind::Text | FieldKind::Date => None,
        }
    }
}

/// Where a field sits within its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldLayout {
    Grid,
    FullWidth,
}

/// A single field of an assessment schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    /// Stable record key, e.g. `patientName`.
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub layout: FieldLayout,
}

impl FieldSpec {
    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Text, FieldLayout::Grid)
    }

    pub fn date(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Date, FieldLayout::Grid)
    }

    /// Multi-line fields always span the full section width.
    pub fn multiline(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Multiline, FieldLayout::FullWidth)
    }

    pub fn full_width(mut self) -> Self {
        self.layout = FieldLayout::FullWidth;
        self
    }

    fn new(key: &str, label: &str, kind: FieldKind, layout: FieldLayout) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            layout,
        }
    }
}
