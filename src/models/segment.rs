//! One renderable unit of the status line, serialized in i3bar's block format.

use serde::{Serialize, Serializer};

/// Fixed palette understood by the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Orange,
    Green,
    White,
}

impl Color {
    pub const fn hex(self) -> &'static str {
        match self {
            Color::Red => "#C83737",
            Color::Orange => "#DA7D3E",
            Color::Green => "#A5CB76",
            Color::White => "#E6E6E6",
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// A labeled, optionally colored block of the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    #[serde(rename = "full_text")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub urgent: bool,
    #[serde(rename = "separator")]
    pub separator_after: bool,
}

impl Segment {
    /// Plain white label that runs into the value following it.
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Some(Color::White),
            urgent: false,
            separator_after: false,
        }
    }

    /// Value closing a metric, followed by a separator.
    pub fn value(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            urgent: false,
            separator_after: true,
        }
    }

    /// Inline report of a failed read: `"<prefix>: <message>"` in red.
    pub fn error(prefix: &str, err: impl std::fmt::Display) -> Self {
        Self::value(format!("{prefix}: {err}"), Color::Red)
    }
}
