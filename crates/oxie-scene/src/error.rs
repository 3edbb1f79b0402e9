//! Error and warning types for scene compilation.

use thiserror::Error;

/// Icon validation failure. Fatal to the compile.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IconError {
    /// Wrong number of bytes.
    #[error("icon must be exactly 32 bytes, got {got}")]
    WrongLength { got: usize },
    /// Element is not an integer.
    #[error("icon byte {index} must be an integer, got {value}")]
    NotAnInteger { index: usize, value: String },
    /// Element outside 0-255.
    #[error("icon byte {index} must be in 0-255, got {value}")]
    OutOfRange { index: usize, value: i64 },
}

/// Top-level error type for scene compilation.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Icon validation failed.
    #[error("invalid icon: {0}")]
    Icon(#[from] IconError),

    /// JSON parsing error at the definition boundary.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Warning codes for soft degradations during compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Turn action definition has an unrecognized type.
    UnknownTurnType,
    /// W002: Push action definition has an unrecognized type.
    UnknownPushType,
    /// W003: Compact encoder entry is malformed.
    MalformedCompactEncoder,
    /// W004: More than 16 encoders supplied on a page; excess dropped.
    ExcessEncoders,
    /// W005: More than 12 pages supplied; excess dropped.
    ExcessPages,
    /// W006: Scene names an instrument definition that was not resolved.
    UnresolvedInstrument,
    /// W007: Page has an unrecognized default action type.
    UnknownPageType,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::UnknownTurnType => "W001",
            WarningCode::UnknownPushType => "W002",
            WarningCode::MalformedCompactEncoder => "W003",
            WarningCode::ExcessEncoders => "W004",
            WarningCode::ExcessPages => "W005",
            WarningCode::UnresolvedInstrument => "W006",
            WarningCode::UnknownPageType => "W007",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A non-fatal diagnostic emitted during compilation.
///
/// Soft degradations (unknown action types, unresolvable instrument
/// references, over-supplied pages or encoders) never abort the compile;
/// they fall back to documented defaults and report one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable message.
    pub message: String,
    /// Path to the problematic field in the definition (e.g.,
    /// "pages[0].encoders[3]").
    pub path: Option<String>,
}

impl CompileWarning {
    /// Creates a new warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new warning with a definition path.
    pub fn with_path(code: WarningCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_codes() {
        assert_eq!(WarningCode::UnknownTurnType.code(), "W001");
        assert_eq!(WarningCode::UnresolvedInstrument.code(), "W006");
        assert_eq!(WarningCode::UnknownPageType.code(), "W007");
    }

    #[test]
    fn warning_display() {
        let w = CompileWarning::with_path(
            WarningCode::ExcessEncoders,
            "page has 20 encoders, keeping the first 16",
            "pages[2].encoders",
        );
        assert_eq!(
            w.to_string(),
            "W004: page has 20 encoders, keeping the first 16 (at pages[2].encoders)"
        );
    }

    #[test]
    fn icon_error_display() {
        let e = IconError::OutOfRange {
            index: 7,
            value: 300,
        };
        assert_eq!(e.to_string(), "icon byte 7 must be in 0-255, got 300");

        let e = IconError::WrongLength { got: 31 };
        assert_eq!(e.to_string(), "icon must be exactly 32 bytes, got 31");
    }
}
