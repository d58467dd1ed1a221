//! Design tokens shared by the Yew form controls.

/// Color tone applied through `<prefix>-<tone>` classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Brand primary.
    Primary,
    /// Brand secondary.
    Secondary,
    /// Neutral grey.
    Neutral,
    /// Informational.
    Info,
    /// Positive outcome.
    Success,
    /// Needs attention.
    Warning,
    /// Validation failure.
    Error,
}

impl Tone {
    /// Class suffix for the tone.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Control sizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Size {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium (default).
    #[default]
    Md,
    /// Large.
    Lg,
}

impl Size {
    /// `<prefix>-<size>` class for the control.
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> String {
        let suffix = match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        };
        format!("{prefix}-{suffix}")
    }
}

/// `<prefix>-<tone>` class when a tone is set.
#[must_use]
pub fn tone_class(prefix: &str, tone: Option<Tone>) -> Option<String> {
    tone.map(|tone| format!("{prefix}-{}", tone.as_str()))
}
