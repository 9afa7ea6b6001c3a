use std::fmt;
use serde::{Deserialize, Serialize};

/// Display severity of an audit card.
///
/// The classifier only ever yields `Success`, `Warning` or `Critical`;
/// `Info` is reserved for cards that carry prose rather than a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    Critical,
    Info,
}

impl Status {
    pub fn is_classifier_outcome(&self) -> bool {
        !matches!(self, Status::Info)
    }

    pub fn badge_label(&self) -> &'static str {
        match self {
            Status::Success => "Optimized",
            Status::Warning => "Warning",
            Status::Critical => "Critical",
            Status::Info => "Info",
        }
    }

    pub fn tone(&self) -> &'static str {
        match self {
            Status::Success => "emerald",
            Status::Warning => "amber",
            Status::Critical => "rose",
            Status::Info => "slate",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Status::Success => "check",
            Status::Warning | Status::Info => "alert-circle",
            Status::Critical => "x",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Status::Success => "🟢",
            Status::Warning => "🟠",
            Status::Critical => "🔴",
            Status::Info => "🔵",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Warning => "warning",
            Status::Critical => "critical",
            Status::Info => "info",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
