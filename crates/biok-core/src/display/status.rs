//! Short status lines for operation feedback.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Success,
    Notice,
    Failure,
}

/// A one-line message reporting how an operation went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    level: Level,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: Level::Success,
        }
    }

    /// Nothing failed, but nothing happened either (e.g. an empty pool).
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: Level::Notice,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: Level::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == Level::Success
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            Level::Success => "Success:",
            Level::Notice => "Note:",
            Level::Failure => "Error:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}
