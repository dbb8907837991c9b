//! # Notifications and Navigation
//!
//! The form never talks to a screen directly. It reports outcomes through
//! a [`Notifier`] and moves between views through a [`Navigator`], both
//! injected by whoever drives it (the TUI, or a recording fake in tests).

use crate::core::state::Route;

pub const MSG_MISSING_PROMPT: &str = "Please provide proper prompt";
pub const MSG_MISSING_DETAILS: &str = "Please generate an image with proper details";
pub const MSG_SUCCESS: &str = "Success";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// A blocking message for the user. The UI keeps it on screen until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.level {
            Level::Info => "Notice",
            Level::Error => "Error",
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
