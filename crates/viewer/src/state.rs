//! Viewer application state

use chrono::{DateTime, Utc};
use serde::Serialize;

use shelfware_core::{DisplayDashboard, Game, LibraryStats, SortBy};

/// The last submitted search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub steam_id: String,
    pub sort_by: SortBy,
}

/// Kinds of user-facing status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
    Warning,
    Info,
}

impl MessageKind {
    pub fn label(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
            MessageKind::Warning => "warning",
            MessageKind::Info => "info",
        }
    }
}

/// One message for the rendering layer. Timestamps let it expire the
/// success ones after a while.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
    pub posted_at: DateTime<Utc>,
}

impl StatusMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> StatusMessage {
        StatusMessage {
            kind,
            text: text.into(),
            posted_at: Utc::now(),
        }
    }
}

/// Everything the rendering layer binds to, in one place
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    /// Blocks duplicate search submissions; advisory only
    pub games_loading: bool,
    /// Blocks duplicate dashboard loads; advisory only
    pub dashboard_loading: bool,
    pub current_games: Vec<Game>,
    pub stats: Option<LibraryStats>,
    pub dashboard: Option<DisplayDashboard>,
    pub last_search: Option<SearchParams>,
    pub messages: Vec<StatusMessage>,
}

impl ViewerState {
    pub fn is_busy(&self) -> bool {
        self.games_loading || self.dashboard_loading
    }

    pub fn push_message(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(kind, text));
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}
