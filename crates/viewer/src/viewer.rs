//! Search and dashboard orchestration over a library service

use shelfware_core::{format_dashboard, is_valid_steam_id, LibraryStats, ShelfwareError, SortBy};

use crate::api::LibraryService;
use crate::state::{MessageKind, SearchParams, ViewerState};

/// Ties the viewer state to a library service and runs the user flows
pub struct Viewer<S: LibraryService> {
    pub state: ViewerState,
    service: S,
}

impl<S: LibraryService> Viewer<S> {
    pub fn new(service: S) -> Viewer<S> {
        Viewer {
            state: ViewerState::default(),
            service,
        }
    }

    /// Startup connectivity check. Unreachable is a warning, not a failure.
    pub async fn probe_service(&mut self) {
        match self.service.test_connection().await {
            Ok(true) => tracing::info!("library service reachable"),
            Ok(false) => self.state.push_message(
                MessageKind::Warning,
                "The library service answered but reported a problem.",
            ),
            Err(e) => {
                tracing::warn!("service probe failed: {e}");
                self.state.push_message(
                    MessageKind::Warning,
                    "Could not reach the library service. Is the server running?",
                );
            }
        }
    }

    /// Fetch the service metadata and surface it as an info message.
    pub async fn show_service_info(&mut self) {
        match self.service.api_info().await {
            Ok(info) => {
                tracing::debug!(name = %info.name, version = %info.version, "service info");
                self.state.push_message(
                    MessageKind::Info,
                    format!("Connected to {} {}", info.name, info.version),
                );
            }
            Err(e) => tracing::debug!("service info unavailable: {e}"),
        }
    }

    /// Run one search. A second call while one is in flight is ignored.
    pub async fn search_games(&mut self, steam_id: &str, sort_by: SortBy) {
        if self.state.games_loading {
            tracing::debug!("search ignored, one is already running");
            return;
        }

        let steam_id = steam_id.trim().to_string();
        if steam_id.is_empty() {
            self.state
                .push_message(MessageKind::Error, "Please enter a Steam ID.");
            return;
        }
        if !is_valid_steam_id(&steam_id) {
            self.state.push_message(
                MessageKind::Error,
                "Invalid Steam ID. It must be 17 digits starting with 76561198.",
            );
            return;
        }

        self.state.last_search = Some(SearchParams {
            steam_id: steam_id.clone(),
            sort_by,
        });
        self.state.games_loading = true;
        self.state.clear_messages();

        let result = self.service.user_games(&steam_id, sort_by).await;
        self.state.games_loading = false;

        match result {
            Ok(games) if games.is_empty() => {
                self.state.push_message(
                    MessageKind::Warning,
                    "No games found. Check the Steam ID and that the profile is public.",
                );
            }
            Ok(games) => {
                tracing::info!(count = games.len(), "games loaded");
                let message = if games.len() == 1 {
                    "1 game loaded.".to_string()
                } else {
                    format!("{} games loaded.", games.len())
                };
                self.state.stats = Some(LibraryStats::from_games(&games));
                self.state.current_games = games;
                self.state.push_message(MessageKind::Success, message);
            }
            Err(e) => {
                tracing::warn!("search failed: {e}");
                self.state.push_message(MessageKind::Error, user_message(&e));
            }
        }
    }

    /// Fetch and format the dashboard. Ignored while one load is in flight.
    pub async fn load_dashboard(&mut self, steam_id: &str) {
        if self.state.dashboard_loading {
            tracing::debug!("dashboard load ignored, one is already running");
            return;
        }
        self.state.dashboard_loading = true;

        let result = self.service.user_dashboard(steam_id.trim()).await;
        self.state.dashboard_loading = false;

        match result {
            Ok(summary) => {
                self.state.dashboard = Some(format_dashboard(&summary));
            }
            Err(e) => {
                tracing::warn!("dashboard load failed: {e}");
                self.state.push_message(
                    MessageKind::Warning,
                    format!("Could not load the dashboard: {}", user_message(&e)),
                );
            }
        }
    }
}

/// Pick the user-facing text for a failed request
fn user_message(error: &ShelfwareError) -> String {
    match error {
        ShelfwareError::Network(_) => {
            "Connection failed. Check your internet connection and that the server is running."
                .to_string()
        }
        ShelfwareError::Timeout(_) => "The request timed out. Try again.".to_string(),
        ShelfwareError::Service { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
