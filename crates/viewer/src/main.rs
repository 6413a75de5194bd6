//! Shelfware viewer
//!
//! Thin client for the game-library service: runs one search and dashboard
//! cycle for a Steam ID and prints the display-ready results. Rendering
//! proper (cards, charts) lives elsewhere; this binary is the wiring.

mod api;
mod config;
mod state;
mod viewer;

use shelfware_core::{categorize_games, format_playtime, PlaytimeCategory, SortBy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::HttpLibraryService;
use crate::config::ViewerConfig;
use crate::viewer::Viewer;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelfware=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ViewerConfig::load();
    if let Ok(url) = std::env::var("SHELFWARE_SERVER_URL") {
        config.server_url = url;
    }

    let mut args = std::env::args().skip(1);
    let steam_id = match args.next() {
        Some(id) => id,
        None => {
            let fallback = config.example_steam_ids.first().cloned().unwrap_or_default();
            tracing::info!(steam_id = %fallback, "no Steam ID given, using the first example");
            fallback
        }
    };
    let sort_by = args.next().map(|s| SortBy::parse(&s)).unwrap_or_default();

    tracing::info!(server = %config.server_url, %sort_by, "starting viewer");

    let service = HttpLibraryService::new(&config.server_url, config.request_timeout());
    let mut viewer = Viewer::new(service);

    viewer.probe_service().await;
    viewer.show_service_info().await;
    viewer.search_games(&steam_id, sort_by).await;
    viewer.load_dashboard(&steam_id).await;

    for message in &viewer.state.messages {
        println!("[{}] {}", message.kind.label(), message.text);
    }

    if let Some(stats) = &viewer.state.stats {
        println!();
        println!(
            "{} games, {} played, {}h total, {}h average",
            stats.total_games, stats.games_with_playtime, stats.total_hours, stats.average_hours
        );
        if let Some(top) = &stats.most_played_game {
            println!("most played: {} ({})", top.name, format_playtime(top.playtime));
        }
        for badge in stats.badges() {
            let status = if badge.unlocked {
                "unlocked".to_string()
            } else {
                format!("{} to go", badge.remaining)
            };
            println!("badge {}: {}", badge.label(), status);
        }
    }

    for game in &viewer.state.current_games {
        println!("{:>8}  {:<12}  {}", game.app_id, format_playtime(game.playtime), game.name);
    }

    if !viewer.state.current_games.is_empty() {
        let buckets = categorize_games(&viewer.state.current_games);
        println!();
        for (category, games) in [
            (PlaytimeCategory::NeverPlayed, &buckets.never_played),
            (PlaytimeCategory::Casual, &buckets.casual),
            (PlaytimeCategory::Regular, &buckets.regular),
            (PlaytimeCategory::Hardcore, &buckets.hardcore),
        ] {
            println!("{:<13} {}", category.label(), games.len());
        }
    }

    if let Some(dashboard) = &viewer.state.dashboard {
        println!();
        println!("dashboard generated at {}", dashboard.generated_at);
        println!(
            "{} games, {} total, {} average per game",
            dashboard.total_games, dashboard.total_hours_text, dashboard.average_hours_text
        );
        for entry in &dashboard.top5_most_played {
            println!("top: {} ({})", entry.game.name, entry.playtime_text);
        }
        if let Some(recent) = &dashboard.most_recent_game {
            println!("most recent: {} ({})", recent.game.name, recent.playtime_text);
        }
    }
}
