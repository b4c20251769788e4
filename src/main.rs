use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wonderscore::history::{GameRecorder, GameSetup, InMemoryHistoryRepository};
use wonderscore::leaderboard::{
    best_averages, filter_history_by_expansion, most_wins, top_scores, win_rates, ExpansionFilter,
};
use wonderscore::profile::{InMemoryProfileRepository, ProfileRepository};
use wonderscore::scoring::{CategoryScore, PlayerScore};
use wonderscore::{ExpansionFlags, GameHistoryEntry, HistoryRepository};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wonderscore=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting score keeper demo");

    let history = Arc::new(InMemoryHistoryRepository::new());
    let profiles = Arc::new(InMemoryProfileRepository::new());

    // A history file (JSON array of entries) can be passed as the first
    // argument; otherwise a couple of sample games are played through.
    match std::env::args().nth(1) {
        Some(path) => match load_history(&path, history.as_ref()).await {
            Ok(count) => info!(count, path = %path, "Loaded history file"),
            Err(err) => {
                tracing::error!(%err, path = %path, "Failed to load history file");
                return;
            }
        },
        None => {
            seed_sample_games(history.clone(), profiles.clone()).await;
        }
    }

    let games = history.all_games().await.expect("in-memory history");
    let names = profiles.profile_names().await.expect("in-memory profiles");

    print_report("Top scores", &top_scores(&games, &names));
    print_report("Most wins", &most_wins(&games, &names));
    print_report("Best averages (min 1 game)", &best_averages(&games, &names, 1));
    print_report("Win rates (min 1 game)", &win_rates(&games, &names, 1));

    let naval = filter_history_by_expansion(&games, ExpansionFilter::Armada);
    print_report("Top scores, naval games only", &top_scores(&naval, &names));

    let roster = profiles.all().await.expect("in-memory profiles");
    print_report("Player profiles", &roster);
}

async fn load_history(
    path: &str,
    history: &dyn HistoryRepository,
) -> Result<usize, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let entries: Vec<GameHistoryEntry> = serde_json::from_str(&raw)?;
    let count = entries.len();
    for entry in entries {
        history.record_game(entry).await?;
    }
    Ok(count)
}

fn sample_player(
    id: &str,
    name: &str,
    position: usize,
    civilian: i32,
    science: i32,
    treasury: i32,
) -> PlayerScore {
    let mut p = PlayerScore::new(id, position);
    p.name = Some(name.to_string());
    p.civilian = Some(civilian);
    p.science = Some(CategoryScore::new(science));
    p.treasury = Some(treasury);
    p
}

async fn seed_sample_games(
    history: Arc<InMemoryHistoryRepository>,
    profiles: Arc<InMemoryProfileRepository>,
) {
    let recorder = GameRecorder::builder(history)
        .with_profiles(profiles)
        .build();

    let base = recorder.finalize_game(
        GameSetup::default(),
        vec![
            sample_player("alice", "Alice", 0, 30, 18, 4),
            sample_player("bob", "Bob", 1, 36, 4, 7),
            sample_player("cara", "Cara", 2, 28, 10, 3),
        ],
    );
    if let Err(err) = base.await {
        tracing::error!(%err, "Failed to record sample game");
    }

    let naval_setup = GameSetup {
        expansions: ExpansionFlags {
            armada: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut bob = sample_player("bob", "Bob", 0, 33, 6, 5);
    bob.navy = Some(CategoryScore::new(12));
    let naval = recorder.finalize_game(
        naval_setup,
        vec![bob, sample_player("alice", "Alice", 1, 35, 12, 2)],
    );
    if let Err(err) = naval.await {
        tracing::error!(%err, "Failed to record sample game");
    }
}

fn print_report<T: serde::Serialize>(title: &str, rows: &[T]) {
    let rendered = serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string());
    println!("== {title}\n{rendered}");
}
