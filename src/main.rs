//! Brick Scores entry point
//!
//! Natively: `brick-scores [NAME SCORE]` records a run if given one, then
//! prints the champion banner and the leaderboard. On the web the board is
//! written to the browser console.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use brick_scores::leaderboard::{self, LeaderboardRow};
use brick_scores::platform::Storage;
#[cfg(not(target_arch = "wasm32"))]
use brick_scores::StoreError;
use brick_scores::{ScoreStore, Settings};

fn render_board<S: Storage>(store: &ScoreStore<S>, settings: &Settings) -> Vec<String> {
    let mut lines = vec![leaderboard::champion_banner(
        store.champion().as_ref(),
        &settings.no_champion_label,
    )];
    let entries = store.ranked_view(settings.max_entries_to_show);
    for LeaderboardRow {
        rank, name, score, ..
    } in leaderboard::rows(&entries, &settings.palette)
    {
        if rank == 0 {
            lines.push(format!("  {name}"));
        } else {
            lines.push(format!("{rank:>3}. {name:<20} {score:>8}"));
        }
    }
    lines
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }

    log::info!("Brick Scores starting...");
    let settings = match Settings::default_storage() {
        Ok(storage) => Settings::load(&storage),
        Err(_) => Settings::default(),
    };
    match settings.score_store() {
        Ok(store) => {
            for line in render_board(&store, &settings) {
                log::info!("{line}");
            }
        }
        Err(err) => log::error!("{err}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run(submission: Option<(&str, i64)>) -> Result<(), StoreError> {
    let settings = match Settings::default_storage() {
        Ok(storage) => Settings::load(&storage),
        Err(err) => {
            log::warn!("{err}");
            Settings::default()
        }
    };
    let store = settings.score_store()?;
    log::info!("Scores stored at {}", store.storage().location());

    if let Some((name, score)) = submission {
        let champion = store.append(name, score)?;
        log::info!("Champion is now {:?} with {}", champion.name, champion.score);
    }

    for line in render_board(&store, &settings) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Player name for the run to record
    #[arg(requires = "score")]
    name: Option<String>,
    /// Final score of the run. Negative values are rejected by the store.
    #[arg(allow_negative_numbers = true)]
    score: Option<i64>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Args {
    fn submission(&self) -> Option<(&str, i64)> {
        self.name.as_deref().zip(self.score)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(args.submission()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
