//! Stack Tower headless driver
//!
//! Runs the simulation at fixed steps with a simple autoplayer and prints the
//! final snapshot as JSON.
//!
//! Usage: `stack-tower [settings.json] [games]`

use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use stack_tower::sim::{GameEvent, InputAction, SessionController};
use stack_tower::{ColorSource, Settings};

/// Give up waiting for alignment after this many ticks and drop anyway
const MAX_WAIT_TICKS: u32 = 60 * 30;

/// Aims each drop at a random offset from the tower top. The offset range
/// widens as the score grows, so games eventually end.
struct AutoPlayer {
    rng: Pcg32,
    target_offset: f32,
    waited: u32,
}

impl AutoPlayer {
    fn new(seed: u64) -> Self {
        let mut player = Self {
            rng: Pcg32::seed_from_u64(seed),
            target_offset: 0.0,
            waited: 0,
        };
        player.pick_target(0);
        player
    }

    fn pick_target(&mut self, score: u32) {
        let jitter = 2.0 + score as f32 * 1.5;
        self.target_offset = self.rng.random_range(-jitter..=jitter);
        self.waited = 0;
    }

    /// Whether to drop on this tick
    fn wants_drop<C: ColorSource>(&mut self, ctl: &SessionController<C>) -> bool {
        let session = ctl.session();
        let target = session.tower.top().left + self.target_offset;
        self.waited += 1;
        (session.moving.left - target).abs() <= session.moving.speed / 2.0 || self.waited >= MAX_WAIT_TICKS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Stack Tower (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let games: u32 = args.next().and_then(|n| n.parse().ok()).unwrap_or(3);

    let mut ctl = SessionController::from_settings(&settings);
    let mut player = AutoPlayer::new(settings.seed.unwrap_or(0) ^ 0x5EED);
    let mut finished = 0;

    while finished < games {
        ctl.tick();
        if !player.wants_drop(&ctl) {
            continue;
        }

        match ctl.handle(InputAction::Place) {
            GameEvent::Placed { perfect, .. } => {
                if perfect {
                    log::info!("Perfect drop at score {}", ctl.session().score);
                }
                player.pick_target(ctl.session().score);
            }
            GameEvent::Missed { final_score } => {
                finished += 1;
                log::info!("Game {} finished with score {}", finished, final_score);
                if finished == games {
                    break;
                }
                ctl.handle(InputAction::Restart);
                player.pick_target(0);
            }
            GameEvent::Restarted { .. } | GameEvent::Ignored => {}
        }
    }

    match serde_json::to_string_pretty(&ctl.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize snapshot: {}", err),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is host-agnostic; web hosts link the library directly
}
