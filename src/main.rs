//! Boxy & Cheese headless driver
//!
//! Runs one round at a fixed 60 Hz frame rate with a simple autopilot at
//! the keyboard, logging the HUD as it changes. The real window, renderer
//! and audio output plug into the same `PlayMode` calls.
//!
//! Usage: `boxy-cheese [tuning.json]` (log level via `RUST_LOG`)

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use boxy_cheese::Tuning;
use boxy_cheese::audio::{LoopMixer, Mixer};
use boxy_cheese::consts::FRAME_DT;
use boxy_cheese::input::{InputEvent, Key};
use boxy_cheese::sim::{PlayMode, demo_scene};

/// Give up after this many frames (one minute)
const MAX_FRAMES: u32 = 60 * 60;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Boxy & Cheese (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let seed = tuning.seed.unwrap_or_else(clock_seed);

    let mut game = PlayMode::new(demo_scene(), LoopMixer::new(), tuning, seed)?;
    game.prepare_draw(1280, 720);
    capture_pointer(&mut game);

    let mut held = HashSet::new();
    let mut last_hud = game.hud();
    for frame in 0..MAX_FRAMES {
        for event in autopilot(&game, &mut held) {
            game.handle_event(&event);
        }
        game.update(FRAME_DT);
        game.music_mut().mixer_mut().advance(FRAME_DT);

        let hud = game.hud();
        if hud != last_hud {
            log::info!("[frame {frame}] {}", hud.lines().join(" | "));
            last_hud = hud;
        }
        if game.is_game_over() {
            break;
        }
    }

    let music = game.music();
    log::info!(
        "Final score {} (best {}), music {:?} (normal {:.2}, low {:.2})",
        game.score(),
        game.best_score(),
        music.mood(),
        music.mixer().volume(music.normal_loop()).unwrap_or_default(),
        music.mixer().volume(music.low_loop()).unwrap_or_default(),
    );
    Ok(())
}

/// Seed from the wall clock when tuning doesn't pin one
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Clicking the window grabs the pointer, as a player would
fn capture_pointer<M: Mixer>(game: &mut PlayMode<M>) {
    if game.handle_event(&InputEvent::MouseButtonDown) {
        log::debug!("Pointer captured");
    }
}

/// Turn toward the cheese, drive when roughly facing it
///
/// Emits key-down/key-up events for the difference between the keys it
/// wants held and the ones in `held`.
fn autopilot<M: Mixer>(game: &PlayMode<M>, held: &mut HashSet<Key>) -> Vec<InputEvent> {
    let boxy = game.boxy();
    let to_cheese = (game.cheese().position - boxy.position).truncate();
    let facing = boxy.forward().truncate().normalize_or_zero();

    let mut want = HashSet::new();
    let side = facing.perp_dot(to_cheese);
    if side > 0.05 {
        want.insert(Key::Left);
    } else if side < -0.05 {
        want.insert(Key::Right);
    }
    if facing.dot(to_cheese) > 0.0 {
        want.insert(Key::Up);
    }

    let mut events: Vec<InputEvent> = held
        .difference(&want)
        .map(|&key| InputEvent::KeyUp(key))
        .collect();
    events.extend(want.difference(held).map(|&key| InputEvent::KeyDown(key)));
    *held = want;
    events
}
