use std::error::Error;
use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{GameConfig, PALETTE_DEFAULT};
use grid_snake::food::FoodSpawner;
use grid_snake::game::{GameEngine, GameStatus, TickOutcome};
use grid_snake::input::GameInput;
use grid_snake::random::SeededRandom;
use grid_snake::renderer::Scene;
use grid_snake::scheduler::{Countdown, FixedInterval};
use grid_snake::terminal_runtime::{TerminalSession, restore_terminal};
use grid_snake::ui::menu::Message;
use log::info;

/// Upper bound on how long one frame waits for input.
const FRAME_POLL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid snake in the terminal")]
struct Cli {
    /// JSON file with session settings; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in pixels.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in pixels.
    #[arg(long)]
    height: Option<u16>,

    /// Edge length of one cell in pixels.
    #[arg(long = "cell-size")]
    cell_size: Option<u16>,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn resolve_config(&self) -> Result<GameConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let grid = config.grid()?;
    let random = match config.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };
    let mut engine =
        GameEngine::with_spawner(grid, FoodSpawner::new(config.max_spawn_attempts), random);

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    run(&mut session, &mut engine, &config)?;
    Ok(())
}

fn run(
    session: &mut TerminalSession,
    engine: &mut GameEngine<SeededRandom>,
    config: &GameConfig,
) -> Result<(), Box<dyn Error>> {
    let countdown_step = Duration::from_millis(config.countdown_step_ms);
    let mut countdown = Countdown::new(config.countdown_steps, countdown_step, Instant::now());
    let mut ticker = FixedInterval::new(
        Duration::from_millis(config.tick_interval_ms),
        Instant::now(),
    );
    let mut snake = engine.snapshot();
    let mut food = engine.state().food.position;

    loop {
        let now = Instant::now();
        if engine.status() == GameStatus::Starting && countdown.is_finished(now) {
            engine.start_running()?;
            ticker.restart(now);
        }

        let message = match engine.status() {
            GameStatus::Starting => countdown.remaining(now).map(Message::Countdown),
            GameStatus::Running => None,
            GameStatus::GameOver => engine.state().death_reason.map(|cause| Message::GameOver {
                cause,
                score: engine.state().score,
            }),
        };

        session.draw(
            &Scene {
                grid: engine.grid(),
                snake: &snake,
                food,
                score: engine.state().score,
                message,
            },
            &PALETTE_DEFAULT,
        )?;

        match session.poll_input(FRAME_POLL)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Direction(direction)) => {
                let _ = engine.request_direction(direction);
            }
            Some(GameInput::Confirm) if engine.status() == GameStatus::GameOver => {
                engine.reset();
                countdown = Countdown::new(config.countdown_steps, countdown_step, Instant::now());
                snake = engine.snapshot();
                food = engine.state().food.position;
            }
            Some(GameInput::Confirm) | None => {}
        }

        if engine.status() == GameStatus::Running && ticker.poll(Instant::now()) {
            if let TickOutcome::Advanced {
                snake: body,
                food: food_cell,
                ..
            } = engine.tick(None)?
            {
                snake = body;
                food = food_cell;
            }
        }
    }

    info!(
        "quit after {} ticks with score {}",
        engine.state().tick_count,
        engine.state().score
    );
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
