//! Terminal runner (default binary).
//!
//! One loop iteration is one logic tick: key events arriving during the tick
//! are collected into a `FrameInput`, the engine is updated once, and the
//! resulting snapshot is drawn through the framebuffer renderer.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::LevelFilter;

use blockfall::core::{GameConfig, GameSnapshot, GameState};
use blockfall::input::{should_quit, InputCollector};
use blockfall::logging::init_log;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, TICK_MS};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Fixed seed for the piece sequence. Without it every game is seeded
    /// from the clock.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Playfield width in cells (at least 4).
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u8,
    /// Playfield height in cells (at least 4).
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u8,
    /// Write a log to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
    /// Enable the debug keys (T, W, A, S, D).
    #[arg(long)]
    debug_controls: bool,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed,
            debug_controls: self.debug_controls,
            ..GameConfig::default().with_size(self.width, self.height)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_log(args.log_level, path)?;
    }

    let game = GameState::new(args.game_config()).context("invalid game configuration")?;

    // The renderer restores the terminal on drop, but a panic message printed
    // before that would land on the alternate screen.
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::ExecutableCommand::execute(
            &mut io::stderr(),
            crossterm::terminal::LeaveAlternateScreen,
        );
        let _ = crossterm::ExecutableCommand::execute(&mut io::stderr(), crossterm::cursor::Show);
        log::error!("panic: {panic_info}");
        eprint!("{panic_info}\n\n");
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut collector = InputCollector::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        // Input until the tick is due.
        let deadline = last_tick + tick_duration;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout).context("poll terminal events")? {
                break;
            }
            match event::read().context("read terminal event")? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!("quit requested");
                        game.shutdown();
                        return Ok(());
                    }
                    collector.push_key(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f32();
        last_tick = now;

        let input = collector.take_frame();
        game.update(&input, dt);
        if let Some(outcome) = game.take_last_event() {
            log::trace!("lock: {outcome:?}");
        }

        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
