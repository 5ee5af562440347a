use clap::Parser;
use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use roadcrash::build_info;
use roadcrash::core::{FrameClock, GameConfig, GameLoop, KEY_HOLD_WINDOW_MS};
use roadcrash::crash::CrashDispatcher;
use roadcrash::input::InputState;
use roadcrash::ui::render_road;
use roadcrash::utils::{default_assets_dir, default_log_path, init_file_logging};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "roadcrash")]
#[command(about = "Dodge the traffic. Crash and the video plays.")]
#[command(version, long_version = build_info::LONG_VERSION)]
struct Args {
    /// Directory holding the crash video (default: assets/ beside the program)
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// JSON file overriding game tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (default: ~/.roadcrash/roadcrash.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Configuration errors are reported before the terminal is touched.
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let log_path = match args.log_file {
        Some(path) => Ok(path),
        None => default_log_path("roadcrash"),
    };
    if let Err(e) = log_path.and_then(|path| init_file_logging(&path, tracing::Level::INFO)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let assets_dir = args.assets_dir.unwrap_or_else(default_assets_dir);
    tracing::info!(
        version = build_info::LONG_VERSION,
        assets_dir = %assets_dir.display(),
        screen = ?(config.screen_width, config.screen_height),
        fps = config.target_fps,
        "session start"
    );

    let mut game_loop = GameLoop::new(&config, CrashDispatcher::system(assets_dir));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game_loop, &config, enhanced);

    // Restore terminal
    if enhanced {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => tracing::info!(score = game_loop.game().display_score(), "session end"),
        Err(e) => tracing::error!(error = %e, "session aborted"),
    }
    result
}

/// Main game loop: input, tick, render at the configured frame rate.
fn run(
    terminal: &mut Term,
    game_loop: &mut GameLoop,
    config: &GameConfig,
    enhanced: bool,
) -> io::Result<()> {
    let mut clock = FrameClock::new(config.frame_duration());
    let mut input = InputState::new(enhanced, Duration::from_millis(KEY_HOLD_WINDOW_MS));
    let mut rng = rand::thread_rng();

    loop {
        // Poll for input until the next frame is due
        if event::poll(clock.remaining())? {
            if let Event::Key(key_event) = event::read()? {
                input.handle_key(&key_event, Instant::now());
            }
            if !clock.is_due() {
                continue;
            }
        }

        let dt = clock.tick();
        let result = game_loop.tick(&input.take(Instant::now()), dt, &mut rng);
        if result.quit {
            break;
        }

        let elapsed = clock.elapsed().as_secs_f64();
        terminal.draw(|frame| {
            let area = frame.size();
            render_road(frame, area, &game_loop.snapshot(), config, elapsed);
        })?;
    }

    Ok(())
}
