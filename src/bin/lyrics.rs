//! Lyrics presentation.
//!
//! Shows lyric lines one at a time with optional background music.
//!
//! Usage:
//!   cargo run --bin lyrics -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin lyrics                                   # Sample lyrics
//!   cargo run --bin lyrics -- --lyrics assets/lyrics.txt     # Your lyrics
//!   cargo run --features audio --bin lyrics -- --audio assets/song.mp3

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use roadcrash::build_info;
use roadcrash::core::constants::{DEFAULT_LYRICS_INTERVAL_SECONDS, DEFAULT_LYRICS_TITLE};
use roadcrash::lyrics::{LyricsOptions, LyricsPresentation};
use roadcrash::ui::render_lyrics;
use roadcrash::utils::{default_log_path, init_file_logging};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Redraw cadence; the reveal itself is driven by real elapsed time.
const FRAME: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(name = "lyrics")]
#[command(about = "Show lyrics one line at a time, with optional music")]
#[command(version, long_version = build_info::LONG_VERSION)]
struct Args {
    /// Text file with one lyric line per line
    #[arg(long, visible_alias = "lyrics")]
    lyrics_path: Option<PathBuf>,

    /// Music file played in the background (needs the `audio` feature)
    #[arg(long, visible_alias = "audio")]
    audio_path: Option<PathBuf>,

    /// Seconds between lines
    #[arg(
        long,
        visible_alias = "interval",
        default_value_t = DEFAULT_LYRICS_INTERVAL_SECONDS,
        value_parser = parse_interval
    )]
    interval_seconds: f64,

    /// Title shown on the terminal and the lyrics panel
    #[arg(long, visible_alias = "title", default_value = DEFAULT_LYRICS_TITLE)]
    window_title: String,

    /// Log file (default: ~/.roadcrash/lyrics.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_interval(s: &str) -> Result<f64, String> {
    let seconds: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(format!("interval must be a positive number of seconds, got {}", s))
    }
}

/// Keys that close the presentation.
fn is_close_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return true;
    }
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q')
    )
}

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> io::Result<()> {
    let args = Args::parse();

    let log_path = match args.log_file {
        Some(path) => Ok(path),
        None => default_log_path("lyrics"),
    };
    if let Err(e) = log_path.and_then(|path| init_file_logging(&path, tracing::Level::INFO)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let options = LyricsOptions {
        lyrics_path: args.lyrics_path,
        audio_path: args.audio_path,
        interval: Duration::from_secs_f64(args.interval_seconds),
        title: args.window_title,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(SetTitle(&options.title))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut presentation = LyricsPresentation::start(&options);

    let result = run(&mut terminal, &mut presentation);

    // Audio stops before the display is released.
    presentation.close();

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        shown = presentation.reveal.position(),
        total = presentation.reveal.len(),
        "lyrics closed"
    );
    result
}

fn run(terminal: &mut Term, presentation: &mut LyricsPresentation) -> io::Result<()> {
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        presentation.advance(now.duration_since(last).as_secs_f64());
        last = now;

        terminal.draw(|frame| {
            let area = frame.size();
            render_lyrics(frame, area, presentation);
        })?;

        if event::poll(FRAME)? {
            if let Event::Key(key_event) = event::read()? {
                if is_close_key(&key_event) {
                    return Ok(());
                }
            }
        }
    }
}
