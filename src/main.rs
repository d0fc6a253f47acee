//! sidediff - side-by-side text comparison
//!
//! Binary entry point for the TUI application and the `--print` report mode.

use std::io::stdout;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use color_eyre::eyre::{WrapErr, bail};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use sidediff::app::App;
use sidediff::config::{Config, Settings};
use sidediff::engine::{compute_diff_with, report::render_report};
use sidediff::{document, logging, text};

const USAGE: &str = "usage: sidediff [LEFT RIGHT] | sidediff --print LEFT RIGHT";

/// Command line mode
enum Mode {
    /// Interactive editor, optionally preloaded
    Interactive(Option<(PathBuf, PathBuf)>),
    /// Print the plain report and exit
    Print(PathBuf, PathBuf),
}

fn parse_args(args: &[String]) -> color_eyre::Result<Mode> {
    match args {
        [] => Ok(Mode::Interactive(None)),
        [flag, left, right] if flag == "--print" => {
            Ok(Mode::Print(PathBuf::from(left), PathBuf::from(right)))
        }
        [left, right] if !left.starts_with("--") => Ok(Mode::Interactive(Some((
            PathBuf::from(left),
            PathBuf::from(right),
        )))),
        _ => bail!(USAGE),
    }
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = parse_args(&args)?;

    let settings = Config::load_or_default().settings;
    if let Err(e) = logging::init(&settings) {
        eprintln!("sidediff: logging disabled: {e}");
    }

    match mode {
        Mode::Print(left, right) => print_report(&settings, &left, &right),
        Mode::Interactive(files) => {
            let mut app = App::new(settings);
            if let Some((left, right)) = files {
                let left_text = document::read_text(&left)?;
                let right_text = document::read_text(&right)?;
                app.load_texts(&left_text, &right_text);
            }

            let terminal = ratatui::init();
            let result = run(terminal, app);
            ratatui::restore();
            result.map(|()| ExitCode::SUCCESS)
        }
    }
}

/// Compare two files and print the report; exit status 1 when they differ
fn print_report(
    settings: &Settings,
    left: &Path,
    right: &Path,
) -> color_eyre::Result<ExitCode> {
    let left_text = document::read_text(left)?;
    let right_text = document::read_text(right)?;
    let left_text = text::normalize_line_endings(&left_text);
    let right_text = text::normalize_line_endings(&right_text);
    let left_lines = text::split_lines(&left_text);
    let right_lines = text::split_lines(&right_text);

    let result = compute_diff_with(&left_lines, &right_lines, settings.algorithm);
    println!(
        "{}",
        render_report(
            &result,
            &left_lines,
            &right_lines,
            &left.display().to_string(),
            &right.display().to_string(),
        )
    );

    Ok(if result.is_identical() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    execute!(stdout(), EnableBracketedPaste).wrap_err("Failed to enable bracketed paste")?;
    let _paste_guard = scopeguard::guard((), |_| {
        if let Err(e) = execute!(stdout(), DisableBracketedPaste) {
            warn!(error = %e, "failed to disable bracketed paste");
        }
    });

    info!("started");
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }
    info!("stopped");

    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a timeout bounded by the pending comparison deadline. When no
/// event arrives within the timeout, idle processing fires the comparison
/// and drops expired notifications.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(app.poll_timeout(Instant::now()))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            Event::Paste(pasted) => app.on_paste(&pasted),
            _ => {}
        }
    }
    app.tick(Instant::now());
    Ok(())
}
