mod app;
mod clock;
mod config;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use clock::{Clock, SystemClock};
use config::{load_config, save_config, Config};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::stats::Stats;
use persistence::{config_file, ensure_data_dir, init_local_data_dir, logs_dir, FileStorage, Store};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "flowguard")]
#[command(about = "Tasks, a focus timer and a mood log in one terminal dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .flowguard directory in the current directory
    Init,
    /// Print completed tasks, focus sessions and average mood
    Stats,
    /// Erase all tasks, focus sessions and moods
    Purge {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_data_dir()?;
            save_config(config_file(&data_dir), &Config::default())?;
            println!("Initialized flowguard directory: {}", data_dir.display());
            println!();
            println!("FlowGuard will now keep its data in this local directory.");
            println!("Run 'flowguard' to open the dashboard.");
            Ok(())
        }
        Some(Commands::Stats) => {
            let (data_dir, config) = open_data_dir()?;
            let store = Store::load(Box::new(FileStorage::new(&data_dir)));
            let stats = Stats::compute(store.records(), SystemClock.now_ms(), config.stale_after_days);

            println!("Data directory:  {}", data_dir.display());
            println!("Completed tasks: {}", stats.completed_count);
            println!("Focus sessions:  {}", stats.focus_sessions);
            println!("Average mood:    {}", stats.mood_display());
            if stats.stale {
                println!();
                println!(
                    "No new tasks or moods in {} or more days.",
                    config.stale_after_days
                );
            }
            Ok(())
        }
        Some(Commands::Purge { yes }) => {
            let (data_dir, _) = open_data_dir()?;
            if !yes && !confirm("Clear all saved FlowGuard data? [y/N] ")? {
                println!("Nothing was changed.");
                return Ok(());
            }

            let mut store = Store::load(Box::new(FileStorage::new(&data_dir)));
            store.purge().context("Failed to purge data")?;
            info!(data_dir = %data_dir.display(), "purged from command line");
            println!("All FlowGuard data cleared.");
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

/// Create the data directory if needed, load config and start file logging
fn open_data_dir() -> Result<(PathBuf, Config)> {
    let data_dir = ensure_data_dir()?;
    let config = load_config(config_file(&data_dir))?;
    logging::init(&logs_dir(&data_dir), &config.log_level)?;
    Ok((data_dir, config))
}

/// Ask a yes/no question on stdin; anything but y/yes is no
fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn run_tui() -> Result<()> {
    let (data_dir, config) = open_data_dir()?;

    // Show which directory we're using
    eprintln!("Using flowguard directory: {}", data_dir.display());
    info!(data_dir = %data_dir.display(), "starting");

    let store = Store::load(Box::new(FileStorage::new(&data_dir)));
    let mut app = AppState::new(store, config, Box::new(SystemClock));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = &result {
        error!(error = %err, "event loop stopped");
        eprintln!("Error: {:#}", err);
    }

    info!("exiting");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(ticker::poll_timeout(app.timer.is_running()))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Drive the focus countdown
        app.tick()?;
    }
}
