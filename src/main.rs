mod app;
mod config;
mod domain;
mod input;
mod logging;
mod persistence;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{ArgAction, Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{FilterMode, SortMode, UuidGenerator};
use persistence::{
    config_file, ensure_dir, init_data_dir, init_local_data_dir, log_file, resolve_data_dir,
    FileStore, KeyValueStore, MemoryStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// How long to wait for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "tasklet", version)]
#[command(about = "A small terminal to-do list", long_about = None)]
struct Cli {
    /// Data directory (defaults to the nearest .tasklet, then ~/.tasklet)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Keep tasks in memory only; nothing is read or written
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tasklet directory in the current directory,
    /// or the directory given with --data
    Init,
    /// Print tasks, optionally filtered and sorted
    List {
        #[arg(short, long, value_enum, default_value_t = FilterMode::All)]
        filter: FilterMode,
        #[arg(short, long, value_enum, default_value_t = SortMode::None)]
        sort: SortMode,
    },
    /// Add a task without opening the UI
    Add {
        /// Task text; words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let data_dir = match cli.data {
            Some(dir) => {
                init_data_dir(&dir)?;
                dir
            }
            None => {
                let current_dir =
                    std::env::current_dir().context("Could not determine current directory")?;
                init_local_data_dir(&current_dir)?
            }
        };
        println!("Initialized data directory: {}", data_dir.display());
        println!();
        println!("Pass --data {} to use it from anywhere.", data_dir.display());
        return Ok(());
    }

    let data_dir = resolve_data_dir(cli.data, cli.ephemeral)?;
    if let (false, Some(dir)) = (cli.ephemeral, &data_dir) {
        ensure_dir(dir)?;
    }

    let config = match &data_dir {
        Some(dir) => config::load_config(config_file(dir))?,
        None => config::Config::default(),
    };
    let log_path = data_dir
        .as_deref()
        .filter(|_| !cli.ephemeral)
        .map(log_file);
    logging::init_tracing(log_path.as_deref(), &config.log.level, cli.verbose)?;

    let store: Box<dyn KeyValueStore> = match data_dir {
        Some(dir) if !cli.ephemeral => {
            info!(dir = %dir.display(), "using data directory");
            Box::new(FileStore::new(dir))
        }
        _ => {
            info!("ephemeral run, tasks stay in memory");
            Box::new(MemoryStore::new())
        }
    };

    let mut app = AppState::load(store, Box::new(UuidGenerator));
    app.use_ascii = config.ui.ascii;
    app.show_keybindings = config.ui.show_keybindings;

    match cli.command {
        Some(Commands::List { filter, sort }) => {
            app.set_filter(filter);
            app.set_sort(sort);
            for task in app.visible_tasks() {
                let mark = if task.completed { "x" } else { " " };
                println!("[{}] {}", mark, task.text);
            }
            Ok(())
        }
        Some(Commands::Add { text }) => {
            app.add_task(text.join(" "));
            Ok(())
        }
        Some(Commands::Init) | None => run_tui(&mut app),
    }
}

fn run_tui(app: &mut AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "terminal loop failed");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}
