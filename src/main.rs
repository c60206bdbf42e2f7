mod app;
mod domain;
mod input;
mod persistence;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::TaskStore;
use persistence::{
    atomic_write, board_file, ensure_lanes_dir, get_lanes_dir, import_file, init_local_lanes,
    load_metadata, meta_file, parse_board, read_file, serialize_board,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lanes")]
#[command(about = "A small terminal kanban board with flat-file persistence", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .lanes directory in the current directory
    Init,
    /// Bulk-import tasks from a delimited text file (title, comment?, status?, end_date?)
    Import {
        /// Path to the file to import
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let lanes_dir = init_local_lanes()?;
            println!("Initialized lanes directory: {}", lanes_dir.display());
            println!();
            println!("Lanes will now use this local directory for board storage.");
            println!("Run 'lanes' to open the board.");
            Ok(())
        }
        Some(Commands::Import { file }) => {
            let mut store = load_store()?;
            let summary = import_file(&mut store, &file)?;

            if store.is_dirty() {
                let content = serialize_board(store.tasks());
                atomic_write(board_file()?, &content)?;
                store.mark_clean();
            }

            println!(
                "Imported {} task(s), rejected {} row(s).",
                summary.added, summary.rejected
            );
            Ok(())
        }
        None => run_tui(),
    }
}

/// Load the full board from the persisted file (empty board if absent)
fn load_store() -> Result<TaskStore> {
    ensure_lanes_dir()?;
    let content = read_file(board_file()?)?;
    let tasks = parse_board(&content)?;
    Ok(TaskStore::from_tasks(tasks))
}

fn run_tui() -> Result<()> {
    let lanes_dir = get_lanes_dir()?;
    eprintln!("Using lanes directory: {}", lanes_dir.display());

    let store = load_store()?;
    let metadata = load_metadata(meta_file()?).unwrap_or_default();
    let mut app = AppState::new(store, metadata);

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

    // Save on exit
    if let Err(e) = app.save() {
        eprintln!("Error saving board: {}", e);
    }
    if let Err(e) = app.save_metadata() {
        eprintln!("Error saving metadata: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Block until the next key; there is no background work to tick
        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind == KeyEventKind::Press {
                let should_quit = input::handle_key(app, key)?;
                if should_quit {
                    return Ok(());
                }
            }
        }

        // Persist after every mutation; a failed write is reported in the
        // status line and retried after the next mutation
        if app.store.is_dirty() {
            if let Err(e) = app.save() {
                app.report(format!("Save failed: {}", e));
            }
        }
    }
}
