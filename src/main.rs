// sortscope: step-by-step sorting algorithm visualizer

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use sortscope::config::Config;
use sortscope::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program_name = std::env::args()
        .next()
        .unwrap_or_else(|| "sortscope".to_string());

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprint!("{}", Config::help_text(&program_name));
            std::process::exit(1);
        }
    };

    if config.show_help {
        print!("{}", Config::help_text(&program_name));
        return Ok(());
    }

    // Logs go to a file only; stderr belongs to the alternate screen while the TUI runs
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }

    tracing::info!(
        algorithm = config.algorithm.id(),
        size = config.size,
        speed = config.speed.value(),
        seed = ?config.seed,
        "starting"
    );

    let mut app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
