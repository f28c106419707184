//! Driftwood - a personal blog that lives in your terminal
//!
//! Full-viewport sections (home, music, photos, games) navigated one at a
//! time, with a particle background, cyclable themes, music cards, and a
//! photo lightbox.

use anyhow::Result;
use clap::{Parser, Subcommand};

use driftwood_core::content::Catalog;
use driftwood_core::mood::MOODS;
use driftwood_core::paths;

mod tui;

/// Driftwood - a terminal personal blog
#[derive(Parser)]
#[command(name = "driftwood")]
#[command(about = "A personal blog that lives in your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme name (overrides the saved preference for this run)
    #[arg(short, long)]
    theme: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available themes
    Themes,

    /// Show the mood rotation
    Moods,

    /// Print the resolved content catalog as TOML
    Catalog,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Initialize logging to file (not stdout/stderr which would mess up TUI)
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = std::fs::File::create(log_dir.join("driftwood.log"))
        .unwrap_or_else(|_| std::fs::File::create(null_device).unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for (name, theme) in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(Commands::Moods) => {
            println!("Mood rotation (by weekday):");
            for mood in MOODS {
                println!("  {:<12} {}", mood.genre.label(), mood.description);
            }
        }
        Some(Commands::Catalog) => {
            let catalog = Catalog::load_or_default(&paths::catalog_path())?;
            print!("{}", toml::to_string_pretty(&catalog)?);
        }
        None => {
            let mut app = tui::App::new(cli.theme.as_deref())?;
            app.run().await?;
        }
    }

    Ok(())
}
