//! Satsboard - a terminal-based Bitcoin analytics dashboard.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use satsboard::app::{App, Section};
use satsboard::ui;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "satsboard", version)]
#[command(about = "A terminal-based Bitcoin analytics dashboard", long_about = None)]
struct Args {
    /// Section to open first (overview, price, network, timeline,
    /// adoption, holdings, mining, markets)
    section: Option<String>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Satsboard");
    }

    let section = match &args.section {
        Some(name) => match Section::from_name(name) {
            Some(section) => section,
            None => {
                eprintln!(
                    "Error: Unknown section '{}'. Valid sections: {}",
                    name,
                    Section::ALL
                        .iter()
                        .map(|s| s.name().to_lowercase())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                std::process::exit(1);
            },
        },
        None => Section::Overview,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(section);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Satsboard exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::NONE, KeyCode::Esc) => {
                        return Ok(())
                    },

                    // Section switching
                    (KeyModifiers::NONE, KeyCode::Tab) => app.next_section(),
                    (KeyModifiers::SHIFT, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::BackTab) => {
                        app.prev_section()
                    },
                    (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='8')) => {
                        let index = c as usize - '1' as usize;
                        app.goto_section(Section::ALL[index]);
                    },

                    // Data point cursor
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h'))
                    | (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.cursor_prev();
                    },
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l'))
                    | (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.cursor_next();
                    },

                    // Vim navigation
                    (KeyModifiers::NONE, KeyCode::Char('g')) => {
                        if pending_g {
                            app.cursor_first();
                            pending_g = false;
                        } else {
                            pending_g = true;
                        }
                        continue;
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                        app.cursor_last();
                    },

                    // Features
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        app.copy_section();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status = "Help: q=quit, Tab/1-8=section, h/l=data point, gg/G=first/last, y=copy section, T=theme".to_string();
                    },

                    _ => {},
                }
                pending_g = false;
            }
        }
    }
}
