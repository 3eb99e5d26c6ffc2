use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use stockdash::api::{DashboardClient, Symbol};
use stockdash::app::{view_state, App, ChartMode, Dispatcher, InputMode};
use stockdash::config::Config;
use stockdash::{logging, ui};
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "stockdash")]
#[command(about = "Terminal dashboard for stock price charts", long_about = None)]
struct Cli {
    /// Backend base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Lookback window in days
    #[arg(short, long)]
    days: Option<String>,

    /// Company to chart first
    #[arg(short, long)]
    symbol: Option<String>,

    /// Second company; starts in compare mode
    #[arg(short, long)]
    compare: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = match cli.log_file.clone() {
        Some(path) => path,
        None => logging::default_log_path()?,
    };
    logging::init(&log_path)?;

    let mut config = Config::load()?;
    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }
    let client = Arc::new(DashboardClient::new(&config.base_url)?);
    tracing::info!(base_url = %client.base_url(), "starting stockdash");

    let mut app = App::new(config);
    if let Some(days) = &cli.days {
        app.view.set_window_days(view_state::parse_window_days(days));
    }
    app.view.primary = cli.symbol.as_deref().and_then(Symbol::new);
    app.view.compare = cli.compare.as_deref().and_then(Symbol::new);
    if app.view.compare.is_some() {
        app.view.mode = ChartMode::Compare;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "stockdash exited with an error");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    client: Arc<DashboardClient>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(client, tx);

    app.begin_initial_load();
    dispatcher.spawn_symbol_load();

    loop {
        // Apply finished background work, then start whatever it queued
        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }
        for request in app.take_requests() {
            dispatcher.spawn_cycle(request);
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Short poll keeps the clock and async results flowing
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('?') => app.show_help(),
                KeyCode::Tab => app.focus_next(),
                KeyCode::BackTab => app.focus_prev(),
                KeyCode::Left | KeyCode::Char('h') => app.change_focused(false),
                KeyCode::Right | KeyCode::Char('l') => app.change_focused(true),
                KeyCode::Char('m') => app.toggle_mode(),
                KeyCode::Char('[') => app.step_range(false),
                KeyCode::Char(']') => app.step_range(true),
                KeyCode::Char('r') => app.refresh(),
                KeyCode::Char('s') => {
                    app.export_chart();
                }
                _ => {}
            },
            InputMode::Help => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
                _ => {}
            },
        }
    }
}
