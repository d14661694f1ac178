//! Carflix - terminal client for a personal media server
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! carflix
//!
//! # CLI mode (for automation)
//! carflix shows --json
//! carflix show m1
//! carflix reload
//! ```

use std::io::{stdout, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use carflix::api::CatalogClient;
use carflix::app::{App, Effect, Msg};
use carflix::cli::{Cli, Command, ExitCode, Output};
use carflix::commands;
use carflix::config::Config;
use carflix::player::{LocalPlayer, PlayerType};
use carflix::route::Route;
use carflix::ui::{self, Theme};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let config = Config::load();
    let server = config.resolve_server(cli.server.as_deref());
    let client = Arc::new(CatalogClient::new(server));

    let player_type = config
        .player
        .as_deref()
        .and_then(PlayerType::from_name)
        .unwrap_or_default();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        run_cli(cli, &client).await.into()
    } else {
        // TUI mode: launch interactive interface
        match run_tui(client, player_type).await {
            Ok(()) => ExitCode::Success.into(),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::Error.into()
            }
        }
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, client: &CatalogClient) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Shows(cmd)) => commands::shows_cmd(cmd, client, &output).await,
        Some(Command::Show(cmd)) => commands::show_cmd(cmd, client, &output).await,
        Some(Command::Reload(cmd)) => commands::reload_cmd(cmd, client, &output).await,
        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(client: Arc<CatalogClient>, player_type: PlayerType) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new();

    let result = run_event_loop(&mut terminal, &mut app, client, player_type).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, applies async results, renders UI
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    client: Arc<CatalogClient>,
    player_type: PlayerType,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel::<Msg>();

    // Activate the initial route
    if let Some(effect) = app.start() {
        execute_effect(effect, &client, player_type, &tx);
    }

    while app.running {
        terminal.draw(|frame| render_ui(frame, app, client.base_url()))?;

        // Drain completed async work first so stale results never outlive
        // the activation check inside App::apply
        while let Ok(msg) = rx.try_recv() {
            if let Some(effect) = app.apply(msg) {
                execute_effect(effect, &client, player_type, &tx);
            }
        }

        // Poll for input with a timeout so channel drains keep happening
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    if let Some(effect) = app.handle_key(key) {
                        execute_effect(effect, &client, player_type, &tx);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Execute one side effect by spawning the matching async task
fn execute_effect(
    effect: Effect,
    client: &Arc<CatalogClient>,
    player_type: PlayerType,
    tx: &mpsc::UnboundedSender<Msg>,
) {
    match effect {
        Effect::FetchCatalog { generation } => {
            let client = Arc::clone(client);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client.list_shows().await;
                let _ = tx.send(Msg::Catalog { generation, result });
            });
        }
        Effect::FetchShow { generation, sid } => {
            let client = Arc::clone(client);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client.get_show(&sid).await;
                let _ = tx.send(Msg::Show { generation, result });
            });
        }
        Effect::Reload => {
            let client = Arc::clone(client);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client.trigger_reload().await;
                let _ = tx.send(Msg::ReloadFinished { result });
            });
        }
        Effect::Play { sid, vid } => {
            let url = client.video_url(&sid, &vid);
            let tx = tx.clone();
            tokio::spawn(async move {
                let player = LocalPlayer::new(player_type);
                if !player.is_available().await {
                    let _ = tx.send(Msg::PlayerExited {
                        result: Err(format!(
                            "{} not found. Install it first.",
                            player.player_type()
                        )),
                    });
                    return;
                }
                let result = player
                    .play_and_wait(&url)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Msg::PlayerExited { result });
            });
        }
        Effect::Quit => {}
    }
}

// =============================================================================
// UI Rendering
// =============================================================================

/// Main render function - dispatches to screen-specific renderers
fn render_ui(frame: &mut Frame, app: &mut App, base_url: &str) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(ratatui::style::Style::default().bg(Theme::BACKGROUND)),
        area,
    );

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_content(frame, chunks[1], app, base_url);
    render_status_bar(frame, chunks[2], app);
}

/// Render the header bar, shown alongside every screen
fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("CARFLIX", Theme::title()),
        Span::raw("   "),
        Span::styled("r", Theme::keybind()),
        Span::styled(" reload library", Theme::dimmed()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(header, area);
}

/// Render the main content area based on the current route
fn render_content(frame: &mut Frame, area: Rect, app: &mut App, base_url: &str) {
    match app.router.current().clone() {
        Route::Home => ui::catalog::render(frame, area, app, base_url),
        Route::Show { .. } => ui::detail::render(frame, area, app, base_url),
        Route::Watch { .. } => ui::player::render(frame, area, app, base_url),
        Route::NotFound { path } => ui::player::render_not_found(frame, area, &path),
    }
}

/// Render status bar at bottom
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let route_indicator = Span::styled(
        format!(" {} ", app.router.current().path()),
        ratatui::style::Style::default().fg(Theme::DIM),
    );

    let status = app
        .status
        .as_deref()
        .map(|msg| Span::styled(format!(" {} ", msg), Theme::accent()))
        .unwrap_or_else(|| Span::raw(""));

    let help = Span::styled(" q:quit  r:reload  ESC:back ", Theme::dimmed());

    let status_line = Line::from(vec![route_indicator, status, Span::raw(" | "), help]);

    let bar = Paragraph::new(status_line).style(Theme::status_bar());
    frame.render_widget(bar, area);
}
