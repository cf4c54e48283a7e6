use qsearch::api::{SearchBackend, SearchClient, SearchResultItem};
use qsearch::app::{App, Submission};
use qsearch::config::Config;
use qsearch::error::SearchResult;
use qsearch::query::{run_ticket, Ticket};
use qsearch::recent::{FileKeywordStore, KeywordStore, MemoryKeywordStore};
use qsearch::{logging, ui};

use anyhow::Result;
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tui_input::backend::crossterm::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is best-effort; the explorer still runs without a log file
    let log_path = logging::init();

    let config = Config::load()?;
    match &log_path {
        Ok(path) => info!(log = ?path, api = %config.api_url, "starting"),
        Err(e) => eprintln!("Logging disabled: {e:#}"),
    }

    let keywords: Box<dyn KeywordStore> =
        match FileKeywordStore::in_data_dir(config.max_recent_keywords) {
            Ok(store) => Box::new(store),
            Err(e) => {
                warn!("Recent keywords will not persist: {e}");
                Box::new(MemoryKeywordStore::new(config.max_recent_keywords))
            }
        };

    let client = SearchClient::new(&config.api_url, config.request_timeout())?
        .with_marketplace(config.marketplace_config_url.clone());

    run_tui(App::new(config, keywords), Arc::new(client)).await?;

    Ok(())
}

/// Messages from async tasks back to the main loop
enum AsyncMessage {
    SearchResult {
        seq: u64,
        result: SearchResult<Vec<SearchResultItem>>,
    },
}

/// The lookup currently running, if any
#[derive(Default)]
struct InFlight(Option<JoinHandle<()>>);

impl InFlight {
    /// Start `ticket`, cancelling the lookup it supersedes
    fn start(
        &mut self,
        backend: Arc<dyn SearchBackend>,
        ticket: Ticket,
        tx: mpsc::Sender<AsyncMessage>,
    ) {
        self.cancel();
        self.0 = Some(tokio::spawn(async move {
            let result = run_ticket(backend.as_ref(), &ticket).await;
            let _ = tx
                .send(AsyncMessage::SearchResult {
                    seq: ticket.seq,
                    result,
                })
                .await;
        }));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.abort();
        }
    }
}

async fn run_tui(mut app: App, backend: Arc<dyn SearchBackend>) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let (tx, mut rx) = mpsc::channel::<AsyncMessage>(10);

    let result = run_event_loop(&mut terminal, &mut app, backend, tx, &mut rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    backend: Arc<dyn SearchBackend>,
    tx: mpsc::Sender<AsyncMessage>,
    rx: &mut mpsc::Receiver<AsyncMessage>,
) -> Result<()> {
    let mut in_flight = InFlight::default();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Issue the debounced lookup once typing has paused
        if let Some(ticket) = app.tick(Instant::now()) {
            in_flight.start(backend.clone(), ticket, tx.clone());
        }

        // Check for async results
        while let Ok(msg) = rx.try_recv() {
            match msg {
                AsyncMessage::SearchResult { seq, result } => {
                    app.apply_response(seq, result);
                }
            }
        }

        // Poll for input events
        if event::poll(Duration::from_millis(50))? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global keys
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.toggle_color_mode();
                        if let Err(e) = app.config.save() {
                            warn!("Failed to save color mode: {e:#}");
                        }
                        continue;
                    }
                    _ => {}
                }

                if app.is_on_search() {
                    match key.code {
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Enter => match app.submit() {
                            Submission::Search(ticket) => {
                                in_flight.start(backend.clone(), ticket, tx.clone());
                            }
                            Submission::Navigate(_) => in_flight.cancel(),
                            Submission::Nothing => {}
                        },
                        KeyCode::Up => app.select_prev(),
                        KeyCode::Down => app.select_next(),
                        KeyCode::Tab => app.next_tab(),
                        KeyCode::BackTab => app.prev_tab(),
                        KeyCode::Delete if app.panel.cursor.is_some() => {
                            app.remove_selected_keyword();
                        }
                        _ => {
                            let before = app.search_input.value().to_string();
                            app.search_input.handle_event(&ev);
                            if app.search_input.value() != before {
                                app.on_input_changed(Instant::now());
                                if app.search_input.value().trim().is_empty() {
                                    in_flight.cancel();
                                }
                            }
                        }
                    }
                } else {
                    match key.code {
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Backspace | KeyCode::Char('b') => {
                            if let Some(ticket) = app.go_back() {
                                in_flight.start(backend.clone(), ticket, tx.clone());
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    in_flight.cancel();
    Ok(())
}
