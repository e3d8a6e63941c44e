// crates/ticket-tui/src/main.rs

use anyhow::{anyhow, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};
use ticket_core::Side;
use tracing::info;

use ticket_tui::app::{App, InputMode};
use ticket_tui::config::TicketConfig;
use ticket_tui::i18n::{Catalog, Locale};
use ticket_tui::ui;

#[derive(Parser)]
#[clap(name = "ticket-tui")]
#[clap(about = "Order ticket terminal: enter and submit orders against a configured market")]
struct Cli {
    /// Side of the ticket: "buy" or "sell"
    #[clap(short, long, default_value = "buy")]
    side: String,

    /// Path to the TOML config supplying market, balances and the
    /// anonymous flag (defaults are used if the file is missing)
    #[clap(short, long, default_value = "ticket.toml")]
    config: PathBuf,

    /// Message catalog locale ("en" or "es")
    #[clap(short, long, default_value = "en")]
    locale: String,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "ticket_tui=debug,ticket_core=debug".into()),
            )
            .init();
    }

    let side = Side::from_str_opt(&cli.side)
        .ok_or_else(|| anyhow!("invalid side {:?}: expected \"buy\" or \"sell\"", cli.side))?;
    let locale = Locale::from_tag(&cli.locale)
        .ok_or_else(|| anyhow!("unsupported locale {:?}", cli.locale))?;

    let config = TicketConfig::load(&cli.config)?;
    info!(
        market = format!("{}/{}", config.market.base_unit, config.market.quote_unit),
        anonymous = config.anonymous,
        "config loaded"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config.store_view(side), Catalog::new(locale));
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match app.input_mode {
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Tab => {
                            app.next_focus();
                        }
                        KeyCode::BackTab => {
                            app.prev_focus();
                        }

                        // Order type selector
                        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                            app.toggle_order_type();
                        }
                        KeyCode::Char('c') | KeyCode::Char('C') => {
                            app.clear_order_type();
                        }

                        // Text fields
                        KeyCode::Char('e') | KeyCode::Char('E') => {
                            app.start_editing();
                        }

                        // Quick-amount buttons
                        KeyCode::Char('1') => app.quick_amount(0.25),
                        KeyCode::Char('2') => app.quick_amount(0.5),
                        KeyCode::Char('3') => app.quick_amount(0.75),
                        KeyCode::Char('4') => app.quick_amount(1.0),

                        KeyCode::Enter => {
                            app.submit();
                        }

                        KeyCode::F(1) => {
                            app.toggle_help();
                        }

                        _ => {}
                    },

                    InputMode::Editing => match key.code {
                        KeyCode::Enter => {
                            app.stop_editing();
                            app.submit();
                        }
                        KeyCode::Esc => {
                            app.stop_editing();
                        }
                        KeyCode::Backspace => {
                            app.delete_char();
                        }
                        KeyCode::Char(c) => {
                            app.enter_char(c);
                        }
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
