//! Terminal lifecycle, event loop, and output for the select-tui picker.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use select_tui::app::{App, Pick};
use select_tui::config::PickerConfig;
use select_tui::events::{key_to_event, mouse_to_event, TICK_RATE};
use select_tui::ui::{self, LayoutRegions};

type PickerTerminal = Terminal<CrosstermBackend<io::Stderr>>;

fn main() -> Result<ExitCode> {
    // Logs go to stderr; RUST_LOG controls the filter.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("select_tui=warn".parse()?))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = PickerConfig::parse();
    let items = config.load_items()?;
    if items.is_empty() {
        bail!("no items to select from");
    }
    info!(items = items.len(), "starting picker");

    // The UI draws on stderr so stdout carries only the picks.
    enable_raw_mode().context("enabling raw mode")?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stderr))?;
    terminal.show_cursor()?;

    let mut app = App::new(items, &config);
    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = terminal.show_cursor();

    result?;
    if app.cancelled {
        return Ok(ExitCode::FAILURE);
    }
    print_picks(&app.picks, config.json)?;
    Ok(ExitCode::SUCCESS)
}

fn run_loop(terminal: &mut PickerTerminal, app: &mut App) -> Result<()> {
    let mut regions = LayoutRegions::default();
    loop {
        if app.should_quit {
            return Ok(());
        }

        terminal.draw(|frame| regions = ui::render(frame, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        let picker_event = match event::read()? {
            Event::Key(key) => key_to_event(&key, app.select.query()),
            Event::Mouse(mouse) => {
                let rows = regions.list.height as usize;
                let top = app.list_top(rows);
                let shown = if app.select.is_open() {
                    app.select.state().filtered_indices.len().saturating_sub(top).min(rows)
                } else {
                    0
                };
                mouse_to_event(&mouse, regions.input, regions.list, top, shown)
            }
            _ => None,
        };
        if let Some(e) = picker_event {
            app.dispatch(e);
        }
    }
}

fn print_picks(picks: &[Pick], json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    for pick in picks {
        if json {
            writeln!(out, "{}", serde_json::to_string(pick)?)?;
        } else {
            writeln!(out, "{}", pick.item)?;
        }
    }
    out.flush().context("writing picks")
}
