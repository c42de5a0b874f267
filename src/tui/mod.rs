pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::location::{request_location, AddressLookup, LocateOutcome};

use self::app::{Effect, TuiApp};
use self::event::{AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut tui_app = TuiApp::new(ctx.new_store());
    let event_handler = EventHandler::new(Duration::from_millis(100));

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app, &ctx.config.colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                if tui_app.handle_key(key, &ctx.config.keybindings) == Effect::Locate {
                    locate(&mut tui_app, &ctx).await;
                }
            }
            AppEvent::Tick => tui_app.on_tick(),
        }

        if tui_app.should_quit {
            break;
        }
    }

    // Dropping the app cancels any lookup still in flight.
    drop(tui_app);
    Ok(())
}

async fn locate(tui_app: &mut TuiApp, ctx: &AppContext) {
    if tui_app.is_looking_up() {
        tui_app.set_status("Address lookup already in progress");
        return;
    }

    let outcome = request_location(ctx.location.as_ref(), &mut tui_app.location.permission).await;
    match outcome {
        Ok(LocateOutcome::Located(coordinate)) => {
            tui_app.location.update_location(coordinate);
            match &ctx.resolver {
                Some(resolver) => {
                    tui_app.lookup = Some(AddressLookup::spawn(resolver.clone(), coordinate));
                    tui_app.set_status(format!("Looking up address for {}...", coordinate));
                }
                None => tui_app.set_status(format!(
                    "Located at {}; set geocoding.api_key to look up addresses",
                    coordinate
                )),
            }
        }
        Ok(LocateOutcome::Denied { advisory, .. }) => tui_app.set_status(advisory),
        Err(e) => {
            tracing::warn!("Could not get current location: {}", e);
            tui_app.set_status(format!("Could not get current location: {}", e));
        }
    }
}
