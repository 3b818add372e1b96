use std::io;

use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::app::actions::{Action, SideEffect};
use crate::app::state::AppState;
use crate::app::update::update;
use crate::app::view;
use crate::format::format_relative_time;
use crate::live::{LiveElement, LiveUpdater, TextElement, read_target};
use crate::util::config::WatchTarget;
use crate::util::time::Clock;

/// Shown for rows whose timestamp cannot be read.
pub const PLACEHOLDER: &str = "-";

pub async fn run(targets: Vec<WatchTarget>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, targets).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    targets: Vec<WatchTarget>,
) -> Result<()> {
    let mut state = AppState::new(targets);
    let mut updater: LiveUpdater<TextElement> = LiveUpdater::default();

    let now = updater.clock().now();
    mount(&mut updater, &state.targets, &now);
    update(&mut state, Action::Refreshed(now));

    let mut event_stream = crossterm::event::EventStream::new();

    loop {
        terminal.draw(|f| view::render(f, &state, &updater))?;

        if state.should_quit {
            break;
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event
                    && let Some(action) = map_event_to_action(&event) {
                        let effects = update(&mut state, action);
                        for effect in effects {
                            apply_side_effect(effect, &mut state, &mut updater);
                        }
                    }
            }
            _ = updater.next_tick() => {
                updater.tick();
                let now = updater.clock().now();
                update(&mut state, Action::Refreshed(now));
            }
        }
    }

    updater.teardown();
    Ok(())
}

/// Register one element per target, with its initial text rendered against `now`.
pub fn mount<C: Clock>(
    updater: &mut LiveUpdater<TextElement, C>,
    targets: &[WatchTarget],
    now: &DateTime<Utc>,
) {
    for target in targets {
        let mut element = TextElement::new(target.label.clone(), Some(target.at.clone()));
        match read_target(&element) {
            Ok(at) => element.set_text(&format_relative_time(&at, now)),
            Err(e) => {
                debug!(label = %target.label, error = %e, "Target not renderable yet");
                element.set_text(PLACEHOLDER);
            }
        }
        updater.register(element);
    }
    info!(count = targets.len(), "Watch targets mounted");
}

fn apply_side_effect<C: Clock>(
    effect: SideEffect,
    state: &mut AppState,
    updater: &mut LiveUpdater<TextElement, C>,
) {
    match effect {
        SideEffect::Reinitialize => {
            updater.teardown();
            let now = updater.clock().now();
            mount(updater, &state.targets, &now);
            update(state, Action::Refreshed(now));
            debug!(generation = state.generation, "Watch view re-initialized");
        }
    }
}

fn map_event_to_action(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('r') => Some(Action::Reload),
        _ => None,
    }
}
