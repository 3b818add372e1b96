use crate::app::actions::{Action, SideEffect};
use crate::app::state::AppState;

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::MoveUp => {
            if state.cursor > 0 {
                state.cursor -= 1;
            }
            vec![]
        }
        Action::MoveDown => {
            if state.cursor + 1 < state.targets.len() {
                state.cursor += 1;
            }
            vec![]
        }
        Action::Reload => {
            state.generation += 1;
            vec![SideEffect::Reinitialize]
        }
        Action::Refreshed(at) => {
            state.last_refresh = Some(at);
            vec![]
        }
    }
}
