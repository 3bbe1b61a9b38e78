use crossterm::event::{KeyCode, KeyEvent};

use crate::terminal::state::{BoardState, Focus};

/// What the run loop should do after a key was handled. The two remote
/// operations bubble up so the loop can draw an in-progress frame before
/// the blocking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    FetchUnread,
    Summarize,
}

pub fn handle_key(key: KeyEvent, state: &mut BoardState) -> Action {
    match key.code {
        KeyCode::Char('q') => return Action::Quit,

        KeyCode::Esc => {
            if state.show_summary || state.opened.is_some() {
                state.close_pane();
                return Action::None;
            }
            return Action::Quit;
        }

        KeyCode::Enter => {
            // Only open on Enter
            state.open_selected();
            return Action::None;
        }

        KeyCode::Tab => {
            state.toggle_focus();
            return Action::None;
        }

        KeyCode::Char('r') => return Action::FetchUnread,
        KeyCode::Char('s') => return Action::Summarize,

        // Reopen the last summary without re-summarizing
        KeyCode::Char('S') => {
            state.open_summary();
            return Action::None;
        }

        _ => {}
    }

    match state.focus {
        Focus::List => handle_list_keys(key, state),
        Focus::Pane => handle_pane_keys(key, state),
    }
    Action::None
}

fn handle_list_keys(key: KeyEvent, state: &mut BoardState) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => state.move_selection(-1),
        KeyCode::Home => {
            if !state.emails.is_empty() {
                state.list_state.select(Some(0));
            }
        }
        KeyCode::End => {
            if !state.emails.is_empty() {
                state.list_state.select(Some(state.emails.len() - 1));
            }
        }
        _ => {}
    }
}

fn handle_pane_keys(key: KeyEvent, state: &mut BoardState) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.scroll_pane(1),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_pane(-1),
        KeyCode::PageDown => state.scroll_pane(10),
        KeyCode::PageUp => state.scroll_pane(-10),
        KeyCode::Home => state.pane_scroll = 0,
        _ => {}
    }
}
