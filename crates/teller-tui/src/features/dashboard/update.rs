//! Dashboard feature reducer.

use crossterm::event::{KeyCode, KeyEvent};

use crate::effects::UiEffect;
use crate::state::{AppState, View};

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('t') => {
            app.view = View::Transfer;
            vec![]
        }
        KeyCode::Char('l') => {
            app.log_out();
            vec![]
        }
        KeyCode::Char('q') => vec![UiEffect::Quit],
        _ => vec![],
    }
}
