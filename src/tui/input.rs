use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::summarizer::Precision;
use crate::tui::Action;

/// Map a crossterm terminal event to an application action.
pub fn map_event(event: &Event) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }
            map_key(key)
        }
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_key(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Char('o') => Action::OpenPicker,
        KeyCode::Char('s') => Action::Summarize,
        KeyCode::Char('p') => Action::CyclePrecision,
        KeyCode::Char('1') => Action::SetPrecision(Precision::Low),
        KeyCode::Char('2') => Action::SetPrecision(Precision::Medium),
        KeyCode::Char('3') => Action::SetPrecision(Precision::High),
        KeyCode::Char('m') => Action::CycleModel,
        _ => Action::None,
    }
}
