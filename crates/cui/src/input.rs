use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    Back,
    Confirm,
    ShowRules,
    NewGame,
    CursorLeft,
    CursorRight,
    PickIndex(usize),
    ToggleSpeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Move { column: u16, row: u16 },
    Click { column: u16, row: u16 },
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Esc | KeyCode::Char('t') => InputAction::Back,
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::Confirm,
        KeyCode::Char('r') | KeyCode::Char('?') => InputAction::ShowRules,
        KeyCode::Char('n') => InputAction::NewGame,
        KeyCode::Left | KeyCode::Char('h') => InputAction::CursorLeft,
        KeyCode::Right | KeyCode::Char('l') => InputAction::CursorRight,
        KeyCode::Char('f') => InputAction::ToggleSpeed,
        KeyCode::Char(digit @ '1'..='9') => {
            InputAction::PickIndex(digit as usize - '1' as usize)
        }
        _ => InputAction::None,
    }
}

pub fn map_mouse(event: MouseEvent) -> Option<PointerInput> {
    let (column, row) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PointerInput::Move { column, row }),
        MouseEventKind::Down(MouseButton::Left) => Some(PointerInput::Click { column, row }),
        _ => None,
    }
}
