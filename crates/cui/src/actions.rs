use crate::app::{App, Screen};
use crate::input::{InputAction, PointerInput};
use anyhow::Result;

pub fn dispatch(app: &mut App, action: InputAction) -> Result<()> {
    match (app.screen, action) {
        (_, InputAction::None) => {}
        (_, InputAction::Quit) => app.should_quit = true,
        (Screen::Title, InputAction::Confirm | InputAction::NewGame) => app.start_game()?,
        (Screen::Title, InputAction::ShowRules) => app.show_rules(),
        (Screen::Title, InputAction::Back) => app.should_quit = true,
        (Screen::Rules, InputAction::Back | InputAction::Confirm) => app.return_to_title(),
        (Screen::Table, InputAction::Back) => app.return_to_title(),
        (Screen::Table, InputAction::NewGame) => app.start_game()?,
        (Screen::Table, InputAction::Confirm) if app.is_game_over() => app.return_to_title(),
        (Screen::Table, InputAction::Confirm) => app.pick_at_cursor(),
        (Screen::Table, InputAction::CursorLeft) => app.move_cursor(false),
        (Screen::Table, InputAction::CursorRight) => app.move_cursor(true),
        (Screen::Table, InputAction::PickIndex(index)) => app.pick(index),
        (Screen::Table, InputAction::ToggleSpeed) => app.fast_forward = !app.fast_forward,
        _ => {}
    }
    Ok(())
}

pub fn dispatch_pointer(app: &mut App, input: PointerInput) {
    match input {
        PointerInput::Move { column, row } => app.on_pointer_move(column, row),
        PointerInput::Click { column, row } => app.on_pointer_click(column, row),
    }
}
