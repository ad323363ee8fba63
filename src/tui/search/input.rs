//! Key-to-message mapping for the search view.

use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::SearchMsg;

/// Which part of the view receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the result list.
    Browsing,
    /// Typing into the search field.
    Editing,
}

/// Maps a key event to a search message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
/// `Ctrl+C` quits from either context.
#[must_use]
pub fn map_key_to_message(key: &KeyMsg, context: InputContext) -> Option<SearchMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.key == KeyCode::Char('c') {
        return Some(SearchMsg::Quit);
    }

    match context {
        InputContext::Browsing => map_browsing_key(key.key),
        InputContext::Editing => map_editing_key(key.key),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_browsing_key(code: KeyCode) -> Option<SearchMsg> {
    match code {
        KeyCode::Char('q') => Some(SearchMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(SearchMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(SearchMsg::CursorUp),
        KeyCode::Home | KeyCode::Char('g') => Some(SearchMsg::CursorHome),
        KeyCode::End | KeyCode::Char('G') => Some(SearchMsg::CursorEnd),
        KeyCode::Char('n') | KeyCode::Right => Some(SearchMsg::NextPage),
        KeyCode::Char('p') | KeyCode::Left => Some(SearchMsg::PreviousPage),
        KeyCode::Char('c') => Some(SearchMsg::CycleCategory),
        KeyCode::Char('/') => Some(SearchMsg::StartEditing),
        KeyCode::Char('r') => Some(SearchMsg::Reload),
        KeyCode::Char('?') => Some(SearchMsg::ToggleHelp),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_editing_key(code: KeyCode) -> Option<SearchMsg> {
    match code {
        KeyCode::Enter => Some(SearchMsg::SubmitSearch),
        KeyCode::Esc => Some(SearchMsg::CancelEditing),
        KeyCode::Backspace => Some(SearchMsg::Backspace),
        KeyCode::Char(character) => Some(SearchMsg::InputChar(character)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[rstest]
    #[case(KeyCode::Char('n'), Some("NextPage"))]
    #[case(KeyCode::Right, Some("NextPage"))]
    #[case(KeyCode::Char('p'), Some("PreviousPage"))]
    #[case(KeyCode::Char('c'), Some("CycleCategory"))]
    #[case(KeyCode::Char('/'), Some("StartEditing"))]
    #[case(KeyCode::Char('x'), None)]
    fn browsing_keys(#[case] code: KeyCode, #[case] expected: Option<&str>) {
        let mapped = map_key_to_message(&key(code), InputContext::Browsing);

        assert_eq!(mapped.map(|msg| format!("{msg:?}")).as_deref(), expected);
    }

    #[rstest]
    fn letters_are_typed_while_editing() {
        let mapped = map_key_to_message(&key(KeyCode::Char('q')), InputContext::Editing);

        assert!(matches!(mapped, Some(SearchMsg::InputChar('q'))));
    }

    #[rstest]
    #[case(KeyCode::Enter, "SubmitSearch")]
    #[case(KeyCode::Esc, "CancelEditing")]
    #[case(KeyCode::Backspace, "Backspace")]
    fn editing_controls(#[case] code: KeyCode, #[case] expected: &str) {
        let mapped = map_key_to_message(&key(code), InputContext::Editing);

        assert_eq!(mapped.map(|msg| format!("{msg:?}")).as_deref(), Some(expected));
    }

    #[rstest]
    #[case(InputContext::Browsing)]
    #[case(InputContext::Editing)]
    fn ctrl_c_quits_everywhere(#[case] context: InputContext) {
        let ctrl_c = KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };

        assert!(matches!(
            map_key_to_message(&ctrl_c, context),
            Some(SearchMsg::Quit)
        ));
    }
}
