use super::{profile, result, screening, Frame};
use crate::state::{State, View};
use ratatui::layout::Rect;

/// Render main widget according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    match state.current_view() {
        View::Screening => screening::screening(frame, size, state),
        View::Clear | View::NotClear | View::ProfileIncomplete => {
            result::result(frame, size, state)
        }
        View::ProfileEditor => profile::profile(frame, size, state),
    }
}
