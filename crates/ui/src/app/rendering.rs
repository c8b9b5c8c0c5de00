use crate::components::{Composer, Dialog, Header, KeyHints, LogView, ModelBar, StatusBar};
use crate::layout::TuiLayout;
use crate::state::AppState;
use crate::theme::Theme;

use ratatui::{Frame, widgets::Block};

/// Draw one frame
///
/// Takes the state mutably only to record the log viewport so scrolling
/// can be clamped between frames.
pub fn draw(frame: &mut Frame<'_>, state: &mut AppState) {
    let size = frame.area();
    let theme = Theme::palette(state.theme_variant());
    let layout = TuiLayout::calculate(size);

    let log_area = layout.log_inner();
    state.log.update_viewport(log_area.width, log_area.height);

    frame.render_widget(Block::default().style(Theme::base(theme)), size);

    Header::new(state).render(frame, layout.header);
    LogView::new(state).render(frame, layout.log);
    Composer::new(state).render(frame, layout.composer);
    ModelBar::new(state).render(frame, layout.buttons);
    StatusBar::new(state).render(frame, layout.status);
    KeyHints::new(state).render(frame, layout.hints);

    if state.has_modal() {
        Dialog::new(state).render(frame, size);
    }
}
