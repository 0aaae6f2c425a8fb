//! Status bar widget
//!
//! Displays the logged-in user, the catalogue load status with the time of
//! the last refresh, and the instance manager host.

use imctl_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Status bar widget showing session and load state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn status_spans(&self) -> Vec<Span<'static>> {
        let catalogue = &self.state.catalogue;
        let (icon, label, style) =
            styles::catalogue_indicator(catalogue, self.state.spinner_frame);

        let mut spans = vec![Span::styled(format!("{} {}", icon, label), style)];

        if !catalogue.is_empty() {
            spans.push(Span::styled(" · ", styles::text_muted()));
            spans.push(Span::styled(
                format!("{} stacks", catalogue.len()),
                styles::text_secondary(),
            ));
        }
        if let Some(loaded_at) = catalogue.loaded_at() {
            spans.push(Span::styled(" · ", styles::text_muted()));
            spans.push(Span::styled(
                format!("refreshed {}", loaded_at.format("%H:%M:%S")),
                styles::text_secondary(),
            ));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(palette::STATUS_BAR_BG));

        let session = &self.state.session;
        let mut left = vec![Span::raw(" ")];
        if !session.user.is_empty() {
            left.push(Span::styled(session.user.clone(), styles::accent_bold()));
            left.push(Span::styled(" │ ", styles::text_muted()));
        }
        left.extend(self.status_spans());
        Line::from(left).render(area, buf);

        let host = session.manager_host();
        if host.is_empty() {
            return;
        }
        let right = Line::from(vec![
            Span::styled(host, styles::text_secondary()),
            Span::raw(" "),
        ]);
        let right_width = right.width() as u16;
        if right_width < area.width {
            let right_area = Rect {
                x: area.x + area.width - right_width,
                width: right_width,
                ..area
            };
            right.render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use imctl_app::SessionInfo;
    use imctl_client::test_utils::test_entry;

    fn state() -> AppState {
        let mut state = AppState::new();
        state.session = SessionInfo::new("admin", "https://im.example.org");
        state
    }

    #[test]
    fn test_shows_user_and_host() {
        let mut term = TestTerminal::new();
        let state = state();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.line_contains(0, "admin"));
        assert!(term.line_contains(0, "im.example.org"));
        assert!(term.line_contains(0, "Not loaded"));
    }

    #[test]
    fn test_shows_stack_count_and_refresh_time() {
        let mut term = TestTerminal::new();
        let mut state = state();
        state.catalogue.apply_entries(vec![test_entry(1, "a"), test_entry(2, "b")]);
        state.catalogue.apply_details(vec![]).unwrap();

        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.line_contains(0, "2 stacks"));
        assert!(term.line_contains(0, "refreshed"));
    }

    #[test]
    fn test_shows_loading() {
        let mut term = TestTerminal::new();
        let mut state = state();
        state.catalogue.begin_list_fetch();

        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.line_contains(0, "Loading stacks"));
    }
}
