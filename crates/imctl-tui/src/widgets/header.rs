//! Header bar widget
//!
//! Shows the app title and the top-level tabs. Only `Stacks` has content.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use crate::theme::{palette, styles};

const TAB_TITLES: [&str; 2] = ["Stacks", "Instances"];

/// Main header with title and tabs
pub struct MainHeader {
    active_tab: usize,
}

impl MainHeader {
    pub fn new() -> Self {
        Self { active_tab: 0 }
    }
}

impl Default for MainHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("imctl", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
        ]);
        let title_width = (title.width() as u16).min(inner.width);
        title.render(
            Rect {
                width: title_width,
                height: 1,
                ..inner
            },
            buf,
        );

        let tabs_area = Rect {
            x: inner.x + title_width,
            y: inner.y,
            width: inner.width.saturating_sub(title_width),
            height: 1,
        };
        let active: usize = self.active_tab;
        Tabs::new(TAB_TITLES.to_vec())
            .select(active)
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .render(tabs_area, buf);
    }
}
