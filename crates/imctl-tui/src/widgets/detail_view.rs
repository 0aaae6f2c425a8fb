//! Stack detail widget (right pane)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

/// Detail text of the selected stack, scrolled to `offset`
pub struct DetailView<'a> {
    text: Option<&'a str>,
    title: Option<&'a str>,
    error: Option<&'a str>,
    offset: usize,
    has_selection: bool,
    spinner: Option<&'static str>,
}

impl<'a> DetailView<'a> {
    pub fn new(text: Option<&'a str>) -> Self {
        Self {
            text,
            title: None,
            error: None,
            offset: 0,
            has_selection: false,
            spinner: None,
        }
    }

    /// Label of the selected row, shown in the border
    pub fn title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self.has_selection = title.is_some();
        self
    }

    /// Show `error` instead of the detail text
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Details are being fetched, animated with `spinner`
    pub fn loading(mut self, spinner: Option<&'static str>) -> Self {
        self.spinner = spinner;
        self
    }

    fn placeholder(&self) -> String {
        match (self.has_selection, self.spinner) {
            (false, _) => "Select a stack to see its parameters".to_string(),
            (true, Some(spinner)) => format!("{} Loading details…", spinner),
            (true, None) => "No details loaded".to_string(),
        }
    }
}

impl Widget for DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.title {
            Some(title) => format!(" {} ", title),
            None => " Detail ".to_string(),
        };
        let block = styles::glass_block(false)
            .title(title)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(error) = self.error {
            Paragraph::new(error)
                .style(styles::status_red())
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        match self.text {
            Some(text) => {
                let offset = u16::try_from(self.offset).unwrap_or(u16::MAX);
                Paragraph::new(text)
                    .style(styles::text_primary())
                    .scroll((offset, 0))
                    .render(inner, buf);
            }
            None => {
                Paragraph::new(self.placeholder())
                    .style(styles::text_muted())
                    .render(inner, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    const TEXT: &str = "{\n  \"ID\": 1,\n  \"name\": \"DHIS2\"\n}";

    #[test]
    fn test_detail_text_rendered() {
        let mut term = TestTerminal::new();
        term.render_widget(
            DetailView::new(Some(TEXT)).title(Some("DHIS2 (1)")),
            Rect::new(0, 0, 40, 10),
        );

        assert!(term.line_contains(0, "DHIS2 (1)"));
        assert!(term.line_contains(2, "\"ID\": 1"));
    }

    #[test]
    fn test_offset_scrolls_text() {
        let mut term = TestTerminal::new();
        term.render_widget(
            DetailView::new(Some(TEXT)).offset(2),
            Rect::new(0, 0, 40, 10),
        );

        assert!(term.line_contains(1, "\"name\""));
        assert!(!term.buffer_contains("\"ID\""));
    }

    #[test]
    fn test_error_replaces_text() {
        let mut term = TestTerminal::new();
        term.render_widget(
            DetailView::new(Some(TEXT)).error(Some("fetching stack 2 failed")),
            Rect::new(0, 0, 40, 10),
        );

        assert!(term.buffer_contains("fetching stack 2 failed"));
        assert!(!term.buffer_contains("\"ID\""));
    }

    #[test]
    fn test_placeholder_without_selection() {
        let mut term = TestTerminal::new();
        term.render_widget(DetailView::new(None), Rect::new(0, 0, 50, 10));

        assert!(term.buffer_contains("Select a stack"));
    }

    #[test]
    fn test_placeholder_while_loading() {
        let mut term = TestTerminal::new();
        term.render_widget(
            DetailView::new(None)
                .title(Some("DHIS2 (1)"))
                .loading(Some("◐")),
            Rect::new(0, 0, 50, 10),
        );

        assert!(term.buffer_contains("Loading details"));
    }
}
