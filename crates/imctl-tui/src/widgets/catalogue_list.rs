//! Catalogue list widget (left pane)

use imctl_app::ViewSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use super::truncate_to_width;
use crate::theme::{palette, styles};

const HIGHLIGHT_SYMBOL: &str = "> ";

/// Stack rows, or the catalogue error in their place
pub struct CatalogueList<'a> {
    snapshot: &'a ViewSnapshot,
    error: Option<&'a str>,
    spinner: Option<&'static str>,
}

impl<'a> CatalogueList<'a> {
    pub fn new(snapshot: &'a ViewSnapshot) -> Self {
        Self {
            snapshot,
            error: None,
            spinner: None,
        }
    }

    /// Show `error` instead of the rows
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Mark the list as loading, animated with `spinner`
    pub fn loading(mut self, spinner: Option<&'static str>) -> Self {
        self.spinner = spinner;
        self
    }
}

impl Widget for CatalogueList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Stacks ")
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

        if self.snapshot.catalogue_items.is_empty() {
            let hint = match self.spinner {
                Some(spinner) => format!("{} Loading stacks…", spinner),
                None => "No stacks".to_string(),
            };
            Paragraph::new(hint)
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let label_width = usize::from(inner.width).saturating_sub(HIGHLIGHT_SYMBOL.len());
        let items: Vec<ListItem> = self
            .snapshot
            .catalogue_items
            .iter()
            .map(|row| ListItem::new(truncate_to_width(&row.label, label_width)))
            .collect();

        let list = List::new(items)
            .style(styles::text_primary())
            .highlight_style(styles::focused_selected())
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        let mut list_state = ListState::default().with_selected(self.snapshot.selected_index);
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use imctl_app::DisplayRow;

    fn snapshot(selected: Option<usize>) -> ViewSnapshot {
        ViewSnapshot {
            catalogue_items: vec![
                DisplayRow {
                    label: "DHIS2 (1)".to_string(),
                },
                DisplayRow {
                    label: "DHIS2 DB (2)".to_string(),
                },
            ],
            selected_index: selected,
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_rendered_with_labels() {
        let mut term = TestTerminal::new();
        let snapshot = snapshot(None);
        term.render_widget(CatalogueList::new(&snapshot), Rect::new(0, 0, 30, 10));

        assert!(term.line_contains(1, "DHIS2 (1)"));
        assert!(term.line_contains(2, "DHIS2 DB (2)"));
    }

    #[test]
    fn test_selected_row_marked() {
        let mut term = TestTerminal::new();
        let snapshot = snapshot(Some(1));
        term.render_widget(CatalogueList::new(&snapshot), Rect::new(0, 0, 30, 10));

        assert!(term.line_contains(2, "> DHIS2 DB (2)"));
        assert!(!term.line_contains(1, ">"));
    }

    #[test]
    fn test_error_replaces_rows() {
        let mut term = TestTerminal::new();
        let snapshot = snapshot(None);
        term.render_widget(
            CatalogueList::new(&snapshot).error(Some("fetching stacks failed")),
            Rect::new(0, 0, 40, 10),
        );

        assert!(term.buffer_contains("fetching stacks failed"));
        assert!(!term.buffer_contains("DHIS2"));
    }

    #[test]
    fn test_loading_hint_when_empty() {
        let mut term = TestTerminal::new();
        let snapshot = ViewSnapshot::default();
        term.render_widget(
            CatalogueList::new(&snapshot).loading(Some("◐")),
            Rect::new(0, 0, 30, 10),
        );

        assert!(term.buffer_contains("Loading stacks"));
    }

    #[test]
    fn test_empty_catalogue_hint() {
        let mut term = TestTerminal::new();
        let snapshot = ViewSnapshot::default();
        term.render_widget(CatalogueList::new(&snapshot), Rect::new(0, 0, 30, 10));

        assert!(term.buffer_contains("No stacks"));
    }

    #[test]
    fn test_long_label_truncated() {
        let mut term = TestTerminal::new();
        let snapshot = ViewSnapshot {
            catalogue_items: vec![DisplayRow {
                label: "a-very-long-stack-name-that-does-not-fit (12)".to_string(),
            }],
            ..Default::default()
        };
        term.render_widget(CatalogueList::new(&snapshot), Rect::new(0, 0, 16, 5));

        assert!(term.buffer_contains("…"));
        assert!(!term.buffer_contains("(12)"));
    }
}
