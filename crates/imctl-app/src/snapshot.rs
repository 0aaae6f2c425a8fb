//! Render-ready projection of the catalogue state

/// One catalogue row, labelled `"<name> (<id>)"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: String,
}

/// Everything the presentation layer needs to draw the catalogue screen.
///
/// Built fresh from state on each call; holds no references into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub catalogue_items: Vec<DisplayRow>,
    pub selected_index: Option<usize>,
    pub detail_text: Option<String>,
    pub error_text: Option<String>,
}

impl ViewSnapshot {
    /// Label of the selected row, if any
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_index
            .and_then(|i| self.catalogue_items.get(i))
            .map(|row| row.label.as_str())
    }
}
