//! Main render/view function (View in TEA pattern)


use imctl_app::state::AppState;
use imctl_app::{CataloguePhase, DetailCoverage};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::{palette, styles};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure: draws the state's snapshot and never modifies state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.settings.ui.list_width());
    let snapshot = state.snapshot();
    let catalogue = &state.catalogue;
    let spinner = styles::spinner(state.spinner_frame);

    frame.render_widget(widgets::MainHeader::new(), areas.header);

    let list_loading = (catalogue.phase() == CataloguePhase::Loading).then_some(spinner);
    frame.render_widget(
        widgets::CatalogueList::new(&snapshot)
            .error(catalogue.catalogue_error())
            .loading(list_loading),
        areas.list,
    );

    let detail_loading = (catalogue.coverage() == DetailCoverage::Loading).then_some(spinner);
    frame.render_widget(
        widgets::DetailView::new(snapshot.detail_text.as_deref())
            .title(snapshot.selected_label())
            .error(catalogue.detail_error())
            .offset(state.detail_view.offset)
            .loading(detail_loading),
        areas.detail,
    );

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
