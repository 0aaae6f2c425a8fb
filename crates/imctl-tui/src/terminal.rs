//! Terminal restoration for the catalogue browser

/// Chain a panic hook that hands the terminal back (raw mode off, main
/// screen restored) before the default hook prints the panic.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));
}
