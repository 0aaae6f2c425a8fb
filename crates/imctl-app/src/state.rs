//! Application state (Model in TEA pattern)

use crate::catalogue_state::CatalogueState;
use crate::config::Settings;
use crate::snapshot::ViewSnapshot;
use url::Url;

/// Rows of the screen not available to detail text: header (3),
/// status bar (1) and the detail block's borders (2).
const DETAIL_CHROME_ROWS: u16 = 6;

/// Page height used before the first resize event arrives
const DEFAULT_DETAIL_PAGE_HEIGHT: u16 = 10;

/// Current application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    /// Quit requested; the event loop exits after the current message
    Quitting,
}

/// Who we are connected as, for the status bar
#[derive(Debug, Clone, Default)]
pub struct SessionInfo {
    pub user: String,
    pub manager_url: String,
}

impl SessionInfo {
    pub fn new(user: impl Into<String>, manager_url: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            manager_url: manager_url.into(),
        }
    }

    /// Manager `host[:port]` for display.
    ///
    /// Scheme, user info and path are dropped. Anything that does not parse
    /// as a URL with a host is shown as given.
    pub fn manager_host(&self) -> String {
        match Url::parse(&self.manager_url) {
            Ok(url) => match (url.host_str(), url.port()) {
                (Some(host), Some(port)) => format!("{}:{}", host, port),
                (Some(host), None) => host.to_string(),
                (None, _) => self.manager_url.clone(),
            },
            Err(_) => self.manager_url.clone(),
        }
    }
}

/// Terminal size as last reported by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Scroll position of the detail pane
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailViewState {
    /// First visible line
    pub offset: usize,
    /// Detail revision the offset belongs to
    pub revision: u64,
}

/// Complete application state
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: AppPhase,

    /// Catalogue, detail cache and selection
    pub catalogue: CatalogueState,

    pub detail_view: DetailViewState,

    /// `None` until the first resize event
    pub viewport: Option<Viewport>,

    pub settings: Settings,

    pub session: SessionInfo,

    /// Animation frame for the loading indicator, advanced on `Tick`
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings, session: SessionInfo) -> Self {
        Self {
            settings,
            session,
            ..Default::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.catalogue.snapshot()
    }

    /// Visible detail lines for paging
    pub fn detail_page_height(&self) -> usize {
        let height = self
            .viewport
            .map(|v| v.height.saturating_sub(DETAIL_CHROME_ROWS))
            .unwrap_or(DEFAULT_DETAIL_PAGE_HEIGHT);
        usize::from(height.max(1))
    }

    /// Line count of the displayed detail text
    pub fn detail_line_count(&self) -> usize {
        self.catalogue
            .detail_text()
            .map(|text| text.lines().count())
            .unwrap_or(0)
    }

    /// Reset the detail scroll when a different text is shown
    pub fn sync_detail_view(&mut self) {
        let revision = self.catalogue.detail_revision();
        if self.detail_view.revision != revision {
            self.detail_view = DetailViewState {
                offset: 0,
                revision,
            };
        }
    }
}
