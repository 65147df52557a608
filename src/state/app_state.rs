use crate::app::MenuItem;
use cfb_data::{GameRecord, SeasonDataset, SeasonSummaryRow};
use std::collections::BTreeMap;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Timeline state — the loaded snapshot plus week navigation
// ---------------------------------------------------------------------------

/// Loaded season data and the week cursor over it.
///
/// Projections (`season_rows`, `max_week`) are computed once when the dataset
/// lands; the snapshot never changes afterwards, so there is nothing to
/// invalidate. `selected_week` always stays inside `[0, max_week]`.
#[derive(Debug, Default)]
pub struct TimelineState {
    pub dataset: Option<SeasonDataset>,
    pub season_rows: BTreeMap<u16, Vec<SeasonSummaryRow>>,
    pub max_week: u32,
    pub selected_week: u32,
    /// Vertical scroll for when seasons exceed terminal height.
    pub scroll_offset: u16,
}

impl TimelineState {
    /// Store the loaded snapshot and derive the projections over it.
    pub fn load(&mut self, dataset: SeasonDataset) {
        self.max_week = dataset.max_week();
        self.season_rows = dataset.season_summaries();
        self.selected_week = self.selected_week.min(self.max_week);
        self.scroll_offset = 0;
        self.dataset = Some(dataset);
    }

    /// Jump the cursor, clamped into `[0, max_week]`. Out-of-range values
    /// are not an error.
    pub fn set_week(&mut self, week: u32) {
        self.selected_week = week.min(self.max_week);
    }

    pub fn step_forward(&mut self) {
        self.set_week(self.selected_week.saturating_add(1));
    }

    pub fn step_back(&mut self) {
        self.selected_week = self.selected_week.saturating_sub(1);
    }

    /// One auto-scroll tick: advance by one week, holding at the maximum.
    /// The ticker itself keeps running at the boundary.
    pub fn advance_tick(&mut self) {
        if self.selected_week < self.max_week {
            self.selected_week += 1;
        }
    }

    /// The game the cursor points at. None when the week has no data —
    /// rendered as an empty state, never an error.
    pub fn selected_game(&self) -> Option<&GameRecord> {
        self.dataset.as_ref()?.game_at_week(self.selected_week)
    }

    pub fn scroll_down(&mut self) {
        let max = self.season_rows.len().saturating_sub(1) as u16;
        self.scroll_offset = (self.scroll_offset + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Auto-scroll speed
// ---------------------------------------------------------------------------

/// Auto-scroll cadence, slower to faster. Labels match the original
/// speed picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TickSpeed {
    Half,
    #[default]
    Normal,
    Double,
    Quad,
}

impl TickSpeed {
    pub fn period(&self) -> Duration {
        match self {
            TickSpeed::Half => Duration::from_millis(4000),
            TickSpeed::Normal => Duration::from_millis(2000),
            TickSpeed::Double => Duration::from_millis(1000),
            TickSpeed::Quad => Duration::from_millis(500),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TickSpeed::Half => ".5x",
            TickSpeed::Normal => "Normal",
            TickSpeed::Double => "2x",
            TickSpeed::Quad => "4x",
        }
    }

    /// Cycle to the next speed, wrapping from fastest back to slowest.
    pub fn next(self) -> Self {
        match self {
            TickSpeed::Half => TickSpeed::Normal,
            TickSpeed::Normal => TickSpeed::Double,
            TickSpeed::Double => TickSpeed::Quad,
            TickSpeed::Quad => TickSpeed::Half,
        }
    }
}

/// Auto-advance toggle and cadence. The ticker task itself is owned by the
/// main loop's `AutoScroller`; this is only the user-visible state.
#[derive(Debug, Default)]
pub struct NavState {
    pub auto_scrolling: bool,
    pub tick_speed: TickSpeed,
}

// ---------------------------------------------------------------------------
// Detail (matchup / data card) state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct DetailState {
    pub scroll_offset: u16,
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub should_quit: bool,
    pub last_error: Option<String>,
    pub timeline: TimelineState,
    pub nav: NavState,
    pub detail: DetailState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
