use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use crate::state::scroller::AutoScroller;
use cfb_data::{GameRecord, SeasonDataset};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Timeline,
    Matchup,
    Data,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        let settings = AppSettings::load();

        let app = Self {
            state: AppState::new(),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_season_loaded(&mut self, games: Vec<GameRecord>) {
        self.state.last_error = None;
        self.state.timeline.load(SeasonDataset::new(games));
    }

    pub fn on_error(&mut self, message: String) {
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
        if matches!(next, MenuItem::Matchup | MenuItem::Data) {
            self.state.detail.scroll_offset = 0;
        }
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    /// The flip card: Matchup and Data are the two faces of the same game.
    /// Flipping from anywhere else lands on Matchup.
    pub fn flip_detail(&mut self) {
        match self.state.active_tab {
            MenuItem::Matchup => self.update_tab(MenuItem::Data),
            _ => self.update_tab(MenuItem::Matchup),
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }

    // -----------------------------------------------------------------------
    // Week navigation — delegated to TimelineState
    // -----------------------------------------------------------------------

    pub fn set_week(&mut self, week: u32) {
        self.state.timeline.set_week(week);
    }

    pub fn week_forward(&mut self) {
        self.state.timeline.step_forward();
    }

    pub fn week_back(&mut self) {
        self.state.timeline.step_back();
    }

    pub fn jump_to_first_week(&mut self) {
        self.state.timeline.set_week(0);
    }

    pub fn jump_to_last_week(&mut self) {
        let max = self.state.timeline.max_week;
        self.state.timeline.set_week(max);
    }

    // -----------------------------------------------------------------------
    // Auto-scroll — nav state plus the ticker owned by the main loop
    // -----------------------------------------------------------------------

    pub fn toggle_auto_scroll(&mut self, scroller: &mut AutoScroller) {
        self.state.nav.auto_scrolling = !self.state.nav.auto_scrolling;
        if self.state.nav.auto_scrolling {
            scroller.start(self.state.nav.tick_speed.period());
        } else {
            scroller.stop();
        }
    }

    pub fn cycle_tick_speed(&mut self, scroller: &mut AutoScroller) {
        self.state.nav.tick_speed = self.state.nav.tick_speed.next();
        // Only re-arms when a ticker is live.
        scroller.restart(self.state.nav.tick_speed.period());
    }

    /// Auto-scroll tick — advances one week, holding at the last game.
    pub fn on_auto_scroll_tick(&mut self) {
        self.state.timeline.advance_tick();
    }
}
