use crate::app::{App, MenuItem};
use crate::state::scroller::AutoScroller;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    scroller: &mut AutoScroller,
) {
    let mut guard = app.lock().await;

    match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => guard.quit(),

        // Tab switching
        (_, Char('1'), _) => guard.update_tab(MenuItem::Timeline),
        (_, Char('2'), _) => guard.update_tab(MenuItem::Matchup),
        (_, Char('3'), _) => guard.update_tab(MenuItem::Data),
        (_, Char('?'), _) => guard.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Week navigation — active on every tab
        (_, Char('l') | KeyCode::Right, _) => guard.week_forward(),
        (_, Char('h') | KeyCode::Left, _) => guard.week_back(),
        (_, Char('g') | KeyCode::Home, _) => guard.jump_to_first_week(),
        (_, Char('G') | KeyCode::End, _) => guard.jump_to_last_week(),

        // Auto-scroll
        (_, Char(' '), _) => guard.toggle_auto_scroll(scroller),
        (_, Char('s'), _) => guard.cycle_tick_speed(scroller),

        // Flip between the matchup card and its raw-data back
        (_, Char('f'), _) => guard.flip_detail(),

        // Timeline scrolling
        (MenuItem::Timeline, Char('j') | KeyCode::Down, _) => guard.state.timeline.scroll_down(),
        (MenuItem::Timeline, Char('k') | KeyCode::Up, _) => guard.state.timeline.scroll_up(),

        // Detail card scrolling
        (MenuItem::Matchup | MenuItem::Data, Char('j') | KeyCode::Down, _) => {
            guard.state.detail.scroll_offset = guard.state.detail.scroll_offset.saturating_add(1);
        }
        (MenuItem::Matchup | MenuItem::Data, Char('k') | KeyCode::Up, _) => {
            guard.state.detail.scroll_offset = guard.state.detail.scroll_offset.saturating_sub(1);
        }

        // Global
        (_, Char('F'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }
}
