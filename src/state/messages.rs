use crate::state::network::LoadingState;
use cfb_data::GameRecord;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadSeasonData,
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    SeasonDataLoaded { games: Vec<GameRecord> },
    Error { message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    /// Fired by the auto-scroll ticker; advances the selected week by one.
    AutoScrollTick,
}
