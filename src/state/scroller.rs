use crate::state::messages::UiEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;

/// Owns the auto-scroll ticker task.
///
/// At most one ticker is ever live: `start` while running is a no-op and
/// `stop` cancels unconditionally. The handle is the only reference to the
/// task, and dropping the scroller aborts it, so a ticker cannot outlive
/// the session.
pub struct AutoScroller {
    events: mpsc::Sender<UiEvent>,
    handle: Option<JoinHandle<()>>,
}

impl AutoScroller {
    pub fn new(events: mpsc::Sender<UiEvent>) -> Self {
        Self { events, handle: None }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Arm the ticker. The first tick fires one full period after arming,
    /// not immediately.
    pub fn start(&mut self, period: Duration) {
        if self.handle.is_some() {
            return;
        }

        let events = self.events.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            // Consume the interval's immediate first fire.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if events.send(UiEvent::AutoScrollTick).await.is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Re-arm with a new period so it takes effect on the next tick. No-op
    /// when the ticker is stopped — the new period applies on the next start.
    pub fn restart(&mut self, period: Duration) {
        if self.handle.is_some() {
            self.stop();
            self.start(period);
        }
    }
}

impl Drop for AutoScroller {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_state::TickSpeed;

    #[tokio::test]
    async fn odd_toggles_leave_one_ticker_even_leave_none() {
        let (tx, _rx) = mpsc::channel(10);
        let mut scroller = AutoScroller::new(tx);
        let mut on = false;

        for round in 1..=5 {
            // toggle, with speed changes interleaved
            on = !on;
            if on {
                scroller.start(TickSpeed::Normal.period());
            } else {
                scroller.stop();
            }
            scroller.restart(TickSpeed::Quad.period());
            assert_eq!(scroller.is_running(), round % 2 == 1);
        }
    }

    #[tokio::test]
    async fn start_while_running_is_a_no_op() {
        let (tx, _rx) = mpsc::channel(10);
        let mut scroller = AutoScroller::new(tx);
        scroller.start(Duration::from_millis(10));
        scroller.start(Duration::from_millis(10));
        assert!(scroller.is_running());
        scroller.stop();
        assert!(!scroller.is_running());
        scroller.stop();
        assert!(!scroller.is_running());
    }

    #[tokio::test]
    async fn ticker_delivers_tick_events() {
        let (tx, mut rx) = mpsc::channel(10);
        let mut scroller = AutoScroller::new(tx);
        scroller.start(Duration::from_millis(5));
        assert!(matches!(rx.recv().await, Some(UiEvent::AutoScrollTick)));
        scroller.stop();
    }

    #[tokio::test]
    async fn restart_while_stopped_does_not_arm() {
        let (tx, _rx) = mpsc::channel(10);
        let mut scroller = AutoScroller::new(tx);
        scroller.restart(Duration::from_millis(5));
        assert!(!scroller.is_running());
    }
}
