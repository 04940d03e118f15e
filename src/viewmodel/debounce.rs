//! Debounced dispatch of search text
//!
//! [`Debounce`] is the pure state machine: `Idle` or `Pending(value, deadline)`.
//! A change restarts the deadline; when the deadline passes untouched the
//! pending value is released, unless it equals the last value released.
//! Consecutive duplicate changes are dropped before any timer logic.
//!
//! [`spawn_debouncer`] drives the machine from a channel with tokio timers.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Duration, Instant};

/// Phase of the debounce gate
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Idle,
    Pending { value: T, deadline: Instant },
}

/// Delay-and-coalesce gate
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    phase: Phase<T>,
    last_received: T,
    last_dispatched: T,
}

impl<T: Clone + PartialEq> Debounce<T> {
    /// Create a gate seeded with the stream's initial value, which is never released
    pub fn new(delay: Duration, initial: T) -> Self {
        Self {
            delay,
            phase: Phase::Idle,
            last_received: initial.clone(),
            last_dispatched: initial,
        }
    }

    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    /// When the pending value will be released, if any
    pub fn deadline(&self) -> Option<Instant> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Pending { deadline, .. } => Some(*deadline),
        }
    }

    /// Record a new value, restarting the countdown
    pub fn text_changed(&mut self, value: T, now: Instant) {
        if value == self.last_received {
            return;
        }
        self.last_received = value.clone();
        self.phase = Phase::Pending {
            value,
            deadline: now + self.delay,
        };
    }

    /// Release the pending value if its deadline has passed
    pub fn timer_fired(&mut self, now: Instant) -> Option<T> {
        match &self.phase {
            Phase::Pending { deadline, .. } if now >= *deadline => {}
            _ => return None,
        }

        let Phase::Pending { value, .. } = std::mem::replace(&mut self.phase, Phase::Idle) else {
            return None;
        };
        if value == self.last_dispatched {
            return None;
        }
        self.last_dispatched = value.clone();
        Some(value)
    }
}

/// Run `debounce` over values from `rx`, calling `dispatch` for each release
///
/// The task ends when every sender is dropped; a value still pending then is
/// discarded. `dispatch` must not block: each release is independent.
pub fn spawn_debouncer<T, F>(
    mut debounce: Debounce<T>,
    mut rx: mpsc::UnboundedReceiver<T>,
    mut dispatch: F,
) -> JoinHandle<()>
where
    T: Clone + PartialEq + Send + 'static,
    F: FnMut(T) + Send + 'static,
{
    tokio::spawn(async move {
        loop {
            match debounce.deadline() {
                None => match rx.recv().await {
                    Some(value) => debounce.text_changed(value, Instant::now()),
                    None => break,
                },
                Some(deadline) => {
                    tokio::select! {
                        received = rx.recv() => match received {
                            Some(value) => debounce.text_changed(value, Instant::now()),
                            None => break,
                        },
                        _ = sleep_until(deadline) => {
                            if let Some(value) = debounce.timer_fired(Instant::now()) {
                                dispatch(value);
                            }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const DELAY: Duration = Duration::from_millis(500);

    fn gate() -> Debounce<String> {
        Debounce::new(DELAY, String::new())
    }

    #[test]
    fn test_initial_value_is_ignored() {
        let mut gate = gate();
        let now = Instant::now();

        gate.text_changed(String::new(), now);
        assert_eq!(gate.phase(), &Phase::Idle);
        assert_eq!(gate.timer_fired(now + DELAY), None);
    }

    #[test]
    fn test_releases_after_quiescence() {
        let mut gate = gate();
        let start = Instant::now();

        gate.text_changed("ams".to_string(), start);
        assert_eq!(gate.deadline(), Some(start + DELAY));
        assert_eq!(gate.timer_fired(start + DELAY / 2), None);
        assert_eq!(gate.timer_fired(start + DELAY), Some("ams".to_string()));
        assert_eq!(gate.phase(), &Phase::Idle);
    }

    #[test]
    fn test_change_restarts_countdown() {
        let mut gate = gate();
        let start = Instant::now();

        gate.text_changed("a".to_string(), start);
        gate.text_changed("am".to_string(), start + Duration::from_millis(400));

        assert_eq!(gate.timer_fired(start + DELAY), None);
        assert_eq!(
            gate.timer_fired(start + Duration::from_millis(900)),
            Some("am".to_string())
        );
    }

    #[test]
    fn test_consecutive_duplicate_does_not_restart() {
        let mut gate = gate();
        let start = Instant::now();

        gate.text_changed("ams".to_string(), start);
        gate.text_changed("ams".to_string(), start + Duration::from_millis(300));

        assert_eq!(gate.deadline(), Some(start + DELAY));
    }

    #[test]
    fn test_same_as_last_dispatched_is_dropped() {
        let mut gate = gate();
        let start = Instant::now();

        gate.text_changed("ams".to_string(), start);
        assert!(gate.timer_fired(start + DELAY).is_some());

        let later = start + Duration::from_secs(2);
        gate.text_changed("amst".to_string(), later);
        gate.text_changed("ams".to_string(), later + Duration::from_millis(10));
        assert_eq!(gate.timer_fired(later + Duration::from_secs(1)), None);
        assert_eq!(gate.phase(), &Phase::Idle);
    }

    #[test]
    fn test_clearing_text_is_released() {
        let mut gate = gate();
        let start = Instant::now();

        gate.text_changed("ams".to_string(), start);
        gate.timer_fired(start + DELAY);

        let later = start + Duration::from_secs(2);
        gate.text_changed(String::new(), later);
        assert_eq!(gate.timer_fired(later + DELAY), Some(String::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_releases_last_value_of_burst() {
        let released = Arc::new(Mutex::new(Vec::new()));
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = released.clone();
        let handle = spawn_debouncer(gate(), rx, move |v| sink.lock().unwrap().push(v));

        for text in ["a", "am", "ams"] {
            tx.send(text.to_string()).unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(released.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(*released.lock().unwrap(), vec!["ams".to_string()]);

        drop(tx);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_discards_pending_value_on_close() {
        let released = Arc::new(Mutex::new(Vec::new()));
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = released.clone();
        let handle = spawn_debouncer(gate(), rx, move |v| sink.lock().unwrap().push(v));

        tx.send("ams".to_string()).unwrap();
        drop(tx);
        handle.await.unwrap();

        assert!(released.lock().unwrap().is_empty());
    }
}
