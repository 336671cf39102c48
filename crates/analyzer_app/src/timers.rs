use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use analyzer_core::Msg;

/// A cancellable repeating timer that posts a fixed message into the app
/// channel. Starting again cancels the previous instance, so a stale
/// timer can never tick against state that has moved on.
pub struct RepeatingTimer {
    interval: Duration,
    stop: Option<Arc<AtomicBool>>,
}

impl RepeatingTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            stop: None,
        }
    }

    pub fn start(&mut self, msg_tx: mpsc::Sender<Msg>, msg: Msg) {
        self.cancel();
        let stop = Arc::new(AtomicBool::new(false));
        self.stop = Some(stop.clone());
        let interval = self.interval;
        thread::spawn(move || loop {
            thread::sleep(interval);
            if stop.load(Ordering::Relaxed) {
                break;
            }
            if msg_tx.send(msg.clone()).is_err() {
                break;
            }
        });
    }

    pub fn cancel(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop.store(true, Ordering::Relaxed);
        }
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_until_cancelled_then_goes_quiet() {
        let (tx, rx) = mpsc::channel();
        let mut timer = RepeatingTimer::new(Duration::from_millis(1));
        timer.start(tx, Msg::RotationTick);

        assert_eq!(
            rx.recv_timeout(Duration::from_secs(1)),
            Ok(Msg::RotationTick)
        );

        timer.cancel();
        // One tick may already be in flight; after draining it the
        // channel must stay silent.
        thread::sleep(Duration::from_millis(20));
        while rx.try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(20));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn restart_replaces_the_previous_timer() {
        let (tx, rx) = mpsc::channel();
        let mut timer = RepeatingTimer::new(Duration::from_millis(1));
        timer.start(tx.clone(), Msg::RotationTick);
        timer.start(tx, Msg::RevealTick);

        thread::sleep(Duration::from_millis(30));
        timer.cancel();
        thread::sleep(Duration::from_millis(10));

        // Only the replacement keeps ticking after the takeover window.
        let mut saw_reveal = false;
        while let Ok(msg) = rx.try_recv() {
            saw_reveal |= msg == Msg::RevealTick;
        }
        assert!(saw_reveal);
    }
}
