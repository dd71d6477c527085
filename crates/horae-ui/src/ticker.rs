use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Update interval while a clock is running.
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Repeating timer on a dedicated thread.
///
/// The stop channel doubles as the period source: `recv_timeout` sleeps
/// for one period unless a stop request (or the sender side going away)
/// wakes it first, so stopping never waits out the remainder of a tick.
/// Dropping the ticker stops and joins the thread.
pub(crate) struct Ticker {
    stop_tx: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Ticker {
    /// Spawns the timer thread. `tick` runs once per period until it
    /// returns `false` or the ticker is stopped.
    pub(crate) fn spawn<F>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let thread = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(period) {
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        if !tick() {
                            break;
                        }
                    }
                    // Stop requested, or the ticker handle is gone.
                    Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        Self { stop_tx, thread: Some(thread) }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn ticks_repeatedly_until_dropped() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let ticker = Ticker::spawn(Duration::from_millis(5), move || {
            seen.fetch_add(1, Ordering::SeqCst);
            true
        });
        thread::sleep(Duration::from_millis(100));
        drop(ticker);
        let at_stop = count.load(Ordering::SeqCst);
        assert!(at_stop >= 2, "expected repeated ticks, got {at_stop}");

        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), at_stop, "ticked after stop");
    }

    #[test]
    fn tick_returning_false_ends_the_loop() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let _ticker = Ticker::spawn(Duration::from_millis(5), move || {
            seen.fetch_add(1, Ordering::SeqCst) < 2
        });
        thread::sleep(Duration::from_millis(100));
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
