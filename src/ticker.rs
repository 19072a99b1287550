//! Periodic tick source with synchronous, idempotent cancellation.
//!
//! The callback runs on a dedicated thread. The loop waits on a channel with
//! a timeout instead of sleeping, so `cancel` wakes it immediately and can
//! join before returning; once `cancel` returns, the callback can no longer
//! fire.

use std::{thread, time::Duration};

use crossbeam_channel::{Sender, bounded};

pub struct Ticker {
    name: &'static str,
    stop_tx: Sender<()>,
    join: Option<thread::JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a ticker invoking `callback` every `period` until cancelled.
    pub fn spawn<F>(name: &'static str, period: Duration, mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let join = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(period) {
                    Err(crossbeam_channel::RecvTimeoutError::Timeout) => callback(),
                    // Stop requested or all handles dropped.
                    _ => break,
                }
            }
        });

        Self {
            name,
            stop_tx,
            join: Some(join),
        }
    }

    /// Stop the tick thread and wait for it to exit. Calling this on an
    /// already-cancelled ticker is a no-op.
    pub fn cancel(&mut self) {
        let Some(join) = self.join.take() else {
            return;
        };
        let _ = self.stop_tx.send(());
        if join.join().is_err() {
            tracing::warn!(name = self.name, "ticker thread panicked during shutdown");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.join.is_none()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    };

    use super::*;

    #[test]
    fn ticks_fire_periodically() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        let mut ticker = Ticker::spawn("test", Duration::from_millis(5), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(100));
        ticker.cancel();
        assert!(count.load(Ordering::SeqCst) >= 3);
    }

    #[test]
    fn cancel_is_synchronous_and_idempotent() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        let mut ticker = Ticker::spawn("test", Duration::from_millis(2), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(20));
        ticker.cancel();
        assert!(ticker.is_cancelled());
        let frozen = count.load(Ordering::SeqCst);

        // No tick may fire after cancel returns.
        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), frozen);

        // Second cancel is a no-op, never an error.
        ticker.cancel();
        assert!(ticker.is_cancelled());
    }

    #[test]
    fn drop_cancels() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        let ticker = Ticker::spawn("test", Duration::from_millis(2), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(10));
        drop(ticker);
        let frozen = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), frozen);
    }
}
