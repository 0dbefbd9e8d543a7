use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(3000);

/// Repeating timer running on its own thread.
pub struct Ticker;

impl Ticker {
    /// Start ticking every `period`. Ticks stop once the handle is cancelled or dropped.
    pub fn start(period: Duration) -> TickerHandle {
        let (tick_tx, tick_rx) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let thread = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tick_tx.send(()).is_err() {
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        TickerHandle {
            receiver: tick_rx,
            stop: Some(stop_tx),
            thread: Some(thread),
        }
    }
}

/// Subscription to a running `Ticker`.
pub struct TickerHandle {
    receiver: Receiver<()>,
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Number of ticks that fired since the last call. Always 0 after `cancel`.
    pub fn try_tick(&self) -> usize {
        if self.is_cancelled() {
            return 0;
        }
        let mut fired = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(()) => fired += 1,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        fired
    }

    /// Stop the timer thread and wait for it to exit. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.stop.is_none()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
