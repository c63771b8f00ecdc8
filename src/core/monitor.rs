//! Background configuration-source monitor

use super::registry::Shared;
use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Owns the polling thread that watches the configuration source.
///
/// The thread sleeps on the stop channel with the refresh interval as the
/// timeout, so a stop request interrupts the wait immediately instead of
/// landing after the current sleep. The interval is re-read every pass;
/// changes apply from the next wakeup.
pub(crate) struct ConfigMonitor {
    stop: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl ConfigMonitor {
    pub(crate) fn spawn(shared: Arc<Shared>) -> Self {
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let handle = std::thread::Builder::new()
            .name("relog-monitor".to_string())
            .spawn(move || loop {
                let interval = shared.refresh_interval();
                match stop_rx.recv_timeout(interval) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                    Err(RecvTimeoutError::Timeout) => {
                        // a stop raced the timeout; exit without one last poll
                        if stop_rx.try_recv().is_ok() {
                            return;
                        }
                        shared.poll_source();
                    }
                }
            })
            .expect("failed to spawn relog-monitor thread");

        Self {
            stop: stop_tx,
            handle: Some(handle),
        }
    }

    /// Signal the thread and wait for it to exit. Idempotent.
    pub(crate) fn stop(&mut self) {
        let _ = self.stop.try_send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ConfigMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}
