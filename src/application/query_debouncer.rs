//! Debounced query port for free-text search input.
//!
//! Rapid keystrokes are coalesced before they reach the filter engine: a
//! value is emitted only after the configured delay elapses with no newer
//! input. At most one timer is pending per stream and the newest value
//! always wins — intermediate keystrokes superseded before the delay
//! expired are never emitted.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

/// Default delay matching the search box behavior (300 ms).
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Channel capacity for raw input and debounced output.
const CHANNEL_CAPACITY: usize = 64;

/// Spawns the debounce task and returns its endpoints.
///
/// Raw text-input events go into the returned [`mpsc::Sender`]; debounced
/// values arrive on the [`mpsc::Receiver`]. The task runs until the input
/// side is dropped; a value still pending at that point is flushed, so the
/// most recent input is never lost.
///
/// This is a timing policy, not a domain rule: the task holds no library
/// state and simply forwards strings.
pub fn spawn_query_debouncer(delay: Duration) -> (mpsc::Sender<String>, mpsc::Receiver<String>) {
    let (input_tx, mut input_rx) = mpsc::channel::<String>(CHANNEL_CAPACITY);
    let (output_tx, output_rx) = mpsc::channel::<String>(CHANNEL_CAPACITY);

    tokio::spawn(async move {
        let mut pending: Option<String> = None;

        loop {
            match pending.take() {
                None => match input_rx.recv().await {
                    Some(value) => pending = Some(value),
                    None => break,
                },
                Some(value) => {
                    tokio::select! {
                        _ = sleep(delay) => {
                            if output_tx.send(value).await.is_err() {
                                break;
                            }
                        }
                        next = input_rx.recv() => match next {
                            // Newest wins: the pending value is discarded
                            // and the delay restarts.
                            Some(newer) => pending = Some(newer),
                            None => {
                                let _ = output_tx.send(value).await;
                                break;
                            }
                        }
                    }
                }
            }
        }

        tracing::debug!("query debouncer stopped");
    });

    (input_tx, output_rx)
}
