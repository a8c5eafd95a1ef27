//! Core worker utilities

use crate::backend::error::BackendError;
use std::future::Future;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Sends completed work back to the UI loop.
#[derive(Debug)]
pub struct EventSender<E> {
    sender: mpsc::Sender<E>,
}

impl<E> Clone for EventSender<E> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<E> EventSender<E> {
    pub fn new(sender: mpsc::Sender<E>) -> Self {
        Self { sender }
    }

    /// Send a generic event. A closed receiver means the view is gone.
    pub async fn send_event(&self, event: E) {
        let _ = self.sender.send(event).await;
    }
}

/// Owns the requests a view has in flight.
///
/// Dropping the scope cancels every task spawned through it; a cancelled
/// task never delivers its event, even if its request already completed.
#[derive(Debug, Default)]
pub struct TaskScope {
    token: CancellationToken,
}

impl TaskScope {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    pub fn spawn<E, F>(&self, sender: EventSender<E>, work: F)
    where
        E: Send + 'static,
        F: Future<Output = E> + Send + 'static,
    {
        let token = self.token.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    log::debug!("Discarding in-flight request: view closed");
                }
                event = work => {
                    if !token.is_cancelled() {
                        sender.send_event(event).await;
                    }
                }
            }
        });
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Logs a failed request at the level its cause warrants and returns the
/// text to show the user.
pub(crate) fn report_failure(context: &str, error: &BackendError) -> String {
    log::log!(error.log_level().into(), "{}: {}", context, error);
    error.user_message()
}
