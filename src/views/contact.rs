use std::future::Future;
use tokio::task::JoinHandle;

use crate::models::ContactFormState;

/// Contact page: the form plus the timer that clears it after a submission
#[derive(Debug, Default)]
pub struct ContactView {
    pub form: ContactFormState,
    pending_reset: Option<JoinHandle<()>>,
}

impl ContactView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the reset task, replacing any earlier one
    pub fn schedule_reset<F>(&mut self, reset: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel_reset();
        self.pending_reset = Some(tokio::spawn(reset));
    }

    #[cfg(test)]
    fn has_pending_reset(&self) -> bool {
        self.pending_reset
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    fn cancel_reset(&mut self) {
        if let Some(handle) = self.pending_reset.take() {
            handle.abort();
        }
    }
}

impl Drop for ContactView {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        },
        time::Duration,
    };

    use super::*;

    fn flag_after(delay: Duration, flag: Arc<AtomicBool>) -> impl Future<Output = ()> {
        async move {
            tokio::time::sleep(delay).await;
            flag.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_runs_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let mut view = ContactView::new();
        view.schedule_reset(flag_after(Duration::from_secs(3), fired.clone()));
        assert!(view.has_pending_reset());
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(fired.load(Ordering::SeqCst));
        assert!(!view.has_pending_reset());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_view_cancels_reset() {
        let fired = Arc::new(AtomicBool::new(false));
        let mut view = ContactView::new();
        view.schedule_reset(flag_after(Duration::from_secs(3), fired.clone()));
        drop(view);
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }
}
