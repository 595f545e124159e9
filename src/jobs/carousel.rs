use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant},
};

/// Hero carousel index that advances on its own every `period`.
/// The rotation task is aborted when the carousel is dropped.
#[derive(Debug)]
pub struct HeroCarousel {
    current: Arc<AtomicUsize>,
    len: usize,
    task: Option<JoinHandle<()>>,
}

impl HeroCarousel {
    pub fn start(len: usize, period: Duration) -> Self {
        let current = Arc::new(AtomicUsize::new(0));
        // nothing to rotate with a single slide
        let task = (len > 1)
            .then(|| tokio::spawn(hero_rotation_job(current.clone(), len, period)));
        Self { current, len, task }
    }

    pub fn current(&self) -> usize {
        self.current.load(Ordering::SeqCst)
    }

    pub fn select(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current.store(index, Ordering::SeqCst);
        true
    }
}

impl Drop for HeroCarousel {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn hero_rotation_job(current: Arc<AtomicUsize>, len: usize, period: Duration) {
    tracing::debug!("initializing hero carousel rotation over {len} slides");
    // first tick one period after mounting
    let mut interval = interval_at(Instant::now() + period, period);
    loop {
        interval.tick().await;
        let _ = current.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |i| {
            Some((i + 1) % len)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(5);

    #[tokio::test(start_paused = true)]
    async fn test_rotation_wraps_around() {
        let carousel = HeroCarousel::start(3, PERIOD);
        assert_eq!(carousel.current(), 0);
        tokio::time::sleep(Duration::from_secs(6)).await;
        assert_eq!(carousel.current(), 1);
        tokio::time::sleep(PERIOD).await;
        assert_eq!(carousel.current(), 2);
        tokio::time::sleep(PERIOD).await;
        assert_eq!(carousel.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_selected_slide_keeps_rotating() {
        let carousel = HeroCarousel::start(3, PERIOD);
        assert!(carousel.select(2));
        tokio::time::sleep(Duration::from_secs(6)).await;
        assert_eq!(carousel.current(), 0);
        assert!(!carousel.select(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_rotation() {
        let carousel = HeroCarousel::start(3, PERIOD);
        let current = carousel.current.clone();
        drop(carousel);
        tokio::time::sleep(Duration::from_secs(16)).await;
        assert_eq!(current.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_slide_does_not_spawn() {
        let carousel = HeroCarousel::start(1, PERIOD);
        assert!(carousel.task.is_none());
        assert_eq!(carousel.len, 1);
        assert!(HeroCarousel::start(0, PERIOD).task.is_none());
    }
}
