use std::sync::Arc;

use self::cleanup::cleanup_job;
use crate::views::ViewRegistry;

pub mod carousel;
pub mod cleanup;
pub mod contact_reset;

pub use carousel::HeroCarousel;
pub use contact_reset::contact_reset_job;

pub fn spawn_all_jobs(views: Arc<ViewRegistry>) {
    tokio::spawn(async {
        // spawn job to unmount views left behind by closed pages
        cleanup_job(views).await;
    });
}
