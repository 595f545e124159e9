use std::{sync::Arc, time::Duration};
use tokio::time::interval;

use crate::{constants::*, views::ViewRegistry};

/// This function periodically unmounts views whose page stopped talking to us
pub async fn cleanup_job(views: Arc<ViewRegistry>) {
    tracing::debug!("initializing view cleanup scheduler job");
    // VIEW_CLEANUP_JOB_INTERVAL is mentioned in seconds
    let mut interval = interval(Duration::from_secs(VIEW_CLEANUP_JOB_INTERVAL));
    loop {
        interval.tick().await;
        let removed = views.remove_idle(VIEW_IDLE_TIMEOUT_SECS).await;
        if removed > 0 {
            tracing::debug!("removed {removed} idle views");
        }
    }
}
