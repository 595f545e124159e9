use std::{sync::Weak, time::Duration};

use crate::views::ViewRegistry;

/// Clears the contact form of `view_id` once `delay` has passed.
/// Does nothing when the view or the registry is gone by then.
pub async fn contact_reset_job(views: Weak<ViewRegistry>, view_id: u32, delay: Duration) {
    tokio::time::sleep(delay).await;
    let Some(views) = views.upgrade() else {
        return;
    };
    let result = views
        .with_contact(view_id, |contact| contact.form.reset())
        .await;
    match result {
        Ok(()) => tracing::debug!("contact form of view {view_id} cleared"),
        Err(err) => tracing::debug!("skipping contact reset: {:?}", err),
    }
}
