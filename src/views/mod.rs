//! Server side state of the pages that keep something between requests.
//!
//! Every view is created when the page mounts and destroyed when it unmounts
//! (or goes idle). Dropping a view cancels the timers it owns.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicU32, Ordering},
};
use tokio::sync::RwLock;

use crate::utils::{get_epoch_ts, AppError};

pub mod contact;
pub mod home;
pub mod movie_detail;

pub use contact::ContactView;
pub use home::HomeView;
pub use movie_detail::MovieDetailView;

#[derive(Debug)]
pub enum View {
    Home(HomeView),
    MovieDetail(MovieDetailView),
    Contact(ContactView),
}

impl View {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Home(_) => "home",
            Self::MovieDetail(_) => "movie",
            Self::Contact(_) => "contact",
        }
    }
}

#[derive(Debug)]
struct ViewEntry {
    view: View,
    last_seen: u64,
}

/// All live views keyed by a sequential view id
#[derive(Debug, Default)]
pub struct ViewRegistry {
    next_id: AtomicU32,
    views: RwLock<HashMap<u32, ViewEntry>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a freshly mounted view and returns its id
    pub async fn insert(&self, view: View) -> u32 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!("Mounting {} view {id}", view.kind());
        let entry = ViewEntry {
            view,
            last_seen: get_epoch_ts(),
        };
        self.views.write().await.insert(id, entry);
        id
    }

    /// Runs `f` on the view and marks it as recently used
    pub async fn with_view<R>(
        &self,
        id: u32,
        f: impl FnOnce(&mut View) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut views = self.views.write().await;
        let entry = views
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("View {id} not found")))?;
        entry.last_seen = get_epoch_ts();
        f(&mut entry.view)
    }

    pub async fn with_home<R>(
        &self,
        id: u32,
        f: impl FnOnce(&mut HomeView) -> R,
    ) -> Result<R, AppError> {
        self.with_view(id, |view| match view {
            View::Home(home) => Ok(f(home)),
            other => Err(wrong_kind(id, other, "home")),
        })
        .await
    }

    pub async fn with_movie_detail<R>(
        &self,
        id: u32,
        f: impl FnOnce(&mut MovieDetailView) -> R,
    ) -> Result<R, AppError> {
        self.with_view(id, |view| match view {
            View::MovieDetail(detail) => Ok(f(detail)),
            other => Err(wrong_kind(id, other, "movie")),
        })
        .await
    }

    pub async fn with_contact<R>(
        &self,
        id: u32,
        f: impl FnOnce(&mut ContactView) -> R,
    ) -> Result<R, AppError> {
        self.with_view(id, |view| match view {
            View::Contact(contact) => Ok(f(contact)),
            other => Err(wrong_kind(id, other, "contact")),
        })
        .await
    }

    /// Unmounts a view. Its pending timers are aborted when it is dropped.
    pub async fn remove(&self, id: u32) -> bool {
        let removed = self.views.write().await.remove(&id);
        match removed {
            Some(entry) => {
                tracing::debug!("Unmounting {} view {id}", entry.view.kind());
                true
            }
            None => false,
        }
    }

    /// Drops every view not used during the last `max_idle_secs` seconds
    pub async fn remove_idle(&self, max_idle_secs: u64) -> usize {
        let cut_off = get_epoch_ts().saturating_sub(max_idle_secs);
        let mut views = self.views.write().await;
        let before = views.len();
        views.retain(|_, entry| entry.last_seen > cut_off);
        before - views.len()
    }

    pub async fn len(&self) -> usize {
        self.views.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn wrong_kind(id: u32, view: &View, expected: &str) -> AppError {
    AppError::BadRequestErr(format!(
        "View {id} is a {} view, not a {expected} view",
        view.kind()
    ))
}
