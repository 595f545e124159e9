use anyhow::Context;
use serde::de::DeserializeOwned;
use std::{collections::HashSet, path::Path};

use crate::{
    constants::*,
    models::{Movie, NewsArticle, Review},
};

/// Read-only movie, review and news data loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct AppCatalog {
    movies: Vec<Movie>,
    reviews: Vec<Review>,
    news: Vec<NewsArticle>,
}

impl AppCatalog {
    /// Builds the catalog, rejecting duplicate movie, review or news ids
    pub fn new(
        movies: Vec<Movie>,
        reviews: Vec<Review>,
        news: Vec<NewsArticle>,
    ) -> anyhow::Result<Self> {
        check_unique_ids("movie", movies.iter().map(|m| m.id))?;
        check_unique_ids("review", reviews.iter().map(|r| r.id))?;
        check_unique_ids("news", news.iter().map(|n| n.id))?;
        Ok(Self {
            movies,
            reviews,
            news,
        })
    }

    /// Loads `movies.json`, `reviews.json` and `news.json` from a directory
    pub fn from_dir(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        let movies = read_json::<Movie>(&dir.join(MOVIES_FILE))?;
        let reviews = read_json::<Review>(&dir.join(REVIEWS_FILE))?;
        let news = read_json::<NewsArticle>(&dir.join(NEWS_FILE))?;
        tracing::debug!(
            "Loaded {} movies, {} reviews and {} news articles from {}",
            movies.len(),
            reviews.len(),
            news.len(),
            dir.display()
        );
        Self::new(movies, reviews, news)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn news(&self) -> &[NewsArticle] {
        &self.news
    }

    pub fn find_movie(&self, id: u32) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn find_news(&self, id: u32) -> Option<&NewsArticle> {
        self.news.iter().find(|article| article.id == id)
    }

    /// Reviews are linked to movies by title, not by id
    pub fn reviews_for(&self, movie: &Movie) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|review| review.movie == movie.title)
            .cloned()
            .collect()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;
    let data = serde_json::from_str::<Vec<T>>(&raw)
        .with_context(|| format!("Unable to parse {}", path.display()))?;
    Ok(data)
}

fn check_unique_ids(kind: &str, ids: impl Iterator<Item = u32>) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {kind} id: {id}");
        }
    }
    Ok(())
}
