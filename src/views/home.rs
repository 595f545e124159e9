use std::time::Duration;

use crate::{jobs::HeroCarousel, models::Movie};

/// Home page with its auto rotating hero carousel
#[derive(Debug)]
pub struct HomeView {
    hero_movies: Vec<Movie>,
    carousel: HeroCarousel,
}

impl HomeView {
    /// Starts rotating over `hero_movies` every `period`.
    /// Must be called from within the tokio runtime.
    pub fn new(hero_movies: Vec<Movie>, period: Duration) -> Self {
        let carousel = HeroCarousel::start(hero_movies.len(), period);
        Self {
            hero_movies,
            carousel,
        }
    }

    pub fn hero_count(&self) -> usize {
        self.hero_movies.len()
    }

    /// Index and movie of the slide currently shown, `None` for an empty catalog
    pub fn current_hero(&self) -> Option<(usize, &Movie)> {
        let index = self.carousel.current();
        self.hero_movies.get(index).map(|movie| (index, movie))
    }

    /// Jumps to a slide, the rotation keeps its own pace
    pub fn select_hero(&mut self, index: usize) -> bool {
        self.carousel.select(index)
    }
}
