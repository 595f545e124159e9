use crate::models::RatingState;

/// Movie detail page. Holds the star rating the user is giving the movie,
/// starting from zero every time the page is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailView {
    pub movie_id: u32,
    pub rating: RatingState,
}

impl MovieDetailView {
    pub fn new(movie_id: u32) -> Self {
        Self {
            movie_id,
            rating: RatingState::default(),
        }
    }
}
