use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    ContactFormState, FieldErrors, Movie, NewsArticle, RatingState, Review, StarBreakdown,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenericResponse {
    pub success: bool,
    pub message: String,
}

/// response schema for contact form rejections
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrResponse {
    pub success: bool,
    pub message: String,
    /// one message per invalid field
    #[schema(value_type = Object)]
    pub errors: FieldErrors,
}

/// response schema for the movie listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MovieListResponse {
    pub success: bool,
    pub data: Vec<Movie>,
    /// number of movies matching the query
    pub shown: usize,
    /// number of movies in the catalog
    pub total: usize,
}

/// response schema for plain movie lists
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MoviesResponse {
    pub success: bool,
    pub data: Vec<Movie>,
}

/// response schema for genre selector values
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenresResponse {
    pub success: bool,
    pub data: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    pub stars: StarBreakdown,
    pub reviews: Vec<Review>,
}

/// response schema for movie details
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MovieDetailsResponse {
    pub success: bool,
    pub data: MovieDetails,
}

/// response schema for the news listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewsListResponse {
    pub success: bool,
    pub data: Vec<NewsArticle>,
}

/// response schema for one news article
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewsResponse {
    pub success: bool,
    pub data: NewsArticle,
}

/// response schema when a home view is created
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeViewResponse {
    pub success: bool,
    pub view_id: u32,
    pub hero_index: usize,
    pub hero_movies: Vec<Movie>,
    pub top_movies: Vec<Movie>,
    pub more_movies: Vec<Movie>,
}

/// response schema for the current hero slide
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroResponse {
    pub success: bool,
    pub view_id: u32,
    pub hero_index: usize,
    pub hero_count: usize,
    pub movie: Movie,
}

/// response schema for the rating widget
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub success: bool,
    pub view_id: u32,
    pub movie_id: u32,
    pub rating: RatingState,
    pub display_value: u8,
}

/// response schema for the contact form view
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactViewResponse {
    pub success: bool,
    pub view_id: u32,
    pub data: ContactFormState,
}
