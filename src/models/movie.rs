use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::StarBreakdown;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streaming: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
}

impl Movie {
    /// Builds a movie with only the required fields set
    pub fn new(id: u32, title: &str, genre: &str, year: i32, rating: f64) -> Self {
        Self {
            id,
            title: title.to_owned(),
            genre: genre.to_owned(),
            year,
            rating,
            poster: None,
            trailer_url: None,
            description: None,
            cast: None,
            streaming: None,
            director: None,
            language: None,
            runtime: None,
        }
    }

    pub fn stars(&self) -> StarBreakdown {
        StarBreakdown::from_rating(self.rating)
    }
}

/// Sort options of the movie listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MovieSortKey {
    Title,
    Rating,
    Year,
}
