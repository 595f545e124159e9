use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user review. `movie` holds the title of the reviewed movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u32,
    pub movie: String,
    pub user: String,
    pub rating: f64,
    pub comment: String,
    pub date: String,
}
