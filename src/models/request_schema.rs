use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::constants::*;

use super::{ContactField, MovieSortKey, NewsSortKey};

/// request schema for the movie listing
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct MovieListParams {
    /// case-insensitive title substring
    pub search: Option<String>,
    /// genre label, `All` or absent for every genre
    pub genre: Option<String>,
    /// `title`, `rating` or `year`; catalog order when absent
    pub sort_by: Option<MovieSortKey>,
}

/// request schema for the top rated rows
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TopMoviesParams {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

/// request schema for similar movies
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SimilarParams {
    pub limit: Option<usize>,
}

/// request schema for the news listing
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct NewsParams {
    pub sort_by: Option<NewsSortKey>,
}

/// request schema to jump to a hero carousel slide
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct HeroSlideReqBody {
    pub index: usize,
}

/// request schema for hovering the rating widget, 0 clears the hover
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct HoverReqBody {
    #[validate(range(max = 5))]
    pub star: u8,
}

/// request schema for committing a star rating
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SelectReqBody {
    #[validate(range(min = 1, max = 5))]
    pub star: u8,
}

/// request schema for one keystroke in the contact form
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactFieldReqBody {
    pub field: ContactField,
    #[validate(length(max = "CONTACT_FIELD_MAX_LEN"))]
    pub value: String,
}
