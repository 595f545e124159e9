use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// News article shown on the news page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub date: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub excerpt: String,
    pub content: String,
}

impl NewsArticle {
    /// Parses the `YYYY-MM-DD` publish date, `None` when it is malformed
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Sort options of the news listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NewsSortKey {
    #[default]
    Date,
    Category,
    Title,
}
