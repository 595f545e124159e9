use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::MAX_STARS;

/// Star rating widget state of a movie detail view.
///
/// `selected` is the committed value, `hovered` the transient preview where
/// 0 means the pointer left the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingState {
    pub selected: u8,
    pub hovered: u8,
}

impl RatingState {
    /// Commits a star value. Returns false and leaves the state untouched
    /// when `star` is outside `1..=5`.
    pub fn select(&mut self, star: u8) -> bool {
        if !(1..=MAX_STARS).contains(&star) {
            return false;
        }
        self.selected = star;
        true
    }

    /// Sets the hover preview, 0 clears it. Returns false when `star > 5`.
    pub fn hover(&mut self, star: u8) -> bool {
        if star > MAX_STARS {
            return false;
        }
        self.hovered = star;
        true
    }

    /// Value the widget should render
    pub fn display_value(&self) -> u8 {
        if self.hovered != 0 {
            self.hovered
        } else {
            self.selected
        }
    }
}

/// How a fractional rating is drawn as full, half and empty stars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StarBreakdown {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
    pub label: String,
}

impl StarBreakdown {
    pub fn from_rating(rating: f64) -> Self {
        let rating = rating.clamp(0.0, MAX_STARS as f64);
        let full = rating.floor() as u8;
        let half = rating.fract() != 0.0;
        let empty = MAX_STARS - full - u8::from(half);
        Self {
            full,
            half,
            empty,
            label: format!("{rating:.1}"),
        }
    }
}
