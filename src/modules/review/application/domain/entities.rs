use serde::{Deserialize, Serialize};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// A star rating, always within `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(i32);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Rating must be between {MIN_RATING} and {MAX_RATING}.")]
pub struct InvalidRating;

impl Rating {
    pub fn new(value: i64) -> Result<Self, InvalidRating> {
        if value < MIN_RATING as i64 || value > MAX_RATING as i64 {
            return Err(InvalidRating);
        }
        Ok(Self(value as i32))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Rating {
    type Error = InvalidRating;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value as i64)
    }
}

/// Comments are stored trimmed; an all-whitespace comment becomes empty.
pub fn normalize_comment(comment: Option<String>) -> Option<String> {
    comment.map(|c| c.trim().to_string())
}
