//! Unsaved form input and its validation into a [`NewPlant`] payload.

use std::str::FromStr;
use thiserror::Error;

use super::NewPlant;

/// Raw text the user has typed into the new-plant form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantDraft {
    pub name: String,
    pub image: String,
    pub price: String,
}

/// The editable fields of a [`PlantDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Image,
    Price,
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "image" => Ok(Self::Image),
            "price" => Ok(Self::Price),
            other => Err(format!("unknown draft field: {}", other)),
        }
    }
}

/// Reasons a draft cannot be submitted, checked in declaration order.
///
/// The `Display` text is what the form shows to the user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    #[error("Plant name is required")]
    MissingName,

    #[error("Image URL is required")]
    MissingImage,

    #[error("Please enter a valid price")]
    InvalidPrice,
}

impl PlantDraft {
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Image => self.image = value,
            DraftField::Price => self.price = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parses the price text as a finite, strictly positive number.
    fn parsed_price(&self) -> Option<f64> {
        let price = self.price.trim().parse::<f64>().ok()?;
        (price.is_finite() && price > 0.0).then_some(price)
    }
}

impl TryFrom<&PlantDraft> for NewPlant {
    type Error = DraftError;

    fn try_from(draft: &PlantDraft) -> Result<Self, Self::Error> {
        if draft.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if draft.image.trim().is_empty() {
            return Err(DraftError::MissingImage);
        }
        let price = draft.parsed_price().ok_or(DraftError::InvalidPrice)?;

        // Name and image go out as typed; only the emptiness check trims.
        Ok(NewPlant {
            name: draft.name.clone(),
            image: draft.image.clone(),
            price,
        })
    }
}
