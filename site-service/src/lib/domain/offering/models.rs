use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::offering::errors::SlugError;

/// A service the company sells, addressed publicly by its slug.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOffering {
    pub id: i64,
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub features: Vec<String>,
    pub price_range: Option<String>,
    pub duration: Option<String>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// URL identifier of a service offering; unique across offerings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    const MAX_LENGTH: usize = 50;

    /// # Errors
    /// * `Empty` - Slug is empty
    /// * `TooLong` - Slug longer than 50 characters
    pub fn new(slug: String) -> Result<Self, SlugError> {
        let length = slug.chars().count();
        if length == 0 {
            Err(SlugError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(slug))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateOfferingCommand {
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub features: Vec<String>,
    pub price_range: Option<String>,
    pub duration: Option<String>,
    pub is_featured: bool,
    pub sort_order: i32,
}

/// Sparse patch over a service offering; `Some(None)` clears an optional column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOfferingCommand {
    pub name: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<Option<String>>,
    pub icon: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub features: Option<Vec<String>>,
    pub price_range: Option<Option<String>>,
    pub duration: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
}

impl UpdateOfferingCommand {
    /// Slug the patch moves the offering to, if it differs from the current one.
    pub fn slug_change(&self, current: &ServiceOffering) -> Option<&Slug> {
        self.slug.as_ref().filter(|slug| **slug != current.slug)
    }

    pub fn apply(self, offering: &mut ServiceOffering) {
        if let Some(name) = self.name {
            offering.name = name;
        }
        if let Some(slug) = self.slug {
            offering.slug = slug;
        }
        if let Some(description) = self.description {
            offering.description = description;
        }
        if let Some(icon) = self.icon {
            offering.icon = icon;
        }
        if let Some(image) = self.image {
            offering.image = image;
        }
        if let Some(features) = self.features {
            offering.features = features;
        }
        if let Some(price_range) = self.price_range {
            offering.price_range = price_range;
        }
        if let Some(duration) = self.duration {
            offering.duration = duration;
        }
        if let Some(is_featured) = self.is_featured {
            offering.is_featured = is_featured;
        }
        if let Some(sort_order) = self.sort_order {
            offering.sort_order = sort_order;
        }
    }
}
