use chrono::DateTime;
use chrono::Utc;

use crate::domain::page::Page;

/// Completed project shown in the portfolio.
///
/// `is_featured` is stored as an integer flag (0 or 1).
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub service_type: Option<String>,
    pub area: Option<String>,
    pub cover_image: Option<String>,
    pub images: Vec<String>,
    pub is_featured: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseFilter {
    pub page: Page,
    pub service_type: Option<String>,
    pub featured: Option<bool>,
}

impl CaseFilter {
    /// Flag value the `featured` criterion selects.
    pub fn featured_flag(&self) -> Option<i32> {
        self.featured.map(i32::from)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCaseCommand {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub service_type: Option<String>,
    pub area: Option<String>,
    pub cover_image: Option<String>,
    pub images: Vec<String>,
    pub is_featured: i32,
}

/// Sparse patch over a case; `Some(None)` clears an optional column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCaseCommand {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub service_type: Option<Option<String>>,
    pub area: Option<Option<String>>,
    pub cover_image: Option<Option<String>>,
    pub images: Option<Vec<String>>,
    pub is_featured: Option<i32>,
}

impl UpdateCaseCommand {
    pub fn apply(self, case: &mut Case) {
        if let Some(title) = self.title {
            case.title = title;
        }
        if let Some(description) = self.description {
            case.description = description;
        }
        if let Some(location) = self.location {
            case.location = location;
        }
        if let Some(service_type) = self.service_type {
            case.service_type = service_type;
        }
        if let Some(area) = self.area {
            case.area = area;
        }
        if let Some(cover_image) = self.cover_image {
            case.cover_image = cover_image;
        }
        if let Some(images) = self.images {
            case.images = images;
        }
        if let Some(is_featured) = self.is_featured {
            case.is_featured = is_featured;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_flag() {
        let mut filter = CaseFilter::default();
        assert_eq!(filter.featured_flag(), None);

        filter.featured = Some(true);
        assert_eq!(filter.featured_flag(), Some(1));

        filter.featured = Some(false);
        assert_eq!(filter.featured_flag(), Some(0));
    }

    #[test]
    fn test_patch_clears_and_sets() {
        let mut case = Case {
            id: 4,
            title: "漳州别墅外墙翻新".to_string(),
            description: Some("独栋别墅外墙全面翻新".to_string()),
            location: Some("漳州市龙文区".to_string()),
            service_type: Some("墙面翻新".to_string()),
            area: Some("300㎡".to_string()),
            cover_image: None,
            images: vec![],
            is_featured: 0,
            created_at: Utc::now(),
            updated_at: None,
        };

        UpdateCaseCommand {
            location: Some(None),
            images: Some(vec!["/uploads/villa.jpg".to_string()]),
            is_featured: Some(1),
            ..Default::default()
        }
        .apply(&mut case);

        assert_eq!(case.location, None);
        assert_eq!(case.images, vec!["/uploads/villa.jpg".to_string()]);
        assert_eq!(case.is_featured, 1);
        assert_eq!(case.area.as_deref(), Some("300㎡"));
        assert_eq!(case.title, "漳州别墅外墙翻新");
    }
}
