use chrono::DateTime;
use chrono::Utc;

use crate::domain::page::Page;

/// Category assigned when a news item is created without one.
pub const DEFAULT_CATEGORY: &str = "公司新闻";

/// Published article.
#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub images: Vec<String>,
    pub category: String,
    pub is_published: bool,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Listing criteria; results are newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFilter {
    pub page: Page,
    pub category: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateNewsCommand {
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub images: Vec<String>,
    pub category: String,
    pub is_published: bool,
}

/// Sparse patch over a news item.
///
/// `None` leaves a field untouched. For the optional columns `Some(None)`
/// clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateNewsCommand {
    pub title: Option<String>,
    pub summary: Option<Option<String>>,
    pub content: Option<String>,
    pub cover_image: Option<Option<String>>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
}

impl UpdateNewsCommand {
    pub fn apply(self, news: &mut News) {
        if let Some(title) = self.title {
            news.title = title;
        }
        if let Some(summary) = self.summary {
            news.summary = summary;
        }
        if let Some(content) = self.content {
            news.content = content;
        }
        if let Some(cover_image) = self.cover_image {
            news.cover_image = cover_image;
        }
        if let Some(images) = self.images {
            news.images = images;
        }
        if let Some(category) = self.category {
            news.category = category;
        }
        if let Some(is_published) = self.is_published {
            news.is_published = is_published;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> News {
        News {
            id: 1,
            title: "墙面翻新需要注意的五个要点".to_string(),
            summary: Some("summary".to_string()),
            content: "content".to_string(),
            cover_image: Some("/uploads/cover.jpg".to_string()),
            images: vec!["/uploads/a.jpg".to_string()],
            category: "装修知识".to_string(),
            is_published: true,
            view_count: 12,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let original = sample();
        let mut news = original.clone();
        UpdateNewsCommand::default().apply(&mut news);
        assert_eq!(news, original);
    }

    #[test]
    fn test_patch_touches_only_named_fields() {
        let mut news = sample();
        UpdateNewsCommand {
            title: Some("新标题".to_string()),
            cover_image: Some(None),
            is_published: Some(false),
            ..Default::default()
        }
        .apply(&mut news);

        assert_eq!(news.title, "新标题");
        assert_eq!(news.cover_image, None);
        assert!(!news.is_published);
        assert_eq!(news.summary.as_deref(), Some("summary"));
        assert_eq!(news.images, vec!["/uploads/a.jpg".to_string()]);
        assert_eq!(news.category, "装修知识");
        assert_eq!(news.view_count, 12);
    }
}
