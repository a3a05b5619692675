use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::news::errors::NewsError;
use crate::domain::news::models::CreateNewsCommand;
use crate::domain::news::models::News;
use crate::domain::news::models::NewsFilter;
use crate::domain::news::models::UpdateNewsCommand;
use crate::domain::news::ports::NewsRepository;
use crate::domain::news::ports::NewsServicePort;

pub struct NewsService<NR>
where
    NR: NewsRepository,
{
    repository: Arc<NR>,
}

impl<NR> NewsService<NR>
where
    NR: NewsRepository,
{
    pub fn new(repository: Arc<NR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<NR> NewsServicePort for NewsService<NR>
where
    NR: NewsRepository,
{
    async fn list_news(&self, filter: NewsFilter) -> Result<Vec<News>, NewsError> {
        self.repository.list(&filter).await
    }

    async fn view_news(&self, id: i64) -> Result<News, NewsError> {
        self.repository
            .increment_view_count(id)
            .await?
            .ok_or(NewsError::NotFound(id))
    }

    async fn create_news(&self, command: CreateNewsCommand) -> Result<News, NewsError> {
        if command.title.trim().is_empty() {
            return Err(NewsError::EmptyTitle);
        }

        let news = self.repository.create(command).await?;
        tracing::info!(news_id = news.id, title = %news.title, "News created");

        Ok(news)
    }

    async fn update_news(&self, id: i64, command: UpdateNewsCommand) -> Result<News, NewsError> {
        let mut news = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NewsError::NotFound(id))?;

        command.apply(&mut news);
        if news.title.trim().is_empty() {
            return Err(NewsError::EmptyTitle);
        }

        self.repository.update(news).await
    }

    async fn delete_news(&self, id: i64) -> Result<(), NewsError> {
        if !self.repository.delete(id).await? {
            return Err(NewsError::NotFound(id));
        }

        tracing::info!(news_id = id, "News deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestNewsRepository {}

        #[async_trait]
        impl NewsRepository for TestNewsRepository {
            async fn list(&self, filter: &NewsFilter) -> Result<Vec<News>, NewsError>;
            async fn find_by_id(&self, id: i64) -> Result<Option<News>, NewsError>;
            async fn increment_view_count(&self, id: i64) -> Result<Option<News>, NewsError>;
            async fn create(&self, command: CreateNewsCommand) -> Result<News, NewsError>;
            async fn update(&self, news: News) -> Result<News, NewsError>;
            async fn delete(&self, id: i64) -> Result<bool, NewsError>;
        }
    }

    fn news(id: i64) -> News {
        News {
            id,
            title: "宜然焕新完成福州某大型商业综合体焕新项目".to_string(),
            summary: None,
            content: "content".to_string(),
            cover_image: None,
            images: vec![],
            category: "公司新闻".to_string(),
            is_published: true,
            view_count: 892,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_view_news_counts_view() {
        let mut repository = MockTestNewsRepository::new();
        repository
            .expect_increment_view_count()
            .with(eq(3))
            .times(1)
            .returning(|id| {
                let mut viewed = news(id);
                viewed.view_count += 1;
                Ok(Some(viewed))
            });

        let service = NewsService::new(Arc::new(repository));
        let viewed = service.view_news(3).await.unwrap();
        assert_eq!(viewed.view_count, 893);
    }

    #[tokio::test]
    async fn test_view_missing_news() {
        let mut repository = MockTestNewsRepository::new();
        repository
            .expect_increment_view_count()
            .returning(|_| Ok(None));

        let service = NewsService::new(Arc::new(repository));
        assert_eq!(service.view_news(42).await, Err(NewsError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_update_applies_patch_before_saving() {
        let mut repository = MockTestNewsRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(news(id))));
        repository
            .expect_update()
            .withf(|saved| saved.category == "行业动态" && saved.view_count == 892)
            .times(1)
            .returning(Ok);

        let service = NewsService::new(Arc::new(repository));
        let command = UpdateNewsCommand {
            category: Some("行业动态".to_string()),
            ..Default::default()
        };

        let updated = service.update_news(1, command).await.unwrap();
        assert_eq!(updated.category, "行业动态");
    }

    #[tokio::test]
    async fn test_update_rejects_blank_title() {
        let mut repository = MockTestNewsRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(news(id))));
        repository.expect_update().times(0);

        let service = NewsService::new(Arc::new(repository));
        let command = UpdateNewsCommand {
            title: Some("  ".to_string()),
            ..Default::default()
        };

        assert_eq!(
            service.update_news(1, command).await,
            Err(NewsError::EmptyTitle)
        );
    }

    #[tokio::test]
    async fn test_delete_missing_news() {
        let mut repository = MockTestNewsRepository::new();
        repository.expect_delete().returning(|_| Ok(false));

        let service = NewsService::new(Arc::new(repository));
        assert_eq!(service.delete_news(9).await, Err(NewsError::NotFound(9)));
    }
}
