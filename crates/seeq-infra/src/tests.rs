#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use seeq_core::domain::{PostInput, SummaryDraft};
    use seeq_core::ports::{Latency, Operation, SummaryError, SummaryGenerator, SummaryRequest};
    use seeq_core::{BlogService, DomainError, PostFilter};

    use crate::latency::{NoLatency, SimulatedLatency};
    use crate::store::{InMemoryCategoryRepository, InMemoryPostRepository};
    use crate::summary::TemplateSummaryGenerator;

    fn service_with(
        summarizer: Arc<dyn SummaryGenerator>,
        latency: Arc<dyn Latency>,
    ) -> BlogService {
        BlogService::new(
            Arc::new(InMemoryPostRepository::seeded()),
            Arc::new(InMemoryCategoryRepository::seeded()),
            summarizer,
            latency,
        )
    }

    fn seeded_service() -> BlogService {
        service_with(Arc::new(TemplateSummaryGenerator::new()), Arc::new(NoLatency))
    }

    fn ids(posts: &[seeq_core::domain::Post]) -> Vec<i64> {
        posts.iter().map(|p| p.id).collect()
    }

    struct FailingSummarizer;

    #[async_trait]
    impl SummaryGenerator for FailingSummarizer {
        async fn generate(
            &self,
            _request: SummaryRequest<'_>,
        ) -> Result<SummaryDraft, SummaryError> {
            Err(SummaryError::Unavailable("model offline".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingLatency {
        seen: Mutex<Vec<Operation>>,
    }

    #[async_trait]
    impl Latency for RecordingLatency {
        async fn simulate(&self, operation: Operation) {
            self.seen.lock().unwrap().push(operation);
        }
    }

    #[tokio::test]
    async fn test_search_finds_only_matching_post() {
        let service = seeded_service();
        let posts = service
            .list_posts(&PostFilter::new().with_search("머신러닝"))
            .await
            .unwrap();
        assert_eq!(ids(&posts), vec![1]);
    }

    #[tokio::test]
    async fn test_category_filter() {
        let service = seeded_service();
        let posts = service
            .list_posts(&PostFilter::new().with_category(2))
            .await
            .unwrap();
        assert_eq!(ids(&posts), vec![2]);
        assert_eq!(posts[0].category.name, "독서");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let service = seeded_service();
        let upper = service
            .list_posts(&PostFilter::new().with_search("MACHINE LEARNING"))
            .await
            .unwrap();
        assert_eq!(ids(&upper), vec![1]);
    }

    #[tokio::test]
    async fn test_no_match_is_empty_not_error() {
        let service = seeded_service();
        let posts = service
            .list_posts(&PostFilter::new().with_search("없는검색어").with_category(1))
            .await
            .unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_create_scenario() {
        let service = seeded_service();
        let post = service.create_post(PostInput::new("T", "C", 1)).await.unwrap();

        assert_eq!(post.id, 4);
        assert_eq!(post.category.name, "학습");
        let summary = post.summary.as_ref().expect("created posts carry a summary");
        assert_eq!(summary.confidence_score, 0.89);
        assert_eq!(summary.post_id, 4);

        let all = service.list_posts(&PostFilter::new()).await.unwrap();
        assert_eq!(ids(&all), vec![4, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_create_ids_strictly_increase() {
        let service = seeded_service();
        let mut last = 3;
        for n in 0..5 {
            let post = service
                .create_post(PostInput::new(format!("post {n}"), "body", 3))
                .await
                .unwrap();
            assert!(post.id > last);
            assert!(post.summary.is_some());
            last = post.id;
        }
    }

    #[tokio::test]
    async fn test_create_with_unknown_category() {
        let service = seeded_service();
        let err = service
            .create_post(PostInput::new("T", "C", 99))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCategory(99)));

        let all = service.list_posts(&PostFilter::new()).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_create_keeps_image_url() {
        let service = seeded_service();
        let input = PostInput::new("T", "C", 4).with_image_url("https://example.com/cover.png");
        let post = service.create_post(input).await.unwrap();
        assert_eq!(post.image_url.as_deref(), Some("https://example.com/cover.png"));
    }

    #[tokio::test]
    async fn test_delete_scenario() {
        let service = seeded_service();
        service.create_post(PostInput::new("T", "C", 1)).await.unwrap();
        service.delete_post(2).await.unwrap();

        let all = service.list_posts(&PostFilter::new()).await.unwrap();
        assert_eq!(ids(&all), vec![4, 1, 3]);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn test_get_after_delete_is_not_found() {
        let service = seeded_service();
        service.delete_post(1).await.unwrap();

        let err = service.get_post(1).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity_type: "post", id: 1 }));

        let err = service.delete_post(1).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_without_regeneration_keeps_summary() {
        let service = seeded_service();
        let before = service.get_post(1).await.unwrap();

        let after = service
            .update_post(1, PostInput::new("새 제목", "새 내용", 3), false)
            .await
            .unwrap();

        assert_eq!(after.title, "새 제목");
        assert_eq!(after.category.name, "일상");
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= after.created_at);
        assert_eq!(after.summary, before.summary);
    }

    #[tokio::test]
    async fn test_update_with_regeneration_replaces_content_keeps_identity() {
        let service = seeded_service();
        let before = service.get_post(2).await.unwrap().summary.unwrap();

        let first = service
            .update_post(2, PostInput::new("클린 코드 2판", "내용", 2), true)
            .await
            .unwrap()
            .summary
            .unwrap();
        assert_eq!(first.id, before.id);
        assert_eq!(first.post_id, before.post_id);
        assert_ne!(first.summary, before.summary);
        assert_ne!(first.highlights, before.highlights);
        assert_ne!(first.keywords, before.keywords);

        let second = service
            .update_post(2, PostInput::new("클린 코드 2판", "내용", 2), true)
            .await
            .unwrap()
            .summary
            .unwrap();
        assert_eq!(second.id, before.id);
        assert_ne!(second.summary, first.summary);
        assert_ne!(second.highlights, first.highlights);
        assert_ne!(second.keywords, first.keywords);
    }

    #[tokio::test]
    async fn test_update_clears_image_when_omitted() {
        let service = seeded_service();
        let post = service
            .create_post(PostInput::new("T", "C", 1).with_image_url("https://example.com/a.png"))
            .await
            .unwrap();
        let updated = service
            .update_post(post.id, PostInput::new("T", "C", 1), false)
            .await
            .unwrap();
        assert!(updated.image_url.is_none());
    }

    #[tokio::test]
    async fn test_update_errors() {
        let service = seeded_service();
        let err = service
            .update_post(42, PostInput::new("T", "C", 99), false)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id: 42, .. }));

        let err = service
            .update_post(1, PostInput::new("T", "C", 99), false)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCategory(99)));

        let unchanged = service.get_post(1).await.unwrap();
        assert_eq!(unchanged.title, "머신러닝 기초 이론 정리");
    }

    #[tokio::test]
    async fn test_list_categories_is_a_copy() {
        let service = seeded_service();
        let mut categories = service.list_categories().await.unwrap();
        assert_eq!(categories.len(), 4);
        categories.pop();
        assert_eq!(service.list_categories().await.unwrap().len(), 4);

        assert_eq!(service.get_category(2).await.unwrap().name, "독서");
        assert!(matches!(
            service.get_category(9).await.unwrap_err(),
            DomainError::NotFound { entity_type: "category", id: 9 }
        ));
    }

    #[tokio::test]
    async fn test_regenerate_summary_endpoint() {
        let service = seeded_service();
        let before = service.get_post(3).await.unwrap();
        let summary = service.regenerate_summary(3).await.unwrap();

        assert_eq!(summary.id, 3);
        assert_eq!(summary.revision, 2);
        assert_ne!(Some(&summary.summary), before.summary.as_ref().map(|s| &s.summary));

        let after = service.get_post(3).await.unwrap();
        assert_eq!(after.title, before.title);
        assert_eq!(after.summary, Some(summary));

        assert!(matches!(
            service.regenerate_summary(77).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_preview_summary_stores_nothing() {
        let service = seeded_service();
        let draft = service.preview_summary("미리보기", "내용", 2).await.unwrap();
        assert!(draft.summary.contains("독서"));
        assert_eq!(service.list_posts(&PostFilter::new()).await.unwrap().len(), 3);

        assert!(matches!(
            service.preview_summary("x", "y", 0).await.unwrap_err(),
            DomainError::InvalidCategory(0)
        ));
    }

    #[tokio::test]
    async fn test_failed_summary_still_creates_post() {
        let service = service_with(Arc::new(FailingSummarizer), Arc::new(NoLatency));

        let post = service.create_post(PostInput::new("T", "C", 1)).await.unwrap();
        assert!(post.summary.is_none());

        let kept = service.get_post(1).await.unwrap().summary;
        let updated = service
            .update_post(1, PostInput::new("T", "C", 1), true)
            .await
            .unwrap();
        assert_eq!(updated.summary, kept);

        assert!(matches!(
            service.regenerate_summary(1).await.unwrap_err(),
            DomainError::Internal(_)
        ));
    }

    #[tokio::test]
    async fn test_every_operation_pays_latency() {
        let latency = Arc::new(RecordingLatency::default());
        let service = service_with(Arc::new(TemplateSummaryGenerator::new()), latency.clone());

        service.list_posts(&PostFilter::new()).await.unwrap();
        service.get_post(1).await.unwrap();
        let post = service.create_post(PostInput::new("T", "C", 1)).await.unwrap();
        service
            .update_post(post.id, PostInput::new("T2", "C2", 1), false)
            .await
            .unwrap();
        service.delete_post(post.id).await.unwrap();
        service.list_categories().await.unwrap();

        let seen = latency.seen.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                Operation::ListPosts,
                Operation::GetPost,
                Operation::CreatePost,
                Operation::UpdatePost,
                Operation::DeletePost,
                Operation::ListCategories,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_create_takes_two_seconds() {
        let service = service_with(
            Arc::new(TemplateSummaryGenerator::new()),
            Arc::new(SimulatedLatency::default()),
        );
        let start = tokio::time::Instant::now();
        service.create_post(PostInput::new("T", "C", 1)).await.unwrap();
        assert!(start.elapsed() >= std::time::Duration::from_secs(2));
    }
}
