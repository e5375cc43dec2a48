// tests/support/mod.rs
#![allow(dead_code)]
//
// In-memory repository fakes and a controllable clock. The article listing
// fake evaluates the same `ArticleFilter::matches`/`compare` functions the
// SQL queries mirror, so the filter semantics under test are the production
// ones.
use aboutblog_core::application::ports::{time::Clock, util::SlugGenerator};
use aboutblog_core::application::services::ApplicationServices;
use aboutblog_core::domain::article::{
    Article, ArticleContentUpdate, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleSummary, ArticleWriteRepository, NewArticle,
};
use aboutblog_core::domain::category::{
    Category, CategoryId, CategoryRepository, CategorySlug, NewCategory,
};
use aboutblog_core::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use aboutblog_core::domain::errors::{DomainError, DomainResult};
use aboutblog_core::domain::viewer::{AuthenticatedViewer, Role, Username, Viewer};
use aboutblog_core::infrastructure::util::DefaultSlugGenerator;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

pub static BASE_TIME: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

#[derive(Debug)]
pub struct FixedClock(Mutex<DateTime<Utc>>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.0.lock().unwrap();
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

#[derive(Default)]
struct StoreState {
    articles: Vec<Article>,
    categories: Vec<Category>,
    comments: Vec<Comment>,
    next_article_id: i64,
    next_category_id: i64,
    next_comment_id: i64,
}

#[derive(Default)]
pub struct InMemoryBlogStore {
    state: Mutex<StoreState>,
}

impl InMemoryBlogStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn summarize(state: &StoreState, article: &Article) -> ArticleSummary {
        let category = state
            .categories
            .iter()
            .find(|category| category.id == article.category_id)
            .expect("article references a seeded category");
        let approved_comments = state
            .comments
            .iter()
            .filter(|comment| comment.article_id == article.id && comment.approved)
            .count() as i64;

        ArticleSummary {
            id: article.id,
            author: article.author.as_str().to_string(),
            category_slug: category.slug.as_str().to_string(),
            category_title: category.title.as_str().to_string(),
            title: article.title.as_str().to_string(),
            body: article.body.as_str().to_string(),
            created_at: article.created_at,
            published_at: article.published_at,
            approved_comments,
        }
    }

    fn matching_summaries(
        &self,
        filter: &ArticleFilter,
        now: DateTime<Utc>,
    ) -> Vec<ArticleSummary> {
        let state = self.state.lock().unwrap();
        let mut summaries: Vec<ArticleSummary> = state
            .articles
            .iter()
            .map(|article| Self::summarize(&state, article))
            .filter(|summary| filter.matches(summary, now))
            .collect();
        summaries.sort_by(|a, b| filter.compare(a, b));
        summaries
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryBlogStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        state.next_article_id += 1;
        let stored = Article {
            id: ArticleId::new(state.next_article_id)?,
            author: article.author,
            category_id: article.category_id,
            title: article.title,
            body: article.body,
            created_at: article.created_at,
            published_at: article.published_at,
        };
        state.articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleContentUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.category_id = update.category_id;
        article.title = update.title;
        article.body = update.body;
        Ok(article.clone())
    }

    async fn set_published(
        &self,
        id: ArticleId,
        published_at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.publish(published_at);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|article| article.id != id);
        if state.articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        // Comments cannot outlive their parent article.
        state.comments.retain(|comment| comment.article_id != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryBlogStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }

    async fn count(&self, filter: &ArticleFilter, now: DateTime<Utc>) -> DomainResult<u64> {
        Ok(self.matching_summaries(filter, now).len() as u64)
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        now: DateTime<Utc>,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<ArticleSummary>> {
        Ok(self
            .matching_summaries(filter, now)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryBlogStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if state
            .categories
            .iter()
            .any(|existing| existing.slug == category.slug)
        {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        state.next_category_id += 1;
        let stored = Category {
            id: CategoryId::new(state.next_category_id)?,
            title: category.title,
            description: category.description,
            slug: category.slug,
        };
        state.categories.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .find(|category| category.slug == *slug)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        let mut categories = state.categories.clone();
        categories.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(categories)
    }
}

#[async_trait]
impl CommentRepository for InMemoryBlogStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        state.next_comment_id += 1;
        let stored = Comment {
            id: CommentId::new(state.next_comment_id)?,
            article_id: comment.article_id,
            author: comment.author,
            body: comment.body,
            created_at: comment.created_at,
            approved: false,
        };
        state.comments.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .find(|comment| comment.id == id)
            .cloned())
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|comment| comment.article_id == article_id && comment.created_at <= now)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });
        Ok(comments)
    }

    async fn set_approved(&self, id: CommentId) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        let comment = state
            .comments
            .iter_mut()
            .find(|comment| comment.id == id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.approve();
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.comments.len();
        state.comments.retain(|comment| comment.id != id);
        if state.comments.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

pub struct TestHarness {
    pub store: Arc<InMemoryBlogStore>,
    pub clock: Arc<FixedClock>,
    pub services: ApplicationServices,
}

pub fn harness() -> TestHarness {
    let store = InMemoryBlogStore::new();
    let clock = Arc::new(FixedClock::new(*BASE_TIME));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        clock.clone(),
        slugger,
    );

    TestHarness {
        store,
        clock,
        services,
    }
}

pub fn moderator(name: &str) -> AuthenticatedViewer {
    AuthenticatedViewer::new(Username::new(name).unwrap(), Role::Moderator)
}

pub fn author(name: &str) -> AuthenticatedViewer {
    AuthenticatedViewer::new(Username::new(name).unwrap(), Role::Author)
}

pub fn viewer(name: &str) -> Viewer {
    Viewer::Authenticated(author(name))
}

pub async fn seed_category(harness: &TestHarness, slug: &str) -> Category {
    CategoryRepository::insert(
        harness.store.as_ref(),
        NewCategory {
            title: aboutblog_core::domain::category::CategoryTitle::new(slug.to_uppercase())
                .unwrap(),
            description: format!("articles about {slug}"),
            slug: CategorySlug::new(slug).unwrap(),
        },
    )
    .await
    .unwrap()
}

pub async fn seed_article(
    harness: &TestHarness,
    author: &str,
    category: &Category,
    title: &str,
    body: &str,
    created_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
) -> Article {
    ArticleWriteRepository::insert(
        harness.store.as_ref(),
        NewArticle {
            author: Username::new(author).unwrap(),
            category_id: category.id,
            title: aboutblog_core::domain::article::ArticleTitle::new(title).unwrap(),
            body: aboutblog_core::domain::article::ArticleBody::new(body).unwrap(),
            created_at,
            published_at,
        },
    )
    .await
    .unwrap()
}
