// src/domain/article/query.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::category::CategorySlug;
use crate::domain::viewer::Username;
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

/// Listing projection: one row of a paginated article list, joined with its
/// category and the approved-comment tally.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub author: String,
    pub category_slug: String,
    pub category_title: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub approved_comments: i64,
}

impl ArticleSummary {
    fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.published_at.is_some_and(|at| at <= now)
    }
}

/// Explicit query-specification value for the listing engine. Every listing
/// mode is one variant; repositories translate it to SQL and the in-memory
/// test store evaluates `matches`/`compare` directly, so both agree by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFilter {
    All,
    Category(CategorySlug),
    Author(Username),
    Day(NaiveDate),
    Search(String),
    Drafts(Username),
}

impl ArticleFilter {
    pub fn is_drafts(&self) -> bool {
        matches!(self, ArticleFilter::Drafts(_))
    }

    pub fn matches(&self, summary: &ArticleSummary, now: DateTime<Utc>) -> bool {
        match self {
            ArticleFilter::All => summary.is_published(now),
            ArticleFilter::Category(slug) => {
                summary.is_published(now) && summary.category_slug == slug.as_str()
            }
            ArticleFilter::Author(username) => {
                summary.is_published(now) && summary.author == username.as_str()
            }
            ArticleFilter::Day(day) => summary
                .published_at
                .is_some_and(|at| at <= now && at.date_naive() == *day),
            ArticleFilter::Search(term) => {
                summary.is_published(now) && contains_ignore_case(&summary.body, term)
            }
            ArticleFilter::Drafts(username) => {
                summary.published_at.is_none() && summary.author == username.as_str()
            }
        }
    }

    /// Listing order: newest first, title ascending (code-point order) on
    /// equal timestamps. Drafts order on creation time since they have no
    /// published timestamp.
    pub fn compare(&self, a: &ArticleSummary, b: &ArticleSummary) -> Ordering {
        let by_time = if self.is_drafts() {
            b.created_at.cmp(&a.created_at)
        } else {
            b.published_at.cmp(&a.published_at)
        };
        by_time.then_with(|| a.title.cmp(&b.title))
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Escape `%`, `_` and the escape character itself for a `LIKE … ESCAPE '\'`
/// pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Articles per listing page.
pub const PAGE_SIZE: u32 = 4;

/// Requested page number, parsed from an untrusted query parameter. A
/// missing or non-numeric value serves the first page; numbers outside the
/// valid range serve the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    First,
    Number(i64),
}

impl PageRequest {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if !value.is_empty() => match value.parse::<i64>() {
                Ok(number) => PageRequest::Number(number),
                Err(_) => PageRequest::First,
            },
            _ => PageRequest::First,
        }
    }

    /// Clamp to `1..=total_pages` (`total_pages` is at least 1 even for an
    /// empty result).
    pub fn resolve(self, total_pages: u64) -> u64 {
        let total_pages = total_pages.max(1);
        match self {
            PageRequest::First => 1,
            PageRequest::Number(number) if number >= 1 && (number as u64) <= total_pages => {
                number as u64
            }
            PageRequest::Number(_) => total_pages,
        }
    }
}
