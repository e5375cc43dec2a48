// tests/article_query_tests.rs
mod support;

use aboutblog_core::application::error::ApplicationError;
use aboutblog_core::application::queries::articles::{
    GetArticleQuery, ListArticlesQuery, ListByAuthorQuery, ListByCategoryQuery, ListByDayQuery,
    ListDraftsQuery, SearchArticlesQuery,
};
use aboutblog_core::domain::viewer::Viewer;
use chrono::{Datelike, Duration};
use support::{BASE_TIME, author, harness, seed_article, seed_category, viewer};

fn titles(page: &aboutblog_core::application::dto::Page<aboutblog_core::application::dto::ArticleSummaryDto>) -> Vec<String> {
    page.items.iter().map(|item| item.title.clone()).collect()
}

#[tokio::test]
async fn listing_includes_only_published_articles() {
    let h = harness();
    let category = seed_category(&h, "news").await;
    let now = *BASE_TIME;

    seed_article(&h, "ana", &category, "Visible", "text", now, Some(now - Duration::hours(1)))
        .await;
    seed_article(&h, "ana", &category, "Draft", "text", now, None).await;
    seed_article(&h, "ana", &category, "Scheduled", "text", now, Some(now + Duration::hours(1)))
        .await;

    let page = h
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: None })
        .await
        .unwrap();

    assert_eq!(titles(&page), vec!["Visible"]);
    assert_eq!(page.total, 1);
    assert!(!page.unavailable);
}

#[tokio::test]
async fn listing_orders_newest_first_with_title_tiebreak() {
    let h = harness();
    let category = seed_category(&h, "news").await;
    let now = *BASE_TIME;
    let same_instant = now - Duration::hours(2);

    seed_article(&h, "ana", &category, "Zeta", "text", now, Some(same_instant)).await;
    seed_article(&h, "ana", &category, "Alpha", "text", now, Some(same_instant)).await;
    seed_article(&h, "ana", &category, "Newest", "text", now, Some(now - Duration::hours(1)))
        .await;

    let page = h
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: None })
        .await
        .unwrap();

    assert_eq!(titles(&page), vec!["Newest", "Alpha", "Zeta"]);
}

#[tokio::test]
async fn hyphenated_titles_sort_by_code_point() {
    let h = harness();
    let category = seed_category(&h, "news").await;
    let now = *BASE_TIME;
    let same_instant = now - Duration::hours(1);

    seed_article(&h, "ana", &category, "B-Post", "text", now, Some(same_instant)).await;
    seed_article(&h, "ana", &category, "A-Post", "text", now, Some(same_instant)).await;

    let page = h
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: None })
        .await
        .unwrap();

    assert_eq!(titles(&page), vec!["A-Post", "B-Post"]);
}

async fn seed_ten_posts(h: &support::TestHarness) {
    let category = seed_category(h, "news").await;
    let now = *BASE_TIME;
    for i in 1..=10 {
        seed_article(
            h,
            "ana",
            &category,
            &format!("Post {i:02}"),
            "text",
            now,
            Some(now - Duration::hours(i)),
        )
        .await;
    }
}

#[tokio::test]
async fn non_numeric_page_serves_the_first_page() {
    let h = harness();
    seed_ten_posts(&h).await;

    let page = h
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: Some("abc".into()),
        })
        .await
        .unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(titles(&page), vec!["Post 01", "Post 02", "Post 03", "Post 04"]);
    assert_eq!((page.start_index, page.end_index), (1, 4));
    assert!(!page.has_previous);
    assert!(page.has_next);
}

#[tokio::test]
async fn overflowing_page_serves_the_last_page() {
    let h = harness();
    seed_ten_posts(&h).await;

    let page = h
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: Some("999".into()),
        })
        .await
        .unwrap();

    assert_eq!(page.page, 3);
    assert_eq!(page.total_pages, 3);
    assert_eq!(titles(&page), vec!["Post 09", "Post 10"]);
    assert_eq!((page.start_index, page.end_index), (9, 10));
    assert!(page.has_previous);
    assert!(!page.has_next);
}

#[tokio::test]
async fn zero_page_serves_the_last_page() {
    let h = harness();
    seed_ten_posts(&h).await;

    let page = h
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: Some("0".into()),
        })
        .await
        .unwrap();

    assert_eq!(page.page, 3);
}

#[tokio::test]
async fn empty_listing_is_unavailable_not_an_error() {
    let h = harness();
    seed_category(&h, "news").await;

    let page = h
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: None })
        .await
        .unwrap();

    assert!(page.unavailable);
    assert_eq!(page.total, 0);
    assert_eq!(page.page, 1);
    assert_eq!((page.start_index, page.end_index), (0, 0));
}

#[tokio::test]
async fn category_listing_filters_by_slug() {
    let h = harness();
    let news = seed_category(&h, "news").await;
    let sports = seed_category(&h, "sports").await;
    let now = *BASE_TIME;

    seed_article(&h, "ana", &news, "In News", "text", now, Some(now - Duration::hours(1))).await;
    seed_article(&h, "ana", &sports, "In Sports", "text", now, Some(now - Duration::hours(1)))
        .await;

    let page = h
        .services
        .article_queries
        .list_by_category(ListByCategoryQuery {
            slug: "news".into(),
            page: None,
        })
        .await
        .unwrap();

    assert_eq!(titles(&page), vec!["In News"]);
    assert_eq!(page.items[0].category_slug, "news");
}

#[tokio::test]
async fn author_listing_filters_by_username() {
    let h = harness();
    let category = seed_category(&h, "news").await;
    let now = *BASE_TIME;

    seed_article(&h, "ana", &category, "By Ana", "text", now, Some(now - Duration::hours(1)))
        .await;
    seed_article(&h, "bob", &category, "By Bob", "text", now, Some(now - Duration::hours(1)))
        .await;

    let page = h
        .services
        .article_queries
        .list_by_author(ListByAuthorQuery {
            username: "bob".into(),
            page: None,
        })
        .await
        .unwrap();

    assert_eq!(titles(&page), vec!["By Bob"]);
}

#[tokio::test]
async fn day_listing_matches_the_publication_date() {
    let h = harness();
    let category = seed_category(&h, "news").await;
    let now = *BASE_TIME;
    let yesterday = now - Duration::days(1);

    seed_article(&h, "ana", &category, "Today", "text", now, Some(now - Duration::hours(1)))
        .await;
    seed_article(&h, "ana", &category, "Yesterday", "text", now, Some(yesterday)).await;

    let page = h
        .services
        .article_queries
        .list_by_day(ListByDayQuery {
            year: yesterday.year(),
            month: yesterday.month(),
            day: yesterday.day(),
            page: None,
        })
        .await
        .unwrap();

    assert_eq!(titles(&page), vec!["Yesterday"]);
}

#[tokio::test]
async fn impossible_date_is_an_empty_result() {
    let h = harness();

    let page = h
        .services
        .article_queries
        .list_by_day(ListByDayQuery {
            year: 2024,
            month: 13,
            day: 40,
            page: None,
        })
        .await
        .unwrap();

    assert!(page.unavailable);
}

#[tokio::test]
async fn search_matches_body_substrings_case_insensitively() {
    let h = harness();
    let category = seed_category(&h, "news").await;
    let now = *BASE_TIME;

    seed_article(
        &h,
        "ana",
        &category,
        "Fox Story",
        "The Quick Brown Fox",
        now,
        Some(now - Duration::hours(1)),
    )
    .await;
    seed_article(&h, "ana", &category, "Other", "nothing here", now, Some(now - Duration::hours(1)))
        .await;

    let page = h
        .services
        .article_queries
        .search_articles(SearchArticlesQuery {
            term: Some("quick brown".into()),
            page: None,
        })
        .await
        .unwrap();

    assert_eq!(titles(&page), vec!["Fox Story"]);
}

#[tokio::test]
async fn empty_search_term_finds_nothing() {
    let h = harness();
    let category = seed_category(&h, "news").await;
    let now = *BASE_TIME;
    seed_article(&h, "ana", &category, "Anything", "text", now, Some(now - Duration::hours(1)))
        .await;

    for term in [None, Some(String::new()), Some("   ".into())] {
        let page = h
            .services
            .article_queries
            .search_articles(SearchArticlesQuery { term, page: None })
            .await
            .unwrap();
        assert!(page.unavailable);
        assert_eq!(page.total, 0);
    }
}

#[tokio::test]
async fn search_never_reaches_unpublished_bodies() {
    let h = harness();
    let category = seed_category(&h, "news").await;
    let now = *BASE_TIME;
    seed_article(&h, "ana", &category, "Draft", "secret plans", now, None).await;

    let page = h
        .services
        .article_queries
        .search_articles(SearchArticlesQuery {
            term: Some("secret".into()),
            page: None,
        })
        .await
        .unwrap();

    assert!(page.unavailable);
}

#[tokio::test]
async fn drafts_listing_is_owner_scoped_and_ordered_by_creation() {
    let h = harness();
    let category = seed_category(&h, "news").await;
    let now = *BASE_TIME;

    seed_article(&h, "ana", &category, "Older Draft", "text", now - Duration::hours(2), None)
        .await;
    seed_article(&h, "ana", &category, "Newer Draft", "text", now - Duration::hours(1), None)
        .await;
    seed_article(&h, "bob", &category, "Bob Draft", "text", now, None).await;
    seed_article(&h, "ana", &category, "Scheduled", "text", now, Some(now + Duration::hours(1)))
        .await;

    let page = h
        .services
        .article_queries
        .list_drafts(&author("ana"), ListDraftsQuery { page: None })
        .await
        .unwrap();

    assert_eq!(titles(&page), vec!["Newer Draft", "Older Draft"]);
}

#[tokio::test]
async fn draft_detail_is_owner_only() {
    let h = harness();
    let category = seed_category(&h, "news").await;
    let draft = seed_article(&h, "ana", &category, "Draft", "text", *BASE_TIME, None).await;
    let query = GetArticleQuery {
        id: draft.id.into(),
    };

    let anonymous = h
        .services
        .article_queries
        .get_article(&Viewer::Anonymous, query)
        .await;
    assert!(matches!(anonymous, Err(ApplicationError::NotFound(_))));

    let other = h
        .services
        .article_queries
        .get_article(&viewer("bob"), query)
        .await;
    assert!(matches!(other, Err(ApplicationError::NotFound(_))));

    let owner = h
        .services
        .article_queries
        .get_article(&viewer("ana"), query)
        .await
        .unwrap();
    assert_eq!(owner.article.title, "Draft");
}

#[tokio::test]
async fn publication_becomes_listed_once_its_time_passes() {
    let h = harness();
    let category = seed_category(&h, "news").await;
    let publish_at = *BASE_TIME + Duration::hours(1);
    seed_article(&h, "ana", &category, "Later", "text", *BASE_TIME, Some(publish_at)).await;

    let before = h
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: None })
        .await
        .unwrap();
    assert!(before.unavailable);

    h.clock.set(publish_at);
    let after = h
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: None })
        .await
        .unwrap();
    assert_eq!(titles(&after), vec!["Later"]);
}

#[tokio::test]
async fn summaries_carry_the_approved_comment_tally() {
    let h = harness();
    let category = seed_category(&h, "news").await;
    let now = *BASE_TIME;
    let article =
        seed_article(&h, "ana", &category, "Counted", "text", now, Some(now - Duration::hours(1)))
            .await;

    use aboutblog_core::application::commands::comments::{
        ApproveCommentCommand, CreateCommentCommand,
    };
    let first = h
        .services
        .comment_commands
        .create_comment(
            &Viewer::Anonymous,
            CreateCommentCommand {
                article_id: article.id.into(),
                author: Some("visitor".into()),
                body: Some("first".into()),
            },
        )
        .await
        .unwrap();
    h.services
        .comment_commands
        .create_comment(
            &Viewer::Anonymous,
            CreateCommentCommand {
                article_id: article.id.into(),
                author: Some("visitor".into()),
                body: Some("second".into()),
            },
        )
        .await
        .unwrap();
    h.services
        .comment_commands
        .approve_comment(&support::moderator("mod"), ApproveCommentCommand { id: first.id })
        .await
        .unwrap();

    let page = h
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: None })
        .await
        .unwrap();

    assert_eq!(page.items[0].approved_comments, 1);
}
