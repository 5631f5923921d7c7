use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    CATALOG_PATH, NEWS_PATH, REDDIT_PATH, SERPAPI_KEY, SERPAPI_PATH, YOUTUBE_PATH, no_credentials,
    reddit_body, serp_body, spawn_app, spawn_app_with_credentials, spawn_app_with_short_timeouts,
    volume, volumes_body, youtube_body,
};

#[tokio::test]
async fn mood_search_sends_keywords_and_maps_books() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("q", "feel-good+humor+optimistic+uplifting"))
        .and(query_param("maxResults", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volumes_body(&[
            volume("Good Omens", "Terry Pratchett"),
            volume("The Hitchhiker's Guide to the Galaxy", "Douglas Adams"),
        ])))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app.get_json("/books", &[("emotion", "Happy")]).await;

    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["title"], "Good Omens");
    assert_eq!(books[0]["authors"][0], "Terry Pratchett");
    assert_eq!(books[0]["description"], "Good Omens by Terry Pratchett.");
    assert_eq!(books[0]["thumbnail"], "http://books.example/thumb.jpg");
    assert_eq!(books[0]["infoLink"], "http://books.example/info");
    assert_eq!(books[0]["publishedDate"], "1965");
    assert!(books[0].get("feedback").is_none());
}

#[tokio::test]
async fn author_search_uses_inauthor_clause() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("q", "inauthor:J.K.+Rowling"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volumes_body(&[volume(
            "Harry Potter and the Philosopher's Stone",
            "J.K. Rowling",
        )])))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app.get_json("/books", &[("author", "J.K. Rowling")]).await;

    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["authors"][0], "J.K. Rowling");
}

#[tokio::test]
async fn empty_search_falls_back_to_bestsellers() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("q", "bestseller"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volumes_body(&[])))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app
        .get_json("/books", &[("emotion", ""), ("author", ""), ("max_results", "")])
        .await;

    assert!(books.is_empty());
}

#[tokio::test]
async fn result_count_is_clamped() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("maxResults", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volumes_body(&[])))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app
        .get_json("/books", &[("emotion", "calm"), ("max_results", "500")])
        .await;

    assert!(books.is_empty());
}

#[tokio::test]
async fn negative_result_count_is_raised_to_one() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("maxResults", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volumes_body(&[])))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app
        .get_json("/books", &[("emotion", "calm"), ("max_results", "-3")])
        .await;

    assert!(books.is_empty());
}

#[tokio::test]
async fn result_count_beyond_u32_is_capped() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("maxResults", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volumes_body(&[])))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app
        .get_json("/books", &[("emotion", "calm"), ("max_results", "99999999999")])
        .await;

    assert!(books.is_empty());
}

#[tokio::test]
async fn catalog_results_are_truncated_to_requested_count() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(volumes_body(&[
            volume("One", "A"),
            volume("Two", "B"),
            volume("Three", "C"),
        ])))
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app
        .get_json("/books", &[("emotion", "sad"), ("max_results", "2")])
        .await;

    assert_eq!(books.len(), 2);
}

#[tokio::test]
async fn catalog_without_items_returns_empty_list() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "kind": "books#volumes", "totalItems": 0 })),
        )
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app.get_json("/books", &[("emotion", "curious")]).await;

    assert!(books.is_empty());
}

#[tokio::test]
async fn catalog_failure_returns_empty_list() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app.get_json("/books", &[("emotion", "scared")]).await;

    assert!(books.is_empty());
}

#[tokio::test]
async fn slow_catalog_times_out_to_empty_list() {
    let app = spawn_app_with_short_timeouts().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(volumes_body(&[volume("Dracula", "Bram Stoker")]))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app.get_json("/books", &[("emotion", "scared")]).await;

    assert!(books.is_empty());
}

#[tokio::test]
async fn malformed_catalog_response_returns_empty_list() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app.get_json("/books", &[("emotion", "romantic")]).await;

    assert!(books.is_empty());
}

#[tokio::test]
async fn include_feedback_attaches_every_source() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(volumes_body(&[volume("Dune", "Frank Herbert")])),
        )
        .mount(&app.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(SERPAPI_PATH))
        .and(query_param("q", "Dune Frank Herbert book review"))
        .and(query_param("api_key", SERPAPI_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(serp_body("A classic.")))
        .expect(1)
        .mount(&app.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(YOUTUBE_PATH))
        .and(query_param("maxResults", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(youtube_body("Watch this.")))
        .expect(1)
        .mount(&app.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(NEWS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(REDDIT_PATH))
        .and(query_param("q", "Dune Frank Herbert book"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(reddit_body(&[("Dune thread", "Spice!")])),
        )
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app
        .get_json(
            "/books",
            &[("author", "Frank Herbert"), ("include_feedback", "true")],
        )
        .await;

    let feedback = &books[0]["feedback"];
    assert_eq!(feedback["serp"][0]["snippet"], "A classic.");
    assert_eq!(
        feedback["youtube"][0]["link"],
        "https://www.youtube.com/watch?v=vid123"
    );
    assert_eq!(feedback["news"], serde_json::json!([]));
    assert_eq!(feedback["reddit"][0]["title"], "Dune thread");
    assert_eq!(
        feedback["reddit"][0]["link"],
        "https://reddit.com/r/books/comments/0/"
    );
}

#[tokio::test]
async fn include_feedback_without_keys_only_asks_reddit() {
    let app = spawn_app_with_credentials(no_credentials()).await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(volumes_body(&[volume("Emma", "Jane Austen")])),
        )
        .mount(&app.mock_server)
        .await;
    for keyed in [SERPAPI_PATH, YOUTUBE_PATH, NEWS_PATH] {
        Mock::given(path(keyed))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&app.mock_server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path(REDDIT_PATH))
        .and(header("user-agent", "book-recommender/0.1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(reddit_body(&[("Emma thoughts", "")])),
        )
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let books: Vec<Value> = app
        .get_json(
            "/books",
            &[("emotion", "romantic"), ("include_feedback", "true")],
        )
        .await;

    let feedback = &books[0]["feedback"];
    assert_eq!(feedback["serp"], serde_json::json!([]));
    assert_eq!(feedback["youtube"], serde_json::json!([]));
    assert_eq!(feedback["news"], serde_json::json!([]));
    assert_eq!(feedback["reddit"][0]["title"], "Emma thoughts");
}
