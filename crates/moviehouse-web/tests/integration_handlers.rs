//! End-to-end handler tests over an in-memory database.
//!
//! Each test builds the full router with real SQLite repositories and
//! the embedded tera renderer, then drives it with `tower::oneshot`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use moviehouse_core::{MovieRepository, Renderer};
use moviehouse_db::TestDb;
use moviehouse_web::{TeraRenderer, WebContext, create_router};

async fn test_app() -> (TestDb, Router) {
    let db = TestDb::new().await.unwrap();
    let renderer: Arc<dyn Renderer> = Arc::new(TeraRenderer::new().unwrap());
    let app = create_router(WebContext::new(db.repos(), renderer));
    (db, app)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn list_shows_movies_in_store_order_and_comments_reversed() {
    let (db, app) = test_app().await;

    db.seed_movie("Alpha Movie", "comedy", 1.0).await.unwrap();
    db.seed_movie("Beta Movie", "horror", 2.0).await.unwrap();
    db.seed_comment("ann", "comment one").await.unwrap();
    db.seed_comment("bob", "comment two").await.unwrap();
    db.seed_comment("cat", "comment three").await.unwrap();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);

    // Movies keep insertion order
    let alpha = body.find("Alpha Movie").unwrap();
    let beta = body.find("Beta Movie").unwrap();
    assert!(alpha < beta);

    // Comments are reversed: most recent first
    let one = body.find("comment one").unwrap();
    let two = body.find("comment two").unwrap();
    let three = body.find("comment three").unwrap();
    assert!(three < two);
    assert!(two < one);
}

#[tokio::test]
async fn empty_store_renders_an_empty_list_not_an_error() {
    let (_db, app) = test_app().await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No comments yet"));
    assert!(!body.contains("problem"));
}

#[tokio::test]
async fn delete_existing_movie_shows_list_without_it() {
    let (db, app) = test_app().await;
    let id = db.seed_movie("Doomed Movie", "drama", 3.0).await.unwrap();

    let (status, body) = get(&app, &format!("/delete?id={id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Doomed Movie"));
    assert_eq!(db.movie_count().await.unwrap(), 0);
}

#[tokio::test]
async fn second_delete_of_same_id_routes_to_error_view() {
    let (db, app) = test_app().await;
    let id = db.seed_movie("Doomed Movie", "drama", 3.0).await.unwrap();

    let (first_status, _) = get(&app, &format!("/delete?id={id}")).await;
    assert_eq!(first_status, StatusCode::OK);

    let (second_status, body) = get(&app, &format!("/delete?id={id}")).await;
    assert_eq!(second_status, StatusCode::OK);
    assert!(body.contains(&format!(
        "there was a problem trying to delete Movie with ID = {id}"
    )));
}

#[tokio::test]
async fn delete_of_missing_id_shows_error_and_preserves_store() {
    let (db, app) = test_app().await;
    db.seed_movie("Keeper", "comedy", 1.0).await.unwrap();

    let (status, body) = get(&app, "/delete?id=999").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("999"));
    assert!(body.contains("delete"));
    assert_eq!(db.movie_count().await.unwrap(), 1);
}

#[tokio::test]
async fn delete_with_malformed_id_shows_error() {
    let (_db, app) = test_app().await;

    let (status, body) = get(&app, "/delete?id=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("abc"));
}

#[tokio::test]
async fn new_form_renders_empty_form() {
    let (_db, app) = test_app().await;

    let (status, body) = get(&app, "/new").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"action="/new""#));
    assert!(body.contains(r#"name="title""#));
}

#[tokio::test]
async fn create_movie_shows_list_with_new_zero_vote_entry() {
    let (db, app) = test_app().await;

    let (status, body) = post_form(&app, "/new", "title=X&category=Y&price=9.99").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("X"));
    assert!(body.contains("no votes yet"));

    let movies = db.movie_repository().list().await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "X");
    assert_eq!(movies[0].vote_total, 0);
    assert_eq!(movies[0].num_votes, 0);
}

#[tokio::test]
async fn create_with_invalid_price_shows_validation_error() {
    let (db, app) = test_app().await;

    let (status, body) = post_form(&app, "/new", "title=X&category=Y&price=cheap").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("invalid price"));
    assert_eq!(db.movie_count().await.unwrap(), 0);
}

#[tokio::test]
async fn create_with_missing_title_shows_validation_error() {
    let (db, app) = test_app().await;

    let (status, body) = post_form(&app, "/new", "category=Y&price=1.0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("title must not be empty"));
    assert_eq!(db.movie_count().await.unwrap(), 0);
}

#[tokio::test]
async fn edit_form_is_prepopulated_with_the_movie() {
    let (db, app) = test_app().await;
    let id = db.seed_movie("Gladiator", "action", 8.0).await.unwrap();

    let (status, body) = get(&app, &format!("/edit?id={id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="Gladiator""#));
    assert!(body.contains(r#"name="voteTotal""#));
    assert!(body.contains(r#"name="numVotes""#));
}

#[tokio::test]
async fn edit_of_missing_id_shows_error() {
    let (_db, app) = test_app().await;

    let (status, body) = get(&app, "/edit?id=42").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("there was a problem trying to edit Movie with ID = 42"));
}

#[tokio::test]
async fn update_changes_the_record_and_shows_the_list() {
    let (db, app) = test_app().await;
    let target = db.seed_movie("Old Title", "drama", 5.0).await.unwrap();
    db.seed_movie("Bystander", "comedy", 2.0).await.unwrap();

    let form = format!(
        "id={target}&title=Updated+Title&category=thriller&price=6.5&voteTotal=9&numVotes=2"
    );
    let (status, body) = post_form(&app, "/edit", &form).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Updated Title"));
    assert!(!body.contains("Old Title"));
    assert!(body.contains("Bystander"));

    let movie = db.movie_repository().get_by_id(target).await.unwrap();
    assert_eq!(movie.title, "Updated Title");
    assert_eq!(movie.vote_total, 9);
    assert_eq!(movie.num_votes, 2);
}

#[tokio::test]
async fn update_of_missing_id_shows_distinct_edit_error() {
    let (_db, app) = test_app().await;

    let form = "id=999&title=Ghost&category=horror&price=1&voteTotal=0&numVotes=0";
    let (status, body) = post_form(&app, "/edit", form).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("there was a problem trying to EDIT Movie with ID = 999"));
}

#[tokio::test]
async fn update_with_negative_votes_shows_validation_error() {
    let (db, app) = test_app().await;
    let id = db.seed_movie("Votable", "drama", 5.0).await.unwrap();

    let form = format!("id={id}&title=Votable&category=drama&price=5&voteTotal=-1&numVotes=0");
    let (status, body) = post_form(&app, "/edit", &form).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("voteTotal"));

    // Store unchanged
    let movie = db.movie_repository().get_by_id(id).await.unwrap();
    assert_eq!(movie.vote_total, 0);
}

#[tokio::test]
async fn list_shows_average_vote_for_rated_movies() {
    let (db, app) = test_app().await;
    let id = db.seed_movie("Rated", "drama", 5.0).await.unwrap();

    let form = format!("id={id}&title=Rated&category=drama&price=5&voteTotal=9&numVotes=2");
    post_form(&app, "/edit", &form).await;

    let (_, body) = get(&app, "/").await;
    assert!(body.contains("4.5"));
    assert!(body.contains("(2 votes)"));
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let (_db, app) = test_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}
