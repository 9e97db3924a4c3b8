use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use sqlx::sqlite::SqlitePoolOptions;
use tera::Tera;

use news_server::application::news_service::NewsService;
use news_server::data::news_repository::SqliteNewsRepository;
use news_server::domain::form::NewsItemFormData;
use news_server::infrastructure::templates::load_templates;
use news_server::presentation::middleware::RequestTrace;
use news_server::presentation::routes;

async fn app_state() -> (web::Data<NewsService<SqliteNewsRepository>>, web::Data<Tera>) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database should open");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("migrations should apply");

    let service = NewsService::new(Arc::new(SqliteNewsRepository::new(pool)));
    let templates = load_templates("templates/**/*.html").expect("templates should load");
    (web::Data::new(service), web::Data::new(templates))
}

fn form(title: &str, text: &str, created_on: &str) -> NewsItemFormData {
    NewsItemFormData {
        title: title.to_string(),
        text: text.to_string(),
        created_on: created_on.to_string(),
    }
}

#[actix_web::test]
async fn create_flow_redirects_then_lists_and_serves_the_item() {
    let (service, templates) = app_state().await;
    let app = test::init_service(
        App::new()
            .app_data(service)
            .app_data(templates)
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/news/create/")
        .set_form(form("Launch", "We shipped.", "2024-01-01"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/news/")
    );

    let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/news/").to_request())
        .await;
    let page = std::str::from_utf8(&body).expect("page should be utf-8");
    assert!(page.contains("Launch"));
    assert!(page.contains("/news/1/"));

    let body =
        test::call_and_read_body(&app, test::TestRequest::get().uri("/news/1/").to_request())
            .await;
    let page = std::str::from_utf8(&body).expect("page should be utf-8");
    assert!(page.contains("Launch"));
    assert!(page.contains("We shipped."));
}

#[actix_web::test]
async fn root_path_serves_the_news_list() {
    let (service, templates) = app_state().await;
    let app = test::init_service(
        App::new()
            .app_data(service)
            .app_data(templates)
            .configure(routes::configure),
    )
    .await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn empty_list_shows_the_placeholder() {
    let (service, templates) = app_state().await;
    let app = test::init_service(
        App::new()
            .app_data(service)
            .app_data(templates)
            .configure(routes::configure),
    )
    .await;

    let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/news/").to_request())
        .await;
    let page = std::str::from_utf8(&body).expect("page should be utf-8");
    assert!(page.contains("No news yet."));
}

#[actix_web::test]
async fn unknown_link_answers_not_found() {
    let (service, templates) = app_state().await;
    let app = test::init_service(
        App::new()
            .app_data(service)
            .app_data(templates)
            .configure(routes::configure),
    )
    .await;

    let res =
        test::call_service(&app, test::TestRequest::get().uri("/news/9999/").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn non_integer_link_answers_not_found() {
    let (service, templates) = app_state().await;
    let app = test::init_service(
        App::new()
            .app_data(service)
            .app_data(templates)
            .configure(routes::configure),
    )
    .await;

    let res =
        test::call_service(&app, test::TestRequest::get().uri("/news/abc/").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_form_renders_every_field() {
    let (service, templates) = app_state().await;
    let app = test::init_service(
        App::new()
            .app_data(service)
            .app_data(templates)
            .configure(routes::configure),
    )
    .await;

    let body = test::call_and_read_body(
        &app,
        test::TestRequest::get().uri("/news/create/").to_request(),
    )
    .await;
    let page = std::str::from_utf8(&body).expect("page should be utf-8");
    assert!(page.contains("name=\"title\""));
    assert!(page.contains("name=\"text\""));
    assert!(page.contains("name=\"created_on\""));
}

#[actix_web::test]
async fn invalid_submission_rerenders_with_field_errors() {
    let (service, templates) = app_state().await;
    let app = test::init_service(
        App::new()
            .app_data(service.clone())
            .app_data(templates)
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/news/create/")
        .set_form(form("", "", "2024-02-30"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = test::read_body(res).await;
    let page = std::str::from_utf8(&body).expect("page should be utf-8");
    assert!(page.contains("This field is required."));
    assert!(page.contains("Enter a valid date."));

    let count = service.news_count().await.expect("count should succeed");
    assert_eq!(count, 0);
}

#[actix_web::test]
async fn rejected_input_is_kept_in_the_form() {
    let (service, templates) = app_state().await;
    let app = test::init_service(
        App::new()
            .app_data(service)
            .app_data(templates)
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/news/create/")
        .set_form(form("Launch", "We shipped.", "someday"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let page = std::str::from_utf8(&body).expect("page should be utf-8");
    assert!(page.contains("value=\"Launch\""));
    assert!(page.contains("We shipped."));
    assert!(page.contains("value=\"someday\""));
}

#[actix_web::test]
async fn requests_carry_a_request_id() {
    let (service, templates) = app_state().await;
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(service)
            .app_data(templates)
            .configure(routes::configure),
    )
    .await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/news/").to_request()).await;
    assert!(res.headers().contains_key("x-request-id"));

    let req = test::TestRequest::get()
        .uri("/news/")
        .insert_header(("x-request-id", "trace-123"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(
        res.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("trace-123")
    );
}

#[actix_web::test]
async fn health_endpoint_reports_ok() {
    let (service, templates) = app_state().await;
    let app = test::init_service(
        App::new()
            .app_data(service)
            .app_data(templates)
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
}
