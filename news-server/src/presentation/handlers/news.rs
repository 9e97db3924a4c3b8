use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use tera::{Context, Tera};
use tracing::{error, info};

use crate::application::news_service::NewsService;
use crate::data::news_repository::SqliteNewsRepository;
use crate::domain::error::DomainError;
use crate::domain::form::{FormErrors, NewsItemFormData};
use crate::presentation::middleware::RequestId;

fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "unknown".into())
}

fn render_page(
    templates: &Tera,
    name: &str,
    context: &Context,
    status: StatusCode,
) -> Result<HttpResponse, DomainError> {
    let body = templates.render(name, context).map_err(|e| {
        error!(template = name, "template rendering failed: {}", e);
        DomainError::Template(format!("failed to render {}: {}", name, e))
    })?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}

pub async fn list(
    service: web::Data<NewsService<SqliteNewsRepository>>,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, DomainError> {
    let news_items = service.list_news().await?;

    let mut context = Context::new();
    context.insert("news_items", &news_items);
    render_page(&templates, "news_list.html", &context, StatusCode::OK)
}

pub async fn detail(
    path: web::Path<i64>,
    service: web::Data<NewsService<SqliteNewsRepository>>,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, DomainError> {
    let link = path.into_inner();
    let item = service.news_by_link(link).await?;

    let mut context = Context::new();
    context.insert("item", &item);
    render_page(&templates, "news_detail.html", &context, StatusCode::OK)
}

pub async fn create_form(templates: web::Data<Tera>) -> Result<HttpResponse, DomainError> {
    let mut context = Context::new();
    context.insert("form", &NewsItemFormData::default());
    context.insert("errors", &FormErrors::default());
    render_page(&templates, "news_create.html", &context, StatusCode::OK)
}

pub async fn create_submit(
    req: HttpRequest,
    form: web::Form<NewsItemFormData>,
    service: web::Data<NewsService<SqliteNewsRepository>>,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, DomainError> {
    let form = form.into_inner();

    match form.validate() {
        Ok(item) => {
            let news = service.create_news(item).await?;
            info!(
                request_id = %request_id(&req),
                news_id = news.id,
                link = news.link,
                "news item created"
            );
            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/news/"))
                .finish())
        }
        Err(errors) => {
            let mut context = Context::new();
            context.insert("form", &form);
            context.insert("errors", &errors);
            render_page(
                &templates,
                "news_create.html",
                &context,
                StatusCode::UNPROCESSABLE_ENTITY,
            )
        }
    }
}
