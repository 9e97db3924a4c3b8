use std::future::{Ready, ready};
use std::time::Instant;

use actix_service::{Service, Transform};
use actix_web::dev::{ServiceRequest, ServiceResponse, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::info;
use uuid::Uuid;

static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");
static TIMING_HEADER: HeaderName = HeaderName::from_static("server-timing");

/// Request id as seen by handlers, taken from the inbound header when the
/// caller supplied one.
#[derive(Clone)]
pub struct RequestId(pub String);

/// Tags every request with an id, logs its outcome with latency, and
/// reflects both back to the client as headers.
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceService { service }))
    }
}

pub struct RequestTraceService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = req
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let start = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_owned();

        req.extensions_mut().insert(RequestId(request_id.clone()));
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            let duration = start.elapsed();

            info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = res.status().as_u16(),
                duration_ms = duration.as_millis() as u64,
                "request completed"
            );

            let headers = res.response_mut().headers_mut();
            if let Ok(value) = HeaderValue::from_str(&request_id) {
                headers.insert(REQUEST_ID_HEADER.clone(), value);
            }
            if let Ok(value) = HeaderValue::from_str(&format!("app;dur={}", duration.as_millis()))
            {
                headers.insert(TIMING_HEADER.clone(), value);
            }

            Ok(res)
        })
    }
}
