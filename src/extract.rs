//! axum extractors whose rejections render as `{"detail": [...]}` like every
//! other error.

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        routing::{get, post},
        Router,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Serialize)]
    struct Named {
        name: String,
    }

    #[derive(Deserialize)]
    struct Paging {
        days: i64,
    }

    fn app() -> Router {
        Router::new()
            .route("/echo", post(|Json(b): Json<Named>| async move { Json(b) }))
            .route("/days", get(|Query(p): Query<Paging>| async move { p.days.to_string() }))
            .route("/n/:n", get(|Path(n): Path<u32>| async move { n.to_string() }))
    }

    async fn detail(res: Response) -> serde_json::Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["detail"].is_array(), "unexpected body {body}");
        body
    }

    #[tokio::test]
    async fn malformed_json_is_reported_as_detail() {
        let res = app()
            .oneshot(
                Request::post("/echo")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        detail(res).await;
    }

    #[tokio::test]
    async fn missing_field_keeps_422() {
        let res = app()
            .oneshot(
                Request::post("/echo")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = detail(res).await;
        assert!(body["detail"][0].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn bad_query_and_path_are_reported_as_detail() {
        let res = app()
            .oneshot(Request::get("/days?days=soon").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        detail(res).await;

        let res = app()
            .oneshot(Request::get("/n/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        detail(res).await;
    }

    #[tokio::test]
    async fn valid_json_round_trips() {
        let res = app()
            .oneshot(
                Request::post("/echo")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"toast"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"name":"toast"}"#);
    }
}
