//! HTTP Routes
//!
//! API Endpoints:
//! - /        GET     列出所有图书
//! - /        POST    创建图书
//! - /{id}    GET     获取图书
//! - /{id}    PUT     部分更新图书
//! - /{id}    DELETE  删除图书
//! - /ping    GET     健康检查
//!
//! 根路径为集合资源，带 id 的路径为单项资源；静态段 /ping 优先于 /{id} 匹配

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/:id",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .route("/ping", get(handlers::ping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteBookRepository,
    };

    async fn test_app() -> Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let book_repo = Arc::new(SqliteBookRepository::new(pool));
        let state = Arc::new(AppState::new(book_repo));

        create_routes().with_state(state)
    }

    fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn dune_payload() -> Value {
        json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "isbn": "9780441013593",
            "published_year": 1965
        })
    }

    /// 创建一本图书并返回分配的 id
    async fn create_book(app: &Router, payload: &Value) -> i64 {
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        read_json(response).await["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let app = test_app().await;

        let response = app.oneshot(empty_request(Method::GET, "/ping")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_empty_storage_returns_empty_array() {
        let app = test_app().await;

        let response = app.oneshot(empty_request(Method::GET, "/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(read_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_returns_201_with_assigned_id() {
        let app = test_app().await;

        let payload = json!({
            "title": "X",
            "author": "Y",
            "isbn": "Z",
            "published_year": 2022
        });
        let response = app
            .oneshot(json_request(Method::POST, "/", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = read_json(response).await;
        assert_eq!(body["title"], "X");
        assert_eq!(body["author"], "Y");
        assert_eq!(body["isbn"], "Z");
        assert_eq!(body["published_year"], 2022);
        assert!(body["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_create_then_get_returns_identical_book() {
        let app = test_app().await;
        let payload = dune_payload();

        let id = create_book(&app, &payload).await;

        let response = app
            .oneshot(empty_request(Method::GET, &format!("/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["id"], id);
        assert_eq!(body["title"], payload["title"]);
        assert_eq!(body["author"], payload["author"]);
        assert_eq!(body["isbn"], payload["isbn"]);
        assert_eq!(body["published_year"], payload["published_year"]);
    }

    #[tokio::test]
    async fn test_create_missing_required_fields_returns_400() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(Method::POST, "/", &json!({"author": "Y"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_unknown_field_returns_400() {
        let app = test_app().await;

        let payload = json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "isbn": "9780441013593",
            "published_year": 1965,
            "publisher": "Chilton Books"
        });
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // 被拒绝的创建不应持久化任何记录
        let response = app.oneshot(empty_request(Method::GET, "/")).await.unwrap();
        assert_eq!(read_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_non_integer_year_returns_400() {
        let app = test_app().await;

        let payload = json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "isbn": "9780441013593",
            "published_year": "not a year"
        });
        let response = app
            .oneshot(json_request(Method::POST, "/", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_empty_title_returns_400() {
        let app = test_app().await;

        let payload = json!({
            "title": "",
            "author": "Frank Herbert",
            "isbn": "9780441013593",
            "published_year": 1965
        });
        let response = app
            .oneshot(json_request(Method::POST, "/", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_counts_creates_minus_deletes() {
        let app = test_app().await;

        let mut ids = Vec::new();
        for n in 0..3 {
            let payload = json!({
                "title": format!("Book {}", n),
                "author": "Author",
                "isbn": format!("isbn-{}", n),
                "published_year": 2000 + n
            });
            ids.push(create_book(&app, &payload).await);
        }

        let response = app
            .clone()
            .oneshot(empty_request(Method::DELETE, &format!("/{}", ids[1])))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(empty_request(Method::GET, "/")).await.unwrap();
        let body = read_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_changes_only_supplied_field() {
        let app = test_app().await;
        let id = create_book(&app, &dune_payload()).await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/{}", id),
                &json!({"title": "Dune Messiah"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["id"], id);
        assert_eq!(body["title"], "Dune Messiah");
        assert_eq!(body["author"], "Frank Herbert");
        assert_eq!(body["isbn"], "9780441013593");
        assert_eq!(body["published_year"], 1965);

        // 再次读取确认已持久化
        let response = app
            .oneshot(empty_request(Method::GET, &format!("/{}", id)))
            .await
            .unwrap();
        let body = read_json(response).await;
        assert_eq!(body["title"], "Dune Messiah");
        assert_eq!(body["published_year"], 1965);
    }

    #[tokio::test]
    async fn test_update_unknown_field_returns_400() {
        let app = test_app().await;
        let id = create_book(&app, &dune_payload()).await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/{}", id),
                &json!({"publisher": "Chilton Books"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // 拒绝的更新不应有任何副作用
        let response = app
            .oneshot(empty_request(Method::GET, &format!("/{}", id)))
            .await
            .unwrap();
        let body = read_json(response).await;
        assert_eq!(body["title"], "Dune");
    }

    #[tokio::test]
    async fn test_update_type_mismatch_returns_400() {
        let app = test_app().await;
        let id = create_book(&app, &dune_payload()).await;

        let response = app
            .oneshot(json_request(
                Method::PUT,
                &format!("/{}", id),
                &json!({"published_year": "next year"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_missing_book_returns_404() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                Method::PUT,
                "/999999",
                &json!({"title": "Q"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_missing_book_returns_404_with_error_body() {
        let app = test_app().await;

        let response = app
            .oneshot(empty_request(Method::GET, "/999999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = read_json(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_delete_then_get_returns_404() {
        let app = test_app().await;
        let id = create_book(&app, &dune_payload()).await;

        let response = app
            .clone()
            .oneshot(empty_request(Method::DELETE, &format!("/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(empty_request(Method::GET, &format!("/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_twice_returns_204_then_404() {
        let app = test_app().await;
        let id = create_book(&app, &dune_payload()).await;

        let response = app
            .clone()
            .oneshot(empty_request(Method::DELETE, &format!("/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(empty_request(Method::DELETE, &format!("/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_success_has_empty_body() {
        let app = test_app().await;
        let id = create_book(&app, &dune_payload()).await;

        let response = app
            .oneshot(empty_request(Method::DELETE, &format!("/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }
}
