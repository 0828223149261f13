//! Application router configuration.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    error_pages::{get_404_not_found, get_internal_server_error_page},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_create_transaction_page, get_edit_transaction_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::NEW_TRANSACTION_VIEW,
            get(get_create_transaction_page),
        )
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page),
        )
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{endpoints, endpoints::format_endpoint, test_utils::must_create_state};

    use super::build_router;

    fn must_create_server() -> TestServer {
        TestServer::try_new(build_router(must_create_state())).expect("Could not create test server.")
    }

    fn transaction_ids(page: &str) -> Vec<String> {
        let document = Html::parse_document(page);
        let selector = Selector::parse("#transaction-list li[data-transaction-id]").unwrap();

        document
            .select(&selector)
            .filter_map(|item| item.value().attr("data-transaction-id"))
            .map(str::to_owned)
            .collect()
    }

    #[tokio::test]
    async fn dashboard_renders() {
        let server = must_create_server();

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Personal Finance"));
    }

    #[tokio::test]
    async fn new_transaction_page_renders() {
        let server = must_create_server();

        let response = server.get(endpoints::NEW_TRANSACTION_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Add New Transaction"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = must_create_server();

        let response = server.get("/does/not/exist").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn unknown_transaction_edit_page_is_not_found() {
        let server = must_create_server();

        let response = server
            .get(&format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, "404"))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn error_page_renders() {
        let server = must_create_server();

        let response = server.get(endpoints::INTERNAL_ERROR_VIEW).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn create_edit_and_delete_transaction() {
        let server = must_create_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[
                ("amount", "-42.5"),
                ("date", "2024-03-05"),
                ("description", "Groceries"),
            ])
            .await;
        response.assert_status_see_other();
        assert_eq!(response.header("hx-redirect"), endpoints::DASHBOARD_VIEW);

        let dashboard = server.get(endpoints::DASHBOARD_VIEW).await.text();
        assert!(dashboard.contains("Groceries"));
        let ids = transaction_ids(&dashboard);
        assert_eq!(ids.len(), 1);
        let transaction_path = format_endpoint(endpoints::TRANSACTION, &ids[0]);

        let response = server
            .put(&transaction_path)
            .form(&[
                ("amount", "-40"),
                ("date", "2024-03-06"),
                ("description", "Market"),
            ])
            .await;
        response.assert_status_see_other();

        let dashboard = server.get(endpoints::DASHBOARD_VIEW).await.text();
        assert!(dashboard.contains("Market"));
        assert!(!dashboard.contains("Groceries"));
        assert_eq!(transaction_ids(&dashboard), ids);

        let response = server.delete(&transaction_path).await;
        response.assert_status_see_other();

        let dashboard = server.get(endpoints::DASHBOARD_VIEW).await.text();
        assert!(transaction_ids(&dashboard).is_empty());
        assert!(dashboard.contains("No transactions yet"));
    }

    #[tokio::test]
    async fn invalid_form_is_rendered_with_errors() {
        let server = must_create_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("amount", ""), ("date", "2024-03-05"), ("description", "")])
            .await;

        response.assert_status_ok();
        let text = response.text();
        assert!(text.contains("Please enter a valid amount"));
        assert!(text.contains("Please enter a description"));
    }

    #[tokio::test]
    async fn missing_fields_are_reported_as_errors() {
        let server = must_create_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("description", "Coffee")])
            .await;

        response.assert_status_ok();
        let text = response.text();
        assert!(text.contains("Please enter a valid amount"));
        assert!(text.contains("Please select a date"));
    }
}
