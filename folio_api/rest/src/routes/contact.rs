use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactService, ContactSubmitError};
use folio_models::contact::ContactSubmission;

use super::{error, internal_server_error};
use crate::models::contact::{ApiContactSubmission, ApiContactSubmitResponse};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route(
            "/api/contact",
            routing::post(submit).fallback(method_not_allowed),
        )
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactService>>,
    Json(submission): Json<ApiContactSubmission>,
) -> Response {
    let submission = match ContactSubmission::try_new(
        submission.name.unwrap_or_default(),
        submission.email.unwrap_or_default(),
        submission.message.unwrap_or_default(),
    ) {
        Ok(submission) => submission,
        Err(rejection) => return error(StatusCode::BAD_REQUEST, rejection.to_string()),
    };

    match service.submit(submission).await {
        Ok(()) => Json(ApiContactSubmitResponse {
            success: true,
            message: "Message sent successfully",
        })
        .into_response(),
        Err(ContactSubmitError::Deliver) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send message")
        }
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

async fn method_not_allowed() -> Response {
    error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request},
    };
    use folio_core_contact_contracts::MockContactService;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn valid_submission_is_relayed() {
        // Arrange
        let submission = ContactSubmission::try_new(
            "Max Mustermann".into(),
            "max.mustermann@example.com".into(),
            "Hello there!".into(),
        )
        .unwrap();
        let service = MockContactService::new().with_submit(submission, Ok(()));

        // Act
        let response = post(
            service,
            json!({
                "name": "Max Mustermann",
                "email": "max.mustermann@example.com",
                "message": "Hello there!",
            }),
        )
        .await;

        // Assert
        assert_eq!(response.0, StatusCode::OK);
        assert_eq!(
            response.1,
            json!({"success": true, "message": "Message sent successfully"})
        );
    }

    #[tokio::test]
    async fn missing_fields_are_rejected_without_calling_the_service() {
        for body in [
            json!({}),
            json!({"name": "Max", "email": "max@example.com"}),
            json!({"name": "Max", "email": null, "message": "hi"}),
            json!({"name": "", "email": "max@example.com", "message": "hi"}),
        ] {
            // Arrange
            let service = MockContactService::new();

            // Act
            let response = post(service, body).await;

            // Assert
            assert_eq!(response.0, StatusCode::BAD_REQUEST);
            assert_eq!(response.1, json!({"error": "Missing required fields"}));
        }
    }

    #[tokio::test]
    async fn overlong_fields_are_rejected_without_calling_the_service() {
        // Arrange
        let service = MockContactService::new();

        // Act
        let response = post(
            service,
            json!({
                "name": "Max",
                "email": "max@example.com",
                "message": "x".repeat(5001),
            }),
        )
        .await;

        // Assert
        assert_eq!(response.0, StatusCode::BAD_REQUEST);
        assert_eq!(response.1, json!({"error": "Input too long"}));
    }

    #[tokio::test]
    async fn malformed_email_addresses_are_rejected() {
        // Arrange
        let service = MockContactService::new();

        // Act
        let response = post(
            service,
            json!({"name": "Max", "email": "not-an-email", "message": "hi"}),
        )
        .await;

        // Assert
        assert_eq!(response.0, StatusCode::BAD_REQUEST);
        assert_eq!(response.1, json!({"error": "Invalid email format"}));
    }

    #[tokio::test]
    async fn failed_delivery_is_reported() {
        // Arrange
        let submission =
            ContactSubmission::try_new("Max".into(), "max@example.com".into(), "hi".into())
                .unwrap();
        let service =
            MockContactService::new().with_submit(submission, Err(ContactSubmitError::Deliver));

        // Act
        let response = post(
            service,
            json!({"name": "Max", "email": "max@example.com", "message": "hi"}),
        )
        .await;

        // Assert
        assert_eq!(response.0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.1, json!({"error": "Failed to send message"}));
    }

    #[tokio::test]
    async fn unexpected_errors_are_not_leaked() {
        // Arrange
        let submission =
            ContactSubmission::try_new("Max".into(), "max@example.com".into(), "hi".into())
                .unwrap();
        let service = MockContactService::new().with_submit(
            submission,
            Err(ContactSubmitError::Other(anyhow::anyhow!("db on fire"))),
        );

        // Act
        let response = post(
            service,
            json!({"name": "Max", "email": "max@example.com", "message": "hi"}),
        )
        .await;

        // Assert
        assert_eq!(response.0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.1, json!({"error": "Internal server error"}));
    }

    async fn post(
        service: MockContactService,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = router(Arc::new(service))
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }
}
