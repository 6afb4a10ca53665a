#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use api::auth::{Claims, generate_jwt};
    use axum::http::StatusCode;
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use util::config;
    use db::models::user::Role;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn missing_token_is_unauthorized() {
        let app = make_test_app().await;

        let (status, json) = send(&app, "GET", "/api/workshops", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Authentication required");
    }

    #[tokio::test]
    #[serial]
    async fn garbage_token_is_unauthorized() {
        let app = make_test_app().await;

        let (status, json) = send(&app, "GET", "/api/workshops", Some("not.a.jwt"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "Invalid token");
    }

    #[tokio::test]
    #[serial]
    async fn expired_token_is_unauthorized() {
        let app = make_test_app().await;
        let claims = Claims::new(app.admin.id, Role::Admin, Duration::minutes(-5));
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config::jwt_secret().as_bytes()),
        )
        .unwrap();

        let (status, json) = send(&app, "GET", "/api/workshops", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "Token expired");
    }

    #[tokio::test]
    #[serial]
    async fn token_for_unknown_account_is_unauthorized() {
        let app = make_test_app().await;
        let (token, _) = generate_jwt(9_999, Role::Admin);

        let (status, json) = send(&app, "GET", "/api/dashboard", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "Unknown account");
    }

    #[tokio::test]
    #[serial]
    async fn role_comes_from_the_account_not_the_token() {
        let app = make_test_app().await;
        // Scanner account presenting a token that claims admin.
        let (token, _) = generate_jwt(app.scanner.id, Role::Admin);

        let body = json!({ "name": "Sneaky", "starts_at": "2025-11-03T09:00:00Z" });
        let (status, _) = send(&app, "POST", "/api/workshops", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    #[serial]
    async fn scanner_capabilities_match_table() {
        let app = make_test_app().await;
        let token = app.scanner_token();

        for uri in ["/api/guests", "/api/dashboard", "/api/check-ins/recent"] {
            let (status, _) = send(&app, "GET", uri, Some(&token), None).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
        }

        let (status, _) = send(&app, "GET", "/api/workshops", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
