#[cfg(test)]
mod tests {
    use crate::helpers::{TestApp, make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use serial_test::serial;

    async fn register(app: &TestApp, name: &str, email: &str) -> Value {
        let (status, json) = send(
            app,
            "POST",
            "/api/guests",
            Some(&app.admin_token()),
            Some(json!({ "name": name, "email": email })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        json["data"].clone()
    }

    #[tokio::test]
    #[serial]
    async fn register_issues_qr_token() {
        let app = make_test_app().await;

        let guest = register(&app, "Ada", "ada@example.com").await;
        let id = guest["id"].as_i64().unwrap();
        assert_eq!(guest["qr_code"], format!("guest-{id}"));
        assert_eq!(guest["is_vip"], false);
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_email_conflicts() {
        let app = make_test_app().await;
        register(&app, "Ada", "ada@example.com").await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/guests",
            Some(&app.admin_token()),
            Some(json!({ "name": "Other Ada", "email": "ada@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    #[serial]
    async fn invalid_email_is_rejected() {
        let app = make_test_app().await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/guests",
            Some(&app.admin_token()),
            Some(json!({ "name": "Ada", "email": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid email format");
    }

    #[tokio::test]
    #[serial]
    async fn scanner_resolves_tokens() {
        let app = make_test_app().await;
        let guest = register(&app, "Ada", "ada@example.com").await;
        let token = app.scanner_token();

        let uri = format!("/api/guests/token/{}", guest["qr_code"].as_str().unwrap());
        let (status, json) = send(&app, "GET", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["name"], "Ada");

        let (status, _) = send(&app, "GET", "/api/guests/token/badge-1", Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "GET", "/api/guests/token/guest-404", Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "GET", &format!("/api/guests/{}", guest["id"]), Some(&token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    #[serial]
    async fn update_and_delete_guest() {
        let app = make_test_app().await;
        let token = app.admin_token();
        let guest = register(&app, "Ada", "ada@example.com").await;
        let uri = format!("/api/guests/{}", guest["id"]);

        let (status, json) = send(&app, "PUT", &uri, Some(&token), Some(json!({ "is_vip": true }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["is_vip"], true);
        assert_eq!(json["data"]["qr_code"], guest["qr_code"]);

        let (status, _) = send(&app, "DELETE", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, json) = send(&app, "GET", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Guest not found");
    }

    #[tokio::test]
    #[serial]
    async fn certificate_requires_seventy_percent() {
        let app = make_test_app().await;
        let token = app.admin_token();
        let guest = register(&app, "Ada", "ada@example.com").await;

        let mut workshop_ids = Vec::new();
        for i in 0..2 {
            let (_, w) = send(
                &app,
                "POST",
                "/api/workshops",
                Some(&token),
                Some(json!({ "name": format!("W{i}"), "starts_at": "2025-11-03T09:00:00Z" })),
            )
            .await;
            workshop_ids.push(w["data"]["id"].as_i64().unwrap());
        }
        let cert_uri = format!("/api/guests/{}/certificate", guest["id"]);
        let check_in = |wid: i64| json!({ "guest_token": guest["qr_code"], "workshop_id": wid });

        send(&app, "POST", "/api/check-ins", Some(&token), Some(check_in(workshop_ids[0]))).await;
        let (status, json) = send(&app, "GET", &cert_uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["success"], false);

        let (status, json) = send(&app, "GET", &format!("/api/guests/{}/stats", guest["id"]), Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["attendance_percentage"], 50.0);
        assert_eq!(json["data"]["has_attended_any"], true);
        assert_eq!(json["data"]["eligible_for_certificate"], false);

        send(&app, "POST", "/api/check-ins", Some(&token), Some(check_in(workshop_ids[1]))).await;
        let (status, json) = send(&app, "GET", &cert_uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["guest_name"], "Ada");
        assert_eq!(json["data"]["attendance_percentage"], 100.0);
        assert_eq!(json["data"]["workshops"].as_array().unwrap().len(), 2);
    }
}
