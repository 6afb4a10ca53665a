#[cfg(test)]
mod tests {
    use crate::helpers::{TestApp, make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use serial_test::serial;

    async fn post(app: &TestApp, token: &str, body: Value) -> (StatusCode, Value) {
        send(app, "POST", "/api/check-ins", Some(token), Some(body)).await
    }

    async fn workshop(app: &TestApp, body: Value) -> i64 {
        let (_, json) = send(app, "POST", "/api/workshops", Some(&app.admin_token()), Some(body)).await;
        json["data"]["id"].as_i64().unwrap()
    }

    async fn guest(app: &TestApp, name: &str) -> Value {
        let (_, json) = send(
            app,
            "POST",
            "/api/guests",
            Some(&app.admin_token()),
            Some(json!({ "name": name, "email": format!("{}@example.com", name.to_lowercase()) })),
        )
        .await;
        json["data"].clone()
    }

    #[tokio::test]
    #[serial]
    async fn open_workshop_scenario() {
        let app = make_test_app().await;
        let scanner = app.scanner_token();
        let a = workshop(&app, json!({ "name": "A", "starts_at": "2025-11-03T09:00:00Z" })).await;
        let x = guest(&app, "Xena").await;
        let body = json!({ "guest_token": x["qr_code"], "workshop_id": a });

        let (status, json) = post(&app, &scanner, body.clone()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["code"], "CHECKED_IN");
        assert_eq!(json["data"]["signal"], "success");
        assert_eq!(json["data"]["attendance"]["recorded_by"], app.scanner.id);
        let first_id = json["data"]["attendance"]["id"].clone();

        let (status, json) = post(&app, &scanner, body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["code"], "ALREADY_CHECKED_IN");
        assert_eq!(json["data"]["signal"], "success");
        assert_eq!(json["data"]["attendance"]["id"], first_id);

        let (_, stats) = send(
            &app,
            "GET",
            &format!("/api/guests/{}/stats", x["id"]),
            Some(&app.admin_token()),
            None,
        )
        .await;
        assert_eq!(stats["data"]["attendance_percentage"], 100.0);
    }

    #[tokio::test]
    #[serial]
    async fn vip_workshop_scenario() {
        let app = make_test_app().await;
        let admin = app.admin_token();
        let scanner = app.scanner_token();
        let b = workshop(
            &app,
            json!({ "name": "B", "starts_at": "2025-11-03T09:00:00Z", "is_vip": true, "max_capacity": 1 }),
        )
        .await;
        let x = guest(&app, "Xena").await;
        let y = guest(&app, "Yuri").await;

        let (status, json) = post(&app, &scanner, json!({ "guest_token": x["qr_code"], "workshop_id": b })).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["success"], false);
        assert_eq!(json["data"]["code"], "VIP_ACCESS_DENIED");
        assert_eq!(json["data"]["signal"], "error");
        assert_eq!(json["data"]["attendance"], Value::Null);

        let grant_uri = format!("/api/workshops/{b}/vip");
        let (status, _) = send(&app, "POST", &grant_uri, Some(&admin), Some(json!({ "guest_id": x["id"] }))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, json) = post(&app, &scanner, json!({ "guest_token": x["qr_code"], "workshop_id": b })).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["code"], "CHECKED_IN");

        // Y is granted, but only after X so the grant cap is lifted first.
        send(&app, "PUT", &format!("/api/workshops/{b}"), Some(&admin), Some(json!({ "max_capacity": 2 }))).await;
        send(&app, "POST", &grant_uri, Some(&admin), Some(json!({ "guest_id": y["id"] }))).await;
        send(&app, "PUT", &format!("/api/workshops/{b}"), Some(&admin), Some(json!({ "max_capacity": 1 }))).await;

        let (status, json) = post(&app, &scanner, json!({ "guest_token": y["qr_code"], "workshop_id": b })).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["data"]["code"], "CAPACITY_EXCEEDED");

        let (_, json) = send(&app, "GET", &format!("/api/workshops/{b}/attendance"), Some(&scanner), None).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn bad_tokens_and_missing_records() {
        let app = make_test_app().await;
        let scanner = app.scanner_token();
        let a = workshop(&app, json!({ "name": "A", "starts_at": "2025-11-03T09:00:00Z" })).await;
        let x = guest(&app, "Xena").await;

        let (status, json) = post(&app, &scanner, json!({ "guest_token": "42", "workshop_id": a })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["data"]["code"], "INVALID_TOKEN_FORMAT");

        let (status, json) = post(&app, &scanner, json!({ "guest_token": "guest-999", "workshop_id": a })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["data"]["code"], "GUEST_NOT_FOUND");

        let (status, json) = post(&app, &scanner, json!({ "guest_token": x["qr_code"], "workshop_id": 999 })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["data"]["code"], "SESSION_NOT_FOUND");
    }

    #[tokio::test]
    #[serial]
    async fn recent_feed_and_removal() {
        let app = make_test_app().await;
        let admin = app.admin_token();
        let scanner = app.scanner_token();
        let a = workshop(&app, json!({ "name": "A", "starts_at": "2025-11-03T09:00:00Z" })).await;
        let x = guest(&app, "Xena").await;
        let y = guest(&app, "Yuri").await;

        post(&app, &scanner, json!({ "guest_token": x["qr_code"], "workshop_id": a })).await;
        let (_, last) = post(&app, &scanner, json!({ "guest_token": y["qr_code"], "workshop_id": a })).await;

        let (status, json) = send(&app, "GET", "/api/check-ins/recent?limit=1", Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        let rows = json["data"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["workshop_name"], "A");

        let uri = format!("/api/attendance/{}", last["data"]["attendance"]["id"]);
        let (status, _) = send(&app, "DELETE", &uri, Some(&scanner), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, json) = send(&app, "DELETE", &uri, Some(&scanner), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Attendance record not found");

        let (_, json) = send(&app, "GET", "/api/check-ins/recent", Some(&admin), None).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["guest_name"], "Xena");
    }
}
