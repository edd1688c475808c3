use axum::{
    body::Body,
    http::{self, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use mock_server::{app, Envelope, NoticeView, SignInView, TokenPairView, SEED_LOGIN_ID, SEED_PASSWORD};
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "api-test-boundary";

async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send through a clone so every call in a test shares one backend.
async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn multipart_request(
    uri: &str,
    token: Option<&str>,
    fields: &[(&str, &str)],
    files: &[(&str, &[u8])],
) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
    }
    for (name, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{name}.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            http::header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).unwrap()
}

async fn sign_in(app: &Router, login_id: &str, password: &str) -> SignInView {
    let resp = send(
        app,
        multipart_request(
            "/member/signin",
            None,
            &[("loginId", login_id), ("password", password)],
            &[],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope<SignInView> = body_json(resp).await;
    envelope.data.unwrap()
}

async fn detail(app: &Router, token: &str, id: i64) -> NoticeView {
    let resp = send(app, request("GET", &format!("/notices/{id}"), Some(token))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope<NoticeView> = body_json(resp).await;
    envelope.data.unwrap()
}

// --- member ---

#[tokio::test]
async fn seed_member_signs_in() {
    let app = app();
    let session = sign_in(&app, SEED_LOGIN_ID, SEED_PASSWORD).await;
    assert_eq!(session.login_user_info.name, "Niro");
    assert!(session.access_token.starts_with("access-"));
    assert_ne!(session.access_token, session.refresh_token);
}

#[tokio::test]
async fn wrong_password_is_unauthorized_without_data() {
    let resp = send(
        &app(),
        multipart_request(
            "/member/signin",
            None,
            &[("loginId", SEED_LOGIN_ID), ("password", "nope")],
            &[],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], 401);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn check_id_reports_taken_ids() {
    let app = app();
    let taken = send(
        &app,
        json_request("POST", "/member/checkid", None, r#"{"loginId":"test"}"#),
    )
    .await;
    assert_eq!(taken.status(), StatusCode::CONFLICT);

    let free = send(
        &app,
        json_request("POST", "/member/checkid", None, r#"{"loginId":"fresh"}"#),
    )
    .await;
    assert_eq!(free.status(), StatusCode::OK);
}

#[tokio::test]
async fn sign_up_requires_student_card() {
    let resp = send(
        &app(),
        multipart_request(
            "/member/signup",
            None,
            &[
                ("loginId", "fresh"),
                ("password", "pw"),
                ("admissionNumber", "2024"),
                ("name", "Mina"),
                ("studentNum", "20240001"),
                ("universityName", "Studing University"),
                ("departmentName", "경영학과"),
            ],
            &[],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sign_up_then_sign_in() {
    let app = app();
    let resp = send(
        &app,
        multipart_request(
            "/member/signup",
            None,
            &[
                ("loginId", "fresh"),
                ("password", "pw"),
                ("admissionNumber", "2024"),
                ("name", "Mina"),
                ("studentNum", "20240001"),
                ("universityName", "Studing University"),
                ("departmentName", "경영학과"),
            ],
            &[("studentCardImage", &[0xFF, 0xD8, 0xFF, 0xE0])],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let session = sign_in(&app, "fresh", "pw").await;
    assert_eq!(session.login_user_info.role, "ROLE_USER");
    assert_eq!(session.login_user_info.department_name, "경영학과");
}

#[tokio::test]
async fn reissue_rotates_refresh_token() {
    let app = app();
    let session = sign_in(&app, SEED_LOGIN_ID, SEED_PASSWORD).await;

    let resp = send(
        &app,
        request("POST", "/member/reissue", Some(&session.refresh_token)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let pair: Envelope<TokenPairView> = body_json(resp).await;
    let pair = pair.data.unwrap();
    assert_ne!(pair.refresh_token, session.refresh_token);

    let reused = send(
        &app,
        request("POST", "/member/reissue", Some(&session.refresh_token)),
    )
    .await;
    assert_eq!(reused.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn withdraw_revokes_access() {
    let app = app();
    let session = sign_in(&app, SEED_LOGIN_ID, SEED_PASSWORD).await;

    let resp = send(
        &app,
        request("DELETE", "/member/withdraw", Some(&session.access_token)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let after = send(&app, request("GET", "/home/mypage", Some(&session.access_token))).await;
    assert_eq!(after.status(), StatusCode::UNAUTHORIZED);
}

// --- university data ---

#[tokio::test]
async fn departments_of_known_university() {
    let app = app();
    let resp = send(&app, request("GET", "/universityData/university", None)).await;
    let body: Value = body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let resp = send(
        &app,
        json_request(
            "POST",
            "/universityData/department",
            None,
            r#"{"universityName":"Studing University"}"#,
        ),
    )
    .await;
    let body: Value = body_json(resp).await;
    assert_eq!(body["data"][0]["departmentName"], "컴퓨터공학과");
}

// --- home and notices ---

#[tokio::test]
async fn notices_require_a_token() {
    let resp = send(&app(), request("GET", "/notices/all", None)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn detail_renders_writer_with_category() {
    let app = app();
    let token = sign_in(&app, SEED_LOGIN_ID, SEED_PASSWORD).await.access_token;
    let notice = detail(&app, &token, 1).await;
    assert_eq!(notice.writer_info, "총학생회[총학생회]");
    assert_eq!(notice.created_at, "2024-01-01T00:00:00");
    assert_eq!(notice.categorie, "공지");

    let missing = send(&app, request("GET", "/notices/99", Some(&token))).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn like_and_save_toggle_counters() {
    let app = app();
    let token = sign_in(&app, SEED_LOGIN_ID, SEED_PASSWORD).await.access_token;

    let resp = send(&app, request("POST", "/notices/like/2", Some(&token))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let again = send(&app, request("POST", "/notices/like/2", Some(&token))).await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let resp = send(&app, request("POST", "/notices/save/2", Some(&token))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let notice = detail(&app, &token, 2).await;
    assert!(notice.like_check);
    assert!(notice.save_check);
    assert_eq!(notice.notice_like, 5);
    assert_eq!(notice.save_count, 2);

    let resp = send(&app, request("GET", "/home/save", Some(&token))).await;
    let body: Value = body_json(resp).await;
    assert_eq!(body["data"][0]["affiliation"], "공과대학");

    send(&app, request("DELETE", "/notices/like/2", Some(&token))).await;
    let notice = detail(&app, &token, 2).await;
    assert!(!notice.like_check);
    assert_eq!(notice.notice_like, 4);
}

#[tokio::test]
async fn view_check_clears_unread() {
    let app = app();
    let token = sign_in(&app, SEED_LOGIN_ID, SEED_PASSWORD).await.access_token;
    let count = |body: Value| body["data"].as_i64().unwrap();

    let resp = send(
        &app,
        json_request("POST", "/home/unread-notice-count", Some(&token), r#"{"categorie":"학과"}"#),
    )
    .await;
    assert_eq!(count(body_json(resp).await), 1);

    let resp = send(&app, request("POST", "/notices/view-check/3", Some(&token))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(
        &app,
        json_request("POST", "/home/unread-notice-count", Some(&token), r#"{"categorie":"학과"}"#),
    )
    .await;
    assert_eq!(count(body_json(resp).await), 0);

    let resp = send(&app, request("GET", "/home/unread-categories", Some(&token))).await;
    let body: Value = body_json(resp).await;
    assert_eq!(body["data"], serde_json::json!(["총학생회", "단과대"]));
}

#[tokio::test]
async fn council_member_creates_notice_with_image() {
    let app = app();
    let token = sign_in(&app, SEED_LOGIN_ID, SEED_PASSWORD).await.access_token;

    let resp = send(
        &app,
        multipart_request(
            "/notices/save",
            Some(&token),
            &[("title", "Exam week"), ("content", "Library open 24h"), ("tag", "공지")],
            &[("image", &[0xFF, 0xD8])],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let notice = detail(&app, &token, 4).await;
    assert_eq!(notice.title, "Exam week");
    assert_eq!(notice.writer_info, "컴퓨터공학과[학과]");
    assert!(notice.image.unwrap().ends_with("/notices/4.jpg"));
}

#[tokio::test]
async fn partners_filter_by_category() {
    let app = app();
    let token = sign_in(&app, SEED_LOGIN_ID, SEED_PASSWORD).await.access_token;
    let resp = send(
        &app,
        json_request("POST", "/partner", Some(&token), r#"{"categoryName":"카페"}"#),
    )
    .await;
    let body: Value = body_json(resp).await;
    let partners = body["data"].as_array().unwrap();
    assert_eq!(partners.len(), 1);
    assert_eq!(partners[0]["partnerName"], "Cafe Mori");
}
