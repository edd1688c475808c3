//! In-memory stand-in for the Studing backend.
//!
//! Every response body is an envelope `{status, message, data?}`; `data` is
//! omitted for acknowledgements and errors. Authenticated routes read a
//! bearer token from `Authorization`.

pub mod state;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Multipart, Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

use crate::state::{Backend, Member, Notice, CATEGORIES};

pub use crate::state::{SEED_LOGIN_ID, SEED_PASSWORD};

pub type Db = Arc<RwLock<Backend>>;

const IMAGE_HOST: &str = "https://cdn.studing.test";
const RECENT_LIMIT: usize = 3;

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

fn reply<T: Serialize>(status: StatusCode, message: &str, data: Option<T>) -> Response {
    let body = Envelope {
        status: status.as_u16(),
        message: message.to_string(),
        data,
    };
    (status, Json(body)).into_response()
}

fn ok<T: Serialize>(data: T) -> Response {
    reply(StatusCode::OK, "success", Some(data))
}

fn ack(message: &str) -> Response {
    reply::<()>(StatusCode::OK, message, None)
}

#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict(&'static str),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "forbidden".to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message.to_string()),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };
        reply::<()>(status, &message, None)
    }
}

type ApiResult = Result<Response, ApiError>;

pub fn app() -> Router {
    app_with(Backend::seeded())
}

pub fn app_with(backend: Backend) -> Router {
    let db: Db = Arc::new(RwLock::new(backend));
    Router::new()
        .route("/member/signin", post(sign_in))
        .route("/member/signup", post(sign_up))
        .route("/member/checkid", post(check_id))
        .route("/member/withdraw", delete(withdraw))
        .route("/member/reissue", post(reissue))
        .route("/universityData/university", get(universities))
        .route("/universityData/department", post(departments))
        .route("/home/logo", get(logo))
        .route("/home/unread-categories", get(unread_categories))
        .route("/home/unread-notice-count", post(unread_notice_count))
        .route("/home/recent-notices", post(recent_notices))
        .route("/home/save", get(saved_notices))
        .route("/home/mypage", get(my_page))
        .route("/notices/all", get(all_notices))
        .route("/notices/all-category", post(notices_by_category))
        .route("/notices/save", post(create_notice))
        .route("/notices/save/save-category", post(saved_by_category))
        .route("/notices/save/{id}", post(save).delete(unsave))
        .route("/notices/like/{id}", post(like).delete(unlike))
        .route("/notices/view-check/{id}", post(view_check))
        .route("/notices/unread/all", post(unread_notices))
        .route("/notices/{id}", get(notice_detail))
        .route("/partner", post(partners))
        .route("/notifications/token", post(register_push_token))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// ---------------------------------------------------------------------------
// Request and response shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIdInput {
    pub login_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentInput {
    pub university_name: String,
}

#[derive(Deserialize)]
pub struct CategoryInput {
    pub categorie: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerInput {
    pub category_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushTokenInput {
    pub fcm_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairView {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserInfoView {
    pub id: i64,
    pub login_id: String,
    pub name: String,
    pub university_name: String,
    pub department_name: String,
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInView {
    pub access_token: String,
    pub refresh_token: String,
    pub login_user_info: LoginUserInfoView,
}

/// Notice as seen by one member. `categorie` carries the notice tag here,
/// while requests use the same key for the author category.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeView {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub writer_info: String,
    pub notice_like: i64,
    pub save_count: i64,
    pub view_count: i64,
    pub image: Option<String>,
    pub created_at: String,
    pub categorie: String,
    pub save_check: bool,
    pub like_check: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedNoticeView {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub affiliation: String,
    pub created_at: String,
    pub image: Option<String>,
}

fn notice_view(backend: &Backend, login_id: &str, notice: &Notice) -> NoticeView {
    let key = (login_id.to_string(), notice.id);
    NoticeView {
        id: notice.id,
        title: notice.title.clone(),
        content: notice.content.clone(),
        writer_info: format!("{}[{}]", notice.writer, notice.category),
        notice_like: notice.like_count,
        save_count: notice.save_count,
        view_count: notice.view_count,
        image: notice.image.clone(),
        created_at: notice.created_at.clone(),
        categorie: notice.tag.clone(),
        save_check: backend.saves.contains(&key),
        like_check: backend.likes.contains(&key),
    }
}

/// Newest first.
fn notice_views<'a>(
    backend: &Backend,
    login_id: &str,
    notices: impl DoubleEndedIterator<Item = &'a Notice>,
) -> Vec<NoticeView> {
    notices
        .rev()
        .map(|notice| notice_view(backend, login_id, notice))
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Login id of the member owning the access token.
fn caller(backend: &Backend, headers: &HeaderMap) -> Result<String, ApiError> {
    let token = bearer(headers).ok_or(ApiError::Unauthorized)?;
    backend
        .access_tokens
        .get(token)
        .cloned()
        .ok_or(ApiError::Unauthorized)
}

fn member<'a>(backend: &'a Backend, login_id: &str) -> Result<&'a Member, ApiError> {
    backend.members.get(login_id).ok_or(ApiError::Unauthorized)
}

#[derive(Default)]
struct Form {
    text: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
}

impl Form {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Form::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if field.file_name().is_some() {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                form.files.insert(name, bytes.to_vec());
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                form.text.insert(name, text);
            }
        }
        Ok(form)
    }

    fn required(&self, name: &str) -> Result<String, ApiError> {
        self.text
            .get(name)
            .filter(|value| !value.trim().is_empty())
            .cloned()
            .ok_or_else(|| ApiError::BadRequest(format!("missing field `{name}`")))
    }
}

fn parse_category(label: &str) -> Result<&'static str, ApiError> {
    CATEGORIES
        .into_iter()
        .find(|category| *category == label)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown category `{label}`")))
}

// ---------------------------------------------------------------------------
// Member
// ---------------------------------------------------------------------------

async fn sign_in(State(db): State<Db>, multipart: Multipart) -> ApiResult {
    let form = Form::read(multipart).await?;
    let login_id = form.required("loginId")?;
    let password = form.required("password")?;

    let mut backend = db.write().await;
    let member = match backend.members.get(&login_id) {
        Some(member) if member.password == password => member.clone(),
        _ => return Err(ApiError::Unauthorized),
    };
    let (access_token, refresh_token) = backend.issue_tokens(&login_id);
    info!(login_id = %login_id, "signed in");

    Ok(ok(SignInView {
        access_token,
        refresh_token,
        login_user_info: LoginUserInfoView {
            id: member.id,
            login_id: member.login_id,
            name: member.name,
            university_name: member.university_name,
            department_name: member.department_name,
            role: member.role,
        },
    }))
}

async fn sign_up(State(db): State<Db>, multipart: Multipart) -> ApiResult {
    let form = Form::read(multipart).await?;
    let student_card_image = form
        .files
        .get("studentCardImage")
        .filter(|bytes| !bytes.is_empty())
        .cloned()
        .ok_or_else(|| ApiError::BadRequest("missing field `studentCardImage`".to_string()))?;
    let member = Member {
        id: 0,
        login_id: form.required("loginId")?,
        password: form.required("password")?,
        name: form.required("name")?,
        admission_number: form.required("admissionNumber")?,
        student_num: form.required("studentNum")?,
        university_name: form.required("universityName")?,
        department_name: form.required("departmentName")?,
        role: "ROLE_USER".to_string(),
        student_card_image,
    };

    let mut backend = db.write().await;
    if backend.members.contains_key(&member.login_id) {
        return Err(ApiError::Conflict("login id already taken"));
    }
    let known_department = backend
        .universities
        .get(&member.university_name)
        .is_some_and(|departments| departments.contains(&member.department_name));
    if !known_department {
        return Err(ApiError::BadRequest("unknown university or department".to_string()));
    }
    info!(login_id = %member.login_id, card_bytes = member.student_card_image.len(), "member registered");
    backend.add_member(member);
    Ok(ack("signed up"))
}

async fn check_id(State(db): State<Db>, Json(input): Json<CheckIdInput>) -> ApiResult {
    let backend = db.read().await;
    if backend.members.contains_key(&input.login_id) {
        return Err(ApiError::Conflict("login id already taken"));
    }
    Ok(ack("available"))
}

async fn withdraw(State(db): State<Db>, headers: HeaderMap) -> ApiResult {
    let mut backend = db.write().await;
    let login_id = caller(&backend, &headers)?;
    backend.remove_member(&login_id);
    info!(login_id = %login_id, "member withdrew");
    Ok(ack("withdrawn"))
}

async fn reissue(State(db): State<Db>, headers: HeaderMap) -> ApiResult {
    let token = bearer(&headers).ok_or(ApiError::Unauthorized)?;
    let mut backend = db.write().await;
    let login_id = backend
        .refresh_tokens
        .remove(token)
        .ok_or(ApiError::Unauthorized)?;
    let (access_token, refresh_token) = backend.issue_tokens(&login_id);
    Ok(ok(TokenPairView {
        access_token,
        refresh_token,
    }))
}

// ---------------------------------------------------------------------------
// University data
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UniversityView<'a> {
    university_name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DepartmentView<'a> {
    department_name: &'a str,
}

async fn universities(State(db): State<Db>) -> Response {
    let backend = db.read().await;
    let list: Vec<UniversityView> = backend
        .universities
        .keys()
        .map(|name| UniversityView {
            university_name: name,
        })
        .collect();
    ok(list)
}

async fn departments(State(db): State<Db>, Json(input): Json<DepartmentInput>) -> ApiResult {
    let backend = db.read().await;
    let departments = backend
        .universities
        .get(&input.university_name)
        .ok_or(ApiError::NotFound)?;
    let list: Vec<DepartmentView> = departments
        .iter()
        .map(|name| DepartmentView {
            department_name: name,
        })
        .collect();
    Ok(ok(list))
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogoView {
    university_name: String,
    university_logo_image: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MyPageView {
    login_id: String,
    name: String,
    university_name: String,
    department_name: String,
    student_num: String,
    role: String,
}

async fn logo(State(db): State<Db>, headers: HeaderMap) -> ApiResult {
    let backend = db.read().await;
    let login_id = caller(&backend, &headers)?;
    let member = member(&backend, &login_id)?;
    Ok(ok(LogoView {
        university_name: member.university_name.clone(),
        university_logo_image: format!(
            "{IMAGE_HOST}/logos/{}.png",
            member.university_name.replace(' ', "-")
        ),
    }))
}

async fn unread_categories(State(db): State<Db>, headers: HeaderMap) -> ApiResult {
    let backend = db.read().await;
    let login_id = caller(&backend, &headers)?;
    let categories: Vec<&str> = CATEGORIES
        .into_iter()
        .filter(|category| {
            backend
                .notices
                .values()
                .any(|notice| notice.category == *category && backend.is_unread(&login_id, notice.id))
        })
        .collect();
    Ok(ok(categories))
}

async fn unread_notice_count(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CategoryInput>,
) -> ApiResult {
    let backend = db.read().await;
    let login_id = caller(&backend, &headers)?;
    let category = parse_category(&input.categorie)?;
    let count = backend
        .notices
        .values()
        .filter(|notice| notice.category == category && backend.is_unread(&login_id, notice.id))
        .count();
    Ok(ok(count))
}

async fn recent_notices(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CategoryInput>,
) -> ApiResult {
    let backend = db.read().await;
    let login_id = caller(&backend, &headers)?;
    let category = parse_category(&input.categorie)?;
    let mut views = notice_views(
        &backend,
        &login_id,
        backend.notices.values().filter(|notice| notice.category == category),
    );
    views.truncate(RECENT_LIMIT);
    Ok(ok(views))
}

async fn saved_notices(State(db): State<Db>, headers: HeaderMap) -> ApiResult {
    let backend = db.read().await;
    let login_id = caller(&backend, &headers)?;
    let saved: Vec<SavedNoticeView> = backend
        .notices
        .values()
        .rev()
        .filter(|notice| backend.saves.contains(&(login_id.clone(), notice.id)))
        .map(|notice| SavedNoticeView {
            id: notice.id,
            title: notice.title.clone(),
            content: notice.content.clone(),
            affiliation: notice.writer.clone(),
            created_at: notice.created_at.clone(),
            image: notice.image.clone(),
        })
        .collect();
    Ok(ok(saved))
}

async fn my_page(State(db): State<Db>, headers: HeaderMap) -> ApiResult {
    let backend = db.read().await;
    let login_id = caller(&backend, &headers)?;
    let member = member(&backend, &login_id)?;
    Ok(ok(MyPageView {
        login_id: member.login_id.clone(),
        name: member.name.clone(),
        university_name: member.university_name.clone(),
        department_name: member.department_name.clone(),
        student_num: member.student_num.clone(),
        role: member.role.clone(),
    }))
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

async fn all_notices(State(db): State<Db>, headers: HeaderMap) -> ApiResult {
    let backend = db.read().await;
    let login_id = caller(&backend, &headers)?;
    Ok(ok(notice_views(&backend, &login_id, backend.notices.values())))
}

async fn notices_by_category(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CategoryInput>,
) -> ApiResult {
    let backend = db.read().await;
    let login_id = caller(&backend, &headers)?;
    let category = parse_category(&input.categorie)?;
    Ok(ok(notice_views(
        &backend,
        &login_id,
        backend.notices.values().filter(|notice| notice.category == category),
    )))
}

async fn saved_by_category(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CategoryInput>,
) -> ApiResult {
    let backend = db.read().await;
    let login_id = caller(&backend, &headers)?;
    let category = parse_category(&input.categorie)?;
    Ok(ok(notice_views(
        &backend,
        &login_id,
        backend.notices.values().filter(|notice| {
            notice.category == category && backend.saves.contains(&(login_id.clone(), notice.id))
        }),
    )))
}

async fn unread_notices(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CategoryInput>,
) -> ApiResult {
    let backend = db.read().await;
    let login_id = caller(&backend, &headers)?;
    let category = parse_category(&input.categorie)?;
    Ok(ok(notice_views(
        &backend,
        &login_id,
        backend
            .notices
            .values()
            .filter(|notice| notice.category == category && backend.is_unread(&login_id, notice.id)),
    )))
}

async fn notice_detail(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult {
    let backend = db.read().await;
    let login_id = caller(&backend, &headers)?;
    let notice = backend.notices.get(&id).ok_or(ApiError::NotFound)?;
    Ok(ok(notice_view(&backend, &login_id, notice)))
}

async fn view_check(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult {
    let mut backend = db.write().await;
    let login_id = caller(&backend, &headers)?;
    if !backend.notices.contains_key(&id) {
        return Err(ApiError::NotFound);
    }
    if backend.views.insert((login_id, id)) {
        if let Some(notice) = backend.notices.get_mut(&id) {
            notice.view_count += 1;
        }
    }
    Ok(ack("viewed"))
}

/// Which per-member set a reaction toggles.
#[derive(Clone, Copy)]
enum Reaction {
    Like,
    Save,
}

async fn react(db: Db, headers: HeaderMap, id: i64, reaction: Reaction, on: bool) -> ApiResult {
    let mut backend = db.write().await;
    let login_id = caller(&backend, &headers)?;
    if !backend.notices.contains_key(&id) {
        return Err(ApiError::NotFound);
    }
    let key = (login_id, id);
    let set = match reaction {
        Reaction::Like => &mut backend.likes,
        Reaction::Save => &mut backend.saves,
    };
    let changed = if on { set.insert(key) } else { set.remove(&key) };
    if !changed {
        return Err(if on {
            ApiError::Conflict("already applied")
        } else {
            ApiError::NotFound
        });
    }
    if let Some(notice) = backend.notices.get_mut(&id) {
        let counter = match reaction {
            Reaction::Like => &mut notice.like_count,
            Reaction::Save => &mut notice.save_count,
        };
        *counter = if on { *counter + 1 } else { (*counter - 1).max(0) };
    }
    Ok(ack(if on { "applied" } else { "removed" }))
}

async fn like(State(db): State<Db>, headers: HeaderMap, Path(id): Path<i64>) -> ApiResult {
    react(db, headers, id, Reaction::Like, true).await
}

async fn unlike(State(db): State<Db>, headers: HeaderMap, Path(id): Path<i64>) -> ApiResult {
    react(db, headers, id, Reaction::Like, false).await
}

async fn save(State(db): State<Db>, headers: HeaderMap, Path(id): Path<i64>) -> ApiResult {
    react(db, headers, id, Reaction::Save, true).await
}

async fn unsave(State(db): State<Db>, headers: HeaderMap, Path(id): Path<i64>) -> ApiResult {
    react(db, headers, id, Reaction::Save, false).await
}

async fn create_notice(State(db): State<Db>, headers: HeaderMap, multipart: Multipart) -> ApiResult {
    let login_id = {
        let backend = db.read().await;
        let login_id = caller(&backend, &headers)?;
        let role = member(&backend, &login_id)?.role.as_str();
        if !matches!(role, "ROLE_COUNCIL" | "ROLE_ADMIN") {
            return Err(ApiError::Forbidden);
        }
        login_id
    };

    let form = Form::read(multipart).await?;
    let title = form.required("title")?;
    let content = form.required("content")?;
    let tag = form.required("tag")?;
    let has_image = form.files.get("image").is_some_and(|bytes| !bytes.is_empty());

    let mut backend = db.write().await;
    let writer = member(&backend, &login_id)?.department_name.clone();
    let id = backend.next_notice_id;
    backend.add_notice(Notice {
        id,
        title,
        content,
        writer,
        category: "학과".to_string(),
        tag,
        image: has_image.then(|| format!("{IMAGE_HOST}/notices/{id}.jpg")),
        created_at: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        like_count: 0,
        save_count: 0,
        view_count: 0,
    });
    info!(notice_id = id, login_id = %login_id, has_image, "notice created");
    Ok(ack("created"))
}

// ---------------------------------------------------------------------------
// Partners and notifications
// ---------------------------------------------------------------------------

async fn partners(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<PartnerInput>,
) -> ApiResult {
    let backend = db.read().await;
    caller(&backend, &headers)?;
    let list: Vec<_> = backend
        .partners
        .iter()
        .filter(|partner| partner.category == input.category_name)
        .cloned()
        .collect();
    Ok(ok(list))
}

async fn register_push_token(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<PushTokenInput>,
) -> ApiResult {
    let mut backend = db.write().await;
    let login_id = caller(&backend, &headers)?;
    backend.push_tokens.insert(login_id, input.fcm_token);
    Ok(ack("registered"))
}
