use crate::catalog::{self, Catalog, Quantity};
use crate::error::AppError;
use crate::input::{self, RawInput};
use crate::predictor::Predictor;
use crate::users::{AttendanceOutcome, RegisterOutcome, SecurityQuestion, UserStore};
use actix_web::{web, HttpResponse};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

pub struct AppState {
    pub store: Mutex<UserStore>,
    /// Usernames that are currently logged in.
    pub sessions: Mutex<HashSet<String>>,
    pub predictor: Predictor,
}

impl AppState {
    pub fn new(store: UserStore, predictor: Predictor) -> Self {
        Self {
            store: Mutex::new(store),
            sessions: Mutex::new(HashSet::new()),
            predictor,
        }
    }

    fn store(&self) -> Result<MutexGuard<'_, UserStore>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::Internal("user store lock poisoned".into()))
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashSet<String>>, AppError> {
        self.sessions
            .lock()
            .map_err(|_| AppError::Internal("session lock poisoned".into()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub dob: NaiveDate,
    pub security_question: SecurityQuestion,
    pub security_answer: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub username: String,
    pub security_question: SecurityQuestion,
    pub security_answer: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub item: Option<String>,
    pub quantity: Option<String>,
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("Personal Fitness Tracker API is running!")
}

async fn security_questions() -> HttpResponse {
    let questions: Vec<&str> = SecurityQuestion::ALL.iter().map(|q| q.text()).collect();
    HttpResponse::Ok().json(questions)
}

async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    if req.username.trim().is_empty() {
        return Err(AppError::BadRequest("Username must not be empty".into()));
    }
    if req.password != req.confirm_password {
        return Err(AppError::BadRequest("Passwords do not match!".into()));
    }
    if req.dob > Local::now().date_naive() {
        return Err(AppError::BadRequest("Date of birth cannot be in the future".into()));
    }

    let outcome = state.store()?.register(
        &req.username,
        &req.password,
        &req.name,
        req.dob,
        req.security_question,
        &req.security_answer,
    )?;

    Ok(match outcome {
        RegisterOutcome::Created => {
            HttpResponse::Ok().json(MessageResponse::ok("Registration successful! Please login."))
        }
        RegisterOutcome::UsernameTaken => {
            HttpResponse::Conflict().json(MessageResponse::failed("Username already exists!"))
        }
    })
}

async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    if !state.store()?.verify(&req.username, &req.password) {
        warn!("Failed login for {}", req.username);
        return Ok(HttpResponse::Unauthorized()
            .json(MessageResponse::failed("Invalid username or password")));
    }

    state.sessions()?.insert(req.username.clone());
    info!("User {} logged in", req.username);
    Ok(HttpResponse::Ok().json(MessageResponse::ok("Logged in successfully!")))
}

async fn logout(
    state: web::Data<AppState>,
    req: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    if state.sessions()?.remove(&req.username) {
        info!("User {} logged out", req.username);
    }
    Ok(HttpResponse::Ok().json(MessageResponse::ok("Logged out")))
}

async fn reset_password(
    state: web::Data<AppState>,
    req: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    let reset = state.store()?.reset_password(
        &req.username,
        req.security_question,
        &req.security_answer,
        &req.new_password,
    )?;

    Ok(if reset {
        HttpResponse::Ok().json(MessageResponse::ok("Password reset successfully! Please login."))
    } else {
        HttpResponse::BadRequest().json(MessageResponse::failed("Invalid security question or answer!"))
    })
}

async fn mark_attendance(
    state: web::Data<AppState>,
    req: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    if !state.sessions()?.contains(&req.username) {
        return Err(AppError::Unauthorized(req.username.clone()));
    }

    let today = Local::now().date_naive();
    let outcome = state.store()?.mark_attendance(&req.username, today)?;

    Ok(HttpResponse::Ok().json(match outcome {
        AttendanceOutcome::Marked => MessageResponse::ok("Attendance marked for today!"),
        AttendanceOutcome::AlreadyMarked => {
            MessageResponse::failed("You have already marked attendance for today.")
        }
    }))
}

/// No category lists categories, a category lists its items, and both
/// return the entry.
fn browse<T: Serialize + 'static>(catalog: Catalog<T>, query: &CatalogQuery) -> Result<HttpResponse, AppError> {
    let Some(category) = query.category.as_deref() else {
        return Ok(HttpResponse::Ok().json(catalog.categories()));
    };
    let section = catalog
        .section(category)
        .ok_or_else(|| AppError::NotFound(format!("Unknown category: {category}")))?;

    match query.item.as_deref() {
        None => Ok(HttpResponse::Ok().json(section.item_names())),
        Some(item) => section
            .item(item)
            .map(|value| HttpResponse::Ok().json(value))
            .ok_or_else(|| AppError::NotFound(format!("Unknown item: {item}"))),
    }
}

async fn foods(query: web::Query<CatalogQuery>) -> Result<HttpResponse, AppError> {
    let (Some(category), Some(item)) = (query.category.as_deref(), query.item.as_deref()) else {
        return browse(catalog::foods(), &query);
    };

    let quantity = match query.quantity.as_deref() {
        None => Quantity::Kg1,
        Some(label) => Quantity::from_label(label)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown quantity: {label}")))?,
    };

    catalog::food_nutrition(category, item, quantity)
        .map(|nutrition| HttpResponse::Ok().json(nutrition))
        .ok_or_else(|| AppError::NotFound(format!("Unknown food: {category} / {item}")))
}

async fn food_quantities() -> HttpResponse {
    let labels: Vec<&str> = Quantity::ALL.iter().map(|q| q.label()).collect();
    HttpResponse::Ok().json(labels)
}

async fn juices(query: web::Query<CatalogQuery>) -> Result<HttpResponse, AppError> {
    browse(catalog::juices(), &query)
}

async fn equipment(query: web::Query<CatalogQuery>) -> Result<HttpResponse, AppError> {
    browse(catalog::equipment(), &query)
}

async fn exercise_styles(query: web::Query<CatalogQuery>) -> Result<HttpResponse, AppError> {
    browse(catalog::exercise_styles(), &query)
}

async fn age_guide(query: web::Query<CatalogQuery>) -> Result<HttpResponse, AppError> {
    match query.category.as_deref() {
        None => Ok(HttpResponse::Ok().json(catalog::age_groups())),
        Some(group) => catalog::age_guide(group)
            .map(|advice| HttpResponse::Ok().json(advice))
            .ok_or_else(|| AppError::NotFound(format!("Unknown age group: {group}"))),
    }
}

async fn workouts(query: web::Query<CatalogQuery>) -> Result<HttpResponse, AppError> {
    match query.category.as_deref() {
        None => Ok(HttpResponse::Ok().json(catalog::workout_types())),
        Some(kind) => catalog::workout_exercises(kind)
            .map(|exercises| HttpResponse::Ok().json(exercises))
            .ok_or_else(|| AppError::NotFound(format!("Unknown workout type: {kind}"))),
    }
}

async fn predict(
    state: web::Data<AppState>,
    req: web::Json<RawInput>,
) -> Result<HttpResponse, AppError> {
    let collected = input::collect(&req)?;

    // training is CPU bound; keep it off the async workers
    let predictor = state.predictor.clone();
    let report = web::block(move || predictor.predict(&collected))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(report))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/security-questions", web::get().to(security_questions))
        .route("/register", web::post().to(register))
        .route("/login", web::post().to(login))
        .route("/logout", web::post().to(logout))
        .route("/reset-password", web::post().to(reset_password))
        .route("/attendance", web::post().to(mark_attendance))
        .route("/catalog/foods", web::get().to(foods))
        .route("/catalog/foods/quantities", web::get().to(food_quantities))
        .route("/catalog/juices", web::get().to(juices))
        .route("/catalog/equipment", web::get().to(equipment))
        .route("/catalog/age-guide", web::get().to(age_guide))
        .route("/catalog/workouts", web::get().to(workouts))
        .route("/catalog/exercise-styles", web::get().to(exercise_styles))
        .route("/predict", web::post().to(predict));
}
