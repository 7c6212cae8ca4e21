//! Teacher authentication handlers.
//!
//! There is no session token: clients keep the username and present it on
//! each call.

use actix_web::{HttpResponse, web};

use noticeboard_core::domain::Teacher;
use noticeboard_shared::dto::{LoginQuery, SessionQuery, TeacherResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn teacher_response(teacher: Teacher) -> TeacherResponse {
    TeacherResponse {
        username: teacher.username,
        display_name: teacher.display_name,
        role: teacher.role,
    }
}

/// POST /auth/login
pub async fn login(
    state: web::Data<AppState>,
    query: web::Query<LoginQuery>,
) -> AppResult<HttpResponse> {
    let LoginQuery { username, password } = query.into_inner();

    let teacher = state.auth.login(&username, &password).await?;

    Ok(HttpResponse::Ok().json(teacher_response(teacher)))
}

/// GET /auth/check-session
pub async fn check_session(
    state: web::Data<AppState>,
    query: web::Query<SessionQuery>,
) -> AppResult<HttpResponse> {
    let teacher = state.auth.check_session(&query.username).await?;

    Ok(HttpResponse::Ok().json(teacher_response(teacher)))
}
