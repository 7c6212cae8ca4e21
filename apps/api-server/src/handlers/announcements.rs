//! Announcement handlers.

use actix_web::{HttpResponse, web};

use noticeboard_core::domain::Announcement;
use noticeboard_core::services::AnnouncementDraft;
use noticeboard_shared::MessageResponse;
use noticeboard_shared::dto::{
    AnnouncementQuery, AnnouncementResponse, ListAnnouncementsQuery, TeacherQuery,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn announcement_response(announcement: Announcement) -> AnnouncementResponse {
    AnnouncementResponse {
        id: announcement.id.to_string(),
        title: announcement.title,
        message: announcement.message,
        start_date: announcement.start_date,
        expiration_date: announcement.expiration_date,
        created_by: announcement.created_by,
        created_at: announcement.created_at,
    }
}

fn list_response(announcements: Vec<Announcement>) -> Vec<AnnouncementResponse> {
    announcements.into_iter().map(announcement_response).collect()
}

/// Split the query into the acting teacher and the submitted fields.
/// An empty start date means "no start date".
fn into_draft(query: AnnouncementQuery) -> (String, AnnouncementDraft) {
    let draft = AnnouncementDraft {
        title: query.title,
        message: query.message,
        expiration_date: query.expiration_date,
        start_date: query.start_date.filter(|s| !s.is_empty()),
    };

    (query.teacher_username, draft)
}

/// GET /announcements
pub async fn list_announcements(
    state: web::Data<AppState>,
    query: web::Query<ListAnnouncementsQuery>,
) -> AppResult<HttpResponse> {
    let announcements = state.announcements.list(query.active_only).await?;

    Ok(HttpResponse::Ok().json(list_response(announcements)))
}

/// GET /announcements/all
pub async fn list_all_announcements(
    state: web::Data<AppState>,
    query: web::Query<TeacherQuery>,
) -> AppResult<HttpResponse> {
    let announcements = state
        .announcements
        .list_all(&query.teacher_username)
        .await?;

    Ok(HttpResponse::Ok().json(list_response(announcements)))
}

/// POST /announcements
pub async fn create_announcement(
    state: web::Data<AppState>,
    query: web::Query<AnnouncementQuery>,
) -> AppResult<HttpResponse> {
    let (teacher, draft) = into_draft(query.into_inner());

    let announcement = state.announcements.create(&teacher, draft).await?;

    Ok(HttpResponse::Ok().json(announcement_response(announcement)))
}

/// PUT /announcements/{announcement_id}
pub async fn update_announcement(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<AnnouncementQuery>,
) -> AppResult<HttpResponse> {
    let (teacher, draft) = into_draft(query.into_inner());

    let announcement = state
        .announcements
        .update(&teacher, &path.into_inner(), draft)
        .await?;

    Ok(HttpResponse::Ok().json(announcement_response(announcement)))
}

/// DELETE /announcements/{announcement_id}
pub async fn delete_announcement(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<TeacherQuery>,
) -> AppResult<HttpResponse> {
    state
        .announcements
        .delete(&query.teacher_username, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Announcement deleted successfully")))
}
