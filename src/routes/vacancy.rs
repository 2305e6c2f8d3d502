use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/community-vacancy",
    responses(
        (status = 200, description = "All vacancy records as a bare JSON array"),
        (status = 500, description = "Database unreachable or query failed")
    )
)]
#[axum::debug_handler]
pub async fn list_community_vacancies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let records = state.vacancy_service.find_all().await?;
    Ok(Json(records))
}
