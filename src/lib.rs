pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::models::vacancy::CommunityVacancy;
use crate::services::vacancy_service::VacancyService;
use mongodb::Collection;

#[derive(Clone)]
pub struct AppState {
    pub vacancy_service: VacancyService,
}

impl AppState {
    pub fn new(collection: Collection<CommunityVacancy>) -> Self {
        let vacancy_service = VacancyService::new(collection);

        Self { vacancy_service }
    }
}
