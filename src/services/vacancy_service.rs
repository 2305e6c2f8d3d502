use crate::error::Result;
use crate::models::vacancy::CommunityVacancy;
use futures_util::TryStreamExt;
use mongodb::Collection;

#[derive(Clone)]
pub struct VacancyService {
    collection: Collection<CommunityVacancy>,
}

impl VacancyService {
    pub fn new(collection: Collection<CommunityVacancy>) -> Self {
        Self { collection }
    }

    /// Fetch every record in the collection, materialized as plain data.
    ///
    /// No filter, no limit, no projection. Any cursor error aborts the whole
    /// read so callers never see partial data.
    pub async fn find_all(&self) -> Result<Vec<CommunityVacancy>> {
        let cursor = self.collection.find(bson::doc! {}).await?;
        let records = cursor.try_collect().await?;
        Ok(records)
    }
}
