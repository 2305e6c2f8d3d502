use bson::Document;
use serde::{Deserialize, Serialize};

/// A vacancy record as stored in the collection.
///
/// The collection is schema-less: no field set is declared or enforced, so
/// the record is a transparent wrapper over a raw BSON document and whatever
/// shape is present passes through to the response unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommunityVacancy(pub Document);

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn serializes_transparently_without_field_coercion() {
        let record = CommunityVacancy(doc! {
            "communityname": "Oakwood",
            "apt_vacant": 3,
        });

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "communityname": "Oakwood", "apt_vacant": 3 })
        );
    }
}
