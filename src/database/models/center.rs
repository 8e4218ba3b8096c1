use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{FromRow, Row};
use std::str::FromStr;
use uuid::Uuid;

use super::InvalidValue;

/// Officer assignment embedded in a voting center record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    pub name: String,
    pub position: String,
    pub phone: String,
}

/// Security classification of a voting center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CenterCategory {
    Safe,
    ModerateSafe,
    Danger,
}

impl CenterCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CenterCategory::Safe => "safe",
            CenterCategory::ModerateSafe => "moderate-safe",
            CenterCategory::Danger => "danger",
        }
    }
}

impl FromStr for CenterCategory {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "safe" => Ok(CenterCategory::Safe),
            "moderate-safe" => Ok(CenterCategory::ModerateSafe),
            "danger" => Ok(CenterCategory::Danger),
            other => Err(InvalidValue {
                field: "category",
                value: other.to_string(),
            }),
        }
    }
}

/// Full voting-center projection. This is the canonical record and the
/// only writable form; listings use [`CenterSummary`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotingCenter {
    pub id: Uuid,
    pub area_id: Uuid,
    pub name: String,
    pub location: String,
    pub map_link: Option<String>,
    pub image_url: Option<String>,
    pub presiding_officer: Officer,
    pub assistant_presiding_officer: Officer,
    pub police_officer: Officer,
    pub category: Option<CenterCategory>,
    pub comment: Option<String>,
}

/// Lite projection returned by center listings. Every field is drawn from
/// the full record, so the subset invariant holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterSummary {
    pub id: Uuid,
    pub area_id: Uuid,
    pub name: String,
    pub location: String,
    pub category: Option<CenterCategory>,
}

impl From<&VotingCenter> for CenterSummary {
    fn from(center: &VotingCenter) -> Self {
        Self {
            id: center.id,
            area_id: center.area_id,
            name: center.name.clone(),
            location: center.location.clone(),
            category: center.category,
        }
    }
}

fn decode_category(row: &PgRow) -> Result<Option<CenterCategory>, sqlx::Error> {
    let raw: Option<String> = row.try_get("category")?;
    raw.map(|s| {
        s.parse::<CenterCategory>()
            .map_err(|e: InvalidValue| sqlx::Error::ColumnDecode {
                index: "category".into(),
                source: Box::new(e),
            })
    })
    .transpose()
}

impl<'r> FromRow<'r, PgRow> for VotingCenter {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let presiding: Json<Officer> = row.try_get("presiding_officer")?;
        let assistant: Json<Officer> = row.try_get("assistant_presiding_officer")?;
        let police: Json<Officer> = row.try_get("police_officer")?;
        Ok(VotingCenter {
            id: row.try_get("id")?,
            area_id: row.try_get("area_id")?,
            name: row.try_get("name")?,
            location: row.try_get("location")?,
            map_link: row.try_get("map_link")?,
            image_url: row.try_get("image_url")?,
            presiding_officer: presiding.0,
            assistant_presiding_officer: assistant.0,
            police_officer: police.0,
            category: decode_category(row)?,
            comment: row.try_get("comment")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CenterSummary {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(CenterSummary {
            id: row.try_get("id")?,
            area_id: row.try_get("area_id")?,
            name: row.try_get("name")?,
            location: row.try_get("location")?,
            category: decode_category(row)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_center() -> VotingCenter {
        VotingCenter {
            id: Uuid::new_v4(),
            area_id: Uuid::new_v4(),
            name: "Char Union High School".to_string(),
            location: "Char Union, Ward 3".to_string(),
            map_link: Some("https://maps.example.com/x".to_string()),
            image_url: None,
            presiding_officer: Officer {
                name: "A. Rahman".to_string(),
                position: "Headmaster".to_string(),
                phone: "01700000001".to_string(),
            },
            assistant_presiding_officer: Officer::default(),
            police_officer: Officer {
                name: "S. Islam".to_string(),
                position: "SI".to_string(),
                phone: "01700000002".to_string(),
            },
            category: Some(CenterCategory::Danger),
            comment: Some("River crossing floods during monsoon".to_string()),
        }
    }

    #[test]
    fn summary_fields_equal_full_record_fields() {
        let full = sample_center();
        let lite = CenterSummary::from(&full);
        assert_eq!(lite.id, full.id);
        assert_eq!(lite.area_id, full.area_id);
        assert_eq!(lite.name, full.name);
        assert_eq!(lite.location, full.location);
        assert_eq!(lite.category, full.category);
    }

    #[test]
    fn summary_is_a_strict_subset_of_full_projection() {
        let full = sample_center();
        let full_json = serde_json::to_value(&full).unwrap();
        let lite_json = serde_json::to_value(CenterSummary::from(&full)).unwrap();

        let full_map = full_json.as_object().unwrap();
        let lite_map = lite_json.as_object().unwrap();

        for (key, value) in lite_map {
            assert_eq!(full_map.get(key), Some(value), "field diverged: {}", key);
        }
        assert!(lite_map.len() < full_map.len());
    }

    #[test]
    fn category_round_trips_through_text() {
        for cat in [
            CenterCategory::Safe,
            CenterCategory::ModerateSafe,
            CenterCategory::Danger,
        ] {
            assert_eq!(cat.as_str().parse::<CenterCategory>().unwrap(), cat);
        }
        assert!("unsafe".parse::<CenterCategory>().is_err());
    }

    #[test]
    fn category_wire_name_is_kebab_case() {
        assert_eq!(
            serde_json::to_string(&CenterCategory::ModerateSafe).unwrap(),
            "\"moderate-safe\""
        );
    }
}
