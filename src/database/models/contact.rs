use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use std::str::FromStr;
use uuid::Uuid;

use super::InvalidValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactCategory {
    Admin,
    Police,
    Defence,
}

impl ContactCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactCategory::Admin => "admin",
            ContactCategory::Police => "police",
            ContactCategory::Defence => "defence",
        }
    }
}

impl FromStr for ContactCategory {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(ContactCategory::Admin),
            "police" => Ok(ContactCategory::Police),
            "defence" => Ok(ContactCategory::Defence),
            other => Err(InvalidValue {
                field: "category",
                value: other.to_string(),
            }),
        }
    }
}

/// Key contact for an upazilla (district officials, police, defence).
/// Partition-scoped, not tied to a specific area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyContact {
    pub id: Uuid,
    pub name: String,
    pub designation: String,
    pub phone: String,
    pub category: ContactCategory,
    pub rank: i32,
}

impl<'r> FromRow<'r, PgRow> for KeyContact {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let category: String = row.try_get("category")?;
        Ok(KeyContact {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            designation: row.try_get("designation")?,
            phone: row.try_get("phone")?,
            category: category
                .parse()
                .map_err(|e: InvalidValue| sqlx::Error::ColumnDecode {
                    index: "category".into(),
                    source: Box::new(e),
                })?,
            rank: row.try_get("rank")?,
        })
    }
}

/// Order contacts ascending by rank. The input is expected in insertion
/// order; the sort is stable, so equal ranks keep their relative creation
/// order.
pub fn order_by_rank(contacts: &mut [KeyContact]) {
    contacts.sort_by_key(|c| c.rank);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, rank: i32) -> KeyContact {
        KeyContact {
            id: Uuid::new_v4(),
            name: name.to_string(),
            designation: "UNO".to_string(),
            phone: "01700000000".to_string(),
            category: ContactCategory::Admin,
            rank,
        }
    }

    #[test]
    fn orders_ascending_by_rank() {
        let mut contacts = vec![contact("c", 3), contact("a", 1), contact("b", 2)];
        order_by_rank(&mut contacts);
        let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn equal_ranks_keep_insertion_order() {
        let mut contacts = vec![
            contact("first", 1),
            contact("second", 1),
            contact("third", 0),
            contact("fourth", 1),
        ];
        order_by_rank(&mut contacts);
        let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["third", "first", "second", "fourth"]);
    }

    #[test]
    fn category_round_trips_through_text() {
        for cat in [
            ContactCategory::Admin,
            ContactCategory::Police,
            ContactCategory::Defence,
        ] {
            assert_eq!(cat.as_str().parse::<ContactCategory>().unwrap(), cat);
        }
        assert!("military".parse::<ContactCategory>().is_err());
    }
}
