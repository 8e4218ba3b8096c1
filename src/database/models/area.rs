use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use std::str::FromStr;
use uuid::Uuid;

use super::InvalidValue;

/// Administrative area type within an upazilla.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaKind {
    Union,
    Pourashava,
}

impl AreaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaKind::Union => "union",
            AreaKind::Pourashava => "pourashava",
        }
    }
}

impl FromStr for AreaKind {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "union" => Ok(AreaKind::Union),
            "pourashava" => Ok(AreaKind::Pourashava),
            other => Err(InvalidValue {
                field: "kind",
                value: other.to_string(),
            }),
        }
    }
}

/// Union/Pourashava record, scoped to exactly one tenant partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub kind: AreaKind,
}

impl<'r> FromRow<'r, PgRow> for Area {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let kind: String = row.try_get("kind")?;
        Ok(Area {
            id: row.try_get("id")?,
            tenant_id: row.try_get("tenant_id")?,
            name: row.try_get("name")?,
            kind: kind.parse().map_err(|e: InvalidValue| sqlx::Error::ColumnDecode {
                index: "kind".into(),
                source: Box::new(e),
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_text() {
        for kind in [AreaKind::Union, AreaKind::Pourashava] {
            assert_eq!(kind.as_str().parse::<AreaKind>().unwrap(), kind);
        }
        assert!("district".parse::<AreaKind>().is_err());
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AreaKind::Pourashava).unwrap(),
            "\"pourashava\""
        );
    }
}
