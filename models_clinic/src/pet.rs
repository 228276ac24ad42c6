use chrono::{DateTime, NaiveDate, Utc};
use utoipa::ToSchema;
use uuid::Uuid;

/// Pet gender, stored and serialized as a single-letter code.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const CODES: [&'static str; 2] = ["M", "F"];

    pub fn as_code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Pet species, stored and serialized as a single-letter code.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum Species {
    #[serde(rename = "d")]
    Dog,
    #[serde(rename = "c")]
    Cat,
}

impl Species {
    pub const CODES: [&'static str; 2] = ["d", "c"];

    pub fn as_code(self) -> &'static str {
        match self {
            Species::Dog => "d",
            Species::Cat => "c",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "d" => Some(Species::Dog),
            "c" => Some(Species::Cat),
            _ => None,
        }
    }
}

/// A pet. Always belongs to exactly one [Owner](crate::Owner); the wire
/// field `owner` carries the owner id.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Pet {
    pub id: Uuid,
    pub name: String,
    pub gender: Gender,
    pub species: Species,
    pub breed: String,
    pub birth_date: Option<NaiveDate>,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
