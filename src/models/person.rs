//! Person model matching the MovieLab wire format.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Eye or hair color of a person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Green,
    Red,
    Black,
    Yellow,
    Orange,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Green => "GREEN",
            Color::Red => "RED",
            Color::Black => "BLACK",
            Color::Yellow => "YELLOW",
            Color::Orange => "ORANGE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GREEN" => Some(Color::Green),
            "RED" => Some(Color::Red),
            "BLACK" => Some(Color::Black),
            "YELLOW" => Some(Color::Yellow),
            "ORANGE" => Some(Color::Orange),
            _ => None,
        }
    }
}

/// Nationality of a person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Country {
    China,
    Vatican,
    NorthKorea,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::China => "CHINA",
            Country::Vatican => "VATICAN",
            Country::NorthKorea => "NORTH_KOREA",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CHINA" => Some(Country::China),
            "VATICAN" => Some(Country::Vatican),
            "NORTH_KOREA" => Some(Country::NorthKorea),
            _ => None,
        }
    }
}

/// Spatial position of a person record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: f64,
    pub z: f32,
}

/// A person record as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<Color>,
    pub hair_color: Color,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<Country>,
}

/// Denormalized snapshot of a person, embedded in movie records.
///
/// Deserialization ignores any extra person fields the server includes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: i64,
    pub name: String,
}

impl From<&Person> for PersonRef {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
        }
    }
}

/// Write payload for creating or fully replacing a person.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<Color>,
    pub hair_color: Color,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<Country>,
}

/// Edit-surface state for a person.
///
/// `id` selects update (`Some`) versus create (`None`).
#[derive(Debug, Clone)]
pub struct PersonForm {
    pub id: Option<i64>,
    pub name: String,
    pub eye_color: Option<Color>,
    pub hair_color: Color,
    pub location: Location,
    pub birthday: Option<NaiveDateTime>,
    pub nationality: Option<Country>,
}

impl PersonForm {
    /// Build the write payload for this form.
    pub fn to_payload(&self) -> PersonPayload {
        PersonPayload {
            name: self.name.clone(),
            eye_color: self.eye_color.clone(),
            hair_color: self.hair_color.clone(),
            location: self.location.clone(),
            birthday: self.birthday,
            nationality: self.nationality.clone(),
        }
    }
}
