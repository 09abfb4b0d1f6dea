//! Movie model matching the MovieLab wire format.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::person::PersonRef;

/// Genre classification for a movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovieGenre {
    Action,
    Western,
    Adventure,
    Thriller,
    Horror,
}

impl MovieGenre {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieGenre::Action => "ACTION",
            MovieGenre::Western => "WESTERN",
            MovieGenre::Adventure => "ADVENTURE",
            MovieGenre::Thriller => "THRILLER",
            MovieGenre::Horror => "HORROR",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ACTION" => Some(MovieGenre::Action),
            "WESTERN" => Some(MovieGenre::Western),
            "ADVENTURE" => Some(MovieGenre::Adventure),
            "THRILLER" => Some(MovieGenre::Thriller),
            "HORROR" => Some(MovieGenre::Horror),
            _ => None,
        }
    }
}

/// MPAA age rating for a movie.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MpaaRating {
    G,
    PG,
    #[serde(rename = "PG_13")]
    PG13,
    #[serde(rename = "NC_17")]
    NC17,
}

impl MpaaRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            MpaaRating::G => "G",
            MpaaRating::PG => "PG",
            MpaaRating::PG13 => "PG_13",
            MpaaRating::NC17 => "NC_17",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "G" => Some(MpaaRating::G),
            "PG" => Some(MpaaRating::PG),
            "PG_13" => Some(MpaaRating::PG13),
            "NC_17" => Some(MpaaRating::NC17),
            _ => None,
        }
    }
}

/// Grid position of a movie record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i64,
    pub y: i64,
}

/// A movie record as returned by the server.
///
/// `id` and `creation_date` are assigned server-side and never sent by the
/// client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub creation_date: NaiveDateTime,
    pub genre: MovieGenre,
    pub mpaa_rating: MpaaRating,
    pub oscars_count: i32,
    pub budget: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_box_office: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub golden_palm_count: Option<i64>,
    pub coordinates: Coordinates,
    pub operator: PersonRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<PersonRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenwriter: Option<PersonRef>,
}

/// Write payload for creating or fully replacing a movie.
///
/// Optional fields left as `None` are omitted from the serialized JSON
/// rather than sent as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePayload {
    pub name: String,
    pub genre: MovieGenre,
    pub mpaa_rating: MpaaRating,
    pub oscars_count: i32,
    pub budget: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_box_office: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub golden_palm_count: Option<i64>,
    pub coordinates: Coordinates,
    pub operator: PersonRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<PersonRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenwriter: Option<PersonRef>,
}

/// Edit-surface state for a movie, with person references as bare ids.
///
/// `id` selects update (`Some`) versus create (`None`). The coordinator
/// resolves the id fields into [`PersonRef`] snapshots at save time.
#[derive(Debug, Clone)]
pub struct MovieForm {
    pub id: Option<i64>,
    pub name: String,
    pub genre: MovieGenre,
    pub mpaa_rating: MpaaRating,
    pub oscars_count: i32,
    pub budget: f32,
    pub total_box_office: Option<i64>,
    pub length: Option<i64>,
    pub golden_palm_count: Option<i64>,
    pub coordinates: Coordinates,
    pub operator_id: Option<i64>,
    pub director_id: Option<i64>,
    pub screenwriter_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_parses_with_absent_optionals() {
        let json = serde_json::json!({
            "id": 7,
            "name": "Stalker",
            "creationDate": "2024-05-10T14:30:00",
            "genre": "THRILLER",
            "mpaaRating": "PG_13",
            "oscarsCount": 2,
            "budget": 1500000.5,
            "coordinates": { "x": -3, "y": 12 },
            "operator": { "id": 4, "name": "A. Knyazhinsky" }
        });

        let movie: Movie = serde_json::from_value(json).unwrap();
        assert_eq!(movie.id, 7);
        assert_eq!(movie.genre, MovieGenre::Thriller);
        assert_eq!(movie.mpaa_rating, MpaaRating::PG13);
        assert_eq!(movie.total_box_office, None);
        assert_eq!(movie.length, None);
        assert_eq!(movie.golden_palm_count, None);
        assert!(movie.director.is_none());
        assert_eq!(movie.operator.id, 4);
    }

    #[test]
    fn test_payload_omits_absent_optionals() {
        let payload = MoviePayload {
            name: "Alien".to_string(),
            genre: MovieGenre::Horror,
            mpaa_rating: MpaaRating::NC17,
            oscars_count: 1,
            budget: 11000000.0,
            total_box_office: Some(184000000),
            length: None,
            golden_palm_count: None,
            coordinates: Coordinates { x: 0, y: 0 },
            operator: PersonRef {
                id: 1,
                name: "R. Scott".to_string(),
            },
            director: None,
            screenwriter: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["mpaaRating"], "NC_17");
        assert_eq!(obj["totalBoxOffice"], 184000000);
        assert!(!obj.contains_key("length"));
        assert!(!obj.contains_key("goldenPalmCount"));
        assert!(!obj.contains_key("director"));
        assert!(!obj.contains_key("screenwriter"));
    }

    #[test]
    fn test_enum_wire_names_round_trip() {
        for s in ["G", "PG", "PG_13", "NC_17"] {
            assert_eq!(MpaaRating::from_str(s).unwrap().as_str(), s);
        }
        for s in ["ACTION", "WESTERN", "ADVENTURE", "THRILLER", "HORROR"] {
            assert_eq!(MovieGenre::from_str(s).unwrap().as_str(), s);
        }
        assert!(MpaaRating::from_str("PG-13").is_none());
    }
}
