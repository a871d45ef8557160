//! Movie record, its request DTOs and the known genre set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::MovieId;

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

/// A genre from the fixed catalogue vocabulary.
///
/// Serialized with its display spelling (`"Sci-Fi"`, not `"SciFi"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Biography,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
    War,
}

impl Genre {
    pub const ALL: [Genre; 15] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Biography,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::War,
    ];

    /// Canonical spellings, index-aligned with [`Genre::ALL`].
    pub const NAMES: [&'static str; 15] = [
        "Action",
        "Adventure",
        "Animation",
        "Biography",
        "Comedy",
        "Crime",
        "Documentary",
        "Drama",
        "Fantasy",
        "Horror",
        "Mystery",
        "Romance",
        "Sci-Fi",
        "Thriller",
        "War",
    ];

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Case-insensitive comparison against a client-supplied genre name.
    pub fn matches(self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored movie record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: u16,
    pub director: String,
    /// Running time in minutes.
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rating: f64,
}

impl Movie {
    /// Build a record from validated input and a server-assigned id.
    pub fn new(id: MovieId, input: CreateMovie) -> Self {
        Self {
            id,
            title: input.title,
            year: input.year,
            director: input.director,
            duration: input.duration,
            poster: input.poster,
            genre: input.genre,
            rating: input.rating,
        }
    }

    /// Whether any of this movie's genres equals `name`, ignoring case.
    pub fn has_genre(&self, name: &str) -> bool {
        self.genre.iter().any(|g| g.matches(name))
    }

    /// Merge the present fields of `changes` onto this record. The id never changes.
    pub fn apply(&mut self, changes: UpdateMovie) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(year) = changes.year {
            self.year = year;
        }
        if let Some(director) = changes.director {
            self.director = director;
        }
        if let Some(duration) = changes.duration {
            self.duration = duration;
        }
        if let Some(poster) = changes.poster {
            self.poster = poster;
        }
        if let Some(genre) = changes.genre {
            self.genre = genre;
        }
        if let Some(rating) = changes.rating {
            self.rating = rating;
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (validated request payloads)
// ---------------------------------------------------------------------------

/// Fully validated input for creating a movie. Carries no id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub year: u16,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rating: f64,
}

/// Validated partial update. `None` fields are left untouched on merge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub year: Option<u16>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
    pub rating: Option<f64>,
}

impl UpdateMovie {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
