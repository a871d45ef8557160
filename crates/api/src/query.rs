//! Query parameter types for API handlers.

/// Query parameters for `GET /movies` (`?genre=`).
#[derive(Debug, Default)]
pub struct MovieListParams {
    pub genre: Option<String>,
}

impl MovieListParams {
    /// Build from raw `key=value` pairs. The first `genre` wins; repeated
    /// and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let genre = pairs
            .into_iter()
            .find(|(key, _)| key == "genre")
            .map(|(_, value)| value);
        Self { genre }
    }

    /// The genre to filter by. An empty `genre=` means no filter.
    pub fn genre_filter(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}
