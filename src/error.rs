//! Error types for the library.
//!
//! [`RenameError`] covers everything that can go wrong while turning one
//! filename into another; [`TableError`] covers loading a season table.

use std::path::PathBuf;

use crate::episode::EpisodeError;

#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    /// The filename does not follow the `One Piece ... <episode> ....ext` convention.
    #[error("Does not match: {0}")]
    NoMatch(String),

    /// The episode token is numeric but does not fit an episode number.
    #[error("Invalid episode number: {0}")]
    InvalidEpisode(String),

    #[error(transparent)]
    Episode(#[from] EpisodeError),

    /// One or more command line paths could not be resolved.
    #[error("{} file(s) not found", .0.len())]
    PathNotFound(Vec<PathBuf>),
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Failed to read season table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse season table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Season table must list at least one season after the season 0 sentinel")]
    Empty,

    #[error("Season 0 is a sentinel and must be 0, found {0}")]
    Sentinel(u32),

    #[error("Specials must be absolute episode numbers of 1 or more")]
    ZeroSpecial,
}
