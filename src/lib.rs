//! Renames One Piece episode files from absolute episode numbers to
//! season/episode notation, e.g. `One Piece - 600 Title.mkv` becomes
//! `One Piece S16E22 Title.mkv`.

pub mod episode;
pub mod error;
pub mod logging;
pub mod rename_engine;
pub mod season_table;

pub use episode::{EpisodeError, EpisodeReference, SeasonEpisode, convert_episode};
pub use error::{RenameError, TableError};
pub use rename_engine::{
    FilenameMatch, RenameOutcome, RenameSummary, Renamer, classify, resolve_all_or_fail,
};
pub use season_table::SeasonTable;
