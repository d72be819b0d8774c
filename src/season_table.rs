use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::episode::{EpisodeError, SeasonEpisode};
use crate::error::TableError;

// Source: https://thetvdb.com/series/one-piece#seasons
const ONE_PIECE_EPISODES_PER_SEASON: [u32; 23] = [
    0,   // Season  0
    8,   // Season  1
    22,  // Season  2
    17,  // Season  3
    13,  // Season  4
    9,   // Season  5
    22,  // Season  6
    39,  // Season  7
    13,  // Season  8
    52,  // Season  9
    31,  // Season 10
    99,  // Season 11
    56,  // Season 12
    100, // Season 13
    35,  // Season 14
    62,  // Season 15
    49,  // Season 16
    118, // Season 17
    33,  // Season 18
    98,  // Season 19
    14,  // Season 20
    194, // Season 21
    35,  // Season 22
];

/// Episode counts per season, indexed by season number.
///
/// Index 0 is a sentinel that is always 0 and never matched. `specials` are
/// absolute episode numbers that were broadcast inside the running count but
/// are not part of any season; they are skipped when locating an episode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSeasonTable")]
pub struct SeasonTable {
    episodes: Vec<u32>,
    specials: Vec<u32>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSeasonTable {
    episodes: Vec<u32>,
    #[serde(default)]
    specials: Vec<u32>,
}

impl TryFrom<RawSeasonTable> for SeasonTable {
    type Error = TableError;

    fn try_from(raw: RawSeasonTable) -> Result<Self, Self::Error> {
        SeasonTable::new(raw.episodes)?.with_specials(raw.specials)
    }
}

impl SeasonTable {
    pub fn new(episodes: Vec<u32>) -> Result<Self, TableError> {
        match episodes.first() {
            None => return Err(TableError::Empty),
            Some(&sentinel) if sentinel != 0 => return Err(TableError::Sentinel(sentinel)),
            Some(_) => {}
        }
        if episodes.len() < 2 {
            return Err(TableError::Empty);
        }

        Ok(Self {
            episodes,
            specials: Vec::new(),
        })
    }

    /// The built-in One Piece table.
    pub fn one_piece() -> Self {
        Self {
            episodes: ONE_PIECE_EPISODES_PER_SEASON.to_vec(),
            specials: Vec::new(),
        }
    }

    /// Episode 0 is not a valid special; it would shift every episode below 1.
    pub fn with_specials(mut self, mut specials: Vec<u32>) -> Result<Self, TableError> {
        if specials.contains(&0) {
            return Err(TableError::ZeroSpecial);
        }
        specials.sort_unstable();
        specials.dedup();
        self.specials = specials;
        Ok(self)
    }

    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Number of real seasons, not counting the sentinel.
    pub fn seasons(&self) -> u32 {
        (self.episodes.len() - 1) as u32
    }

    pub fn episodes_in(&self, season: u32) -> Option<u32> {
        if season == 0 {
            return None;
        }
        self.episodes.get(season as usize).copied()
    }

    pub fn specials(&self) -> &[u32] {
        &self.specials
    }

    pub fn is_special(&self, absolute: u32) -> bool {
        self.specials.binary_search(&absolute).is_ok()
    }

    /// Highest absolute episode number the table can resolve, specials included.
    pub fn total_episodes(&self) -> u32 {
        self.episodes
            .iter()
            .fold(self.specials.len() as u32, |total, &count| total.saturating_add(count))
    }

    /// Finds the season an absolute episode number falls into.
    ///
    /// Walks the seasons in order, subtracting each season's count while the
    /// remainder is strictly greater than it. The last episode of a season
    /// therefore stays in that season.
    pub fn locate(&self, absolute: u32) -> Result<SeasonEpisode, EpisodeError> {
        let out_of_range = || EpisodeError::OutOfRange {
            episode: absolute,
            total: self.total_episodes(),
        };

        if absolute == 0 {
            return Err(out_of_range());
        }
        if self.is_special(absolute) {
            return Err(EpisodeError::Special(absolute));
        }

        let skipped = self.specials.partition_point(|&special| special < absolute) as u32;
        let mut remainder = absolute - skipped;
        let mut season = 1;

        loop {
            let count = self.episodes_in(season).ok_or_else(out_of_range)?;
            if remainder <= count {
                return Ok(SeasonEpisode {
                    season,
                    episode: remainder,
                });
            }
            remainder -= count;
            season += 1;
        }
    }
}

impl Default for SeasonTable {
    fn default() -> Self {
        Self::one_piece()
    }
}
