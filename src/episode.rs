use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::season_table::SeasonTable;

// Already-normalized "S03E12" notation, any casing.
static SEASON_EPISODE_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^S(?P<season>[0-9]+)E(?P<episode>[0-9]+)$")
        .expect("season/episode pattern is valid")
});

static ABSOLUTE_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("absolute pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EpisodeError {
    #[error("Episode {episode} is outside the season table (1..={total})")]
    OutOfRange { episode: u32, total: u32 },

    #[error("Episode {0} is a special and belongs to no season")]
    Special(u32),
}

/// A season and the episode number within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeasonEpisode {
    pub season: u32,
    pub episode: u32,
}

impl fmt::Display for SeasonEpisode {
    // Two digits is a minimum width: episode 100 renders as E100.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{:02}E{:02}", self.season, self.episode)
    }
}

/// The two ways an episode is written in a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeReference {
    Absolute(u32),
    SeasonEpisode(SeasonEpisode),
}

impl EpisodeReference {
    /// Parses an episode token such as `600` or `S16e20`.
    ///
    /// Returns `None` when the token is in neither notation or its numbers
    /// do not fit in a `u32`.
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(captures) = SEASON_EPISODE_STYLE.captures(token) {
            let season = captures["season"].parse().ok()?;
            let episode = captures["episode"].parse().ok()?;
            return Some(Self::SeasonEpisode(SeasonEpisode { season, episode }));
        }
        if ABSOLUTE_STYLE.is_match(token) {
            return token.parse().ok().map(Self::Absolute);
        }
        None
    }

    /// Resolves the reference to a season and episode, converting absolute numbers.
    pub fn resolve(self, table: &SeasonTable) -> Result<SeasonEpisode, EpisodeError> {
        match self {
            Self::Absolute(absolute) => table.locate(absolute),
            Self::SeasonEpisode(season_episode) => Ok(season_episode),
        }
    }
}

/// Returns true on a "S03E12" style token.
pub fn is_already_good_style(token: &str) -> bool {
    SEASON_EPISODE_STYLE.is_match(token)
}

/// Looks up the `S03E12` style notation for the Nth episode using the built-in table.
pub fn convert_episode(absolute: u32) -> Result<String, EpisodeError> {
    convert_episode_with(&SeasonTable::one_piece(), absolute)
}

pub fn convert_episode_with(table: &SeasonTable, absolute: u32) -> Result<String, EpisodeError> {
    table.locate(absolute).map(|season_episode| season_episode.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_minimum_width() {
        assert_eq!(SeasonEpisode { season: 7, episode: 32 }.to_string(), "S07E32");
        assert_eq!(SeasonEpisode { season: 13, episode: 100 }.to_string(), "S13E100");
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(EpisodeReference::parse("600"), Some(EpisodeReference::Absolute(600)));
        assert_eq!(
            EpisodeReference::parse("S16e20"),
            Some(EpisodeReference::SeasonEpisode(SeasonEpisode { season: 16, episode: 20 }))
        );
        assert_eq!(EpisodeReference::parse("E20"), None);
        assert_eq!(EpisodeReference::parse("12a"), None);
        assert_eq!(EpisodeReference::parse("99999999999"), None);
    }

    #[test]
    fn test_is_already_good_style() {
        assert!(is_already_good_style("S03E10"));
        assert!(is_already_good_style("s16e20"));
        assert!(!is_already_good_style("758"));
        assert!(!is_already_good_style("S03E10x"));
    }

    #[test]
    fn test_resolve_keeps_season_episode() {
        let table = SeasonTable::one_piece();
        let reference = EpisodeReference::parse("S99E01").unwrap();
        assert_eq!(reference.resolve(&table).unwrap(), SeasonEpisode { season: 99, episode: 1 });
        assert_eq!(
            EpisodeReference::Absolute(12).resolve(&table).unwrap(),
            SeasonEpisode { season: 2, episode: 4 }
        );
    }

    #[test]
    fn test_convert_episode_out_of_range() {
        assert_eq!(
            convert_episode(1120),
            Err(EpisodeError::OutOfRange { episode: 1120, total: 1119 })
        );
        assert_eq!(convert_episode(1119).unwrap(), "S22E35");
    }
}
