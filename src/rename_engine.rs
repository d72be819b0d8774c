use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::episode::{EpisodeReference, is_already_good_style};
use crate::error::RenameError;
use crate::season_table::SeasonTable;

pub const UNIFORM_PREFIX: &str = "One Piece ";

// Real world examples:
//   One Piece - 711 - The Man's Pride! Bellamy's Last Charge! (1080p FUNI WEB-DL -KS-).mkv
//   One Piece S16e20 Shocking! The True Identity Of The Mystery Man Vergo!.mkv
//   one.piece.1.mkv
static EPISODE_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<prefix>one[\s\p{P}]+piece).*?[\s.](?P<episode>S[0-9]+E[0-9]+|[0-9]+)(?P<suffix>.*\.\w+)$",
    )
    .expect("episode filename pattern is valid")
});

/// A filename split around its episode token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameMatch<'a> {
    pub prefix: &'a str,
    pub episode: &'a str,
    pub suffix: &'a str,
}

/// Splits `filename` into show prefix, episode token and suffix.
///
/// The whole filename has to match. Filler between the show name and the
/// episode token is matched lazily, so the first number after the show name
/// is taken as the episode.
pub fn classify(filename: &str) -> Option<FilenameMatch<'_>> {
    let captures = EPISODE_FILENAME.captures(filename)?;
    Some(FilenameMatch {
        prefix: captures.name("prefix")?.as_str(),
        episode: captures.name("episode")?.as_str(),
        suffix: captures.name("suffix")?.as_str(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Skipped,
    Renamed(PathBuf),
    Failed(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RenameSummary {
    pub fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Skipped => self.skipped += 1,
            RenameOutcome::Renamed(_) => self.renamed += 1,
            RenameOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.renamed + self.skipped + self.failed
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renamer {
    table: SeasonTable,
}

impl Renamer {
    pub fn new(table: SeasonTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &SeasonTable {
        &self.table
    }

    /// Converts `One Piece - 600 BlaBla.mkv` into `One Piece S16E22 BlaBla.mkv`.
    pub fn try_convert_filename(&self, filename: &str) -> Result<String, RenameError> {
        let matched = classify(filename).ok_or_else(|| RenameError::NoMatch(filename.to_string()))?;

        let episode = if is_already_good_style(matched.episode) {
            matched.episode.to_string()
        } else {
            let reference = EpisodeReference::parse(matched.episode)
                .ok_or_else(|| RenameError::InvalidEpisode(matched.episode.to_string()))?;
            reference.resolve(&self.table)?.to_string()
        };

        Ok(format!("{}{}{}", UNIFORM_PREFIX, episode, matched.suffix))
    }

    /// Like [`Renamer::try_convert_filename`], but reports failures as
    /// diagnostics and hands back the original filename.
    pub fn convert_filename(&self, filename: &str) -> String {
        match self.try_convert_filename(filename) {
            Ok(converted) => converted,
            Err(e) => {
                tracing::error!("{}", e);
                filename.to_string()
            }
        }
    }

    /// Converts the filename component and keeps the original directory.
    pub fn convert_path(&self, path: &Path) -> PathBuf {
        let Some(filename) = path.file_name() else {
            return path.to_path_buf();
        };
        let Some(filename) = filename.to_str() else {
            tracing::error!("Not valid UTF-8: {}", path.display());
            return path.to_path_buf();
        };

        path.with_file_name(self.convert_filename(filename))
    }

    pub fn rename_if_needed(&self, path: &Path) -> RenameOutcome {
        let converted = self.convert_path(path);
        if converted == path {
            tracing::info!("skipping '{}'", path.display());
            return RenameOutcome::Skipped;
        }

        tracing::info!("RENAMING '{}' to '{}'", path.display(), converted.display());

        // A case-only rename on a case-insensitive filesystem sees itself as the target.
        if converted.exists() && !is_same_file(path, &converted) {
            let message = format!("Target file '{}' already exists", converted.display());
            tracing::error!("{}", message);
            return RenameOutcome::Failed(message);
        }

        match fs::rename(path, &converted) {
            Ok(()) => RenameOutcome::Renamed(converted),
            Err(e) => {
                let message = format!("Error renaming '{}': {}", path.display(), e);
                tracing::error!("{}", message);
                RenameOutcome::Failed(message)
            }
        }
    }

    pub fn rename_all(&self, paths: &[PathBuf]) -> RenameSummary {
        let mut summary = RenameSummary::default();
        for path in paths {
            let outcome = self.rename_if_needed(path);
            tracing::debug!(?outcome, "processed '{}'", path.display());
            summary.record(&outcome);
        }
        summary
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Turns the command line paths into absolute paths, resolving symlinks.
///
/// If any path does not exist every missing one is reported and the whole
/// batch is rejected.
pub fn resolve_all_or_fail<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>, RenameError> {
    let mut resolved = Vec::with_capacity(paths.len());
    let mut missing = Vec::new();

    for path in paths {
        let path = path.as_ref();
        match fs::canonicalize(path) {
            Ok(absolute) => resolved.push(absolute),
            Err(_) => {
                tracing::error!("File not found: {}", path.display());
                missing.push(path.to_path_buf());
            }
        }
    }

    if !missing.is_empty() {
        return Err(RenameError::PathNotFound(missing));
    }
    Ok(resolved)
}
