//! Round-outcome scoreboard
//!
//! Every finished round is appended to a JSON scoreboard under the user's
//! home directory (`~/.space-war/scoreboard.json`). The file is versioned
//! and loaded leniently: a missing or unreadable scoreboard never prevents
//! a game from starting.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CURRENT_SCOREBOARD_VERSION: u32 = 1;
const SCOREBOARD_FILENAME: &str = "scoreboard.json";

/// Who won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Opponent,
}

/// One finished round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    pub winner: Winner,
    /// Survivor's remaining health
    pub victor_health: f32,
    /// Round length in frames (60 per second)
    pub frames: u64,
    /// Local wall-clock time the round finished, e.g. "2026-08-06 21:14:03"
    pub finished_at: String,
}

impl RoundRecord {
    /// Builds a record stamped with the current local time.
    pub fn now(winner: Winner, victor_health: f32, frames: u64) -> Self {
        RoundRecord {
            winner,
            victor_health,
            frames,
            finished_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// On-disk scoreboard layout.
#[derive(Debug, Serialize, Deserialize)]
struct ScoreboardFile {
    version: u32,
    rounds: Vec<RoundRecord>,
}

impl Default for ScoreboardFile {
    fn default() -> Self {
        ScoreboardFile {
            version: CURRENT_SCOREBOARD_VERSION,
            rounds: Vec::new(),
        }
    }
}

/// Errors from scoreboard IO.
#[derive(Debug)]
pub enum ScoreboardError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    InvalidVersion(u32),
}

impl std::fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreboardError::IoError(e) => write!(f, "IO error: {}", e),
            ScoreboardError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            ScoreboardError::InvalidVersion(v) => write!(f, "Unsupported scoreboard version: {}", v),
        }
    }
}

impl std::error::Error for ScoreboardError {}

impl From<std::io::Error> for ScoreboardError {
    fn from(err: std::io::Error) -> Self {
        ScoreboardError::IoError(err)
    }
}

impl From<serde_json::Error> for ScoreboardError {
    fn from(err: serde_json::Error) -> Self {
        ScoreboardError::SerializationError(err)
    }
}

/// Handle to the persistent scoreboard.
pub struct Scoreboard {
    path: PathBuf,
    file: ScoreboardFile,
}

impl Scoreboard {
    /// Opens (or creates) the scoreboard in `directory`.
    ///
    /// The directory is created if missing; an existing file is loaded and
    /// version-checked.
    pub fn open(directory: impl AsRef<Path>) -> Result<Self, ScoreboardError> {
        let dir = directory.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let path = dir.join(SCOREBOARD_FILENAME);
        let file = if path.exists() {
            let json = fs::read_to_string(&path)?;
            let loaded: ScoreboardFile = serde_json::from_str(&json)?;
            if loaded.version > CURRENT_SCOREBOARD_VERSION {
                return Err(ScoreboardError::InvalidVersion(loaded.version));
            }
            loaded
        } else {
            ScoreboardFile::default()
        };

        Ok(Scoreboard { path, file })
    }

    /// Appends a round and writes the scoreboard back to disk.
    pub fn record(&mut self, round: RoundRecord) -> Result<(), ScoreboardError> {
        self.file.rounds.push(round);
        let json = serde_json::to_string_pretty(&self.file)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Win counts as (player, opponent).
    pub fn tally(&self) -> (u32, u32) {
        let mut player = 0;
        let mut opponent = 0;
        for round in &self.file.rounds {
            match round.winner {
                Winner::Player => player += 1,
                Winner::Opponent => opponent += 1,
            }
        }
        (player, opponent)
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.file.rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_scoreboard_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "space-war-test-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn open_creates_directory_and_empty_board() {
        let dir = temp_scoreboard_dir("open");
        let board = Scoreboard::open(&dir).unwrap();

        assert!(dir.exists());
        assert_eq!(board.tally(), (0, 0));
        assert!(board.rounds().is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn records_survive_a_reopen() {
        let dir = temp_scoreboard_dir("reopen");

        {
            let mut board = Scoreboard::open(&dir).unwrap();
            board
                .record(RoundRecord::now(Winner::Player, 40.0, 1800))
                .unwrap();
            board
                .record(RoundRecord::now(Winner::Opponent, 10.0, 3600))
                .unwrap();
            board
                .record(RoundRecord::now(Winner::Player, 70.0, 900))
                .unwrap();
        }

        let board = Scoreboard::open(&dir).unwrap();
        assert_eq!(board.tally(), (2, 1));
        assert_eq!(board.rounds().len(), 3);
        assert_eq!(board.rounds()[1].winner, Winner::Opponent);
        assert_eq!(board.rounds()[1].frames, 3600);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn newer_version_is_rejected() {
        let dir = temp_scoreboard_dir("version");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(SCOREBOARD_FILENAME),
            r#"{ "version": 99, "rounds": [] }"#,
        )
        .unwrap();

        match Scoreboard::open(&dir) {
            Err(ScoreboardError::InvalidVersion(99)) => {}
            other => panic!("expected InvalidVersion, got {:?}", other.map(|_| ())),
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn record_timestamp_is_formatted() {
        let record = RoundRecord::now(Winner::Player, 100.0, 60);
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(record.finished_at.len(), 19);
        assert_eq!(&record.finished_at[4..5], "-");
        assert_eq!(&record.finished_at[10..11], " ");
    }
}
