use std::path::PathBuf;

use crate::log;

/// Persists the high score as a single decimal integer in a plain-text
/// file. A missing or unreadable record is never fatal.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> u32 {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return 0,
            Err(err) => {
                log!("Failed to read high score file: {}", err);
                return 0;
            }
        };

        match parse_high_score(&content) {
            Some(value) => value,
            None => {
                log!("Ignoring corrupt high score file: {:?}", content.trim());
                0
            }
        }
    }

    pub fn save(&self, value: u32) -> std::io::Result<()> {
        std::fs::write(&self.path, value.to_string())
    }
}

fn parse_high_score(content: &str) -> Option<u32> {
    content.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> HighScoreStore {
        let path = std::env::temp_dir().join(format!("snake_highscore_{}_{}", std::process::id(), name));
        let _ = std::fs::remove_file(&path);
        HighScoreStore::new(path)
    }

    #[test]
    fn test_parse_high_score() {
        assert_eq!(parse_high_score("42"), Some(42));
        assert_eq!(parse_high_score("  7\n"), Some(7));
        assert_eq!(parse_high_score(""), None);
        assert_eq!(parse_high_score("-3"), None);
        assert_eq!(parse_high_score("high"), None);
    }

    #[test]
    fn test_load_missing_file_defaults_to_zero() {
        let store = temp_store("missing");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = temp_store("round_trip");
        store.save(17).unwrap();
        assert_eq!(store.load(), 17);

        store.save(25).unwrap();
        assert_eq!(store.load(), 25);
    }

    #[test]
    fn test_load_corrupt_file_defaults_to_zero() {
        let store = temp_store("corrupt");
        std::fs::write(&store.path, "not a number").unwrap();
        assert_eq!(store.load(), 0);
    }
}
