use std::{fs, path::Path};

use anyhow::Context;
use podplay_core::Episode;

/// Load a JSON array of episodes
pub fn load_library(path: &Path) -> anyhow::Result<Vec<Episode>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read episode list {}", path.display()))?;
    let episodes: Vec<Episode> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse episode list {}", path.display()))?;

    log::info!("Loaded {} episodes from {}", episodes.len(), path.display());
    Ok(episodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = load_library(Path::new("/nonexistent/podplay/episodes.json")).unwrap_err();
        assert!(err.to_string().contains("episodes.json"));
    }

    #[test]
    fn loads_episode_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("episodes.json");
        fs::write(
            &path,
            r#"[
                {"title": "One", "members": "Ana", "thumbnail": "https://img/1.png", "duration": 90, "url": "https://cdn/1.mp3"},
                {"title": "Two", "members": "Bo", "thumbnail": "https://img/2.png", "duration": 120.5, "url": "https://cdn/2.mp3"}
            ]"#,
        )
        .unwrap();

        let episodes = load_library(&path).unwrap();
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[1].title, "Two");
        assert_eq!(episodes[1].duration, 120.5);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not a list").unwrap();

        let err = load_library(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
