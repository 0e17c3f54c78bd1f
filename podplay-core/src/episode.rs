use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A playable episode with its display metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,
    /// Display label for the people taking part
    pub members: String,
    /// URL of the cover image
    pub thumbnail: String,
    /// Duration in seconds
    pub duration: f32,
    /// Media source handed to the native playback element
    pub url: String,
}

impl Episode {
    pub fn new(
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        duration: f32,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            members: members.into(),
            thumbnail: thumbnail.into(),
            duration,
            url: url.into(),
        }
    }

    /// Format seconds as MM:SS, hours folded into the minutes
    pub fn format_duration(seconds: f32) -> String {
        let seconds = seconds.max(0.0);
        let mins = (seconds / 60.0).floor() as u64;
        let secs = (seconds % 60.0).floor() as u64;
        format!("{:02}:{:02}", mins, secs)
    }
}

impl Display for Episode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.title,
            self.members,
            Episode::format_duration(self.duration)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_formatted_as_minutes_and_seconds() {
        assert_eq!(Episode::format_duration(0.0), "00:00");
        assert_eq!(Episode::format_duration(59.9), "00:59");
        assert_eq!(Episode::format_duration(61.0), "01:01");
        assert_eq!(Episode::format_duration(3725.0), "62:05");
        assert_eq!(Episode::format_duration(-3.0), "00:00");
    }

    #[test]
    fn display_shows_title_members_and_length() {
        let episode = Episode::new(
            "Rust in prod",
            "Ana, Bo",
            "https://img/1.png",
            125.0,
            "https://cdn/1.mp3",
        );
        assert_eq!(episode.to_string(), "Rust in prod - Ana, Bo (02:05)");
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "title": "Ep 1",
            "members": "Host",
            "thumbnail": "https://img/1.png",
            "duration": 3600,
            "url": "https://cdn/1.mp3"
        }"#;
        let episode: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.title, "Ep 1");
        assert_eq!(episode.duration, 3600.0);
        assert_eq!(episode.url, "https://cdn/1.mp3");
    }
}
