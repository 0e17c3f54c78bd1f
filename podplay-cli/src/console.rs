use std::str::FromStr;

use podplay_core::{Episode, PlayerCommand, PlayerEvent, PlayerSnapshot};
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// Words understood by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Play,
    List,
    Pause,
    Resume,
    Toggle,
    Loop,
    Shuffle,
    Next,
    Prev,
    Ended,
    Clear,
    Status,
    Help,
    Quit,
}

impl Keyword {
    pub fn usage(&self) -> &str {
        match self {
            Keyword::Play => "play <n>     play library episode n on its own",
            Keyword::List => "list [n]     queue the whole library, start at n",
            Keyword::Pause => "pause        pause playback",
            Keyword::Resume => "resume       resume playback",
            Keyword::Toggle => "toggle       flip play/pause",
            Keyword::Loop => "loop         flip looping",
            Keyword::Shuffle => "shuffle      flip shuffling",
            Keyword::Next => "next         skip to next episode",
            Keyword::Prev => "prev         skip to previous episode",
            Keyword::Ended => "ended        report that the current episode finished",
            Keyword::Clear => "clear        empty the queue",
            Keyword::Status => "status       show the player state",
            Keyword::Help => "help         show this list",
            Keyword::Quit => "quit         leave the console",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),
    #[error("'{0}' needs an episode number")]
    MissingIndex(Keyword),
    #[error("'{0}' is not an episode number")]
    InvalidIndex(String),
    #[error("no episode {index}, the library has {len}")]
    NoSuchEpisode { index: usize, len: usize },
}

/// A parsed console line
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Command(PlayerCommand),
    Status,
    Help,
    Quit,
}

/// Turn one line of user input into an [`Input`]
pub fn parse_line(line: &str, library: &[Episode]) -> Result<Input, ParseCommandError> {
    let mut words = line.split_whitespace();
    let word = words.next().ok_or(ParseCommandError::Empty)?;
    let keyword = Keyword::from_str(&word.to_lowercase())
        .map_err(|_| ParseCommandError::UnknownCommand(word.to_string()))?;
    let index = words.next().map(parse_index).transpose()?;

    let command = match keyword {
        Keyword::Play => {
            let index = index.ok_or(ParseCommandError::MissingIndex(keyword))?;
            let episode = library.get(index).ok_or(ParseCommandError::NoSuchEpisode {
                index,
                len: library.len(),
            })?;
            PlayerCommand::Play(episode.clone())
        }
        Keyword::List => PlayerCommand::PlayList {
            episodes: library.to_vec(),
            index: index.unwrap_or(0),
        },
        Keyword::Pause => PlayerCommand::SetPlaying(false),
        Keyword::Resume => PlayerCommand::SetPlaying(true),
        Keyword::Toggle => PlayerCommand::TogglePlay,
        Keyword::Loop => PlayerCommand::ToggleLoop,
        Keyword::Shuffle => PlayerCommand::ToggleShuffle,
        Keyword::Next => PlayerCommand::Next,
        Keyword::Prev => PlayerCommand::Previous,
        Keyword::Ended => PlayerCommand::EpisodeEnded,
        Keyword::Clear => PlayerCommand::Clear,
        Keyword::Status => return Ok(Input::Status),
        Keyword::Help => return Ok(Input::Help),
        Keyword::Quit => return Ok(Input::Quit),
    };
    Ok(Input::Command(command))
}

fn parse_index(word: &str) -> Result<usize, ParseCommandError> {
    word.parse()
        .map_err(|_| ParseCommandError::InvalidIndex(word.to_string()))
}

pub fn help_text() -> String {
    Keyword::iter()
        .map(|k| format!("  {}", k.usage()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn describe_event(event: &PlayerEvent) -> String {
    match event {
        PlayerEvent::QueueChanged(episodes) => format!("queue: {} episode(s)", episodes.len()),
        PlayerEvent::EpisodeChanged { index, episode } => {
            format!("now at #{}: {} <{}>", index, episode, episode.url)
        }
        PlayerEvent::PlayingChanged(true) => "playing".to_string(),
        PlayerEvent::PlayingChanged(false) => "paused".to_string(),
        PlayerEvent::LoopingChanged(on) => format!("loop {}", on_off(*on)),
        PlayerEvent::ShufflingChanged(on) => format!("shuffle {}", on_off(*on)),
        PlayerEvent::Restarted => "restarting current episode".to_string(),
        PlayerEvent::Cleared => "queue cleared".to_string(),
    }
}

pub fn describe_snapshot(snapshot: &PlayerSnapshot) -> String {
    let mut lines = Vec::new();
    match &snapshot.current_episode {
        Some(episode) => lines.push(format!(
            "Episode: {}/{} {}",
            snapshot.current_index + 1,
            snapshot.episodes.len(),
            episode
        )),
        None => lines.push("Episode: none".to_string()),
    }
    lines.push(format!(
        "State:   {} | loop {} | shuffle {}",
        if snapshot.is_playing { "playing" } else { "paused" },
        on_off(snapshot.is_looping),
        on_off(snapshot.is_shuffling)
    ));
    lines.push(format!(
        "Skip:    previous {} | next {}",
        yes_no(snapshot.has_previous),
        yes_no(snapshot.has_next)
    ));
    lines.join("\n")
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Vec<Episode> {
        vec![
            Episode::new("One", "Ana", "https://img/1.png", 90.0, "https://cdn/1.mp3"),
            Episode::new("Two", "Bo", "https://img/2.png", 3600.0, "https://cdn/2.mp3"),
        ]
    }

    #[test]
    fn parses_flag_commands() {
        let lib = library();
        assert_eq!(parse_line("toggle", &lib), Ok(Input::Command(PlayerCommand::TogglePlay)));
        assert_eq!(parse_line("  NEXT ", &lib), Ok(Input::Command(PlayerCommand::Next)));
        assert_eq!(parse_line("prev", &lib), Ok(Input::Command(PlayerCommand::Previous)));
        assert_eq!(parse_line("pause", &lib), Ok(Input::Command(PlayerCommand::SetPlaying(false))));
        assert_eq!(parse_line("resume", &lib), Ok(Input::Command(PlayerCommand::SetPlaying(true))));
        assert_eq!(parse_line("loop", &lib), Ok(Input::Command(PlayerCommand::ToggleLoop)));
        assert_eq!(parse_line("shuffle", &lib), Ok(Input::Command(PlayerCommand::ToggleShuffle)));
        assert_eq!(parse_line("ended", &lib), Ok(Input::Command(PlayerCommand::EpisodeEnded)));
        assert_eq!(parse_line("clear", &lib), Ok(Input::Command(PlayerCommand::Clear)));
        assert_eq!(parse_line("status", &lib), Ok(Input::Status));
        assert_eq!(parse_line("help", &lib), Ok(Input::Help));
        assert_eq!(parse_line("quit", &lib), Ok(Input::Quit));
    }

    #[test]
    fn play_picks_from_library() {
        let lib = library();
        assert_eq!(
            parse_line("play 1", &lib),
            Ok(Input::Command(PlayerCommand::Play(lib[1].clone())))
        );
        assert_eq!(
            parse_line("play", &lib),
            Err(ParseCommandError::MissingIndex(Keyword::Play))
        );
        assert_eq!(
            parse_line("play 5", &lib),
            Err(ParseCommandError::NoSuchEpisode { index: 5, len: 2 })
        );
        assert_eq!(
            parse_line("play x", &lib),
            Err(ParseCommandError::InvalidIndex("x".to_string()))
        );
    }

    #[test]
    fn list_defaults_to_first_episode() {
        let lib = library();
        assert_eq!(
            parse_line("list", &lib),
            Ok(Input::Command(PlayerCommand::PlayList { episodes: lib.clone(), index: 0 }))
        );
        assert_eq!(
            parse_line("list 1", &lib),
            Ok(Input::Command(PlayerCommand::PlayList { episodes: lib.clone(), index: 1 }))
        );
    }

    #[test]
    fn rejects_unknown_and_empty_input() {
        let lib = library();
        assert_eq!(parse_line("   ", &lib), Err(ParseCommandError::Empty));
        assert_eq!(
            parse_line("rewind", &lib),
            Err(ParseCommandError::UnknownCommand("rewind".to_string()))
        );
    }

    #[test]
    fn help_lists_every_keyword() {
        let help = help_text();
        for keyword in Keyword::iter() {
            assert!(help.contains(&keyword.to_string()), "missing {keyword}");
        }
    }

    #[test]
    fn snapshot_description_without_episode() {
        let snapshot = PlayerSnapshot {
            episodes: Vec::new(),
            current_index: 0,
            current_episode: None,
            is_playing: false,
            has_next: true,
            has_previous: false,
            is_looping: false,
            is_shuffling: true,
        };
        let text = describe_snapshot(&snapshot);
        assert!(text.contains("Episode: none"));
        assert!(text.contains("paused | loop off | shuffle on"));
        assert!(text.contains("previous no | next yes"));
    }
}
