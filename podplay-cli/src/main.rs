use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use crossbeam_channel::Receiver;
use log::LevelFilter;
use podplay_core::{Episode, Player, PlayerCommand, PlayerConfig, PlayerEvent};

mod console;
mod library;
mod logger;

use console::{Input, describe_event, describe_snapshot, help_text, parse_line};

/// Command-line arguments for podplay
#[derive(Parser, Debug)]
#[command(name = "podplay")]
#[command(about = "Headless control console for an episode playback queue")]
#[command(version)]
struct Args {
    /// JSON file holding an array of episodes
    #[arg(short, long)]
    episodes: Option<PathBuf>,

    /// Queue the loaded episodes at startup, beginning with this one
    #[arg(short, long, requires = "episodes")]
    index: Option<usize>,

    /// Start with shuffling enabled
    #[arg(long)]
    shuffle: bool,

    /// Start with looping enabled
    #[arg(long = "loop")]
    looping: bool,

    /// Fixed seed for shuffle picks
    #[arg(long)]
    seed: Option<u64>,

    /// Log level written to stderr
    #[arg(long, env = "PODPLAY_LOG", default_value = "warn")]
    log_level: LevelFilter,
}

impl Args {
    fn player_config(&self) -> PlayerConfig {
        let config = PlayerConfig::new()
            .looping(self.looping)
            .shuffling(self.shuffle);
        match self.seed {
            Some(seed) => config.seed(seed),
            None => config,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::setup_logging(args.log_level);

    log::info!("Starting podplay console");

    let library = match &args.episodes {
        Some(path) => library::load_library(path)?,
        None => Vec::new(),
    };

    let mut player = Player::new(args.player_config());
    let events = player.subscribe();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(index) = args.index {
        dispatch(
            &mut player,
            &events,
            PlayerCommand::PlayList {
                episodes: library.clone(),
                index,
            },
            &mut out,
        )?;
    }

    run_console(&mut player, &events, &library, &mut out)
}

fn run_console(
    player: &mut Player,
    events: &Receiver<PlayerEvent>,
    library: &[Episode],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "{} episode(s) in library, type 'help' for commands", library.len())?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line, library) {
            Ok(Input::Command(command)) => dispatch(player, events, command, out)?,
            Ok(Input::Status) => writeln!(out, "{}", describe_snapshot(&player.snapshot()))?,
            Ok(Input::Help) => writeln!(out, "{}", help_text())?,
            Ok(Input::Quit) => break,
            Err(e) => writeln!(out, "error: {}", e)?,
        }
        out.flush()?;
    }

    log::info!("Console closed");
    Ok(())
}

/// Send a command to the player and print whatever it published
fn dispatch(
    player: &mut Player,
    events: &Receiver<PlayerEvent>,
    command: PlayerCommand,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if let Err(e) = player.dispatch(command) {
        writeln!(out, "error: {}", e)?;
        return Ok(());
    }

    let mut printed = false;
    for event in events.try_iter() {
        writeln!(out, "{}", describe_event(&event))?;
        printed = true;
    }
    if !printed {
        writeln!(out, "(nothing changed)")?;
    }
    Ok(())
}
