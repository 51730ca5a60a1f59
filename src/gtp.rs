//! Go Text Protocol (GTP) front end.
//!
//! GTP is a text-based protocol for communicating with Go-playing programs.
//! This module implements the subset of GTP version 2 needed to drive the
//! rules engine from a graphical interface or a script.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - 9, 13 or 19; starts a new game
//! - `clear_board` - start a new game at the current size
//! - `play <color> <vertex>` - play a move (or `pass`) for the side to move
//! - `genmove <color>` - play a random legal move for the side to move
//! - `is_legal <color> <vertex>` - `1` if the move is legal, else `0`
//! - `showboard` - render the board
//! - `final_score` - score the position (`B+n`, `W+n` or `0`)
//!
//! Play strictly alternates, so the color argument must name the side to move.
//!
//! ## Example
//!
//! ```ignore
//! use goban::gtp::GtpEngine;
//! let mut engine = GtpEngine::new();
//! engine.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{self, BufRead, Write};

use fastrand::Rng;
use tracing::{debug, warn};

use crate::board::{BoardSize, Color, Vertex, parse_vertex, vertex_string};
use crate::constants::{DEFAULT_SIZE, ENGINE_NAME};
use crate::game::GameState;
use crate::playout::choose_random_move;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "final_score",
    "genmove",
    "is_legal",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    /// Current game
    state: GameState,
    /// Source of randomness for `genmove`
    rng: Rng,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create a new GTP engine on the default board size with a random seed.
    pub fn new() -> Self {
        let size = BoardSize::try_from(DEFAULT_SIZE).unwrap_or(BoardSize::Large);
        Self::with_config(size, None)
    }

    /// Create a GTP engine with a given board size and optional RNG seed.
    pub fn with_config(size: BoardSize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        Self {
            state: GameState::new(size),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    warn!(%err, "skipping undecodable gtp line");
                    write!(output, "? invalid utf-8\n\n")?;
                    output.flush()?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse optional command ID
            let (id, command_line) = Self::parse_id(line);

            // Parse command and arguments
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            debug!(%command, ?args, "gtp command");

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "gtp command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Parse a color argument and check it names the side to move.
    fn expect_turn(&self, arg: &str) -> Result<Color, String> {
        let color = Color::parse(arg).ok_or_else(|| "invalid color".to_string())?;
        if color != self.state.current_turn() {
            return Err(format!("it is {}'s turn", self.state.current_turn()));
        }
        Ok(color)
    }

    fn parse_move(&self, arg: &str) -> Result<Vertex, String> {
        parse_vertex(arg, self.state.size()).ok_or_else(|| "invalid vertex".to_string())
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, ENGINE_NAME.to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match args[0].parse::<usize>().map(BoardSize::try_from) {
                    Ok(Ok(size)) => {
                        self.state = GameState::new(size);
                        (true, String::new())
                    }
                    Ok(Err(_)) => (false, "unacceptable size".to_string()),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.state = GameState::new(self.state.size());
                (true, String::new())
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                if let Err(msg) = self.expect_turn(args[0]) {
                    return (false, msg);
                }
                match self.parse_move(args[1]) {
                    Ok(Vertex::Pass) if self.state.is_over() => (false, "game is over".to_string()),
                    Ok(Vertex::Pass) => {
                        self.state.pass();
                        (true, String::new())
                    }
                    Ok(Vertex::Play(pt)) => match self.state.place_at(pt) {
                        Ok(()) => (true, String::new()),
                        Err(err) => (false, err.to_string()),
                    },
                    Err(msg) => (false, msg),
                }
            }

            "genmove" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                if self.state.is_over() {
                    return (false, "game is over".to_string());
                }
                if let Err(msg) = self.expect_turn(args[0]) {
                    return (false, msg);
                }

                match choose_random_move(&self.state, &mut self.rng) {
                    Some(pt) => match self.state.place_at(pt) {
                        Ok(()) => (true, vertex_string(pt, self.state.size())),
                        Err(err) => (false, err.to_string()),
                    },
                    None => {
                        self.state.pass();
                        (true, "pass".to_string())
                    }
                }
            }

            "is_legal" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let legal = match (self.expect_turn(args[0]), self.parse_move(args[1])) {
                    (Ok(_), Ok(Vertex::Play(pt))) => self.state.check_move(pt).is_ok(),
                    (Ok(_), Ok(Vertex::Pass)) => !self.state.is_over(),
                    _ => false,
                };
                (true, if legal { "1" } else { "0" }.to_string())
            }

            "showboard" => (true, format!("\n{}", self.state)),

            "final_score" => {
                let score = if self.state.is_over() {
                    self.state.score()
                } else {
                    self.state.territory()
                };
                (true, score.result_string())
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
