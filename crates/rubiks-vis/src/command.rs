//! Line commands for the terminal front end.

use std::str::FromStr;

use crate::error::Error;

/// One line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A single character on its own: press that move button
    Move(char),
    /// `queue <text>`: replace the playback queue
    Queue(String),
    /// `play`: toggle playback
    Play,
    /// `hover <x> <y>`: move the pointer to a page position
    Hover { x: f32, y: f32 },
    /// `orbit <dx> <dy>`: drag the camera
    Orbit { dx: f32, dy: f32 },
    /// `zoom <delta>`: scroll
    Zoom(f32),
    /// `state`: print the current facelet codes
    State,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Error> {
        let line = line.trim();
        let mut chars = line.chars();
        if let (Some(symbol), None) = (chars.next(), chars.next()) {
            return Ok(Command::Move(symbol));
        }

        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let command = match word {
            "queue" => Command::Queue(rest.to_string()),
            "play" | "pause" => Command::Play,
            "hover" => {
                let [x, y] = numbers(line, rest)?;
                Command::Hover { x, y }
            }
            "orbit" => {
                let [dx, dy] = numbers(line, rest)?;
                Command::Orbit { dx, dy }
            }
            "zoom" => {
                let [delta] = numbers(line, rest)?;
                Command::Zoom(delta)
            }
            "state" => Command::State,
            "quit" | "exit" => Command::Quit,
            _ => return Err(Error::Command(line.to_string())),
        };
        Ok(command)
    }
}

fn numbers<const N: usize>(line: &str, args: &str) -> Result<[f32; N], Error> {
    let parsed: Vec<f32> = args
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| Error::Command(line.to_string()))?;
    parsed.try_into().map_err(|_| Error::Command(line.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        line.parse().unwrap()
    }

    #[test]
    fn single_character_is_a_move() {
        assert_eq!(parse("F"), Command::Move('F'));
        assert_eq!(parse(" r \n"), Command::Move('r'));
        assert_eq!(parse("?"), Command::Move('?'));
    }

    #[test]
    fn queue_keeps_text_verbatim() {
        assert_eq!(parse("queue FRUB"), Command::Queue("FRUB".into()));
        assert_eq!(parse("queue"), Command::Queue(String::new()));
    }

    #[test]
    fn numeric_arguments() {
        assert_eq!(parse("hover 640 360"), Command::Hover { x: 640.0, y: 360.0 });
        assert_eq!(parse("orbit -10 2.5"), Command::Orbit { dx: -10.0, dy: 2.5 });
        assert_eq!(parse("zoom -1"), Command::Zoom(-1.0));
    }

    #[test]
    fn keywords() {
        assert_eq!(parse("play"), Command::Play);
        assert_eq!(parse("state"), Command::State);
        assert_eq!(parse("quit"), Command::Quit);
    }

    #[test]
    fn rejects_bad_lines() {
        for line in ["", "hover 1", "hover a b", "zoom 1 2", "spin"] {
            assert!(line.parse::<Command>().is_err(), "{line:?}");
        }
    }
}
