//! Parsing of console command lines.

use thiserror::Error;

/// One console request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Count,
    List(Option<i64>),
    Shuffled,
    Artist(String),
    Title(String),
    Play(i64),
    First,
    Random,
    Stop,
    Status,
    Shuffle,
    Consume,
    Remove(i64),
    RemoveArtist(String),
    RemoveTitle(String),
    Year(i64, u32),
    Add(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),
    #[error("`{0}` needs {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("Not a number: {0}")]
    InvalidNumber(String),
}

pub const HELP: &[&str] = &[
    "count                  number of tracks",
    "list [i]               list every track, or track i",
    "shuffled               list in a random order without changing it",
    "artist <text>          tracks whose artist contains text",
    "title <text>           tracks whose title contains text",
    "play <i>               play track i",
    "first                  play the first track",
    "random                 play a random track",
    "stop                   stop playback",
    "status                 is something playing?",
    "shuffle                shuffle the library and sample every track",
    "consume                sample every track while reshuffling the library",
    "remove <i>             remove track i",
    "remove-artist <text>   remove tracks whose artist contains text",
    "remove-title <text>    remove tracks whose title contains text",
    "year <i> <year>        set the year of track i",
    "add <filename>         add a track named Artist-Title.ext",
    "quit                   leave",
];

fn number<T: std::str::FromStr>(s: &str) -> Result<T, CommandError> {
    s.parse()
        .map_err(|_| CommandError::InvalidNumber(s.to_string()))
}

fn text(
    rest: &str,
    name: &'static str,
    what: &'static str,
) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(name, what))
    } else {
        Ok(rest.to_string())
    }
}

fn index(rest: &str, name: &'static str) -> Result<i64, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument(name, "an index"));
    }
    number(rest)
}

impl Command {
    /// Parse a trimmed, non-empty line. Text arguments keep their inner
    /// spacing and case.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "help" | "?" => Ok(Self::Help),
            "count" => Ok(Self::Count),
            "list" | "ls" => {
                if rest.is_empty() {
                    Ok(Self::List(None))
                } else {
                    Ok(Self::List(Some(number(rest)?)))
                }
            }
            "shuffled" => Ok(Self::Shuffled),
            "artist" => Ok(Self::Artist(text(rest, "artist", "some text")?)),
            "title" => Ok(Self::Title(text(rest, "title", "some text")?)),
            "play" => Ok(Self::Play(index(rest, "play")?)),
            "first" => Ok(Self::First),
            "random" => Ok(Self::Random),
            "stop" => Ok(Self::Stop),
            "status" => Ok(Self::Status),
            "shuffle" => Ok(Self::Shuffle),
            "consume" => Ok(Self::Consume),
            "remove" | "rm" => Ok(Self::Remove(index(rest, "remove")?)),
            "remove-artist" => Ok(Self::RemoveArtist(text(rest, "remove-artist", "some text")?)),
            "remove-title" => Ok(Self::RemoveTitle(text(rest, "remove-title", "some text")?)),
            "year" => {
                let mut args = rest.split_whitespace();
                match (args.next(), args.next()) {
                    (Some(i), Some(y)) => Ok(Self::Year(number(i)?, number(y)?)),
                    _ => Err(CommandError::MissingArgument("year", "an index and a year")),
                }
            }
            "add" => Ok(Self::Add(text(rest, "add", "a file name")?)),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}
