//! Command-line surface.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "order", version = "1.0.0", about = "Order CLI for various commands")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Greets the user by name (default: World)
    Hello { name: Vec<String> },

    /// Print the given text
    Echo {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Print the given text backwards
    Reverse {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Print a random integer between MIN and MAX, inclusive (default: 1 100)
    Random {
        #[arg(allow_negative_numbers = true)]
        min: Option<i64>,
        #[arg(allow_negative_numbers = true)]
        max: Option<i64>,
    },

    /// Ping a website and print the response time (default: google.com)
    Ping { host: Option<String> },

    /// Get the weather information (default: Los Angeles)
    Weather {
        city: Vec<String>,
        /// Use imperial units (Fahrenheit, mph)
        #[arg(short, long)]
        imperial: bool,
    },

    /// Show a live clock (q to quit)
    Clock,

    /// Print a month calendar (default: current month)
    Calendar { month: Option<u32>, year: Option<i32> },

    /// Show information about this device
    Device,

    /// Show how often each command has been run
    Usage,

    /// Play Pong against a bot: easy, medium, hard or impossible
    Pong { difficulty: Option<String> },
}

impl Command {
    /// Name recorded in the usage counter.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello { .. } => "hello",
            Command::Echo { .. } => "echo",
            Command::Reverse { .. } => "reverse",
            Command::Random { .. } => "random",
            Command::Ping { .. } => "ping",
            Command::Weather { .. } => "weather",
            Command::Clock => "clock",
            Command::Calendar { .. } => "calendar",
            Command::Device => "device",
            Command::Usage => "usage",
            Command::Pong { .. } => "pong",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Command {
        let mut argv = vec!["order"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn weather_takes_multi_word_city() {
        assert_eq!(
            parse(&["weather", "New", "York", "-i"]),
            Command::Weather {
                city: vec!["New".into(), "York".into()],
                imperial: true
            }
        );
    }

    #[test]
    fn random_accepts_negative_bounds() {
        assert_eq!(
            parse(&["random", "-5", "5"]),
            Command::Random {
                min: Some(-5),
                max: Some(5)
            }
        );
    }

    #[test]
    fn pong_difficulty_is_optional_at_parse_time() {
        assert_eq!(parse(&["pong"]), Command::Pong { difficulty: None });
        assert_eq!(
            parse(&["pong", "hard"]),
            Command::Pong {
                difficulty: Some("hard".into())
            }
        );
    }

    #[test]
    fn echo_requires_text() {
        assert!(Cli::try_parse_from(["order", "echo"]).is_err());
    }

    #[test]
    fn command_names() {
        assert_eq!(parse(&["clock"]).name(), "clock");
        assert_eq!(parse(&["hello"]).name(), "hello");
    }
}
