use crate::Error;
use std::env;

/// Log filter used when neither `RUST_LOG` nor `BOGGLE_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "boggle_solver=info,boggle=info";

/// Usage line for the command line tool.
pub const USAGE: &str = "usage: boggle <dictionary_filename> <board_filename> <output_filename>";

/// Configuration for one run: three positional file names from the command line,
/// and optional settings from the environment (or a `.env` file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary_path: String,
    pub board_path: String,
    pub output_path: String,
    /// `BOGGLE_UNLEARN`: remove words from the dictionary once found (default true)
    pub unlearn: bool,
    /// `BOGGLE_LOG`: fallback log filter when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Config {
    /// Build the configuration from command line `args` (without the program name)
    /// and the process environment.
    /// ## Errors
    /// If the number of arguments is not 3, or a setting has an invalid value.
    pub fn from_env<I: IntoIterator<Item = String>>(args: I) -> Result<Config, Error> {
        dotenvy::dotenv().ok();
        Config::from_args_and_vars(args, |name| env::var(name).ok())
    }

    /// Build the configuration from `args`, looking up settings with `var`.
    pub fn from_args_and_vars<I, F>(args: I, var: F) -> Result<Config, Error>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let dictionary_path = args
            .next()
            .ok_or(Error::MissingArgument("dictionary_filename"))?;
        let board_path = args.next().ok_or(Error::MissingArgument("board_filename"))?;
        let output_path = args.next().ok_or(Error::MissingArgument("output_filename"))?;
        if let Some(extra) = args.next() {
            return Err(Error::UnexpectedArgument(extra));
        }

        let unlearn = match var("BOGGLE_UNLEARN") {
            Some(value) => parse_bool("BOGGLE_UNLEARN", &value)?,
            None => true,
        };
        let log_filter = var("BOGGLE_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            dictionary_path,
            board_path,
            output_path,
            unlearn,
            log_filter,
        })
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidSetting {
            name,
            value: String::from(value),
        }),
    }
}
