use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a dictionary or board file
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error writing the list of found words
    #[error("File \"{path}\" could not be written")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    /// The board needs exactly 4 rows
    #[error("Invalid number of rows {0} (expect 4)")]
    InvalidRowCount(usize),

    /// A row on the board needs exactly 4 letters
    #[error("Invalid row \"{0}\": length {1}, expect 4")]
    InvalidRowLength(String, usize),

    /// Only the letters 'a' to 'z' can be placed on the board
    #[error("Invalid board letter '{0}'")]
    InvalidLetter(char),

    /// A required command line argument is missing
    #[error("Missing argument <{0}>")]
    MissingArgument(&'static str),

    /// More command line arguments than expected
    #[error("Unexpected argument \"{0}\"")]
    UnexpectedArgument(String),

    /// A configuration variable has an invalid value
    #[error("Invalid value \"{value}\" for {name}")]
    InvalidSetting { name: &'static str, value: String },
}
