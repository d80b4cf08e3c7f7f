use crate::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Write `words` to `path`, one word per line.
/// ## Errors
/// If the file can not be created or written.
pub fn write_words<S: AsRef<str>>(path: &str, words: &[S]) -> Result<(), Error> {
    let write_error = |source: std::io::Error| Error::WriteError {
        path: String::from(path),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    write_lines(&mut writer, words).map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    tracing::info!("Wrote {} words to '{}'", words.len(), path);
    Ok(())
}

fn write_lines<W: Write, S: AsRef<str>>(writer: &mut W, words: &[S]) -> std::io::Result<()> {
    for word in words {
        writeln!(writer, "{}", word.as_ref())?;
    }
    Ok(())
}
