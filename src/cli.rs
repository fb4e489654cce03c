use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::embed::{self, DEFAULT_VARIABLE_NAME};
use crate::error::{Error, Result};
use crate::logging;
use crate::output::OutputWriter;

/// Print the bytes of a file as a byte array declaration.
#[derive(Parser, Debug)]
#[command(name = "bytelit", version)]
struct Args {
    /// File whose bytes are embedded
    path: PathBuf,

    /// Name of the declared variable
    #[arg(short, long, default_value = DEFAULT_VARIABLE_NAME)]
    name: String,

    /// Log more to standard error, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

pub fn run_command<I, T>(args: I, writer: &mut dyn OutputWriter) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;
    logging::bootstrap_logs(args.verbose);

    let options = embed::OptionsBuilder::default()
        .variable_name(args.name)
        .build()
        .map_err(|err| {
            let message = format!("invalid options: {}", err);
            Error::fatal(err, message)
        })?;
    embed::embed_file(&args.path, &options, writer)?;

    Ok(())
}

pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&mut self, content: String) -> io::Result<&mut dyn OutputWriter> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        Ok(self)
    }
}
