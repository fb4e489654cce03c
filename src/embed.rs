use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::file;
use crate::output::OutputWriter;

pub const DEFAULT_VARIABLE_NAME: &str = "imageData";

const SEPARATOR: &str = ", ";
const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";
const LITERAL_PATTERN: &str = r"^var ([A-Za-z_][A-Za-z0-9_]*) = \[\]byte\{(.*)\}\r?\n?$";

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct Options {
    #[builder(setter(into), default = "String::from(DEFAULT_VARIABLE_NAME)")]
    pub variable_name: String,
}

impl OptionsBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        match &self.variable_name {
            Some(name) if !identifier_regex().is_match(name) => Err(format!(
                "variable name {:?} is not an identifier (letters, digits and '_', not starting with a digit)",
                name
            )),
            _ => Ok(()),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            variable_name: String::from(DEFAULT_VARIABLE_NAME),
        }
    }
}

/**
 * Read the file at `path` and write it as a single byte array declaration to the writer. The
 * file is read in full before anything is written, so a failed read leaves the output untouched.
 */
pub fn embed_file(path: &Path, options: &Options, writer: &mut dyn OutputWriter) -> Result<()> {
    let bytes = file::read_file(path).map_err(|err| {
        let message = format!("could not read '{}': {}", path.display(), err);
        Error::fatal(err, message)
    })?;
    debug!(path = %path.display(), byte_count = bytes.len(), "read input file");

    let literal = render(&bytes, options);
    writer.writeln(literal)?;

    info!(
        path = %path.display(),
        variable = %options.variable_name,
        "embedded {} bytes",
        bytes.len()
    );
    Ok(())
}

/**
 * Render the bytes as `var <name> = []byte{B0, B1, ...}`, each byte in base 10. The line
 * terminator is not included.
 */
pub fn render(bytes: &[u8], options: &Options) -> String {
    let values = bytes
        .iter()
        .map(|byte| byte.to_string())
        .collect::<Vec<String>>()
        .join(SEPARATOR);
    debug!(value_count = bytes.len(), "rendered byte literal");

    format!("var {} = []byte{{{}}}", options.variable_name, values)
}

/**
 * Parse a line produced by [`render`] back into the bytes it declares. A single trailing line
 * terminator is accepted. Only the exact shape `render` writes is accepted: `", "` separators and
 * decimal values without leading zeros.
 */
pub fn parse(literal: &str) -> Result<Vec<u8>> {
    let captures = literal_regex().captures(literal).ok_or_else(|| {
        Error::Fatal(None, format!("not a byte array declaration: {:?}", literal))
    })?;
    let values = captures.get(2).map(|m| m.as_str()).unwrap_or("");

    if values.is_empty() {
        return Ok(vec![]);
    }

    values.split(SEPARATOR).map(parse_value).collect()
}

fn parse_value(token: &str) -> Result<u8> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Fatal(
            None,
            format!("not a decimal byte value: {:?}", token),
        ));
    }
    if token.len() > 1 && token.starts_with('0') {
        return Err(Error::Fatal(
            None,
            format!("byte value has leading zeros: {:?}", token),
        ));
    }
    token.parse::<u8>().map_err(|err| {
        let message = format!("byte value out of range: {:?}", token);
        Error::fatal(err, message)
    })
}

fn identifier_regex() -> &'static Regex {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER.get_or_init(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is valid"))
}

fn literal_regex() -> &'static Regex {
    static LITERAL: OnceLock<Regex> = OnceLock::new();
    LITERAL.get_or_init(|| Regex::new(LITERAL_PATTERN).expect("literal pattern is valid"))
}
