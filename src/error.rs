use std::{error, fmt, io, result};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Clap(clap::Error),
    Fatal(Option<Box<dyn error::Error>>, String),
}

impl Error {
    pub fn fatal<E: error::Error + 'static>(err: E, message: String) -> Error {
        Error::Fatal(Some(Box::new(err)), message)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Clap(err) => Some(err),
            Error::Fatal(Some(err), _) => Some(err.as_ref()),
            Error::Fatal(None, _) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "Unhandled IO error: {}", err),
            Error::Clap(err) => write!(f, "{}", err),
            Error::Fatal(_, msg) => write!(f, "fatal: {}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Error {
        Error::Clap(err)
    }
}

pub type Result<T> = result::Result<T, Error>;
