#[derive(Debug)]
pub enum RpslsError {
    Io(std::io::Error),
    Logger(String),
}

impl From<std::io::Error> for RpslsError {
    fn from(err: std::io::Error) -> RpslsError {
        RpslsError::Io(err)
    }
}

impl std::fmt::Display for RpslsError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            RpslsError::Io(err) => write!(fmt, "I/O error: {}", err),
            RpslsError::Logger(msg) => write!(fmt, "could not start logger: {}", msg),
        }
    }
}

impl std::error::Error for RpslsError {}
