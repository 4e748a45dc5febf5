use core::fmt;

/// An error that occurred while building or combining an expression.
///
/// Every error is raised at the point where the malformed input is supplied.
/// A synthesis call either succeeds and returns a complete fragment or fails
/// before producing any output.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A value outside `0..=0x10FFFF`, or a surrogate half.
    InvalidCodepoint(u32),
    /// A code point range whose start is greater than its end.
    InvalidRange { start: u32, end: u32 },
    /// An integer range (or quantifier range) whose start is greater than its end.
    RangeOutOfOrder { start: u64, end: u64 },
    /// A quantifier that would be a no-op or would erase its operand.
    RedundantQuantifier(&'static str),
    /// A capture group name the target engine would reject.
    InvalidGroupName(String),
    /// An unknown Unicode general category or script name.
    InvalidUnicodeClass(String),
    /// The final pattern was rejected by the regex engine.
    #[cfg(feature = "compile")]
    Compile(Box<regex_automata::meta::BuildError>),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCodepoint(cp) => write!(f, "invalid codepoint: 0x{cp:X}"),
            Error::InvalidRange { start, end } => write!(
                f,
                "character range is out of order: 0x{start:X} > 0x{end:X}"
            ),
            Error::RangeOutOfOrder { start, end } => {
                write!(f, "range is out of order: {start} > {end}")
            }
            Error::RedundantQuantifier(reason) => write!(f, "redundant quantifier: {reason}"),
            Error::InvalidGroupName(name) => write!(f, "invalid capture group name: {name:?}"),
            Error::InvalidUnicodeClass(name) => write!(f, "invalid unicode class: {name:?}"),
            #[cfg(feature = "compile")]
            Error::Compile(e) => write!(f, "failed to compile pattern: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "compile")]
            Error::Compile(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

#[cfg(feature = "compile")]
impl From<regex_automata::meta::BuildError> for Error {
    fn from(e: regex_automata::meta::BuildError) -> Self {
        Error::Compile(Box::new(e))
    }
}
