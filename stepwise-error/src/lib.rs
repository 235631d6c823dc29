//! Contains the common [`ErrorKind`] trait used by all faults to display user-facing error
//! messages, and the [`Error`] type that carries them.
//!
//! Every fault belongs to one of two [`FaultClass`]es: malformed input, which the user can fix by
//! editing the expression, or an internal defect, which means one of the reduction stages broke
//! an invariant it was supposed to uphold.

use ariadne::{Color, Report, Source};
use std::{fmt::{self, Debug, Display, Formatter}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Who is at fault for an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultClass {
    /// The input text is malformed. Correcting the input resolves the error.
    Malformed,

    /// A reduction stage broke one of its own invariants. This is a bug, not bad input.
    Internal,
}

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns who is at fault for this error. Most errors are caused by malformed input.
    fn class(&self) -> FaultClass {
        FaultClass::Malformed
    }

    /// Returns the message displayed at the top of the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns who is at fault for this error.
    pub fn class(&self) -> FaultClass {
        self.kind.class()
    }

    /// Returns true if this error was caused by a defect in the reduction pipeline rather than by
    /// the input.
    pub fn is_internal(&self) -> bool {
        self.class() == FaultClass::Internal
    }

    /// Returns the message describing this error.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, pointing into the given input.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.class() {
            FaultClass::Malformed => write!(f, "{}", self.message()),
            FaultClass::Internal => write!(f, "internal error: {}", self.message()),
        }
    }
}

impl std::error::Error for Error {}
