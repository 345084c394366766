use strum::EnumMessage;
use strum_macros::{EnumMessage, IntoStaticStr};
use thiserror::Error;

/// The ways a terminal operation can fail.
///
/// Only operations that promise a definite element report an error; most
/// operations degrade to an empty or neutral result instead. A missing
/// selector or comparer is never an error: it is passed as `None` and the
/// operation yields nothing.
///
/// The documentation of each variant doubles as its user-facing message:
/// the first paragraph is the message, the rest a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, EnumMessage, IntoStaticStr)]
pub enum Error {
    /// Source contains no elements.
    ///
    /// The source enumeration is absent or produced no elements, where at
    /// least one element was required.
    #[error("source contains no elements")]
    EmptySource,
    /// Source contains more than one element.
    ///
    /// Exactly one element was required. Production stops as soon as a
    /// second element is seen, so the source may hold many more.
    #[error("source contains more than one element")]
    MultipleElementsFound,
}

impl Error {
    /// A stable identifier for the error kind.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code() {
        assert_eq!(Error::EmptySource.code(), "EmptySource");
        assert_eq!(
            Error::MultipleElementsFound.code(),
            "MultipleElementsFound"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::EmptySource.to_string(),
            "source contains no elements"
        );
    }

    #[test]
    fn test_message_and_note() {
        let error = Error::MultipleElementsFound;
        assert_eq!(error.message().trim(), "Source contains more than one element.");
        assert!(error.note().contains("second element"));
    }
}
