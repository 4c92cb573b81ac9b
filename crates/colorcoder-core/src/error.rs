//! Rejections surfaced to the user by palette operations.

use thiserror::Error;

/// A user action the palette refused. The message is shown verbatim in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("Error: No name has been assigned to color.")]
    EmptyName,
    #[error("Error: Color \"{0}\" already exists. Choose new name.")]
    DuplicateName(String),
    #[error("Error: No Color was selected.")]
    NoSelection,
    #[error("Error: Color \"{0}\" does not exist.")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Rejected::EmptyName.to_string(),
            "Error: No name has been assigned to color."
        );
        assert_eq!(
            Rejected::DuplicateName("red".into()).to_string(),
            "Error: Color \"red\" already exists. Choose new name."
        );
        assert_eq!(Rejected::NoSelection.to_string(), "Error: No Color was selected.");
    }
}
