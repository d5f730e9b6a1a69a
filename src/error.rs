use thiserror::Error;

/// Reasons a form refuses to produce an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("enter at least one key, separated with +")]
    NoKeys,
}
