use hbnb_core::hbnb_core_types::RequestId;
use hbnb_core::{ExError, ExErrorKind, HbnbError};
use hbnb_store::RequestError;
use thiserror::Error;

/// Everything a console command can fail with
///
/// The first group renders as the console's fixed messages; storage and
/// model failures render through their own `Display`.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("** class name missing **")]
    ClassNameMissing,

    #[error("** class doesn't exist **")]
    ClassDoesNotExist,

    #[error("** instance id missing **")]
    InstanceIdMissing,

    #[error("** no instance found **")]
    NoInstanceFound,

    #[error("** attribute name missing **")]
    AttributeNameMissing,

    #[error("** value missing **")]
    ValueMissing,

    #[error("** {0} **")]
    Model(HbnbError),

    #[error("{0}")]
    Storage(#[from] ExError),
}

impl From<HbnbError> for ConsoleError {
    fn from(err: HbnbError) -> Self {
        match err {
            HbnbError::UnknownClass { .. } => ConsoleError::ClassDoesNotExist,
            HbnbError::MissingClass => ConsoleError::ClassNameMissing,
            HbnbError::NotFound { .. } => ConsoleError::NoInstanceFound,
            other => ConsoleError::Model(other),
        }
    }
}

impl RequestError for ConsoleError {
    fn err_code(&self) -> &'static str {
        match self {
            ConsoleError::ClassNameMissing
            | ConsoleError::InstanceIdMissing
            | ConsoleError::AttributeNameMissing
            | ConsoleError::ValueMissing => ExErrorKind::InvalidInput.code(),
            ConsoleError::ClassDoesNotExist => ExErrorKind::UnknownClass.code(),
            ConsoleError::NoInstanceFound => ExErrorKind::NotFound.code(),
            ConsoleError::Model(e) => ExError::from(e.clone()).code(),
            ConsoleError::Storage(e) => e.code(),
        }
    }

    fn with_request_id(self, request_id: RequestId) -> Self {
        match self {
            ConsoleError::Storage(e) => ConsoleError::Storage(e.with_request_id(request_id)),
            other => other,
        }
    }
}
