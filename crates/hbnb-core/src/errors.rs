use hbnb_core_types::RequestId;
use thiserror::Error;

/// Result type alias using HbnbError
pub type Result<T> = std::result::Result<T, HbnbError>;

/// Result type alias for storage-boundary operations
pub type StorageResult<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (the console, the
/// presentation layer, tests) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Model/Codec
    InvalidInput,
    UnknownClass,
    MissingClass,
    InvalidAttribute,
    InvalidValue,
    InvalidTimestamp,
    NotFound,

    // Lifecycle
    InvalidState,

    // Infrastructure
    Io,
    Serialization,
    Persistence,
    Config,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownClass => "ERR_UNKNOWN_CLASS",
            ExErrorKind::MissingClass => "ERR_MISSING_CLASS",
            ExErrorKind::InvalidAttribute => "ERR_INVALID_ATTRIBUTE",
            ExErrorKind::InvalidValue => "ERR_INVALID_VALUE",
            ExErrorKind::InvalidTimestamp => "ERR_INVALID_TIMESTAMP",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidState => "ERR_INVALID_STATE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Every storage-boundary failure surfaces as an `ExError`: a stable kind
/// plus optional context about the operation and object involved.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    class_name: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            class_name: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (a bare id or a composite key)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add entity class context
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the entity class context, if any
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(class_name) = &self.class_name {
            write!(f, " (class: {})", class_name)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the entity model and the codec
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HbnbError {
    /// Type discriminator does not name a known entity class
    #[error("Unknown class: {class_name}")]
    UnknownClass { class_name: String },

    /// Serialized mapping carries no type discriminator
    #[error("Missing class discriminator")]
    MissingClass,

    /// Attribute does not exist on the class, or may not be assigned
    #[error("Attribute '{attribute}' cannot be set on {class_name}")]
    InvalidAttribute {
        class_name: String,
        attribute: String,
    },

    /// Value could not be coerced to the attribute's type
    #[error("Invalid value for '{attribute}': expected {expected}, got {value:?}")]
    InvalidValue {
        attribute: String,
        expected: &'static str,
        value: String,
    },

    /// Timestamp string is not in the canonical format
    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },

    /// Object not present in storage
    #[error("No instance found: {key}")]
    NotFound { key: String },

    /// Generic (de)serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<HbnbError> for ExError {
    fn from(err: HbnbError) -> Self {
        match err {
            HbnbError::UnknownClass { class_name } => ExError::new(ExErrorKind::UnknownClass)
                .with_class_name(class_name)
                .with_message("Class doesn't exist"),

            HbnbError::MissingClass => ExError::new(ExErrorKind::MissingClass)
                .with_message("Class name missing"),

            HbnbError::InvalidAttribute {
                class_name,
                attribute,
            } => ExError::new(ExErrorKind::InvalidAttribute)
                .with_class_name(class_name)
                .with_message(format!("Attribute '{}' cannot be set", attribute)),

            HbnbError::InvalidValue {
                attribute,
                expected,
                value,
            } => ExError::new(ExErrorKind::InvalidValue).with_message(format!(
                "Invalid value for '{}': expected {}, got {:?}",
                attribute, expected, value
            )),

            HbnbError::InvalidTimestamp { value } => ExError::new(ExErrorKind::InvalidTimestamp)
                .with_message(format!("Invalid timestamp: {}", value)),

            HbnbError::NotFound { key } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(key)
                .with_message("No instance found"),

            HbnbError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to HbnbError
impl From<serde_json::Error> for HbnbError {
    fn from(err: serde_json::Error) -> Self {
        HbnbError::Serialization {
            message: err.to_string(),
        }
    }
}
