use crate::model::vo::BlockingReference;

pub type HelpdeskResult<T> = Result<T, HelpdeskException>;

#[derive(Debug, thiserror::Error)]
pub enum HelpdeskException {
    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("{field} refers to a {entity} that does not exist: {id}")]
    InvalidReference {
        field: &'static str,
        entity: &'static str,
        id: i32,
    },

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("{reason}")]
    Conflict { reason: String },

    #[error(
        "{entity} {id} is still referenced by {}",
        .references.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    )]
    ReferencedBy {
        entity: &'static str,
        id: i32,
        references: Vec<BlockingReference>,
    },

    #[error("{reason}")]
    ProtectedRecord { reason: String },

    #[error("Status cannot change from {from} to {to}")]
    IllegalTransition { from: String, to: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Helpdesk internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

/// Coarse classification the outer surfaces map to status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionKind {
    Validation,
    NotFound,
    Conflict,
    Authentication,
    Internal,
}

impl HelpdeskException {
    pub fn kind(&self) -> ExceptionKind {
        use HelpdeskException::*;
        match self {
            MissingFields { .. }
            | InvalidField { .. }
            | InvalidReference { .. }
            | IllegalTransition { .. } => ExceptionKind::Validation,
            NotFound { .. } => ExceptionKind::NotFound,
            Conflict { .. } | ReferencedBy { .. } | ProtectedRecord { .. } => {
                ExceptionKind::Conflict
            }
            InvalidCredentials => ExceptionKind::Authentication,
            InternalError { .. } => ExceptionKind::Internal,
        }
    }

    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }
}

/// Repositories report through `anyhow`; a `HelpdeskException` raised below the
/// service layer (e.g. a translated uniqueness violation) is recovered intact.
impl From<anyhow::Error> for HelpdeskException {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<HelpdeskException>() {
            Ok(specific) => specific,
            Err(source) => HelpdeskException::InternalError { source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_exception_survives_anyhow() {
        let e: anyhow::Error = HelpdeskException::conflict("Username already exists").into();
        let back = HelpdeskException::from(e);
        assert_eq!(back.kind(), ExceptionKind::Conflict);
        assert_eq!(back.to_string(), "Username already exists");
    }

    #[test]
    fn foreign_error_becomes_internal() {
        let back = HelpdeskException::from(anyhow::anyhow!("disk I/O error"));
        assert_eq!(back.kind(), ExceptionKind::Internal);
    }

    #[test]
    fn missing_fields_are_listed() {
        let e = HelpdeskException::MissingFields {
            fields: vec!["description", "user_id"],
        };
        assert_eq!(e.to_string(), "Missing required fields: description, user_id");
    }
}
