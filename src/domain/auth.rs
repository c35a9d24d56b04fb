use crate::utils::error::FunctionError;
use serde::{Deserialize, Serialize};

/// Identity the hosting platform attached to an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub uid: String,
}

/// Binary authentication gate: either a caller identity is present or it is not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    identity: Option<CallerIdentity>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn authenticated(uid: impl Into<String>) -> Self {
        Self {
            identity: Some(CallerIdentity { uid: uid.into() }),
        }
    }

    pub fn require(&self) -> Result<&CallerIdentity, FunctionError> {
        self.identity.as_ref().ok_or(FunctionError::Unauthenticated)
    }
}

impl From<Option<CallerIdentity>> for AuthContext {
    fn from(identity: Option<CallerIdentity>) -> Self {
        Self { identity }
    }
}
