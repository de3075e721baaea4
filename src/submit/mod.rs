pub mod executor;
pub mod transport;

pub use executor::SubmitExecutor;
pub use transport::{Response, Transport, TransportError};

use crate::form::field::{Field, FormFields};
use serde::{Deserialize, Serialize};

/// The three field values captured at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.get(Field::Name).value().to_string(),
            email: fields.get(Field::Email).value().to_string(),
            message: fields.get(Field::Message).value().to_string(),
        }
    }

    /// `application/x-www-form-urlencoded` request body.
    pub fn to_form_body(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

/// A submission bound to its target endpoint, ready for a transport.
#[derive(Debug, Clone)]
pub struct Submission {
    pub endpoint: String,
    pub data: FormData,
}

#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    Accepted { status: u16 },
    Rejected { status: u16, detail: Option<String> },
    Unreachable { detail: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Folds a transport result into an outcome, pulling the optional `error`
/// string out of a JSON failure body when one is present.
pub fn settle(result: Result<Response, TransportError>) -> SubmissionOutcome {
    match result {
        Ok(response) if response.is_success() => SubmissionOutcome::Accepted {
            status: response.status,
        },
        Ok(response) => {
            let detail = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.error);
            SubmissionOutcome::Rejected {
                status: response.status,
                detail,
            }
        }
        Err(err) => SubmissionOutcome::Unreachable {
            detail: err.to_string(),
        },
    }
}
