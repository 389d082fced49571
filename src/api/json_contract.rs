use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::FormSubmission;

pub const FORM_SUBMISSION_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for form submissions crossing a host boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSubmissionJsonContractV1 {
    pub schema_version: u32,
    pub submission: FormSubmission,
}

impl FormSubmission {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = FormSubmissionJsonContractV1 {
            schema_version: FORM_SUBMISSION_JSON_SCHEMA_V1,
            submission: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize submission contract v1: {e}"))
        })
    }

    /// Parses either a bare submission or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(submission) = serde_json::from_str::<FormSubmission>(input) {
            return Ok(submission);
        }
        let payload: FormSubmissionJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse submission json payload: {e}"))
        })?;
        if payload.schema_version != FORM_SUBMISSION_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported submission schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.submission)
    }
}
