mod catalog;
mod engine;
mod engine_config;
mod form;
mod json_contract;
mod mount;

pub use catalog::FeatureCatalog;
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use form::{FormSlot, FormSubmission, UNSELECTED};
pub use json_contract::{FORM_SUBMISSION_JSON_SCHEMA_V1, FormSubmissionJsonContractV1};
pub use mount::ChartMount;
