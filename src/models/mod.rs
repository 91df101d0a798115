pub mod ats;
mod common;
pub mod filestorage;

pub use common::{
    DebugModeLog, DebugModelLogSummary, EndpointRequest, ErrorValidationProblem,
    IgnoreCommonModelRequest, IgnoreReason, LinkedAccountStatus, MetaResponse, ModelOperation,
    ModelResponse, Paginated, RemoteData, ValidationProblemSource, WarningValidationProblem,
};
