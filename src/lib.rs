#![forbid(unsafe_code)]

mod build_url;
mod client;
mod client_defaults;
mod common;
mod environment;
mod error;
mod models;
mod options;
pub mod wire;

pub mod ats;
pub mod filestorage;

pub use client::{Client, ClientBuilder};
pub use environment::Environment;
pub use error::{Error, Problem, ResourceError, ValidationError};
pub use options::{ListOptions, RetrieveOptions, WriteOptions};

pub use models::{
    DebugModeLog, DebugModelLogSummary, EndpointRequest, ErrorValidationProblem,
    IgnoreCommonModelRequest, IgnoreReason, LinkedAccountStatus, MetaResponse, ModelOperation,
    ModelResponse, Paginated, RemoteData, ValidationProblemSource, WarningValidationProblem,
};

pub use wire::{EnumValue, Field, IdOr, OneOf, Record, Timestamp, WireEnum};
