//! Applicant tracking: records, list filters and the endpoint facade.

mod client;
mod options;

pub use crate::models::ats::*;
pub use client::AtsClient;
pub use options::{
    ActivityListOptions, ApplicationListOptions, CandidateListOptions, CandidateScopedListOptions,
    JobListOptions, OfferListOptions, UserListOptions,
};
