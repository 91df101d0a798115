//! Applicant tracking records and enumerations.

mod activity;
mod application;
mod attachment;
mod candidate;
mod contact;
mod eeoc;
mod enums;
mod job;
mod offer;
mod remote_user;

pub use activity::{Activity, ActivityRequest};
pub use application::{Application, ApplicationRequest, RejectReason};
pub use attachment::{Attachment, AttachmentRequest};
pub use candidate::{Candidate, CandidateRequest};
pub use contact::{EmailAddress, PhoneNumber, Url};
pub use eeoc::Eeoc;
pub use enums::{
    AccessRole, ActivityType, AttachmentType, DisabilityStatus, EmailAddressType, Gender, JobStatus,
    JobType, OfferStatus, PhoneNumberType, Race, UrlType, VeteranStatus, Visibility,
};
pub use job::{Department, Job, JobInterviewStage, Office};
pub use offer::Offer;
pub use remote_user::RemoteUser;
