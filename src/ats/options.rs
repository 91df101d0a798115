use crate::models::ats::JobStatus;
use crate::options::ListOptions;
use crate::wire::EnumValue;

#[derive(Debug, Clone, Default)]
pub struct CandidateListOptions {
    pub list: ListOptions,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Matches candidates having any of these addresses.
    pub email_addresses: Vec<String>,
    /// Matches candidates having any of these tags.
    pub tags: Vec<String>,
}

impl CandidateListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.to_query_pairs();
        if let Some(ref first_name) = self.first_name {
            pairs.push(("first_name", first_name.clone()));
        }
        if let Some(ref last_name) = self.last_name {
            pairs.push(("last_name", last_name.clone()));
        }
        if !self.email_addresses.is_empty() {
            pairs.push(("email_addresses", self.email_addresses.join(",")));
        }
        if !self.tags.is_empty() {
            pairs.push(("tags", self.tags.join(",")));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationListOptions {
    pub list: ListOptions,
    pub candidate_id: Option<String>,
    pub job_id: Option<String>,
    pub source: Option<String>,
    pub credited_to_id: Option<String>,
    pub current_stage_id: Option<String>,
    pub reject_reason_id: Option<String>,
}

impl ApplicationListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.to_query_pairs();
        if let Some(ref candidate_id) = self.candidate_id {
            pairs.push(("candidate_id", candidate_id.clone()));
        }
        if let Some(ref job_id) = self.job_id {
            pairs.push(("job_id", job_id.clone()));
        }
        if let Some(ref source) = self.source {
            pairs.push(("source", source.clone()));
        }
        if let Some(ref credited_to_id) = self.credited_to_id {
            pairs.push(("credited_to_id", credited_to_id.clone()));
        }
        if let Some(ref current_stage_id) = self.current_stage_id {
            pairs.push(("current_stage_id", current_stage_id.clone()));
        }
        if let Some(ref reject_reason_id) = self.reject_reason_id {
            pairs.push(("reject_reason_id", reject_reason_id.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActivityListOptions {
    pub list: ListOptions,
    pub user_id: Option<String>,
}

impl ActivityListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.to_query_pairs();
        if let Some(ref user_id) = self.user_id {
            pairs.push(("user_id", user_id.clone()));
        }
        pairs
    }
}

/// Filters for endpoints scoped to a single candidate (attachments, EEOC answers).
#[derive(Debug, Clone, Default)]
pub struct CandidateScopedListOptions {
    pub list: ListOptions,
    pub candidate_id: Option<String>,
}

impl CandidateScopedListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.to_query_pairs();
        if let Some(ref candidate_id) = self.candidate_id {
            pairs.push(("candidate_id", candidate_id.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct OfferListOptions {
    pub list: ListOptions,
    pub application_id: Option<String>,
    pub creator_id: Option<String>,
}

impl OfferListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.to_query_pairs();
        if let Some(ref application_id) = self.application_id {
            pairs.push(("application_id", application_id.clone()));
        }
        if let Some(ref creator_id) = self.creator_id {
            pairs.push(("creator_id", creator_id.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobListOptions {
    pub list: ListOptions,
    pub code: Option<String>,
    /// Unknown statuses are sent as given.
    pub status: Option<EnumValue<JobStatus>>,
    pub offices: Vec<String>,
}

impl JobListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.to_query_pairs();
        if let Some(ref code) = self.code {
            pairs.push(("code", code.clone()));
        }
        if let Some(ref status) = self.status {
            pairs.push(("status", status.as_wire().to_string()));
        }
        if !self.offices.is_empty() {
            pairs.push(("offices", self.offices.join(",")));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserListOptions {
    pub list: ListOptions,
    pub email: Option<String>,
}

impl UserListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.to_query_pairs();
        if let Some(ref email) = self.email {
            pairs.push(("email", email.clone()));
        }
        pairs
    }
}
