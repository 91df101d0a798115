use crate::wire::Timestamp;

/// Query parameters shared by every list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub cursor: Option<String>,
    pub page_size: Option<u32>,
    pub created_after: Option<Timestamp>,
    pub created_before: Option<Timestamp>,
    pub modified_after: Option<Timestamp>,
    pub modified_before: Option<Timestamp>,
    pub include_deleted_data: Option<bool>,
    pub include_remote_data: Option<bool>,
    /// Related objects to expand in place of their identifiers.
    pub expand: Vec<String>,
    pub remote_id: Option<String>,
}

impl ListOptions {
    /// Continues from the `next` cursor of a previous page.
    pub fn after_cursor(cursor: impl Into<String>) -> Self {
        Self {
            cursor: Some(cursor.into()),
            ..Self::default()
        }
    }

    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref cursor) = self.cursor {
            pairs.push(("cursor", cursor.clone()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        if let Some(ref created_after) = self.created_after {
            pairs.push(("created_after", created_after.to_rfc3339()));
        }
        if let Some(ref created_before) = self.created_before {
            pairs.push(("created_before", created_before.to_rfc3339()));
        }
        if let Some(ref modified_after) = self.modified_after {
            pairs.push(("modified_after", modified_after.to_rfc3339()));
        }
        if let Some(ref modified_before) = self.modified_before {
            pairs.push(("modified_before", modified_before.to_rfc3339()));
        }
        if let Some(include_deleted_data) = self.include_deleted_data {
            pairs.push(("include_deleted_data", include_deleted_data.to_string()));
        }
        if let Some(include_remote_data) = self.include_remote_data {
            pairs.push(("include_remote_data", include_remote_data.to_string()));
        }
        if !self.expand.is_empty() {
            pairs.push(("expand", self.expand.join(",")));
        }
        if let Some(ref remote_id) = self.remote_id {
            pairs.push(("remote_id", remote_id.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct RetrieveOptions {
    pub expand: Vec<String>,
    pub include_remote_data: Option<bool>,
}

impl RetrieveOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.expand.is_empty() {
            pairs.push(("expand", self.expand.join(",")));
        }
        if let Some(include_remote_data) = self.include_remote_data {
            pairs.push(("include_remote_data", include_remote_data.to_string()));
        }
        pairs
    }
}

/// Flags accepted by create and partial update endpoints.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Returns the integration's request log alongside the result.
    pub is_debug_mode: Option<bool>,
    /// Queues the write and returns before the third party responds.
    pub run_async: Option<bool>,
}

impl WriteOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(is_debug_mode) = self.is_debug_mode {
            pairs.push(("is_debug_mode", is_debug_mode.to_string()));
        }
        if let Some(run_async) = self.run_async {
            pairs.push(("run_async", run_async.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::{ListOptions, RetrieveOptions, WriteOptions};

    #[test]
    fn empty_options_add_no_query() {
        assert!(ListOptions::default().to_query_pairs().is_empty());
        assert!(RetrieveOptions::default().to_query_pairs().is_empty());
        assert!(WriteOptions::default().to_query_pairs().is_empty());
    }

    #[test]
    fn list_options_format_timestamps_and_expand() {
        let options = ListOptions {
            page_size: Some(50),
            modified_after: Some("2021-01-01T00:00:00Z".parse().expect("timestamp")),
            include_remote_data: Some(true),
            expand: vec!["applications".to_string(), "attachments".to_string()],
            ..ListOptions::after_cursor("cD0yMDIx")
        };
        assert_eq!(
            options.to_query_pairs(),
            vec![
                ("cursor", "cD0yMDIx".to_string()),
                ("page_size", "50".to_string()),
                ("modified_after", "2021-01-01T00:00:00Z".to_string()),
                ("include_remote_data", "true".to_string()),
                ("expand", "applications,attachments".to_string()),
            ]
        );
    }
}
