use crate::options::ListOptions;

#[derive(Debug, Clone, Default)]
pub struct FileListOptions {
    pub list: ListOptions,
    pub folder_id: Option<String>,
    pub drive_id: Option<String>,
    pub name: Option<String>,
    /// Matches files of any of these MIME types.
    pub mime_types: Vec<String>,
}

impl FileListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.to_query_pairs();
        if let Some(ref folder_id) = self.folder_id {
            pairs.push(("folder_id", folder_id.clone()));
        }
        if let Some(ref drive_id) = self.drive_id {
            pairs.push(("drive_id", drive_id.clone()));
        }
        if let Some(ref name) = self.name {
            pairs.push(("name", name.clone()));
        }
        if !self.mime_types.is_empty() {
            pairs.push(("mime_type", self.mime_types.join(",")));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct FolderListOptions {
    pub list: ListOptions,
    pub parent_folder_id: Option<String>,
    pub drive_id: Option<String>,
    pub name: Option<String>,
}

impl FolderListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.to_query_pairs();
        if let Some(ref parent_folder_id) = self.parent_folder_id {
            pairs.push(("parent_folder_id", parent_folder_id.clone()));
        }
        if let Some(ref drive_id) = self.drive_id {
            pairs.push(("drive_id", drive_id.clone()));
        }
        if let Some(ref name) = self.name {
            pairs.push(("name", name.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct DriveListOptions {
    pub list: ListOptions,
    pub name: Option<String>,
}

impl DriveListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.to_query_pairs();
        if let Some(ref name) = self.name {
            pairs.push(("name", name.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::FileListOptions;

    #[test]
    fn mime_types_are_comma_joined() {
        let options = FileListOptions {
            folder_id: Some("f1".to_string()),
            mime_types: vec!["application/pdf".to_string(), "image/png".to_string()],
            ..FileListOptions::default()
        };
        assert_eq!(
            options.to_query_pairs(),
            vec![
                ("folder_id", "f1".to_string()),
                ("mime_type", "application/pdf,image/png".to_string()),
            ]
        );
    }
}
