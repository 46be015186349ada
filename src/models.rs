use serde::{Deserialize, Serialize};

/// A selected or dropped file, described only by its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

/// A finished submission that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaterial {
    pub title: String,
    pub description: String,
    pub file_name: String,
    pub file_size_display: String,
    pub upload_date_display: String,
    pub downloads: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub file_name: String,
    pub file_size_display: String,
    pub upload_date_display: String,
    pub downloads: u64,
}

impl MaterialRecord {
    pub fn new(id: u64, material: NewMaterial) -> Self {
        Self {
            id,
            title: material.title,
            description: material.description,
            file_name: material.file_name,
            file_size_display: material.file_size_display,
            upload_date_display: material.upload_date_display,
            downloads: material.downloads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_camel_case() {
        let record = MaterialRecord::new(
            7,
            NewMaterial {
                title: "Intro".to_string(),
                description: String::new(),
                file_name: "intro.pdf".to_string(),
                file_size_display: "2.38 MB".to_string(),
                upload_date_display: "16.10.2026".to_string(),
                downloads: 0,
            },
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["fileName"], "intro.pdf");
        assert_eq!(json["fileSizeDisplay"], "2.38 MB");
        assert_eq!(json["uploadDateDisplay"], "16.10.2026");
        assert_eq!(json["downloads"], 0);
    }
}
