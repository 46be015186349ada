//! The add-material form: draft fields, file validation and drag-and-drop state.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::{FileRejected, ValidationError};
use crate::format::{format_file_size, format_upload_date};
use crate::models::{FileHandle, NewMaterial};

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Accepts only PDFs up to [`MAX_FILE_SIZE_BYTES`]. Type is checked first.
pub fn validate_file(candidate: &FileHandle) -> Result<(), FileRejected> {
    if candidate.mime_type != PDF_MIME_TYPE {
        return Err(FileRejected::InvalidType);
    }
    if candidate.size_bytes > MAX_FILE_SIZE_BYTES {
        return Err(FileRejected::TooLarge);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
}

/// In-progress form state. `file` is only ever assigned a validated handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftMaterial {
    title: String,
    description: String,
    file: Option<FileHandle>,
    drag: DragState,
}

impl DraftMaterial {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn file(&self) -> Option<&FileHandle> {
        self.file.as_ref()
    }

    pub fn drag_active(&self) -> bool {
        self.drag == DragState::Dragging
    }
}

#[derive(Debug, Default)]
pub struct MaterialUploadController {
    draft: DraftMaterial,
}

impl MaterialUploadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &DraftMaterial {
        &self.draft
    }

    pub fn drag_state(&self) -> DragState {
        self.draft.drag
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.draft.title = value,
            DraftField::Description => self.draft.description = value,
        }
    }

    pub fn select_file(&mut self, candidate: FileHandle) -> Result<(), FileRejected> {
        if let Err(reason) = validate_file(&candidate) {
            warn!(
                file_name = %candidate.name,
                mime_type = %candidate.mime_type,
                size_bytes = candidate.size_bytes,
                ?reason,
                "Rejected material file"
            );
            return Err(reason);
        }

        debug!(
            file_name = %candidate.name,
            size_bytes = candidate.size_bytes,
            "Accepted material file"
        );
        self.draft.file = Some(candidate);
        Ok(())
    }

    pub fn begin_drag(&mut self) {
        self.draft.drag = DragState::Dragging;
        debug!(state = ?self.draft.drag, "Drag entered form");
    }

    pub fn end_drag(&mut self) {
        self.draft.drag = DragState::Idle;
        debug!(state = ?self.draft.drag, "Drag left form");
    }

    /// Same as [`select_file`](Self::select_file), but the drag always ends.
    pub fn drop_file(&mut self, candidate: FileHandle) -> Result<(), FileRejected> {
        self.draft.drag = DragState::Idle;
        debug!(state = ?self.draft.drag, "File dropped on form");
        self.select_file(candidate)
    }

    pub fn submit(&mut self) -> Result<NewMaterial, ValidationError> {
        self.submit_on(Local::now().date_naive())
    }

    /// Finalizes the draft with `date` as the upload date and resets the form.
    ///
    /// On failure nothing in the draft changes.
    pub fn submit_on(&mut self, date: NaiveDate) -> Result<NewMaterial, ValidationError> {
        let missing_title = self.draft.title.trim().is_empty();
        let file = match &self.draft.file {
            Some(file) if !missing_title => file,
            file => {
                return Err(ValidationError {
                    missing_title,
                    missing_file: file.is_none(),
                })
            }
        };

        let material = NewMaterial {
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            file_name: file.name.clone(),
            file_size_display: format_file_size(file.size_bytes),
            upload_date_display: format_upload_date(date),
            downloads: 0,
        };

        info!(title = %material.title, file_name = %material.file_name, "Material submitted");
        self.draft = DraftMaterial::default();
        Ok(material)
    }

    pub fn cancel(&mut self) {
        self.draft = DraftMaterial::default();
        debug!(state = ?self.draft.drag, "Draft cancelled");
    }
}
