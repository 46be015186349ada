//! Study-materials administration: the add-material form controller and the
//! materials list it feeds.

pub mod error;
pub mod format;
pub mod models;
pub mod probe;
pub mod shell;
pub mod store;
pub mod upload;

pub use error::{FileRejected, ValidationError};
pub use format::{format_file_size, format_upload_date};
pub use models::{FileHandle, MaterialRecord, NewMaterial};
pub use store::MaterialListStore;
pub use upload::{
    validate_file, DraftField, DraftMaterial, DragState, MaterialUploadController,
    MAX_FILE_SIZE_BYTES, PDF_MIME_TYPE,
};
