pub mod files;
pub mod response;

pub use files::{accept_attribute, file_extension, is_supported_file_name, MULTIPART_FIELD, SUPPORTED_EXTENSIONS};
pub use response::{ProcessDocumentsResponse, UploadedFilesResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct ProcessDocuments;

impl UseCaseMetadata for ProcessDocuments {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "process_documents"
    }

    fn display_name() -> &'static str {
        "Process Documents"
    }

    fn endpoint() -> &'static str {
        "/process-documents"
    }
}

/// Список документов, уже попавших в базу знаний
pub const UPLOADED_FILES_ENDPOINT: &str = "/get-uploaded-files";
