use serde::{Deserialize, Serialize};

/// Ответ `POST /process-documents`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessDocumentsResponse {
    /// Успешно ли построена база знаний
    #[serde(default)]
    pub success: bool,

    /// Сколько документов обработано
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_files: Option<u32>,

    /// Имена обработанных документов
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Текст ошибки от бэкенда
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Ответ `GET /get-uploaded-files`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadedFilesResponse {
    #[serde(default)]
    pub files: Vec<String>,
}
