use crate::shared::api_utils::api_url;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_process_documents::{
    ProcessDocuments, ProcessDocumentsResponse, UploadedFilesResponse, MULTIPART_FIELD,
    UPLOADED_FILES_ENDPOINT,
};
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// Отправить файлы на обработку: одно поле `files` на каждый файл
pub async fn process_documents(files: &[File]) -> Result<ProcessDocumentsResponse, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    for file in files {
        form_data
            .append_with_blob_and_filename(MULTIPART_FIELD, file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }

    let url = api_url(ProcessDocuments::endpoint());
    log::info!("{}: sending {} file(s)", ProcessDocuments::full_name(), files.len());

    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        log::warn!(
            "{} answered HTTP {}",
            ProcessDocuments::full_name(),
            response.status()
        );
    }

    response
        .json::<ProcessDocumentsResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Получить список документов в базе знаний
pub async fn fetch_uploaded_files() -> Result<Vec<String>, String> {
    let url = api_url(UPLOADED_FILES_ENDPOINT);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let data = response
        .json::<UploadedFilesResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.files)
}
