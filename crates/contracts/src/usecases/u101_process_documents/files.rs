//! Правила приёма файлов на клиенте

/// Расширения, которые бэкенд умеет разбирать (без точки, в нижнем регистре)
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["pdf", "docx", "doc", "txt", "pptx"];

/// Имя поля multipart-формы; повторяется по разу на каждый файл
pub const MULTIPART_FIELD: &str = "files";

/// Расширение после последней точки в нижнем регистре.
///
/// `None`, если точки в имени нет.
pub fn file_extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

pub fn is_supported_file_name(name: &str) -> bool {
    file_extension(name)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Значение для атрибута `accept` у `<input type="file">`
pub fn accept_attribute() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("notes.PDF"), Some("pdf".to_string()));
        assert_eq!(file_extension("lecture.v2.pptx"), Some("pptx".to_string()));
        assert_eq!(file_extension("archive."), Some(String::new()));
        assert_eq!(file_extension("README"), None);
    }

    #[test]
    fn test_supported_file_names() {
        assert!(is_supported_file_name("chapter1.pdf"));
        assert!(is_supported_file_name("Essay.DocX"));
        assert!(is_supported_file_name("old.doc"));
        assert!(is_supported_file_name("todo.txt"));
        assert!(is_supported_file_name("slides.pptx"));
    }

    #[test]
    fn test_unsupported_file_names() {
        assert!(!is_supported_file_name("photo.png"));
        assert!(!is_supported_file_name("pdf"));
        assert!(!is_supported_file_name("archive."));
        assert!(!is_supported_file_name("book.pdf.zip"));
    }

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".pdf,.docx,.doc,.txt,.pptx");
    }
}
