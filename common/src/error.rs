//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::SheetMapping;

    #[test]
    fn test_missing_sheet_file_is_io_error() {
        let err = SheetMapping::from_file(std::path::Path::new("/nonexistent/progress.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
        assert!(err.to_string().starts_with("IO error: "));
    }

    #[test]
    fn test_truncated_sheet_is_json_error() {
        let err = SheetMapping::from_json(r#"[{"Sr. No.": 1, "Images": "#).unwrap_err();
        assert!(matches!(err, Error::Json(ref e) if e.is_eof()));
        assert!(err.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_sheet_row_not_object_is_json_error() {
        let err = SheetMapping::from_json(r#"[{"Sr. No.": 1}, "row"]"#).unwrap_err();
        assert!(matches!(err, Error::Json(ref e) if e.is_data()));
    }
}
