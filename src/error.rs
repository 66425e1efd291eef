use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("カタログファイルが見つかりません: {0}")]
    CatalogNotFound(String),

    #[error("対応表ファイルが見つかりません: {0}")]
    MappingNotFound(String),

    #[error("レコード #{index} に必須フィールド `{field}` がありません")]
    MissingField { index: usize, field: &'static str },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] catalog_image_common::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
