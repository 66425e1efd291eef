//! カタログファイルの読み書き

use crate::error::{CatalogError, Result};
use catalog_image_common::ProductRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// カタログJSONを読み込む
pub fn load_catalog(path: &Path) -> Result<Vec<ProductRecord>> {
    if !path.exists() {
        return Err(CatalogError::CatalogNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<ProductRecord> = serde_json::from_str(&content)?;
    tracing::info!(path = %path.display(), records = records.len(), "カタログを読み込みました");

    Ok(records)
}

/// 出力JSONのインデント（スペース4つ固定）
const INDENT: &[u8] = b"    ";

/// カタログをJSONバイト列に変換
///
/// 非ASCII文字はエスケープしない。末尾に改行は付けない。
pub fn render_catalog(records: &[ProductRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// カタログ全体を上書き保存する
pub fn save_catalog(path: &Path, records: &[ProductRecord]) -> Result<()> {
    let bytes = render_catalog(records)?;
    std::fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), records = records.len(), "カタログを保存しました");
    Ok(())
}
