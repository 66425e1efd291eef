//! 画像シート対応表
//!
//! 商品スプレッドシートから書き出した行（`Sr. No.` と `Images` 列）を
//! 通し番号→画像URLの対応表に変換する。

use crate::error::Result;
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const SR_NO_COLUMN: &str = "Sr. No.";
pub const IMAGES_COLUMN: &str = "Images";

/// プレースホルダ画像の判定文字列
pub const PLACEHOLDER_MARKER: &str = "placeholder";

/// 通し番号→画像URLの対応表
#[derive(Debug, Clone, Default)]
pub struct SheetMapping {
    images: HashMap<String, String>,
}

impl SheetMapping {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let rows: Vec<Map<String, Value>> = serde_json::from_str(json)?;
        Ok(Self::from_rows(&rows))
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 行データから構築
    ///
    /// 空またはプレースホルダの画像は登録しない。同じ番号は後の行が優先。
    pub fn from_rows(rows: &[Map<String, Value>]) -> Self {
        let mut images = HashMap::new();

        for row in rows {
            let Some(key) = row.get(SR_NO_COLUMN).and_then(sr_no_key) else {
                continue;
            };

            let url = row
                .get(IMAGES_COLUMN)
                .and_then(Value::as_str)
                .unwrap_or("")
                .trim();

            if !url.is_empty() && !url.contains(PLACEHOLDER_MARKER) {
                images.insert(key, url.to_string());
            }
        }

        Self { images }
    }

    /// 通し番号に対応する画像URL
    pub fn get(&self, sr_no: &Value) -> Option<&str> {
        sr_no_key(sr_no).and_then(|key| self.images.get(&key).map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// 通し番号の照合キー（数値・文字列を同一視）
pub fn sr_no_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
