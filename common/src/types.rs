//! 商品レコード型定義

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 既知のフィールド名
pub mod fields {
    pub const DESIGN_NAME: &str = "design_name";
    pub const CATEGORY: &str = "category";
    pub const STYLE: &str = "style";
    pub const IMAGE_URL: &str = "image_url";
    pub const SR_NO: &str = "sr_no";
}

/// 商品レコード
///
/// カタログJSONの1オブジェクト。既知フィールド以外も含め、
/// 値とフィールド順をそのまま保持する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRecord(Map<String, Value>);

impl ProductRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// フィールドを設定（既存キーの位置は維持される）
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// 文字列フィールドを取得（欠損・文字列以外は空文字）
    pub fn str_field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// 表示用の値（欠損時は None）
    pub fn display_field(&self, key: &str) -> Option<String> {
        self.0.get(key).map(display_value)
    }

    pub fn category(&self) -> &str {
        self.str_field(fields::CATEGORY)
    }

    pub fn style(&self) -> &str {
        self.str_field(fields::STYLE)
    }

    pub fn image_url(&self) -> &str {
        self.str_field(fields::IMAGE_URL)
    }

    pub fn sr_no(&self) -> Option<&Value> {
        self.0.get(fields::SR_NO)
    }

    pub fn set_image_url(&mut self, url: impl Into<String>) {
        self.0
            .insert(fields::IMAGE_URL.to_string(), Value::String(url.into()));
    }
}

/// JSON値を表示用文字列に変換（文字列は引用符なし）
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
