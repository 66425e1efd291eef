//! 画像URL更新処理
//!
//! ## 処理フロー
//! 1. カタログを読み込む
//! 2. ルールテーブル（またはシート対応表）で各レコードの画像URLを決定
//! 3. 変更があったレコードのみ上書きし、カタログ全体を保存

use crate::catalog;
use crate::error::{CatalogError, Result};
use catalog_image_common::{fields, rules, ProductRecord, SheetMapping};
use std::path::Path;

/// 実行オプション
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// 保存せずに結果だけ表示
    pub dry_run: bool,
}

/// 個別の更新内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNotice {
    pub design_name: String,
    pub category: String,
    pub style: String,
    /// 置き換え前のURL
    pub old_url: String,
}

impl std::fmt::Display for UpdateNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "更新: {} ({}, {})", self.design_name, self.category, self.style)
    }
}

/// ルール適用の結果
#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    /// 処理したレコード数
    pub total_records: usize,
    pub notices: Vec<UpdateNotice>,
}

impl UpdateReport {
    /// 画像URLを変更したレコード数
    pub fn updated(&self) -> usize {
        self.notices.len()
    }
}

/// ルールテーブルを適用する
///
/// 解決結果が空でなく現在値と異なる場合のみ `image_url` を置き換える。
/// 変更対象のレコードに `design_name` / `category` / `style` がなければエラー。
pub fn apply_rules(records: &mut [ProductRecord]) -> Result<UpdateReport> {
    let mut report = UpdateReport {
        total_records: records.len(),
        ..Default::default()
    };

    for (index, record) in records.iter_mut().enumerate() {
        let new_url = rules::resolve_for(record);

        if new_url.is_empty() {
            tracing::debug!(index, category = record.category(), style = record.style(), "該当ルールなし");
            continue;
        }
        if new_url == record.image_url() {
            tracing::debug!(index, "画像URLは更新済み");
            continue;
        }

        let notice = UpdateNotice {
            design_name: required_field(record, index, fields::DESIGN_NAME)?,
            category: required_field(record, index, fields::CATEGORY)?,
            style: required_field(record, index, fields::STYLE)?,
            old_url: record.image_url().to_string(),
        };

        record.set_image_url(new_url);
        report.notices.push(notice);
    }

    Ok(report)
}

fn required_field(record: &ProductRecord, index: usize, field: &'static str) -> Result<String> {
    record
        .display_field(field)
        .ok_or(CatalogError::MissingField { index, field })
}

/// シートによる個別更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetUpdate {
    pub sr_no: String,
    pub design_name: String,
}

/// 対応表に存在しないレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetMiss {
    pub sr_no: String,
    pub design_name: String,
}

/// シート適用の結果
#[derive(Debug, Clone, Default)]
pub struct SheetReport {
    pub total_records: usize,
    pub updates: Vec<SheetUpdate>,
    pub misses: Vec<SheetMiss>,
}

impl SheetReport {
    pub fn updated(&self) -> usize {
        self.updates.len()
    }

    pub fn not_found(&self) -> usize {
        self.misses.len()
    }
}

/// シート対応表を適用する
///
/// `sr_no` で対応表を引き、異なるURLのみ置き換える。
/// 表示用フィールドの欠損は空文字として扱う。
pub fn apply_sheet(records: &mut [ProductRecord], mapping: &SheetMapping) -> SheetReport {
    let mut report = SheetReport {
        total_records: records.len(),
        ..Default::default()
    };

    for (index, record) in records.iter_mut().enumerate() {
        let sr_no = record.display_field(fields::SR_NO).unwrap_or_default();
        let design_name = record.display_field(fields::DESIGN_NAME).unwrap_or_default();

        let Some(new_url) = record.sr_no().and_then(|v| mapping.get(v)) else {
            tracing::debug!(index, sr_no = %sr_no, "対応する画像がありません");
            report.misses.push(SheetMiss { sr_no, design_name });
            continue;
        };

        if new_url == record.image_url() {
            continue;
        }

        record.set_image_url(new_url);
        report.updates.push(SheetUpdate { sr_no, design_name });
    }

    report
}

/// カタログファイルにルールテーブルを適用して保存する
pub fn update_catalog_file(path: &Path, options: &UpdateOptions) -> Result<UpdateReport> {
    let mut records = catalog::load_catalog(path)?;
    let report = apply_rules(&mut records)?;

    if options.dry_run {
        tracing::info!("ドライランのため保存しません");
    } else {
        catalog::save_catalog(path, &records)?;
    }

    Ok(report)
}

/// カタログファイルにシート対応表を適用して保存する
pub fn apply_sheet_file(
    catalog_path: &Path,
    mapping_path: &Path,
    options: &UpdateOptions,
) -> Result<SheetReport> {
    if !mapping_path.exists() {
        return Err(CatalogError::MappingNotFound(mapping_path.display().to_string()));
    }

    let mut records = catalog::load_catalog(catalog_path)?;
    let mapping = SheetMapping::from_file(mapping_path)?;
    tracing::info!(entries = mapping.len(), "対応表を読み込みました");

    let report = apply_sheet(&mut records, &mapping);

    if options.dry_run {
        tracing::info!("ドライランのため保存しません");
    } else {
        catalog::save_catalog(catalog_path, &records)?;
    }

    Ok(report)
}
