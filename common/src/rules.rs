//! 画像URLルールテーブル
//!
//! カテゴリとスタイルの組から商品画像URLを決定する。
//! 上から順に評価し、最初に一致したルールを採用する。

use crate::types::ProductRecord;

pub const ALINE_IMAGE: &str = "https://tahoismsecifrazmevgm.supabase.co/storage/v1/object/public/products/Long%20Top%20Alines/Aline__Far.webp";
pub const CORE_CAPRI_IMAGE: &str = "https://tahoismsecifrazmevgm.supabase.co/storage/v1/object/public/products/Core%20Capri/Capri__CHS.webp";
pub const FANCY_CAPRI_IMAGE: &str = "https://tahoismsecifrazmevgm.supabase.co/storage/v1/object/public/products/Fancy%20Capri/Capri_Denim%20_Cadd%2032%20no.webp";
pub const CORE_SHORTS_IMAGE: &str = "https://tahoismsecifrazmevgm.supabase.co/storage/v1/object/public/products/Core%20Shorts/Bloomer__BFC.webp";
pub const DENIM_SHORTS_IMAGE: &str = "https://tahoismsecifrazmevgm.supabase.co/storage/v1/object/public/products/Fancy%20Shorts/Shorts_Denim_DSC3.webp";
pub const CORE_SKIRTS_IMAGE: &str = "https://tahoismsecifrazmevgm.supabase.co/storage/v1/object/public/products/Core%20Skirts/Skirt__Box%20Seemar.webp";
pub const FANCY_SKIRTS_IMAGE: &str = "https://tahoismsecifrazmevgm.supabase.co/storage/v1/object/public/products/Fancy%20Skirts/Skirt_Denim_SDMS819.webp";
pub const FANCY_TOPS_IMAGE: &str = "https://tahoismsecifrazmevgm.supabase.co/storage/v1/object/public/products/Fancy%20Tops/Top__DT288.webp";
pub const CORE_TOPS_IMAGE: &str = "https://tahoismsecifrazmevgm.supabase.co/storage/v1/object/public/products/Core%20Tops/Top__GT144.webp";
pub const DENIM_PANTS_IMAGE: &str = "https://tahoismsecifrazmevgm.supabase.co/storage/v1/object/public/products/Fancy%20Full%20Bottom/Pant_Denim_Denim%20Basic%20Jegging.webp";

/// スタイル条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMatch {
    /// スタイル不問
    Any,
    /// 完全一致
    Exactly(&'static str),
}

impl StyleMatch {
    pub fn matches(&self, style: &str) -> bool {
        match self {
            StyleMatch::Any => true,
            StyleMatch::Exactly(expected) => *expected == style,
        }
    }
}

impl std::fmt::Display for StyleMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleMatch::Any => write!(f, "*"),
            StyleMatch::Exactly(style) => write!(f, "{}", style),
        }
    }
}

/// 画像ルール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRule {
    pub category: &'static str,
    pub style: StyleMatch,
    pub image_url: &'static str,
}

impl ImageRule {
    const fn new(category: &'static str, style: StyleMatch, image_url: &'static str) -> Self {
        Self { category, style, image_url }
    }

    pub fn matches(&self, category: &str, style: &str) -> bool {
        self.category == category && self.style.matches(style)
    }
}

use StyleMatch::{Any, Exactly};

/// 優先順のルール一覧
///
/// Set は Tops の画像、Denim Skirts は Fancy Skirts の画像を流用している。
pub const RULES: &[ImageRule] = &[
    ImageRule::new("Aline", Any, ALINE_IMAGE),
    ImageRule::new("Capri", Exactly("Core"), CORE_CAPRI_IMAGE),
    ImageRule::new("Fancy Capri", Any, FANCY_CAPRI_IMAGE),
    ImageRule::new("Shorts", Exactly("Core"), CORE_SHORTS_IMAGE),
    ImageRule::new("Denim Shorts", Any, DENIM_SHORTS_IMAGE),
    ImageRule::new("Skirts", Exactly("Core"), CORE_SKIRTS_IMAGE),
    ImageRule::new("Skirts", Exactly("Fancy"), FANCY_SKIRTS_IMAGE),
    ImageRule::new("Denim Skirts", Any, FANCY_SKIRTS_IMAGE),
    ImageRule::new("Tops(T-shirt)", Exactly("Fancy"), FANCY_TOPS_IMAGE),
    ImageRule::new("Tops(T-shirt)", Exactly("Core"), CORE_TOPS_IMAGE),
    ImageRule::new("Denim Top", Any, FANCY_TOPS_IMAGE),
    ImageRule::new("Denim Pants", Any, DENIM_PANTS_IMAGE),
    ImageRule::new("Set", Exactly("Core"), CORE_TOPS_IMAGE),
    ImageRule::new("Set", Exactly("Fancy"), FANCY_TOPS_IMAGE),
];

/// 最初に一致するルールを検索
pub fn find_rule(category: &str, style: &str) -> Option<&'static ImageRule> {
    RULES.iter().find(|rule| rule.matches(category, style))
}

/// 画像URLを解決する
///
/// 一致するルールがなければ空文字を返す（既存URLを維持する扱い）。
pub fn resolve_image_url(category: &str, style: &str) -> &'static str {
    find_rule(category, style).map_or("", |rule| rule.image_url)
}

/// レコードのカテゴリ・スタイルから画像URLを解決する
pub fn resolve_for(record: &ProductRecord) -> &'static str {
    resolve_image_url(record.category(), record.style())
}
