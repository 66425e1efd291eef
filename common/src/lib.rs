//! Catalog Image Common Library
//!
//! 商品カタログの画像URL更新で使う型とルール

pub mod types;
pub mod rules;
pub mod sheet;
pub mod error;

pub use types::{fields, ProductRecord};
pub use rules::{find_rule, resolve_image_url, ImageRule, StyleMatch, RULES};
pub use sheet::SheetMapping;
pub use error::{Error, Result};
