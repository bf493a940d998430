//! 抽出結果と出力レコードの型定義
//!
//! - RowPair: 入力CSVの1行から取り出した2列の値
//! - SheetRows: 入力ファイル1つ分の有効な RowPair 列
//! - RequestRecord: 出力CSVの1行（17列固定）

use serde::Serialize;

/// 出力CSVのヘッダ（列順固定）
pub const REQUEST_HEADER: [&str; 17] = [
    "type",
    "url",
    "page",
    "max_page",
    "item_id",
    "gtin",
    "sort_by",
    "search_term",
    "category_id",
    "customer_zipcode",
    "min_price",
    "max_price",
    "reviewer_type",
    "five_star",
    "four_star",
    "three_star",
    "two_star",
];

/// 出力レコードの `type` 列に入る値
pub const PRODUCT_REQUEST_TYPE: &str = "product";

/// 入力行から抽出した値のペア
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPair {
    /// 1列目の値（加工なし）
    pub label: String,
    /// 2列目の値（加工なし、trim前）
    pub id: String,
}

impl RowPair {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }
}

/// ファイル単位の抽出結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRows {
    pub file_name: String,
    pub rows: Vec<RowPair>,
}

impl SheetRows {
    pub fn new(file_name: impl Into<String>, rows: Vec<RowPair>) -> Self {
        Self {
            file_name: file_name.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 出力CSVの1行
///
/// フィールド順は `REQUEST_HEADER` と一致させること。
/// 現状は `request_type` / `item_id` / `customer_zipcode` のみ設定し、残りは空文字のまま出力する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestRecord {
    #[serde(rename = "type")]
    pub request_type: String,
    pub url: String,
    pub page: String,
    pub max_page: String,
    pub item_id: String,
    pub gtin: String,
    pub sort_by: String,
    pub search_term: String,
    pub category_id: String,
    pub customer_zipcode: String,
    pub min_price: String,
    pub max_price: String,
    pub reviewer_type: String,
    pub five_star: String,
    pub four_star: String,
    pub three_star: String,
    pub two_star: String,
}

impl RequestRecord {
    /// 商品リクエスト行を作成
    pub fn product(item_id: impl Into<String>, customer_zipcode: impl Into<String>) -> Self {
        Self {
            request_type: PRODUCT_REQUEST_TYPE.to_string(),
            item_id: item_id.into(),
            customer_zipcode: customer_zipcode.into(),
            ..Default::default()
        }
    }
}
