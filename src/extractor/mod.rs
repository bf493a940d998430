//! 列抽出モジュール
//!
//! ヘッダ付きCSVから指定2列を取り出し、2列目が数字のみの行だけを残す。

use crate::error::{CombineError, Result};
use csv::{ReaderBuilder, StringRecord};
use request_combiner_common::RowPair;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

pub use request_combiner_common::is_valid_id;

/// CSVファイルから2列を抽出
///
/// # Arguments
/// * `path` - 入力CSVのパス
/// * `label_column` - 1列目の列名（値はそのまま保持）
/// * `id_column` - 2列目の列名（数字のみの行だけ採用）
///
/// # Returns
/// * `Ok(Vec<RowPair>)` - ファイル内の順序を保った有効行
/// * `Err` - ファイルが開けない、列が見つからない、CSVが壊れている場合
pub fn extract_columns(path: &Path, label_column: &str, id_column: &str) -> Result<Vec<RowPair>> {
    let file = File::open(path).map_err(|e| file_error(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        // 列数が揃わない行も読み、足りない列は空として扱う
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    let (label_idx, id_idx) = resolve_columns(&headers, label_column, id_column)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = result?;
        let id = record.get(id_idx).unwrap_or_default();

        if !is_valid_id(id) {
            skipped += 1;
            continue;
        }

        let label = record.get(label_idx).unwrap_or_default();
        rows.push(RowPair::new(label, id));
    }

    tracing::debug!(
        file = %path.display(),
        accepted = rows.len(),
        skipped,
        "extracted columns"
    );

    Ok(rows)
}

/// ヘッダから列位置を解決。同名列が複数ある場合は後勝ち。
fn resolve_columns(
    headers: &StringRecord,
    label_column: &str,
    id_column: &str,
) -> Result<(usize, usize)> {
    let find = |name: &str| headers
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == name)
            .map(|(i, _)| i)
            .last();

    match (find(label_column), find(id_column)) {
        (Some(label_idx), Some(id_idx)) => Ok((label_idx, id_idx)),
        (label_idx, id_idx) => {
            let mut missing = Vec::new();
            if label_idx.is_none() {
                missing.push(label_column.to_string());
            }
            if id_idx.is_none() && label_column != id_column {
                missing.push(id_column.to_string());
            }
            Err(CombineError::ColumnNotFound(missing))
        }
    }
}

fn file_error(path: &Path, err: io::Error) -> CombineError {
    let path = path.display().to_string();
    match err.kind() {
        io::ErrorKind::NotFound => CombineError::FileNotFound(path),
        _ => CombineError::FileRead { path, source: err },
    }
}
