//! 結合CSVの書き出し

use crate::config::Config;
use crate::error::{CombineError, Result};
use csv::WriterBuilder;
use request_combiner_common::{RequestRecord, SheetRows, REQUEST_HEADER};
use std::io::Write;

/// 書き出し結果の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// (ファイル名, 出力件数)
    pub per_sheet: Vec<(String, usize)>,
}

impl WriteSummary {
    pub fn total(&self) -> usize {
        self.per_sheet.iter().map(|(_, count)| count).sum()
    }
}

/// シートごとに最大 `max_requests_per_sheet` 件のリクエスト行を書き出す
///
/// 出力行ごとに進捗行を `progress` へ書く。
pub fn write_requests<W: Write, P: Write>(
    sheets: &[SheetRows],
    config: &Config,
    out: W,
    progress: &mut P,
) -> Result<WriteSummary> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(REQUEST_HEADER).map_err(CombineError::CsvWrite)?;

    let mut summary = WriteSummary::default();

    for sheet in sheets {
        let mut count = 0;
        for pair in sheet.rows.iter().take(config.max_requests_per_sheet) {
            writer
                .serialize(RequestRecord::product(pair.id.as_str(), config.zipcode.as_str()))
                .map_err(CombineError::CsvWrite)?;
            writeln!(
                progress,
                "  {}: {}={}, {}={}",
                sheet.file_name, config.label_column, pair.label, config.id_column, pair.id
            )?;
            count += 1;
        }
        summary.per_sheet.push((sheet.file_name.clone(), count));
    }

    writer.flush()?;
    Ok(summary)
}
