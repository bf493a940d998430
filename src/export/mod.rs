pub mod csv;

use crate::aggregator;
use crate::config::Config;
use crate::error::Result;
use std::fs::File;
use std::io::BufWriter;

pub use self::csv::{write_requests, WriteSummary};

/// 結合処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// 出力ファイルを書き出した
    Written(WriteSummary),
    /// 有効な行がなく、出力ファイルは作成していない
    NoData,
    /// 入力フォルダが読めず中断した
    FolderUnavailable,
}

/// 入力フォルダを集約して結合CSVを書き出す
pub fn export_combined(config: &Config) -> Result<ExportOutcome> {
    let sheets = match aggregator::collect_folder(config) {
        Ok(sheets) => sheets,
        Err(e) if e.is_folder_error() => {
            eprintln!("Error: {}", e);
            return Ok(ExportOutcome::FolderUnavailable);
        }
        Err(e) => return Err(e),
    };

    if sheets.is_empty() {
        tracing::debug!(folder = %config.input_folder.display(), "no rows to write");
        return Ok(ExportOutcome::NoData);
    }

    let file = File::create(&config.output_path)?;
    let summary = {
        let mut progress = std::io::stdout().lock();
        write_requests(&sheets, config, BufWriter::new(file), &mut progress)?
    };

    println!("CSV output saved to: {}", config.output_path.display());
    tracing::debug!(records = summary.total(), sheets = summary.per_sheet.len(), "export finished");

    Ok(ExportOutcome::Written(summary))
}
