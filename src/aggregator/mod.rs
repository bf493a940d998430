use crate::config::Config;
use crate::error::Result;
use crate::extractor;
use crate::scanner;
use request_combiner_common::SheetRows;

/// 入力フォルダ内の全CSVから有効行を集める
///
/// フォルダが読めない場合はエラーを返す（処理全体を中断）。
/// ファイル単位の失敗は報告してスキップし、有効行のないファイルは結果に含めない。
pub fn collect_folder(config: &Config) -> Result<Vec<SheetRows>> {
    let file_names = scanner::list_files(&config.input_folder)?;
    let mut sheets = Vec::new();

    for file_name in file_names {
        if !scanner::is_csv_file_name(&file_name) {
            tracing::debug!(file = %file_name, "skipping non-CSV file");
            continue;
        }

        let path = config.input_folder.join(&file_name);
        let rows = match extractor::extract_columns(&path, &config.label_column, &config.id_column)
        {
            Ok(rows) => rows,
            Err(e) if e.is_file_error() => {
                eprintln!("Error: {}", e);
                continue;
            }
            Err(e) => return Err(e),
        };

        if rows.is_empty() {
            tracing::debug!(file = %file_name, "no valid rows");
            continue;
        }

        sheets.push(SheetRows::new(file_name, rows));
    }

    Ok(sheets)
}
