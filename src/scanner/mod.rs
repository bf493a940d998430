use crate::error::{CombineError, Result};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// フォルダ直下の通常ファイル名を列挙（再帰しない）
///
/// 空フォルダは空のVecを返す。フォルダが存在しない・読めない場合はエラー。
pub fn list_files(folder: &Path) -> Result<Vec<String>> {
    let metadata = std::fs::metadata(folder).map_err(|e| folder_error(folder, e))?;
    if !metadata.is_dir() {
        return Err(CombineError::FolderRead {
            path: folder.display().to_string(),
            source: io::Error::new(io::ErrorKind::Other, "not a directory"),
        });
    }

    let mut names = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // フォルダ自体の読み込み失敗は致命的、個別エントリの失敗は無視
                if e.path().map_or(true, |p| p == folder) {
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "walk failed"));
                    return Err(folder_error(folder, source));
                }
                tracing::debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        // シンボリックリンク先がファイルなら含める
        if !entry.path().is_file() {
            continue;
        }

        // 名前から元のパスを復元できないため非UTF-8名は除外
        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 file name"),
        }
    }

    // ファイル名でソート
    names.sort();

    Ok(names)
}

fn folder_error(folder: &Path, err: io::Error) -> CombineError {
    let path = folder.display().to_string();
    match err.kind() {
        io::ErrorKind::NotFound => CombineError::FolderNotFound(path),
        io::ErrorKind::PermissionDenied => CombineError::PermissionDenied(path),
        _ => CombineError::FolderRead { path, source: err },
    }
}

/// `.csv` 拡張子（大文字小文字を区別しない）
pub fn is_csv_file_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}
