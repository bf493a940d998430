use thiserror::Error;

#[derive(Error, Debug)]
pub enum CombineError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Folder '{0}' not found.")]
    FolderNotFound(String),

    #[error("Permission denied to access '{0}'.")]
    PermissionDenied(String),

    #[error("Cannot read folder '{path}': {source}")]
    FolderRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found at {0}")]
    FileNotFound(String),

    #[error("Cannot open file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Column name(s) not found: {}", .0.join(", "))]
    ColumnNotFound(Vec<String>),

    #[error("Malformed CSV file: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("Cannot write CSV file: {0}")]
    CsvWrite(#[source] csv::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CombineError {
    /// フォルダ一覧の取得失敗（処理全体を中断する）
    pub fn is_folder_error(&self) -> bool {
        matches!(
            self,
            CombineError::FolderNotFound(_)
                | CombineError::PermissionDenied(_)
                | CombineError::FolderRead { .. }
        )
    }

    /// ファイル単位の失敗（そのファイルをスキップして続行する）
    pub fn is_file_error(&self) -> bool {
        matches!(
            self,
            CombineError::FileNotFound(_)
                | CombineError::FileRead { .. }
                | CombineError::ColumnNotFound(_)
                | CombineError::CsvParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CombineError>;
