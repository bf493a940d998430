use crate::config::Config;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "request-combiner")]
#[command(about = "CSVフォルダから商品リクエスト一覧を生成するツール", long_about = None)]
pub struct Cli {
    /// 省略時は既定設定で combine を実行
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フォルダ内のCSVを結合してリクエストCSVを出力
    Combine {
        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// 設定を表示/保存
    Config {
        #[command(flatten)]
        overrides: ConfigOverrides,

        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 引数で上書きした設定を設定ファイルに保存
        #[arg(long)]
        save: bool,
    },
}

/// 設定ファイルの値を上書きする引数
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// 入力CSVフォルダ
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// 出力CSVファイル
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 1列目の列名
    #[arg(long)]
    pub label_column: Option<String>,

    /// 2列目（商品ID）の列名
    #[arg(long)]
    pub id_column: Option<String>,

    /// customer_zipcode に設定する郵便番号
    #[arg(short, long)]
    pub zipcode: Option<String>,

    /// 1ファイルあたりの最大出力件数
    #[arg(short, long)]
    pub max_per_sheet: Option<usize>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(folder) = &self.folder {
            config.input_folder = folder.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(label_column) = &self.label_column {
            config.label_column = label_column.clone();
        }
        if let Some(id_column) = &self.id_column {
            config.id_column = id_column.clone();
        }
        if let Some(zipcode) = &self.zipcode {
            config.zipcode = zipcode.clone();
        }
        if let Some(max) = self.max_per_sheet {
            config.max_requests_per_sheet = max;
        }
        config
    }
}
