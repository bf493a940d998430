use clap::Parser;
use request_combiner::{cli, config, error, export};
use cli::{Cli, Commands, ConfigOverrides};
use config::Config;
use error::Result;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let base = Config::load()?;

    match cli.command.unwrap_or(Commands::Combine {
        overrides: ConfigOverrides::default(),
    }) {
        Commands::Combine { overrides } => {
            let config = overrides.apply(base);
            config.validate()?;

            match export::export_combined(&config)? {
                export::ExportOutcome::Written(summary) => {
                    if cli.verbose {
                        for (file_name, count) in &summary.per_sheet {
                            println!("  {}: {}件", file_name, count);
                        }
                    }
                }
                export::ExportOutcome::NoData | export::ExportOutcome::FolderUnavailable => {}
            }
        }

        Commands::Config { overrides, show, save } => {
            let config = overrides.apply(base);

            if save {
                config.validate()?;
                let path = config.save()?;
                println!("✔ 設定を保存しました: {}", path.display());
            }

            if show || !save {
                println!("設定:");
                println!("  入力フォルダ: {}", config.input_folder.display());
                println!("  出力ファイル: {}", config.output_path.display());
                println!("  列名: {} / {}", config.label_column, config.id_column);
                println!("  郵便番号: {}", config.zipcode);
                println!("  1ファイルあたり最大件数: {}", config.max_requests_per_sheet);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}
