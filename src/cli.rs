use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog-image-updater")]
#[command(about = "商品カタログの画像URL一括更新ツール", long_about = None)]
pub struct Cli {
    /// 省略時はルールテーブルでカタログを更新
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログJSONファイル（デフォルト: 設定値または products.json）
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// ドライラン（保存せず結果のみ表示）
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ルールテーブルで画像URLを更新
    Update,

    /// ルールテーブルを表示
    Rules,

    /// シート対応表（Sr. No. → Images）で画像URLを更新
    Sheet {
        /// 対応表JSONファイル（デフォルト: 設定値または progress.txt）
        #[arg(short, long)]
        mapping: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// デフォルトのカタログパスを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// デフォルトの対応表パスを設定
        #[arg(long)]
        set_mapping: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_runs_update() {
        let cli = Cli::try_parse_from(["catalog-image-updater"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.catalog.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_sheet_with_global_flags() {
        let cli = Cli::try_parse_from([
            "catalog-image-updater",
            "sheet",
            "--mapping",
            "rows.json",
            "--catalog",
            "shop.json",
            "--dry-run",
        ])
        .unwrap();

        assert!(cli.dry_run);
        assert_eq!(cli.catalog, Some(PathBuf::from("shop.json")));
        match cli.command {
            Some(Commands::Sheet { mapping }) => assert_eq!(mapping, Some(PathBuf::from("rows.json"))),
            _ => panic!("sheet subcommand expected"),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
