use catalog_image_common::RULES;
use catalog_image_updater::{cli, config, error, updater};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;
use updater::UpdateOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let catalog_path = cli.catalog.clone().unwrap_or_else(|| config.catalog_path.clone());
    let options = UpdateOptions { dry_run: cli.dry_run };

    match cli.command {
        None | Some(Commands::Update) => {
            println!("🖼  catalog-image-updater - 画像URL更新\n");

            let report = updater::update_catalog_file(&catalog_path, &options)?;
            for notice in &report.notices {
                println!("{}", notice);
            }

            println!("\n✅ {}件の商品を更新しました（全{}件）", report.updated(), report.total_records);
            if options.dry_run {
                println!("ドライラン: {} は変更されていません", catalog_path.display());
            } else {
                println!("画像マッピング完了");
            }
        }

        Some(Commands::Rules) => {
            println!("ルールテーブル（上から優先）:");
            for (i, rule) in RULES.iter().enumerate() {
                println!("  {:>2}. {} [{}]", i + 1, rule.category, rule.style);
                println!("      → {}", rule.image_url);
            }
        }

        Some(Commands::Sheet { mapping }) => {
            println!("📋 catalog-image-updater - シート対応表の適用\n");

            let mapping_path = mapping.unwrap_or_else(|| config.mapping_path.clone());
            let report = updater::apply_sheet_file(&catalog_path, &mapping_path, &options)?;

            for update in &report.updates {
                println!("✔ 更新 #{}: {}", update.sr_no, update.design_name);
            }
            for miss in &report.misses {
                println!("⚠ 画像なし #{}: {}", miss.sr_no, miss.design_name);
            }

            println!("\n{}", "=".repeat(50));
            println!("✅ {}件の商品を更新しました", report.updated());
            println!("⚠ {}件の商品に個別画像がありません", report.not_found());
            println!("{}", "=".repeat(50));
            if options.dry_run {
                println!("ドライラン: {} は変更されていません", catalog_path.display());
            } else {
                println!("\n{} の対応表を適用しました", mapping_path.display());
            }
        }

        Some(Commands::Config { set_catalog, set_mapping, show }) => {
            let mut config = config;

            if let Some(path) = set_catalog {
                config.set_catalog_path(path)?;
                println!("✔ カタログパスを設定しました");
            }

            if let Some(path) = set_mapping {
                config.set_mapping_path(path)?;
                println!("✔ 対応表パスを設定しました");
            }

            if show {
                println!("設定:");
                println!("  カタログ: {}", config.catalog_path.display());
                println!("  対応表: {}", config.mapping_path.display());
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
