// ==========================================
// TeisterMask 任务管理系统 - 命令行主入口
// ==========================================
// 技术栈: Rust + SQLite
// ==========================================

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use teister_mask::app::{get_default_db_path, AppState};
use teister_mask::cli::{Cli, Commands, ConfigAction};
use teister_mask::logging;

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    let cli = Cli::parse();

    tracing::info!("TeisterMask 版本: {}", teister_mask::VERSION);

    // 获取数据库路径
    let db_path = match &cli.db {
        Some(path) => path.to_string_lossy().to_string(),
        None => get_default_db_path(),
    };
    tracing::info!("使用数据库: {}", db_path);

    let state = AppState::new(db_path).map_err(|e| anyhow!(e))?;

    match cli.command {
        Commands::ImportProjects { file } => {
            let report = state
                .import_api
                .import_projects_from_file(&file.to_string_lossy())
                .with_context(|| format!("项目导入失败: {}", file.display()))?;
            println!("{}", report);
        }
        Commands::ImportEmployees { file } => {
            let report = state
                .import_api
                .import_employees_from_file(&file.to_string_lossy())
                .with_context(|| format!("员工导入失败: {}", file.display()))?;
            println!("{}", report);
        }
        Commands::ExportProjects { out } => {
            let xml = state
                .export_api
                .export_projects_with_tasks()
                .context("项目导出失败")?;
            write_output(out.as_deref(), &xml)?;
        }
        Commands::ExportBusiest { from, out } => {
            let json = state
                .export_api
                .export_busiest_employees_from_str(&from)
                .context("员工工作量导出失败")?;
            write_output(out.as_deref(), &json)?;
        }
        Commands::Batches { limit } => {
            let batches = state.import_api.list_recent_batches(limit)?;
            for batch in batches {
                println!(
                    "{}  {:<9}  records={}  accepted={}  rejected_lines={}  {}  {}ms",
                    batch.batch_id,
                    batch.kind.to_string(),
                    batch.total_records,
                    batch.accepted_records,
                    batch.rejected_lines,
                    batch.imported_at.format("%Y-%m-%d %H:%M:%S"),
                    batch.elapsed_ms
                );
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Get { key } => match state.config_api.get_config(&key)? {
                Some(value) => println!("{}", value),
                None => println!("(未设置)"),
            },
            ConfigAction::Set { key, value } => {
                state.config_api.set_config(&key, &value)?;
                println!("{} = {}", key, value);
            }
            ConfigAction::Show => {
                println!("{}", state.config_api.get_config_snapshot()?);
            }
        },
    }

    Ok(())
}

/// 写文件或 stdout
fn write_output(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("写入失败: {}", path.display()))?;
            tracing::info!("已写入 {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
