// ==========================================
// TeisterMask 任务管理系统 - 命令行定义
// ==========================================
// 工具: clap derive
// ==========================================

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// 项目/任务/员工数据导入与报表导出
#[derive(Debug, Parser)]
#[command(name = "teister-mask", version, about = "TeisterMask import & export CLI")]
pub struct Cli {
    /// SQLite 数据库路径（默认读取 TEISTER_MASK_DB_PATH 或用户数据目录）
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// 导入项目 XML 文档，输出逐行报告
    ImportProjects {
        file: PathBuf,
    },

    /// 导入员工 JSON 文档，输出逐行报告
    ImportEmployees {
        file: PathBuf,
    },

    /// 导出含任务的项目（XML）
    ExportProjects {
        /// 输出文件（缺省写 stdout）
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// 导出最忙员工（JSON）
    ExportBusiest {
        /// 任务开始日期下限，格式 dd/mm/yyyy
        #[arg(long)]
        from: String,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// 列出最近的导入批次
    Batches {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// 读写运行期配置
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// 读取配置值
    Get { key: String },

    /// 写入配置值
    Set { key: String, value: String },

    /// 输出全部配置
    Show,
}
