// ==========================================
// TeisterMask 任务管理系统 - 项目/任务数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑（日期校验在导入层完成）
// 职责: projects / tasks 表的批量写入与全量读取
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::import::ImportBatch;
use crate::domain::project::{NewProject, Project, Task};
use crate::domain::types::{ExecutionType, LabelType};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::import_batch_repo::insert_batch_tx;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ==========================================
// ProjectRepository Trait
// ==========================================
// 用途: 项目导入 / 项目导出的数据访问
// 实现者: ProjectRepositoryImpl（rusqlite）
pub trait ProjectRepository: Send + Sync {
    /// 一次性提交整批暂存项目（含任务）与批次记录
    ///
    /// # 返回
    /// - Ok(usize): 写入的项目数
    /// - Err: 数据库错误（整个事务回滚）
    fn commit_import(&self, batch: &ImportBatch, projects: &[NewProject]) -> RepositoryResult<usize>;

    /// 读取全部项目及其任务（任务按写入顺序）
    fn find_all_with_tasks(&self) -> RepositoryResult<Vec<Project>>;
}

// ==========================================
// ProjectRepositoryImpl
// ==========================================
pub struct ProjectRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl ProjectRepositoryImpl {
    /// 创建新的 Repository 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例（连接需已建表）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl ProjectRepository for ProjectRepositoryImpl {
    fn commit_import(&self, batch: &ImportBatch, projects: &[NewProject]) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;

        let mut count = 0;
        {
            let mut project_stmt = tx.prepare(
                "INSERT INTO projects (name, open_date, due_date) VALUES (?1, ?2, ?3)",
            )?;
            let mut task_stmt = tx.prepare(
                r#"
                INSERT INTO tasks (
                    name, open_date, due_date, execution_type, label_type, project_id
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )?;

            for project in projects {
                let project_id = project_stmt.insert(params![
                    project.name,
                    project.open_date,
                    project.due_date,
                ])?;

                for task in &project.tasks {
                    task_stmt.execute(params![
                        task.name,
                        task.open_date,
                        task.due_date,
                        task.execution_type.code(),
                        task.label_type.code(),
                        project_id,
                    ])?;
                }
                count += 1;
            }
        }

        insert_batch_tx(&tx, batch)?;
        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        Ok(count)
    }

    fn find_all_with_tasks(&self) -> RepositoryResult<Vec<Project>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, open_date, due_date FROM projects ORDER BY id ASC",
        )?;
        let mut projects = stmt
            .query_map([], |row| {
                Ok(Project {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    open_date: row.get(2)?,
                    due_date: row.get(3)?,
                    tasks: Vec::new(),
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        // project_id -> 下标
        let index: HashMap<i64, usize> = projects
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id, idx))
            .collect();

        for task in load_all_tasks(&conn)? {
            if let Some(&idx) = index.get(&task.project_id) {
                projects[idx].tasks.push(task);
            }
        }

        Ok(projects)
    }
}

// ==========================================
// 行映射辅助（员工仓储复用）
// ==========================================

/// 读取全部任务（按 id 升序）
pub(crate) fn load_all_tasks(conn: &Connection) -> SqliteResult<Vec<Task>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, project_id, name, open_date, due_date, label_type, execution_type
        FROM tasks
        ORDER BY id ASC
        "#,
    )?;
    let tasks = stmt
        .query_map([], map_task_row)?
        .collect::<SqliteResult<Vec<_>>>()?;
    Ok(tasks)
}

fn map_task_row(row: &Row) -> SqliteResult<Task> {
    Ok(Task {
        id: row.get(0)?,
        project_id: row.get(1)?,
        name: row.get(2)?,
        open_date: row.get(3)?,
        due_date: row.get(4)?,
        label_type: parse_label_type(row, 5)?,
        execution_type: parse_execution_type(row, 6)?,
    })
}

fn parse_label_type(row: &Row, idx: usize) -> SqliteResult<LabelType> {
    let code: i32 = row.get(idx)?;
    LabelType::from_code(code).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Integer,
            format!("未知 label_type 代码: {}", code).into(),
        )
    })
}

fn parse_execution_type(row: &Row, idx: usize) -> SqliteResult<ExecutionType> {
    let code: i32 = row.get(idx)?;
    ExecutionType::from_code(code).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Integer,
            format!("未知 execution_type 代码: {}", code).into(),
        )
    })
}
