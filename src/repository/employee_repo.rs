// ==========================================
// TeisterMask 任务管理系统 - 员工数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑（去重/存在性校验在导入层完成）
// 职责: employees / employees_tasks 表的批量写入与快照读取
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::employee::{Employee, EmployeeTask, NewEmployee};
use crate::domain::import::ImportBatch;
use crate::domain::project::Task;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::import_batch_repo::insert_batch_tx;
use crate::repository::project_repo::load_all_tasks;
use rusqlite::{params, Connection, Result as SqliteResult};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// 员工工作量快照（员工 + 任务索引，一次读取）
#[derive(Debug, Clone, Default)]
pub struct WorkloadSnapshot {
    pub employees: Vec<Employee>,
    /// task_id -> Task
    pub tasks: HashMap<i64, Task>,
}

// ==========================================
// EmployeeRepository Trait
// ==========================================
// 用途: 员工导入 / 员工工作量导出的数据访问
// 实现者: EmployeeRepositoryImpl（rusqlite）
pub trait EmployeeRepository: Send + Sync {
    /// 当前已存在的任务 ID 集合（导入开始时读取一次）
    fn existing_task_ids(&self) -> RepositoryResult<HashSet<i64>>;

    /// 一次性提交整批暂存员工（含关联）与批次记录
    fn commit_import(&self, batch: &ImportBatch, employees: &[NewEmployee])
        -> RepositoryResult<usize>;

    /// 读取员工及任务索引（同一读事务内完成）
    fn load_workload_snapshot(&self) -> RepositoryResult<WorkloadSnapshot>;
}

// ==========================================
// EmployeeRepositoryImpl
// ==========================================
pub struct EmployeeRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl EmployeeRepositoryImpl {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl EmployeeRepository for EmployeeRepositoryImpl {
    fn existing_task_ids(&self) -> RepositoryResult<HashSet<i64>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT id FROM tasks")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, i64>(0))?
            .collect::<SqliteResult<HashSet<_>>>()?;
        Ok(ids)
    }

    fn commit_import(
        &self,
        batch: &ImportBatch,
        employees: &[NewEmployee],
    ) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;

        let mut count = 0;
        {
            let mut employee_stmt = tx.prepare(
                "INSERT INTO employees (username, email, phone) VALUES (?1, ?2, ?3)",
            )?;
            let mut link_stmt = tx.prepare(
                "INSERT INTO employees_tasks (employee_id, task_id) VALUES (?1, ?2)",
            )?;

            for employee in employees {
                let employee_id = employee_stmt.insert(params![
                    employee.username,
                    employee.email,
                    employee.phone,
                ])?;

                for task_id in &employee.task_ids {
                    link_stmt.execute(params![employee_id, task_id])?;
                }
                count += 1;
            }
        }

        insert_batch_tx(&tx, batch)?;
        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        Ok(count)
    }

    fn load_workload_snapshot(&self) -> RepositoryResult<WorkloadSnapshot> {
        let mut conn = self.get_conn()?;
        // 读事务：保证员工/关联/任务来自同一时间点
        let tx = conn.transaction()?;

        let mut employees = {
            let mut stmt =
                tx.prepare("SELECT id, username, email, phone FROM employees ORDER BY id ASC")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(Employee {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        email: row.get(2)?,
                        phone: row.get(3)?,
                        task_ids: Vec::new(),
                    })
                })?
                .collect::<SqliteResult<Vec<_>>>()?;
            rows
        };

        let links = {
            let mut stmt = tx.prepare(
                "SELECT employee_id, task_id FROM employees_tasks ORDER BY rowid ASC",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(EmployeeTask {
                        employee_id: row.get(0)?,
                        task_id: row.get(1)?,
                    })
                })?
                .collect::<SqliteResult<Vec<_>>>()?;
            rows
        };

        let tasks: HashMap<i64, Task> = load_all_tasks(&tx)?
            .into_iter()
            .map(|task| (task.id, task))
            .collect();

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let index: HashMap<i64, usize> = employees
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.id, idx))
            .collect();
        for link in links {
            if let Some(&idx) = index.get(&link.employee_id) {
                employees[idx].task_ids.push(link.task_id);
            }
        }

        Ok(WorkloadSnapshot { employees, tasks })
    }
}
