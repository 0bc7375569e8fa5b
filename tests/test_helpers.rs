// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、导入文档生成等功能
// ==========================================

#![allow(dead_code)]

use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;
use teister_mask::db::open_sqlite_connection;

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("临时文件路径不是 UTF-8")?
        .to_string();

    // 打开即建表
    open_sqlite_connection(&db_path)?;

    Ok((temp_file, db_path))
}

/// 把文本写入带后缀的临时文件
pub fn write_temp_document(content: &str, suffix: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

// ==========================================
// 项目导入 XML 生成
// ==========================================

pub fn task_xml(name: &str, open: &str, due: &str, execution_type: i32, label_type: i32) -> String {
    format!(
        "<Task><Name>{}</Name><OpenDate>{}</OpenDate><DueDate>{}</DueDate>\
         <ExecutionType>{}</ExecutionType><LabelType>{}</LabelType></Task>",
        name, open, due, execution_type, label_type
    )
}

pub fn project_xml(name: &str, open: &str, due: Option<&str>, tasks: &[String]) -> String {
    let due_element = match due {
        Some(d) => format!("<DueDate>{}</DueDate>", d),
        None => "<DueDate />".to_string(),
    };
    format!(
        "<Project><Name>{}</Name><OpenDate>{}</OpenDate>{}<Tasks>{}</Tasks></Project>",
        name,
        open,
        due_element,
        tasks.concat()
    )
}

pub fn projects_document(projects: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Projects>{}</Projects>",
        projects.concat()
    )
}

// ==========================================
// 员工导入 JSON 生成
// ==========================================

pub fn employee_json(username: &str, tasks: &[i64]) -> serde_json::Value {
    serde_json::json!({
        "Username": username,
        "Email": format!("{}@teister.io", username),
        "Phone": "555-123-4567",
        "Tasks": tasks,
    })
}

pub fn employees_document(employees: &[serde_json::Value]) -> String {
    serde_json::Value::Array(employees.to_vec()).to_string()
}
