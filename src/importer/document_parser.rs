// ==========================================
// TeisterMask 任务管理系统 - 导入文档解析
// ==========================================
// 职责: 文本 -> 导入记录列表（只做结构反序列化，不做业务校验）
// 格式: 项目 XML（quick-xml 事件流） / 员工 JSON（serde_json）
// 红线: 元素文本原样保留，不裁剪首尾空白（留给校验器和日期解析判定）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::records::{EmployeeImportRecord, ProjectImportRecord, TaskImportRecord};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::path::Path;

const PROJECTS_ROOT: &str = "Projects";

/// 通用元素节点（只保留名称、文本与子元素）
#[derive(Debug, Default)]
struct XmlElement {
    name: String,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    fn named(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }
}

/// 读取整份 XML 为元素树
///
/// 标签不闭合、闭合名不匹配、存在多个根节点均视为文档级失败。
fn read_element_tree(xml: &str) -> ImportResult<XmlElement> {
    let mut reader = Reader::from_str(xml);
    reader.expand_empty_elements(true);

    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(ImportError::XmlParseError("根节点之后存在多余元素".to_string()));
                }
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                open.push(XmlElement::named(name));
            }
            Event::End(_) => {
                let element = open
                    .pop()
                    .ok_or_else(|| ImportError::XmlParseError("多余的闭合标签".to_string()))?;
                match open.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Text(text) => {
                if let Some(current) = open.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = open.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(ImportError::XmlParseError(format!(
            "标签未闭合: <{}>",
            unclosed.name
        )));
    }
    root.ok_or_else(|| ImportError::XmlParseError("缺少根节点".to_string()))
}

/// 整数代码字段：缺失为 None，非整数文本为文档级失败
fn parse_code(element: &XmlElement) -> ImportResult<Option<i32>> {
    element
        .text
        .trim()
        .parse::<i32>()
        .map(Some)
        .map_err(|e| {
            ImportError::XmlParseError(format!("<{}> 不是整数: {:?} ({})", element.name, element.text, e))
        })
}

fn task_record(element: &XmlElement) -> ImportResult<TaskImportRecord> {
    let mut record = TaskImportRecord::default();
    for child in &element.children {
        match child.name.as_str() {
            "Name" => record.name = Some(child.text.clone()),
            "OpenDate" => record.open_date = Some(child.text.clone()),
            "DueDate" => record.due_date = Some(child.text.clone()),
            "ExecutionType" => record.execution_type = parse_code(child)?,
            "LabelType" => record.label_type = parse_code(child)?,
            _ => {}
        }
    }
    Ok(record)
}

fn project_record(element: &XmlElement) -> ImportResult<ProjectImportRecord> {
    let mut record = ProjectImportRecord::default();
    for child in &element.children {
        match child.name.as_str() {
            "Name" => record.name = Some(child.text.clone()),
            "OpenDate" => record.open_date = Some(child.text.clone()),
            "DueDate" => record.due_date = Some(child.text.clone()),
            "Tasks" => {
                for task in child.children_named("Task") {
                    record.tasks.items.push(task_record(task)?);
                }
            }
            _ => {}
        }
    }
    Ok(record)
}

/// 解析项目导入文档（根节点 <Projects>）
pub fn parse_project_document(xml: &str) -> ImportResult<Vec<ProjectImportRecord>> {
    let root = read_element_tree(xml)?;
    if root.name != PROJECTS_ROOT {
        return Err(ImportError::XmlParseError(format!(
            "根节点应为 <{}>，实际为 <{}>",
            PROJECTS_ROOT, root.name
        )));
    }
    root.children_named("Project").map(project_record).collect()
}

/// 解析员工导入文档（JSON 数组）
pub fn parse_employee_document(json: &str) -> ImportResult<Vec<EmployeeImportRecord>> {
    let records: Vec<EmployeeImportRecord> = serde_json::from_str(json)?;
    Ok(records)
}

/// 读取导入文件全文
pub fn read_document(path: &Path) -> ImportResult<String> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}
