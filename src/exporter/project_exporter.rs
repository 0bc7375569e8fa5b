// ==========================================
// TeisterMask 任务管理系统 - 项目导出流水线
// ==========================================
// 过滤: 无任务项目不导出（仍保留在库中）
// 排序: 任务按名称升序；项目按任务数降序，再按项目名升序（名称忽略大小写）
// 输出: 缩进 XML，根节点 <Projects>
// ==========================================

use crate::domain::project::Project;
use crate::exporter::dto::{ProjectExportNode, ProjectsExport, TaskExportList, TaskExportNode};
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::name_order::compare_names;
use crate::repository::ProjectRepository;
use quick_xml::se::Serializer;
use serde::Serialize;
use tracing::{info, instrument};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const XML_ROOT: &str = "Projects";

/// 投影并排序项目报告节点（纯函数）
pub fn build_project_report(projects: &[Project]) -> Vec<ProjectExportNode> {
    let mut nodes: Vec<ProjectExportNode> = projects
        .iter()
        .filter(|p| !p.tasks.is_empty())
        .map(|p| {
            let mut tasks: Vec<TaskExportNode> = p
                .tasks
                .iter()
                .map(|t| TaskExportNode {
                    name: t.name.clone(),
                    label: t.label_type.to_string(),
                })
                .collect();
            tasks.sort_by(|a, b| compare_names(&a.name, &b.name));

            ProjectExportNode {
                tasks_count: p.tasks.len(),
                project_name: p.name.clone(),
                has_end_date: if p.has_due_date() { "Yes" } else { "No" }.to_string(),
                tasks: TaskExportList { items: tasks },
            }
        })
        .collect();

    nodes.sort_by(|a, b| {
        b.tasks_count
            .cmp(&a.tasks_count)
            .then_with(|| compare_names(&a.project_name, &b.project_name))
    });
    nodes
}

/// 渲染为带声明的缩进 XML
pub fn render_projects_xml(nodes: Vec<ProjectExportNode>) -> ExportResult<String> {
    let document = ProjectsExport { projects: nodes };

    let mut body = String::new();
    let mut ser = Serializer::with_root(&mut body, Some(XML_ROOT))
        .map_err(|e| ExportError::XmlSerializeError(e.to_string()))?;
    ser.indent(' ', 2);
    document
        .serialize(ser)
        .map_err(|e| ExportError::XmlSerializeError(e.to_string()))?;

    Ok(format!("{}\n{}", XML_DECLARATION, body))
}

// ==========================================
// ProjectExporter
// ==========================================
pub struct ProjectExporter<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> ProjectExporter<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// 导出含任务的项目
    #[instrument(skip(self))]
    pub fn export_xml(&self) -> ExportResult<String> {
        let projects = self.repo.find_all_with_tasks()?;
        let nodes = build_project_report(&projects);
        info!(
            stored_projects = projects.len(),
            exported_projects = nodes.len(),
            "项目导出完成"
        );
        render_projects_xml(nodes)
    }
}
