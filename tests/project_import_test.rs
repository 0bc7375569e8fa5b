// ==========================================
// TeisterMask 任务管理系统 - 项目导入集成测试
// ==========================================
// 覆盖: 日期级联规则、部分成功、单次提交、批次日志
// ==========================================

mod test_helpers;

use teister_mask::repository::{ProjectRepository, ProjectRepositoryImpl};
use teister_mask::{ApiError, AppState, ImportKind};
use test_helpers::{project_xml, projects_document, task_xml};

fn setup() -> (tempfile::NamedTempFile, String, AppState) {
    teister_mask::logging::init_test();
    let (temp_file, db_path) = test_helpers::create_test_db().expect("创建测试数据库失败");
    let state = AppState::new(db_path.clone()).expect("初始化AppState失败");
    (temp_file, db_path, state)
}

#[test]
fn test_task_past_project_due_date_rejected_project_kept() {
    let (_tmp, db_path, state) = setup();

    let xml = projects_document(&[project_xml(
        "X",
        "01/01/2020",
        Some("31/12/2020"),
        &[task_xml("Overrun", "15/01/2020", "01/01/2021", 0, 0)],
    )]);

    let report = state.import_api.import_projects_from_str(&xml).unwrap();
    assert_eq!(
        report,
        "Invalid data!\nSuccessfully imported project - X with 0 tasks."
    );

    let projects = ProjectRepositoryImpl::new(&db_path)
        .unwrap()
        .find_all_with_tasks()
        .unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "X");
    assert!(projects[0].tasks.is_empty());
}

#[test]
fn test_accepted_tasks_respect_project_window() {
    let (_tmp, db_path, state) = setup();

    let xml = projects_document(&[
        project_xml(
            "Window",
            "10/03/2020",
            Some("10/06/2020"),
            &[
                task_xml("Opens early", "09/03/2020", "01/04/2020", 1, 1),
                task_xml("Opens on day", "10/03/2020", "01/04/2020", 1, 1),
                task_xml("Due on day", "11/03/2020", "10/06/2020", 2, 2),
                task_xml("Due late", "11/03/2020", "11/06/2020", 2, 2),
            ],
        ),
        project_xml(
            "Unbounded",
            "10/03/2020",
            None,
            &[task_xml("Far future", "11/03/2020", "31/12/2099", 3, 4)],
        ),
    ]);

    let report = state.import_api.import_projects_from_str(&xml).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Invalid data!",
            "Invalid data!",
            "Successfully imported project - Window with 2 tasks.",
            "Successfully imported project - Unbounded with 1 tasks.",
        ]
    );

    let projects = ProjectRepositoryImpl::new(&db_path)
        .unwrap()
        .find_all_with_tasks()
        .unwrap();
    for project in &projects {
        for task in &project.tasks {
            assert!(task.open_date >= project.open_date);
            if let Some(due) = project.due_date {
                assert!(task.due_date <= due);
            }
        }
    }

    // 任务保持输入顺序
    let names: Vec<&str> = projects[0].tasks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Opens on day", "Due on day"]);
}

#[test]
fn test_invalid_projects_do_not_affect_neighbours() {
    let (_tmp, db_path, state) = setup();

    let xml = projects_document(&[
        project_xml("Ok1", "01/01/2020", None, &[]),
        project_xml("   ", "01/01/2020", None, &[]),
        project_xml("Bad open date", "2020/01/01", None, &[]),
        project_xml(&"N".repeat(41), "01/01/2020", None, &[]),
        project_xml("Ok2", "01/01/2020", Some("garbage"), &[]),
    ]);

    let report = state.import_api.import_projects_from_str(&xml).unwrap();
    assert_eq!(
        report,
        "Successfully imported project - Ok1 with 0 tasks.\n\
         Invalid data!\n\
         Invalid data!\n\
         Invalid data!\n\
         Successfully imported project - Ok2 with 0 tasks."
    );

    let projects = ProjectRepositoryImpl::new(&db_path)
        .unwrap()
        .find_all_with_tasks()
        .unwrap();
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ok1", "Ok2"]);
    assert_eq!(projects[1].due_date, None);
}

#[test]
fn test_import_from_file_and_batch_log() {
    let (_tmp, _db_path, state) = setup();

    let xml = projects_document(&[project_xml(
        "From file",
        "01/02/2021",
        None,
        &[
            task_xml("Valid task", "02/02/2021", "03/02/2021", 0, 1),
            task_xml("Bad label", "02/02/2021", "03/02/2021", 0, 7),
        ],
    )]);
    let file = test_helpers::write_temp_document(&xml, ".xml").unwrap();

    let report = state
        .import_api
        .import_projects_from_file(file.path().to_str().unwrap())
        .unwrap();
    assert_eq!(
        report,
        "Invalid data!\nSuccessfully imported project - From file with 1 tasks."
    );

    let batches = state.import_api.list_recent_batches(5).unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].kind, ImportKind::Projects);
    assert_eq!(batches[0].total_records, 1);
    assert_eq!(batches[0].accepted_records, 1);
    assert_eq!(batches[0].rejected_lines, 1);
    assert!(!batches[0].batch_id.is_empty());
}

#[test]
fn test_document_level_failures() {
    let (_tmp, db_path, state) = setup();

    let result = state
        .import_api
        .import_projects_from_str("<Projects><Project><Name>Half");
    assert!(matches!(result, Err(ApiError::ImportError(_))));

    let result = state
        .import_api
        .import_projects_from_file("/no/such/dir/projects.xml");
    assert!(matches!(result, Err(ApiError::NotFound(_))));

    // 无任何落库
    let projects = ProjectRepositoryImpl::new(&db_path)
        .unwrap()
        .find_all_with_tasks()
        .unwrap();
    assert!(projects.is_empty());
    assert!(state.import_api.list_recent_batches(5).unwrap().is_empty());
}

#[test]
fn test_empty_document_yields_empty_report() {
    let (_tmp, _db_path, state) = setup();

    let report = state
        .import_api
        .import_projects_from_str("<Projects></Projects>")
        .unwrap();
    assert_eq!(report, "");
}

#[test]
fn test_padded_dates_and_names_are_not_trimmed() {
    let (_tmp, db_path, state) = setup();

    let xml = projects_document(&[
        project_xml(
            "Pad",
            " 01/01/2020 ",
            None,
            &[task_xml("Fine", "02/01/2020", "03/01/2020", 0, 0)],
        ),
        project_xml(
            "Tasks padded",
            "01/01/2020",
            None,
            &[
                task_xml("Open padded", "\n 02/01/2020", "03/01/2020", 0, 0),
                task_xml("Due padded", "02/01/2020", "03/01/2020 ", 0, 0),
                task_xml("Exact", "02/01/2020", "03/01/2020", 0, 0),
            ],
        ),
        project_xml("  Spaced  ", "01/01/2020", None, &[]),
    ]);

    let report = state.import_api.import_projects_from_str(&xml).unwrap();
    assert_eq!(
        report,
        "Invalid data!\n\
         Invalid data!\n\
         Invalid data!\n\
         Successfully imported project - Tasks padded with 1 tasks.\n\
         Successfully imported project -   Spaced   with 0 tasks."
    );

    let projects = ProjectRepositoryImpl::new(&db_path)
        .unwrap()
        .find_all_with_tasks()
        .unwrap();
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Tasks padded", "  Spaced  "]);
    assert_eq!(projects[0].tasks[0].name, "Exact");
}
