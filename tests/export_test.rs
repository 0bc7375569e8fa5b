// ==========================================
// TeisterMask 任务管理系统 - 导出集成测试
// ==========================================
// 覆盖: 项目导出过滤/排序、员工工作量过滤/排序/截取、截取人数配置
// ==========================================

mod test_helpers;

use chrono::NaiveDate;
use teister_mask::config::config_keys;
use teister_mask::{ApiError, AppState};
use test_helpers::{employee_json, employees_document, project_xml, projects_document, task_xml};

fn setup() -> (tempfile::NamedTempFile, AppState) {
    teister_mask::logging::init_test();
    let (temp_file, db_path) = test_helpers::create_test_db().expect("创建测试数据库失败");
    let state = AppState::new(db_path).expect("初始化AppState失败");
    (temp_file, state)
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("缺少片段: {}\n{}", needle, haystack))
}

#[test]
fn test_project_export_order_and_filter() {
    let (_tmp, state) = setup();

    let xml = projects_document(&[
        project_xml(
            "B",
            "01/01/2020",
            Some("31/12/2020"),
            &[
                task_xml("b3", "02/01/2020", "03/01/2020", 0, 0),
                task_xml("b1", "02/01/2020", "03/01/2020", 0, 1),
                task_xml("b2", "02/01/2020", "03/01/2020", 0, 2),
            ],
        ),
        project_xml(
            "A",
            "01/01/2020",
            None,
            &[
                task_xml("a1", "02/01/2020", "03/01/2020", 0, 3),
                task_xml("a2", "02/01/2020", "03/01/2020", 0, 4),
                task_xml("a3", "02/01/2020", "03/01/2020", 0, 0),
            ],
        ),
        project_xml("C", "01/01/2020", None, &[task_xml("c1", "02/01/2020", "03/01/2020", 0, 0)]),
        project_xml(
            "Empty",
            "01/01/2020",
            Some("02/01/2020"),
            &[task_xml("too late", "02/01/2020", "03/01/2020", 0, 0)],
        ),
    ]);
    state.import_api.import_projects_from_str(&xml).unwrap();

    let exported = state.export_api.export_projects_with_tasks().unwrap();

    assert!(exported.starts_with("<?xml"));
    assert!(!exported.contains("<ProjectName>Empty</ProjectName>"));

    let a = position(&exported, "<ProjectName>A</ProjectName>");
    let b = position(&exported, "<ProjectName>B</ProjectName>");
    let c = position(&exported, "<ProjectName>C</ProjectName>");
    assert!(a < b && b < c);

    assert_eq!(exported.matches(r#"TasksCount="3""#).count(), 2);
    assert_eq!(exported.matches(r#"TasksCount="1""#).count(), 1);
    assert_eq!(exported.matches("<HasEndDate>Yes</HasEndDate>").count(), 1);
    assert_eq!(exported.matches("<HasEndDate>No</HasEndDate>").count(), 2);

    // B 的任务按名称升序，标签为文本
    let b1 = position(&exported, "<Name>b1</Name>");
    let b2 = position(&exported, "<Name>b2</Name>");
    let b3 = position(&exported, "<Name>b3</Name>");
    assert!(b1 < b2 && b2 < b3);
    assert!(exported.contains("<Label>CSharpAdvanced</Label>"));
    assert!(exported.contains("<Label>Hibernate</Label>"));
}

/// 导入 1 个项目 3 个任务，再导入 `count` 个员工
fn seed_workload(state: &AppState, employees: &[serde_json::Value]) {
    let xml = projects_document(&[project_xml(
        "Workload",
        "01/01/2018",
        None,
        &[
            task_xml("Old task", "01/01/2018", "01/06/2018", 0, 0),
            task_xml("Recent B", "01/01/2019", "01/06/2019", 1, 1),
            task_xml("Recent A", "15/01/2019", "01/06/2019", 2, 2),
        ],
    )]);
    state.import_api.import_projects_from_str(&xml).unwrap();
    state
        .import_api
        .import_employees_from_str(&employees_document(employees))
        .unwrap();
}

#[test]
fn test_mixed_case_names_sort_ignoring_case() {
    let (_tmp, state) = setup();

    let xml = projects_document(&[project_xml(
        "Fruit",
        "01/01/2020",
        None,
        &[
            task_xml("banana", "02/01/2020", "03/01/2020", 0, 0),
            task_xml("Cherry", "02/01/2020", "03/01/2020", 0, 0),
            task_xml("apple", "02/01/2020", "03/01/2020", 0, 0),
        ],
    )]);
    state.import_api.import_projects_from_str(&xml).unwrap();
    state
        .import_api
        .import_employees_from_str(&employees_document(&[
            employee_json("Carl", &[1]),
            employee_json("bob", &[2]),
        ]))
        .unwrap();

    let exported = state.export_api.export_projects_with_tasks().unwrap();
    let apple = position(&exported, "<Name>apple</Name>");
    let banana = position(&exported, "<Name>banana</Name>");
    let cherry = position(&exported, "<Name>Cherry</Name>");
    assert!(apple < banana && banana < cherry);

    let cutoff = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let json = state.export_api.export_busiest_employees(cutoff).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let usernames: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["Username"].as_str().unwrap())
        .collect();
    assert_eq!(usernames, vec!["bob", "Carl"]);
}

#[test]
fn test_busiest_employees_filter_and_task_order() {
    let (_tmp, state) = setup();
    seed_workload(
        &state,
        &[
            employee_json("oldtimer", &[1]),
            employee_json("busy", &[1, 2, 3]),
            employee_json("casual", &[2]),
        ],
    );

    let cutoff = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    let json = state.export_api.export_busiest_employees(cutoff).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let list = value.as_array().unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["Username"], "busy");
    assert_eq!(list[1]["Username"], "casual");

    // 同截止日期按名称升序，旧任务已被过滤
    let tasks = list[0]["Tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["TaskName"], "Recent A");
    assert_eq!(tasks[0]["OpenDate"], "01/15/2019");
    assert_eq!(tasks[0]["DueDate"], "06/01/2019");
    assert_eq!(tasks[0]["LabelType"], "JavaAdvanced");
    assert_eq!(tasks[0]["ExecutionType"], "InProgress");
    assert_eq!(tasks[1]["TaskName"], "Recent B");

    // 缩进输出
    assert!(json.contains("\n  {"));
}

#[test]
fn test_busiest_employees_truncated_to_ten() {
    let (_tmp, state) = setup();

    let employees: Vec<serde_json::Value> = (0..11)
        .map(|i| {
            let tasks: &[i64] = if i == 10 { &[2, 3] } else { &[2] };
            employee_json(&format!("emp{:02}", i), tasks)
        })
        .collect();
    seed_workload(&state, &employees);

    let json = state
        .export_api
        .export_busiest_employees_from_str("01/01/2019")
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let usernames: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["Username"].as_str().unwrap())
        .collect();

    assert_eq!(usernames.len(), 10);
    assert_eq!(usernames[0], "emp10");
    assert_eq!(usernames[1], "emp00");
    assert_eq!(usernames[9], "emp08");
}

#[test]
fn test_busiest_employees_limit_from_config() {
    let (_tmp, state) = setup();
    seed_workload(
        &state,
        &[
            employee_json("first", &[2, 3]),
            employee_json("second", &[2]),
            employee_json("third", &[3]),
        ],
    );

    state
        .config_api
        .set_config(config_keys::BUSIEST_EMPLOYEES_LIMIT, "2")
        .unwrap();

    let json = state
        .export_api
        .export_busiest_employees_from_str("01/01/2019")
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["Username"], "first");
    assert_eq!(list[1]["Username"], "second");
}

#[test]
fn test_busiest_employees_bad_cutoff() {
    let (_tmp, state) = setup();
    let result = state.export_api.export_busiest_employees_from_str("2019-01-01");
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[test]
fn test_exports_on_empty_store() {
    let (_tmp, state) = setup();

    let json = state
        .export_api
        .export_busiest_employees_from_str("01/01/2000")
        .unwrap();
    assert_eq!(json, "[]");

    let xml = state.export_api.export_projects_with_tasks().unwrap();
    assert!(xml.contains("Projects"));
    assert!(!xml.contains("<Project "));
}
