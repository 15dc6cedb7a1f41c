use course_rater::config::ReportConfig;
use course_rater::error::RaterError;
use course_rater::output::write_csv;
use course_rater::pipeline::{Report, build_report, persist_report, run};
use course_rater::stats::ExtractionStats;
use course_rater::table::{Cell, RawTable};
use rust_xlsxwriter::Workbook;
use std::path::Path;

fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

/// Two-course survey sheet laid out like a real export: question codes on
/// row 0, question text on row 1, then a metadata row and the responses.
fn survey_sheet() -> RawTable {
    let rows = vec![
        vec![text("ResponseId"), text("QID12_1"), text("QID12_2"), text("QID40")],
        vec![
            text("Response ID"),
            text("Rate ACC 201 Intro to Accounting - Overall"),
            text("Rate ACC 305B  Federal   Tax - Overall"),
            text("Any other comments?"),
        ],
        vec![
            text("{\"ImportId\":\"QID1\"}"),
            text("{\"ImportId\":\"QID12_1\"}"),
            text("{\"ImportId\":\"QID12_2\"}"),
            text("{\"ImportId\":\"QID40\"}"),
        ],
        vec![text("R_2xVq1"), Cell::Number(4.0), Cell::Number(3.0), text("great")],
        vec![text("R_8kLm3"), Cell::Number(5.0), text("N/A"), Cell::Empty],
        vec![text("R_5pQr7"), text("5"), Cell::Number(3.0), Cell::Empty],
    ];
    RawTable::from_sheet_rows(rows).unwrap()
}

fn csv_bytes(table: RawTable) -> Vec<u8> {
    let report = build_report(table).unwrap();
    let mut buf = Vec::new();
    write_csv(&mut buf, &report.ranking).unwrap();
    buf
}

#[test]
fn test_full_pipeline() {
    let report = build_report(survey_sheet()).unwrap();

    assert_eq!(report.ranking.len(), 2);

    let first = &report.ranking[0];
    assert_eq!(first.rank, 1);
    assert_eq!(first.course_name, "ACC 201 Intro to Accounting");
    assert_eq!(first.mean_rating, 4.6667);
    assert_eq!(first.response_count, 3);

    let second = &report.ranking[1];
    assert_eq!(second.rank, 2);
    assert_eq!(second.course_name, "ACC 305B Federal Tax");
    assert_eq!(second.mean_rating, 3.0);
    assert_eq!(second.response_count, 2);

    assert_eq!(report.stats.metadata_rows_dropped, 1);
    assert_eq!(report.stats.records_dropped, 1);
}

#[test]
fn test_csv_output_is_reproducible() {
    let first = csv_bytes(survey_sheet());
    let second = csv_bytes(survey_sheet());

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).unwrap(),
        "rank,course_name,mean_rating,response_count\n\
         1,ACC 201 Intro to Accounting,4.6667,3\n\
         2,ACC 305B Federal Tax,3.0,2\n"
    );
}

#[test]
fn test_persist_report_writes_csv() {
    let tmp = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        output_dir: tmp.path().join("outputs"),
        render_chart: false,
        ..Default::default()
    };

    let report = build_report(survey_sheet()).unwrap();
    persist_report(&config, &report).unwrap();

    let content = std::fs::read_to_string(config.csv_path()).unwrap();
    assert!(content.starts_with("rank,course_name,mean_rating,response_count\n"));
    assert!(!config.png_path().exists());
}

#[test]
fn test_missing_input_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        data_dir: tmp.path().join("data"),
        output_dir: tmp.path().join("outputs"),
        ..Default::default()
    };

    let err = run(&config).unwrap_err();
    assert!(matches!(err, RaterError::InputDiscovery { found: 0, .. }));
    assert!(!config.output_dir.exists());
}

#[test]
fn test_sheet_without_rating_columns_fails() {
    let rows = vec![
        vec![text("ResponseId"), text("QID40")],
        vec![text("Response ID"), text("Any other comments?")],
        vec![text("R_2xVq1"), text("great")],
    ];
    let table = RawTable::from_sheet_rows(rows).unwrap();

    let err = build_report(table).unwrap_err();
    assert!(matches!(err, RaterError::Configuration(_)));
}

/// Writes a survey export whose first sheet row is blank and whose header
/// row starts in column B, as some exports place it.
fn write_survey_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(1, 1, "Response ID").unwrap();
    sheet.write_string(1, 2, "Rate ACC 201 Intro - Overall").unwrap();
    sheet.write_string(1, 3, "Rate ACC-wide experience - Advising").unwrap();

    sheet.write_string(2, 1, "{\"ImportId\":\"QID1\"}").unwrap();
    sheet.write_string(2, 2, "{\"ImportId\":\"QID12_1\"}").unwrap();
    sheet.write_string(2, 3, "{\"ImportId\":\"QID12_2\"}").unwrap();

    sheet.write_string(3, 1, "R_2xVq1").unwrap();
    sheet.write_number(3, 2, 4.0).unwrap();
    sheet.write_number(3, 3, 3.0).unwrap();

    sheet.write_string(4, 1, "R_8kLm3").unwrap();
    sheet.write_number(4, 2, 5.0).unwrap();
    sheet.write_string(4, 3, "N/A").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_run_on_workbook_is_reproducible() {
    let tmp = tempfile::tempdir().unwrap();
    let data_dir = tmp.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    write_survey_workbook(&data_dir.join("survey_export.xlsx"));

    let config = ReportConfig {
        data_dir,
        output_dir: tmp.path().join("outputs"),
        render_chart: false,
        ..Default::default()
    };

    let report = run(&config).unwrap();
    assert_eq!(report.ranking.len(), 2);
    assert_eq!(report.ranking[0].course_name, "ACC 201 Intro");
    assert_eq!(report.ranking[0].mean_rating, 4.5);
    assert_eq!(report.ranking[0].response_count, 2);
    assert_eq!(report.stats.metadata_rows_dropped, 1);
    assert_eq!(report.stats.fallback_names, 1);

    let first = std::fs::read(config.csv_path()).unwrap();
    run(&config).unwrap();
    let second = std::fs::read(config.csv_path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).unwrap(),
        "rank,course_name,mean_rating,response_count\n\
         1,ACC 201 Intro,4.5,2\n\
         2,Advising,3.0,1\n"
    );
}

#[test]
fn test_empty_ranking_clears_previous_chart() {
    let tmp = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        output_dir: tmp.path().join("outputs"),
        ..Default::default()
    };
    std::fs::create_dir_all(&config.output_dir).unwrap();
    std::fs::write(config.png_path(), "PREVIOUS RUN").unwrap();

    let report = Report {
        ranking: Vec::new(),
        stats: ExtractionStats::default(),
    };
    persist_report(&config, &report).unwrap();

    assert_eq!(
        std::fs::read_to_string(config.csv_path()).unwrap(),
        "rank,course_name,mean_rating,response_count\n"
    );
    assert!(!config.png_path().exists());
}
