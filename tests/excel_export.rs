use std::io::{Cursor, Read};

use gridexport::{
    decode_base64_archive, record, ExcelExporter, ExcelExporterOptions, ExportError, GridState, Row,
    SortDirection, SortSpec, Value,
};

fn unzip(bytes: Vec<u8>) -> zip::ZipArchive<Cursor<Vec<u8>>> {
    zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip")
}

fn part_names(archive: &zip::ZipArchive<Cursor<Vec<u8>>>) -> Vec<String> {
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

fn read_part(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut text = String::new();
    archive.by_name(name).unwrap().read_to_string(&mut text).unwrap();
    text
}

fn export(rows: &[Row], opts: &ExcelExporterOptions, grid: &GridState) -> zip::ZipArchive<Cursor<Vec<u8>>> {
    unzip(ExcelExporter::new().export_data(rows, opts, grid).unwrap())
}

const BASE_PARTS: [&str; 9] = [
    "[Content_Types].xml",
    "_rels/.rels",
    "docProps/app.xml",
    "docProps/core.xml",
    "xl/_rels/workbook.xml.rels",
    "xl/styles.xml",
    "xl/theme/theme1.xml",
    "xl/workbook.xml",
    "xl/worksheets/sheet1.xml",
];

fn expected(extra: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = BASE_PARTS.iter().chain(extra).map(|s| s.to_string()).collect();
    names.sort();
    names
}

#[test]
fn minimal_export_has_every_part() {
    let rows = vec![record([("Name", "Ann")])];
    let mut zip = export(&rows, &ExcelExporterOptions::default(), &GridState::default());
    assert_eq!(
        part_names(&zip),
        expected(&[
            "xl/sharedStrings.xml",
            "xl/tables/table1.xml",
            "xl/worksheets/_rels/sheet1.xml.rels",
        ])
    );

    let strings = read_part(&mut zip, "xl/sharedStrings.xml");
    assert!(strings.contains("uniqueCount=\"2\""));
    assert!(strings.contains("<si><t>Name</t></si><si><t>Ann</t></si>"));

    let content_types = read_part(&mut zip, "[Content_Types].xml");
    assert!(content_types.contains("/xl/sharedStrings.xml"));
    assert!(content_types.contains("/xl/tables/table1.xml"));

    let table = read_part(&mut zip, "xl/tables/table1.xml");
    assert!(table.contains("ref=\"A1:A2\""));
    assert!(table.contains("<tableColumn id=\"1\" name=\"Name\"/>"));
}

#[test]
fn empty_export_is_a_minimal_package() {
    let mut zip = export(&[], &ExcelExporterOptions::default(), &GridState::default());
    assert_eq!(part_names(&zip), expected(&[]));

    let sheet = read_part(&mut zip, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("<dimension ref=\"A1\"/>"));
    assert!(sheet.contains("<sheetData/>"));

    let rels = read_part(&mut zip, "xl/_rels/workbook.xml.rels");
    assert!(!rels.contains("sharedStrings"));
}

#[test]
fn rows_without_keys_are_treated_as_empty() {
    let rows = vec![record(Vec::<(&str, Value)>::new())];
    let zip = export(&rows, &ExcelExporterOptions::default(), &GridState::default());
    assert_eq!(part_names(&zip), expected(&[]));
}

#[test]
fn plain_range_export_skips_table_parts() {
    let rows = vec![record([("ID", Value::from(1)), ("Name", Value::from("Ann"))])];
    let mut opts = ExcelExporterOptions::default();
    opts.export_as_table = false;
    let mut zip = export(&rows, &opts, &GridState::default());
    assert_eq!(part_names(&zip), expected(&["xl/sharedStrings.xml"]));

    let content_types = read_part(&mut zip, "[Content_Types].xml");
    assert!(!content_types.contains("table1"));
    let sheet = read_part(&mut zip, "xl/worksheets/sheet1.xml");
    assert!(!sheet.contains("tableParts"));
    assert!(sheet.contains("<c r=\"A2\" s=\"1\"><v>1</v></c>"));
}

#[test]
fn worksheet_options_reach_the_sheet() {
    let rows = vec![
        record([("ID", Value::from(2)), ("Name", Value::from("Bo")), ("City", Value::from("Oslo"))]),
        record([("ID", Value::from(1)), ("Name", Value::from("Ann")), ("City", Value::Null)]),
    ];
    let mut opts = ExcelExporterOptions::new("people");
    opts.set_column_width(Some(20.0)).unwrap();
    opts.set_row_height(Some(18.5)).unwrap();
    opts.set_worksheet_name("People").unwrap();
    let grid = GridState {
        last_pinned_column: Some(0),
        sort: Some(SortSpec {
            field_name: "Name".into(),
            direction: SortDirection::Ascending,
        }),
    };
    let mut zip = export(&rows, &opts, &grid);

    let sheet = read_part(&mut zip, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("<pane xSplit=\"1\" topLeftCell=\"B1\" activePane=\"topRight\" state=\"frozen\"/>"));
    assert!(sheet.contains("<row r=\"3\" ht=\"18.5\" customHeight=\"1\">"));
    assert!(sheet.contains("<col min=\"3\" max=\"3\" width=\"20\" customWidth=\"1\"/>"));
    assert!(sheet.contains("<c r=\"C3\" s=\"1\"/>"));

    let table = read_part(&mut zip, "xl/tables/table1.xml");
    assert!(table.contains("<sortState ref=\"A2:C3\"><sortCondition descending=\"0\" ref=\"B2:B3\"/></sortState>"));

    let workbook = read_part(&mut zip, "xl/workbook.xml");
    assert!(workbook.contains("<sheet name=\"People\" sheetId=\"1\" r:id=\"rId1\"/>"));
}

#[test]
fn special_data_gets_a_synthetic_header() {
    let rows = vec![Row::from(Value::from("x")), Row::from(Value::from("y"))];
    let mut zip = export(&rows, &ExcelExporterOptions::default(), &GridState::default());
    let strings = read_part(&mut zip, "xl/sharedStrings.xml");
    assert!(strings.contains("count=\"3\" uniqueCount=\"3\""));
    assert!(strings.contains("<si><t>Column 1</t></si>"));
}

#[test]
fn save_writes_an_xlsx_file() {
    let dir = tempfile::tempdir().unwrap();
    let opts = ExcelExporterOptions::new("report");
    let rows = vec![record([("Name", "Ann")])];
    let path = ExcelExporter::new()
        .save(&rows, &opts, &GridState::default(), dir.path())
        .unwrap();
    assert_eq!(path.file_name().unwrap(), "report.xlsx");
    let zip = unzip(std::fs::read(path).unwrap());
    assert_eq!(zip.len(), 12);
}

#[test]
fn base64_output_decodes_to_the_archive() {
    let rows = vec![record([("Name", "Ann")])];
    let encoded = ExcelExporter::new()
        .export_base64(&rows, &ExcelExporterOptions::default(), &GridState::default())
        .unwrap();
    let zip = unzip(decode_base64_archive(&encoded).unwrap());
    assert_eq!(zip.len(), 12);
}

#[test]
fn invalid_deserialized_options_are_rejected() {
    let opts: ExcelExporterOptions = serde_json::from_str(r#"{"worksheet_name": "a/b"}"#).unwrap();
    let err = ExcelExporter::new()
        .export_data(&[], &opts, &GridState::default())
        .unwrap_err();
    assert!(matches!(err, ExportError::InvalidWorksheetName(_)));
}
