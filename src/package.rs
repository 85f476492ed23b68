use indexmap::{IndexMap, IndexSet};
use log::trace;

use crate::types::ExportError;
use crate::worksheet::WorksheetData;
use crate::xml;

/// Folders of the OOXML package below the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExcelFolderType {
    RootRels = 1,
    DocProps = 2,
    Xl = 3,
    XlRels = 4,
    Theme = 5,
    Worksheets = 6,
    WorksheetsRels = 7,
    Tables = 8,
}

impl TryFrom<u8> for ExcelFolderType {
    type Error = ExportError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Ok(match tag {
            1 => Self::RootRels,
            2 => Self::DocProps,
            3 => Self::Xl,
            4 => Self::XlRels,
            5 => Self::Theme,
            6 => Self::Worksheets,
            7 => Self::WorksheetsRels,
            8 => Self::Tables,
            other => return Err(ExportError::UnknownFolderType(other)),
        })
    }
}

/// Parts of the OOXML package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExcelFileType {
    RootRels = 1,
    App = 2,
    Core = 3,
    WorkbookRels = 4,
    Theme = 5,
    Worksheet = 6,
    Style = 7,
    Workbook = 8,
    ContentTypes = 9,
    SharedStrings = 10,
    WorksheetRels = 11,
    Tables = 12,
}

impl TryFrom<u8> for ExcelFileType {
    type Error = ExportError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Ok(match tag {
            1 => Self::RootRels,
            2 => Self::App,
            3 => Self::Core,
            4 => Self::WorkbookRels,
            5 => Self::Theme,
            6 => Self::Worksheet,
            7 => Self::Style,
            8 => Self::Workbook,
            9 => Self::ContentTypes,
            10 => Self::SharedStrings,
            11 => Self::WorksheetRels,
            12 => Self::Tables,
            other => return Err(ExportError::UnknownFileType(other)),
        })
    }
}

/// Subfolders of the package root.
pub const ROOT_FOLDERS: [ExcelFolderType; 3] =
    [ExcelFolderType::RootRels, ExcelFolderType::DocProps, ExcelFolderType::Xl];

/// Files of the package root.
pub const ROOT_FILES: [ExcelFileType; 1] = [ExcelFileType::ContentTypes];

/// A package folder: its name and the children it holds for a given worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcelFolder {
    kind: ExcelFolderType,
}

impl ExcelFolder {
    pub fn kind(&self) -> ExcelFolderType {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            ExcelFolderType::RootRels | ExcelFolderType::XlRels | ExcelFolderType::WorksheetsRels => "_rels",
            ExcelFolderType::DocProps => "docProps",
            ExcelFolderType::Xl => "xl",
            ExcelFolderType::Theme => "theme",
            ExcelFolderType::Worksheets => "worksheets",
            ExcelFolderType::Tables => "tables",
        }
    }

    pub fn child_folders(&self, data: &WorksheetData) -> Vec<ExcelFolderType> {
        match self.kind {
            ExcelFolderType::Xl => {
                let mut folders = vec![
                    ExcelFolderType::XlRels,
                    ExcelFolderType::Theme,
                    ExcelFolderType::Worksheets,
                ];
                if data.has_table() {
                    folders.push(ExcelFolderType::Tables);
                }
                folders
            }
            ExcelFolderType::Worksheets if data.has_table() => vec![ExcelFolderType::WorksheetsRels],
            _ => Vec::new(),
        }
    }

    pub fn child_files(&self, data: &WorksheetData) -> Vec<ExcelFileType> {
        match self.kind {
            ExcelFolderType::RootRels => vec![ExcelFileType::RootRels],
            ExcelFolderType::DocProps => vec![ExcelFileType::App, ExcelFileType::Core],
            ExcelFolderType::Xl => {
                let mut files = vec![ExcelFileType::Style, ExcelFileType::Workbook];
                if !data.is_empty() {
                    files.push(ExcelFileType::SharedStrings);
                }
                files
            }
            ExcelFolderType::XlRels => vec![ExcelFileType::WorkbookRels],
            ExcelFolderType::Theme => vec![ExcelFileType::Theme],
            ExcelFolderType::Worksheets => vec![ExcelFileType::Worksheet],
            ExcelFolderType::WorksheetsRels => vec![ExcelFileType::WorksheetRels],
            ExcelFolderType::Tables => vec![ExcelFileType::Tables],
        }
    }
}

/// A package part, rendered from the worksheet into its folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcelFile {
    kind: ExcelFileType,
}

impl ExcelFile {
    pub fn kind(&self) -> ExcelFileType {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            ExcelFileType::RootRels => ".rels",
            ExcelFileType::App => "app.xml",
            ExcelFileType::Core => "core.xml",
            ExcelFileType::WorkbookRels => "workbook.xml.rels",
            ExcelFileType::Theme => "theme1.xml",
            ExcelFileType::Worksheet => "sheet1.xml",
            ExcelFileType::Style => "styles.xml",
            ExcelFileType::Workbook => "workbook.xml",
            ExcelFileType::ContentTypes => "[Content_Types].xml",
            ExcelFileType::SharedStrings => "sharedStrings.xml",
            ExcelFileType::WorksheetRels => "sheet1.xml.rels",
            ExcelFileType::Tables => "table1.xml",
        }
    }

    /// Render this part and store it in `folder`.
    ///
    /// The worksheet part fills the shared string dictionary, so it has to be
    /// written before the shared strings and styles parts.
    pub fn write_element(&self, folder: &mut ArchiveFolder<'_>, data: &mut WorksheetData) {
        let worksheet_name = data.options().worksheet_name();
        let has_shared_strings = !data.is_empty();

        let contents = match self.kind {
            ExcelFileType::RootRels => xml::generate_rels().into_bytes(),
            ExcelFileType::App => xml::generate_app_xml(worksheet_name).into_bytes(),
            ExcelFileType::Core => xml::generate_core_xml().into_bytes(),
            ExcelFileType::WorkbookRels => xml::generate_workbook_rels(has_shared_strings).into_bytes(),
            ExcelFileType::Theme => xml::generate_theme().into_bytes(),
            ExcelFileType::Worksheet => xml::generate_sheet_xml(data),
            ExcelFileType::Style => {
                xml::generate_styles_xml(data.dictionary().has_non_string_values).into_bytes()
            }
            ExcelFileType::Workbook => xml::generate_workbook(worksheet_name).into_bytes(),
            ExcelFileType::ContentTypes => {
                xml::generate_content_types(has_shared_strings, data.has_table()).into_bytes()
            }
            ExcelFileType::SharedStrings => {
                let count = data.dictionary().strings_count;
                xml::generate_shared_strings(count, data.dictionary_mut().get_keys()).into_bytes()
            }
            ExcelFileType::WorksheetRels => xml::generate_worksheet_rels().into_bytes(),
            ExcelFileType::Tables => xml::generate_table_xml(data).into_bytes(),
        };

        folder.file(self.name(), contents);
    }
}

pub fn get_excel_folder(kind: ExcelFolderType) -> ExcelFolder {
    ExcelFolder { kind }
}

pub fn get_excel_file(kind: ExcelFileType) -> ExcelFile {
    ExcelFile { kind }
}

/// Folder lookup by raw tag; unknown tags are a wiring bug in the caller.
pub fn excel_folder_from_tag(tag: u8) -> Result<ExcelFolder, ExportError> {
    ExcelFolderType::try_from(tag).map(get_excel_folder)
}

pub fn excel_file_from_tag(tag: u8) -> Result<ExcelFile, ExportError> {
    ExcelFileType::try_from(tag).map(get_excel_file)
}

/// In-memory package: folder paths and file contents keyed by full path,
/// in the order they were created.
#[derive(Debug, Default, Clone)]
pub struct VirtualArchive {
    folders: IndexSet<String>,
    files: IndexMap<String, Vec<u8>>,
}

impl VirtualArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&mut self) -> ArchiveFolder<'_> {
        ArchiveFolder {
            archive: self,
            path: String::new(),
        }
    }

    /// Folder paths, each ending in `/`.
    pub fn folders(&self) -> impl Iterator<Item = &str> {
        self.folders.iter().map(String::as_str)
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn file(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path) || self.folders.contains(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_files(self) -> impl Iterator<Item = (String, Vec<u8>)> {
        self.files.into_iter()
    }
}

/// Handle on one folder of a [`VirtualArchive`].
#[derive(Debug)]
pub struct ArchiveFolder<'a> {
    archive: &'a mut VirtualArchive,
    path: String,
}

impl ArchiveFolder<'_> {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Create (or reopen) the subfolder `name`.
    pub fn folder(&mut self, name: &str) -> ArchiveFolder<'_> {
        let path = format!("{}{}/", self.path, name);
        self.archive.folders.insert(path.clone());
        ArchiveFolder {
            archive: &mut *self.archive,
            path,
        }
    }

    pub fn file(&mut self, name: &str, contents: Vec<u8>) {
        let path = format!("{}{}", self.path, name);
        trace!("writing package part {} ({} bytes)", path, contents.len());
        self.archive.files.insert(path, contents);
    }
}

/// Render the whole package for `data`.
pub fn build_package(data: &mut WorksheetData) -> VirtualArchive {
    let mut archive = VirtualArchive::new();
    {
        let mut root = archive.root();
        for kind in ROOT_FOLDERS {
            write_folder(get_excel_folder(kind), &mut root, data);
        }
        for kind in ROOT_FILES {
            get_excel_file(kind).write_element(&mut root, data);
        }
    }
    archive
}

/// Subfolders are walked before the folder's own files.
fn write_folder(folder: ExcelFolder, parent: &mut ArchiveFolder<'_>, data: &mut WorksheetData) {
    let mut current = parent.folder(folder.name());
    for kind in folder.child_folders(data) {
        write_folder(get_excel_folder(kind), &mut current, data);
    }
    for kind in folder.child_files(data) {
        get_excel_file(kind).write_element(&mut current, data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::CalibriMetrics;
    use crate::options::{ExcelExporterOptions, GridState};
    use crate::types::{record, Row, Value};
    use std::sync::Arc;

    fn package(rows: &[Row], opts: &ExcelExporterOptions) -> VirtualArchive {
        let grid = GridState::default();
        let mut data = WorksheetData::new(rows, opts, &grid, Arc::new(CalibriMetrics));
        build_package(&mut data)
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert!(matches!(excel_folder_from_tag(0), Err(ExportError::UnknownFolderType(0))));
        assert!(matches!(excel_file_from_tag(42), Err(ExportError::UnknownFileType(42))));
        assert_eq!(excel_folder_from_tag(3).unwrap().name(), "xl");
        assert_eq!(excel_file_from_tag(9).unwrap().name(), "[Content_Types].xml");
        for tag in 1..=8u8 {
            assert_eq!(ExcelFolderType::try_from(tag).unwrap() as u8, tag);
        }
        for tag in 1..=12u8 {
            assert_eq!(ExcelFileType::try_from(tag).unwrap() as u8, tag);
        }
    }

    #[test]
    fn walk_order_renders_worksheet_before_shared_strings() {
        let rows = vec![record([("Name", "Ann")])];
        let archive = package(&rows, &ExcelExporterOptions::default());
        let names: Vec<&str> = archive.file_names().collect();
        assert_eq!(
            names,
            [
                "_rels/.rels",
                "docProps/app.xml",
                "docProps/core.xml",
                "xl/_rels/workbook.xml.rels",
                "xl/theme/theme1.xml",
                "xl/worksheets/_rels/sheet1.xml.rels",
                "xl/worksheets/sheet1.xml",
                "xl/tables/table1.xml",
                "xl/styles.xml",
                "xl/workbook.xml",
                "xl/sharedStrings.xml",
                "[Content_Types].xml",
            ]
        );
        let strings = String::from_utf8(archive.file("xl/sharedStrings.xml").unwrap().to_vec()).unwrap();
        assert!(strings.contains("count=\"2\" uniqueCount=\"2\""));
    }

    #[test]
    fn empty_data_omits_optional_parts() {
        let archive = package(&[], &ExcelExporterOptions::default());
        assert_eq!(archive.len(), 9);
        assert!(!archive.contains("xl/sharedStrings.xml"));
        assert!(!archive.contains("xl/tables/"));
        assert!(!archive.contains("xl/worksheets/_rels/"));
        assert!(archive.contains("xl/worksheets/"));
    }

    #[test]
    fn table_export_can_be_disabled() {
        let rows = vec![record([("a", Value::from(1))])];
        let mut opts = ExcelExporterOptions::default();
        opts.export_as_table = false;
        let archive = package(&rows, &opts);
        assert_eq!(archive.len(), 10);
        assert!(archive.contains("xl/sharedStrings.xml"));
        assert!(!archive.contains("xl/tables/table1.xml"));
        let sheet = String::from_utf8(archive.file("xl/worksheets/sheet1.xml").unwrap().to_vec()).unwrap();
        assert!(!sheet.contains("tableParts"));
    }

    fn styles(archive: &VirtualArchive) -> String {
        String::from_utf8(archive.file("xl/styles.xml").unwrap().to_vec()).unwrap()
    }

    #[test]
    fn number_format_is_declared_only_when_cells_use_it() {
        let opts = ExcelExporterOptions::default();

        let strings_only = package(&[record([("Name", "Ann")])], &opts);
        assert!(styles(&strings_only).contains("<cellXfs count=\"1\">"));

        let numbers = package(&[record([("Age", Value::from(30))])], &opts);
        assert!(styles(&numbers).contains("<cellXfs count=\"2\">"));

        let with_gap = vec![
            record([("Name", Value::from("Ann"))]),
            record([("Name", Value::Null)]),
        ];
        assert!(styles(&package(&with_gap, &opts)).contains("<cellXfs count=\"2\">"));

        assert!(styles(&package(&[], &opts)).contains("<cellXfs count=\"1\">"));
    }

    #[test]
    fn folder_handles_scope_paths() {
        let mut archive = VirtualArchive::new();
        {
            let mut root = archive.root();
            let mut xl = root.folder("xl");
            let mut theme = xl.folder("theme");
            assert_eq!(theme.path(), "xl/theme/");
            theme.file("theme1.xml", b"<a/>".to_vec());
        }
        assert_eq!(archive.folders().collect::<Vec<_>>(), ["xl/", "xl/theme/"]);
        assert_eq!(archive.file("xl/theme/theme1.xml"), Some(&b"<a/>"[..]));
    }
}
