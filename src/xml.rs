use crate::utils::{excel_column, format_number, write_cell_ref, write_col_letter, xml_escape, xml_escape_into};
use crate::worksheet::WorksheetData;
use crate::options::SortDirection;
use crate::types::Value;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n";

/// Narrowest column written when widths are measured.
const MIN_COLUMN_WIDTH: f64 = 8.34;

pub fn generate_content_types(has_shared_strings: bool, has_table: bool) -> String {
    let mut xml = String::with_capacity(1400);
    xml.push_str(XML_DECLARATION);
    xml.push_str(
        "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\
<Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>\
<Override PartName=\"/xl/worksheets/sheet1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>\
<Override PartName=\"/xl/theme/theme1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.theme+xml\"/>\
<Override PartName=\"/xl/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml\"/>\
<Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>\
<Override PartName=\"/docProps/app.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.extended-properties+xml\"/>",
    );

    if has_shared_strings {
        xml.push_str("<Override PartName=\"/xl/sharedStrings.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml\"/>");
    }
    if has_table {
        xml.push_str("<Override PartName=\"/xl/tables/table1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.table+xml\"/>");
    }

    xml.push_str("</Types>");
    xml
}

pub fn generate_rels() -> String {
    format!(
        "{}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId3\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties\" Target=\"docProps/app.xml\"/>\
<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties\" Target=\"docProps/core.xml\"/>\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"xl/workbook.xml\"/>\
</Relationships>",
        XML_DECLARATION
    )
}

pub fn generate_app_xml(worksheet_name: &str) -> String {
    format!(
        "{}<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" \
xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\">\
<Application>Microsoft Excel</Application>\
<DocSecurity>0</DocSecurity>\
<ScaleCrop>false</ScaleCrop>\
<HeadingPairs><vt:vector size=\"2\" baseType=\"variant\">\
<vt:variant><vt:lpstr>Worksheets</vt:lpstr></vt:variant>\
<vt:variant><vt:i4>1</vt:i4></vt:variant>\
</vt:vector></HeadingPairs>\
<TitlesOfParts><vt:vector size=\"1\" baseType=\"lpstr\"><vt:lpstr>{}</vt:lpstr></vt:vector></TitlesOfParts>\
<Company></Company>\
<LinksUpToDate>false</LinksUpToDate>\
<SharedDoc>false</SharedDoc>\
<HyperlinksChanged>false</HyperlinksChanged>\
<AppVersion>16.0300</AppVersion>\
</Properties>",
        XML_DECLARATION,
        xml_escape(worksheet_name)
    )
}

pub fn generate_core_xml() -> String {
    format!(
        "{}<cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
xmlns:dcterms=\"http://purl.org/dc/terms/\" \
xmlns:dcmitype=\"http://purl.org/dc/dcmitype/\" \
xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
<dc:creator></dc:creator>\
<cp:lastModifiedBy></cp:lastModifiedBy>\
<dcterms:created xsi:type=\"dcterms:W3CDTF\">2015-06-05T18:17:20Z</dcterms:created>\
<dcterms:modified xsi:type=\"dcterms:W3CDTF\">2015-06-05T18:17:26Z</dcterms:modified>\
</cp:coreProperties>",
        XML_DECLARATION
    )
}

pub fn generate_workbook(worksheet_name: &str) -> String {
    format!(
        "{}<workbook xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
xmlns:mc=\"http://schemas.openxmlformats.org/markup-compatibility/2006\" mc:Ignorable=\"x15\" \
xmlns:x15=\"http://schemas.microsoft.com/office/spreadsheetml/2010/11/main\">\
<fileVersion appName=\"xl\" lastEdited=\"6\" lowestEdited=\"6\" rupBuild=\"14420\"/>\
<workbookPr filterPrivacy=\"1\" defaultThemeVersion=\"164011\"/>\
<bookViews><workbookView xWindow=\"0\" yWindow=\"0\" windowWidth=\"22260\" windowHeight=\"12645\"/></bookViews>\
<sheets><sheet name=\"{}\" sheetId=\"1\" r:id=\"rId1\"/></sheets>\
<calcPr calcId=\"162913\"/>\
<extLst><ext uri=\"{{140A7094-0E35-4892-8432-C4D2E57EDEB5}}\" xmlns:x15=\"http://schemas.microsoft.com/office/spreadsheetml/2010/11/main\">\
<x15:workbookPr chartTrackingRefBase=\"1\"/></ext></extLst>\
</workbook>",
        XML_DECLARATION,
        xml_escape(worksheet_name)
    )
}

pub fn generate_workbook_rels(has_shared_strings: bool) -> String {
    let mut xml = String::with_capacity(800);
    xml.push_str(XML_DECLARATION);
    xml.push_str(
        "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId3\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\"/>\
<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme\" Target=\"theme/theme1.xml\"/>\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet1.xml\"/>",
    );
    if has_shared_strings {
        xml.push_str("<Relationship Id=\"rId4\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings\" Target=\"sharedStrings.xml\"/>");
    }
    xml.push_str("</Relationships>");
    xml
}

/// Worksheet relationships: the single table part.
pub fn generate_worksheet_rels() -> String {
    format!(
        "{}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/table\" Target=\"../tables/table1.xml\"/>\
</Relationships>",
        XML_DECLARATION
    )
}

pub fn generate_theme() -> String {
    format!("{}{}", XML_DECLARATION, THEME_XML)
}

/// Cell format 1, the plain number format used by inline values and empty
/// cells, is only declared when the sheet references it.
pub fn generate_styles_xml(has_number_values: bool) -> String {
    let cell_xfs = if has_number_values {
        "<cellXfs count=\"2\"><xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\"/>\
<xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\" applyNumberFormat=\"1\"/></cellXfs>"
    } else {
        "<cellXfs count=\"1\"><xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\"/></cellXfs>"
    };
    format!(
        "{}<styleSheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
xmlns:mc=\"http://schemas.openxmlformats.org/markup-compatibility/2006\" mc:Ignorable=\"x14ac x16r2\" \
xmlns:x14ac=\"http://schemas.microsoft.com/office/spreadsheetml/2009/9/ac\" \
xmlns:x16r2=\"http://schemas.microsoft.com/office/spreadsheetml/2015/02/main\">\
<fonts count=\"1\" x14ac:knownFonts=\"1\"><font><sz val=\"11\"/><color theme=\"1\"/><name val=\"Calibri\"/><family val=\"2\"/><scheme val=\"minor\"/></font></fonts>\
<fills count=\"2\"><fill><patternFill patternType=\"none\"/></fill><fill><patternFill patternType=\"gray125\"/></fill></fills>\
<borders count=\"1\"><border><left/><right/><top/><bottom/><diagonal/></border></borders>\
<cellStyleXfs count=\"1\"><xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\"/></cellStyleXfs>\
{}\
<cellStyles count=\"1\"><cellStyle name=\"Normal\" xfId=\"0\" builtinId=\"0\"/></cellStyles>\
<dxfs count=\"0\"/>\
<tableStyles count=\"0\" defaultTableStyle=\"TableStyleMedium2\" defaultPivotStyle=\"PivotStyleLight16\"/>\
<extLst><ext uri=\"{{EB79DEF2-80B8-43e5-95BD-54CBDDF9020C}}\" xmlns:x14=\"http://schemas.microsoft.com/office/spreadsheetml/2009/9/main\">\
<x14:slicerStyles defaultSlicerStyle=\"SlicerStyleLight1\"/></ext>\
<ext uri=\"{{9260A510-F301-46a8-8635-F512D64BE5F5}}\" xmlns:x15=\"http://schemas.microsoft.com/office/spreadsheetml/2010/11/main\">\
<x15:timelineStyles defaultTimelineStyle=\"TimeSlicerStyleLight1\"/></ext></extLst>\
</styleSheet>",
        XML_DECLARATION, cell_xfs
    )
}

/// `keys` are already sanitized and ordered by shared string index.
pub fn generate_shared_strings(count: usize, keys: &[String]) -> String {
    let body: usize = keys.iter().map(|k| k.len() + 17).sum();
    let mut xml = String::with_capacity(200 + body);
    xml.push_str(XML_DECLARATION);
    xml.push_str("<sst xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" count=\"");
    xml.push_str(itoa::Buffer::new().format(count));
    xml.push_str("\" uniqueCount=\"");
    xml.push_str(itoa::Buffer::new().format(keys.len()));
    xml.push_str("\">");
    for key in keys {
        xml.push_str("<si><t>");
        xml.push_str(key);
        xml.push_str("</t></si>");
    }
    xml.push_str("</sst>");
    xml
}

/// "A1:C11" style range over the whole worksheet.
fn write_dimension(data: &WorksheetData, buf: &mut Vec<u8>) {
    if data.is_empty() {
        buf.extend_from_slice(b"A1");
        return;
    }
    buf.extend_from_slice(b"A1:");
    write_cell_ref(data.column_count() - 1, data.row_count(), buf);
}

/// Render sheet1.xml, saving every header and cell value into the dictionary.
pub fn generate_sheet_xml(data: &mut WorksheetData) -> Vec<u8> {
    let num_cols = data.column_count();
    let num_rows = data.row_count();
    let mut buf = Vec::with_capacity(1000 + num_rows * num_cols * 32);

    buf.extend_from_slice(XML_DECLARATION.as_bytes());
    buf.extend_from_slice(b"<worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
xmlns:mc=\"http://schemas.openxmlformats.org/markup-compatibility/2006\" mc:Ignorable=\"x14ac\" \
xmlns:x14ac=\"http://schemas.microsoft.com/office/spreadsheetml/2009/9/ac\">");

    buf.extend_from_slice(b"<dimension ref=\"");
    write_dimension(data, &mut buf);
    buf.extend_from_slice(b"\"/>");

    buf.extend_from_slice(b"<sheetViews><sheetView tabSelected=\"1\" workbookViewId=\"0\">");
    if let (false, Some(pinned)) = (data.is_empty(), data.last_pinned_column()) {
        let frozen = pinned + 1;
        buf.extend_from_slice(b"<pane xSplit=\"");
        buf.extend_from_slice(itoa::Buffer::new().format(frozen).as_bytes());
        buf.extend_from_slice(b"\" topLeftCell=\"");
        write_cell_ref(frozen, 1, &mut buf);
        buf.extend_from_slice(b"\" activePane=\"topRight\" state=\"frozen\"/>");
    }
    buf.extend_from_slice(b"</sheetView></sheetViews>");
    buf.extend_from_slice(b"<sheetFormatPr defaultRowHeight=\"15\" x14ac:dyDescent=\"0.25\"/>");

    if data.is_empty() {
        buf.extend_from_slice(b"<sheetData/>");
    } else {
        let sheet_data = render_sheet_data(data);
        write_cols(data, &mut buf);
        buf.extend_from_slice(&sheet_data);
    }

    buf.extend_from_slice(b"<pageMargins left=\"0.7\" right=\"0.7\" top=\"0.75\" bottom=\"0.75\" header=\"0.3\" footer=\"0.3\"/>");
    if data.has_table() {
        buf.extend_from_slice(b"<tableParts count=\"1\"><tablePart r:id=\"rId1\"/></tableParts>");
    }
    buf.extend_from_slice(b"</worksheet>");
    buf
}

fn render_sheet_data(data: &mut WorksheetData) -> Vec<u8> {
    let num_cols = data.column_count();
    let row_attrs = match data.options().row_height() {
        Some(height) if height > 0.0 => format!(" ht=\"{}\" customHeight=\"1\"", format_number(height)),
        _ => String::new(),
    };
    let col_letters: Vec<Vec<u8>> = (0..num_cols)
        .map(|i| {
            let mut letters = Vec::with_capacity(3);
            write_col_letter(i, &mut letters);
            letters
        })
        .collect();

    let mut int_buf = itoa::Buffer::new();
    let mut sheet_data = Vec::with_capacity(data.row_count() * num_cols * 32);
    sheet_data.extend_from_slice(b"<sheetData>");

    sheet_data.extend_from_slice(b"<row r=\"1\"");
    sheet_data.extend_from_slice(row_attrs.as_bytes());
    sheet_data.push(b'>');
    let keys = data.keys().to_vec();
    for (col_idx, key) in keys.into_iter().enumerate() {
        let index = data
            .dictionary_mut()
            .save_value(&Value::String(key), col_idx, true)
            .unwrap_or_default();
        sheet_data.extend_from_slice(b"<c r=\"");
        sheet_data.extend_from_slice(&col_letters[col_idx]);
        sheet_data.extend_from_slice(b"1\" t=\"s\"><v>");
        sheet_data.extend_from_slice(int_buf.format(index).as_bytes());
        sheet_data.extend_from_slice(b"</v></c>");
    }
    sheet_data.extend_from_slice(b"</row>");

    for row_idx in 1..data.row_count() {
        let row_num = row_idx + 1;
        let mut row_buf = itoa::Buffer::new();
        let row_bytes = row_buf.format(row_num).as_bytes();

        sheet_data.extend_from_slice(b"<row r=\"");
        sheet_data.extend_from_slice(row_bytes);
        sheet_data.push(b'"');
        sheet_data.extend_from_slice(row_attrs.as_bytes());
        sheet_data.push(b'>');

        for (col_idx, col_letter) in col_letters.iter().enumerate() {
            let value = data.cell_value(row_idx - 1, col_idx);

            sheet_data.extend_from_slice(b"<c r=\"");
            sheet_data.extend_from_slice(col_letter);
            sheet_data.extend_from_slice(row_bytes);

            // NaN and infinities have no cell representation
            if value.is_null() || matches!(value, Value::Number(n) if !n.is_finite()) {
                sheet_data.extend_from_slice(b"\" s=\"1\"/>");
                data.dictionary_mut().has_non_string_values = true;
                continue;
            }

            match data.dictionary_mut().save_value(value, col_idx, false) {
                Some(index) => {
                    sheet_data.extend_from_slice(b"\" t=\"s\"><v>");
                    sheet_data.extend_from_slice(int_buf.format(index).as_bytes());
                    sheet_data.extend_from_slice(b"</v></c>");
                }
                None => {
                    sheet_data.extend_from_slice(b"\" s=\"1\"><v>");
                    xml_escape_into(value.to_string().as_bytes(), &mut sheet_data);
                    sheet_data.extend_from_slice(b"</v></c>");
                }
            }
        }
        sheet_data.extend_from_slice(b"</row>");
    }
    sheet_data.extend_from_slice(b"</sheetData>");
    sheet_data
}

/// Column widths; the sheet data must be rendered first so measured widths are final.
fn write_cols(data: &WorksheetData, sheet: &mut Vec<u8>) {
    let fixed = data.options().column_width();
    let mut cols = Vec::with_capacity(data.column_count() * 56);
    cols.extend_from_slice(b"<cols>");
    for (i, measured) in data.dictionary().column_widths().iter().enumerate() {
        let width = fixed.unwrap_or_else(|| (measured / 96.0 * 14.4).max(MIN_COLUMN_WIDTH));
        let n = itoa::Buffer::new().format(i + 1).to_string();
        cols.extend_from_slice(b"<col min=\"");
        cols.extend_from_slice(n.as_bytes());
        cols.extend_from_slice(b"\" max=\"");
        cols.extend_from_slice(n.as_bytes());
        cols.extend_from_slice(b"\" width=\"");
        cols.extend_from_slice(format_number(width).as_bytes());
        cols.extend_from_slice(b"\" customWidth=\"1\"/>");
    }
    cols.extend_from_slice(b"</cols>");
    sheet.extend_from_slice(&cols);
}

pub fn generate_table_xml(data: &WorksheetData) -> String {
    let mut dimension = Vec::with_capacity(16);
    write_dimension(data, &mut dimension);
    let dimension = String::from_utf8(dimension).unwrap_or_default();
    let keys = data.keys();

    let mut xml = String::with_capacity(600 + keys.len() * 48);
    xml.push_str(XML_DECLARATION);
    xml.push_str("<table xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" id=\"1\" name=\"Table1\" displayName=\"Table1\" ref=\"");
    xml.push_str(&dimension);
    xml.push_str("\" totalsRowShown=\"0\"><autoFilter ref=\"");
    xml.push_str(&dimension);
    xml.push_str("\"/>");

    if let Some(sort) = data.sort() {
        if let Some(col) = keys.iter().position(|k| *k == sort.field_name) {
            let last_col = excel_column(data.column_count() - 1);
            let sort_col = excel_column(col);
            let rows = data.row_count();
            let descending = match sort.direction {
                SortDirection::Ascending => 0,
                SortDirection::Descending => 1,
            };
            xml.push_str(&format!(
                "<sortState ref=\"A2:{last_col}{rows}\"><sortCondition descending=\"{descending}\" ref=\"{sort_col}2:{sort_col}{rows}\"/></sortState>"
            ));
        }
    }

    xml.push_str("<tableColumns count=\"");
    xml.push_str(itoa::Buffer::new().format(keys.len()));
    xml.push_str("\">");
    for (i, key) in keys.iter().enumerate() {
        xml.push_str("<tableColumn id=\"");
        xml.push_str(itoa::Buffer::new().format(i + 1));
        xml.push_str("\" name=\"");
        xml.push_str(&xml_escape(key));
        xml.push_str("\"/>");
    }
    xml.push_str("</tableColumns>");
    xml.push_str("<tableStyleInfo name=\"TableStyleMedium2\" showFirstColumn=\"0\" showLastColumn=\"0\" showRowStripes=\"1\" showColumnStripes=\"0\"/></table>");
    xml
}

const THEME_XML: &str = r##"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme"><a:themeElements><a:clrScheme name="Office"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="44546A"/></a:dk2><a:lt2><a:srgbClr val="E7E6E6"/></a:lt2><a:accent1><a:srgbClr val="5B9BD5"/></a:accent1><a:accent2><a:srgbClr val="ED7D31"/></a:accent2><a:accent3><a:srgbClr val="A5A5A5"/></a:accent3><a:accent4><a:srgbClr val="FFC000"/></a:accent4><a:accent5><a:srgbClr val="4472C4"/></a:accent5><a:accent6><a:srgbClr val="70AD47"/></a:accent6><a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink></a:clrScheme><a:fontScheme name="Office"><a:majorFont><a:latin typeface="Calibri Light" panose="020F0302020204030204"/><a:ea typeface=""/><a:cs typeface=""/><a:font script="Jpan" typeface="游ゴシック Light"/><a:font script="Hang" typeface="맑은 고딕"/><a:font script="Hans" typeface="等线 Light"/><a:font script="Hant" typeface="新細明體"/><a:font script="Arab" typeface="Times New Roman"/><a:font script="Hebr" typeface="Times New Roman"/><a:font script="Thai" typeface="Tahoma"/><a:font script="Ethi" typeface="Nyala"/><a:font script="Beng" typeface="Vrinda"/><a:font script="Gujr" typeface="Shruti"/><a:font script="Khmr" typeface="MoolBoran"/><a:font script="Knda" typeface="Tunga"/><a:font script="Guru" typeface="Raavi"/><a:font script="Cans" typeface="Euphemia"/><a:font script="Cher" typeface="Plantagenet Cherokee"/><a:font script="Yiii" typeface="Microsoft Yi Baiti"/><a:font script="Tibt" typeface="Microsoft Himalaya"/><a:font script="Thaa" typeface="MV Boli"/><a:font script="Deva" typeface="Mangal"/><a:font script="Telu" typeface="Gautami"/><a:font script="Taml" typeface="Latha"/><a:font script="Syrc" typeface="Estrangelo Edessa"/><a:font script="Orya" typeface="Kalinga"/><a:font script="Mlym" typeface="Kartika"/><a:font script="Laoo" typeface="DokChampa"/><a:font script="Sinh" typeface="Iskoola Pota"/><a:font script="Mong" typeface="Mongolian Baiti"/><a:font script="Viet" typeface="Times New Roman"/><a:font script="Uigh" typeface="Microsoft Uighur"/><a:font script="Geor" typeface="Sylfaen"/></a:majorFont><a:minorFont><a:latin typeface="Calibri" panose="020F0502020204030204"/><a:ea typeface=""/><a:cs typeface=""/><a:font script="Jpan" typeface="游ゴシック"/><a:font script="Hang" typeface="맑은 고딕"/><a:font script="Hans" typeface="等线"/><a:font script="Hant" typeface="新細明體"/><a:font script="Arab" typeface="Arial"/><a:font script="Hebr" typeface="Arial"/><a:font script="Thai" typeface="Tahoma"/><a:font script="Ethi" typeface="Nyala"/><a:font script="Beng" typeface="Vrinda"/><a:font script="Gujr" typeface="Shruti"/><a:font script="Khmr" typeface="DaunPenh"/><a:font script="Knda" typeface="Tunga"/><a:font script="Guru" typeface="Raavi"/><a:font script="Cans" typeface="Euphemia"/><a:font script="Cher" typeface="Plantagenet Cherokee"/><a:font script="Yiii" typeface="Microsoft Yi Baiti"/><a:font script="Tibt" typeface="Microsoft Himalaya"/><a:font script="Thaa" typeface="MV Boli"/><a:font script="Deva" typeface="Mangal"/><a:font script="Telu" typeface="Gautami"/><a:font script="Taml" typeface="Latha"/><a:font script="Syrc" typeface="Estrangelo Edessa"/><a:font script="Orya" typeface="Kalinga"/><a:font script="Mlym" typeface="Kartika"/><a:font script="Laoo" typeface="DokChampa"/><a:font script="Sinh" typeface="Iskoola Pota"/><a:font script="Mong" typeface="Mongolian Baiti"/><a:font script="Viet" typeface="Arial"/><a:font script="Uigh" typeface="Microsoft Uighur"/><a:font script="Geor" typeface="Sylfaen"/></a:minorFont></a:fontScheme><a:fmtScheme name="Office"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:gradFill rotWithShape="1"><a:gsLst><a:gs pos="0"><a:schemeClr val="phClr"><a:lumMod val="110000"/><a:satMod val="105000"/><a:tint val="67000"/></a:schemeClr></a:gs><a:gs pos="50000"><a:schemeClr val="phClr"><a:lumMod val="105000"/><a:satMod val="103000"/><a:tint val="73000"/></a:schemeClr></a:gs><a:gs pos="100000"><a:schemeClr val="phClr"><a:lumMod val="105000"/><a:satMod val="109000"/><a:tint val="81000"/></a:schemeClr></a:gs></a:gsLst><a:lin ang="5400000" scaled="0"/></a:gradFill><a:gradFill rotWithShape="1"><a:gsLst><a:gs pos="0"><a:schemeClr val="phClr"><a:satMod val="103000"/><a:lumMod val="102000"/><a:tint val="94000"/></a:schemeClr></a:gs><a:gs pos="50000"><a:schemeClr val="phClr"><a:satMod val="110000"/><a:lumMod val="100000"/><a:shade val="100000"/></a:schemeClr></a:gs><a:gs pos="100000"><a:schemeClr val="phClr"><a:lumMod val="99000"/><a:satMod val="120000"/><a:shade val="78000"/></a:schemeClr></a:gs></a:gsLst><a:lin ang="5400000" scaled="0"/></a:gradFill></a:fillStyleLst><a:lnStyleLst><a:ln w="6350" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln><a:ln w="12700" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln><a:ln w="19050" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst><a:outerShdw blurRad="57150" dist="19050" dir="5400000" algn="ctr" rotWithShape="0"><a:srgbClr val="000000"><a:alpha val="63000"/></a:srgbClr></a:outerShdw></a:effectLst></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"><a:tint val="95000"/><a:satMod val="170000"/></a:schemeClr></a:solidFill><a:gradFill rotWithShape="1"><a:gsLst><a:gs pos="0"><a:schemeClr val="phClr"><a:tint val="93000"/><a:satMod val="150000"/><a:shade val="98000"/><a:lumMod val="102000"/></a:schemeClr></a:gs><a:gs pos="50000"><a:schemeClr val="phClr"><a:tint val="98000"/><a:satMod val="130000"/><a:shade val="90000"/><a:lumMod val="103000"/></a:schemeClr></a:gs><a:gs pos="100000"><a:schemeClr val="phClr"><a:shade val="63000"/><a:satMod val="120000"/></a:schemeClr></a:gs></a:gsLst><a:lin ang="5400000" scaled="0"/></a:gradFill></a:bgFillStyleLst></a:fmtScheme></a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/><a:extLst><a:ext uri="{05A4C25C-085E-4340-85A3-A5531E510DB2}"><thm15:themeFamily xmlns:thm15="http://schemas.microsoft.com/office/thememl/2012/main" name="Office Theme" id="{62F939B6-93AF-4DB8-9C6B-D6C7DFDC589F}" vid="{4A3C46E8-61CC-4603-A589-7422A47A8E4A}"/></a:ext></a:extLst></a:theme>"##;
