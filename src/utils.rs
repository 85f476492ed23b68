use crate::types::{Row, Value};
use indexmap::IndexSet;

/// Header used for rows that are bare scalars rather than keyed records.
pub const SPECIAL_DATA_KEY: &str = "Column 1";

/// Union of the keys of every row, in first-seen order.
///
/// Special data (first row is a scalar) yields the single [`SPECIAL_DATA_KEY`].
pub fn get_keys_from_data(rows: &[Row]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }
    if is_special_data(rows) {
        return vec![SPECIAL_DATA_KEY.to_string()];
    }

    let mut keys: IndexSet<&str> = IndexSet::new();
    for record in rows.iter().filter_map(Row::as_record) {
        keys.extend(record.keys().map(String::as_str));
    }
    keys.into_iter().map(str::to_string).collect()
}

/// Only the first row is inspected; mixed row sets are not detected.
pub fn is_special_data(rows: &[Row]) -> bool {
    matches!(rows.first(), Some(Row::Value(_)))
}

pub fn has_value(value: &Value) -> bool {
    !value.is_null()
}

/// Byte-per-char conversion of a binary string (e.g. a decoded base64 payload).
pub fn string_to_byte_buffer(s: &str) -> Vec<u8> {
    s.chars().map(|c| (c as u32 & 0xFF) as u8).collect()
}

/// Locale-independent number text in the default string coercion form:
/// plain decimals for magnitudes in `[1e-6, 1e21)`, exponent form with an
/// explicit sign (`1e+21`, `1.5e-7`) outside it.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.fract() == 0.0 && n.abs() < 9007199254740992.0 {
        return itoa::Buffer::new().format(n as i64).to_string();
    }

    let mut ryu_buf = ryu::Buffer::new();
    let shortest = ryu_buf.format_finite(n.abs());
    let (digits, point) = decimal_digits(shortest);

    let mut out = String::with_capacity(digits.len() + 8);
    if n < 0.0 {
        out.push('-');
    }
    let k = digits.len() as i32;
    if k <= point && point <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((point - k) as usize));
    } else if 0 < point && point <= 21 {
        out.push_str(&digits[..point as usize]);
        out.push('.');
        out.push_str(&digits[point as usize..]);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(&digits);
    } else {
        out.push_str(&digits[..1]);
        if k > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let exponent = point - 1;
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(itoa::Buffer::new().format(exponent.unsigned_abs()));
    }
    out
}

/// Significant digits of a positive ryu rendering and the position of the
/// decimal point relative to them (value = 0.DIGITS x 10^point).
fn decimal_digits(shortest: &str) -> (String, i32) {
    let (mantissa, exponent) = match shortest.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (shortest, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all: String = int_part.chars().chain(frac_part.chars()).collect();
    let leading = all.len() - all.trim_start_matches('0').len();
    let digits = all.trim_start_matches('0').trim_end_matches('0').to_string();
    let point = int_part.len() as i32 - leading as i32 + exponent;
    (digits, point)
}

/// XML entity escaping of `& < > " '`
#[inline(always)]
pub fn xml_escape_into(input: &[u8], output: &mut Vec<u8>) {
    let needs_escape = memchr::memchr3(b'&', b'<', b'>', input).is_some()
        || memchr::memchr2(b'"', b'\'', input).is_some();

    if !needs_escape {
        output.extend_from_slice(input);
        return;
    }

    let mut last = 0;
    for (pos, byte) in input.iter().enumerate() {
        let escape: &[u8] = match byte {
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            b'"' => b"&quot;",
            b'\'' => b"&apos;",
            _ => continue,
        };
        output.extend_from_slice(&input[last..pos]);
        output.extend_from_slice(escape);
        last = pos + 1;
    }
    output.extend_from_slice(&input[last..]);
}

pub fn xml_escape(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    xml_escape_into(input.as_bytes(), &mut out);
    // Only ASCII bytes were substituted, so the buffer is still UTF-8.
    String::from_utf8(out).unwrap_or_default()
}

/// Append the column letters of a 0-based column index ("A", "Z", "AA", ...).
pub fn write_col_letter(col: usize, buf: &mut Vec<u8>) {
    let mut stack = [0u8; 8];
    let mut len = 0;
    let mut col = col;

    loop {
        stack[len] = b'A' + (col % 26) as u8;
        len += 1;
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    buf.extend(stack[..len].iter().rev());
}

pub fn excel_column(col: usize) -> String {
    let mut buf = Vec::with_capacity(3);
    write_col_letter(col, &mut buf);
    String::from_utf8(buf).unwrap_or_default()
}

/// Write a cell reference such as "B12" (`row` is 1-based).
#[inline(always)]
pub fn write_cell_ref(col: usize, row: usize, buf: &mut Vec<u8>) {
    write_col_letter(col, buf);
    buf.extend_from_slice(itoa::Buffer::new().format(row).as_bytes());
}
