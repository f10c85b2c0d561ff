//! Byte-level helpers for reading source files.

use std::borrow::Cow;

use memchr::memmem;

/// How far into a file an encoding declaration is looked for.
const DECLARATION_WINDOW: usize = 1024;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (from an XML declaration or a
///    `<meta charset>`)
/// 3. Falls back to Windows-1252, a superset of ISO-8859-1
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Decode a file, honouring the encoding it declares about itself.
pub fn decode_document(bytes: &[u8]) -> Cow<'_, str> {
    decode_text(bytes, declared_encoding(bytes))
}

/// Find the encoding named by `<?xml encoding="…"?>` or by a
/// `charset=` in a `<meta>` element near the start of `bytes`.
pub fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    let window = &bytes[..bytes.len().min(DECLARATION_WINDOW)];
    extract_xml_encoding(window).or_else(|| extract_meta_charset(window))
}

/// Extract encoding from XML declaration.
pub fn extract_xml_encoding(bytes: &[u8]) -> Option<&str> {
    let xml_start = memmem::find(bytes, b"<?xml")?;
    let declaration = &bytes[xml_start..];
    let declaration = &declaration[..memmem::find(declaration, b"?>")?];

    let enc_pos = find_ignore_case(declaration, b"encoding=")?;
    quoted_value(&declaration[enc_pos + b"encoding=".len()..])
}

/// Extract the `charset=` value of an HTML `<meta>` element.
///
/// Covers both `<meta charset="…">` and the older
/// `<meta http-equiv="Content-Type" content="text/html; charset=…">`.
pub fn extract_meta_charset(bytes: &[u8]) -> Option<&str> {
    let meta = find_ignore_case(bytes, b"<meta")?;
    let rest = &bytes[meta..];
    let charset = find_ignore_case(rest, b"charset=")?;
    let value = &rest[charset + b"charset=".len()..];

    if let Some(quoted) = quoted_value(value) {
        return Some(quoted.trim());
    }
    let end = value
        .iter()
        .position(|&b| matches!(b, b'"' | b'\'' | b';' | b'>' | b' ' | b'/'))
        .unwrap_or(value.len());
    let name = std::str::from_utf8(&value[..end]).ok()?.trim();
    (!name.is_empty()).then_some(name)
}

fn quoted_value(bytes: &[u8]) -> Option<&str> {
    let (&quote, rest) = bytes.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let end = memchr::memchr(quote, rest)?;
    std::str::from_utf8(&rest[..end]).ok()
}

fn find_ignore_case(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
}
