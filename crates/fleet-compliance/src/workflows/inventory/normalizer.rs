/// Collapse a column header to its comparable form: "Serial Number",
/// "serial_number" and "\u{feff}SerialNumber" all become "serialnumber".
pub(crate) fn normalize_header(value: &str) -> String {
    value
        .replace(['\u{feff}', '\u{200b}'], "")
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}
