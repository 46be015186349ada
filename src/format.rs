use chrono::NaiveDate;

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const K: u64 = 1024;

/// Human-readable size: base 1024, at most two decimals, capped at GB.
///
/// `0` renders as `"0 Bytes"`, `1024` as `"1 KB"`, `2_500_000` as `"2.38 MB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // floor(log_1024(bytes)) without float error at exact powers
    let mut unit_index = 0;
    let mut divisor = 1u64;
    while unit_index < UNITS.len() - 1 && bytes >= divisor * K {
        divisor *= K;
        unit_index += 1;
    }

    let value = (bytes as f64 / divisor as f64 * 100.0).round() / 100.0;
    format!("{} {}", value, UNITS[unit_index])
}

/// Day-month-year with dots, e.g. `16.10.2026`.
pub fn format_upload_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
