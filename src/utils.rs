//! formatting helpers for listings

/// format bytes in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    const SCALED_UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = SCALED_UNITS[0];
    for next in &SCALED_UNITS[1..] {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }

    format!("{size:.2} {unit}")
}

/// one listing line: size column (or `dir`) followed by the entry path
pub fn format_entry_line(path: &str, size: u64, is_dir: bool) -> String {
    let size_str = if is_dir {
        "dir".to_string()
    } else {
        format_bytes(size)
    };
    format!("{size_str:>10} {path}")
}
