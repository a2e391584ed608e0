//! Record export helpers shared by the CLI binaries.

use chrono::{DateTime, Utc};

/// File name for an exported record: `path-<timestamp>.json`, with the
/// characters filesystems dislike replaced by dashes.
pub fn export_filename(created_at: DateTime<Utc>) -> String {
    format!(
        "path-{}.json",
        created_at.to_rfc3339().replace([':', '.'], "-")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filename_has_no_colons_or_dots_before_the_extension() {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let name = export_filename(at);

        assert!(name.starts_with("path-2025-03-14T09-26-53"));
        assert!(name.ends_with(".json"));
        assert!(!name.trim_end_matches(".json").contains(':'));
        assert!(!name.trim_end_matches(".json").contains('.'));
    }
}
