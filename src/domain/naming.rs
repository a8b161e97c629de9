//! Date-based default output file naming.
//!
//! The default output name inserts today's date between the source file's
//! stem and extension, so `report.txt` processed on 2025-07-28 becomes
//! `report_2025_07_28.txt`.

use chrono::{Local, NaiveDate};
use std::path::Path;

/// Derives the default output file name for a source path.
///
/// Returns the empty string when no source is set. The date is read from
/// the local system clock at call time, never cached, so two calls within
/// the same calendar day produce identical output.
pub fn default_output_name(source: Option<&Path>) -> String {
    match source {
        Some(path) => output_name_for_date(path, Local::now().date_naive()),
        None => String::new(),
    }
}

/// Derives the output name for an explicit calendar date.
///
/// The base filename is split into (stem, extension) at the last dot; the
/// extension keeps its leading dot, a filename without a dot yields an
/// empty extension, and a leading dot (as in `.bashrc`) belongs to the stem.
pub fn output_name_for_date(source: &Path, date: NaiveDate) -> String {
    let base_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (stem, ext) = match base_name.rfind('.') {
        Some(idx) if idx > 0 => base_name.split_at(idx),
        _ => (base_name.as_str(), ""),
    };

    format!("{}_{}{}", stem, date.format("%Y_%m_%d"), ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 28).unwrap()
    }

    #[test]
    fn test_name_with_extension() {
        let name = output_name_for_date(Path::new("/data/sample_00.txt"), fixed_date());
        assert_eq!(name, "sample_00_2025_07_28.txt");
    }

    #[test]
    fn test_name_without_extension() {
        let name = output_name_for_date(Path::new("/data/README"), fixed_date());
        assert_eq!(name, "README_2025_07_28");
    }

    #[test]
    fn test_splits_at_last_dot() {
        let name = output_name_for_date(Path::new("archive.tar.gz"), fixed_date());
        assert_eq!(name, "archive.tar_2025_07_28.gz");
    }

    #[test]
    fn test_leading_dot_belongs_to_stem() {
        let name = output_name_for_date(Path::new(".bashrc"), fixed_date());
        assert_eq!(name, ".bashrc_2025_07_28");
    }

    #[test]
    fn test_unset_source_yields_empty_string() {
        assert_eq!(default_output_name(None), "");
    }

    #[test]
    fn test_same_day_calls_are_identical() {
        let path = PathBuf::from("notes.md");
        // Same-day determinism; a midnight rollover between the two calls
        // would be astronomically unlucky in a test run.
        assert_eq!(
            default_output_name(Some(&path)),
            default_output_name(Some(&path))
        );
    }

    #[test]
    fn test_date_format_in_default_name() {
        let name = default_output_name(Some(Path::new("a.txt")));
        // a_yyyy_mm_dd.txt
        assert_eq!(name.len(), "a_2025_07_28.txt".len());
        assert!(name.starts_with("a_"));
        assert!(name.ends_with(".txt"));
    }
}
