//! CSV output: one header row and one record per run

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::pipeline::content::ProductContent;

/// Render the header row and a single record.
/// Fields are quoted only when they contain a delimiter, quote or newline.
pub fn render_csv(content: &ProductContent) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .serialize(content)
        .context("failed to serialize product content as CSV")?;

    writer
        .into_inner()
        .map_err(|e| anyhow!("failed to flush CSV buffer: {}", e.error()))
}

/// Write the CSV file, creating or replacing `path`.
///
/// The bytes go to a temporary file next to `path` which is then renamed over
/// it, so a failed write never leaves a partial CSV behind. Parent
/// directories are created when missing; an existing file's permissions are
/// carried over.
pub fn save_csv(content: &ProductContent, path: &Path) -> Result<()> {
    let bytes = render_csv(content)?;

    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
            parent
        }
        None => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to create temporary file in {}", parent.display()))?;
    tmp.write_all(&bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .with_context(|| format!("failed to write temporary file for {}", path.display()))?;

    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .with_context(|| format!("failed to copy permissions of {}", path.display()))?;
    }

    tmp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn content(article: &str) -> ProductContent {
        ProductContent::assemble(
            "Widget",
            "Best Widget Ever".to_string(),
            &["widget".to_string(), "durable".to_string()],
            article.to_string(),
            "Short".to_string(),
            "- 1\n- 2".to_string(),
            "Meta".to_string(),
        )
    }

    #[test]
    fn test_header_row_uses_field_names() {
        let csv = String::from_utf8(render_csv(&content("Plain")).unwrap()).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, ProductContent::FIELD_NAMES.join(","));
    }

    #[test]
    fn test_quotes_fields_with_commas_quotes_and_newlines() {
        let csv = String::from_utf8(render_csv(&content("He said \"hi\"")).unwrap()).unwrap();
        assert!(csv.contains("\"widget, durable\""));
        assert!(csv.contains("\"He said \"\"hi\"\"\""));
        assert!(csv.contains("\"- 1\n- 2\""));
        assert!(csv.ends_with("Meta\n"));
    }

    #[test]
    fn test_two_records_with_seven_fields() {
        let bytes = render_csv(&content("Line one.\nLine two, continued.")).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes.as_slice());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.len() == 7));
        assert_eq!(&records[1][3], "Line one.\nLine two, continued.");
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("product_content.csv");
        fs::write(&path, "stale content that is much longer than nothing\n".repeat(100)).unwrap();

        save_csv(&content("Plain"), &path).unwrap();

        let written = fs::read(&path).unwrap();
        assert_eq!(written, render_csv(&content("Plain")).unwrap());
    }

    #[test]
    fn test_save_leaves_no_temporary_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("product_content.csv");
        save_csv(&content("Plain"), &path).unwrap();
        save_csv(&content("Again"), &path).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(fs::read(&path).unwrap(), render_csv(&content("Again")).unwrap());
    }

    #[test]
    fn test_failed_save_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        // A directory at the destination makes the final rename fail
        let path = dir.path().join("product_content.csv");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "previous").unwrap();

        assert!(save_csv(&content("Plain"), &path).is_err());

        assert_eq!(fs::read_to_string(path.join("keep.txt")).unwrap(), "previous");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "temporary file left behind");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("nested").join("copy.csv");
        save_csv(&content("Plain"), &path).unwrap();
        assert!(path.exists());
    }
}
