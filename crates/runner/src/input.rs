//! Reading row-groups from the tabular input source
//!
//! Two layouts are accepted:
//!
//! - a single CSV file with `sheet` and `url` columns, where consecutive
//!   rows sharing a `sheet` value form one group (first-appearance order
//!   is the enumeration order used for assignment), or
//! - a directory of `*.csv` files, one group per file named by file stem,
//!   each carrying a `url` column; files enumerate in lexicographic order.
//!
//! Groups that end up with zero URLs are dropped, matching the source
//! suite's behavior of skipping empty sheets.

use std::path::Path;

use tracing::{debug, info};

use pagesweep_common::{Error, Result, RowGroup};

/// Column holding the page URL
const URL_COLUMN: &str = "url";

/// Column naming the group in the single-file layout
const SHEET_COLUMN: &str = "sheet";

/// Load all row-groups from the input source, in stable order.
pub fn load_row_groups(path: &Path) -> Result<Vec<RowGroup>> {
    if path.is_dir() {
        load_from_dir(path)
    } else {
        load_from_file(path)
    }
}

fn load_from_file(path: &Path) -> Result<Vec<RowGroup>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::InputSource(format!("{}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::InputSource(format!("{}: {}", path.display(), e)))?
        .clone();
    let sheet_idx = column_index(&headers, SHEET_COLUMN, path)?;
    let url_idx = column_index(&headers, URL_COLUMN, path)?;

    let mut groups: Vec<RowGroup> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::InputSource(format!("{}: {}", path.display(), e)))?;
        let sheet = record.get(sheet_idx).unwrap_or("").trim();
        let url = record.get(url_idx).unwrap_or("").trim();
        if sheet.is_empty() || url.is_empty() {
            continue;
        }

        match groups.iter_mut().find(|g| g.name == sheet) {
            Some(group) => group.urls.push(url.to_string()),
            None => groups.push(RowGroup::new(sheet, vec![url.to_string()])),
        }
    }

    info!(
        "Read {} group(s) from {}",
        groups.len(),
        path.display()
    );
    Ok(groups)
}

fn load_from_dir(dir: &Path) -> Result<Vec<RowGroup>> {
    let mut files: Vec<_> = walkdir::WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|ext| ext == "csv").unwrap_or(false))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();

    let mut groups = Vec::new();
    for file in files {
        let name = file
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let urls = read_url_column(&file)?;
        debug!("Found {} URLs in group {}", urls.len(), name);
        if !urls.is_empty() {
            groups.push(RowGroup::new(name, urls));
        }
    }

    info!("Read {} group(s) from {}", groups.len(), dir.display());
    Ok(groups)
}

fn read_url_column(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::InputSource(format!("{}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::InputSource(format!("{}: {}", path.display(), e)))?
        .clone();
    let url_idx = column_index(&headers, URL_COLUMN, path)?;

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::InputSource(format!("{}: {}", path.display(), e)))?;
        let url = record.get(url_idx).unwrap_or("").trim();
        if !url.is_empty() {
            urls.push(url.to_string());
        }
    }
    Ok(urls)
}

fn column_index(headers: &csv::StringRecord, column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(column))
        .ok_or_else(|| {
            Error::InputSource(format!(
                "{}: missing required column \"{}\"",
                path.display(),
                column
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_grouped_file_preserves_first_appearance_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "input.csv",
            "sheet,url\n\
             dcPages2,https://www.example.com/de/a\n\
             dcPages1,https://www.example.com/us/a\n\
             dcPages2,https://www.example.com/de/b\n",
        );

        let groups = load_row_groups(&path).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "dcPages2");
        assert_eq!(groups[0].urls.len(), 2);
        assert_eq!(groups[1].name, "dcPages1");
        assert_eq!(groups[1].urls, vec!["https://www.example.com/us/a"]);
    }

    #[test]
    fn test_blank_cells_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "input.csv",
            "sheet,url\n\
             dcPages1,https://www.example.com/us/a\n\
             dcPages1,\n\
             ,https://www.example.com/orphan\n",
        );

        let groups = load_row_groups(&path).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].urls.len(), 1);
    }

    #[test]
    fn test_missing_url_column_is_input_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "input.csv", "sheet,link\ndcPages1,x\n");

        assert!(matches!(
            load_row_groups(&path),
            Err(Error::InputSource(_))
        ));
    }

    #[test]
    fn test_unreadable_path_is_input_source_error() {
        assert!(matches!(
            load_row_groups(Path::new("/nonexistent/input.csv")),
            Err(Error::InputSource(_))
        ));
    }

    #[test]
    fn test_directory_layout_one_group_per_file() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "dcPages2.csv",
            "url\nhttps://www.example.com/de/a\n",
        );
        write_file(
            dir.path(),
            "dcPages1.csv",
            "url\nhttps://www.example.com/us/a\nhttps://www.example.com/us/b\n",
        );
        write_file(dir.path(), "notes.txt", "ignored\n");
        write_file(dir.path(), "empty.csv", "url\n");

        let groups = load_row_groups(dir.path()).unwrap();
        assert_eq!(groups.len(), 2);
        // Lexicographic file order
        assert_eq!(groups[0].name, "dcPages1");
        assert_eq!(groups[0].urls.len(), 2);
        assert_eq!(groups[1].name, "dcPages2");
    }
}
