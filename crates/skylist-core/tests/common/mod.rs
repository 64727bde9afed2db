use skylist_core::catalog::{CatalogConfig, ColumnLayout};
use skylist_core::star::Star;

/// Compact layout used by the synthetic catalogs in these tests:
/// id, ra, dec, brightness, tab-separated.
pub fn test_layout() -> ColumnLayout {
    ColumnLayout {
        delimiter: '\t',
        id_column: 0,
        ra_column: 1,
        dec_column: 2,
        brightness_column: 3,
    }
}

pub fn test_config() -> CatalogConfig {
    CatalogConfig {
        layout: test_layout(),
        comment_marker: '#',
    }
}

pub fn star(id: &str, ra: f64, dec: f64, brightness: f64) -> Star {
    Star {
        id: id.to_string(),
        ra,
        dec,
        brightness,
        distance: None,
    }
}

/// Build catalog file content: a header row followed by the given data
/// rows, matching `test_layout`.
pub fn catalog_content(rows: &[&str]) -> String {
    let mut out = String::from("id\tra\tdec\tbrightness\n");
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

/// Wrap raw data lines the way the catalog reader yields them, for
/// feeding `run_query` without touching the filesystem.
pub fn data_lines(rows: &[&str]) -> Vec<std::io::Result<String>> {
    rows.iter().map(|row| Ok(row.to_string())).collect()
}
