use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SkylistError};

/// Zero-based column assignment for one catalog variant, plus the field
/// delimiter. Passed explicitly into the parser, driver and formatter;
/// nothing in this crate reads layout from ambient state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub delimiter: char,
    pub id_column: usize,
    pub ra_column: usize,
    pub dec_column: usize,
    pub brightness_column: usize,
}

impl ColumnLayout {
    /// Highest column index a data row must reach to be usable.
    pub fn max_column(&self) -> usize {
        self.id_column
            .max(self.ra_column)
            .max(self.dec_column)
            .max(self.brightness_column)
    }
}

impl Default for ColumnLayout {
    /// Gaia-style TSV layout (ra_ep2000, dec_ep2000, phot_g_mean_flux).
    fn default() -> Self {
        Self {
            delimiter: '\t',
            id_column: 7,
            ra_column: 0,
            dec_column: 1,
            brightness_column: 20,
        }
    }
}

/// Catalog description loaded from a TOML config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub layout: ColumnLayout,
    /// Lines starting with this marker are excluded before parsing.
    #[serde(default = "default_comment_marker")]
    pub comment_marker: char,
}

fn default_comment_marker() -> char {
    '#'
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            layout: ColumnLayout::default(),
            comment_marker: default_comment_marker(),
        }
    }
}

/// Buffered, forward-only reader over a flat-file catalog.
///
/// `open` consumes comment lines and the header row; the iterator then
/// yields raw data lines only, so the record parser never sees either.
#[derive(Debug)]
pub struct CatalogReader {
    lines: Lines<BufReader<File>>,
    headers: Vec<String>,
    comment_marker: char,
}

impl CatalogReader {
    pub fn open(path: &Path, config: &CatalogConfig) -> Result<CatalogReader> {
        if !path.is_file() {
            return Err(SkylistError::CatalogNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let mut lines = BufReader::new(file).lines();

        // The first non-comment, non-blank line is the header row.
        let mut headers = Vec::new();
        for line in lines.by_ref() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with(config.comment_marker) {
                debug!(%line, "skipping comment line before header");
                continue;
            }
            headers = line
                .split(config.layout.delimiter)
                .map(str::to_string)
                .collect();
            break;
        }

        Ok(CatalogReader {
            lines,
            headers,
            comment_marker: config.comment_marker,
        })
    }

    /// Column names from the header row, in file order. Empty when the
    /// catalog held no header at all.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Iterator for CatalogReader {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    if line.trim().is_empty() || line.starts_with(self.comment_marker) {
                        continue;
                    }
                    return Some(Ok(line));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
