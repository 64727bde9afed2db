use crate::catalog::ColumnLayout;
use crate::error::{Result, SkylistError};
use crate::star::Star;

/// Result file columns, in order. The delimiter matches the input
/// catalog's.
pub const RESULT_COLUMNS: [&str; 5] = ["distance", "id", "ra", "dec", "magnitude"];

pub fn header(delimiter: char) -> String {
    RESULT_COLUMNS.join(&delimiter.to_string())
}

/// Render the final ordered short-list: header row plus one row per
/// star. Ordering is already final here; this stage never filters or
/// reorders.
///
/// Refuses zero records with `EmptyResult` so callers can tell "no
/// matches" apart from a failed write.
pub fn render(stars: &[Star], layout: &ColumnLayout) -> Result<String> {
    if stars.is_empty() {
        return Err(SkylistError::EmptyResult);
    }

    let mut out = String::new();
    out.push_str(&header(layout.delimiter));
    out.push('\n');
    for star in stars {
        out.push_str(&star.to_row(layout.delimiter));
        out.push('\n');
    }
    Ok(out)
}
