use crate::catalog::ColumnLayout;
use crate::error::ParseError;

/// One catalog entry.
///
/// `brightness` follows a "larger is brighter" convention fixed once per
/// run by the caller (raw flux satisfies it directly; magnitudes must be
/// inverted by the operator's column choice, not by this crate).
#[derive(Clone, Debug)]
pub struct Star {
    pub id: String,
    /// Right ascension in catalog-native degrees. Not range-clamped.
    pub ra: f64,
    /// Declination in catalog-native degrees. Not range-clamped.
    pub dec: f64,
    pub brightness: f64,
    /// Distance from the query center. Unset during selection; assigned
    /// exactly once by the driver after the stream is exhausted.
    pub distance: Option<f64>,
}

impl Star {
    /// Parse one data line against the given column layout.
    ///
    /// The line must already have survived comment/header filtering by
    /// the catalog reader; this function only checks field count and
    /// numeric validity.
    pub fn parse(line: &str, layout: &ColumnLayout) -> Result<Star, ParseError> {
        let fields: Vec<&str> = line.split(layout.delimiter).collect();
        let required = layout.max_column() + 1;
        if fields.len() < required {
            return Err(ParseError::MalformedRow {
                found: fields.len(),
                required,
            });
        }

        let ra = parse_finite(fields[layout.ra_column], layout.ra_column)?;
        let dec = parse_finite(fields[layout.dec_column], layout.dec_column)?;
        let brightness = parse_finite(fields[layout.brightness_column], layout.brightness_column)?;

        Ok(Star {
            id: fields[layout.id_column].to_string(),
            ra,
            dec,
            brightness,
            distance: None,
        })
    }

    /// Render this star as one result row: distance, id, ra, dec,
    /// magnitude, joined by `delimiter`. An unassigned distance renders
    /// as an empty field.
    pub fn to_row(&self, delimiter: char) -> String {
        let distance = self.distance.map(|d| d.to_string()).unwrap_or_default();
        let fields = [
            distance,
            self.id.clone(),
            self.ra.to_string(),
            self.dec.to_string(),
            self.brightness.to_string(),
        ];
        fields.join(&delimiter.to_string())
    }
}

fn parse_finite(raw: &str, column: usize) -> Result<f64, ParseError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            column,
            value: raw.to_string(),
        })
}
