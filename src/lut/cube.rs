//! In-memory 3D LUT table and `.cube` text parsing.

use crate::error::CubeError;

/// Declared edge length assumed when a file omits `LUT_3D_SIZE`.
pub const DEFAULT_SIZE: usize = 33;

/// A parsed 3D lookup table: an ordered cubic grid of RGB triples.
///
/// Data rows follow standard `.cube` ordering, blue axis slowest and red
/// fastest: `index = b*size^2 + g*size + r`. A table whose row count does
/// not match `size^3` is still usable; the sampler clamps indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    /// Edge length of the cubic grid, >= 2.
    pub size: usize,
    /// RGB triples in [0, 1], file order.
    pub data: Vec<[f32; 3]>,
    /// Title from the `TITLE` line, empty if absent.
    pub title: String,
}

impl Lut3D {
    /// Identity table: every grid point maps to its own normalized
    /// coordinate, so applying it changes nothing.
    pub fn identity(size: usize) -> Self {
        let max = (size - 1) as f32;
        let mut data = Vec::with_capacity(size * size * size);
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    data.push([r as f32 / max, g as f32 / max, b as f32 / max]);
                }
            }
        }
        Self {
            size,
            data,
            title: String::from("identity"),
        }
    }

    /// True when the row count matches the declared size cubed.
    pub fn is_complete(&self) -> bool {
        self.data.len() == self.size.pow(3)
    }

    /// Serialize back to `.cube` text. Round-trips through [`parse_cube`].
    pub fn to_cube_string(&self) -> String {
        let mut out = String::new();
        if !self.title.is_empty() {
            out.push_str(&format!("TITLE \"{}\"\n", self.title));
        }
        out.push_str(&format!("LUT_3D_SIZE {}\n", self.size));
        for row in &self.data {
            out.push_str(&format!("{} {} {}\n", row[0], row[1], row[2]));
        }
        out
    }
}

/// Parse a `.cube` payload.
///
/// Comments and blank lines are skipped, `TITLE` and `LUT_3D_SIZE` are
/// honored, and every remaining line of exactly three floats is a data
/// row, clamped per channel to [0, 1]. Zero data rows is fatal; a row
/// count that disagrees with the declared size is only logged, and the
/// caller can see it via [`Lut3D::is_complete`].
pub fn parse_cube(text: &str) -> Result<Lut3D, CubeError> {
    let mut size = DEFAULT_SIZE;
    let mut title = String::new();
    let mut data: Vec<[f32; 3]> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("TITLE") {
            title = rest.trim().trim_matches('"').to_string();
            continue;
        }
        if let Some(rest) = line.strip_prefix("LUT_3D_SIZE") {
            if let Ok(n) = rest.trim().parse::<usize>() {
                if n < 2 {
                    return Err(CubeError::InvalidSize(n));
                }
                size = n;
            }
            continue;
        }

        let mut fields = [0.0f32; 3];
        let mut count = 0;
        let mut parseable = true;
        for token in line.split_whitespace() {
            if count == 3 {
                count += 1; // more than 3 tokens, not a data row
                break;
            }
            match token.parse::<f32>() {
                Ok(v) => {
                    fields[count] = v.clamp(0.0, 1.0);
                    count += 1;
                }
                Err(_) => {
                    parseable = false;
                    break;
                }
            }
        }
        if parseable && count == 3 {
            data.push(fields);
        }
        // anything else (DOMAIN_MIN, unknown keywords, junk) is ignored
    }

    if data.is_empty() {
        return Err(CubeError::NoData);
    }

    let expected = size.pow(3);
    if data.len() != expected {
        log::warn!(
            "LUT '{}': {} data rows, expected {} for size {}; indices will be clamped",
            title,
            data.len(),
            expected,
            size
        );
    }

    Ok(Lut3D { size, data, title })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY_CUBE: &str = "\
# simple test cube
TITLE \"tiny\"
LUT_3D_SIZE 2

0 0 0
1 0 0
0 1 0
1 1 0
0 0 1
1 0 1
0 1 1
1 1 1
";

    #[test]
    fn parses_title_size_and_rows() {
        let lut = parse_cube(TINY_CUBE).unwrap();
        assert_eq!(lut.title, "tiny");
        assert_eq!(lut.size, 2);
        assert_eq!(lut.data.len(), 8);
        assert!(lut.is_complete());
        // blue-slowest ordering: second row is r=1
        assert_eq!(lut.data[1], [1.0, 0.0, 0.0]);
        assert_eq!(lut.data[7], [1.0, 1.0, 1.0]);
    }

    #[test]
    fn missing_size_defaults_to_33() {
        let lut = parse_cube("0.5 0.5 0.5\n").unwrap();
        assert_eq!(lut.size, DEFAULT_SIZE);
        assert!(!lut.is_complete());
    }

    #[test]
    fn channels_clamped_to_unit_range() {
        let lut = parse_cube("LUT_3D_SIZE 2\n-0.5 1.5 0.25\n").unwrap();
        assert_eq!(lut.data[0], [0.0, 1.0, 0.25]);
    }

    #[test]
    fn no_data_rows_is_fatal() {
        let err = parse_cube("# nothing here\nTITLE \"empty\"\n").unwrap_err();
        assert!(matches!(err, CubeError::NoData));
    }

    #[test]
    fn declared_size_below_two_is_fatal() {
        let err = parse_cube("LUT_3D_SIZE 1\n0 0 0\n").unwrap_err();
        assert!(matches!(err, CubeError::InvalidSize(1)));
    }

    #[test]
    fn non_data_lines_ignored() {
        let text = "LUT_3D_SIZE 2\nDOMAIN_MIN 0.0 0.0 0.0\nDOMAIN_MAX 1.0 1.0 1.0\n0.1 0.2 0.3\n";
        let lut = parse_cube(text).unwrap();
        assert_eq!(lut.data.len(), 1);
    }

    #[test]
    fn identity_corners() {
        let lut = Lut3D::identity(2);
        assert_eq!(lut.data[0], [0.0, 0.0, 0.0]);
        assert_eq!(lut.data[7], [1.0, 1.0, 1.0]);
        assert!(lut.is_complete());
    }

    #[test]
    fn serialization_round_trips() {
        let lut = Lut3D::identity(2);
        let reparsed = parse_cube(&lut.to_cube_string()).unwrap();
        assert_eq!(reparsed.size, lut.size);
        assert_eq!(reparsed.data, lut.data);
        assert_eq!(reparsed.title, "identity");
    }
}
