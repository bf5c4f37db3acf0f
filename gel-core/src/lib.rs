use serde::{Deserialize, Serialize};
use std::fmt;

/// Fragment length in base pairs.
pub type BasePairs = u32;

/// Added to lengths before inversion so raw mobility stays finite.
pub const MOBILITY_EPSILON: f64 = 1e-6;

/// Real-world length represented by the full migration span (standard slab).
pub const GEL_LENGTH_CM: f64 = 8.0;

/// A single DNA fragment loaded into the gel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub length_bp: BasePairs,
    pub is_control: bool,
}

impl Fragment {
    pub fn sample(length_bp: BasePairs) -> Self {
        Self {
            length_bp,
            is_control: false,
        }
    }

    pub fn control(length_bp: BasePairs) -> Self {
        Self {
            length_bp,
            is_control: true,
        }
    }
}

/// Validation errors for user-entered fragment lengths.
///
/// These render directly in the UI, so messages name the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLengthsError {
    Empty,
    Invalid(String),
    NonPositive(String),
}

impl fmt::Display for ParseLengthsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseLengthsError::Empty => f.write_str("enter at least one fragment length"),
            ParseLengthsError::Invalid(tok) => {
                write!(f, "'{tok}' is not a valid fragment length")
            }
            ParseLengthsError::NonPositive(tok) => {
                write!(f, "fragment lengths must be positive, got '{tok}'")
            }
        }
    }
}

impl std::error::Error for ParseLengthsError {}

fn parse_token(tok: &str) -> Result<BasePairs, ParseLengthsError> {
    match tok.parse::<BasePairs>() {
        Ok(0) => Err(ParseLengthsError::NonPositive(tok.to_string())),
        Ok(len) => Ok(len),
        Err(_) => {
            if tok.parse::<i64>().map(|v| v <= 0).unwrap_or(false) {
                Err(ParseLengthsError::NonPositive(tok.to_string()))
            } else {
                Err(ParseLengthsError::Invalid(tok.to_string()))
            }
        }
    }
}

/// Parse a comma-separated list of positive integer lengths.
/// Whitespace around entries is ignored; an empty list is an error.
pub fn parse_lengths(input: &str) -> Result<Vec<BasePairs>, ParseLengthsError> {
    if input.trim().is_empty() {
        return Err(ParseLengthsError::Empty);
    }
    let mut out = Vec::new();
    for tok in input.split(',') {
        let tok = tok.trim();
        if tok.is_empty() {
            return Err(ParseLengthsError::Invalid(String::new()));
        }
        out.push(parse_token(tok)?);
    }
    Ok(out)
}

/// Parse the optional control field: blank means no control.
pub fn parse_control(input: &str) -> Result<Option<BasePairs>, ParseLengthsError> {
    let tok = input.trim();
    if tok.is_empty() {
        return Ok(None);
    }
    parse_token(tok).map(Some)
}

/// A validated batch of fragments: at least one positive sample length and an
/// optional positive control length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentSet {
    samples: Vec<BasePairs>,
    control: Option<BasePairs>,
}

impl FragmentSet {
    pub fn new(
        samples: Vec<BasePairs>,
        control: Option<BasePairs>,
    ) -> Result<Self, ParseLengthsError> {
        if samples.is_empty() {
            return Err(ParseLengthsError::Empty);
        }
        if samples.iter().any(|&l| l == 0) {
            return Err(ParseLengthsError::NonPositive("0".to_string()));
        }
        if control == Some(0) {
            return Err(ParseLengthsError::NonPositive("0".to_string()));
        }
        Ok(Self { samples, control })
    }

    /// Build straight from the two UI text fields.
    pub fn from_input(samples: &str, control: &str) -> Result<Self, ParseLengthsError> {
        let samples = parse_lengths(samples)?;
        let control = parse_control(control)?;
        Self::new(samples, control)
    }

    pub fn samples(&self) -> &[BasePairs] {
        &self.samples
    }

    pub fn control(&self) -> Option<BasePairs> {
        self.control
    }

    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }

    /// Total number of lanes drawn for this set.
    pub fn lane_count(&self) -> usize {
        self.samples.len() + usize::from(self.control.is_some())
    }

    /// Lengths in normalization order: samples first, control appended last.
    /// The control participates in normalization like any other fragment.
    pub fn batch_lengths(&self) -> Vec<BasePairs> {
        let mut all = self.samples.clone();
        if let Some(c) = self.control {
            all.push(c);
        }
        all
    }

    /// Fragments in display order: the control occupies lane 1 when present.
    pub fn fragments(&self) -> Vec<Fragment> {
        let mut out = Vec::with_capacity(self.lane_count());
        if let Some(c) = self.control {
            out.push(Fragment::control(c));
        }
        out.extend(self.samples.iter().map(|&l| Fragment::sample(l)));
        out
    }
}

/// Fixed geometry of the schematic gel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GelGeometry {
    /// Distance in cm between the well row and the maximum-migration row.
    pub gel_length_cm: f64,
}

impl Default for GelGeometry {
    fn default() -> Self {
        Self {
            gel_length_cm: GEL_LENGTH_CM,
        }
    }
}

impl GelGeometry {
    /// Real-world distance travelled for a normalized mobility.
    /// Mobility 0 sits at the well, mobility 1 at the far row.
    pub fn distance_cm(&self, mobility: f64) -> f64 {
        self.gel_length_cm * mobility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_list_with_whitespace() {
        let lengths = parse_lengths(" 100, 250 ,500,750 ").unwrap();
        assert_eq!(lengths, vec![100, 250, 500, 750]);
    }

    #[test]
    fn rejects_empty_and_blank_input() {
        assert_eq!(parse_lengths(""), Err(ParseLengthsError::Empty));
        assert_eq!(parse_lengths("   "), Err(ParseLengthsError::Empty));
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        match parse_lengths("100, abc") {
            Err(ParseLengthsError::Invalid(tok)) => assert_eq!(tok, "abc"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_and_negative_lengths() {
        assert!(matches!(
            parse_lengths("100,0"),
            Err(ParseLengthsError::NonPositive(_))
        ));
        assert!(matches!(
            parse_lengths("-40"),
            Err(ParseLengthsError::NonPositive(_))
        ));
    }

    #[test]
    fn control_field_is_optional() {
        assert_eq!(parse_control("  "), Ok(None));
        assert_eq!(parse_control("1200"), Ok(Some(1200)));
        assert!(matches!(
            parse_control("0"),
            Err(ParseLengthsError::NonPositive(_))
        ));
    }

    #[test]
    fn fragment_set_orders_control_first_for_display() {
        let set = FragmentSet::from_input("100,250", "500").unwrap();
        assert_eq!(set.lane_count(), 3);
        assert_eq!(set.batch_lengths(), vec![100, 250, 500]);
        let frags = set.fragments();
        assert!(frags[0].is_control);
        assert_eq!(frags[0].length_bp, 500);
        assert_eq!(frags[1].length_bp, 100);
    }

    #[test]
    fn fragment_set_requires_a_sample() {
        assert_eq!(
            FragmentSet::new(Vec::new(), Some(100)),
            Err(ParseLengthsError::Empty)
        );
    }

    #[test]
    fn distance_scales_with_gel_length() {
        let geom = GelGeometry::default();
        assert!((geom.distance_cm(0.0)).abs() < 1e-12);
        assert!((geom.distance_cm(1.0) - GEL_LENGTH_CM).abs() < 1e-12);
        assert!((geom.distance_cm(0.5) - 4.0).abs() < 1e-12);
    }
}
