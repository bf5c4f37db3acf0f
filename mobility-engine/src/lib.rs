use gel_core::{BasePairs, FragmentSet, GelGeometry, MOBILITY_EPSILON};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Raw reciprocal-length mobilities, before normalization.
fn raw_mobilities(lengths: &[BasePairs]) -> Vec<f64> {
    lengths
        .iter()
        .map(|&l| 1.0 / (l as f64 + MOBILITY_EPSILON))
        .collect()
}

/// Normalized mobilities for a batch of lengths, in input order.
///
/// The smallest fragment (most mobile) maps to 1 and the largest to 0.
/// A batch of equal lengths maps to 0.5 everywhere. Mobilities are relative
/// within one batch only; callers recompute whenever the set changes.
pub fn normalized_mobilities(lengths: &[BasePairs]) -> Vec<f64> {
    let raw = raw_mobilities(lengths);
    if raw.is_empty() {
        return raw;
    }
    let mut min_m = f64::MAX;
    let mut max_m = f64::MIN;
    for &m in &raw {
        min_m = min_m.min(m);
        max_m = max_m.max(m);
    }
    if max_m <= min_m {
        return vec![0.5; raw.len()];
    }
    let range = max_m - min_m;
    raw.iter().map(|m| (m - min_m) / range).collect()
}

/// One computed lane: a fragment plus its normalized mobility and the
/// real-world distance it migrated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lane {
    /// 1-based display number; the control occupies lane 1 when present.
    pub number: usize,
    pub length_bp: BasePairs,
    pub mobility: f64,
    pub distance_cm: f64,
    pub is_control: bool,
}

/// A computed batch, ready for rendering. Lanes are in display order:
/// control first when present, then samples in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GelRun {
    pub geometry: GelGeometry,
    pub lanes: Vec<Lane>,
}

impl GelRun {
    pub fn compute(set: &FragmentSet, geometry: GelGeometry) -> Self {
        let batch = set.batch_lengths();
        let mobilities = normalized_mobilities(&batch);
        let sample_count = set.samples().len();

        let mut lanes = Vec::with_capacity(batch.len());
        if let Some(control) = set.control() {
            let m = mobilities[sample_count];
            lanes.push(Lane {
                number: 1,
                length_bp: control,
                mobility: m,
                distance_cm: geometry.distance_cm(m),
                is_control: true,
            });
        }
        let offset = usize::from(set.has_control());
        for (i, (&length, &m)) in set.samples().iter().zip(&mobilities).enumerate() {
            lanes.push(Lane {
                number: i + 1 + offset,
                length_bp: length,
                mobility: m,
                distance_cm: geometry.distance_cm(m),
                is_control: false,
            });
        }

        Self { geometry, lanes }
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn control(&self) -> Option<&Lane> {
        self.lanes.iter().find(|l| l.is_control)
    }

    /// Heading for the rendering; names the control when present.
    pub fn title(&self) -> String {
        match self.control() {
            Some(c) => format!(
                "Gel Electrophoresis (control: {} bp, lane 1)",
                c.length_bp
            ),
            None => "Gel Electrophoresis".to_string(),
        }
    }
}

// ---------- band styles ------------------------------------------------------

/// Fill/edge colors for one lane's band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandStyle {
    pub fill: String,
    pub edge: String,
}

/// Distinguishable sample palette; cycled when lanes exceed it.
/// Red is reserved for the control lane.
const SAMPLE_PALETTE: [&str; 9] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#9467bd", "#8c564b", "#e377c2", "#17becf", "#bcbd22",
    "#7f7f7f",
];

pub const CONTROL_FILL: &str = "#d62728";
pub const CONTROL_EDGE: &str = "#7f1d1d";
const SAMPLE_EDGE: &str = "#111827";

/// One style per lane, in the run's lane order.
pub fn default_band_styles(run: &GelRun) -> Vec<BandStyle> {
    let mut sample_idx = 0usize;
    run.lanes
        .iter()
        .map(|lane| {
            if lane.is_control {
                BandStyle {
                    fill: CONTROL_FILL.to_string(),
                    edge: CONTROL_EDGE.to_string(),
                }
            } else {
                let fill = SAMPLE_PALETTE[sample_idx % SAMPLE_PALETTE.len()];
                sample_idx += 1;
                BandStyle {
                    fill: fill.to_string(),
                    edge: SAMPLE_EDGE.to_string(),
                }
            }
        })
        .collect()
}

// ---------- tabular summary --------------------------------------------------

/// One row of the tabular summary, mirroring the drawn lanes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    pub lane: usize,
    pub length_bp: BasePairs,
    pub mobility: f64,
    pub distance_cm: f64,
    pub is_control: bool,
}

pub fn summary_rows(run: &GelRun) -> Vec<SummaryRow> {
    run.lanes
        .iter()
        .map(|l| SummaryRow {
            lane: l.number,
            length_bp: l.length_bp,
            mobility: l.mobility,
            distance_cm: l.distance_cm,
            is_control: l.is_control,
        })
        .collect()
}

/// Fixed-width text rendering of the summary. The control lane is marked
/// with an asterisk; a footnote is appended when one is present.
pub fn render_summary_text(run: &GelRun) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6}{:>12}{:>10}{:>15}",
        "Lane", "Length (bp)", "Mobility", "Distance (cm)"
    );
    for lane in &run.lanes {
        let label = if lane.is_control {
            format!("{}*", lane.number)
        } else {
            lane.number.to_string()
        };
        let _ = writeln!(
            out,
            "{:<6}{:>12}{:>10.3}{:>15.1}",
            label, lane.length_bp, lane.mobility, lane.distance_cm
        );
    }
    if run.control().is_some() {
        let _ = writeln!(out, "* control");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_for(samples: &str, control: &str) -> GelRun {
        let set = FragmentSet::from_input(samples, control).unwrap();
        GelRun::compute(&set, GelGeometry::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn equal_lengths_all_map_to_half() {
        let mobilities = normalized_mobilities(&[300, 300, 300]);
        assert!(mobilities.iter().all(|&m| approx(m, 0.5)));
    }

    #[test]
    fn mobility_decreases_with_length() {
        let mobilities = normalized_mobilities(&[100, 250, 500, 750]);
        for pair in mobilities.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert!(approx(mobilities[0], 1.0));
        assert!(approx(mobilities[3], 0.0));
    }

    #[test]
    fn recomputation_is_deterministic() {
        let a = run_for("100,250,500", "750");
        let b = run_for("100,250,500", "750");
        assert_eq!(a.lanes.len(), b.lanes.len());
        for (la, lb) in a.lanes.iter().zip(&b.lanes) {
            assert_eq!(la.length_bp, lb.length_bp);
            assert!(approx(la.mobility, lb.mobility));
            assert!(approx(la.distance_cm, lb.distance_cm));
        }
    }

    #[test]
    fn control_takes_lane_one_and_normalizes_with_batch() {
        let run = run_for("200,400", "100");
        let control = run.control().unwrap();
        assert_eq!(control.number, 1);
        assert_eq!(control.length_bp, 100);
        // Smallest fragment in the batch, so it is the most mobile.
        assert!(approx(control.mobility, 1.0));
        assert!(run
            .lanes
            .iter()
            .filter(|l| !l.is_control)
            .all(|l| l.mobility < 1.0));
        assert_eq!(run.lanes[1].number, 2);
    }

    #[test]
    fn distance_is_mobility_times_gel_length() {
        let run = run_for("100,750", "");
        for lane in &run.lanes {
            assert!(approx(lane.distance_cm, lane.mobility * 8.0));
        }
        assert!(approx(run.lanes[0].distance_cm, 8.0));
        assert!(approx(run.lanes[1].distance_cm, 0.0));
    }

    #[test]
    fn single_fragment_maps_to_half() {
        // A one-element batch has no spread; treated like the equal case.
        let mobilities = normalized_mobilities(&[420]);
        assert_eq!(mobilities.len(), 1);
        assert!(approx(mobilities[0], 0.5));
    }

    #[test]
    fn control_style_is_red_and_unique() {
        let run = run_for("100,250,500", "750");
        let styles = default_band_styles(&run);
        assert_eq!(styles.len(), 4);
        assert_eq!(styles[0].fill, CONTROL_FILL);
        assert!(styles[1..].iter().all(|s| s.fill != CONTROL_FILL));
        // Adjacent sample lanes are distinguishable.
        assert_ne!(styles[1].fill, styles[2].fill);
    }

    #[test]
    fn summary_marks_control_lane() {
        let run = run_for("100,250", "500");
        let text = render_summary_text(&run);
        assert!(text.contains("1*"));
        assert!(text.contains("* control"));
        assert!(text.contains("500"));
        let rows = summary_rows(&run);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_control);
        assert_eq!(rows[1].lane, 2);
    }

    #[test]
    fn title_names_the_control() {
        assert_eq!(run_for("100", "").title(), "Gel Electrophoresis");
        let titled = run_for("100,200", "300").title();
        assert!(titled.contains("300 bp"));
        assert!(titled.contains("lane 1"));
    }
}
