use mobility_engine::{BandStyle, GelRun};

// Fixed canvas palette; the page theme does not restyle the gel itself.
pub const BACKGROUND: &str = "#0c111a";
pub const GEL_FILL: &str = "#fff8dc";
pub const GEL_EDGE: &str = "#3f3f46";
pub const WELL_FILL: &str = "#d1d5db";
pub const TEXT: &str = "#e6edf7";
pub const MUTED: &str = "#9ea7b3";
pub const ANNOTATION: &str = "#1f2937";

// Layout constants in pixels.
const MARGIN_LEFT: f64 = 96.0;
const RULER_SPACE: f64 = 96.0;
const TITLE_Y: f64 = 24.0;
const LANE_LABEL_Y: f64 = 48.0;
const WELL_ROW_Y: f64 = 80.0;
const BOTTOM_MARGIN: f64 = 48.0;
const BAND_HEIGHT: f64 = 10.0;
const WELL_HEIGHT: f64 = 8.0;
const RULER_TICKS: usize = 5;
const MIN_WIDTH: f64 = 320.0;
const MIN_HEIGHT: f64 = 240.0;

/// Pixel-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// A lane's loading well plus its lane label.
#[derive(Debug, Clone)]
pub struct PlotWell {
    pub rect: Rect,
    pub edge: String,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
}

/// A lane's band with its two-line annotation.
#[derive(Debug, Clone)]
pub struct PlotBand {
    pub rect: Rect,
    pub fill: String,
    pub edge: String,
    pub label_bp: String,
    pub label_cm: String,
    pub label_x: f64,
    pub label_y: f64,
    pub emphasized: bool,
}

/// One tick on the measurement ruler.
#[derive(Debug, Clone)]
pub struct RulerTick {
    pub y: f64,
    pub label: String,
}

/// Fully resolved drawing instructions for one run at one canvas size.
/// Building a scene is pure; the same run and size always yield the same
/// scene.
#[derive(Debug, Clone)]
pub struct GelScene {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub title_y: f64,
    pub gel_rect: Rect,
    pub wells: Vec<PlotWell>,
    pub bands: Vec<PlotBand>,
    pub ruler_x: f64,
    pub ruler_ticks: Vec<RulerTick>,
    pub well_row_y: f64,
    pub max_row_y: f64,
    pub well_caption: String,
    pub max_caption: String,
}

impl GelScene {
    pub fn build(run: &GelRun, styles: &[BandStyle], width: f64, height: f64) -> Self {
        let width = width.max(MIN_WIDTH);
        let height = height.max(MIN_HEIGHT);

        let well_row_y = WELL_ROW_Y;
        let max_row_y = height - BOTTOM_MARGIN;
        let gel_left = MARGIN_LEFT;
        let gel_width = width - MARGIN_LEFT - RULER_SPACE;
        let gel_rect = Rect {
            x: gel_left,
            y: well_row_y - 20.0,
            w: gel_width,
            h: max_row_y + 16.0 - (well_row_y - 20.0),
        };

        let mobility_to_y =
            |m: f64| well_row_y + m.clamp(0.0, 1.0) * (max_row_y - well_row_y);

        let n = run.lane_count().max(1);
        let spacing = gel_width / n as f64;
        let lane_w = (spacing * 0.6).clamp(18.0, 64.0);

        let mut wells = Vec::with_capacity(run.lanes.len());
        let mut bands = Vec::with_capacity(run.lanes.len());
        for (i, lane) in run.lanes.iter().enumerate() {
            let center_x = gel_left + (i as f64 + 0.5) * spacing;
            let style = styles.get(i).cloned().unwrap_or(BandStyle {
                fill: MUTED.to_string(),
                edge: GEL_EDGE.to_string(),
            });

            let label = format!("Lane {}", lane.number);
            let label_x = center_x - label.len() as f64 * 3.0;
            wells.push(PlotWell {
                rect: Rect {
                    // Clear of the band row even at zero migration.
                    x: center_x - lane_w / 2.0,
                    y: well_row_y - WELL_HEIGHT - BAND_HEIGHT / 2.0 - 2.0,
                    w: lane_w,
                    h: WELL_HEIGHT,
                },
                edge: if lane.is_control {
                    style.fill.clone()
                } else {
                    "#111827".to_string()
                },
                label,
                label_x,
                label_y: LANE_LABEL_Y,
            });

            let band_y = mobility_to_y(lane.mobility);
            bands.push(PlotBand {
                rect: Rect {
                    x: center_x - lane_w / 2.0,
                    y: band_y - BAND_HEIGHT / 2.0,
                    w: lane_w,
                    h: BAND_HEIGHT,
                },
                fill: style.fill,
                edge: style.edge,
                label_bp: format!("{} bp", lane.length_bp),
                label_cm: format!("{:.1} cm", lane.distance_cm),
                label_x: center_x + lane_w / 2.0 + 6.0,
                label_y: band_y - 2.0,
                emphasized: lane.is_control,
            });
        }

        let ruler_x = gel_left + gel_width + 14.0;
        let mut ruler_ticks = Vec::with_capacity(RULER_TICKS);
        for t in 0..RULER_TICKS {
            let frac = t as f64 / (RULER_TICKS - 1) as f64;
            ruler_ticks.push(RulerTick {
                y: mobility_to_y(frac),
                label: format!("{:.1} cm", run.geometry.distance_cm(frac)),
            });
        }

        Self {
            width,
            height,
            title: run.title(),
            title_y: TITLE_Y,
            gel_rect,
            wells,
            bands,
            ruler_x,
            ruler_ticks,
            well_row_y,
            max_row_y,
            well_caption: "Well (0 cm)".to_string(),
            max_caption: format!("Max ({:.0} cm)", run.geometry.gel_length_cm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gel_core::{FragmentSet, GelGeometry};
    use mobility_engine::default_band_styles;

    fn scene_for(samples: &str, control: &str) -> (GelRun, GelScene) {
        let set = FragmentSet::from_input(samples, control).unwrap();
        let run = GelRun::compute(&set, GelGeometry::default());
        let styles = default_band_styles(&run);
        let scene = GelScene::build(&run, &styles, 900.0, 600.0);
        (run, scene)
    }

    #[test]
    fn more_mobile_bands_sit_deeper() {
        let (run, scene) = scene_for("100,250,500,750", "");
        for (lane, band) in run.lanes.iter().zip(&scene.bands) {
            let expected =
                scene.well_row_y + lane.mobility * (scene.max_row_y - scene.well_row_y);
            assert!((band.rect.y + band.rect.h / 2.0 - expected).abs() < 1e-9);
        }
        // 100 bp (mobility 1.0) is drawn at the maximum-migration row.
        let deepest = &scene.bands[0];
        assert!((deepest.rect.y + deepest.rect.h / 2.0 - scene.max_row_y).abs() < 1e-9);
        for pair in scene.bands.windows(2) {
            assert!(pair[0].rect.y > pair[1].rect.y);
        }
    }

    #[test]
    fn equal_lengths_share_the_mid_row() {
        let (_, scene) = scene_for("300,300,300", "");
        let mid = (scene.well_row_y + scene.max_row_y) / 2.0;
        for band in &scene.bands {
            assert!((band.rect.y + band.rect.h / 2.0 - mid).abs() < 1e-9);
        }
    }

    #[test]
    fn wells_sit_above_every_band() {
        let (_, scene) = scene_for("100,250,500", "750");
        for (well, band) in scene.wells.iter().zip(&scene.bands) {
            assert!(well.rect.y + well.rect.h <= band.rect.y);
        }
    }

    #[test]
    fn lanes_stay_inside_the_gel() {
        let (_, scene) = scene_for("100,200,300,400,500,600", "");
        for band in &scene.bands {
            assert!(band.rect.x >= scene.gel_rect.x);
            assert!(band.rect.x + band.rect.w <= scene.gel_rect.x + scene.gel_rect.w);
        }
    }

    #[test]
    fn ruler_runs_from_well_to_max() {
        let (_, scene) = scene_for("100,750", "");
        let first = scene.ruler_ticks.first().unwrap();
        let last = scene.ruler_ticks.last().unwrap();
        assert_eq!(first.label, "0.0 cm");
        assert!((first.y - scene.well_row_y).abs() < 1e-9);
        assert_eq!(last.label, "8.0 cm");
        assert!((last.y - scene.max_row_y).abs() < 1e-9);
        assert_eq!(scene.ruler_ticks.len(), 5);
    }

    #[test]
    fn bands_carry_length_and_distance_labels() {
        let (_, scene) = scene_for("100,750", "");
        assert_eq!(scene.bands[0].label_bp, "100 bp");
        assert_eq!(scene.bands[0].label_cm, "8.0 cm");
        assert_eq!(scene.bands[1].label_cm, "0.0 cm");
    }

    #[test]
    fn control_lane_is_emphasized() {
        let (_, scene) = scene_for("100,250", "500");
        assert!(scene.bands[0].emphasized);
        assert!(!scene.bands[1].emphasized);
        assert_eq!(scene.wells[0].label, "Lane 1");
        assert_eq!(scene.wells[2].label, "Lane 3");
    }

    #[test]
    fn tiny_canvas_is_clamped() {
        let set = FragmentSet::from_input("100,200", "").unwrap();
        let run = GelRun::compute(&set, GelGeometry::default());
        let styles = default_band_styles(&run);
        let small = GelScene::build(&run, &styles, 10.0, 10.0);
        assert!(small.width >= 320.0);
        assert!(small.height >= 240.0);
    }
}
