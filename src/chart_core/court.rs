//! Half-court geometry template
//!
//! Dimensions are in NBA shot-chart coordinates: the hoop center is the
//! origin, x spans the court width and y runs from the baseline toward half
//! court. One unit is a tenth of a foot, matching the feed's LOC_X/LOC_Y.

use image::Rgb;

const COURT_WIDTH: f64 = 500.0;
const HALF_COURT_LENGTH: f64 = 470.0;
const HOOP_RADIUS: f64 = 7.5;
const PAINT_WIDTH: f64 = 160.0;
const PAINT_HEIGHT: f64 = 190.0;
const FT_CIRCLE_RADIUS: f64 = 30.0;
const FT_CIRCLE_CENTER_Y: f64 = 190.0;
const CORNER_THREE_X: f64 = 220.0;
const CORNER_THREE_HEIGHT: f64 = 90.0;
const THREE_ARC_RADIUS: f64 = 238.0;
const THREE_ARC_START_DEG: f64 = 22.0;
const THREE_ARC_END_DEG: f64 = 158.0;

/// An unfilled outline shape in court coordinates. Arc angles are degrees
/// measured counterclockwise from the positive x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CourtPrimitive {
    Circle { cx: f64, cy: f64, radius: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Arc { cx: f64, cy: f64, radius: f64, start_deg: f64, end_deg: f64 },
}

#[derive(Debug, Clone, Copy)]
pub struct CourtStyle {
    pub color: Rgb<u8>,
    pub line_width: u32,
}

impl Default for CourtStyle {
    fn default() -> Self {
        Self { color: Rgb([0, 0, 0]), line_width: 1 }
    }
}

/// Display bounds hint for the rendering sink. Not itself a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Debug, Clone)]
pub struct CourtTemplate {
    pub style: CourtStyle,
    pub primitives: Vec<CourtPrimitive>,
    pub viewport: Viewport,
}

/// Build the schematic half court.
///
/// Pure function of the style; all spatial constants are fixed. Primitives
/// are listed in draw order (later shapes land on top), innermost landmark
/// first: hoop, paint, free-throw circle, both corner-three ticks, the
/// three-point arc, and finally the outer boundary. The corner-three ticks
/// are degenerate zero-width rectangles, which render as vertical segments.
pub fn court_template(style: CourtStyle) -> CourtTemplate {
    let primitives = vec![
        CourtPrimitive::Circle { cx: 0.0, cy: 0.0, radius: HOOP_RADIUS },
        CourtPrimitive::Rect {
            x: -PAINT_WIDTH / 2.0,
            y: 0.0,
            width: PAINT_WIDTH,
            height: PAINT_HEIGHT,
        },
        CourtPrimitive::Circle { cx: 0.0, cy: FT_CIRCLE_CENTER_Y, radius: FT_CIRCLE_RADIUS },
        CourtPrimitive::Rect { x: -CORNER_THREE_X, y: 0.0, width: 0.0, height: CORNER_THREE_HEIGHT },
        CourtPrimitive::Rect { x: CORNER_THREE_X, y: 0.0, width: 0.0, height: CORNER_THREE_HEIGHT },
        CourtPrimitive::Arc {
            cx: 0.0,
            cy: 0.0,
            radius: THREE_ARC_RADIUS,
            start_deg: THREE_ARC_START_DEG,
            end_deg: THREE_ARC_END_DEG,
        },
        CourtPrimitive::Rect {
            x: -COURT_WIDTH / 2.0,
            y: 0.0,
            width: COURT_WIDTH,
            height: HALF_COURT_LENGTH,
        },
    ];

    CourtTemplate {
        style,
        primitives,
        viewport: Viewport {
            x_min: -COURT_WIDTH / 2.0,
            x_max: COURT_WIDTH / 2.0,
            y_min: 0.0,
            y_max: HALF_COURT_LENGTH,
        },
    }
}
