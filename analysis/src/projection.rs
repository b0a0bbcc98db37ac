use crate::trace::TracePoint;

// Side length of the square map in game units.
pub const MAP_EXTENT: f64 = 14870.0;

pub const WINDOW_MILLIS: u64 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub highlighted: bool,
    pub source_timestamp: u64,
}

pub fn project(
    trace: &[TracePoint],
    selected: Option<u64>,
    canvas_width: f64,
    canvas_height: f64,
    filtered_only: bool,
) -> Vec<ProjectedPoint> {
    let mut points = Vec::with_capacity(trace.len());

    for point in trace.iter() {
        let highlighted = match selected {
            Some(selected) => point.timestamp.abs_diff(selected) <= WINDOW_MILLIS,
            None => false,
        };

        if filtered_only && selected.is_some() && !highlighted {
            continue;
        }

        // Game space has y growing away from the rendering origin, so the
        // vertical axis flips before scaling to the canvas.
        let x = point.position.x as f64 / MAP_EXTENT * canvas_width;
        let y = (MAP_EXTENT - point.position.y as f64) / MAP_EXTENT * canvas_height;

        points.push(ProjectedPoint {
            x: x.clamp(0.0, canvas_width),
            y: y.clamp(0.0, canvas_height),
            highlighted,
            source_timestamp: point.timestamp,
        });
    }

    points
}
