use std::f64::consts::{FRAC_PI_2, TAU};

use crate::model::{Borders, Cell, Point};

pub const FULL_ANGLE: f64 = TAU;

pub const VIRUS_SPIKES: usize = 16;
/// Inner star radius as a fraction of the outer one.
pub const VIRUS_INNER_RATIO: f64 = 0.8;

pub fn value_in_range(min: f64, max: f64, value: f64) -> f64 {
    max.min(min.max(value))
}

pub fn circle_point(origin: Point, radius: f64, theta: f64) -> Point {
    Point {
        x: origin.x + radius * theta.cos(),
        y: origin.y + radius * theta.sin(),
    }
}

pub fn cell_touching_borders(cell: &Cell, borders: &Borders) -> bool {
    cell.x - cell.radius <= borders.left
        || cell.x + cell.radius >= borders.right
        || cell.y - cell.radius <= borders.top
        || cell.y + cell.radius >= borders.bottom
}

/// Clamps x and y into the borders independently.
pub fn regulate_point(point: Point, borders: &Borders) -> Point {
    Point {
        x: value_in_range(borders.left, borders.right, point.x),
        y: value_in_range(borders.top, borders.bottom, point.y),
    }
}

/// Upper bound on outline samples; far beyond what is visible on screen.
pub const MAX_POLYGON_POINTS: i64 = 4096;

pub fn polygon_point_count(mass: f64) -> usize {
    30i64
        .saturating_add((mass / 5.0).trunc() as i64)
        .clamp(0, MAX_POLYGON_POINTS) as usize
}

/// Outline of a border-touching cell, clamped into the playable area.
pub fn clamped_cell_outline(cell: &Cell, borders: &Borders) -> Vec<Point> {
    let count = polygon_point_count(cell.mass);
    let step = FULL_ANGLE / count as f64;
    (0..count)
        .map(|i| regulate_point(circle_point(cell.position(), cell.radius, i as f64 * step), borders))
        .collect()
}

/// Star outline: outer and inner vertices alternate, starting with the
/// outer one pointing straight up.
pub fn virus_vertices(center: Point, radius: f64) -> Vec<Point> {
    let inner = radius * VIRUS_INNER_RATIO;
    let spacing = FULL_ANGLE / VIRUS_SPIKES as f64;
    let mut points = Vec::with_capacity(VIRUS_SPIKES * 2);
    for i in 0..VIRUS_SPIKES {
        let i = i as f64;
        points.push(circle_point(center, radius, i * spacing - FRAC_PI_2));
        points.push(circle_point(center, inner, (i + 0.5) * spacing - FRAC_PI_2));
    }
    points
}
