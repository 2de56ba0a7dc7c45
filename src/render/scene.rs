use crate::model::{Borders, Cell, Screen};
use crate::render::canvas::Canvas;
use crate::state::Camera;

pub const GRID_ALPHA: f64 = 0.15;
/// Grid lines per screen height.
pub const GRID_DIVISIONS: f64 = 18.0;
/// Most lines drawn per axis; the ones nearest the far screen edge are kept.
pub const MAX_GRID_LINES: u64 = 4096;
pub const BORDER_COLOR: &str = "#000000";
pub const ERROR_BACKGROUND: &str = "#333333";
pub const ERROR_TEXT_COLOR: &str = "#FFFFFF";
pub const ERROR_FONT: &str = "bold 30px sans-serif";

/// Faint background grid anchored to the player's position, batched into a
/// single stroke.
pub fn draw_grid(ctx: &mut impl Canvas, camera: &mut Camera, line_color: &str, player: &Cell, screen: Screen) {
    camera.setup(ctx, Some(player), screen.width, screen.height);
    ctx.set_line_width(1.0);
    ctx.set_stroke_style(line_color);
    ctx.set_global_alpha(GRID_ALPHA);
    ctx.begin_path();

    let step = screen.height / GRID_DIVISIONS;
    for x in grid_offsets(-player.x, screen.width, step) {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, screen.height);
    }
    for y in grid_offsets(-player.y, screen.height, step) {
        ctx.move_to(0.0, y);
        ctx.line_to(screen.width, y);
    }

    ctx.stroke();
    ctx.set_global_alpha(1.0);
    Camera::reset(ctx);
}

/// Line positions `start + i * step` below `end`, at most `MAX_GRID_LINES`.
/// Positions are computed from the index so a step below the precision of
/// `start` still terminates.
fn grid_offsets(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step.is_finite() && step > 0.0 {
        ((end - start) / step).ceil()
    } else {
        0.0
    };
    let count = if count.is_finite() && count > 0.0 { count as u64 } else { 0 };
    let first = count.saturating_sub(MAX_GRID_LINES);
    (first..count).map(move |i| start + i as f64 * step)
}

pub fn draw_border(ctx: &mut impl Canvas, borders: &Borders) {
    Camera::reset(ctx);
    ctx.set_line_width(1.0);
    ctx.set_stroke_style(BORDER_COLOR);
    ctx.begin_path();
    ctx.move_to(borders.left, borders.top);
    ctx.line_to(borders.right, borders.top);
    ctx.line_to(borders.right, borders.bottom);
    ctx.line_to(borders.left, borders.bottom);
    ctx.close_path();
    ctx.stroke();
}

/// Full-screen notice for states where there is no game to draw.
pub fn draw_error_message(ctx: &mut impl Canvas, message: &str, screen: Screen) {
    Camera::reset(ctx);
    ctx.set_fill_style(ERROR_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, screen.width, screen.height);
    ctx.set_text_align("center");
    ctx.set_fill_style(ERROR_TEXT_COLOR);
    ctx.set_font(ERROR_FONT);
    ctx.fill_text(message, screen.width / 2.0, screen.height / 2.0);
}
