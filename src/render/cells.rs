use crate::model::{Borders, Cell};
use crate::render::canvas::Canvas;
use crate::render::geometry::{cell_touching_borders, clamped_cell_outline};
use crate::render::shapes::draw_round_object;
use crate::state::Camera;

pub const CELL_LINE_WIDTH: f64 = 6.0;
pub const MIN_NAME_FONT: f64 = 12.0;
pub const MIN_MASS_FONT: f64 = 10.0;
pub const MASS_FONT_RATIO: f64 = 0.66;

/// Name font size in canvas units. Dividing by zoom undoes the camera scale
/// so labels stay readable when zoomed out.
pub fn name_font_size(radius: f64, zoom: f64) -> f64 {
    (radius / 3.0 / zoom).max(MIN_NAME_FONT)
}

pub fn mass_font_size(name_font: f64) -> f64 {
    (name_font * MASS_FONT_RATIO).max(MIN_MASS_FONT)
}

fn bold_font(size: f64) -> String {
    format!("bold {}px sans-serif", size)
}

/// Border-touching cells are flattened against the border instead of
/// being drawn past it.
pub fn draw_cell_with_lines(ctx: &mut impl Canvas, cell: &Cell, borders: &Borders) {
    let points = clamped_cell_outline(cell, borders);
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();
    ctx.fill();
    ctx.stroke();
}

fn draw_outlined_text(ctx: &mut impl Canvas, text: &str, x: f64, y: f64) {
    ctx.stroke_text(text, x, y);
    ctx.fill_text(text, x, y);
}

/// Draws every cell under the camera following `focus`, then resets the
/// transform.
pub fn draw_cells(
    ctx: &mut impl Canvas,
    camera: &mut Camera,
    cells: &[Cell],
    focus: Option<&Cell>,
    show_mass: bool,
    borders: &Borders,
) {
    let (width, height) = (ctx.width(), ctx.height());
    camera.setup(ctx, focus, width, height);

    for cell in cells {
        ctx.set_fill_style(&cell.color);
        ctx.set_stroke_style(&cell.border_color);
        ctx.set_line_width(CELL_LINE_WIDTH);

        if cell_touching_borders(cell, borders) {
            draw_cell_with_lines(ctx, cell, borders);
        } else {
            draw_round_object(ctx, cell.position(), cell.radius);
        }

        let font_size = name_font_size(cell.radius, camera.zoom);
        ctx.set_text_align("center");
        ctx.set_font(&bold_font(font_size));
        draw_outlined_text(ctx, &cell.name, cell.x, cell.y);

        if show_mass {
            let label = (cell.mass.round() as i64).to_string();
            ctx.set_font(&bold_font(mass_font_size(font_size)));
            draw_outlined_text(ctx, &label, cell.x, cell.y + font_size);
        }
    }
    Camera::reset(ctx);
}
