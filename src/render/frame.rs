//! Composes one full frame in the game client's draw order.
//!
//! World positions are turned into player-relative screen positions before
//! they reach the renderers: food, viruses, ejected mass and the border are
//! drawn under the identity transform, cells under the camera centered on the
//! translated player cell, so both land on the same screen spot at zoom 1.

use crate::model::{Borders, Cell, Point, Screen, Snapshot};
use crate::render::canvas::Canvas;
use crate::render::cells::draw_cells;
use crate::render::scene::{draw_border, draw_grid};
use crate::render::shapes::{draw_fire_food, draw_food, draw_virus};
use crate::settings::RenderSettings;
use crate::state::Camera;

pub fn visible_borders(player: Point, snapshot: &Snapshot, screen: Screen) -> Borders {
    let origin = Camera::relative_to(player, Point::default(), screen);
    Borders {
        left: origin.x,
        right: origin.x + snapshot.world.width,
        top: origin.y,
        bottom: origin.y + snapshot.world.height,
    }
}

fn translate_cell(cell: &Cell, player: Point, screen: Screen) -> Cell {
    let p = Camera::relative_to(player, cell.position(), screen);
    Cell { x: p.x, y: p.y, ..cell.clone() }
}

pub fn draw_frame(
    ctx: &mut impl Canvas,
    camera: &mut Camera,
    snapshot: &Snapshot,
    settings: &RenderSettings,
    screen: Screen,
) {
    Camera::reset(ctx);
    ctx.set_fill_style(&settings.background_color);
    ctx.fill_rect(0.0, 0.0, screen.width, screen.height);

    // Without a player, world coordinates are drawn unshifted.
    let player_pos = snapshot
        .player
        .as_ref()
        .map(Cell::position)
        .unwrap_or(Point::new(screen.width / 2.0, screen.height / 2.0));

    if let Some(player) = &snapshot.player {
        draw_grid(ctx, camera, &settings.line_color, player, screen);
    }

    let rel = |x: f64, y: f64| Camera::relative_to(player_pos, Point::new(x, y), screen);
    for food in &snapshot.foods {
        draw_food(ctx, rel(food.x, food.y), food);
    }
    for mass in &snapshot.masses {
        draw_fire_food(ctx, rel(mass.x, mass.y), mass, &snapshot.player_config);
    }
    for virus in &snapshot.viruses {
        draw_virus(ctx, rel(virus.x, virus.y), virus);
    }

    let borders = visible_borders(player_pos, snapshot, screen);
    if settings.border_draw {
        draw_border(ctx, &borders);
    }

    let mut cells: Vec<Cell> = snapshot
        .cells
        .iter()
        .map(|c| translate_cell(c, player_pos, screen))
        .collect();
    cells.sort_by(|a, b| a.mass.total_cmp(&b.mass));
    let focus = snapshot
        .player
        .as_ref()
        .map(|p| translate_cell(p, player_pos, screen));
    draw_cells(ctx, camera, &cells, focus.as_ref(), settings.show_mass, &borders);
}
