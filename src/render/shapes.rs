use crate::model::{Food, Mass, PlayerConfig, Point, Virus};
use crate::render::canvas::Canvas;
use crate::render::geometry::{FULL_ANGLE, virus_vertices};
use crate::state::Camera;

/// Thinnest outline canvas honours; a width of 0 is ignored by browsers and
/// would leave the previous renderer's width in place.
pub const FOOD_LINE_WIDTH: f64 = 1.0;

pub fn hue_fill(hue: f64) -> String {
    format!("hsl({}, 100%, 50%)", hue)
}

pub fn hue_stroke(hue: f64) -> String {
    format!("hsl({}, 100%, 45%)", hue)
}

pub fn draw_round_object(ctx: &mut impl Canvas, position: Point, radius: f64) {
    ctx.begin_path();
    ctx.arc(position.x, position.y, radius, 0.0, FULL_ANGLE);
    ctx.close_path();
    ctx.fill();
    ctx.stroke();
}

pub fn draw_food(ctx: &mut impl Canvas, position: Point, food: &Food) {
    Camera::reset(ctx);
    ctx.set_fill_style(&hue_fill(food.hue));
    ctx.set_stroke_style(&hue_stroke(food.hue));
    ctx.set_line_width(FOOD_LINE_WIDTH);
    draw_round_object(ctx, position, food.radius);
}

pub fn draw_virus(ctx: &mut impl Canvas, position: Point, virus: &Virus) {
    Camera::reset(ctx);
    ctx.set_stroke_style(&virus.stroke);
    ctx.set_fill_style(&virus.fill);
    ctx.set_line_width(virus.stroke_width);

    let points = virus_vertices(position, virus.radius);
    ctx.begin_path();
    if let Some((first, rest)) = points.split_first() {
        ctx.move_to(first.x, first.y);
        for p in rest {
            ctx.line_to(p.x, p.y);
        }
    }
    ctx.close_path();
    ctx.fill();
    ctx.stroke();
}

/// Ejected mass: drawn one pixel smaller than its radius with a heavier
/// outline than the owning player's cells.
pub fn draw_fire_food(ctx: &mut impl Canvas, position: Point, mass: &Mass, player_config: &PlayerConfig) {
    Camera::reset(ctx);
    ctx.set_stroke_style(&hue_stroke(mass.hue));
    ctx.set_fill_style(&hue_fill(mass.hue));
    ctx.set_line_width(player_config.border + 2.0);
    draw_round_object(ctx, position, mass.radius - 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::recording::{DrawCall, IDENTITY, RecordingCanvas};

    #[test]
    fn food_is_a_filled_and_stroked_hue_circle() {
        let mut ctx = RecordingCanvas::new(800.0, 600.0);
        let food = Food { x: 100.0, y: 100.0, radius: 10.0, hue: 120.0 };
        draw_food(&mut ctx, Point::new(100.0, 100.0), &food);
        assert_eq!(
            ctx.calls,
            vec![
                IDENTITY,
                DrawCall::FillStyle("hsl(120, 100%, 50%)".into()),
                DrawCall::StrokeStyle("hsl(120, 100%, 45%)".into()),
                DrawCall::LineWidth(FOOD_LINE_WIDTH),
                DrawCall::BeginPath,
                DrawCall::Arc { x: 100.0, y: 100.0, radius: 10.0, start: 0.0, end: FULL_ANGLE },
                DrawCall::ClosePath,
                DrawCall::Fill,
                DrawCall::Stroke,
            ]
        );
    }

    #[test]
    fn fractional_hue_is_kept() {
        assert_eq!(hue_fill(12.5), "hsl(12.5, 100%, 50%)");
    }

    #[test]
    fn virus_path_is_a_closed_sixteen_spike_star() {
        let mut ctx = RecordingCanvas::new(800.0, 600.0);
        let virus = Virus {
            x: 0.0,
            y: 0.0,
            radius: 50.0,
            fill: "#33ff33".into(),
            stroke: "#19D119".into(),
            stroke_width: 20.0,
        };
        draw_virus(&mut ctx, Point::new(200.0, 200.0), &virus);
        assert_eq!(ctx.calls[0], IDENTITY);
        assert!(ctx.calls.contains(&DrawCall::FillStyle("#33ff33".into())));
        assert!(ctx.calls.contains(&DrawCall::StrokeStyle("#19D119".into())));
        assert!(ctx.calls.contains(&DrawCall::LineWidth(20.0)));

        let path = ctx.last_path();
        assert_eq!(path.len(), 32);
        assert!((path[0].0 - 200.0).abs() < 1e-9);
        assert!((path[0].1 - 150.0).abs() < 1e-9);
        assert_eq!(ctx.count(|c| matches!(c, DrawCall::MoveTo(..))), 1);

        let tail = &ctx.calls[ctx.calls.len() - 3..];
        assert_eq!(tail, &[DrawCall::ClosePath, DrawCall::Fill, DrawCall::Stroke]);
    }

    #[test]
    fn fire_food_shrinks_and_thickens_outline() {
        let mut ctx = RecordingCanvas::new(800.0, 600.0);
        let mass = Mass { x: 0.0, y: 0.0, radius: 14.0, hue: 200.0 };
        draw_fire_food(&mut ctx, Point::new(5.0, 6.0), &mass, &PlayerConfig { border: 6.0 });
        assert!(ctx.calls.contains(&DrawCall::LineWidth(8.0)));
        assert!(ctx.calls.contains(&DrawCall::Arc {
            x: 5.0,
            y: 6.0,
            radius: 13.0,
            start: 0.0,
            end: FULL_ANGLE
        }));
        assert!(ctx.calls.contains(&DrawCall::FillStyle("hsl(200, 100%, 50%)".into())));
    }
}
