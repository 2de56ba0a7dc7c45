use crate::model::{Cell, Point, Screen};
use crate::render::canvas::Canvas;

pub const BASE_ZOOM: f64 = 1.5;
/// Cell radius at which the target zoom equals `BASE_ZOOM`.
pub const BASE_RADIUS: f64 = 100.0;
pub const MIN_ZOOM: f64 = 0.3;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_SMOOTHING: f64 = 0.2;

/// Follows a focus cell across frames. Zoom is low-pass filtered, the focus
/// point is not.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub zoom: f64,
    pub focus_x: f64,
    pub focus_y: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            focus_x: 0.0,
            focus_y: 0.0,
        }
    }
}

impl Camera {
    pub fn target_zoom(radius: f64) -> f64 {
        (BASE_ZOOM / (radius / BASE_RADIUS)).clamp(MIN_ZOOM, MAX_ZOOM)
    }

    /// Advances the zoom filter one frame and snaps the focus onto `cell`.
    pub fn follow(&mut self, cell: &Cell) {
        self.zoom += (Self::target_zoom(cell.radius) - self.zoom) * ZOOM_SMOOTHING;
        self.focus_x = cell.x;
        self.focus_y = cell.y;
    }

    /// Centers the screen on `focus` and scales by the smoothed zoom.
    /// Leaves the canvas untouched when there is nothing to follow.
    pub fn setup(&mut self, ctx: &mut impl Canvas, focus: Option<&Cell>, screen_width: f64, screen_height: f64) {
        let Some(cell) = focus else {
            return;
        };
        self.follow(cell);
        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ctx.translate(screen_width / 2.0, screen_height / 2.0);
        ctx.scale(self.zoom, self.zoom);
        ctx.translate(-self.focus_x, -self.focus_y);
    }

    pub fn reset(ctx: &mut impl Canvas) {
        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    }

    /// Screen-relative position of a world point as seen from `player`,
    /// without zoom: the convention the renderers' reset-space entities use.
    pub fn relative_to(player: Point, world: Point, screen: Screen) -> Point {
        Point {
            x: world.x - player.x + screen.width / 2.0,
            y: world.y - player.y + screen.height / 2.0,
        }
    }
}
