//! Canvas renderers for the arena: shapes, cells, scene chrome and the
//! per-frame composition of all of them.

pub mod canvas;
pub mod cells;
pub mod frame;
pub mod geometry;
pub mod scene;
pub mod shapes;

pub use frame::draw_frame;
pub use scene::draw_error_message;
