pub mod camera;
pub mod view;

pub use camera::Camera;
pub use view::{HostMessage, ViewState};
