mod components;
mod model;
mod render;
mod settings;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
