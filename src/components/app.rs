use super::game_view::GameView;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden;">
            <GameView />
        </div>
    }
}
