use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MessageEvent};
use yew::prelude::*;

use crate::model::Screen;
use crate::settings::RenderSettings;
use crate::state::{HostMessage, ViewState};
use crate::util::clog;

/// Reads a posted message as text; plain objects are stringified first.
fn message_text(e: &MessageEvent) -> Option<String> {
    let data = e.data();
    if let Some(s) = data.as_string() {
        return Some(s);
    }
    js_sys::JSON::stringify(&data).ok().map(String::from)
}

#[function_component(GameView)]
pub fn game_view() -> Html {
    let canvas_ref = use_node_ref();
    let view = use_mut_ref(|| ViewState::new(RenderSettings::load()));

    {
        let canvas_ref = canvas_ref.clone();
        let view = view.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");

            let fit_canvas = {
                let canvas = canvas.clone();
                let window = window.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                }
            };
            fit_canvas();

            let draw: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let view = view.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let mut ctx = match canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    {
                        Some(c) => c,
                        None => return,
                    };
                    let screen = Screen {
                        width: canvas.width() as f64,
                        height: canvas.height() as f64,
                    };
                    view.borrow_mut().draw(&mut ctx, screen);
                })
            };
            // RAF loop; the only place frames are drawn
            let raf_id = Rc::new(RefCell::new(None));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let draw_loop = draw.clone();
                let window_loop = window.clone();
                let closure_cell_clone = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    draw_loop();
                    if let Some(cb) = closure_cell_clone.borrow().as_ref() {
                        if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id_clone.borrow_mut() = Some(id);
                        }
                    }
                }) as Box<dyn FnMut()>));
                if let Some(cb) = closure_cell.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }
            }

            let message_cb = {
                let view = view.clone();
                Closure::wrap(Box::new(move |e: MessageEvent| {
                    let Some(raw) = message_text(&e) else {
                        clog("ignoring unreadable message");
                        return;
                    };
                    match HostMessage::parse(&raw) {
                        Ok(msg) => {
                            if let HostMessage::Error { message } = &msg {
                                clog(&format!("host error: {}", message));
                            }
                            let mut v = view.borrow_mut();
                            if v.apply(msg) && v.settings.save() {
                                clog("render settings saved");
                            }
                        }
                        Err(err) => clog(&format!("ignoring message: {}", err)),
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let _ = window
                .add_event_listener_with_callback("message", message_cb.as_ref().unchecked_ref());

            // Resizing clears the canvas; the next animation frame repaints it.
            let resize_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                fit_canvas();
            }) as Box<dyn FnMut(_)>);
            let _ = window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "message",
                    message_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = *raf_id.borrow() {
                    let _ = window.cancel_animation_frame(id);
                }
                // Drops the loop closure, which holds a handle to its own cell.
                closure_cell.borrow_mut().take();
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} id="arena-canvas" style="display:block; width:100%; height:100%;"></canvas>
    }
}
