use blockwright_editor::{InputEvent, Key, PointerButton};
use glam::Vec2;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;

use crate::app::SharedApp;

/// Register canvas and window listeners ONCE at init. Closures are leaked
/// via `.forget()` since they live for the app lifetime.
pub fn register_input_listeners(canvas: &web_sys::HtmlCanvasElement, app: SharedApp) {
    let target: &web_sys::EventTarget = canvas.as_ref();

    // mousedown
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |e: web_sys::MouseEvent| {
            if let Some(button) = PointerButton::from_dom(e.button()) {
                if button == PointerButton::Middle {
                    e.prevent_default();
                }
                app.borrow_mut().handle(InputEvent::PointerDown {
                    pos: pointer_pos(&e),
                    button,
                });
            }
        });
        add_listener(target, "mousedown", closure);
    }

    // mousemove
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |e: web_sys::MouseEvent| {
            app.borrow_mut().handle(InputEvent::PointerMove { pos: pointer_pos(&e) });
        });
        add_listener(target, "mousemove", closure);
    }

    // mouseup
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |e: web_sys::MouseEvent| {
            if let Some(button) = PointerButton::from_dom(e.button()) {
                app.borrow_mut().handle(InputEvent::PointerUp {
                    pos: pointer_pos(&e),
                    button,
                });
            }
        });
        add_listener(target, "mouseup", closure);
    }

    // mouseleave
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_: web_sys::MouseEvent| {
            app.borrow_mut().handle(InputEvent::PointerLeave);
        });
        add_listener(target, "mouseleave", closure);
    }

    // wheel (zoom)
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(web_sys::WheelEvent)>::new(move |e: web_sys::WheelEvent| {
            e.prevent_default();
            app.borrow_mut().handle(InputEvent::Wheel {
                pos: pointer_pos(&e),
                delta_y: e.delta_y() as f32,
            });
        });
        // Non-passive so preventDefault stops page scrolling.
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .expect("failed to add wheel listener");
        closure.forget();
    }

    // contextmenu (right button rotates and removes)
    {
        let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |e: web_sys::MouseEvent| {
            e.prevent_default();
        });
        add_listener(target, "contextmenu", closure);
    }

    let window = web_sys::window().expect("no global window");
    let window_target: &web_sys::EventTarget = window.as_ref();

    // keydown / keyup
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
            if typing_in_field(&e) {
                return;
            }
            let key = Key::from_dom(&e.key());
            if matches!(key, Key::Space | Key::ArrowLeft | Key::ArrowRight) {
                e.prevent_default();
            }
            app.borrow_mut().handle(InputEvent::KeyDown(key));
        });
        add_listener(window_target, "keydown", closure);
    }
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
            app.borrow_mut().handle(InputEvent::KeyUp(Key::from_dom(&e.key())));
        });
        add_listener(window_target, "keyup", closure);
    }

    // resize
    {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            app.borrow_mut().fit_to_container();
        });
        add_listener(window_target, "resize", closure);
    }
}

fn add_listener<T: ?Sized + WasmClosure>(target: &web_sys::EventTarget, kind: &str, closure: Closure<T>) {
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .unwrap_or_else(|_| panic!("failed to add {kind} listener"));
    closure.forget();
}

fn pointer_pos(e: &web_sys::MouseEvent) -> Vec2 {
    Vec2::new(e.offset_x() as f32, e.offset_y() as f32)
}

/// Keys typed into a form field belong to the field, not the editor.
fn typing_in_field(e: &web_sys::KeyboardEvent) -> bool {
    e.target().is_some_and(|t| {
        t.dyn_ref::<web_sys::HtmlInputElement>().is_some()
            || t.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
    })
}
