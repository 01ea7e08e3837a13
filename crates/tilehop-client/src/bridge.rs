/// Attach keyboard listeners to the document. Key state is written straight
/// into the app's `InputState`; the frame loop reads it once per tick.
#[cfg(target_family = "wasm")]
pub fn attach_input_listeners(app: &crate::app::SharedApp) {
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };

    // Keyboard: keydown
    {
        let app = Rc::clone(app);
        let bindings = app.borrow().bindings().clone();
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |evt: web_sys::KeyboardEvent| {
                let code = evt.code();
                // Keep arrows and space from scrolling the page.
                if bindings.is_bound(&code) {
                    evt.prevent_default();
                }
                app.borrow_mut().input.on_key_down(code);
            },
        );
        let _ =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Keyboard: keyup
    {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |evt: web_sys::KeyboardEvent| {
                app.borrow_mut().input.on_key_up(&evt.code());
            },
        );
        let _ =
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Key-up events never arrive once focus is gone.
    {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            app.borrow_mut().input.release_all();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
