use gloo_console::log;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Object, Reflect};

/// Fire-and-forget event reporting. If the page carries a `gtag`-style
/// global it is called; otherwise this is a no-op. Either way the call
/// is echoed to the console so events can be checked locally.
pub fn track(event_name: &str, label: &str) {
    log!("track:", event_name, label);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(gtag) = Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    let Ok(gtag) = gtag.dyn_into::<Function>() else {
        return;
    };

    let params = Object::new();
    let _ = Reflect::set(
        &params,
        &JsValue::from_str("event_label"),
        &JsValue::from_str(label),
    );
    let _ = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(event_name),
        &params,
    );
}
