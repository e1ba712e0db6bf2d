// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! wasm entry points, one per demo.
//!
//! A page loads the module and calls the export matching its markup:
//!
//! ```js
//! import init, { colored_points } from "./pkg/pixel_glprimer.js";
//! await init();
//! colored_points();
//! ```
//!
//! Setup failures are logged to the console and also thrown to the
//! caller as a JS `Error`.

use crate::config::PrimerConfig;
use crate::demos::{
    DrawRectangle, HelloCanvas, HelloPoint1, HelloPoint2, PointDemo, Pulse, TranslatedTriangle,
};
use crate::error::GlResult;
use crate::input::PressEvent;
use crate::log::init_log;
use crate::scheduler::start_animation_loop;
use crate::surface::web::WebHost;
use log::{error, info, LevelFilter};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlSelectElement, MouseEvent};

const MODE_SELECT_ID: &str = "mode-select";

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "web")]
    console_error_panic_hook::set_once();
    if let Err(e) = init_log(LevelFilter::Info, None) {
        web_sys::console::error_1(&JsValue::from_str(&e));
    }
}

fn report<T>(r: GlResult<T>) -> Result<T, JsValue> {
    r.map_err(|e| {
        error!("{}", e);
        js_sys::Error::new(&e.to_string()).into()
    })
}

fn host() -> Result<WebHost, JsValue> {
    WebHost::new().ok_or_else(|| js_sys::Error::new("no document").into())
}

#[wasm_bindgen]
pub fn hello_canvas() -> Result<(), JsValue> {
    report(HelloCanvas::run(&host()?, &PrimerConfig::default()))?;
    Ok(())
}

#[wasm_bindgen]
pub fn hello_point1() -> Result<(), JsValue> {
    report(HelloPoint1::run(&host()?, &PrimerConfig::default()))?;
    Ok(())
}

#[wasm_bindgen]
pub fn hello_point2() -> Result<(), JsValue> {
    report(HelloPoint2::run(&host()?, &PrimerConfig::default()))?;
    Ok(())
}

#[wasm_bindgen]
pub fn draw_rectangle() -> Result<(), JsValue> {
    report(DrawRectangle::run(&host()?, &PrimerConfig::default()))?;
    Ok(())
}

#[wasm_bindgen]
pub fn clicked_points() -> Result<(), JsValue> {
    let host = host()?;
    let demo = report(PointDemo::clicked(&host, &PrimerConfig::default()))?;
    listen_presses(&host, demo)
}

#[wasm_bindgen]
pub fn colored_points() -> Result<(), JsValue> {
    let host = host()?;
    let demo = report(PointDemo::colored(&host, &PrimerConfig::default()))?;
    listen_presses(&host, demo)
}

/// Feeds every `mousedown` on the demo's canvas into the demo. The
/// listener lives as long as the page.
fn listen_presses(host: &WebHost, mut demo: PointDemo<glow::Context>) -> Result<(), JsValue> {
    let canvas = host
        .canvas(&demo.ctx.surface.id)
        .ok_or_else(|| JsValue::from(js_sys::Error::new("canvas disappeared")))?;
    let on_down = Closure::wrap(Box::new(move |e: MouseEvent| {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let rect = target.get_bounding_client_rect();
        demo.on_press(&PressEvent {
            client_x: e.client_x() as f64,
            client_y: e.client_y() as f64,
            rect_left: rect.left(),
            rect_top: rect.top(),
        });
    }) as Box<dyn FnMut(MouseEvent)>);
    canvas.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
    on_down.forget();
    Ok(())
}

#[wasm_bindgen]
pub fn translated_triangle() -> Result<(), JsValue> {
    let host = host()?;
    let mut demo = report(TranslatedTriangle::run(&host, &PrimerConfig::default()))?;
    let on_change = Closure::wrap(Box::new(move |e: Event| {
        let Some(select) = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };
        if select.id() == MODE_SELECT_ID {
            demo.select_mode(&select.value());
        }
    }) as Box<dyn FnMut(Event)>);
    host.document()
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

#[wasm_bindgen]
pub fn pulse() -> Result<(), JsValue> {
    let demo = report(Pulse::setup(&host()?, &PrimerConfig::default()))?;
    start_animation_loop(demo)?;
    info!("pulse running");
    Ok(())
}
