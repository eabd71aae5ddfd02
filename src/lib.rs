use std::{cell::RefCell, rc::Rc};

use sky::{Random, Scene};
use wasm_bindgen::{prelude::*, JsCast};

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format_args!($($t)*).to_string().into()))
}

pub(crate) use console_log;

mod callbacks;
mod canvas;
mod credits;
mod error;
mod options;
mod stars;

use canvas::CanvasSurface;

pub const CANVAS_ID: &str = "comet-canvas";
/// The closing section whose arrival sets off the fireworks.
pub const TRIGGER_SELECTOR: &str = ".thanks";
/// `data-*` key on the canvas holding the JSON config.
pub const CONFIG_KEY: &str = "sky";

/// Browser randomness, as used for every particle on the page.
pub struct MathRandom;

impl Random for MathRandom {
    fn random(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn document() -> web_sys::Document {
    window()
        .document()
        .expect("should have a document on window")
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    if let Err(err) = window().request_animation_frame(f.as_ref().unchecked_ref()) {
        console_log!("could not request animation frame: {:?}", err);
    }
}

/// Milliseconds from a monotonic clock.
fn now() -> f64 {
    window()
        .performance()
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    stars::populate(&document(), &mut MathRandom);
    if let Err(err) = credits::wire(&document()) {
        console_log!("credits roll disabled: {err:?}");
    }

    let Some(canvas) = document().get_element_by_id(CANVAS_ID) else {
        console_log!("no #{CANVAS_ID} in page, sky disabled");
        return Ok(());
    };

    let surface = match canvas
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| error::StarfallError::from("element is not a canvas"))
        .and_then(CanvasSurface::new)
    {
        Ok(surface) => surface,
        Err(err) => {
            console_log!("#{CANVAS_ID} unusable, sky disabled: {err}");
            return Ok(());
        }
    };

    if let Err(err) = surface.fit_window() {
        console_log!("could not fit #{CANVAS_ID} to the window: {err:?}");
    }

    let config = options::read_config(surface.canvas());
    let viewport = surface.viewport();
    console_log!("sky ready at {}x{}", viewport.width, viewport.height);

    let scene = Rc::new(RefCell::new(Scene::new(config, viewport, MathRandom)));
    let surface = Rc::new(RefCell::new(surface));

    let trigger = document()
        .query_selector(TRIGGER_SELECTOR)
        .unwrap_or_else(|err| {
            console_log!("bad trigger selector {TRIGGER_SELECTOR}: {err:?}");
            None
        });
    if trigger.is_none() {
        console_log!("no {TRIGGER_SELECTOR} in page, fireworks disabled");
    }

    {
        let scene = scene.clone();
        let surface = surface.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: JsValue| {
            callbacks::on_resize(&scene, &surface);
        });
        window().add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let f = Rc::new(RefCell::new(None));
    let g = f.clone();

    {
        let mut last_time = now();

        *g.borrow_mut() = Some(Closure::new(move || {
            let time = now();
            let dt = time - last_time;
            last_time = time;

            callbacks::on_frame(&scene, &surface, trigger.as_ref(), dt);

            if let Some(closure) = f.borrow().as_ref() {
                request_animation_frame(closure);
            }
        }));

        if let Some(closure) = g.borrow().as_ref() {
            request_animation_frame(closure);
        }
    }

    Ok(())
}
