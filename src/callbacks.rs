use std::{cell::RefCell, rc::Rc};

use sky::{Random, Scene, TriggerBox};
use web_sys::Element;

use crate::{canvas::CanvasSurface, console_log};

pub fn on_frame<R: Random>(
    scene: &Rc<RefCell<Scene<R>>>,
    surface: &Rc<RefCell<CanvasSurface>>,
    trigger: Option<&Element>,
    dt: f64,
) {
    let mut scene = scene.borrow_mut();
    let mut surface = surface.borrow_mut();

    let trigger = trigger.map(|element| {
        let bound = element.get_bounding_client_rect();

        TriggerBox {
            top: bound.top(),
            bottom: bound.bottom(),
        }
    });

    let fired = scene.barrage_fired();

    if let Err(err) = scene.frame(dt, &mut *surface, trigger) {
        console_log!("frame {} not fully drawn: {:?}", scene.stats().frames, err);
    }

    if !fired && scene.barrage_fired() {
        console_log!("fireworks away at {:.0} ms", scene.clock());
    }

    #[cfg(feature = "trace")]
    if scene.stats().frames % 600 == 0 {
        console_log!(
            "{:?}, {} live particles",
            scene.stats(),
            scene.population()
        );
    }
}

pub fn on_resize<R: Random>(scene: &Rc<RefCell<Scene<R>>>, surface: &Rc<RefCell<CanvasSurface>>) {
    let surface = surface.borrow();

    if let Err(err) = surface.fit_window() {
        console_log!("could not resize canvas: {:?}", err);
        return;
    }

    scene.borrow_mut().resize(surface.viewport());
}
