use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent};

use crate::{console_log, window};

const START_SCREEN_ID: &str = "start-screen";
const PLAY_BUTTON_ID: &str = "play-btn";
const CREDITS_ID: &str = "credits";
const HIDDEN_CLASS: &str = "hidden";
const ROLLING_CLASS: &str = "rolling";
/// Lets the start screen fade out before the credits begin to move.
const ROLL_DELAY_MS: i32 = 1500;

/// Hooks the play button (and Space) up to hiding the start screen and
/// rolling the credits.
pub fn wire(document: &Document) -> Result<(), JsValue> {
    let (Some(start_screen), Some(play_button), Some(credits)) = (
        document.get_element_by_id(START_SCREEN_ID),
        document.get_element_by_id(PLAY_BUTTON_ID),
        document.get_element_by_id(CREDITS_ID),
    ) else {
        console_log!("credits controls missing, roll disabled");
        return Ok(());
    };

    let play_button = play_button.dyn_into::<HtmlElement>()?;
    let credits = credits.dyn_into::<HtmlElement>()?;

    {
        let start_screen = start_screen.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: MouseEvent| {
            on_play(&start_screen, &credits);
        });
        play_button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.code() == "Space" && !start_screen.class_list().contains(HIDDEN_CLASS) {
                event.prevent_default();
                play_button.click();
            }
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn on_play(start_screen: &Element, credits: &HtmlElement) {
    if let Err(err) = start_screen.class_list().add_1(HIDDEN_CLASS) {
        console_log!("could not hide start screen: {:?}", err);
    }

    let credits = credits.clone();
    let roll = Closure::once_into_js(move || {
        if let Err(err) = start_roll(&credits) {
            console_log!("could not roll credits: {:?}", err);
        }
    });

    if let Err(err) = window()
        .set_timeout_with_callback_and_timeout_and_arguments_0(roll.unchecked_ref(), ROLL_DELAY_MS)
    {
        console_log!("could not schedule credits roll: {:?}", err);
    }
}

/// Scrolls the credits by their own height, through the `--end-position`
/// variable the stylesheet animates towards.
fn start_roll(credits: &HtmlElement) -> Result<(), JsValue> {
    let height = credits.scroll_height();

    credits
        .style()
        .set_property("--end-position", &format!("-{height}px"))?;
    credits.class_list().add_1(ROLLING_CLASS)
}
