use sky::Random;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::console_log;

/// A field of static stars; smaller layers hold fewer, larger stars.
struct StarLayer {
    id: &'static str,
    count: usize,
    size: (f64, f64),
}

const STAR_LAYERS: [StarLayer; 3] = [
    StarLayer {
        id: "stars",
        count: 80,
        size: (1.0, 2.0),
    },
    StarLayer {
        id: "stars2",
        count: 40,
        size: (2.0, 3.0),
    },
    StarLayer {
        id: "stars3",
        count: 20,
        size: (2.0, 4.0),
    },
];

/// Scatters stars over every star layer present in the page.
pub fn populate<R: Random>(document: &Document, rng: &mut R) {
    for layer in &STAR_LAYERS {
        let Some(element) = document.get_element_by_id(layer.id) else {
            console_log!("no #{} in page, skipping star layer", layer.id);
            continue;
        };

        for _ in 0..layer.count {
            if let Err(err) = add_star(document, &element, layer, rng) {
                console_log!("could not place star in #{}: {:?}", layer.id, err);
                break;
            }
        }
    }
}

fn add_star<R: Random>(
    document: &Document,
    element: &Element,
    layer: &StarLayer,
    rng: &mut R,
) -> Result<(), JsValue> {
    let star = document.create_element("div")?.dyn_into::<HtmlElement>()?;

    let size = rng.range(layer.size.0, layer.size.1);
    let top = rng.random() * 100.0;
    let left = rng.random() * 100.0;
    let opacity = rng.range(0.2, 1.0);

    star.style()
        .set_css_text(&star_style(size, top, left, opacity));
    element.append_child(&star)?;

    Ok(())
}

fn star_style(size: f64, top: f64, left: f64, opacity: f64) -> String {
    format!(
        "position: absolute; width: {size}px; height: {size}px; background: #fff; \
         border-radius: 50%; top: {top}%; left: {left}%; opacity: {opacity};"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_style_places_round_white_dot() {
        let style = star_style(1.5, 20.0, 75.5, 0.6);

        assert!(style.starts_with("position: absolute; width: 1.5px; height: 1.5px;"));
        assert!(style.contains("border-radius: 50%; top: 20%; left: 75.5%; opacity: 0.6;"));
    }

    #[test]
    fn layers_get_denser_as_stars_shrink() {
        let counts: Vec<usize> = STAR_LAYERS.iter().map(|layer| layer.count).collect();
        assert_eq!(counts, vec![80, 40, 20]);
        assert_eq!(counts.iter().sum::<usize>(), 140);
    }
}
