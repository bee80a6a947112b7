use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

// An element counts as in view once its top edge crosses below 90% of the
// viewport height.
fn crossed_into_view(rect_top: f64, viewport_height: f64) -> bool {
    rect_top < viewport_height * 0.9
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealCardProps {
    pub children: Children,
    /// Milliseconds between entering the viewport and the reveal.
    #[prop_or_default]
    pub delay: u32,
}

/// Wrapper that fades its children in the first time they scroll into view.
/// The reveal fires once and never reverts.
#[function_component(ScrollRevealCard)]
pub fn scroll_reveal_card(props: &ScrollRevealCardProps) -> Html {
    let node_ref = use_node_ref();
    let is_visible = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = is_visible.setter();
        let delay = props.delay;
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let triggered = Rc::new(Cell::new(false));

                let check = {
                    let window = window.clone();
                    move || {
                        // Once the reveal timer is scheduled, later scroll
                        // events must not schedule another one
                        if triggered.get() {
                            return;
                        }
                        if let Some(element) = node_ref.cast::<web_sys::Element>() {
                            let rect_top = element.get_bounding_client_rect().top();
                            let viewport_height =
                                window.inner_height().unwrap().as_f64().unwrap();
                            if crossed_into_view(rect_top, viewport_height) {
                                triggered.set(true);
                                let visible = visible.clone();
                                let timeout = Timeout::new(delay, move || {
                                    visible.set(true);
                                });
                                timeout.forget();
                            }
                        }
                    }
                };

                // Reveal anything already in view without waiting for a scroll
                check();

                let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <div ref={node_ref} class={classes!("scroll-reveal", (*is_visible).then(|| "visible"))}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_the_top_edge_is_inside_the_threshold() {
        assert!(crossed_into_view(500.0, 800.0));
    }

    #[test]
    fn stays_hidden_below_the_fold() {
        assert!(!crossed_into_view(780.0, 800.0));
        assert!(!crossed_into_view(720.0, 800.0));
    }

    #[test]
    fn negative_top_still_counts_as_in_view() {
        // Element already scrolled past the top of the viewport
        assert!(crossed_into_view(-120.0, 800.0));
    }
}
