use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::links;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardVariant {
    Cyan,
    Green,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

// Length in bytes of a case-insensitive match of `word_lower` at the start
// of `text`, or None. Comparison walks chars so accented text never gets
// sliced mid code point.
fn match_len(text: &str, word_lower: &[char]) -> Option<usize> {
    let mut remaining = word_lower;
    let mut consumed = 0;
    for c in text.chars() {
        if remaining.is_empty() {
            break;
        }
        for lc in c.to_lowercase() {
            match remaining.split_first() {
                Some((&expected, rest)) if expected == lc => remaining = rest,
                _ => return None,
            }
        }
        consumed += c.len_utf8();
    }
    if remaining.is_empty() {
        Some(consumed)
    } else {
        None
    }
}

fn find_word(text: &str, word: &str, from: usize) -> Option<(usize, usize)> {
    if word.is_empty() || from >= text.len() {
        return None;
    }
    let word_lower: Vec<char> = word.chars().flat_map(|c| c.to_lowercase()).collect();
    for (offset, _) in text[from..].char_indices() {
        let start = from + offset;
        if let Some(len) = match_len(&text[start..], &word_lower) {
            return Some((start, start + len));
        }
    }
    None
}

/// Splits `text` into alternating plain/highlighted segments, matching each
/// word case-insensitively in order. A cursor keeps every search anchored
/// after the previous match, so repeated words hit their next occurrence.
/// Words that never occur past the cursor are skipped.
pub fn highlight_segments(text: &str, words: &[String]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for word in words {
        if let Some((start, end)) = find_word(text, word, cursor) {
            if start > cursor {
                segments.push(Segment {
                    text: text[cursor..start].to_string(),
                    highlighted: false,
                });
            }
            segments.push(Segment {
                text: text[start..end].to_string(),
                highlighted: true,
            });
            cursor = end;
        }
    }
    if cursor < text.len() {
        segments.push(Segment {
            text: text[cursor..].to_string(),
            highlighted: false,
        });
    }
    segments
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CtaBehavior {
    Locked,
    External,
    Popup,
    Inert,
}

// Lock wins over everything: a locked card never navigates and never opens
// the popup.
fn cta_behavior(is_locked: bool, has_external: bool, has_popup: bool) -> CtaBehavior {
    if is_locked {
        CtaBehavior::Locked
    } else if has_external {
        CtaBehavior::External
    } else if has_popup {
        CtaBehavior::Popup
    } else {
        CtaBehavior::Inert
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub title: String,
    pub description: String,
    pub button_text: String,
    #[prop_or(CardVariant::Cyan)]
    pub variant: CardVariant,
    #[prop_or_default]
    pub highlight_words: Vec<String>,
    #[prop_or_default]
    pub image_src: Option<String>,
    #[prop_or_default]
    pub show_lock: bool,
    #[prop_or_default]
    pub popup_image: Option<String>,
    #[prop_or_default]
    pub popup_description: Option<String>,
    #[prop_or_default]
    pub external_link: Option<String>,
    #[prop_or_default]
    pub is_locked: bool,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let is_open = use_state(|| false);
    let is_shaking = use_state(|| false);

    let glow_class = match props.variant {
        CardVariant::Cyan => "glow-border-cyan",
        CardVariant::Green => "glow-border-green",
    };
    let button_tint = match props.variant {
        CardVariant::Cyan => "button-cyan",
        CardVariant::Green => "button-green",
    };
    let highlight_tint = match props.variant {
        CardVariant::Cyan => "highlight-cyan",
        CardVariant::Green => "highlight-green",
    };
    let title_class = match props.variant {
        CardVariant::Cyan => "card-title",
        CardVariant::Green => "card-title accent",
    };

    let has_popup = props.popup_image.is_some() && props.popup_description.is_some();

    let on_popup_click = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            if has_popup {
                is_open.set(true);
            }
        })
    };

    let close_popup = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_open.set(false);
        })
    };

    let on_external_click = {
        let link = props.external_link.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            if let Some(link) = &link {
                links::open_external(link);
            }
        })
    };

    let on_locked_click = {
        let is_shaking = is_shaking.clone();
        Callback::from(move |_: MouseEvent| {
            is_shaking.set(true);
            let shaking = is_shaking.setter();
            let timeout = Timeout::new(config::SHAKE_DURATION_MS, move || {
                shaking.set(false);
            });
            timeout.forget();
        })
    };

    let description = html! {
        <p class="card-description">
            {
                for highlight_segments(&props.description, &props.highlight_words)
                    .into_iter()
                    .map(|segment| {
                        if segment.highlighted {
                            html! {
                                <span class={classes!("highlight", highlight_tint)}>
                                    { segment.text }
                                </span>
                            }
                        } else {
                            html! { <span>{ segment.text }</span> }
                        }
                    })
            }
        </p>
    };

    let behavior = cta_behavior(props.is_locked, props.external_link.is_some(), has_popup);

    let button = if behavior == CtaBehavior::Locked {
        html! {
            <button
                type="button"
                class={classes!("card-button", button_tint, "locked", (*is_shaking).then(|| "shake"))}
                onclick={on_locked_click}
            >
                { props.button_text.clone() }
                <span class="button-icon">{"🔒"}</span>
            </button>
        }
    } else if behavior == CtaBehavior::External {
        html! {
            <button
                type="button"
                class={classes!("card-button", button_tint)}
                onclick={on_external_click}
            >
                { props.button_text.clone() }
                <span class="button-icon">{"↗"}</span>
            </button>
        }
    } else {
        html! {
            <button
                type="button"
                class={classes!("card-button", button_tint)}
                onclick={on_popup_click}
            >
                { props.button_text.clone() }
                <span class="button-icon">{"↗"}</span>
            </button>
        }
    };

    let media = match &props.image_src {
        Some(src) => html! {
            <div class="card-media">
                <img
                    src={src.clone()}
                    alt={props.title.clone()}
                    loading="lazy"
                    class="card-image"
                />
                {
                    if props.show_lock {
                        html! {
                            <div class="lock-overlay">
                                <div class="lock-badge">{"🔒"}</div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if props.variant == CardVariant::Cyan {
                        html! { <div class="image-edge-glow"></div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        },
        None => {
            let placeholder_tint = match props.variant {
                CardVariant::Cyan => "placeholder-cyan",
                CardVariant::Green => "placeholder-green",
            };
            html! {
                <div class="card-media">
                    <div class={classes!("image-placeholder", placeholder_tint)}>
                        <div class="placeholder-inner"></div>
                    </div>
                </div>
            }
        }
    };

    let popup = if *is_open {
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
        html! {
            <div class="modal-overlay" onclick={close_popup.clone()}>
                <div class="modal-content popup-card" onclick={keep_open}>
                    <button class="modal-close" onclick={close_popup.clone()}>{"×"}</button>
                    <h3 class="popup-title">{ props.title.clone() }</h3>
                    <div class="popup-body">
                        {
                            if let Some(image) = &props.popup_image {
                                html! {
                                    <div class="popup-portrait-wrap">
                                        <img
                                            src={image.clone()}
                                            alt={props.title.clone()}
                                            class="popup-portrait"
                                        />
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(text) = &props.popup_description {
                                html! { <p class="popup-description">{ text.clone() }</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <>
            <div class={classes!("service-card", glow_class)}>
                <div class="card-layout">
                    <div class="card-body">
                        <h3 class={title_class}>{ props.title.clone() }</h3>
                        { description }
                        <div class="card-actions">
                            { button }
                        </div>
                    </div>
                    { media }
                </div>
            </div>
            { popup }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassembled(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn no_words_yields_one_plain_segment() {
        let segments = highlight_segments("Gestão de tráfego estratégica", &[]);
        assert_eq!(
            segments,
            vec![Segment {
                text: "Gestão de tráfego estratégica".to_string(),
                highlighted: false,
            }]
        );
    }

    #[test]
    fn highlights_each_word_in_order() {
        let words = ["Performance".to_string(), "equipe".to_string()];
        let segments = highlight_segments("Alta Performance sem equipe", &words);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].text, "Alta ");
        assert!(!segments[0].highlighted);
        assert_eq!(segments[1].text, "Performance");
        assert!(segments[1].highlighted);
        assert_eq!(segments[2].text, " sem ");
        assert!(!segments[2].highlighted);
        assert_eq!(segments[3].text, "equipe");
        assert!(segments[3].highlighted);
    }

    #[test]
    fn matching_is_case_insensitive_and_keeps_original_casing() {
        let words = ["tráfego".to_string()];
        let segments = highlight_segments("Tráfego Pago", &words);
        assert_eq!(segments[0].text, "Tráfego");
        assert!(segments[0].highlighted);
        assert_eq!(segments[1].text, " Pago");
        assert!(!segments[1].highlighted);
    }

    #[test]
    fn absent_words_are_skipped() {
        let words = ["faturamento".to_string(), "Pago".to_string()];
        let segments = highlight_segments("Tráfego Pago", &words);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Tráfego ");
        assert!(!segments[0].highlighted);
        assert_eq!(segments[1].text, "Pago");
        assert!(segments[1].highlighted);
    }

    #[test]
    fn repeated_words_anchor_after_the_previous_match() {
        let words = ["dia".to_string(), "dia".to_string()];
        let segments = highlight_segments("dia após dia", &words);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "dia");
        assert!(segments[0].highlighted);
        assert_eq!(segments[1].text, " após ");
        assert!(segments[2].highlighted);
        assert_eq!(segments[2].text, "dia");
    }

    #[test]
    fn word_with_no_further_occurrence_is_skipped() {
        // Second "pago" has nothing left to match past the cursor
        let words = ["pago".to_string(), "pago".to_string()];
        let segments = highlight_segments("Pago primeiro", &words);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Pago");
        assert!(segments[0].highlighted);
        assert_eq!(segments[1].text, " primeiro");
    }

    #[test]
    fn segments_reassemble_the_original_text() {
        let text = "Me dê a mão e eu te mostro o método que me tirou de um trabalho exaustivo";
        let words = ["método".to_string(), "trabalho".to_string()];
        assert_eq!(reassembled(&highlight_segments(text, &words)), text);
    }

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(highlight_segments("", &["algo".to_string()]).is_empty());
    }

    #[test]
    fn locked_card_never_navigates_or_opens_the_popup() {
        assert_eq!(cta_behavior(true, true, false), CtaBehavior::Locked);
        assert_eq!(cta_behavior(true, false, true), CtaBehavior::Locked);
    }

    #[test]
    fn external_link_takes_priority_over_the_popup() {
        assert_eq!(cta_behavior(false, true, true), CtaBehavior::External);
    }

    #[test]
    fn popup_requires_both_image_and_description() {
        assert_eq!(cta_behavior(false, false, true), CtaBehavior::Popup);
        assert_eq!(cta_behavior(false, false, false), CtaBehavior::Inert);
    }
}
