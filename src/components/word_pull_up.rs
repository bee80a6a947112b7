use yew::prelude::*;

fn heading_words(words: &str) -> Vec<String> {
    words
        .split(' ')
        .map(|word| {
            if word.is_empty() {
                // Consecutive spaces keep their width
                "\u{a0}".to_string()
            } else {
                word.to_string()
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct WordPullUpProps {
    pub words: String,
    #[prop_or_default]
    pub class: Classes,
}

/// Heading where each word rises into place on a 150ms stagger.
#[function_component(WordPullUp)]
pub fn word_pull_up(props: &WordPullUpProps) -> Html {
    html! {
        <h1 class={classes!("word-pull-up", props.class.clone())}>
            {
                for heading_words(&props.words).into_iter().enumerate().map(|(i, word)| {
                    html! {
                        <span
                            key={i}
                            class="pull-up-word"
                            style={format!("animation-delay: {}ms;", i as u32 * 150)}
                        >
                            { word }
                        </span>
                    }
                })
            }
        </h1>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_single_spaces() {
        assert_eq!(
            heading_words("LINKS ÚTEIS DO VINI"),
            vec!["LINKS", "ÚTEIS", "DO", "VINI"]
        );
    }

    #[test]
    fn empty_tokens_become_non_breaking_spaces() {
        assert_eq!(heading_words("A  B"), vec!["A", "\u{a0}", "B"]);
    }
}
