use log::{info, warn};

/// How an outbound link should leave the page. Messaging deep links replace
/// the current tab so the OS can hand the URL to the app; everything else
/// opens a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    SameTab,
    NewTab,
}

/// `None` means the link is malformed and navigation is skipped entirely.
pub fn classify(link: &str) -> Option<LinkAction> {
    if url::Url::parse(link).is_err() {
        return None;
    }
    if link.contains("wa.me") || link.contains("whatsapp") {
        Some(LinkAction::SameTab)
    } else {
        Some(LinkAction::NewTab)
    }
}

pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

pub fn open_external(link: &str) {
    match classify(link) {
        None => {
            warn!("Ignoring malformed external link: {}", link);
        }
        Some(LinkAction::SameTab) => {
            info!("Navigating to messaging deep link");
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(link);
            }
        }
        Some(LinkAction::NewTab) => {
            info!("Opening external link: {}", link);
            if let Some(window) = web_sys::window() {
                match window.open_with_url_and_target_and_features(
                    link,
                    "_blank",
                    "noopener,noreferrer",
                ) {
                    Ok(Some(_)) => {}
                    // Popup blocked, navigate in place instead
                    _ => {
                        let _ = window.location().set_href(link);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wa_me_links_navigate_in_place() {
        assert_eq!(
            classify("https://wa.me/5527920016836?text=Ol%C3%A1"),
            Some(LinkAction::SameTab)
        );
    }

    #[test]
    fn whatsapp_hosts_count_as_deep_links() {
        assert_eq!(
            classify("https://api.whatsapp.com/send?phone=5527920016836"),
            Some(LinkAction::SameTab)
        );
    }

    #[test]
    fn generic_links_open_a_new_tab() {
        assert_eq!(
            classify("https://form.respondi.app/EKUlJo3b"),
            Some(LinkAction::NewTab)
        );
        assert_eq!(
            classify("https://www.instagram.com/mateusmachadoprod/"),
            Some(LinkAction::NewTab)
        );
    }

    #[test]
    fn malformed_links_are_rejected() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("not a url"), None);
        assert_eq!(classify("/relative/path"), None);
    }

    #[test]
    fn whatsapp_link_encodes_the_message() {
        let link = whatsapp_link("5527920016836", "Olá, quero saber mais sobre a mentoria individual ");
        assert_eq!(
            link,
            "https://wa.me/5527920016836?text=Ol%C3%A1%2C%20quero%20saber%20mais%20sobre%20a%20mentoria%20individual%20"
        );
        assert_eq!(classify(&link), Some(LinkAction::SameTab));
    }
}
