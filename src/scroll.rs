use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::error::{document, Result, SiteError};

/// Element id named by a `#fragment`, if there is one.
pub fn fragment_id(hash: &str) -> Option<&str> {
    hash.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Fragment part of an `href`, including the `#`. Empty when there is none.
pub fn link_hash(href: &str) -> &str {
    match href.find('#') {
        Some(start) if start + 1 < href.len() => &href[start..],
        _ => "",
    }
}

/// Smoothly scrolls the element named by `hash` into view.
pub fn scroll_to_fragment(hash: &str) -> Result<()> {
    let id = fragment_id(hash).ok_or_else(|| SiteError::MissingElement(hash.to_string()))?;
    let target = document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(hash.to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    debug!("Scrolled to {}", hash);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_ids() {
        assert_eq!(fragment_id("#about"), Some("about"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("about"), None);
    }

    #[test]
    fn link_hashes() {
        assert_eq!(link_hash("#design"), "#design");
        assert_eq!(link_hash("/index.html#contact"), "#contact");
        assert_eq!(link_hash("/blog"), "");
        assert_eq!(link_hash("#"), "");
    }
}
