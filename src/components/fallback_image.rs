use log::warn;
use web_sys::{Event, HtmlImageElement};
use yew::prelude::*;

use crate::config;
use crate::fallback::unavailable_image;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Source to render and whether it is the placeholder. A failure only
/// counts for the source that failed, so a new `src` gets its own attempt.
fn displayed_src(src: &AttrValue, failed_src: Option<&AttrValue>) -> (AttrValue, bool) {
    if failed_src == Some(src) {
        (AttrValue::from(unavailable_image()), true)
    } else {
        (src.clone(), false)
    }
}

/// `<img>` that swaps itself for a placeholder when the source fails to load.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed_src = use_state(|| None::<AttrValue>);
    let img_ref = use_node_ref();

    let (src, failed) = displayed_src(&props.src, (*failed_src).as_ref());

    let onerror = {
        let failed_src = failed_src.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            if (*failed_src).as_ref() != Some(&src) {
                warn!("Image {} failed to load, using placeholder", src);
                failed_src.set(Some(src.clone()));
            }
        })
    };

    // An image that already failed before the listener was attached never
    // fires `error` again.
    {
        let failed_src = failed_src.clone();
        let img_ref = img_ref.clone();
        use_effect_with_deps(
            move |src: &AttrValue| {
                if let Some(img) = img_ref.cast::<HtmlImageElement>() {
                    if img.complete() && img.natural_width() == 0 {
                        failed_src.set(Some(src.clone()));
                    }
                }
                || ()
            },
            props.src.clone(),
        );
    }

    html! {
        <img
            ref={img_ref}
            src={src}
            alt={props.alt.clone()}
            class={classes!(props.class.clone(), failed.then(|| config::REVEALED_CLASS))}
            loading="lazy"
            onerror={onerror}
        />
    }
}
