use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

use crate::events::{binding, dispatch, Command, UiEvent, UiEventKind};
use crate::popup::OverlayId;

/// True only when the click landed on the overlay container itself, not on
/// something inside it.
fn hits_background<T: PartialEq>(target: Option<T>, container: Option<T>) -> bool {
    match (target, container) {
        (Some(target), Some(container)) => target == container,
        _ => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct PopupOverlayProps {
    pub id: OverlayId,
    pub active: bool,
    pub on_command: Callback<Command>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PopupOverlay)]
pub fn popup_overlay(props: &PopupOverlayProps) -> Html {
    let overlay_ref = use_node_ref();

    let on_background_click = {
        let overlay_ref = overlay_ref.clone();
        let on_command = props.on_command.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let on_background = hits_background(target, overlay_ref.get());
            on_command.emit(dispatch(&UiEvent::OverlayClicked { on_background }).command);
        })
    };

    let on_close = props
        .on_command
        .reform(|_: MouseEvent| dispatch(&UiEvent::CloseControl).command);

    html! {
        <div
            id={props.id.dom_id()}
            ref={overlay_ref}
            class={classes!(
                binding(UiEventKind::OverlayClick).class_name(),
                props.active.then(|| "active")
            )}
            onclick={on_background_click}
        >
            <div class="popup-content">
                <button
                    class={classes!(binding(UiEventKind::CloseControl).class_name())}
                    onclick={on_close}
                >
                    {"×"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_on_container_hits_background() {
        assert!(hits_background(Some("overlay"), Some("overlay")));
    }

    #[test]
    fn click_on_content_does_not() {
        assert!(!hits_background(Some("close-button"), Some("overlay")));
        assert!(!hits_background(Some("popup-content"), Some("overlay")));
    }

    #[test]
    fn missing_target_or_container_does_not() {
        assert!(!hits_background(None, Some("overlay")));
        assert!(!hits_background(Some("overlay"), None));
        assert!(!hits_background::<&str>(None, None));
    }
}
