use web_sys::MouseEvent;
use yew::prelude::*;

use crate::events::{binding, dispatch, Command, UiEvent, UiEventKind};
use crate::scroll::link_hash;

const LINKS: &[(&str, &str)] = &[
    ("#about", "Sobre"),
    ("#design", "Design"),
    ("#industry", "Indústria"),
    ("#vantagens", "Vantagens"),
    ("#contact", "Contacto"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_command: Callback<Command>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let links = LINKS.iter().map(|&(href, label)| {
        let onclick = {
            let on_command = props.on_command.clone();
            Callback::from(move |e: MouseEvent| {
                let routed = dispatch(&UiEvent::NavLinkClicked {
                    hash: link_hash(href).to_string(),
                });
                if routed.prevent_default {
                    e.prevent_default();
                }
                on_command.emit(routed.command);
            })
        };
        html! {
            <li key={href}><a href={href} onclick={onclick}>{label}</a></li>
        }
    });

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo">{"Luzion"}</a>
                <ul class={classes!(binding(UiEventKind::NavLink).class_name())}>
                    { for links }
                </ul>
            </div>
        </nav>
    }
}
