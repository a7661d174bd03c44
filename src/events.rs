//! Page events and what they do.
//!
//! Components turn DOM events into [`UiEvent`]s and run whatever [`Command`]
//! [`dispatch`] hands back, so the routing rules stay testable without a
//! browser.

use crate::config;
use crate::popup::{OverlayId, PopupAction};

#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// A nav link was clicked. `hash` is the link's fragment including `#`,
    /// empty when the link has none.
    NavLinkClicked { hash: String },
    CloseControl,
    /// A click reached an overlay container. `on_background` is true only
    /// when the container itself was the target.
    OverlayClicked { on_background: bool },
    KeyDown { key: String },
    OpenCalculator,
    RunCalculator,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Popup(PopupAction),
    ScrollTo(String),
    Calculate,
    Nothing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dispatch {
    pub command: Command,
    pub prevent_default: bool,
}

impl Dispatch {
    fn run(command: Command) -> Self {
        Self { command, prevent_default: false }
    }

    fn intercept(command: Command) -> Self {
        Self { command, prevent_default: true }
    }

    fn ignore() -> Self {
        Self::run(Command::Nothing)
    }
}

pub fn dispatch(event: &UiEvent) -> Dispatch {
    match event {
        UiEvent::NavLinkClicked { hash } if hash == config::CONTACT_FRAGMENT => {
            Dispatch::intercept(Command::Popup(PopupAction::Open(OverlayId::Contact)))
        }
        UiEvent::NavLinkClicked { hash } if is_fragment(hash) => {
            Dispatch::intercept(Command::ScrollTo(hash.clone()))
        }
        UiEvent::NavLinkClicked { .. } => Dispatch::ignore(),
        UiEvent::CloseControl => Dispatch::run(Command::Popup(PopupAction::CloseAll)),
        UiEvent::OverlayClicked { on_background: true } => {
            Dispatch::run(Command::Popup(PopupAction::CloseAll))
        }
        UiEvent::OverlayClicked { on_background: false } => Dispatch::ignore(),
        UiEvent::KeyDown { key } if key == config::CANCEL_KEY => {
            Dispatch::run(Command::Popup(PopupAction::CloseAll))
        }
        UiEvent::KeyDown { .. } => Dispatch::ignore(),
        UiEvent::OpenCalculator => {
            Dispatch::run(Command::Popup(PopupAction::Open(OverlayId::Calculator)))
        }
        UiEvent::RunCalculator => Dispatch::run(Command::Calculate),
    }
}

/// `"#"` alone is what an anchor reports for `href="#"`; browsers treat it
/// as an empty hash, so it is not a fragment either.
fn is_fragment(hash: &str) -> bool {
    hash.len() > 1 && hash.starts_with('#')
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEventKind {
    NavLink,
    CloseControl,
    OverlayClick,
    KeyDown,
    OpenCalculator,
    RunCalculator,
}

impl UiEventKind {
    pub const ALL: [UiEventKind; 6] = [
        UiEventKind::NavLink,
        UiEventKind::CloseControl,
        UiEventKind::OverlayClick,
        UiEventKind::KeyDown,
        UiEventKind::OpenCalculator,
        UiEventKind::RunCalculator,
    ];
}

impl UiEvent {
    pub fn kind(&self) -> UiEventKind {
        match self {
            UiEvent::NavLinkClicked { .. } => UiEventKind::NavLink,
            UiEvent::CloseControl => UiEventKind::CloseControl,
            UiEvent::OverlayClicked { .. } => UiEventKind::OverlayClick,
            UiEvent::KeyDown { .. } => UiEventKind::KeyDown,
            UiEvent::OpenCalculator => UiEventKind::OpenCalculator,
            UiEvent::RunCalculator => UiEventKind::RunCalculator,
        }
    }
}

/// DOM event and target that produce one kind of [`UiEvent`]. Components
/// take their listener names, classes and ids from here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Binding {
    pub event: &'static str,
    pub target: &'static str,
    pub kind: UiEventKind,
}

impl Binding {
    /// First class of a `.class` target.
    pub fn class_name(&self) -> Option<&'static str> {
        self.target
            .strip_prefix('.')
            .and_then(|rest| rest.split_whitespace().next())
    }

    /// Element id of a `#id` target.
    pub fn element_id(&self) -> Option<&'static str> {
        self.target.strip_prefix('#')
    }
}

pub fn binding(kind: UiEventKind) -> Binding {
    let (event, target) = match kind {
        UiEventKind::NavLink => ("click", ".nav-links a"),
        UiEventKind::CloseControl => ("click", ".close-popup"),
        UiEventKind::OverlayClick => ("click", ".popup-overlay"),
        UiEventKind::KeyDown => ("keydown", "window"),
        UiEventKind::OpenCalculator => ("click", "#openCalcBtn"),
        UiEventKind::RunCalculator => ("click", "#calcBtn"),
    };
    Binding { event, target, kind }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nav(hash: &str) -> Dispatch {
        dispatch(&UiEvent::NavLinkClicked { hash: hash.to_string() })
    }

    #[test]
    fn contact_link_opens_contact_popup() {
        assert_eq!(
            nav("#contact"),
            Dispatch {
                command: Command::Popup(PopupAction::Open(OverlayId::Contact)),
                prevent_default: true,
            }
        );
    }

    #[test]
    fn other_fragments_scroll_smoothly() {
        assert_eq!(
            nav("#vantagens"),
            Dispatch {
                command: Command::ScrollTo("#vantagens".to_string()),
                prevent_default: true,
            }
        );
    }

    #[test]
    fn links_without_fragment_navigate_normally() {
        assert_eq!(nav(""), Dispatch::ignore());
        assert_eq!(nav("#"), Dispatch::ignore());
    }

    #[test]
    fn only_background_clicks_close() {
        let background = dispatch(&UiEvent::OverlayClicked { on_background: true });
        assert_eq!(background.command, Command::Popup(PopupAction::CloseAll));

        let content = dispatch(&UiEvent::OverlayClicked { on_background: false });
        assert_eq!(content.command, Command::Nothing);
    }

    #[test]
    fn escape_closes_other_keys_do_not() {
        let escape = dispatch(&UiEvent::KeyDown { key: "Escape".to_string() });
        assert_eq!(escape.command, Command::Popup(PopupAction::CloseAll));
        assert!(!escape.prevent_default);

        let enter = dispatch(&UiEvent::KeyDown { key: "Enter".to_string() });
        assert_eq!(enter.command, Command::Nothing);
    }

    #[test]
    fn calculator_controls() {
        assert_eq!(
            dispatch(&UiEvent::OpenCalculator).command,
            Command::Popup(PopupAction::Open(OverlayId::Calculator))
        );
        assert_eq!(dispatch(&UiEvent::RunCalculator).command, Command::Calculate);
        assert_eq!(dispatch(&UiEvent::CloseControl).command, Command::Popup(PopupAction::CloseAll));
    }

    #[test]
    fn every_event_kind_has_one_binding() {
        let events = [
            UiEvent::NavLinkClicked { hash: "#about".to_string() },
            UiEvent::CloseControl,
            UiEvent::OverlayClicked { on_background: true },
            UiEvent::KeyDown { key: "Escape".to_string() },
            UiEvent::OpenCalculator,
            UiEvent::RunCalculator,
        ];
        for kind in UiEventKind::ALL {
            assert_eq!(events.iter().filter(|e| e.kind() == kind).count(), 1);
            assert_eq!(UiEventKind::ALL.iter().filter(|&&k| k == kind).count(), 1);
            assert_eq!(binding(kind).kind, kind);
        }
    }

    #[test]
    fn bindings_name_the_markup_they_attach_to() {
        assert_eq!(binding(UiEventKind::KeyDown).event, "keydown");
        assert_eq!(binding(UiEventKind::CloseControl).class_name(), Some("close-popup"));
        assert_eq!(binding(UiEventKind::OverlayClick).class_name(), Some("popup-overlay"));
        assert_eq!(binding(UiEventKind::NavLink).class_name(), Some("nav-links"));
        assert_eq!(binding(UiEventKind::OpenCalculator).element_id(), Some("openCalcBtn"));
        assert_eq!(binding(UiEventKind::RunCalculator).element_id(), Some("calcBtn"));
        assert_eq!(binding(UiEventKind::KeyDown).element_id(), None);
    }
}
