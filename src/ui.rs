use crate::session::SessionId;
use crate::theme::theme_definition;
use crate::types::{ChatMessage, ThemeMode};
use crate::views::shared::reload_page;
use crate::views::{ChatView, LandingView};
use dioxus::prelude::*;

const DOCTALK_CSS: Asset = asset!("/assets/doctalk.css");

/// Two-state shell: Landing until a document is selected, Chatting after.
/// The only way back to Landing is a full page reload via "New Chat".
#[component]
pub fn App() -> Element {
    let session = use_signal(|| Option::<SessionId>::None);
    let selected_file = use_signal(|| Option::<String>::None);
    let messages = use_signal(Vec::<ChatMessage>::new);
    let theme = use_signal(|| ThemeMode::Light);

    rsx! {
        ThemeStyles { theme }
        Navbar { theme }
        main { class: "app-main",
            if selected_file().is_none() {
                LandingView { session, selected_file, messages }
            } else {
                ChatView { session, messages }
            }
        }
        Footer {}
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: DOCTALK_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn Navbar(theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let toggle_label = match theme() {
        ThemeMode::Light => "Dark",
        ThemeMode::Dark => "Light",
    };
    rsx! {
        header { class: "navbar",
            div { class: "navbar-content",
                h1 { class: "brand", onclick: move |_| reload_page(), "DocumentChat" }
                div { class: "navbar-actions",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            let next = match theme() {
                                ThemeMode::Light => ThemeMode::Dark,
                                ThemeMode::Dark => ThemeMode::Light,
                            };
                            theme.set(next);
                        },
                        "{toggle_label}"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| reload_page(),
                        "New Chat"
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { class: "footer-note", "© DocumentChat. Ask your documents anything." }
        }
    }
}
