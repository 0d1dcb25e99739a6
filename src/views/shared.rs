use dioxus::prelude::*;

/// Blocking alert dialog, the only error surface this client has.
pub fn alert(message: &str) {
    let payload = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    let _ = document::eval(&format!("alert({payload});"));
}

/// Full page reload. Discards the transcript and session id; there is no
/// in-place reset path.
pub fn reload_page() {
    let _ = document::eval("window.location.reload();");
}

#[component]
pub fn Loader(text: String) -> Element {
    rsx! {
        div { class: "loader",
            span { class: "loader-spinner", aria_hidden: "true" }
            p { class: "loader-text", "{text}" }
        }
    }
}
