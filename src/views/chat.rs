use crate::backend::BackendClient;
use crate::render::{Block, Inline, parse_message};
use crate::session::SessionId;
use crate::types::ChatMessage;
use crate::views::shared::{Loader, alert};
use dioxus::events::Key;
use dioxus::prelude::*;

/// Composer guard: the trimmed question, but only when there is text to send
/// and a session to key it by. Anything else is a silent no-op.
fn prepare_question(input: &str, session: Option<&SessionId>) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || session.is_none() {
        return None;
    }
    Some(trimmed.to_string())
}

#[component]
pub fn ChatView(
    session: Signal<Option<SessionId>>,
    messages: Signal<Vec<ChatMessage>>,
) -> Element {
    let mut input = use_signal(String::new);
    let responding = use_signal(|| false);

    let mut send_message = {
        let mut messages = messages;
        let mut responding = responding;
        let mut input_signal = input;
        move |text: String| {
            if responding() {
                return;
            }
            let Some(question) = prepare_question(&text, session().as_ref()) else {
                return;
            };
            let Some(session_id) = session() else { return };

            messages.with_mut(|msgs| {
                msgs.push(ChatMessage {
                    text: question.clone(),
                    is_user: true,
                });
            });
            input_signal.set(String::new());
            responding.set(true);

            spawn(async move {
                let client = BackendClient::from_env();
                match client.ask(&question, &session_id).await {
                    Ok(answer) => {
                        messages.with_mut(|msgs| {
                            msgs.push(ChatMessage {
                                text: answer,
                                is_user: false,
                            });
                        });
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "chat request failed");
                        alert(&format!("Error communicating with server: {err}"));
                    }
                }
                responding.set(false);
            });
        }
    };

    let messages_snapshot = messages();

    rsx! {
        div { class: "chat-container",
            div { class: "chat-list",
                for msg in messages_snapshot.iter() {
                    div { class: format_args!("message-row {}", if msg.is_user { "user" } else { "assistant" }),
                        div { class: format_args!("bubble {}", if msg.is_user { "user" } else { "assistant" }),
                            if msg.is_user {
                                "{msg.text}"
                            } else {
                                FormattedMessage { text: msg.text.clone() }
                            }
                        }
                    }
                }
                if responding() {
                    div { class: "message-row assistant",
                        div { class: "bubble assistant",
                            Loader { text: "Generating response..." }
                        }
                    }
                }
            }
            form { class: "composer",
                div { class: "composer-inner",
                    textarea {
                        rows: "1",
                        placeholder: "Ask about your document...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                        autofocus: true,
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: responding(),
                        onclick: move |_| {
                            let text = input();
                            send_message(text);
                        },
                        "Send"
                    }
                }
            }
        }
    }
}

/// Assistant replies go through the line formatter; user messages stay
/// literal text.
#[component]
fn FormattedMessage(text: String) -> Element {
    let blocks = parse_message(&text);
    rsx! {
        div { class: "md",
            for block in blocks.iter() {
                {render_block(block)}
            }
        }
    }
}

fn render_block(block: &Block) -> Element {
    match block {
        Block::Heading1(spans) => rsx! {
            h1 { {render_spans(spans)} }
        },
        Block::Heading2(spans) => rsx! {
            h2 { {render_spans(spans)} }
        },
        Block::ListItem(spans) => rsx! {
            li { {render_spans(spans)} }
        },
        Block::Paragraph(spans) => rsx! {
            p { {render_spans(spans)} }
        },
    }
}

fn render_spans(spans: &[Inline]) -> Element {
    rsx! {
        for span in spans.iter() {
            {render_span(span)}
        }
    }
}

fn render_span(span: &Inline) -> Element {
    match span {
        Inline::Text(text) => rsx! { "{text}" },
        Inline::Bold(text) => rsx! {
            strong { "{text}" }
        },
    }
}
