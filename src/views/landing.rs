use crate::backend::BackendClient;
use crate::session::SessionId;
use crate::types::ChatMessage;
use crate::views::shared::{Loader, alert};
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use std::sync::Arc;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🎓",
        title: "For Students",
        description: "Prepare for exams and homework. Generate presentation outlines and speaker notes.",
    },
    Feature {
        icon: "📚",
        title: "For Researchers",
        description: "Upload research papers and pull out what you need in one click. Summarize abstracts.",
    },
    Feature {
        icon: "👥",
        title: "For Professionals",
        description: "Build onboarding manuals and training materials. Read contracts and reports faster.",
    },
    Feature {
        icon: "🚀",
        title: "Unlimited Upload",
        description: "No quantity limit. No questions limit.",
    },
    Feature {
        icon: "📄",
        title: "Scanned Files",
        description: "Scanned materials are read automatically.",
    },
    Feature {
        icon: "🎯",
        title: "Cited Sources",
        description: "Answers stay grounded in the document, with the right passages pulled in.",
    },
];

/// Fixed transcript seed after a successful upload.
fn welcome_message(file_name: &str) -> ChatMessage {
    ChatMessage {
        text: format!(
            "We've successfully uploaded your file, \"{file_name}\". Its contents were \
             converted into embeddings (numerical representations of the text) and stored \
             in our vector database, so answers can draw on the right passages.\n\n\
             Let's chat about your document!"
        ),
        is_user: false,
    }
}

/// Seed used by the drag-and-drop path, which skips the upload call.
fn drop_message(file_name: &str) -> ChatMessage {
    ChatMessage {
        text: format!("Successfully uploaded {file_name}. Let's chat about your document!"),
        is_user: false,
    }
}

#[component]
pub fn LandingView(
    session: Signal<Option<SessionId>>,
    selected_file: Signal<Option<String>>,
    messages: Signal<Vec<ChatMessage>>,
) -> Element {
    let mut uploading = use_signal(|| false);
    let mut dragging = use_signal(|| false);

    let mut start_upload = {
        let mut session = session;
        let mut selected_file = selected_file;
        let mut messages = messages;
        let mut uploading = uploading;
        move |engine: Arc<dyn FileEngine>| {
            if uploading() {
                return;
            }
            let Some(file_name) = engine.files().into_iter().next() else {
                return;
            };
            uploading.set(true);
            spawn(async move {
                match engine.read_file(&file_name).await {
                    Some(bytes) => {
                        let client = BackendClient::from_env();
                        let fresh = SessionId::generate();
                        match client.upload_document(&file_name, bytes, &fresh).await {
                            Ok(()) => {
                                session.set(Some(fresh));
                                messages.set(vec![welcome_message(&file_name)]);
                                selected_file.set(Some(file_name));
                            }
                            Err(err) => {
                                tracing::error!(file = %file_name, error = %err, "upload failed");
                                alert(&format!("Error uploading file: {err}"));
                            }
                        }
                    }
                    None => {
                        tracing::error!(file = %file_name, "could not read picked file");
                        alert("Could not read the selected file.");
                    }
                }
                uploading.set(false);
            });
        }
    };

    rsx! {
        div { class: "landing",
            div { class: "landing-card",
                div {
                    class: format_args!("dropzone {}", if dragging() { "dragging" } else { "" }),
                    ondragover: move |evt| {
                        evt.prevent_default();
                        dragging.set(true);
                    },
                    ondragleave: move |_| dragging.set(false),
                    ondrop: {
                        let mut session = session;
                        let mut selected_file = selected_file;
                        let mut messages = messages;
                        move |evt: Event<DragData>| {
                            evt.prevent_default();
                            dragging.set(false);
                            let Some(engine) = evt.files() else { return };
                            let Some(file_name) = engine.files().into_iter().next() else {
                                return;
                            };
                            // TODO: route dropped files through
                            // BackendClient::upload_document like the picker path;
                            // a dropped file never reaches the backend today.
                            tracing::warn!(file = %file_name, "file selected via drop without uploading");
                            session.set(Some(SessionId::generate()));
                            messages.set(vec![drop_message(&file_name)]);
                            selected_file.set(Some(file_name));
                        }
                    },
                    h3 { class: "dropzone-title", "Click to Upload or Drop PDF/DOC here" }
                    p { class: "dropzone-hint", "Upload files up to 50 MB" }
                    div { class: "dropzone-actions",
                        label { class: "btn btn-primary upload-label",
                            "Upload Files"
                            input {
                                r#type: "file",
                                class: "file-input",
                                accept: ".pdf,.doc,.docx",
                                onchange: move |evt| {
                                    if let Some(engine) = evt.files() {
                                        start_upload(engine);
                                    }
                                },
                            }
                        }
                        if uploading() {
                            Loader { text: "Uploading file..." }
                        }
                    }
                }
                div { class: "features-grid",
                    for feature in FEATURES.iter() {
                        div { class: "feature",
                            div { class: "feature-heading",
                                span { class: "feature-icon", "{feature.icon}" }
                                h3 { class: "feature-title", "{feature.title}" }
                            }
                            p { class: "feature-description", "{feature.description}" }
                        }
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
    fn welcome_message_names_the_file_and_is_from_the_assistant() {
        let msg = welcome_message("lease.pdf");
        assert!(!msg.is_user);
        assert!(msg.text.contains("\"lease.pdf\""));
    }

    #[test]
    fn drop_message_names_the_file_and_is_from_the_assistant() {
        let msg = drop_message("notes.docx");
        assert!(!msg.is_user);
        assert!(msg.text.contains("notes.docx"));
    }
}
