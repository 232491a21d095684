use crate::client::{AnswerBackend, HttpChatClient};
use crate::config::ChatConfig;
use crate::theme::WIDGET_CSS;
use crate::types::Message;
use crate::widget::WidgetState;
use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    let config = use_hook(ChatConfig::load_or_default);

    rsx! {
        style { dangerous_inner_html: "{WIDGET_CSS}" }
        ChatWidget { config }
    }
}

/// Floating toggle button plus the chat panel it opens.
///
/// The request task is spawned from this scope, not the panel's, so closing
/// the panel mid-request still lets the reply land and the loading flag clear.
#[component]
pub fn ChatWidget(config: ChatConfig) -> Element {
    let mut state = use_signal(WidgetState::new);
    let client = use_hook(|| HttpChatClient::new(config.endpoint.clone()));

    let mut send_message = move || {
        let Some(question) = state.write().begin_send() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let outcome = client.ask(&question).await;
            state.write().finish_send(outcome);
        });
    };

    let open = state.read().open;
    let toggle_label = if open {
        config.close_label.clone()
    } else {
        config.open_label.clone()
    };

    rsx! {
        div { class: "chat-widget",
            button {
                class: "chat-toggle",
                r#type: "button",
                onclick: move |_| state.write().toggle(),
                "{toggle_label}"
            }
            if open {
                ChatPanel {
                    state,
                    config: config.clone(),
                    on_send: move |_| send_message(),
                }
            }
        }
    }
}

#[component]
fn ChatPanel(state: Signal<WidgetState>, config: ChatConfig, on_send: EventHandler<()>) -> Element {
    let mut state = state;
    let WidgetState {
        messages,
        input: draft,
        loading,
        ..
    } = state.read().clone();

    rsx! {
        div { class: "chat-panel",
            div { class: "chat-header", "{config.title}" }
            MessageList {
                messages,
                loading,
                thinking_label: config.thinking_label.clone(),
            }
            form {
                class: "composer",
                onsubmit: move |ev: FormEvent| {
                    ev.prevent_default();
                    on_send.call(());
                },
                div { class: "composer-inner",
                    input {
                        r#type: "text",
                        placeholder: "{config.placeholder}",
                        value: "{draft}",
                        oninput: move |ev| state.write().set_input(ev.value()),
                    }
                    button {
                        r#type: "submit",
                        disabled: loading,
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageList(messages: Vec<Message>, loading: bool, thinking_label: String) -> Element {
    rsx! {
        div { class: "chat-list",
            for (i, message) in messages.into_iter().enumerate() {
                MessageBubble { key: "{i}", message }
            }
            if loading {
                div { class: "chat-thinking", "{thinking_label}" }
            }
        }
    }
}

#[component]
fn MessageBubble(message: Message) -> Element {
    let side = message.sender.as_str();
    rsx! {
        div { class: format_args!("message-row {}", side),
            div { class: format_args!("bubble {}", side), "{message.text}" }
        }
    }
}
