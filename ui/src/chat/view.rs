use api::{ApiConfig, HttpApi, PageRef, Point, QuestionStatus};
use dioxus::prelude::*;
use futures_util::StreamExt;

use super::controller::{ChatAreaState, ChatController, ChatEvent, ChatMode, OpenThread};
use super::drawing::{DrawAction, DrawingOverlay};
use super::sort::SortKey;
use crate::core::format::{format_names, format_time};
use crate::core::markdown::render_markdown;
use crate::core::platform::PlatformLocation;
use crate::core::session::Session;
use crate::t;

/// Discussion panel for one slide page, with the sketch layer beside it.
#[component]
pub fn ChatArea(
    sid: String,
    page: u32,
    qid: Option<u32>,
    #[props(default)] drawable: bool,
) -> Element {
    let config = use_context::<ApiConfig>();
    let session = use_context::<Session>();
    let is_instructor = session.is_instructor;
    let initial = PageRef::new(sid.clone(), page);

    let view = use_signal({
        let initial = initial.clone();
        move || ChatAreaState::new(initial)
    });

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<ChatEvent>| {
        let api = HttpApi::new(config.clone());
        let user = session.display_name.clone();
        let initial = initial.clone();
        async move {
            let mut controller = ChatController::new(
                api,
                PlatformLocation::default(),
                view,
                initial,
                user,
                drawable,
            );
            while let Some(event) = rx.next().await {
                controller.handle(event).await;
            }
        }
    });

    // (Re)load whenever the slide page or the requested question changes.
    use_effect(use_reactive((&sid, &page, &qid), move |(sid, page, qid)| {
        coroutine.send(ChatEvent::Mount {
            page: PageRef::new(sid, page),
            qid,
        });
    }));

    let state = view();
    let pending_delete = use_signal(|| Option::<PendingDelete>::None);

    let title = match state.mode {
        ChatMode::List => t!("chat-title-list"),
        ChatMode::NewChat => t!("chat-title-new"),
        ChatMode::ChatDetails => state
            .thread
            .as_ref()
            .map(|thread| thread.title.clone())
            .unwrap_or_default(),
    };

    let content = match state.mode {
        ChatMode::List => render_list(&state, coroutine, pending_delete),
        ChatMode::NewChat => rsx! { NewQuestionForm { drawable, drawing: state.overlay.is_editing() } },
        ChatMode::ChatDetails => match state.thread.as_ref() {
            Some(thread) => render_thread(&state, thread, is_instructor, coroutine, pending_delete),
            None => rsx! {},
        },
    };

    let overlay = state.overlay.clone();

    rsx! {
        div { class: "slide-chat",
            if drawable {
                DrawingSurface {
                    overlay,
                    page: state.page.page,
                    on_draw: move |action| coroutine.send(ChatEvent::Draw(action)),
                }
            }

            div { class: "chat-area",
                div { class: "chat-area__title",
                    if state.mode != ChatMode::List {
                        button {
                            r#type: "button",
                            class: "chat-area__back button button--ghost",
                            onclick: move |_| coroutine.send(ChatEvent::Back),
                            "‹"
                        }
                    } else {
                        span { class: "chat-area__placeholder" }
                    }
                    h2 { class: "chat-area__heading", "{title}" }
                    if is_instructor {
                        button {
                            r#type: "button",
                            class: format!(
                                "chat-area__manage button button--ghost {}",
                                if state.managing { "chat-area__manage--on" } else { "" }
                            ),
                            onclick: move |_| coroutine.send(ChatEvent::ToggleManaging),
                            {t!("chat-manage")}
                        }
                    } else {
                        span { class: "chat-area__placeholder" }
                    }
                }

                if let Some(alert) = state.alert.clone() {
                    div { class: "alert alert--warning", role: "alert",
                        span { {alert.message()} }
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| coroutine.send(ChatEvent::DismissAlert),
                            {t!("action-dismiss")}
                        }
                    }
                }

                ConfirmBar { pending: pending_delete }

                {content}
            }
        }
    }
}

/// Destructive action waiting for the user to confirm.
#[derive(Debug, Clone, PartialEq)]
enum PendingDelete {
    Question { qid: u32, title: String },
    Chat { cid: u32 },
}

#[component]
fn ConfirmBar(pending: Signal<Option<PendingDelete>>) -> Element {
    let coroutine = use_coroutine_handle::<ChatEvent>();
    let mut pending = pending;
    let Some(action) = pending() else {
        return rsx! {};
    };

    let prompt = match &action {
        PendingDelete::Question { title, .. } => t!("confirm-delete-question", title = title.clone()),
        PendingDelete::Chat { .. } => t!("confirm-delete-chat"),
    };

    rsx! {
        div { class: "confirm-bar",
            span { class: "confirm-bar__prompt", "{prompt}" }
            button {
                r#type: "button",
                class: "button button--accent",
                onclick: move |_| {
                    let event = match action.clone() {
                        PendingDelete::Question { qid, .. } => ChatEvent::DeleteQuestion(qid),
                        PendingDelete::Chat { cid } => ChatEvent::DeleteChat(cid),
                    };
                    coroutine.send(event);
                    pending.set(None);
                },
                {t!("action-delete")}
            }
            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| pending.set(None),
                {t!("action-cancel")}
            }
        }
    }
}

fn render_list(
    state: &ChatAreaState,
    coroutine: Coroutine<ChatEvent>,
    mut pending: Signal<Option<PendingDelete>>,
) -> Element {
    let managing = state.managing;
    let sort = state.sort;
    let sort_class = |key: SortKey| {
        format!(
            "chat-list__sort-option {}",
            if key == sort { "chat-list__sort-option--selected" } else { "" }
        )
    };

    rsx! {
        div { class: "chat-list",
            div { class: "chat-list__new",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| coroutine.send(ChatEvent::NewQuestion),
                    {t!("chat-ask")}
                }
            }
            div { class: "chat-list__sort",
                span { {t!("chat-sort-label")} }
                button {
                    r#type: "button",
                    class: sort_class(SortKey::LastUpdate),
                    onclick: move |_| coroutine.send(ChatEvent::Sort(SortKey::LastUpdate)),
                    {t!("chat-sort-update")}
                }
                button {
                    r#type: "button",
                    class: sort_class(SortKey::Creation),
                    onclick: move |_| coroutine.send(ChatEvent::Sort(SortKey::Creation)),
                    {t!("chat-sort-create")}
                }
            }

            if state.questions.is_empty() {
                p { class: "chat-list__placeholder", {t!("chat-empty")} }
            }

            for question in state.questions.iter().cloned() {
                div {
                    key: "{question.id}",
                    class: "chat-list__item",
                    onclick: move |_| coroutine.send(ChatEvent::Open(question.id)),
                    div { class: "chat-list__title-row",
                        span { class: "chat-list__title", "{question.title}" }
                        span { class: "chat-list__icons",
                            if question.status == QuestionStatus::Solved {
                                span { class: "chat-list__solved", title: t!("chat-solved"), "✔" }
                            }
                            if managing {
                                button {
                                    r#type: "button",
                                    class: "chat-list__delete button button--ghost",
                                    onclick: {
                                        let title = question.title.clone();
                                        move |evt: MouseEvent| {
                                            evt.stop_propagation();
                                            pending.set(Some(PendingDelete::Question {
                                                qid: question.id,
                                                title: title.clone(),
                                            }));
                                        }
                                    },
                                    {t!("action-delete")}
                                }
                            }
                        }
                    }
                    div { class: "chat-list__info",
                        span { class: "chat-list__author", "{question.user}" }
                        span { class: "chat-list__time", {format_time(question.updated_at)} }
                    }
                }
            }
        }
    }
}

fn render_thread(
    state: &ChatAreaState,
    thread: &OpenThread,
    is_instructor: bool,
    coroutine: Coroutine<ChatEvent>,
    mut pending: Signal<Option<PendingDelete>>,
) -> Element {
    let managing = state.managing;
    let draft = state.reply_draft.clone();

    let messages = thread
        .chats
        .iter()
        .enumerate()
        .filter_map(|(index, chat)| chat.as_ref().map(|chat| (index as u32, chat.clone())));

    rsx! {
        div { class: "chat-details",
            for (cid, chat) in messages {
                div { key: "{cid}", class: "chat-message",
                    div { class: "chat-message__info",
                        span { class: "chat-message__author", "{chat.user}" }
                        span { class: "chat-message__time", {format_time(chat.time)} }
                        span { class: "chat-message__icons",
                            if chat.is_endorsed() || is_instructor {
                                button {
                                    r#type: "button",
                                    class: format!(
                                        "chat-message__endorse {}",
                                        if chat.is_endorsed() { "chat-message__endorse--on" } else { "" }
                                    ),
                                    disabled: !is_instructor,
                                    title: t!("chat-endorse"),
                                    onclick: move |_| coroutine.send(ChatEvent::Endorse(cid)),
                                    "✔"
                                }
                            }
                            button {
                                r#type: "button",
                                class: format!(
                                    "chat-message__like {}",
                                    if chat.likes.is_empty() { "" } else { "chat-message__like--on" }
                                ),
                                title: t!("chat-like"),
                                onclick: move |_| coroutine.send(ChatEvent::Like(cid)),
                                if !chat.likes.is_empty() {
                                    span { {format!("{} ", chat.likes.len())} }
                                }
                                "♥"
                            }
                            if managing && cid > 0 {
                                button {
                                    r#type: "button",
                                    class: "chat-message__delete button button--ghost",
                                    onclick: move |_| pending.set(Some(PendingDelete::Chat { cid })),
                                    {t!("action-delete")}
                                }
                            }
                        }
                    }
                    div {
                        class: "chat-message__body",
                        dangerous_inner_html: render_markdown(&chat.body),
                    }
                    if chat.is_endorsed() {
                        div { class: "chat-message__endorsement",
                            {t!("chat-endorsed-by", names = format_names(&chat.endorsement))}
                        }
                    }
                }
            }

            div { class: "chat-details__reply",
                textarea {
                    class: "chat-details__reply-input",
                    rows: "3",
                    value: "{draft}",
                    oninput: move |evt: FormEvent| coroutine.send(ChatEvent::EditReply(evt.value())),
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| coroutine.send(ChatEvent::SendReply),
                    {t!("action-send")}
                }
            }
        }
    }
}

#[component]
fn NewQuestionForm(drawable: bool, drawing: bool) -> Element {
    let coroutine = use_coroutine_handle::<ChatEvent>();
    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);

    rsx! {
        div { class: "new-question",
            input {
                class: "new-question__title",
                r#type: "text",
                placeholder: t!("new-question-title-placeholder"),
                value: "{title}",
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            textarea {
                class: "new-question__body",
                rows: "6",
                placeholder: t!("new-question-body-placeholder"),
                value: "{body}",
                oninput: move |evt: FormEvent| body.set(evt.value()),
            }
            if drawable {
                if drawing {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| coroutine.send(ChatEvent::CancelDrawing),
                        {t!("new-question-cancel-drawing")}
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| coroutine.send(ChatEvent::StartDrawing),
                        {t!("new-question-add-drawing")}
                    }
                }
            }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| {
                    coroutine.send(ChatEvent::SubmitQuestion {
                        title: title(),
                        body: body(),
                    })
                },
                {t!("action-send")}
            }
        }
    }
}

/// Slide stage with the sketch layer. Pointer positions are normalised to the
/// stage size so strokes survive different window sizes.
#[component]
fn DrawingSurface(overlay: DrawingOverlay, page: u32, on_draw: EventHandler<DrawAction>) -> Element {
    let mut size = use_signal(|| (1.0_f64, 1.0_f64));
    let editing = overlay.is_editing();

    let to_point = move |evt: &MouseEvent| {
        let coords = evt.element_coordinates();
        let (w, h) = size();
        Point {
            x: coords.x / w.max(1.0),
            y: coords.y / h.max(1.0),
        }
    };

    let polylines: Vec<String> = overlay
        .strokes()
        .iter()
        .map(|stroke| {
            stroke
                .0
                .iter()
                .map(|p| format!("{:.4},{:.4}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    rsx! {
        div { class: "slide-stage",
            div { class: "slide-stage__page", {t!("slide-page-label", page = page)} }
            if overlay.is_visible() {
                svg {
                    class: format!(
                        "slide-stage__overlay {}",
                        if editing { "slide-stage__overlay--editing" } else { "" }
                    ),
                    "viewBox": "0 0 1 1",
                    "preserveAspectRatio": "none",
                    onmounted: move |evt: MountedEvent| async move {
                        if let Ok(rect) = evt.get_client_rect().await {
                            size.set((rect.width(), rect.height()));
                        }
                    },
                    onmousedown: move |evt: MouseEvent| {
                        if editing {
                            on_draw.call(DrawAction::Begin(to_point(&evt)));
                        }
                    },
                    onmousemove: move |evt: MouseEvent| {
                        if editing {
                            on_draw.call(DrawAction::Extend(to_point(&evt)));
                        }
                    },
                    onmouseup: move |_| on_draw.call(DrawAction::End),
                    onmouseleave: move |_| on_draw.call(DrawAction::End),
                    for (index, points) in polylines.into_iter().enumerate() {
                        polyline {
                            key: "{index}",
                            "points": "{points}",
                            "fill": "none",
                            "stroke": "currentColor",
                            "stroke-width": "0.004",
                        }
                    }
                }
            }
        }
    }
}
