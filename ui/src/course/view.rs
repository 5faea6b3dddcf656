use api::{ApiConfig, Course, HttpApi, Slide};
use dioxus::prelude::*;
use futures_util::StreamExt;

use super::controller::{CourseController, CourseEvent, CourseState};
use super::upload::{take_batch, UploadFile};
use crate::core::format::format_time;
use crate::core::platform::copy_to_clipboard;
use crate::core::session::Session;
use crate::t;

/// One course: its slides, uploads and instructors.
///
/// Slide settings live in a separate dialog owned by the host;
/// `on_slide_settings` receives the slide id to open it for.
#[component]
pub fn CoursePanel(
    cid: String,
    on_deleted: Option<EventHandler<()>>,
    on_slide_settings: Option<EventHandler<String>>,
) -> Element {
    let config = use_context::<ApiConfig>();
    let session = use_context::<Session>();
    let is_instructor = session.is_instructor;

    let view = use_signal({
        let cid = cid.clone();
        move || CourseState::new(cid)
    });

    let coroutine = use_coroutine({
        let config = config.clone();
        move |mut rx: UnboundedReceiver<CourseEvent>| {
            let api = HttpApi::new(config.clone());
            let cid = cid.clone();
            async move {
                let mut controller = CourseController::new(api, view, cid);
                controller.refresh().await;
                while let Some(event) = rx.next().await {
                    controller.handle(event).await;
                }
            }
        }
    });

    use_effect(move || {
        if view().deleted {
            if let Some(handler) = on_deleted {
                handler.call(());
            }
        }
    });

    let state = view();

    if state.deleted {
        return rsx! {
            section { class: "course course--deleted",
                p { class: "course__placeholder", {t!("course-deleted")} }
            }
        };
    }

    let Some(course) = state.course.clone() else {
        return rsx! {
            section { class: "course course--loading",
                div { class: "spinner", aria_label: t!("course-loading") }
            }
        };
    };

    let managing = state.managing;
    let instructors = course.instructors.join(", ");

    rsx! {
        section { class: "course",
            CourseHeader {
                course: course.clone(),
                managing,
                renaming: state.renaming,
                is_instructor,
            }

            if let Some(created) = course.created_at {
                div { class: "course__created",
                    {t!("course-created", time = format_time(created))}
                }
            }

            if let Some(alert) = state.alert.clone() {
                div { class: "alert alert--warning", role: "alert",
                    span { {alert.message()} }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| coroutine.send(CourseEvent::DismissAlert),
                        {t!("action-dismiss")}
                    }
                }
            }

            ul { class: "course__slides",
                if course.slides.is_empty() {
                    li { class: "course__placeholder", {t!("course-no-slides")} }
                }
                for slide in course.slides.iter().cloned() {
                    SlideRow {
                        key: "{slide.id}",
                        link: config.slide_link(&slide.id),
                        slide,
                        managing,
                        on_settings: move |sid: String| {
                            if let Some(handler) = on_slide_settings {
                                handler.call(sid);
                            }
                        },
                    }
                }
            }

            if managing {
                UploadBar { uploading: state.uploading, error: state.upload_error.clone() }
            }

            div { class: "course__instructors",
                strong { {t!("course-instructors")} }
                " {instructors}"
            }

            if managing {
                InstructorBar {}
                if let Some(result) = state.instructor_result.clone() {
                    div {
                        class: format!(
                            "course__result {}",
                            if result.is_ok() { "course__result--ok" } else { "course__result--fail" }
                        ),
                        {result.message()}
                    }
                }
            }
        }
    }
}

#[component]
fn CourseHeader(course: Course, managing: bool, renaming: bool, is_instructor: bool) -> Element {
    let coroutine = use_coroutine_handle::<CourseEvent>();
    let mut name_draft = use_signal(String::new);
    let mut confirming_delete = use_signal(|| false);
    let current_name = course.name.clone();

    rsx! {
        div { class: "course__title",
            if managing && renaming {
                div { class: "course__title-name",
                    input {
                        r#type: "text",
                        placeholder: t!("course-name-placeholder"),
                        value: "{name_draft}",
                        oninput: move |evt: FormEvent| name_draft.set(evt.value()),
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| coroutine.send(CourseEvent::Rename(name_draft())),
                        {t!("action-save")}
                    }
                }
            } else if managing {
                div { class: "course__title-name",
                    span { "{course.name}" }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| {
                            name_draft.set(current_name.clone());
                            coroutine.send(CourseEvent::StartRenaming);
                        },
                        {t!("course-rename")}
                    }
                }
            } else {
                span { class: "course__title-name", "{course.name}" }
            }

            if is_instructor {
                div { class: "course__manage",
                    if managing {
                        if confirming_delete() {
                            span { class: "confirm-bar__prompt",
                                {t!("confirm-delete-course", name = course.name.clone())}
                            }
                            button {
                                r#type: "button",
                                class: "button button--accent",
                                onclick: move |_| {
                                    confirming_delete.set(false);
                                    coroutine.send(CourseEvent::DeleteCourse);
                                },
                                {t!("action-delete")}
                            }
                            button {
                                r#type: "button",
                                class: "button button--ghost",
                                onclick: move |_| confirming_delete.set(false),
                                {t!("action-cancel")}
                            }
                        } else {
                            button {
                                r#type: "button",
                                class: "button button--accent",
                                onclick: move |_| confirming_delete.set(true),
                                {t!("course-delete")}
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: format!(
                            "course__manage-toggle button button--ghost {}",
                            if managing { "course__manage-toggle--on" } else { "" }
                        ),
                        onclick: move |_| {
                            confirming_delete.set(false);
                            coroutine.send(CourseEvent::ToggleManaging);
                        },
                        {t!("chat-manage")}
                    }
                }
            }
        }
    }
}

#[component]
fn SlideRow(slide: Slide, link: String, managing: bool, on_settings: EventHandler<String>) -> Element {
    let coroutine = use_coroutine_handle::<CourseEvent>();
    let mut confirming = use_signal(|| false);
    let sid = slide.id.clone();
    let settings_sid = slide.id.clone();
    let copy_target = link.clone();

    rsx! {
        li { class: "course__slide",
            div { class: "course__slide-info",
                a { class: "course__slide-link", href: "{link}", "{slide.filename}" }
                span { class: "course__slide-activity",
                    {t!("course-last-activity", time = format_time(slide.last_active))}
                }
            }
            div { class: "course__slide-actions",
                if managing && confirming() {
                    span { class: "confirm-bar__prompt",
                        {t!("confirm-delete-slide", filename = slide.filename.clone())}
                    }
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: move |_| {
                            confirming.set(false);
                            coroutine.send(CourseEvent::DeleteSlide(sid.clone()));
                        },
                        {t!("action-delete")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| confirming.set(false),
                        {t!("action-cancel")}
                    }
                } else if managing {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_settings.call(settings_sid.clone()),
                        {t!("course-modify-slide")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: move |_| confirming.set(true),
                        {t!("action-delete")}
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| {
                            copy_to_clipboard(&copy_target);
                        },
                        {t!("course-copy-link")}
                    }
                }
            }
        }
    }
}

#[component]
fn UploadBar(uploading: bool, error: Option<String>) -> Element {
    let coroutine = use_coroutine_handle::<CourseEvent>();
    let mut picked = use_signal(Vec::<UploadFile>::new);

    rsx! {
        div { class: "course__upload",
            input {
                r#type: "file",
                accept: ".pdf",
                multiple: true,
                onchange: move |evt: FormEvent| async move {
                    let mut files = Vec::new();
                    if let Some(engine) = evt.files() {
                        for path in engine.files() {
                            match engine.read_file(&path).await {
                                Some(bytes) => files.push(UploadFile::new(file_name(&path), bytes)),
                                None => tracing::warn!(%path, "could not read picked file"),
                            }
                        }
                    }
                    picked.set(files);
                },
            }
            button {
                r#type: "button",
                class: "button button--primary",
                disabled: uploading || picked.read().is_empty(),
                onclick: move |_| {
                    let batch = take_batch(&mut picked.write());
                    coroutine.send(CourseEvent::Upload(batch));
                },
                {t!("course-upload")}
            }
            if uploading {
                div { class: "spinner spinner--small" }
            }
        }
        if let Some(message) = error {
            div { class: "course__result course__result--fail", "{message}" }
        }
    }
}

#[component]
fn InstructorBar() -> Element {
    let coroutine = use_coroutine_handle::<CourseEvent>();
    let mut new_user = use_signal(String::new);

    rsx! {
        div { class: "course__add-instructor",
            input {
                r#type: "text",
                placeholder: t!("course-instructor-placeholder"),
                value: "{new_user}",
                oninput: move |evt: FormEvent| new_user.set(evt.value()),
            }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| coroutine.send(CourseEvent::AddInstructor(new_user())),
                {t!("course-add-instructor")}
            }
        }
    }
}

/// Desktop pickers hand over full paths; the server only wants the name.
fn file_name(path: &str) -> String {
    path.rsplit(['/', '\\']).next().unwrap_or(path).to_string()
}
