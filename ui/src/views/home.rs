use dioxus::prelude::*;

use crate::core::session::Session;
use crate::t;

/// Landing page: jump to a course or straight into a slide's discussion.
#[component]
pub fn Home() -> Element {
    // Re-render on language change when the platform provides the code signal.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|c| c()).unwrap_or_default();

    let session = use_context::<Session>();
    let nav = navigator();
    let mut course_id = use_signal(String::new);
    let mut slide_id = use_signal(String::new);

    let role = if session.is_instructor {
        t!("home-role-instructor")
    } else {
        t!("home-role-student")
    };

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }
            p { class: "page-home__who",
                {t!("home-signed-in-as", name = session.display_name.clone(), role = role)}
            }

            form {
                class: "page-home__jump",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let cid = course_id().trim().to_string();
                    if !cid.is_empty() {
                        nav.push(format!("/course/{cid}"));
                    }
                },
                label { r#for: "home-course", {t!("home-course-label")} }
                input {
                    id: "home-course",
                    r#type: "text",
                    value: "{course_id}",
                    oninput: move |evt: FormEvent| course_id.set(evt.value()),
                }
                button { r#type: "submit", class: "button button--primary", {t!("home-open-course")} }
            }

            form {
                class: "page-home__jump",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let sid = slide_id().trim().to_string();
                    if !sid.is_empty() {
                        nav.push(format!("/slide/{sid}/1"));
                    }
                },
                label { r#for: "home-slide", {t!("home-slide-label")} }
                input {
                    id: "home-slide",
                    r#type: "text",
                    value: "{slide_id}",
                    oninput: move |evt: FormEvent| slide_id.set(evt.value()),
                }
                button { r#type: "submit", class: "button button--ghost", {t!("home-open-slide")} }
            }
        }
    }
}
