use dioxus::prelude::*;

use crate::course::CoursePanel;

/// `/course/:cid`
#[component]
pub fn Course(cid: String) -> Element {
    let nav = navigator();

    rsx! {
        section { class: "page page-course",
            CoursePanel {
                key: "{cid}",
                cid: cid.clone(),
                on_deleted: move |_| {
                    tracing::info!("course deleted, returning home");
                    nav.replace("/");
                },
                // The settings dialog is hosted outside this client.
                on_slide_settings: move |sid: String| {
                    tracing::info!(%sid, "slide settings requested");
                },
            }
        }
    }
}
