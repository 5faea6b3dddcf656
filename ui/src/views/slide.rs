use dioxus::prelude::*;

use crate::chat::ChatArea;
use crate::t;

/// `/slide/:sid/:page`
#[component]
pub fn Slide(sid: String, page: u32) -> Element {
    rsx! {
        SlideLayout { sid, page, qid: None }
    }
}

/// `/slide/:sid/:page/:qid`, opened on one question.
#[component]
pub fn SlideQuestion(sid: String, page: u32, qid: u32) -> Element {
    rsx! {
        SlideLayout { sid, page, qid: Some(qid) }
    }
}

#[component]
fn SlideLayout(sid: String, page: u32, qid: Option<u32>) -> Element {
    let page = page.max(1);
    let (prev, next) = pager_links(&sid, page);

    rsx! {
        section { class: "page page-slide",
            nav { class: "page-slide__pager",
                if let Some(prev) = prev {
                    Link { class: "button button--ghost", to: prev, {t!("slide-prev")} }
                }
                span { class: "page-slide__current", {t!("slide-page-label", page = page)} }
                if let Some(next) = next {
                    Link { class: "button button--ghost", to: next, {t!("slide-next")} }
                }
            }
            ChatArea { sid, page, qid, drawable: true }
        }
    }
}

/// Neighbouring page routes; `None` at either end of the `u32` range.
fn pager_links(sid: &str, page: u32) -> (Option<String>, Option<String>) {
    let prev = (page > 1).then(|| format!("/slide/{sid}/{}", page - 1));
    let next = page
        .checked_add(1)
        .map(|next| format!("/slide/{sid}/{next}"));
    (prev, next)
}

#[cfg(test)]
mod tests {
    use super::pager_links;

    #[test]
    fn first_page_has_no_previous_link() {
        assert_eq!(
            pager_links("s1", 1),
            (None, Some("/slide/s1/2".to_string()))
        );
        assert_eq!(
            pager_links("s1", 3),
            (Some("/slide/s1/2".to_string()), Some("/slide/s1/4".to_string()))
        );
    }

    #[test]
    fn last_representable_page_has_no_next_link() {
        let (prev, next) = pager_links("s1", u32::MAX);
        assert_eq!(prev, Some(format!("/slide/s1/{}", u32::MAX - 1)));
        assert_eq!(next, None);
    }
}
