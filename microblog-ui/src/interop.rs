use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, File, FileReader, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList,
};

use crate::error::{js_error_text, FeedError};
use crate::styles::body_transition;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn node_list_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(node_list_elements)
        .unwrap_or_default()
}

/// First descendant of `root` matching `selector`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Attach `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to add {} listener: {}", event, js_error_text(&e));
        return;
    }
    // Leak the closure to keep it alive (it is cleaned up when the page unloads)
    closure.forget();
}

/// Make sure the overlay mount point exists, appending it to `<body>`.
pub fn ensure_mount_root(id: &str) -> Result<(), FeedError> {
    let document = document().ok_or_else(|| FeedError::MissingElement("document".into()))?;
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }

    let body = document
        .body()
        .ok_or_else(|| FeedError::MissingElement("body".into()))?;
    let root = document
        .create_element("div")
        .map_err(|e| FeedError::MissingElement(js_error_text(&e)))?;
    root.set_id(id);
    body.append_child(&root)
        .map_err(|e| FeedError::MissingElement(js_error_text(&e)))?;
    Ok(())
}

/// Horizontal center and top edge of `element`, in viewport coordinates.
pub fn element_anchor(element: &Element) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.left() + rect.width() / 2.0, rect.top())
}

pub fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    let _ = element.style().set_property("display", display);
}

/// Add `class` to `element` for `duration_ms`.
pub async fn pulse_class(element: Element, class: &'static str, duration_ms: u32) {
    let _ = element.class_list().add_1(class);
    TimeoutFuture::new(duration_ms).await;
    let _ = element.class_list().remove_1(class);
}

/// Animate every style change on `<body>` for `duration_ms`.
pub async fn play_body_transition(duration_ms: u32) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let _ = body
        .style()
        .set_property("transition", &body_transition(duration_ms));
    TimeoutFuture::new(duration_ms).await;
    let _ = body.style().remove_property("transition");
}

/// Read `file` into a `data:` URL.
pub async fn read_file_as_data_url(file: &File) -> Result<String, FeedError> {
    let reader = FileReader::new().map_err(|e| FeedError::FileRead(js_error_text(&e)))?;
    let (tx, rx) = oneshot::channel::<Result<String, FeedError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload_tx = tx.clone();
    let onload_reader = reader.clone();
    let onload = Closure::wrap(Box::new(move |_e: Event| {
        let result = onload_reader
            .result()
            .map_err(|e| FeedError::FileRead(js_error_text(&e)))
            .and_then(|value| {
                value
                    .as_string()
                    .ok_or_else(|| FeedError::FileRead("result is not a string".to_string()))
            });
        if let Some(tx) = onload_tx.borrow_mut().take() {
            let _ = tx.send(result);
        }
    }) as Box<dyn FnMut(Event)>);

    let onerror_tx = tx;
    let onerror = Closure::wrap(Box::new(move |_e: Event| {
        if let Some(tx) = onerror_tx.borrow_mut().take() {
            let _ = tx.send(Err(FeedError::FileRead("reader error".to_string())));
        }
    }) as Box<dyn FnMut(Event)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|e| FeedError::FileRead(js_error_text(&e)))?;

    let result = rx
        .await
        .unwrap_or_else(|_| Err(FeedError::FileRead("reader dropped".to_string())));

    reader.set_onload(None);
    reader.set_onerror(None);
    result
}

/// CSS `animation-delay` for the post card at `index`.
pub fn card_animation_delay(index: usize) -> String {
    format!("{}ms", index * 100)
}

/// Stagger the post cards and fade each one in when it scrolls into view.
pub fn observe_post_cards(document: &Document) -> Result<(), FeedError> {
    let cards = query_all(document, ".post-card");
    if cards.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("fade-in-up");
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| FeedError::MissingElement(js_error_text(&e)))?;
    callback.forget();

    for (index, card) in cards.iter().enumerate() {
        observer.observe(card);
        if let Some(card) = card.dyn_ref::<HtmlElement>() {
            let _ = card
                .style()
                .set_property("animation-delay", &card_animation_delay(index));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_delays_step_by_a_tenth_of_a_second() {
        assert_eq!(card_animation_delay(0), "0ms");
        assert_eq!(card_animation_delay(3), "300ms");
    }
}
