//! Hooks the server-rendered page up to the feed logic.
//!
//! Elements are looked up once, at bind time. Handlers keep direct
//! references to the nodes they touch instead of searching the DOM per event.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus_logger::tracing::{debug, error, info, warn};
use shared_types::{PostId, ReactionKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlImageElement, HtmlInputElement,
    HtmlTextAreaElement, Node,
};

use crate::api::{HttpReactionApi, ReactionApi};
use crate::config::FeedConfig;
use crate::feed::effects::{notify_error, show_floating_icon};
use crate::feed::reactions::{submit_reaction, ReactionOutcome, ReactionState};
use crate::feed::upload::{char_count, CharCountTier, ImageUploadState, SelectedFile, SelectionCommand};
use crate::feed::FeedContext;
use crate::interop::{
    document, element_anchor, listen, observe_post_cards, pulse_class, query_all, query_in,
    read_file_as_data_url, set_visible,
};

const SPINNER_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i>"#;

const IMAGE_INPUT_ID: &str = "imageInput";
const IMAGE_PREVIEW_ID: &str = "imagePreview";
const PREVIEW_IMG_ID: &str = "previewImg";
const CHAR_COUNT_ID: &str = "charCount";
const POST_TEXTAREA_SELECTOR: &str = r#"textarea[name="post"]"#;
const REMOVE_IMAGE_SELECTOR: &str = r#"[data-action="remove-image"]"#;

/// Bind every manager to the current document.
pub fn bind_page(ctx: FeedContext) {
    let Some(document) = document() else {
        warn!("No document available; page bindings skipped");
        return;
    };

    let groups = bind_reactions(ctx, &document);
    bind_image_upload(ctx, &document);
    if let Err(e) = observe_post_cards(&document) {
        warn!("Post card animations unavailable: {}", e);
    }

    info!("Feed bound ({} reaction groups)", groups);
}

// ============================================================================
// Reactions
// ============================================================================

fn button_selector(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => ".like-btn",
        ReactionKind::Dislike => ".dislike-btn",
    }
}

fn count_selector(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => ".like-count",
        ReactionKind::Dislike => ".dislike-count",
    }
}

struct ReactionControl {
    post_id: PostId,
    button: HtmlElement,
    count: Option<Element>,
}

impl ReactionControl {
    fn capture(button: &Element, kind: ReactionKind) -> Option<Self> {
        let Some(post_id) = button
            .get_attribute("data-post-id")
            .and_then(|raw| PostId::parse(&raw))
        else {
            warn!("{} without a valid data-post-id", button_selector(kind));
            return None;
        };

        let count = query_in(button, count_selector(kind));
        let button = button.clone().dyn_into::<HtmlElement>().ok()?;
        Some(Self {
            post_id,
            button,
            count,
        })
    }

    fn is_active(&self) -> bool {
        self.button.class_list().contains("active")
    }

    fn displayed_count(&self) -> u32 {
        self.count
            .as_ref()
            .and_then(|el| el.text_content())
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    fn render(&self, active: bool, count: u32, pulse_ms: u32) {
        let classes = self.button.class_list();
        let _ = if active {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };

        if let Some(el) = &self.count {
            el.set_text_content(Some(&count.to_string()));
            spawn_local(pulse_class(el.clone(), "count-updated", pulse_ms));
        }
    }
}

/// A clicked control in its loading state. Dropping it puts the original
/// content back and re-enables the control, whatever the request did.
struct PendingControl {
    button: HtmlElement,
    original: Vec<Node>,
}

impl PendingControl {
    fn begin(button: &HtmlElement) -> Self {
        let children = button.child_nodes();
        let original = (0..children.length())
            .filter_map(|i| children.item(i))
            .collect();

        let _ = button.style().set_property("pointer-events", "none");
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(true);
        }
        button.set_inner_html(SPINNER_HTML);

        Self {
            button: button.clone(),
            original,
        }
    }
}

impl Drop for PendingControl {
    fn drop(&mut self) {
        self.button.set_inner_html("");
        for node in &self.original {
            let _ = self.button.append_child(node);
        }
        let _ = self.button.style().set_property("pointer-events", "auto");
        if let Some(button) = self.button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(false);
        }
    }
}

/// The like and dislike controls of one post.
struct PostReactions {
    like: Option<ReactionControl>,
    dislike: Option<ReactionControl>,
    state: Cell<ReactionState>,
}

impl PostReactions {
    fn capture(like: Option<&Element>, dislike: Option<&Element>) -> Self {
        let like = like.and_then(|b| ReactionControl::capture(b, ReactionKind::Like));
        let dislike = dislike.and_then(|b| ReactionControl::capture(b, ReactionKind::Dislike));

        let state = ReactionState {
            liked: like.as_ref().is_some_and(ReactionControl::is_active),
            like_count: like.as_ref().map_or(0, ReactionControl::displayed_count),
            disliked: dislike.as_ref().is_some_and(ReactionControl::is_active),
            dislike_count: dislike.as_ref().map_or(0, ReactionControl::displayed_count),
        };

        Self {
            like,
            dislike,
            state: Cell::new(state),
        }
    }

    fn control(&self, kind: ReactionKind) -> Option<&ReactionControl> {
        match kind {
            ReactionKind::Like => self.like.as_ref(),
            ReactionKind::Dislike => self.dislike.as_ref(),
        }
    }

    fn render(&self, state: ReactionState, pulse_ms: u32) {
        for kind in [ReactionKind::Like, ReactionKind::Dislike] {
            if let Some(control) = self.control(kind) {
                control.render(state.is_active(kind), state.count(kind), pulse_ms);
            }
        }
    }

    /// Run one request for `kind` with its control in the loading state, and
    /// apply an accepted reply to both controls. The control is restored
    /// before anything is rendered.
    async fn exchange<A>(
        &self,
        api: &A,
        kind: ReactionKind,
        pulse_ms: u32,
    ) -> Option<ReactionOutcome>
    where
        A: ReactionApi + ?Sized,
    {
        let control = self.control(kind)?;
        let outcome = {
            let _pending = PendingControl::begin(&control.button);
            submit_reaction(api, kind, control.post_id, self.state.get()).await
        };

        if let ReactionOutcome::Applied { state, .. } = &outcome {
            self.state.set(*state);
            self.render(*state, pulse_ms);
        }
        Some(outcome)
    }

    async fn react(self: Rc<Self>, kind: ReactionKind, ctx: FeedContext) {
        let Some(outcome) = self
            .exchange(&HttpReactionApi, kind, ctx.config.count_pulse_ms)
            .await
        else {
            return;
        };
        let Some(control) = self.control(kind) else {
            return;
        };

        match outcome {
            ReactionOutcome::Applied { feedback, .. } => {
                debug!("Post {} {:?} applied: {:?}", control.post_id, kind, feedback);
                show_floating_icon(ctx, feedback, element_anchor(&control.button));
            }
            ReactionOutcome::Rejected(message) => {
                warn!("Post {} {:?} rejected: {}", control.post_id, kind, message);
                notify_error(ctx, message);
            }
            ReactionOutcome::Failed(e) => {
                error!("Post {} {:?} failed: {}", control.post_id, kind, e);
                notify_error(ctx, e.user_message());
            }
        }
    }
}

fn bind_group(ctx: FeedContext, like: Option<&Element>, dislike: Option<&Element>) -> bool {
    let post = Rc::new(PostReactions::capture(like, dislike));
    let mut bound = false;

    for kind in [ReactionKind::Like, ReactionKind::Dislike] {
        let Some(control) = post.control(kind) else {
            continue;
        };
        let handler_post = post.clone();
        listen(&control.button, "click", move |_event| {
            spawn_local(handler_post.clone().react(kind, ctx));
        });
        bound = true;
    }

    bound
}

/// Pair each like button with the dislike button sharing its parent, then
/// bind any dislike button left on its own. Returns the number of groups.
pub fn bind_reactions(ctx: FeedContext, document: &Document) -> usize {
    let mut groups = 0;

    for like in query_all(document, button_selector(ReactionKind::Like)) {
        let dislike = like
            .parent_element()
            .and_then(|parent| query_in(&parent, button_selector(ReactionKind::Dislike)));
        if bind_group(ctx, Some(&like), dislike.as_ref()) {
            groups += 1;
        }
    }

    for dislike in query_all(document, button_selector(ReactionKind::Dislike)) {
        let paired = dislike
            .parent_element()
            .and_then(|parent| query_in(&parent, button_selector(ReactionKind::Like)))
            .is_some();
        if !paired && bind_group(ctx, None, Some(&dislike)) {
            groups += 1;
        }
    }

    groups
}

// ============================================================================
// Image upload
// ============================================================================

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

struct UploadControls {
    input: HtmlInputElement,
    preview: Option<HtmlElement>,
    preview_img: Option<HtmlImageElement>,
    max_bytes: u64,
    state: RefCell<ImageUploadState>,
    report_error: Box<dyn Fn(String)>,
}

impl UploadControls {
    /// Look up the composer's image elements and listen for selections on
    /// `#imageInput`. `report_error` receives every user-facing failure.
    fn bind(
        document: &Document,
        max_bytes: u64,
        report_error: impl Fn(String) + 'static,
    ) -> Option<Rc<Self>> {
        let input = element_by_id::<HtmlInputElement>(document, IMAGE_INPUT_ID)?;
        let controls = Rc::new(Self {
            input: input.clone(),
            preview: element_by_id(document, IMAGE_PREVIEW_ID),
            preview_img: element_by_id(document, PREVIEW_IMG_ID),
            max_bytes,
            state: RefCell::new(ImageUploadState::default()),
            report_error: Box::new(report_error),
        });

        let handler = controls.clone();
        listen(&input, "change", move |_event| {
            handler.clone().handle_image_select();
        });
        Some(controls)
    }

    fn handle_image_select(self: Rc<Self>) {
        let file = self.input.files().and_then(|files| files.get(0));
        let selected = file.as_ref().map(|f| SelectedFile {
            name: f.name(),
            mime: f.type_(),
            size: f.size() as u64,
        });

        let command = self
            .state
            .borrow_mut()
            .select(selected.as_ref(), self.max_bytes);

        match command {
            SelectionCommand::HidePreview => self.show_preview(None),
            SelectionCommand::Reject(e) => {
                let name = selected.as_ref().map_or("", |f| f.name.as_str());
                warn!("Image {} rejected: {}", name, e);
                self.input.set_value("");
                self.show_preview(None);
                (self.report_error)(e.user_message());
            }
            SelectionCommand::Read { ticket } => {
                let Some(file) = file else {
                    return;
                };
                spawn_local(async move {
                    match read_file_as_data_url(&file).await {
                        Ok(data_url) => {
                            if self.state.borrow_mut().finish_read(ticket, data_url.clone()) {
                                self.show_preview(Some(&data_url));
                            }
                        }
                        Err(e) => {
                            if self.state.borrow_mut().fail_read(ticket) {
                                error!("Image preview failed: {}", e);
                                self.show_preview(None);
                                (self.report_error)(e.user_message());
                            }
                        }
                    }
                });
            }
        }
    }

    fn show_preview(&self, data_url: Option<&str>) {
        if let (Some(data_url), Some(img)) = (data_url, &self.preview_img) {
            img.set_src(data_url);
        }

        if let Some(preview) = &self.preview {
            set_visible(preview, data_url.is_some());
            if data_url.is_some() {
                let _ = preview.class_list().add_1("fade-in-up");
            }
        }
    }
}

struct CharCounter {
    textarea: HtmlTextAreaElement,
    display: Option<HtmlElement>,
    config: FeedConfig,
}

impl CharCounter {
    fn update(&self) {
        let Some(display) = &self.display else {
            return;
        };

        let length = char_count(&self.textarea.value());
        let tier = CharCountTier::for_length(
            length,
            self.config.char_warning_threshold,
            self.config.char_danger_threshold,
        );
        display.set_text_content(Some(&length.to_string()));
        let _ = display.style().set_property("color", tier.color());
    }
}

pub fn bind_image_upload(ctx: FeedContext, document: &Document) {
    let upload = UploadControls::bind(document, ctx.config.max_image_bytes, move |message| {
        notify_error(ctx, message)
    });
    if upload.is_none() {
        debug!("No #{} on this page", IMAGE_INPUT_ID);
    }

    for trigger in query_all(document, REMOVE_IMAGE_SELECTOR) {
        listen(&trigger, "click", |event| {
            event.prevent_default();
            remove_image();
        });
    }

    if let Some(textarea) = document
        .query_selector(POST_TEXTAREA_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    {
        let counter = CharCounter {
            textarea: textarea.clone(),
            display: element_by_id(document, CHAR_COUNT_ID),
            config: ctx.config,
        };
        counter.update();
        listen(&textarea, "input", move |_event| counter.update());
    }
}

/// Clear the selected image and hide its preview. Callable from page markup
/// as `removeImage()`.
#[wasm_bindgen(js_name = removeImage)]
pub fn remove_image() {
    let Some(document) = document() else {
        return;
    };

    if let Some(input) = element_by_id::<HtmlInputElement>(&document, IMAGE_INPUT_ID) {
        input.set_value("");
        // The bound change handler sees an empty selection and drops any
        // preview still being read.
        if let Ok(event) = Event::new("change") {
            let _ = input.dispatch_event(&event);
        }
    }

    if let Some(preview) = element_by_id::<HtmlElement>(&document, IMAGE_PREVIEW_ID) {
        set_visible(&preview, false);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use async_trait::async_trait;
    use gloo_timers::future::TimeoutFuture;
    use shared_types::ReactionResponse;
    use wasm_bindgen_test::*;
    use web_sys::{DataTransfer, File, FilePropertyBag};

    use crate::config::MAX_IMAGE_BYTES;
    use crate::error::{FeedError, GENERIC_ERROR_MESSAGE};

    wasm_bindgen_test_configure!(run_in_browser);

    const POST_MARKUP: &str = concat!(
        r#"<button class="like-btn" data-post-id="7"><i class="fas fa-heart"></i><span class="like-count">4</span></button>"#,
        r#"<button class="dislike-btn active" data-post-id="7"><i class="fas fa-thumbs-down"></i><span class="dislike-count">1</span></button>"#,
    );

    fn test_document() -> Document {
        document().unwrap()
    }

    fn mount(tag: &str, id: &str, parent: &Element) -> Element {
        if let Some(existing) = test_document().get_element_by_id(id) {
            existing.remove();
        }
        let el = test_document().create_element(tag).unwrap();
        el.set_id(id);
        parent.append_child(&el).unwrap();
        el
    }

    fn post_actions() -> (Element, Element) {
        let body = test_document().body().unwrap();
        let actions = mount("div", "post-7-actions", &body);
        actions.set_inner_html(POST_MARKUP);
        (
            query_in(&actions, ".like-btn").unwrap(),
            query_in(&actions, ".dislike-btn").unwrap(),
        )
    }

    fn is_disabled(button: &Element) -> bool {
        button.dyn_ref::<HtmlButtonElement>().unwrap().disabled()
    }

    fn pointer_events(button: &Element) -> String {
        button
            .dyn_ref::<HtmlElement>()
            .unwrap()
            .style()
            .get_property_value("pointer-events")
            .unwrap()
    }

    fn count_text(button: &Element, selector: &str) -> String {
        query_in(button, selector).unwrap().text_content().unwrap()
    }

    /// Replies with a fixed result and records whether the clicked button
    /// was disabled while the request was in flight.
    struct ScriptedApi {
        reply: Result<ReactionResponse, FeedError>,
        button: Element,
        disabled_during_request: Cell<Option<bool>>,
    }

    impl ScriptedApi {
        fn new(reply: Result<ReactionResponse, FeedError>, button: &Element) -> Self {
            Self {
                reply,
                button: button.clone(),
                disabled_during_request: Cell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl ReactionApi for ScriptedApi {
        async fn react(
            &self,
            _kind: ReactionKind,
            _post_id: PostId,
        ) -> Result<ReactionResponse, FeedError> {
            self.disabled_during_request
                .set(Some(is_disabled(&self.button)));
            self.reply.clone()
        }
    }

    #[wasm_bindgen_test]
    fn pending_control_shows_spinner_then_restores_content() {
        let (like, _) = post_actions();
        let button: HtmlElement = like.clone().dyn_into().unwrap();
        let before = like.inner_html();
        let count = query_in(&like, ".like-count").unwrap();
        let count_node: &Node = &count;

        let pending = PendingControl::begin(&button);
        assert_eq!(like.inner_html(), SPINNER_HTML);
        assert!(is_disabled(&like));
        assert_eq!(pointer_events(&like), "none");

        drop(pending);
        assert_eq!(like.inner_html(), before);
        assert!(!is_disabled(&like));
        assert_eq!(pointer_events(&like), "auto");
        assert!(query_in(&like, ".like-count")
            .unwrap()
            .is_same_node(Some(count_node)));
    }

    #[wasm_bindgen_test]
    fn capture_reads_state_from_markup() {
        let (like, dislike) = post_actions();
        let post = PostReactions::capture(Some(&like), Some(&dislike));

        assert_eq!(
            post.state.get(),
            ReactionState {
                liked: false,
                like_count: 4,
                disliked: true,
                dislike_count: 1,
            }
        );
    }

    #[wasm_bindgen_test]
    async fn accepted_like_updates_both_controls() {
        let (like, dislike) = post_actions();
        let post = PostReactions::capture(Some(&like), Some(&dislike));
        let api = ScriptedApi::new(Ok(ReactionResponse::liked(true, 5, 0)), &like);

        let outcome = post.exchange(&api, ReactionKind::Like, 10).await;

        assert!(matches!(outcome, Some(ReactionOutcome::Applied { .. })));
        assert_eq!(api.disabled_during_request.get(), Some(true));
        assert!(like.class_list().contains("active"));
        assert!(!dislike.class_list().contains("active"));
        assert_eq!(count_text(&like, ".like-count"), "5");
        assert_eq!(count_text(&dislike, ".dislike-count"), "0");
        assert!(!is_disabled(&like));
        assert_eq!(pointer_events(&like), "auto");
        assert!(query_in(&like, ".fa-heart").is_some());
        assert!(query_in(&like, ".fa-spinner").is_none());
    }

    #[wasm_bindgen_test]
    async fn server_error_leaves_controls_untouched() {
        let (like, dislike) = post_actions();
        let like_before = like.inner_html();
        let dislike_before = dislike.inner_html();
        let post = PostReactions::capture(Some(&like), Some(&dislike));
        let api = ScriptedApi::new(Ok(ReactionResponse::rejected("x")), &like);

        let outcome = post.exchange(&api, ReactionKind::Like, 10).await;

        assert_eq!(outcome, Some(ReactionOutcome::Rejected("x".to_string())));
        assert_eq!(like.inner_html(), like_before);
        assert_eq!(dislike.inner_html(), dislike_before);
        assert!(!like.class_list().contains("active"));
        assert!(dislike.class_list().contains("active"));
        assert!(!is_disabled(&like));
        assert_eq!(pointer_events(&like), "auto");
    }

    #[wasm_bindgen_test]
    async fn transport_failure_restores_control() {
        let (like, dislike) = post_actions();
        let dislike_before = dislike.inner_html();
        let post = PostReactions::capture(Some(&like), Some(&dislike));
        let api = ScriptedApi::new(Err(FeedError::Request("offline".to_string())), &dislike);

        let outcome = post.exchange(&api, ReactionKind::Dislike, 10).await;

        let Some(ReactionOutcome::Failed(e)) = outcome else {
            panic!("expected a transport failure");
        };
        assert_eq!(e.user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(api.disabled_during_request.get(), Some(true));
        assert_eq!(dislike.inner_html(), dislike_before);
        assert!(!is_disabled(&dislike));
        assert_eq!(pointer_events(&dislike), "auto");
    }

    // ------------------------------------------------------------------------
    // Image upload
    // ------------------------------------------------------------------------

    struct Composer {
        input: HtmlInputElement,
        preview: HtmlElement,
        preview_img: HtmlImageElement,
        errors: Rc<RefCell<Vec<String>>>,
    }

    fn composer() -> Composer {
        let body = test_document().body().unwrap();
        let input: HtmlInputElement = mount("input", IMAGE_INPUT_ID, &body).dyn_into().unwrap();
        input.set_type("file");
        let preview: HtmlElement = mount("div", IMAGE_PREVIEW_ID, &body).dyn_into().unwrap();
        set_visible(&preview, false);
        let preview_img: HtmlImageElement =
            mount("img", PREVIEW_IMG_ID, &preview).dyn_into().unwrap();

        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = errors.clone();
        UploadControls::bind(&test_document(), MAX_IMAGE_BYTES, move |message| {
            sink.borrow_mut().push(message)
        })
        .unwrap();

        Composer {
            input,
            preview,
            preview_img,
            errors,
        }
    }

    fn file(len: u32, mime: &str, name: &str) -> File {
        let bytes = js_sys::Uint8Array::new_with_length(len);
        bytes.fill(1, 0, len);
        let parts = js_sys::Array::of1(&bytes);
        let options = FilePropertyBag::new();
        options.set_type(mime);
        File::new_with_u8_array_sequence_and_options(&parts, name, &options).unwrap()
    }

    fn choose(input: &HtmlInputElement, file: &File) {
        let transfer = DataTransfer::new().unwrap();
        transfer.items().add_with_file(file).unwrap();
        input.set_files(transfer.files().as_ref());
        input.dispatch_event(&Event::new("change").unwrap()).unwrap();
    }

    fn display(preview: &HtmlElement) -> String {
        preview.style().get_property_value("display").unwrap()
    }

    async fn wait_for_preview(preview: &HtmlElement) {
        for _ in 0..100 {
            if display(preview) == "block" {
                return;
            }
            TimeoutFuture::new(10).await;
        }
    }

    #[wasm_bindgen_test]
    async fn valid_image_is_previewed() {
        let composer = composer();

        choose(&composer.input, &file(3, "image/png", "dot.png"));
        wait_for_preview(&composer.preview).await;

        assert_eq!(display(&composer.preview), "block");
        assert_eq!(composer.preview_img.src(), "data:image/png;base64,AQEB");
        assert!(composer.preview.class_list().contains("fade-in-up"));
        assert!(composer.errors.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    async fn oversized_image_is_rejected() {
        let composer = composer();
        choose(&composer.input, &file(3, "image/png", "dot.png"));
        wait_for_preview(&composer.preview).await;

        let too_big = u32::try_from(MAX_IMAGE_BYTES + 1).unwrap();
        choose(&composer.input, &file(too_big, "image/png", "huge.png"));

        assert_eq!(composer.input.value(), "");
        assert_eq!(display(&composer.preview), "none");
        assert_eq!(
            composer.errors.borrow().as_slice(),
            ["La imagen debe ser menor a 5MB".to_string()]
        );
    }

    #[wasm_bindgen_test]
    fn non_image_is_rejected() {
        let composer = composer();

        choose(&composer.input, &file(4, "text/plain", "notes.txt"));

        assert_eq!(composer.input.value(), "");
        assert_eq!(display(&composer.preview), "none");
        assert_eq!(
            composer.errors.borrow().as_slice(),
            ["Por favor selecciona un archivo de imagen válido".to_string()]
        );
    }

    #[wasm_bindgen_test]
    async fn remove_image_drops_a_read_in_flight() {
        let composer = composer();

        choose(&composer.input, &file(3, "image/png", "dot.png"));
        remove_image();
        TimeoutFuture::new(50).await;

        assert_eq!(composer.input.value(), "");
        assert_eq!(display(&composer.preview), "none");
        assert!(composer.errors.borrow().is_empty());
    }
}
