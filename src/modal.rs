use crate::constants::*;
use crate::core::constants::{MODAL_ACTIVATE_DELAY_MS, MODAL_HIDE_DELAY_MS};
use crate::core::progress::format_time;
use crate::core::transport::{pick_fullscreen_entry, seek_fraction, PlayIcon, VolumeIcon};
use crate::core::{FrameGate, ModalController, PlaybackSurface, SelectionRequest};
use crate::dom::{self, DomError};
use js_sys::{Function, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `<video id="portfolioVideo">` as the controller's playback surface.
#[derive(Clone)]
pub struct VideoSurface {
    video: web::HtmlVideoElement,
}

impl PlaybackSurface for VideoSurface {
    fn source(&self) -> String {
        self.video.src()
    }

    fn set_source(&self, url: &str) {
        self.video.set_src(url);
    }

    fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.video.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.video.duration()
    }

    fn paused(&self) -> bool {
        self.video.paused()
    }

    fn muted(&self) -> bool {
        self.video.muted()
    }

    fn set_muted(&self, muted: bool) {
        self.video.set_muted(muted);
    }

    fn play(&self) {
        match self.video.play() {
            // Rejects on autoplay policy or when a pause interrupts loading.
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("[modal] play() rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[modal] play() threw: {:?}", e),
        }
    }

    fn pause(&self) {
        if let Err(e) = self.video.pause() {
            log::warn!("[modal] pause() threw: {:?}", e);
        }
    }
}

/// Every element the modal touches, looked up once at startup.
pub struct ModalElements {
    pub modal: web::HtmlElement,
    pub close_btn: web::Element,
    pub video: web::HtmlVideoElement,
    pub play_pause_btn: web::Element,
    pub play_icon: web::HtmlElement,
    pub pause_icon: web::HtmlElement,
    pub mute_btn: web::Element,
    pub volume_high: web::HtmlElement,
    pub volume_mute: web::HtmlElement,
    pub fullscreen_btn: web::Element,
    pub progress_bar: web::Element,
    pub progress_fill: web::HtmlElement,
    pub progress_handle: web::HtmlElement,
    pub current_time: web::Element,
    pub duration_time: web::Element,
    pub title: web::Element,
    pub description: web::Element,
    pub player_container: web::Element,
    pub body: web::HtmlElement,
}

impl ModalElements {
    pub fn query(doc: &web::Document) -> Result<Self, DomError> {
        let play_pause_btn: web::Element = dom::by_id(doc, ID_PLAY_PAUSE_BTN)?;
        let mute_btn: web::Element = dom::by_id(doc, ID_MUTE_BTN)?;
        Ok(Self {
            modal: dom::by_id(doc, ID_VIDEO_MODAL)?,
            close_btn: dom::by_id(doc, ID_CLOSE_VIDEO_MODAL)?,
            video: dom::by_id(doc, ID_PORTFOLIO_VIDEO)?,
            play_icon: dom::query_in(&play_pause_btn, SEL_PLAY_ICON)?,
            pause_icon: dom::query_in(&play_pause_btn, SEL_PAUSE_ICON)?,
            volume_high: dom::query_in(&mute_btn, SEL_VOLUME_HIGH)?,
            volume_mute: dom::query_in(&mute_btn, SEL_VOLUME_MUTE)?,
            play_pause_btn,
            mute_btn,
            fullscreen_btn: dom::by_id(doc, ID_FULLSCREEN_BTN)?,
            progress_bar: dom::query(doc, SEL_PROGRESS_BAR)?,
            progress_fill: dom::query(doc, SEL_PROGRESS_FILL)?,
            progress_handle: dom::query(doc, SEL_PROGRESS_HANDLE)?,
            current_time: dom::query(doc, SEL_CURRENT_TIME)?,
            duration_time: dom::query(doc, SEL_DURATION_TIME)?,
            title: dom::by_id(doc, ID_VIDEO_TITLE)?,
            description: dom::by_id(doc, ID_VIDEO_DESCRIPTION)?,
            player_container: dom::query(doc, SEL_PLAYER_CONTAINER)?,
            body: dom::body(doc)?,
        })
    }
}

/// Video preview modal: the controller plus the DOM it renders into.
pub struct VideoModal {
    els: ModalElements,
    controller: RefCell<ModalController<VideoSurface>>,
    // Kept alive so it can be deregistered on the next open.
    on_metadata: RefCell<Option<Closure<dyn FnMut()>>>,
    progress_gate: RefCell<FrameGate>,
}

impl VideoModal {
    pub fn new(els: ModalElements) -> Rc<Self> {
        let surface = VideoSurface {
            video: els.video.clone(),
        };
        Rc::new(Self {
            els,
            controller: RefCell::new(ModalController::new(surface)),
            on_metadata: RefCell::new(None),
            progress_gate: RefCell::new(FrameGate::default()),
        })
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.controller.borrow().is_open()
    }

    pub fn open(self: &Rc<Self>, request: &SelectionRequest) {
        let state = self.controller.borrow_mut().open(request).clone();
        self.els.title.set_text_content(Some(&state.title));
        self.els.description.set_text_content(Some(&state.description));
        self.rearm_metadata_listener();

        dom::set_style(&self.els.modal, "display", "flex");
        let this = self.clone();
        dom::set_timeout(MODAL_ACTIVATE_DELAY_MS, move || {
            if this.controller.borrow().activate_due() {
                _ = this.els.modal.class_list().add_1(CLASS_ACTIVE);
            }
        });
        dom::set_style(&self.els.body, "overflow", "hidden");
        self.show_play_icon(PlayIcon::for_paused(self.els.video.paused()));
        log::info!("[modal] open {}", state.source_url);
    }

    pub fn close(self: &Rc<Self>) {
        if !self.controller.borrow_mut().close() {
            return;
        }
        _ = self.els.modal.class_list().remove_1(CLASS_ACTIVE);
        dom::set_style(&self.els.body, "overflow", "auto");
        let this = self.clone();
        dom::set_timeout(MODAL_HIDE_DELAY_MS, move || {
            if this.controller.borrow().hide_due() {
                dom::set_style(&this.els.modal, "display", "none");
            } else {
                log::debug!("[modal] reopened during close; keeping visible");
            }
        });
        log::info!("[modal] close");
    }

    /// Replace the one-shot `loadedmetadata` listener so a re-open never
    /// leaves two of them writing the duration label.
    fn rearm_metadata_listener(&self) {
        let video = &self.els.video;
        if let Some(old) = self.on_metadata.borrow_mut().take() {
            _ = video.remove_event_listener_with_callback(
                "loadedmetadata",
                old.as_ref().unchecked_ref(),
            );
        }
        let label = self.els.duration_time.clone();
        let video_for_cb = video.clone();
        let cb = Closure::wrap(Box::new(move || {
            label.set_text_content(Some(&format_time(video_for_cb.duration())));
        }) as Box<dyn FnMut()>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = video.add_event_listener_with_callback_and_add_event_listener_options(
            "loadedmetadata",
            cb.as_ref().unchecked_ref(),
            &opts,
        );
        *self.on_metadata.borrow_mut() = Some(cb);
    }

    fn show_play_icon(&self, icon: PlayIcon) {
        let playing = icon == PlayIcon::Pause;
        dom::set_shown(&self.els.play_icon, !playing);
        dom::set_shown(&self.els.pause_icon, playing);
    }

    fn show_volume_icon(&self, icon: VolumeIcon) {
        let muted = icon == VolumeIcon::Muted;
        dom::set_shown(&self.els.volume_high, !muted);
        dom::set_shown(&self.els.volume_mute, muted);
    }

    fn toggle_play(&self) {
        let icon = self.controller.borrow().toggle_play();
        if let Some(icon) = icon {
            self.show_play_icon(icon);
        }
    }

    fn toggle_mute(&self) {
        let icon = self.controller.borrow().toggle_mute();
        if let Some(icon) = icon {
            self.show_volume_icon(icon);
        }
    }

    fn seek_click(&self, ev: &web::MouseEvent) {
        let rect = self.els.progress_bar.get_bounding_client_rect();
        let fraction = seek_fraction(ev.client_x() as f64, rect.left(), rect.width());
        if let Some(t) = self.controller.borrow().seek_to_fraction(fraction) {
            log::debug!("[modal] seek {:.2}s", t);
        }
    }

    fn request_fullscreen(&self) {
        if !self.is_open() {
            return;
        }
        let container: &JsValue = self.els.player_container.as_ref();
        let method = |name: &str| Reflect::get(container, &JsValue::from_str(name)).ok();
        let Some(name) = pick_fullscreen_entry(|name| method(name).is_some_and(|m| m.is_function()))
        else {
            log::debug!("[modal] fullscreen unsupported");
            return;
        };
        if let Some(f) = method(name).and_then(|m| m.dyn_into::<Function>().ok()) {
            // Standard entry point returns a promise; its rejection is not an error for us.
            if let Err(e) = f.call0(container) {
                log::warn!("[modal] {name} threw: {:?}", e);
            }
        }
    }

    /// Coalesce `timeupdate` bursts into one progress render per frame.
    fn schedule_progress(self: &Rc<Self>) {
        if !self.progress_gate.borrow_mut().request() {
            return;
        }
        let this = self.clone();
        let scheduled = dom::next_frame(move || {
            this.progress_gate.borrow_mut().fire();
            this.render_progress();
        });
        if scheduled.is_none() {
            self.progress_gate.borrow_mut().fire();
            self.render_progress();
        }
    }

    fn render_progress(&self) {
        let Some(frame) = self.controller.borrow().progress() else {
            return;
        };
        let pct = frame.css_percent();
        dom::set_style(&self.els.progress_fill, "width", &pct);
        dom::set_style(&self.els.progress_handle, "left", &pct);
        self.els
            .current_time
            .set_text_content(Some(&frame.current_label));
    }
}

/// Build a selection request from a clicked portfolio tile.
fn request_for_tile(item: &web::Element) -> SelectionRequest {
    SelectionRequest::from_attributes(
        item.get_attribute(ATTR_VIDEO).as_deref(),
        item.get_attribute(ATTR_CATEGORY).as_deref(),
        &dom::text_in(item, SEL_PORTFOLIO_TITLE),
        &dom::text_in(item, SEL_PORTFOLIO_DESC),
    )
}

fn wire_tiles(document: &web::Document, modal: &Rc<VideoModal>) {
    let mut wired = 0;
    for item in dom::query_all(document, SEL_PORTFOLIO_ITEM) {
        let Ok(overlay) = dom::query_in::<web::HtmlElement>(&item, SEL_PORTFOLIO_OVERLAY) else {
            log::warn!("[modal] portfolio item without overlay");
            continue;
        };
        dom::set_style(&overlay, "cursor", "pointer");
        let modal = modal.clone();
        dom::add_click_listener(&overlay, move |_| {
            modal.open(&request_for_tile(&item));
        });
        wired += 1;
    }
    log::info!("[modal] wired {} preview tiles", wired);
}

fn wire_transport(modal: &Rc<VideoModal>) {
    let els = &modal.els;

    let m = modal.clone();
    dom::add_click_listener(&els.play_pause_btn, move |_| m.toggle_play());

    let m = modal.clone();
    dom::add_click_listener(&els.mute_btn, move |_| m.toggle_mute());

    let m = modal.clone();
    dom::add_click_listener(&els.progress_bar, move |ev| m.seek_click(&ev));

    let m = modal.clone();
    dom::add_click_listener(&els.fullscreen_btn, move |_| m.request_fullscreen());

    // Native signals keep the icons honest when playback changes elsewhere.
    for signal in ["play", "pause"] {
        let m = modal.clone();
        dom::on::<web::Event>(&els.video, signal, move |_| {
            m.show_play_icon(PlayIcon::for_paused(m.els.video.paused()));
        });
    }

    let m = modal.clone();
    dom::on::<web::Event>(&els.video, "timeupdate", move |_| m.schedule_progress());
}

fn wire_dismissal(modal: &Rc<VideoModal>) {
    let m = modal.clone();
    dom::add_click_listener(&modal.els.close_btn, move |_| m.close());

    // Backdrop only: clicks inside the dialog content bubble up with a different target.
    let m = modal.clone();
    dom::add_click_listener(&modal.els.modal, move |ev| {
        let on_backdrop = ev
            .target()
            .is_some_and(|t| js_sys::Object::is(t.as_ref(), m.els.modal.as_ref()));
        if on_backdrop {
            m.close();
        }
    });
}

/// Look up the modal markup and wire tiles, transport and dismissal.
pub fn wire(document: &web::Document) -> Result<Rc<VideoModal>, DomError> {
    let modal = VideoModal::new(ModalElements::query(document)?);
    wire_tiles(document, &modal);
    wire_transport(&modal);
    wire_dismissal(&modal);
    Ok(modal)
}
