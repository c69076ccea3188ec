//! Thin bindings to the page's GSAP globals (`gsap`, `ScrollTrigger`,
//! `ScrollToPlugin`).
//!
//! Every import is `catch`: a missing or throwing library surfaces as
//! `Err(JsValue)` and is logged, never as a trap. Call [`available`] once at
//! startup and skip the animation features when it returns `false`.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = registerPlugin)]
    fn gsap_register_plugin(plugin: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = from)]
    fn gsap_from(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = timeline)]
    fn gsap_timeline() -> Result<Timeline, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["gsap", "globalTimeline"], js_name = timeScale)]
    fn gsap_global_time_scale(value: f64) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ScrollTrigger, js_name = update)]
    fn scroll_trigger_update() -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ScrollTrigger, js_name = refresh)]
    fn scroll_trigger_refresh() -> Result<(), JsValue>;

    pub type Timeline;

    #[wasm_bindgen(method, catch, js_name = from)]
    fn from_at(
        this: &Timeline,
        targets: &JsValue,
        vars: &Object,
        position: &JsValue,
    ) -> Result<Timeline, JsValue>;
}

fn global_has(name: &str) -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// Whether the tweening library is loaded on this page.
pub fn available() -> bool {
    global_has("gsap")
}

/// Register ScrollTrigger and ScrollToPlugin. Returns `false` when GSAP is absent.
pub fn register_plugins() -> bool {
    if !available() {
        log::warn!("[anim] gsap not loaded; animations disabled");
        return false;
    }
    for name in ["ScrollTrigger", "ScrollToPlugin"] {
        match Reflect::get(&js_sys::global(), &JsValue::from_str(name)) {
            Ok(plugin) if !plugin.is_undefined() => {
                if let Err(e) = gsap_register_plugin(&plugin) {
                    log::warn!("[anim] registerPlugin({name}) failed: {:?}", e);
                }
            }
            _ => log::warn!("[anim] {name} not loaded"),
        }
    }
    true
}

fn report(what: &str, r: Result<impl Sized, JsValue>) {
    if let Err(e) = r {
        log::warn!("[anim] {what} failed: {:?}", e);
    }
}

/// Tween vars object built fluently, then handed to `to` / `from` / `set`.
#[derive(Clone)]
pub struct Tween {
    vars: Object,
}

impl Default for Tween {
    fn default() -> Self {
        Self::new()
    }
}

impl Tween {
    pub fn new() -> Self {
        Self { vars: Object::new() }
    }

    pub fn val(self, key: &str, value: &JsValue) -> Self {
        _ = Reflect::set(&self.vars, &JsValue::from_str(key), value);
        self
    }

    pub fn num(self, key: &str, value: f64) -> Self {
        self.val(key, &JsValue::from_f64(value))
    }

    pub fn text(self, key: &str, value: &str) -> Self {
        self.val(key, &JsValue::from_str(value))
    }

    pub fn nested(self, key: &str, inner: Tween) -> Self {
        let inner = inner.vars;
        self.val(key, &inner)
    }

    #[inline]
    pub fn duration(self, seconds: f64) -> Self {
        self.num("duration", seconds)
    }

    #[inline]
    pub fn ease(self, ease: &str) -> Self {
        self.text("ease", ease)
    }

    /// ScrollTrigger block that fires when `trigger` crosses `start`.
    pub fn scroll_trigger(self, trigger: &JsValue, start: &str) -> Self {
        self.nested(
            "scrollTrigger",
            Tween::new().val("trigger", trigger).text("start", start),
        )
    }

    pub fn to(self, targets: &JsValue) {
        report("gsap.to", gsap_to(targets, &self.vars));
    }

    pub fn from(self, targets: &JsValue) {
        report("gsap.from", gsap_from(targets, &self.vars));
    }

    pub fn set(self, targets: &JsValue) {
        report("gsap.set", gsap_set(targets, &self.vars));
    }
}

/// Sequenced tweens; each step is an `(targets, vars, position)` triple.
pub fn timeline_from(steps: impl IntoIterator<Item = (JsValue, Tween, Option<&'static str>)>) {
    let tl = match gsap_timeline() {
        Ok(tl) => tl,
        Err(e) => {
            log::warn!("[anim] gsap.timeline failed: {:?}", e);
            return;
        }
    };
    for (targets, tween, position) in steps {
        let position = position.map(JsValue::from_str).unwrap_or(JsValue::UNDEFINED);
        report("timeline.from", tl.from_at(&targets, &tween.vars, &position));
    }
}

pub fn set_global_time_scale(value: f64) {
    report("globalTimeline.timeScale", gsap_global_time_scale(value));
}

pub fn update_scroll_triggers() {
    report("ScrollTrigger.update", scroll_trigger_update());
}

pub fn refresh_scroll_triggers() {
    report("ScrollTrigger.refresh", scroll_trigger_refresh());
}
