use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use futures::{
    Future,
    future::{AbortHandle, Aborted, abortable},
};
use novelread_lib::{api::ApiUrls, config::Config, fetch_slot::FetchSlot};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Window};

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static DOCUMENT: Document = WINDOW.with(|w| w.document().unwrap_throw());
    static CONFIG: RefCell<Rc<Config>> = RefCell::new(Rc::new(Config::default()));
}

/// A single fetch slot. Loading a new request aborts the one in flight, and a
/// result only reaches component state while its token is still current.
pub struct AsyncLoader {
    slot: Rc<RefCell<FetchSlot>>,
    handle: RefCell<Option<AbortHandle>>,
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(FetchSlot::new())),
            handle: RefCell::new(None),
        }
    }

    pub fn cancel(&self) {
        self.slot.borrow_mut().cancel();
        if let Some(handle) = self.handle.borrow_mut().take() {
            handle.abort();
        }
    }

    /// Run `fut` in this slot and hand its output to `apply`, unless a newer
    /// load or a cancel happened in the meantime.
    pub fn load<T, F, A>(&self, fut: F, apply: A)
    where
        T: 'static,
        F: Future<Output = T> + 'static,
        A: FnOnce(T) + 'static,
    {
        self.cancel();

        let (fut, handle) = abortable(fut);
        let token = self.slot.borrow_mut().begin();
        *self.handle.borrow_mut() = Some(handle);

        let slot = self.slot.clone();

        spawn_local(async move {
            match fut.await {
                Ok(value) => {
                    let accepted = slot.borrow_mut().accept(token);
                    if accepted {
                        apply(value);
                    } else {
                        debug!("request {} is stale, dropping result", token.id());
                    }
                }
                Err(Aborted) => {
                    debug!("request {} superseded", token.id());
                }
            }
        });
    }
}

fn read_global(name: &str) -> Result<JsValue, anyhow::Error> {
    js_sys::Reflect::get(&window(), &JsValue::from_str(name))
        .map_err(|e| anyhow!("error read window.{}: {:?}", name, e))
}

fn load_config() -> Result<Config, anyhow::Error> {
    let injected = read_global("__NOVELREAD_CONFIG__")?;
    let config = if let Some(json) = injected.as_string() {
        Config::from_json(&json)?
    } else if injected.is_object() {
        let json = js_sys::JSON::stringify(&injected)
            .map_err(|e| anyhow!("error stringify config: {:?}", e))?;
        Config::from_json(&String::from(json))?
    } else if let Some(api_base_url) = option_env!("NOVELREAD_API_URL") {
        Config::default().with_api_base_url(api_base_url)?
    } else {
        Config::default()
    };

    match read_global("__NOVELREAD_API__")?.as_string() {
        Some(api_base_url) => Ok(config.with_api_base_url(&api_base_url)?),
        None => Ok(config),
    }
}

pub fn initialize_config() {
    let config = load_config().unwrap_or_else(|e| {
        error!("{:#}, falling back to default config", e);
        Config::default()
    });
    info!("using api at {}", config.api_base_url);

    CONFIG.with(|c| *c.borrow_mut() = Rc::new(config));
}

pub fn config() -> Rc<Config> {
    CONFIG.with(|c| c.borrow().clone())
}

pub fn api() -> ApiUrls {
    config().api()
}

pub fn set_document_title(title: &str) {
    document().set_title(title);
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0_f64, 0.0_f64);
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}

pub fn window() -> Window {
    WINDOW.with(|s| s.clone())
}

pub fn document() -> Document {
    DOCUMENT.with(|d| d.clone())
}
