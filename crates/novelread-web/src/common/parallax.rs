use std::cell::Cell;
use std::rc::Rc;

use dominator::clone;
use futures_signals::signal::{Mutable, Signal, SignalExt};
use novelread_lib::parallax;
use wasm_bindgen::{JsCast, prelude::*};

use crate::utils::{scroll_y, window};

/// Page scroll offset, sampled at most once per animation frame.
pub struct ScrollOffset {
    offset: Mutable<f64>,
    frame_pending: Cell<bool>,
}

impl ScrollOffset {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            offset: Mutable::new(scroll_y()),
            frame_pending: Cell::new(false),
        })
    }

    /// Hook for the `scroll` event.
    pub fn schedule(this: &Rc<Self>) {
        if this.frame_pending.replace(true) {
            return;
        }

        let callback = Closure::once_into_js(clone!(this => move || {
            this.frame_pending.set(false);
            this.offset.set_neq(scroll_y());
        }));

        if let Err(e) = window().request_animation_frame(callback.unchecked_ref()) {
            error!("error request animation frame: {:?}", e);
            this.frame_pending.set(false);
            this.offset.set_neq(scroll_y());
        }
    }

    pub fn transform_signal(&self, rate: f64) -> impl Signal<Item = String> + use<> {
        self.offset
            .signal()
            .map(move |scroll_y| parallax::transform(scroll_y, rate))
    }
}
