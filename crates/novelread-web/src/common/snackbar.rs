use std::rc::Rc;

use dominator::{Dom, clone, events, html, svg};
use futures_signals::signal::{Mutable, SignalExt};
use gloo_timers::callback::Timeout;

const DISMISS_AFTER_MS: u32 = 5_000;

thread_local! {
    static SNACKBAR: Rc<Snackbar> = Snackbar::new();
}

pub fn show(message: String) {
    SNACKBAR.with(|s| Snackbar::show(s.clone(), message));
}

pub fn render() -> Dom {
    SNACKBAR.with(|s| Snackbar::render(s.clone()))
}

/// Global toast for fetch errors. Hides itself after a few seconds.
pub struct Snackbar {
    message: Mutable<Option<String>>,
    timeout: Mutable<Option<Timeout>>,
}

impl Snackbar {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            message: Mutable::new(None),
            timeout: Mutable::new(None),
        })
    }

    fn show(snackbar: Rc<Self>, message: String) {
        snackbar.message.set(Some(message));

        let timeout = Timeout::new(DISMISS_AFTER_MS, clone!(snackbar => move || {
            snackbar.message.set(None);
        }));
        // dropping the previous Timeout cancels it
        snackbar.timeout.set(Some(timeout));
    }

    fn dismiss(&self) {
        self.message.set(None);
        self.timeout.set(None);
    }

    fn render(snackbar: Rc<Self>) -> Dom {
        html!("div", {
            .class("snackbar")
            .attr("role", "alert")
            .visible_signal(snackbar.message.signal_ref(|message| message.is_some()))
            .children(&mut [
                html!("div", {
                    .child_signal(snackbar.message.signal_cloned().map(|message| message.map(|msg| html!("span", {
                            .text(msg.as_str())
                        })
                    )))
                    .children(&mut [
                        html!("button", {
                            .attr("aria-label", "Dismiss")
                            .event(clone!(snackbar => move |_: events::Click| snackbar.dismiss()))
                            .children(&mut [
                                svg!("svg", {
                                    .attr("xmlns", "http://www.w3.org/2000/svg")
                                    .attr("viewBox", "0 0 24 24")
                                    .attr("stroke", "currentColor")
                                    .attr("fill", "none")
                                    .class("icon")
                                    .children(&mut [
                                        svg!("path", {
                                            .attr("stroke-linecap", "round")
                                            .attr("stroke-linejoin", "round")
                                            .attr("stroke-width", "2")
                                            .attr("d", "M6 18L18 6M6 6l12 12")
                                        }),
                                    ])
                                })
                            ])
                        })
                    ])
                })
            ])
        })
    }
}
