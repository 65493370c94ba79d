use dominator::{Dom, events, html};

/// Pending branch shared by every fetching component.
pub fn render_pending(fullscreen: bool) -> Dom {
    html!("div", {
        .class("status")
        .class("pending")
        .apply_if(fullscreen, |dom| dom.class("fullscreen"))
        .children(&mut [
            html!("div", {
                .class("loader")
            }),
            html!("p", {
                .text("Loading...")
            })
        ])
    })
}

/// Failure branch with a retry button.
pub fn render_failed<F>(message: &str, fullscreen: bool, retry: F) -> Dom
where
    F: Fn() + 'static,
{
    html!("div", {
        .class("status")
        .class("failed")
        .apply_if(fullscreen, |dom| dom.class("fullscreen"))
        .children(&mut [
            html!("p", {
                .class("error-message")
                .text(&format!("Error: {}", message))
            }),
            html!("button", {
                .class("retry-button")
                .text("Retry")
                .event(move |_: events::Click| retry())
            })
        ])
    })
}

pub fn render_empty(message: &str) -> Dom {
    html!("p", {
        .class("status")
        .class("empty")
        .text(message)
    })
}
