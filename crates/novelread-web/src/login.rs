use std::rc::Rc;

use dominator::{Dom, html, link};
use novelread_lib::view::APP_TITLE;

use crate::common::{Header, Route};
use crate::utils::set_document_title;

/// Login has no backend yet, so the page only keeps the header link alive.
pub struct Login {
    header: Rc<Header>,
}

impl Login {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            header: Header::new(),
        })
    }

    pub fn render(login: Rc<Self>) -> Dom {
        set_document_title(&format!("Login | {}", APP_TITLE));

        html!("div", {
            .class("login")
            .children(&mut [
                Header::render(login.header.clone()),
                html!("div", {
                    .class("container")
                    .class("status")
                    .children(&mut [
                        html!("p", {
                            .text("Login is not available yet.")
                        }),
                        link!(Route::Home.url(), {
                            .class("read-more")
                            .text("Back to Home")
                        })
                    ])
                })
            ])
        })
    }
}
