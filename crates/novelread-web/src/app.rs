use std::rc::Rc;

use dominator::{Dom, html, link};
use futures_signals::signal::SignalExt;
use novelread_lib::view::APP_TITLE;

use crate::common::{Header, Route, route, snackbar};
use crate::home::Home;
use crate::login::Login;
use crate::novel::NovelDetail;
use crate::reader::Reader;
use crate::utils::{scroll_to_top, set_document_title};

pub struct App;

impl App {
    pub fn new() -> Rc<Self> {
        Rc::new(App)
    }

    fn render_not_found() -> Dom {
        set_document_title(&format!("Not Found | {}", APP_TITLE));

        html!("div", {
            .children(&mut [
                Header::render(Header::new()),
                html!("div", {
                    .class("container")
                    .class("status")
                    .children(&mut [
                        html!("h1", {
                            .text("Page not found")
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

    pub fn render(_app: Rc<Self>) -> Dom {
        html!("div", {
            .class("app")
            .future(route::signal().for_each(|route| {
                info!("navigate to {}", route.url());
                scroll_to_top();

                async {}
            }))
            .child_signal(route::signal().map(|route| {
                Some(match route {
                    Route::Home => Home::render(Home::new()),
                    Route::Novel(slug) => NovelDetail::render(NovelDetail::new(slug)),
                    Route::Chapter(slug) => Reader::render(Reader::new(slug)),
                    Route::Login => Login::render(Login::new()),
                    Route::NotFound => Self::render_not_found(),
                })
            }))
            .children(&mut [
                snackbar::render(),
            ])
        })
    }
}
