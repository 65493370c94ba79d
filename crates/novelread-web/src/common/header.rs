use std::rc::Rc;

use dominator::{Dom, clone, events, html, link, svg};
use futures_signals::signal::{Mutable, SignalExt};

use super::Route;

const LOGIN_ICON: &str = "M11 16l-4-4m0 0l4-4m-4 4h14m-5 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h7a3 3 0 013 3v1";
const SEARCH_ICON: &str = "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z";
const MENU_ICON: &str = "M4 6h16M4 12h16m-7 6h7";

pub struct Header {
    is_menu_open: Mutable<bool>,
}

impl Header {
    pub fn new() -> Rc<Self> {
        Rc::new(Header {
            is_menu_open: Mutable::new(false),
        })
    }

    pub fn toggle_menu(&self) {
        self.is_menu_open.replace_with(|open| !*open);
    }

    fn render_icon(d: &str) -> Dom {
        svg!("svg", {
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("fill", "none")
            .attr("viewBox", "0 0 24 24")
            .attr("stroke", "currentColor")
            .class("icon")
            .children(&mut [
                svg!("path", {
                    .attr("stroke-linecap", "round")
                    .attr("stroke-linejoin", "round")
                    .attr("stroke-width", "2")
                    .attr("d", d)
                })
            ])
        })
    }

    fn render_login_link() -> Dom {
        link!(Route::Login.url(), {
            .class("login-button")
            .children(&mut [
                Self::render_icon(LOGIN_ICON),
                html!("span", {
                    .text("Login")
                })
            ])
        })
    }

    fn render_mobile_menu() -> Dom {
        html!("nav", {
            .class("mobile-menu")
            .children(&mut [
                link!(Route::Home.url(), {
                    .class("mobile-menu-item")
                    .text("Home")
                }),
                Self::render_login_link(),
            ])
        })
    }

    pub fn render(header: Rc<Self>) -> Dom {
        html!("header", {
            .class("header")
            .children(&mut [
                html!("div", {
                    .class("header-bar")
                    .children(&mut [
                        link!(Route::Home.url(), {
                            .class("brand")
                            .children(&mut [
                                html!("span", {
                                    .class("brand-primary")
                                    .text("Novel")
                                }),
                                html!("span", {
                                    .class("brand-secondary")
                                    .text("Read")
                                })
                            ])
                        }),
                        html!("nav", {
                            .class("desktop-menu")
                            .children(&mut [
                                link!(Route::Home.url(), {
                                    .class_signal("active", super::route::signal().map(|x| matches!(x, Route::Home)))
                                    .text("Home")
                                })
                            ])
                        }),
                        html!("div", {
                            .class("header-actions")
                            .children(&mut [
                                // search has no destination yet
                                html!("button", {
                                    .class("search-button")
                                    .attr("aria-label", "Search")
                                    .children(&mut [
                                        Self::render_icon(SEARCH_ICON),
                                    ])
                                }),
                                Self::render_login_link(),
                                html!("button", {
                                    .class("menu-toggle")
                                    .attr("aria-label", "Menu")
                                    .attr_signal("aria-expanded", header.is_menu_open.signal().map(|open| if open { "true" } else { "false" }))
                                    .event(clone!(header => move |_: events::Click| {
                                        header.toggle_menu();
                                    }))
                                    .children(&mut [
                                        Self::render_icon(MENU_ICON),
                                    ])
                                })
                            ])
                        })
                    ])
                })
            ])
            .child_signal(header.is_menu_open.signal().map(|open| open.then(Self::render_mobile_menu)))
        })
    }
}
