use std::rc::Rc;

use dominator::{Dom, clone, html, link};
use futures_signals::signal::{Mutable, SignalExt};
use novelread_lib::{
    load_state::LoadState,
    view::{NovelCard, novel_cards},
};

use crate::common::{snackbar, status};
use crate::query;
use crate::utils::AsyncLoader;

/// "Latest Novel Updates" grid on the home page.
pub struct Updates {
    loader: AsyncLoader,
    novels: Mutable<LoadState<Rc<Vec<NovelCard>>>>,
}

impl Updates {
    pub fn new() -> Rc<Self> {
        Rc::new(Updates {
            loader: AsyncLoader::new(),
            novels: Mutable::new(LoadState::Pending),
        })
    }

    pub fn fetch_novels(updates: Rc<Self>) {
        updates.novels.set(LoadState::Pending);
        updates.loader.load(query::fetch_novels(), clone!(updates => move |result| {
            match result {
                Ok(novels) => {
                    updates.novels.set(LoadState::Ready(Rc::new(novel_cards(&novels))));
                }
                Err(err) => {
                    error!("error fetch novel updates: {}", err);
                    snackbar::show(format!("{}", err));
                    updates.novels.set(LoadState::Failed(err.to_string()));
                }
            }
        }));
    }

    fn render_card(card: &NovelCard) -> Dom {
        html!("div", {
            .class("update-card")
            .children(&mut [
                html!("div", {
                    .class("update-card-thumbnail")
                    .children(&mut [
                        html!("img", {
                            .attr("src", &card.thumbnail)
                            .attr("alt", &card.title)
                            .attr("loading", "lazy")
                        })
                    ])
                }),
                html!("div", {
                    .class("update-card-detail")
                    .children(&mut [
                        html!("h2", {
                            .class("line-clamp-2")
                            .text(&card.title)
                        }),
                        html!("p", {
                            .class("line-clamp-3")
                            .text(&card.description)
                        }),
                        html!("div", {
                            .class("update-card-footer")
                            .children(&mut [
                                html!("span", {
                                    .class("date-updated")
                                    .text(&card.updated)
                                }),
                                link!(card.href.clone(), {
                                    .class("read-more")
                                    .text("Read More")
                                })
                            ])
                        })
                    ])
                })
            ])
        })
    }

    pub fn render(updates: Rc<Self>) -> Dom {
        Self::fetch_novels(updates.clone());

        html!("section", {
            .class("container")
            .class("novel-updates")
            .after_removed(clone!(updates => move |_| updates.loader.cancel()))
            .children(&mut [
                html!("h1", {
                    .class("section-title")
                    .text("Latest Novel Updates")
                })
            ])
            .child_signal(updates.novels.signal_ref(clone!(updates => move |state| Some(match state {
                LoadState::Pending => status::render_pending(false),
                LoadState::Failed(message) => status::render_failed(message, false, clone!(updates => move || {
                    Self::fetch_novels(updates.clone());
                })),
                LoadState::Ready(cards) if cards.is_empty() => {
                    status::render_empty("No novels available at the moment.")
                }
                LoadState::Ready(cards) => html!("div", {
                    .class("novel-grid")
                    .children(cards.iter().map(Self::render_card))
                }),
            }))))
        })
    }
}
