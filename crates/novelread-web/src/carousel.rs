use std::rc::Rc;

use dominator::{Dom, clone, events, html, link, svg};
use futures_signals::signal::{Mutable, SignalExt};
use gloo_timers::callback::Interval;
use novelread_lib::{
    carousel::{CarouselState, slides_per_view},
    load_state::LoadState,
    view::{NovelCard, novel_cards},
};

use crate::common::{snackbar, status};
use crate::query;
use crate::utils::{AsyncLoader, config, viewport_width};

const PREV_ICON: &str = "M15 19l-7-7 7-7";
const NEXT_ICON: &str = "M9 5l7 7-7 7";

/// "Featured Novels" slider on the home page.
pub struct Carousel {
    loader: AsyncLoader,
    novels: Mutable<LoadState<Rc<Vec<NovelCard>>>>,
    position: Mutable<CarouselState>,
    autoplay: Mutable<Option<Interval>>,
}

impl Carousel {
    pub fn new() -> Rc<Self> {
        Rc::new(Carousel {
            loader: AsyncLoader::new(),
            novels: Mutable::new(LoadState::Pending),
            position: Mutable::new(CarouselState::new(0, slides_per_view(viewport_width()))),
            autoplay: Mutable::new(None),
        })
    }

    fn fetch_novels(carousel: Rc<Self>) {
        carousel.novels.set(LoadState::Pending);
        carousel.loader.load(query::fetch_novels(), clone!(carousel => move |result| {
            match result {
                Ok(novels) => {
                    let cards = novel_cards(&novels);
                    let per_view = carousel.position.get().per_view();
                    carousel.position.set(CarouselState::new(cards.len(), per_view));
                    carousel.novels.set(LoadState::Ready(Rc::new(cards)));
                }
                Err(err) => {
                    error!("error fetch featured novels: {}", err);
                    snackbar::show(format!("{}", err));
                    carousel.novels.set(LoadState::Failed(err.to_string()));
                }
            }
        }));
    }

    fn start_autoplay(carousel: Rc<Self>) {
        let delay = config().autoplay_delay_ms;
        let interval = Interval::new(delay, clone!(carousel => move || {
            carousel.position.replace_with(|position| position.next());
        }));
        carousel.autoplay.set(Some(interval));
    }

    fn stop_autoplay(&self) {
        if let Some(interval) = self.autoplay.replace(None) {
            interval.cancel();
        }
    }

    fn resize(&self) {
        let per_view = slides_per_view(viewport_width());
        self.position.replace_with(|position| position.with_per_view(per_view));
    }

    fn render_arrow(carousel: Rc<Self>, d: &str, forward: bool) -> Dom {
        html!("button", {
            .class("carousel-arrow")
            .class(if forward { "next" } else { "prev" })
            .attr("aria-label", if forward { "Next slide" } else { "Previous slide" })
            .visible_signal(carousel.position.signal_ref(|position| position.can_slide()))
            .event(clone!(carousel => move |_: events::Click| {
                carousel.position.replace_with(|position| if forward { position.next() } else { position.prev() });
            }))
            .children(&mut [
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
            ])
        })
    }

    fn render_slide(carousel: &Carousel, card: &NovelCard) -> Dom {
        html!("div", {
            .class("carousel-slide")
            .style("flex-shrink", "0")
            .style_signal("flex-basis", carousel.position.signal_ref(|position| position.slide_basis()))
            .children(&mut [
                html!("div", {
                    .class("carousel-slide-overlay")
                }),
                html!("div", {
                    .class("carousel-slide-thumbnail")
                    .children(&mut [
                        html!("img", {
                            .attr("src", &card.thumbnail)
                            .attr("alt", &card.title)
                            .attr("loading", "lazy")
                        })
                    ])
                }),
                html!("div", {
                    .class("carousel-slide-content")
                    .children(&mut [
                        link!(card.href.clone(), {
                            .children(&mut [
                                html!("h3", {
                                    .class("line-clamp-2")
                                    .text(&card.title)
                                })
                            ])
                        }),
                        html!("p", {
                            .class("line-clamp-3")
                            .text(&card.byline)
                        })
                    ])
                })
            ])
        })
    }

    fn render_dots(carousel: Rc<Self>) -> Dom {
        html!("div", {
            .class("carousel-dots")
            .visible_signal(carousel.position.signal_ref(|position| position.can_slide()))
            .children_signal_vec(carousel.position.signal_ref(|position| position.positions())
                .dedupe()
                .map(clone!(carousel => move |positions| {
                    (0..positions).map(|index| Self::render_dot(carousel.clone(), index)).collect::<Vec<_>>()
                }))
                .to_signal_vec())
        })
    }

    fn render_dot(carousel: Rc<Self>, index: usize) -> Dom {
        html!("button", {
            .class("carousel-dot")
            .attr("aria-label", &format!("Go to slide {}", index + 1))
            .class_signal("active", carousel.position.signal_ref(move |position| position.index() == index))
            .event(clone!(carousel => move |_: events::Click| {
                carousel.position.replace_with(|position| position.go_to(index));
            }))
        })
    }

    fn render_track(carousel: Rc<Self>, cards: Rc<Vec<NovelCard>>) -> Dom {
        html!("div", {
            .class("carousel")
            .style("overflow", "hidden")
            .children(&mut [
                Self::render_arrow(carousel.clone(), PREV_ICON, false),
                html!("div", {
                    .class("carousel-track")
                    .style("display", "flex")
                    .style_signal("transform", carousel.position.signal_ref(|position| position.track_offset()))
                    .children(cards.iter().map(|card| Self::render_slide(&carousel, card)))
                }),
                Self::render_arrow(carousel.clone(), NEXT_ICON, true),
                Self::render_dots(carousel.clone()),
            ])
        })
    }

    pub fn render(carousel: Rc<Self>) -> Dom {
        Self::fetch_novels(carousel.clone());

        html!("section", {
            .class("container")
            .class("novel-carousel")
            .after_inserted(clone!(carousel => move |_| {
                Self::start_autoplay(carousel.clone());
            }))
            .after_removed(clone!(carousel => move |_| {
                carousel.stop_autoplay();
                carousel.loader.cancel();
            }))
            .global_event(clone!(carousel => move |_: events::Resize| {
                carousel.resize();
            }))
            .children(&mut [
                html!("h2", {
                    .class("section-title")
                    .text("Featured Novels")
                })
            ])
            .child_signal(carousel.novels.signal_ref(clone!(carousel => move |state| Some(match state {
                LoadState::Pending => status::render_pending(false),
                LoadState::Failed(message) => status::render_failed(message, false, clone!(carousel => move || {
                    Self::fetch_novels(carousel.clone());
                })),
                LoadState::Ready(cards) if cards.is_empty() => {
                    status::render_empty("No featured novels yet.")
                }
                LoadState::Ready(cards) => Self::render_track(carousel.clone(), cards.clone()),
            }))))
        })
    }
}
