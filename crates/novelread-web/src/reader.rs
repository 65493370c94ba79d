use std::rc::Rc;

use dominator::{Dom, clone, events, html, link};
use futures_signals::signal::{Mutable, SignalExt};
use novelread_lib::{
    load_state::LoadState,
    view::{ChapterView, NavLink, NovelAbout},
};

use crate::common::{Header, ScrollOffset, snackbar, status};
use crate::query;
use crate::utils::{AsyncLoader, config, set_document_title};

pub struct Reader {
    slug: String,
    header: Rc<Header>,
    scroll: Rc<ScrollOffset>,
    loader: AsyncLoader,
    chapter: Mutable<LoadState<Rc<ChapterView>>>,
}

impl Reader {
    pub fn new(slug: String) -> Rc<Self> {
        Rc::new(Reader {
            slug,
            header: Header::new(),
            scroll: ScrollOffset::new(),
            loader: AsyncLoader::new(),
            chapter: Mutable::new(LoadState::Pending),
        })
    }

    fn fetch_chapter(reader: Rc<Self>) {
        if reader.slug.is_empty() {
            return;
        }

        reader.chapter.set(LoadState::Pending);
        let slug = reader.slug.clone();
        reader.loader.load(async move { query::fetch_chapter(&slug).await }, clone!(reader => move |result| {
            match result {
                Ok(res) => {
                    let view = ChapterView::from_response(&res);
                    set_document_title(&view.document_title);
                    reader.chapter.set(LoadState::Ready(Rc::new(view)));
                }
                Err(err) => {
                    error!("error fetch chapter {}: {}", reader.slug, err);
                    snackbar::show(format!("{}", err));
                    reader.chapter.set(LoadState::Failed(err.to_string()));
                }
            }
        }));
    }

    fn render_hero(reader: &Reader, view: &ChapterView) -> Dom {
        html!("section", {
            .class("hero")
            .style_signal("transform", reader.scroll.transform_signal(config().parallax_rate))
            .children(&mut [
                html!("img", {
                    .class("hero-image")
                    .attr("src", &view.hero_image)
                    .attr("alt", &view.title)
                }),
                html!("div", {
                    .class("hero-overlay")
                }),
                html!("div", {
                    .class("hero-content")
                    .children(&mut [
                        html!("span", {
                            .class("chapter-heading")
                            .text(&view.heading)
                        }),
                        html!("h1", {
                            .class("chapter-title")
                            .text(&view.title)
                        }),
                        html!("span", {
                            .class("date-updated")
                            .text(&view.updated)
                        })
                    ])
                })
            ])
        })
    }

    fn render_about(about: &NovelAbout) -> Dom {
        html!("aside", {
            .class("novel-about")
            .children(&mut [
                html!("h2", {
                    .text("About the Novel")
                }),
                link!(about.href.clone(), {
                    .class("novel-about-link")
                    .children(&mut [
                        html!("img", {
                            .attr("src", &about.thumbnail)
                            .attr("alt", &about.title)
                            .attr("loading", "lazy")
                        }),
                        html!("h3", {
                            .text(&about.title)
                        })
                    ])
                }),
                html!("p", {
                    .class("byline")
                    .text(&about.byline)
                }),
                html!("p", {
                    .class("line-clamp-3")
                    .text(&about.description)
                }),
                html!("span", {
                    .class("date-updated")
                    .text(&about.updated)
                })
            ])
        })
    }

    fn render_nav_link(nav: &NavLink, class: &str) -> Dom {
        match nav {
            NavLink::Link { label, href } => link!(href.clone(), {
                .class("chapter-nav-link")
                .class(class)
                .text(*label)
            }),
            NavLink::Placeholder(text) => html!("span", {
                .class("chapter-nav-placeholder")
                .class(class)
                .text(*text)
            }),
        }
    }

    fn render_chapter(reader: Rc<Self>, view: Rc<ChapterView>) -> Dom {
        html!("div", {
            .children(&mut [
                Header::render(reader.header.clone()),
                Self::render_hero(&reader, &view),
                html!("div", {
                    .class("container")
                    .class("reader-content")
                    .children(view.novel.iter().map(Self::render_about))
                    .children(&mut [
                        html!("article", {
                            .class("chapter-body")
                            .class("rich-text")
                            .prop("innerHTML", view.body_html.as_str())
                        }),
                        html!("nav", {
                            .class("chapter-nav")
                            .children(&mut [
                                Self::render_nav_link(&view.prev, "prev"),
                                Self::render_nav_link(&view.next, "next"),
                            ])
                        })
                    ])
                })
            ])
        })
    }

    pub fn render(reader: Rc<Self>) -> Dom {
        Self::fetch_chapter(reader.clone());

        html!("div", {
            .class("reader")
            .after_removed(clone!(reader => move |_| reader.loader.cancel()))
            .global_event(clone!(reader => move |_: events::Scroll| {
                ScrollOffset::schedule(&reader.scroll);
            }))
            .child_signal(reader.chapter.signal_ref(clone!(reader => move |state| Some(match state {
                LoadState::Pending => status::render_pending(true),
                LoadState::Failed(message) => html!("div", {
                    .children(&mut [
                        Header::render(reader.header.clone()),
                        status::render_failed(message, true, clone!(reader => move || {
                            Self::fetch_chapter(reader.clone());
                        })),
                    ])
                }),
                LoadState::Ready(view) => Self::render_chapter(reader.clone(), view.clone()),
            }))))
        })
    }
}
