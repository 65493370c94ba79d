use std::rc::Rc;

use dominator::{Dom, clone, events, html, link};
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::SignalVecExt;
use novelread_lib::{
    format::RichText,
    load_state::LoadState,
    models::Chapter,
    sort::{ChapterFilter, sorted_chapters},
    view::{ChapterRow, NovelCard, NovelPage, novel_cards},
};

use crate::common::{Cover, Header, ScrollOffset, snackbar, status};
use crate::query;
use crate::utils::{AsyncLoader, config, set_document_title};

/// Novel detail page. The novel, its related novels and its chapters load
/// through three independent slots, so each section can fail on its own.
pub struct NovelDetail {
    slug: String,
    header: Rc<Header>,
    scroll: Rc<ScrollOffset>,
    novel_loader: AsyncLoader,
    related_loader: AsyncLoader,
    chapters_loader: AsyncLoader,
    novel: Mutable<LoadState<Rc<NovelPage>>>,
    related: Mutable<LoadState<Rc<Vec<NovelCard>>>>,
    chapters: Mutable<LoadState<Rc<Vec<Chapter>>>>,
    filter: Mutable<ChapterFilter>,
    show_full_synopsis: Mutable<bool>,
}

impl NovelDetail {
    pub fn new(slug: String) -> Rc<Self> {
        Rc::new(NovelDetail {
            slug,
            header: Header::new(),
            scroll: ScrollOffset::new(),
            novel_loader: AsyncLoader::new(),
            related_loader: AsyncLoader::new(),
            chapters_loader: AsyncLoader::new(),
            novel: Mutable::new(LoadState::Pending),
            related: Mutable::new(LoadState::Pending),
            chapters: Mutable::new(LoadState::Pending),
            filter: Mutable::new(ChapterFilter::default()),
            show_full_synopsis: Mutable::new(false),
        })
    }

    fn fetch_novel(detail: Rc<Self>) {
        if detail.slug.is_empty() {
            return;
        }

        detail.novel.set(LoadState::Pending);
        let slug = detail.slug.clone();
        detail.novel_loader.load(async move { query::fetch_novel(&slug).await }, clone!(detail => move |result| {
            match result {
                Ok(novel) => {
                    let page = NovelPage::from_novel(&novel, config().synopsis_limit);
                    set_document_title(&page.document_title);
                    detail.show_full_synopsis.set_neq(false);
                    detail.novel.set(LoadState::Ready(Rc::new(page)));
                }
                Err(err) => {
                    error!("error fetch novel {}: {}", detail.slug, err);
                    snackbar::show(format!("{}", err));
                    detail.novel.set(LoadState::Failed(err.to_string()));
                }
            }
        }));
    }

    fn fetch_related(detail: Rc<Self>) {
        if detail.slug.is_empty() {
            return;
        }

        detail.related.set(LoadState::Pending);
        let slug = detail.slug.clone();
        detail.related_loader.load(async move { query::fetch_related_novels(&slug).await }, clone!(detail => move |result| {
            if let Err(err) = &result {
                error!("error fetch related novels of {}: {}", detail.slug, err);
            }
            detail.related.set(LoadState::from_result(result).map(|novels| Rc::new(novel_cards(&novels))));
        }));
    }

    fn fetch_chapters(detail: Rc<Self>) {
        if detail.slug.is_empty() {
            return;
        }

        detail.chapters.set(LoadState::Pending);
        let slug = detail.slug.clone();
        detail.chapters_loader.load(async move { query::fetch_chapters(&slug).await }, clone!(detail => move |result| {
            if let Err(err) = &result {
                error!("error fetch chapters of {}: {}", detail.slug, err);
            }
            detail.chapters.set(LoadState::from_result(result).map(Rc::new));
        }));
    }

    fn cancel_all(&self) {
        self.novel_loader.cancel();
        self.related_loader.cancel();
        self.chapters_loader.cancel();
    }

    fn render_hero(detail: &NovelDetail, page: &NovelPage) -> Dom {
        html!("section", {
            .class("hero")
            .style_signal("transform", detail.scroll.transform_signal(config().parallax_rate))
            .children(&mut [
                html!("img", {
                    .class("hero-image")
                    .attr("src", &page.thumbnail)
                    .attr("alt", &page.title)
                }),
                html!("div", {
                    .class("hero-overlay")
                })
            ])
        })
    }

    fn render_synopsis(detail: Rc<Self>, page: Rc<NovelPage>) -> Dom {
        html!("div", {
            .class("synopsis")
            .child_signal(detail.show_full_synopsis.signal().map(clone!(page => move |expanded| {
                Some(match page.synopsis.render(expanded) {
                    RichText::Plain(text) => html!("p", {
                        .text(&text)
                    }),
                    RichText::Html(markup) => html!("div", {
                        .class("rich-text")
                        .prop("innerHTML", markup.as_str())
                    }),
                })
            })))
            .apply_if(page.synopsis.is_truncated(), |dom| {
                dom.child(html!("button", {
                    .class("synopsis-toggle")
                    .text_signal(detail.show_full_synopsis.signal().map(|expanded| if expanded { "Show Less" } else { "Show More" }))
                    .event(clone!(detail => move |_: events::Click| {
                        detail.show_full_synopsis.replace_with(|expanded| !*expanded);
                    }))
                }))
            })
        })
    }

    fn render_filter_button(detail: Rc<Self>, filter: ChapterFilter) -> Dom {
        html!("button", {
            .class("filter-button")
            .class_signal("active", detail.filter.signal().map(move |current| current == filter))
            .text(filter.label())
            .event(clone!(detail => move |_: events::Click| {
                detail.filter.set_neq(filter);
            }))
        })
    }

    fn render_chapter_list(detail: Rc<Self>, chapters: Rc<Vec<Chapter>>) -> Dom {
        let rows = detail
            .filter
            .signal()
            .map(move |filter| {
                sorted_chapters(&chapters, filter)
                    .iter()
                    .map(ChapterRow::from_chapter)
                    .collect::<Vec<_>>()
            })
            .to_signal_vec();

        html!("ul", {
            .class("chapter-list")
            .children_signal_vec(rows.map(|row| html!("li", {
                .class("chapter-list-item")
                .children(&mut [
                    link!(row.href.clone(), {
                        .children(&mut [
                            html!("span", {
                                .class("chapter-number")
                                .text(&row.label)
                            }),
                            html!("span", {
                                .class("chapter-title")
                                .text(&row.title)
                            }),
                            html!("span", {
                                .class("date-updated")
                                .text(&row.updated)
                            })
                        ])
                    })
                ])
            })))
        })
    }

    fn render_chapters(detail: Rc<Self>) -> Dom {
        html!("section", {
            .class("chapters")
            .children(&mut [
                html!("div", {
                    .class("section-header")
                    .children(&mut [
                        html!("h2", {
                            .text("Chapters")
                        }),
                        html!("div", {
                            .class("chapter-filter")
                            .children(&mut [
                                Self::render_filter_button(detail.clone(), ChapterFilter::Latest),
                                Self::render_filter_button(detail.clone(), ChapterFilter::Oldest),
                            ])
                        })
                    ])
                })
            ])
            .child_signal(detail.chapters.signal_ref(clone!(detail => move |state| Some(match state {
                LoadState::Pending => status::render_pending(false),
                LoadState::Failed(message) => status::render_failed(message, false, clone!(detail => move || {
                    Self::fetch_chapters(detail.clone());
                })),
                LoadState::Ready(chapters) if chapters.is_empty() => status::render_empty("No chapters yet."),
                LoadState::Ready(chapters) => Self::render_chapter_list(detail.clone(), chapters.clone()),
            }))))
        })
    }

    fn render_related(detail: Rc<Self>) -> Dom {
        html!("section", {
            .class("related-novels")
            .children(&mut [
                html!("h2", {
                    .text("Related Novels")
                })
            ])
            .child_signal(detail.related.signal_ref(clone!(detail => move |state| Some(match state {
                LoadState::Pending => status::render_pending(false),
                LoadState::Failed(message) => status::render_failed(message, false, clone!(detail => move || {
                    Self::fetch_related(detail.clone());
                })),
                LoadState::Ready(cards) if cards.is_empty() => status::render_empty("No related novels."),
                LoadState::Ready(cards) => html!("div", {
                    .class("cover-grid")
                    .children(cards.iter().map(Cover::render))
                }),
            }))))
        })
    }

    fn render_page(detail: Rc<Self>, page: Rc<NovelPage>) -> Dom {
        html!("div", {
            .children(&mut [
                Header::render(detail.header.clone()),
                Self::render_hero(&detail, &page),
                html!("div", {
                    .class("container")
                    .class("novel-content")
                    .children(&mut [
                        html!("div", {
                            .class("novel-info")
                            .children(&mut [
                                html!("h1", {
                                    .class("novel-title")
                                    .text(&page.title)
                                }),
                                html!("p", {
                                    .class("byline")
                                    .text(&page.byline)
                                }),
                                html!("span", {
                                    .class("date-updated")
                                    .text(&page.updated)
                                }),
                                Self::render_synopsis(detail.clone(), page.clone()),
                            ])
                        }),
                        Self::render_chapters(detail.clone()),
                        Self::render_related(detail.clone()),
                    ])
                })
            ])
        })
    }

    pub fn render(detail: Rc<Self>) -> Dom {
        Self::fetch_novel(detail.clone());
        Self::fetch_related(detail.clone());
        Self::fetch_chapters(detail.clone());

        html!("div", {
            .class("novel-detail")
            .after_removed(clone!(detail => move |_| detail.cancel_all()))
            .global_event(clone!(detail => move |_: events::Scroll| {
                ScrollOffset::schedule(&detail.scroll);
            }))
            .child_signal(detail.novel.signal_ref(clone!(detail => move |state| Some(match state {
                LoadState::Pending => status::render_pending(true),
                LoadState::Failed(message) => html!("div", {
                    .children(&mut [
                        Header::render(detail.header.clone()),
                        status::render_failed(message, true, clone!(detail => move || {
                            Self::fetch_novel(detail.clone());
                        })),
                    ])
                }),
                LoadState::Ready(page) => Self::render_page(detail.clone(), page.clone()),
            }))))
        })
    }
}
