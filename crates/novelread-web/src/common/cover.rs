use dominator::{Dom, html, link};
use novelread_lib::view::NovelCard;

/// Compact cover tile linking to a novel, used for related novels.
pub struct Cover;

impl Cover {
    pub fn render(card: &NovelCard) -> Dom {
        link!(card.href.clone(), {
            .class("novel-cover")
            .children(&mut [
                html!("img", {
                    .attr("src", &card.thumbnail)
                    .attr("alt", &card.title)
                    .attr("loading", "lazy")
                }),
                html!("div", {
                    .class("title")
                    .children(&mut [
                        html!("span", {
                            .class("line-clamp-2")
                            .text(&card.title)
                        })
                    ])
                })
            ])
        })
    }
}
