use std::rc::Rc;

use dominator::{Dom, html};
use novelread_lib::view::APP_TITLE;

use crate::carousel::Carousel;
use crate::common::Header;
use crate::updates::Updates;
use crate::utils::set_document_title;

pub struct Home {
    header: Rc<Header>,
    carousel: Rc<Carousel>,
    updates: Rc<Updates>,
}

impl Home {
    pub fn new() -> Rc<Self> {
        Rc::new(Home {
            header: Header::new(),
            carousel: Carousel::new(),
            updates: Updates::new(),
        })
    }

    pub fn render(home: Rc<Self>) -> Dom {
        set_document_title(APP_TITLE);

        html!("div", {
            .class("home")
            .children(&mut [
                Header::render(home.header.clone()),
                Carousel::render(home.carousel.clone()),
                Updates::render(home.updates.clone()),
            ])
        })
    }
}
