use urlencoding::{decode, encode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Novel(String),
    Chapter(String),
    Login,
    NotFound,
}

impl Route {
    /// Map a url pathname to a route. Empty segments are ignored, so
    /// `/pages/novels/slug/` and `//pages/novels/slug` both resolve.
    pub fn from_pathname(pathname: &str) -> Self {
        let mut paths = pathname.split('/').collect::<Vec<_>>();
        paths.retain(|path| !path.is_empty());

        match paths.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["pages", "novels", slug] => match decode(slug) {
                Ok(slug) => Route::Novel(slug.into_owned()),
                Err(_) => Route::NotFound,
            },
            ["pages", "chapter", slug] => match decode(slug) {
                Ok(slug) => Route::Chapter(slug.into_owned()),
                Err(_) => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    pub fn url(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Novel(slug) => format!("/pages/novels/{}", encode(slug)),
            Route::Chapter(slug) => format!("/pages/chapter/{}", encode(slug)),
            Route::Login => "/login".to_string(),
            Route::NotFound => "/notfound".to_string(),
        }
    }
}
