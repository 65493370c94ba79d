mod header;
pub use header::Header;

pub mod route;
pub use route::Route;

mod cover;
pub use cover::Cover;

mod parallax;
pub use parallax::ScrollOffset;

pub mod snackbar;

pub mod status;
