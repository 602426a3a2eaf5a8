mod header;
mod icons;
mod navbar;
mod topbar;

pub use header::Header;
pub use icons::{InstagramIcon, MetaIcon, UserIcon, XIcon};
pub use navbar::Navbar;
pub use topbar::Topbar;
