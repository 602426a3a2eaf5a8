use dioxus::prelude::*;

use super::{Navbar, Topbar};

/// Page header: the promotional topbar directly above the navigation bar.
#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            Topbar {}
            Navbar {}
        }
    }
}
