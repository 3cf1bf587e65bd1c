use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{CreateView, DeleteView, ReadView, UpdateView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", CreateView)] Create {},
        #[route("/read", ReadView)] Read {},
        #[route("/update", UpdateView)] Update {},
        #[route("/delete", DeleteView)] Delete {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        nav { class: "sidebar",
            h1 { "{ctx.app_name()}" }
            p { class: "sidebar-caption", "Menu" }
            ul {
                li { Link { to: Route::Create {}, "Create" } }
                li { Link { to: Route::Read {}, "Read" } }
                li { Link { to: Route::Update {}, "Update" } }
                li { Link { to: Route::Delete {}, "Delete" } }
            }
        }
    }
}
