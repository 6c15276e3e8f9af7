//! Navigation chrome: report sidebar and top bar.

use dioxus::prelude::*;

use super::theme::ThemeToggle;
use crate::app::auth::use_auth;
use crate::app::Route;

/// Sidebar entries: (id, label, route)
fn nav_items() -> [(&'static str, &'static str, Route); 3] {
    [
        ("combined", "Combined Report", Route::CombinedReport {}),
        ("binom", "Binom Report", Route::BinomReport {}),
        ("google-ads", "Google Ads Report", Route::GoogleAdsReport {}),
    ]
}

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// The currently active page ID (e.g., "combined", "binom")
    pub active: String,
}

/// Permanent sidebar with report links and logout.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let auth = use_auth();
    let mut signing_out = use_signal(|| false);

    let items = nav_items().map(|(id, label, route)| {
        let class = if props.active == id { "active" } else { "" };
        (id, label, route, class.to_string())
    });

    rsx! {
        aside { class: "sidebar",
            nav {
                ul {
                    for (id, label, route, class) in items {
                        li { key: "{id}",
                            Link {
                                class,
                                to: route,
                                "{label}"
                            }
                        }
                    }
                }
                hr {}
                ul {
                    li {
                        Link { to: Route::Docs {}, "Documentation" }
                    }
                    li {
                        button {
                            class: "secondary outline",
                            disabled: signing_out(),
                            onclick: move |_| {
                                signing_out.set(true);
                                auth.logout();
                            },
                            if signing_out() { "Signing out..." } else { "Logout" }
                        }
                    }
                }
            }
        }
    }
}

/// Top bar with the app name, the signed-in user, and the theme toggle.
#[component]
pub fn TopBar() -> Element {
    let auth = use_auth();
    let user_name = auth.session().user().map(|user| user.display_name());

    rsx! {
        header { class: "topbar",
            strong { "Google Binom Reporter" }
            div { style: "display:flex;gap:1rem;align-items:center;",
                if let Some(name) = user_name {
                    span { "{name}" }
                }
                ThemeToggle {}
            }
        }
    }
}
