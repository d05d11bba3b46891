//! Dashboard chrome: collapsible sidebar, user badge, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar only lists destinations the current role may open, using the
//! same requirement the route guard enforces, so hidden links and blocked
//! routes never disagree.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use access::{Destination, Role, SessionStore};
use leptos::prelude::*;

use crate::state::notice::NoticeState;
use crate::util::auth::sign_out;

/// Sidebar destinations the session may open, in display order.
pub fn visible_entries(store: &SessionStore) -> Vec<Destination> {
    Destination::NAVIGATION
        .into_iter()
        .filter(|dest| store.has_permission(dest.requirement().roles()))
        .collect()
}

/// Up to two uppercase initials from a display name; `"U"` when there are none.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    if letters.is_empty() { "U".to_owned() } else { letters }
}

/// Single-letter sidebar glyph for a collapsed entry.
pub fn glyph(dest: Destination) -> String {
    dest.label().chars().next().map(String::from).unwrap_or_default()
}

/// Shell around every protected screen.
#[component]
pub fn DashboardLayout(active: Destination, children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let collapsed = RwSignal::new(false);

    let display_name = move || {
        session.with(|store| store.identity().map(|identity| identity.display_name.clone()).unwrap_or_default())
    };
    let role_label = move || session.with(|store| store.role().map(Role::label).unwrap_or_default());

    view! {
        <div class="layout">
            <aside class=move || if collapsed.get() { "sidebar sidebar--collapsed" } else { "sidebar" }>
                <div class="sidebar__header">
                    <Show when=move || !collapsed.get()>
                        <span class="sidebar__title">"Lab Manager"</span>
                    </Show>
                    <button
                        class="btn sidebar__toggle"
                        title="Toggle sidebar"
                        on:click=move |_| collapsed.update(|c| *c = !*c)
                    >
                        {move || if collapsed.get() { "☰" } else { "✕" }}
                    </button>
                </div>

                <nav class="sidebar__nav">
                    {move || {
                        session
                            .with(visible_entries)
                            .into_iter()
                            .map(|dest| {
                                let class = if dest == active { "nav-item nav-item--active" } else { "nav-item" };
                                view! {
                                    <a href=dest.path() class=class title=dest.label()>
                                        <span class="nav-item__glyph">{glyph(dest)}</span>
                                        <Show when=move || !collapsed.get()>
                                            <span class="nav-item__label">{dest.label()}</span>
                                        </Show>
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </nav>

                <div class="sidebar__footer">
                    <span class="avatar">{move || initials(&display_name())}</span>
                    <Show when=move || !collapsed.get()>
                        <div class="sidebar__user">
                            <span class="sidebar__user-name">{display_name}</span>
                            <span class="sidebar__user-role">{role_label}</span>
                        </div>
                    </Show>
                    <button class="btn sidebar__logout" title="Logout" on:click=move |_| sign_out(session, notices)>
                        "Logout"
                    </button>
                </div>
            </aside>

            <main class="layout__content">{children()}</main>
        </div>
    }
}
