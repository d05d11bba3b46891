//! Notice banner for sign-in and sign-out feedback.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// Renders the latest notice with a dismiss button.
#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-region" aria-live="polite">
            {move || {
                notices
                    .get()
                    .current
                    .map(|notice| {
                        view! {
                            <div class=notice.tone.class() role="status">
                                <strong class="notice__title">{notice.title}</strong>
                                <p class="notice__body">{notice.body}</p>
                                <button
                                    class="notice__close"
                                    title="Dismiss"
                                    on:click=move |_| notices.update(NoticeState::dismiss)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
