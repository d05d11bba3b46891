use super::*;

#[test]
fn gate_redirects_replace_history_entry() {
    assert!(redirect_options().replace);
}

#[test]
fn gate_redirects_keep_default_scroll_behavior() {
    let defaults = NavigateOptions::default();
    let opts = redirect_options();
    assert_eq!(opts.scroll, defaults.scroll);
    assert_eq!(opts.resolve, defaults.resolve);
}

// =============================================================
// sign_in / sign_out (no browser timers without `hydrate`)
// =============================================================

#[cfg(not(feature = "hydrate"))]
mod session_actions {
    use super::*;
    use crate::state::notice::Tone;

    fn contexts() -> (Owner, RwSignal<SessionStore>, RwSignal<NoticeState>) {
        let owner = Owner::new();
        owner.set();
        let session = RwSignal::new(SessionStore::loaded(None));
        let notices = RwSignal::new(NoticeState::default());
        (owner, session, notices)
    }

    #[tokio::test]
    async fn bad_credentials_raise_error_notice_and_stay_signed_out() {
        let (_owner, session, notices) = contexts();
        let result =
            sign_in(session, notices, "admin@labsystem.com".to_owned(), "wrong".to_owned()).await;

        assert!(matches!(result, Err(AccessError::InvalidCredentials)));
        assert!(!session.with_untracked(SessionStore::is_authenticated));
        let notice = notices.with_untracked(|state| state.current.clone()).expect("notice shown");
        assert_eq!(notice.title, "Login failed");
        assert_eq!(notice.body, "Invalid credentials");
        assert_eq!(notice.tone, Tone::Error);
    }

    #[tokio::test]
    async fn good_credentials_sign_in_and_welcome() {
        let (_owner, session, notices) = contexts();
        let identity = sign_in(session, notices, "tech@labsystem.com".to_owned(), "tech123".to_owned())
            .await
            .expect("seeded credentials");

        assert_eq!(identity.role, access::Role::LabTechnician);
        assert!(session.with_untracked(SessionStore::is_authenticated));
        let notice = notices.with_untracked(|state| state.current.clone()).expect("notice shown");
        assert_eq!(notice.title, "Login successful");
        assert_eq!(notice.tone, Tone::Info);
    }

    #[tokio::test]
    async fn sign_out_clears_session_and_announces_it() {
        let (_owner, session, notices) = contexts();
        sign_in(session, notices, "admin@labsystem.com".to_owned(), "admin123".to_owned())
            .await
            .expect("seeded credentials");

        sign_out(session, notices);

        assert!(!session.with_untracked(SessionStore::is_authenticated));
        assert!(!session.with_untracked(SessionStore::is_loading));
        let notice = notices.with_untracked(|state| state.current.clone()).expect("notice shown");
        assert_eq!(notice.title, "Logged out");
    }
}
