use super::*;
use access::Role;

fn identity() -> Identity {
    Identity {
        id: "1".to_owned(),
        display_name: "Admin User".to_owned(),
        email: "admin@labsystem.com".to_owned(),
        role: Role::Admin,
    }
}

// =============================================================
// Notice constructors
// =============================================================

#[test]
fn signed_in_notice_greets_by_display_name() {
    let notice = Notice::signed_in(&identity());
    assert_eq!(notice.title, "Login successful");
    assert_eq!(notice.body, "Welcome back, Admin User!");
    assert_eq!(notice.tone, Tone::Info);
}

#[test]
fn sign_in_failed_notice_carries_error_text() {
    let notice = Notice::sign_in_failed(&AccessError::InvalidCredentials);
    assert_eq!(notice.title, "Login failed");
    assert_eq!(notice.body, "Invalid credentials");
    assert_eq!(notice.tone, Tone::Error);
}

#[test]
fn signed_out_notice_text() {
    let notice = Notice::signed_out();
    assert_eq!(notice.title, "Logged out");
    assert_eq!(notice.body, "You have been logged out successfully");
}

// =============================================================
// NoticeState
// =============================================================

#[test]
fn push_replaces_current_and_bumps_seq() {
    let mut state = NoticeState::default();
    let first = state.push(Notice::signed_out());
    let second = state.push(Notice::signed_in(&identity()));
    assert!(second > first);
    assert_eq!(state.current.map(|n| n.title), Some("Login successful".to_owned()));
}

#[test]
fn expire_ignores_stale_sequence() {
    let mut state = NoticeState::default();
    let stale = state.push(Notice::signed_out());
    state.push(Notice::signed_in(&identity()));
    state.expire(stale);
    assert!(state.current.is_some());
}

#[test]
fn expire_hides_matching_sequence() {
    let mut state = NoticeState::default();
    let seq = state.push(Notice::signed_out());
    state.expire(seq);
    assert!(state.current.is_none());
}

#[test]
fn dismiss_hides_current() {
    let mut state = NoticeState::default();
    state.push(Notice::signed_out());
    state.dismiss();
    assert!(state.current.is_none());
}

#[test]
fn tone_classes_differ() {
    assert_ne!(Tone::Info.class(), Tone::Error.class());
}
