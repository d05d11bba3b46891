use super::*;
use access::{Identity, Role};

fn session_as(role: Role) -> SessionStore {
    SessionStore::loaded(Some(Identity {
        id: "u1".to_owned(),
        display_name: "Test User".to_owned(),
        email: "user@labsystem.com".to_owned(),
        role,
    }))
}

// =============================================================
// visible_entries
// =============================================================

#[test]
fn admin_sees_every_entry() {
    assert_eq!(visible_entries(&session_as(Role::Admin)), Destination::NAVIGATION.to_vec());
}

#[test]
fn technician_sees_clinical_entries_but_not_admin_ones() {
    assert_eq!(
        visible_entries(&session_as(Role::LabTechnician)),
        vec![
            Destination::Dashboard,
            Destination::Patients,
            Destination::Tests,
            Destination::Reports,
            Destination::Search,
        ]
    );
}

#[test]
fn receptionist_sees_front_desk_entries() {
    assert_eq!(
        visible_entries(&session_as(Role::Receptionist)),
        vec![Destination::Dashboard, Destination::Patients, Destination::Reports]
    );
}

#[test]
fn guest_and_signed_out_see_nothing() {
    assert!(visible_entries(&session_as(Role::Guest)).is_empty());
    assert!(visible_entries(&SessionStore::loaded(None)).is_empty());
}

// =============================================================
// initials
// =============================================================

#[test]
fn initials_take_first_letters_of_two_words() {
    assert_eq!(initials("Admin User"), "AU");
    assert_eq!(initials("lab technician"), "LT");
}

#[test]
fn initials_cap_at_two_letters() {
    assert_eq!(initials("Mary Ann Smith"), "MA");
}

#[test]
fn initials_single_word() {
    assert_eq!(initials("Receptionist"), "R");
}

#[test]
fn initials_fall_back_for_blank_names() {
    assert_eq!(initials(""), "U");
    assert_eq!(initials("   "), "U");
}

// =============================================================
// glyph
// =============================================================

#[test]
fn glyph_is_first_letter_of_label() {
    assert_eq!(glyph(Destination::Dashboard), "D");
    assert_eq!(glyph(Destination::Search), "G");
}

#[test]
fn every_navigation_entry_has_a_glyph() {
    for dest in Destination::NAVIGATION {
        assert_eq!(glyph(dest).chars().count(), 1, "{dest:?}");
    }
}
