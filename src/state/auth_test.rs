use super::*;

#[test]
fn default_state_is_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn display_name_uses_the_stored_session() {
    let state = AuthState {
        user: Some(SessionUser {
            name: "Asha Verma".to_owned(),
            email: "asha@college.edu".to_owned(),
        }),
        loading: false,
    };
    assert_eq!(state.display_name(), "Asha Verma");
}

#[test]
fn display_name_falls_back_when_absent_or_blank() {
    assert_eq!(AuthState::default().display_name(), "Rohit Kumar");
    let blank = AuthState {
        user: Some(SessionUser {
            name: "   ".to_owned(),
            email: "x@college.edu".to_owned(),
        }),
        loading: false,
    };
    assert_eq!(blank.display_name(), "Rohit Kumar");
}
