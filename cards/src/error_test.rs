use super::*;

#[test]
fn from_status_keeps_response_text() {
    let err = ApiError::from_status(409, "Card id already exists\n");
    assert_eq!(err.to_string(), "Card id already exists");
    assert_eq!(err.status(), Some(409));
}

#[test]
fn from_status_falls_back_to_generic_message() {
    let err = ApiError::from_status(500, "   ");
    assert_eq!(err.to_string(), "Request failed with status 500");
}

#[test]
fn conflict_and_not_found_are_detected() {
    assert!(ApiError::from_status(409, "").is_conflict());
    assert!(!ApiError::from_status(409, "").is_not_found());
    assert!(ApiError::from_status(404, "").is_not_found());
    assert!(!ApiError::Transport("offline".to_owned()).is_conflict());
}

#[test]
fn transport_and_decode_have_no_status() {
    assert_eq!(ApiError::Transport("x".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("x".to_owned()).status(), None);
}

#[test]
fn serde_errors_become_decode_errors() {
    let Err(err) = serde_json::from_str::<u32>("nope") else {
        panic!("expected parse failure");
    };
    assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
}
