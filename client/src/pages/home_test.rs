use super::*;

#[test]
fn validate_recipient_trims() {
    assert_eq!(validate_recipient("  Jo "), Ok("Jo".to_owned()));
}

#[test]
fn validate_recipient_rejects_blank() {
    assert_eq!(validate_recipient("   "), Err("Who is this card for?"));
}

#[test]
fn conflict_keeps_user_on_form() {
    let result = Err(ApiError::from_status(409, "taken"));
    assert_eq!(create_outcome(&result), CreateOutcome::Taken);
}

#[test]
fn other_failures_still_open_card() {
    assert_eq!(create_outcome(&Err(ApiError::from_status(500, ""))), CreateOutcome::Open);
    assert_eq!(create_outcome(&Err(ApiError::Transport("offline".to_owned()))), CreateOutcome::Open);
    assert_eq!(create_outcome(&Ok(Card::new("abc", None, None))), CreateOutcome::Open);
}
