//! Stage/action legality tests.

use bjcore::{
    Action, ParseActionError, ParseStageError, Stage, is_action_allowed,
    is_action_allowed_by_name,
};

fn allowed_in(stage: Stage) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|&action| is_action_allowed(action, stage))
        .collect()
}

#[test]
fn restore_is_always_allowed() {
    for stage in Stage::ALL {
        assert!(is_action_allowed(Action::Restore, stage), "{stage}");
    }
    assert!(is_action_allowed_by_name("RESTORE", "anything"));
    assert!(is_action_allowed_by_name("RESTORE", ""));
}

#[test]
fn per_stage_allow_lists() {
    assert_eq!(allowed_in(Stage::Ready), [Action::Restore, Action::Deal]);
    assert_eq!(
        allowed_in(Stage::PlayerTurnRight),
        [
            Action::Restore,
            Action::Stand,
            Action::Hit,
            Action::Double,
            Action::Split,
            Action::Insurance,
            Action::Surrender,
        ]
    );
    assert_eq!(
        allowed_in(Stage::PlayerTurnLeft),
        [Action::Restore, Action::Stand, Action::Hit, Action::Double]
    );
    assert_eq!(
        allowed_in(Stage::Showdown),
        [Action::Restore, Action::Stand, Action::Showdown]
    );
    assert_eq!(
        allowed_in(Stage::DealerTurn),
        [Action::Restore, Action::DealerHit]
    );
    assert_eq!(allowed_in(Stage::Done), [Action::Restore]);
    assert_eq!(allowed_in(Stage::Invalid), [Action::Restore]);
}

#[test]
fn split_hand_cannot_split_insure_or_surrender() {
    assert!(!is_action_allowed_by_name("SPLIT", "STAGE_PLAYER_TURN_LEFT"));
    assert!(!is_action_allowed_by_name("INSURANCE", "STAGE_PLAYER_TURN_LEFT"));
    assert!(!is_action_allowed_by_name("SURRENDER", "STAGE_PLAYER_TURN_LEFT"));
    assert!(is_action_allowed_by_name("SPLIT", "STAGE_PLAYER_TURN_RIGHT"));
}

#[test]
fn names_follow_the_shared_vocabulary() {
    assert!(is_action_allowed_by_name("DEAL", "STAGE_READY"));
    assert!(is_action_allowed_by_name("DEALER_HIT", "STAGE_DEALER_TURN"));
    assert!(is_action_allowed_by_name("SHOWDOWN", "STAGE_SHOWDOWN"));
    assert!(is_action_allowed_by_name("SHOWDOWN", "SHOWDOWN"));
    assert!(!is_action_allowed_by_name("HIT", "STAGE_UNKNOWN"));
    assert!(!is_action_allowed_by_name("FOLD", "STAGE_READY"));
    assert!(!is_action_allowed_by_name("deal", "STAGE_READY"));
}

#[test]
fn identifiers_parse_back() {
    for action in Action::ALL {
        assert_eq!(action.to_string().parse::<Action>(), Ok(action));
    }
    for stage in Stage::ALL {
        assert_eq!(stage.as_str().parse::<Stage>(), Ok(stage));
    }
    assert_eq!("SHOWDOWN".parse::<Stage>(), Ok(Stage::Showdown));
    assert_eq!("STAGE_DEALER_TURN".parse::<Stage>(), Ok(Stage::DealerTurn));
}

#[test]
fn unknown_identifiers_fail_to_parse() {
    assert_eq!("FOLD".parse::<Action>(), Err(ParseActionError));
    assert_eq!("STAGE_BETTING".parse::<Stage>(), Err(ParseStageError));
    assert_eq!(ParseActionError.to_string(), "unknown action");
    assert_eq!(ParseStageError.to_string(), "unknown stage");
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_the_shared_vocabulary() {
    assert_eq!(
        serde_json::to_string(&Stage::PlayerTurnLeft).unwrap(),
        "\"STAGE_PLAYER_TURN_LEFT\""
    );
    assert_eq!(
        serde_json::to_string(&Action::DealerHit).unwrap(),
        "\"DEALER_HIT\""
    );
    assert_eq!(
        serde_json::from_str::<Stage>("\"SHOWDOWN\"").unwrap(),
        Stage::Showdown
    );
}
