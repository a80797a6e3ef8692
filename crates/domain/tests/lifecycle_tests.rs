use chrono::{TimeZone, Utc};

use domain::model::UpdateTournamentData;
use domain::{DomainError, LifecycleState, Tournament, TournamentAction};

fn tournament(state: LifecycleState) -> Tournament {
    Tournament {
        id: 7,
        name: "Apertura 2026".into(),
        description: Some("Torneo de apertura".into()),
        start_date: Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2026, 3, 15, 18, 0, 0).unwrap(),
        state,
        created_at: None,
        updated_at: None,
        competitions: vec![],
    }
}

#[test]
fn only_two_transitions_exist() {
    use LifecycleState::*;

    for from in [Draft, Published, Finalized] {
        for to in [Draft, Published, Finalized] {
            let expected = matches!((from, to), (Draft, Published) | (Published, Finalized));
            assert_eq!(
                from.can_transition(to),
                expected,
                "transition {from} -> {to}"
            );
        }
    }
}

#[test]
fn publish_moves_draft_to_published() {
    let mut t = tournament(LifecycleState::Draft);
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    t.publish(now).unwrap();

    assert_eq!(t.state, LifecycleState::Published);
    assert_eq!(t.updated_at, Some(now));
}

#[test]
fn publish_rejects_non_draft() {
    let now = Utc::now();
    for state in [LifecycleState::Published, LifecycleState::Finalized] {
        let mut t = tournament(state);
        let err = t.publish(now).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidState {
                action: TournamentAction::Publish,
                ..
            }
        ));
        assert_eq!(t.state, state, "rejection must not mutate");
    }
}

#[test]
fn finalize_requires_published() {
    let now = Utc::now();

    let mut t = tournament(LifecycleState::Published);
    t.finalize(now).unwrap();
    assert_eq!(t.state, LifecycleState::Finalized);

    let mut draft = tournament(LifecycleState::Draft);
    assert!(draft.finalize(now).is_err());

    // Finalized is terminal.
    let mut done = tournament(LifecycleState::Finalized);
    assert!(done.finalize(now).is_err());
    assert!(done.publish(now).is_err());
}

#[test]
fn delete_allowed_only_while_draft() {
    assert!(tournament(LifecycleState::Draft).authorize_delete().is_ok());

    for state in [LifecycleState::Published, LifecycleState::Finalized] {
        let err = tournament(state).authorize_delete().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidState {
                action: TournamentAction::Delete,
                ..
            }
        ));
    }
}

#[test]
fn edit_on_published_is_rejected_and_leaves_tournament_unchanged() {
    let mut t = tournament(LifecycleState::Published);
    let before = t.clone();

    let err = t
        .apply_update(
            UpdateTournamentData {
                name: Some("Renombrado".into()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::InvalidState {
            action: TournamentAction::Edit,
            ..
        }
    ));
    assert_eq!(t, before);
    assert!(t.is_read_only());
}

#[test]
fn edit_on_draft_applies_patch() {
    let mut t = tournament(LifecycleState::Draft);
    let now = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();
    let new_start = Utc.with_ymd_and_hms(2026, 4, 1, 10, 0, 0).unwrap();
    let new_end = Utc.with_ymd_and_hms(2026, 4, 20, 18, 0, 0).unwrap();

    t.apply_update(
        UpdateTournamentData {
            name: Some("Clausura 2026".into()),
            description: None,
            start_date: Some(new_start),
            end_date: Some(new_end),
        },
        now,
    )
    .unwrap();

    assert_eq!(t.name, "Clausura 2026");
    assert_eq!(t.start_date, new_start);
    assert_eq!(t.end_date, new_end);
    assert_eq!(t.description.as_deref(), Some("Torneo de apertura"));
    assert!(!t.is_read_only());
}

#[test]
fn edit_rejects_end_before_start() {
    let mut t = tournament(LifecycleState::Draft);
    let before = t.clone();

    let err = t
        .apply_update(
            UpdateTournamentData {
                end_date: Some(t.start_date - chrono::Duration::days(1)),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidDates { .. }));
    assert_eq!(t, before);
}

#[test]
fn allowed_actions_follow_state() {
    let draft = tournament(LifecycleState::Draft);
    assert!(draft.allowed_actions().contains(&TournamentAction::Publish));
    assert!(draft.allowed_actions().contains(&TournamentAction::Edit));
    assert!(draft.allowed_actions().contains(&TournamentAction::Delete));
    assert!(!draft.state.allows(TournamentAction::RegisterParticipant));

    let published = tournament(LifecycleState::Published);
    assert_eq!(
        published.allowed_actions(),
        vec![
            TournamentAction::Finalize,
            TournamentAction::RegisterParticipant
        ]
    );

    let finalized = tournament(LifecycleState::Finalized);
    assert!(finalized.allowed_actions().is_empty());
}

#[test]
fn lifecycle_state_serializes_screaming_snake() {
    assert_eq!(
        serde_json::to_string(&LifecycleState::Published).unwrap(),
        "\"PUBLISHED\""
    );
    let parsed: LifecycleState = serde_json::from_str("\"FINALIZED\"").unwrap();
    assert_eq!(parsed, LifecycleState::Finalized);
}

#[test]
fn lifecycle_state_round_trips_as_string() {
    use std::str::FromStr;

    for state in [
        LifecycleState::Draft,
        LifecycleState::Published,
        LifecycleState::Finalized,
    ] {
        assert_eq!(LifecycleState::from_str(state.as_str()).unwrap(), state);
    }
    assert!(LifecycleState::from_str("CANCELLED").is_err());
}
