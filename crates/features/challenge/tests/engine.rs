use dialecta_atlas::Atlas;
use dialecta_challenge::*;
use dialecta_domain::config::{ChallengeConfig, GradingMode};
use dialecta_domain::kinds::ChallengeKinds;
use dialecta_kernel::rng::SessionRng;
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};

fn andino_atlas() -> Atlas {
    let raw = json!({
        "zones": {
            "andino": { "nombre": "Andino", "features": { "seseo": 1 }, "admin_units": ["BO", "PE", "EC", "CO"] }
        }
    });
    Atlas::load(&raw, BTreeMap::new()).expect("andino loads")
}

fn mixed_atlas() -> Atlas {
    let raw = json!({
        "zones": {
            "caribe": { "nombre": "Caribe", "features": { "seseo": 1, "lambdacismo": 1 }, "admin_units": ["CU"] },
            "caribe_venezuela": { "nombre": "Costa venezolana", "features": { "lambdacismo": 2 }, "admin_units": ["VE"] },
            "centro": { "nombre": "Centro", "features": { "seseo": 0, "lambdacismo": 0 }, "admin_units": ["ES-MD"] },
            "sur": { "nombre": "Sur", "features": { "seseo": 2, "lambdacismo": 2 }, "admin_units": ["ES-AN"] }
        },
        "text_bank_questions": [
            { "texto": "mi amol", "zona": "caribe_venezuela" },
            { "texto": "vale, tío", "zona": "centro" }
        ]
    });
    let links = BTreeMap::from([("caribe".to_owned(), vec!["caribe_venezuela".to_owned()])]);
    Atlas::load(&raw, links).expect("mixed fixture loads")
}

fn config(features: &[&str], grading: GradingMode, kinds: ChallengeKinds) -> ChallengeConfig {
    ChallengeConfig {
        candidate_features: features.iter().map(|&f| f.to_owned()).collect(),
        grading,
        kinds,
        seed: Some(42),
        ..ChallengeConfig::default()
    }
}

fn units(codes: &[&str]) -> BTreeMap<String, Mark> {
    codes.iter().map(|&c| (c.to_owned(), Mark::Present)).collect()
}

#[test]
fn andino_partial_unit_selection_misses_the_rest() {
    let mut engine = ChallengeEngine::from_config(
        andino_atlas(),
        config(&["seseo"], GradingMode::Presence, ChallengeKinds::FEATURE),
    );
    let question = engine.generate().expect("seseo has an answer").clone();
    let question = question.as_feature().expect("feature question");
    assert_eq!(question.present_units(engine.atlas()).len(), 4);

    let g = engine.grade_units(&units(&["BO", "PE"])).expect("active feature question");
    assert_eq!(g.present.missed, BTreeSet::from(["CO".to_owned(), "EC".to_owned()]));
    assert!(g.present.wrong.is_empty());
    assert!(!g.correct);

    let exact = engine.grade_units(&units(&["BO", "PE", "EC", "CO"])).expect("active");
    assert!(exact.correct);
}

#[test]
fn enclave_units_are_graded_by_their_own_zone() {
    let mut engine = ChallengeEngine::from_config(
        mixed_atlas(),
        config(&["lambdacismo"], GradingMode::Presence, ChallengeKinds::FEATURE),
    );
    let question = engine.generate().expect("lambdacismo has an answer").clone();
    let question = question.as_feature().expect("feature question");
    assert_eq!(question.present, BTreeSet::from(["caribe".to_owned()]));
    assert_eq!(question.present_units(engine.atlas()), BTreeSet::from(["CU".to_owned()]));

    assert!(engine.grade_units(&units(&["CU"])).is_some_and(|g| g.correct));
    let spread = engine.grade_units(&units(&["CU", "VE"])).expect("active feature question");
    assert_eq!(spread.present.wrong, BTreeSet::from(["VE".to_owned()]));
}

#[test]
fn lifecycle_and_locking() {
    let mut engine = ChallengeEngine::from_config(
        mixed_atlas(),
        config(&["seseo"], GradingMode::Presence, ChallengeKinds::FEATURE),
    );
    assert_eq!(engine.state(), ChallengeState::Idle);
    assert!(engine.check().is_none());
    assert_eq!(engine.record_selection("caribe", ClickKind::Single), SelectionUpdate::Ignored);

    engine.generate().expect("seseo has an answer");
    assert_eq!(engine.state(), ChallengeState::QuestionActive);

    // A click on the enclave selects its parent.
    assert_eq!(
        engine.record_selection("caribe_venezuela", ClickKind::Single),
        SelectionUpdate::Marked { zone: "caribe".into(), mark: Mark::Present }
    );
    assert_eq!(engine.record_selection("nowhere", ClickKind::Single), SelectionUpdate::Ignored);

    assert!(engine.check().is_some_and(Grade::is_correct));
    assert_eq!(engine.state(), ChallengeState::Graded);

    // Locked after grading.
    assert_eq!(engine.record_selection("centro", ClickKind::Single), SelectionUpdate::Ignored);
    assert!(engine.check().is_some_and(Grade::is_correct));

    engine.generate().expect("seseo again");
    assert!(engine.selections().is_empty());
    assert!(engine.last_grade().is_none());

    engine.reset();
    assert_eq!(engine.state(), ChallengeState::Idle);
    assert!(engine.question().is_none());
}

#[test]
fn variable_class_grading() {
    let mut engine = ChallengeEngine::from_config(
        mixed_atlas(),
        config(&["lambdacismo"], GradingMode::PresenceAndVariable, ChallengeKinds::FEATURE),
    );
    engine.generate().expect("lambdacismo has an answer");

    engine.record_selection("caribe", ClickKind::Single);
    assert_eq!(
        engine.record_selection("sur", ClickKind::Double),
        SelectionUpdate::Marked { zone: "sur".into(), mark: Mark::Variable }
    );

    let Some(Grade::Feature(g)) = engine.check() else { panic!("feature grade") };
    assert!(g.correct, "{g:?}");
}

#[test]
fn text_questions_replace_and_accept_parents() {
    let mut engine = ChallengeEngine::from_config(
        mixed_atlas(),
        config(&["seseo"], GradingMode::Presence, ChallengeKinds::TEXT),
    );
    let answer = engine.generate().expect("text bank").as_text().expect("text question").answer.clone();

    let wrong = if answer == "caribe" { "centro" } else { "caribe" };
    engine.record_selection(wrong, ClickKind::Single);
    assert_eq!(
        engine.record_selection(&answer, ClickKind::Single),
        SelectionUpdate::Replaced { zone: answer.clone(), previous: Some(wrong.to_owned()) }
    );
    assert_eq!(engine.selections().len(), 1);
    assert!(engine.check().is_some_and(Grade::is_correct));
}

#[test]
fn text_without_selection_is_reported() {
    let mut engine = ChallengeEngine::from_config(
        mixed_atlas(),
        config(&["seseo"], GradingMode::Presence, ChallengeKinds::TEXT),
    );
    engine.generate().expect("text bank");
    let Some(Grade::Text(g)) = engine.check() else { panic!("text grade") };
    assert_eq!(g.outcome, TextOutcome::NoSelection);
}

#[test]
fn empty_text_bank_falls_over_to_features() {
    let mut engine = ChallengeEngine::from_config(
        andino_atlas(),
        config(&["seseo"], GradingMode::Presence, ChallengeKinds::TEXT),
    );
    assert!(engine.generate().expect("feature fallback").as_feature().is_some());
}

#[test]
fn both_kinds_show_up() {
    let mut engine = ChallengeEngine::new(
        mixed_atlas(),
        config(&["seseo"], GradingMode::Presence, ChallengeKinds::ALL),
        SessionRng::from_seed_u64(9),
    );
    let (mut text, mut feature) = (0, 0);
    for _ in 0..64 {
        match engine.generate().expect("question") {
            Question::Text(_) => text += 1,
            Question::Feature(_) => feature += 1,
        }
    }
    assert!(text > 0 && feature > 0);
}

#[test]
fn failure_resets_to_idle() {
    let mut engine = ChallengeEngine::from_config(
        mixed_atlas(),
        config(&["queismo"], GradingMode::Presence, ChallengeKinds::FEATURE),
    );
    let err = engine.generate().expect_err("queismo has no data");
    assert!(matches!(err, GenerationError::NoQuestion { .. }));
    assert_eq!(engine.state(), ChallengeState::Idle);
}

#[test]
fn seeded_sessions_replay() {
    let features = ["seseo", "lambdacismo"];
    let draw = || {
        let mut engine = ChallengeEngine::from_config(
            mixed_atlas(),
            config(&features, GradingMode::Presence, ChallengeKinds::ALL),
        );
        (0..16).map(|_| engine.generate().expect("question").clone()).collect::<Vec<_>>()
    };
    assert_eq!(draw(), draw());
}

#[test]
fn every_answerable_feature_is_reachable() {
    let mut engine = ChallengeEngine::from_config(
        mixed_atlas(),
        config(&["seseo", "lambdacismo", "queismo"], GradingMode::Presence, ChallengeKinds::FEATURE),
    );
    let mut seen = BTreeSet::new();
    for _ in 0..64 {
        let q = engine.generate().expect("question");
        let q = q.as_feature().expect("feature question");
        assert!(!q.present.is_empty());
        seen.insert(q.feature.clone());
    }
    assert_eq!(seen, BTreeSet::from(["lambdacismo".to_owned(), "seseo".to_owned()]));
}
