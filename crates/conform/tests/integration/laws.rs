//! Property-based tests for the combinator laws.

use conform::prelude::*;
use proptest::prelude::*;

fn leaf_value() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        any::<bool>().prop_map(|b| Some(Value::Bool(b))),
        any::<f64>().prop_map(|n| Some(Value::Number(n))),
        ".{0,8}".prop_map(|s| Some(Value::String(s))),
        prop::collection::vec(any::<i32>(), 0..4).prop_map(|v| Some(Value::from(v))),
    ]
}

fn leaf_validator() -> impl Strategy<Value = TypeCheck> {
    prop_oneof![
        Just(string()),
        Just(number()),
        Just(boolean()),
        Just(null()),
        Just(array()),
        Just(integer()),
        Just(nan()),
    ]
}

// ============================================================================
// OPTIONAL BY DEFAULT: every primitive passes absence, `required` rejects it
// ============================================================================

proptest! {
    #[test]
    fn primitives_pass_absence(v in leaf_validator()) {
        prop_assert!(v.probe(None, "x").is_pass());
        let failure = required(v).probe(None, "x").into_failure();
        prop_assert!(failure.is_some_and(|f| f.required));
    }
}

// ============================================================================
// OR: passes iff either alternative passes; failure label is the join
// ============================================================================

proptest! {
    #[test]
    fn or_passes_iff_either_passes(
        a in leaf_validator(),
        b in leaf_validator(),
        value in leaf_value(),
    ) {
        let a_ok = a.probe(value.as_ref(), "x").is_pass();
        let b_ok = b.probe(value.as_ref(), "x").is_pass();
        let label = format!("{} or {}", a.expected(), b.expected());

        let combined = a.or(b);
        prop_assert_eq!(combined.expected(), label.as_str());

        match combined.probe(value.as_ref(), "x") {
            Outcome::Pass => prop_assert!(a_ok || b_ok),
            Outcome::Fail(failure) => {
                prop_assert!(!a_ok && !b_ok);
                prop_assert_eq!(failure.expected_label, label);
            }
        }
    }
}

// ============================================================================
// IDEMPOTENCY AND MODE CONSISTENCY
// ============================================================================

proptest! {
    #[test]
    fn checks_are_idempotent(v in leaf_validator(), value in leaf_value()) {
        let wrapped = elements(v);
        let first = wrapped.probe(value.as_ref(), "x").into_failure();
        let second = wrapped.probe(value.as_ref(), "x").into_failure();
        // compare rendered forms: a NaN payload never equals itself
        prop_assert_eq!(
            first.map(|f| ValidationError::from(f).to_string()),
            second.map(|f| ValidationError::from(f).to_string())
        );
    }

    #[test]
    fn raise_and_probe_agree(v in leaf_validator(), value in leaf_value()) {
        let probed = v.run(value.as_ref(), "x", ErrorMode::Probe, None);
        let raised = v.run(value.as_ref(), "x", ErrorMode::Raise, None);

        match probed {
            Ok(Outcome::Pass) => prop_assert!(matches!(raised, Ok(Outcome::Pass))),
            Ok(Outcome::Fail(failure)) => {
                let raised = raised.unwrap_err();
                prop_assert_eq!(raised.kind(), failure.kind);
                prop_assert_eq!(raised.to_string(), ValidationError::from(failure).to_string());
            }
            Err(_) => prop_assert!(false, "probe mode must not raise"),
        }
    }

    #[test]
    fn labels_are_stable_across_construction(choices in prop::collection::vec("[A-Z]{1,5}", 1..5)) {
        let a = one_of(choices.clone());
        let b = one_of(choices);
        prop_assert_eq!(a.expected(), b.expected());
        let (ra, rb) = (required(a), required(b));
        prop_assert_eq!(ra.expected(), rb.expected());
    }
}
