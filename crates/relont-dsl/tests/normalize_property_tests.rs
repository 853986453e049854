use proptest::prelude::*;
use relont_dsl::{parse_line, RelationTables};

fn term() -> impl Strategy<Value = String> {
    // Plain labels: no statement delimiters, no newlines.
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9 _,.'-]{0,24}").unwrap()
}

fn predicate() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("isa".to_string()),
        Just("has_child".to_string()),
        Just("has_part".to_string()),
        Just("is_part_of".to_string()),
        Just("has_sub_class".to_string()),
        Just("include".to_string()),
        Just("is_treated_by".to_string()),
        proptest::string::string_regex("[a-z][a-z_]{0,15}").unwrap(),
    ]
}

proptest! {
    #[test]
    fn statement_round_trips_through_line_parser(s in term(), p in predicate(), o in term()) {
        let raw = format!("[{s}]-({p})->[{o}]");
        let line = parse_line(&raw).expect("well-formed statement must match");
        prop_assert_eq!(line.subject, s.as_str());
        prop_assert_eq!(line.predicate, p.as_str());
        prop_assert_eq!(line.object, o.as_str());
    }

    #[test]
    fn swap_happens_exactly_for_inverse_keys(p in predicate()) {
        let tables = RelationTables::default();
        let rewritten = tables.alternative_form(&p).unwrap_or(&p).to_string();
        let n = tables.normalize("S", &p, "O");

        prop_assert_eq!(n.swapped, tables.inverse_of(&rewritten).is_some());
        if n.swapped {
            prop_assert_eq!((n.subject, n.object), ("O", "S"));
        } else {
            prop_assert_eq!((n.subject, n.object), ("S", "O"));
        }
        prop_assert_eq!(n.hierarchical, tables.is_hierarchical(&n.predicate));
    }

    #[test]
    fn canonical_names_are_stable_under_renormalization(p in predicate()) {
        // Default tables never chain, so a canonical name is a fixed point.
        let tables = RelationTables::default();
        let once = tables.normalize((), &p, ());
        let twice = tables.normalize((), &once.predicate, ());
        prop_assert_eq!(&twice.predicate, &once.predicate);
        prop_assert!(!twice.swapped);
    }
}
