//! Order state machine over mocked declaration nodes.
//!
//! Each class body is built from mock nodes and delivered to the checker
//! through `enter_class_body` / `member_declaration` / `leave_class_body`.

use declorder_analyzer::{enter_scope, leave_scope, transition, visit, CheckError};
use declorder_core::CoreError;
use declorder_tests::prelude::*;
use pretty_assertions::assert_eq;

fn findings(body: &MockBody) -> Vec<(usize, MessageKind)> {
    drive(body)
        .unwrap()
        .iter()
        .map(|v| (v.line(), v.message))
        .collect()
}

mod canonical_sequences {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_canonical_order_is_clean() {
        let body = MockBody::new("A")
            .static_field("COUNT")
            .instance_field("name")
            .constructor("A")
            .method("run");

        assert!(findings(&body).is_empty());
    }

    #[test]
    fn test_static_after_method() {
        let body = MockBody::new("A").method("run").static_field("COUNT");

        let violations = drive(&body).unwrap();

        assert_eq!(violations.len(), 1);
        let v = &violations.all()[0];
        assert_eq!(v.message, MessageKind::Static);
        assert_eq!(v.line(), 2);
        assert_eq!(v.identifier, "COUNT");
        assert_eq!(v.actual, MemberKind::StaticField);
        assert_eq!(v.expected_not_before, MemberKind::Method);
    }

    #[test]
    fn test_instance_after_constructor() {
        let body = MockBody::new("A").constructor("A").instance_field("name");
        assert_eq!(findings(&body), vec![(2, MessageKind::Instance)]);
    }

    #[test]
    fn test_static_after_instance() {
        let body = MockBody::new("A").instance_field("name").static_field("COUNT");
        assert_eq!(findings(&body), vec![(2, MessageKind::Static)]);
    }

    #[test]
    fn test_repeated_static_is_clean() {
        // GIVEN
        let mut state = enter_scope();

        // WHEN
        for name in ["A", "B"] {
            let event = MemberEvent::new(MemberKind::StaticField, Span::at(1, 1), name);
            assert!(visit(event, &mut state).is_none());
        }

        // THEN
        assert_eq!(state.highest_kind_seen(), Some(MemberKind::StaticField));
        leave_scope(state);
    }

    #[test]
    fn test_empty_body_is_clean() {
        let state = enter_scope();
        assert_eq!(state.highest_kind_seen(), None);
        assert!(findings(&MockBody::new("Empty")).is_empty());
    }
}

mod properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_violation_does_not_move_the_maximum() {
        // GIVEN - Method sets the maximum, then an out-of-order static field
        let body = MockBody::new("A")
            .method("run")
            .static_field("LATE")
            // WHEN - a constructor follows; it is still compared to Method
            .constructor("A");

        // THEN
        assert_eq!(
            findings(&body),
            vec![(2, MessageKind::Static), (3, MessageKind::Constructor)]
        );
    }

    #[test]
    fn test_state_stays_below_maximum_after_rejections() {
        // GIVEN
        let mut state = ScopeState::new();
        state.visit(&MemberEvent::new(MemberKind::Constructor, Span::at(1, 1), "A"));

        // WHEN
        let rejected = state.visit(&MemberEvent::new(MemberKind::StaticField, Span::at(2, 1), "X"));
        let accepted = state.visit(&MemberEvent::new(MemberKind::Constructor, Span::at(3, 1), "A"));

        // THEN
        assert!(rejected.is_some());
        assert!(accepted.is_none());
        assert_eq!(state.highest_kind_seen(), Some(MemberKind::Constructor));
    }

    #[test]
    fn test_message_follows_the_rejected_kind() {
        for kind in [
            MemberKind::StaticField,
            MemberKind::InstanceField,
            MemberKind::Constructor,
        ] {
            let (next, message) = transition(Some(MemberKind::Method), kind);
            assert_eq!(next, Some(MemberKind::Method));
            assert_eq!(message, Some(kind.message_kind()));
        }
    }

    #[test]
    fn test_method_is_never_rejected() {
        for highest in MemberKind::ALL {
            let (next, message) = transition(Some(highest), MemberKind::Method);
            assert_eq!(next, Some(MemberKind::Method));
            assert_eq!(message, None);
        }
    }

    #[test]
    fn test_static_method_counts_as_method() {
        let body = MockBody::new("A")
            .static_method("of")
            .instance_field("late");
        assert_eq!(findings(&body), vec![(2, MessageKind::Instance)]);
    }

    #[test]
    fn test_all_findings_in_a_body_are_collected() {
        let body = MockBody::new("A")
            .method("a")
            .static_field("B")
            .instance_field("c")
            .constructor("A")
            .instance_field("d");

        let violations = drive(&body).unwrap();

        assert_eq!(violations.len(), 4);
        assert_eq!(violations.with_message(MessageKind::Instance).count(), 2);
    }
}

mod scopes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initializers_are_skipped() {
        // GIVEN - initializer blocks interleaved everywhere
        let body = MockBody::new("A")
            .instance_init()
            .static_field("A")
            .static_init()
            .method("m")
            .instance_init()
            .static_init();

        // THEN - they neither advance the state nor get flagged
        assert!(findings(&body).is_empty());
    }

    #[test]
    fn test_nested_bodies_are_independent() {
        // GIVEN
        let inner = MockBody::new("Inner")
            .starting_at(10)
            .method("inner")
            .instance_field("late");
        let outer = MockBody::new("Outer")
            .instance_field("a")
            .nested(inner)
            .constructor("Outer")
            .static_field("B");

        // WHEN
        let violations = drive(&outer).unwrap();

        // THEN - Inner's method does not leak into Outer
        let flagged: Vec<_> = violations.iter().map(|v| v.identifier.as_str()).collect();
        assert_eq!(flagged, vec!["late", "B"]);
    }

    #[test]
    fn test_nested_body_starts_fresh() {
        let inner = MockBody::new("Inner").static_field("FIRST");
        let outer = MockBody::new("Outer").method("m").nested(inner);
        assert!(findings(&outer).is_empty());
    }
}

mod malformed_input {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_kind_code_fails_fast() {
        // GIVEN
        let body = MockBody::new("A").method("m").raw(9, "bogus");

        // WHEN
        let result = drive(&body);

        // THEN
        match result {
            Err(CheckError::Core(CoreError::UnknownMemberKind(code))) => assert_eq!(code, 9),
            other => panic!("Expected UnknownMemberKind, got {:?}", other),
        }
    }

    #[test]
    fn test_member_declaration_with_unknown_kind_code() {
        // GIVEN - a body already holding a method
        let mut checker = Checker::new();
        checker.enter_class_body("A");
        checker
            .member_declaration(&MockNode::new(NodeType::MethodDef, false, "m", 1))
            .unwrap();

        // WHEN
        let result = checker.member_declaration(&MockNode::new(NodeType::Raw(9), false, "bogus", 2));

        // THEN - rejected, not silently skipped
        assert!(matches!(
            result,
            Err(CheckError::Core(CoreError::UnknownMemberKind(9)))
        ));
        assert!(checker.violations().is_empty());
    }

    #[test]
    fn test_known_kind_code_is_accepted() {
        let body = MockBody::new("A").method("m").raw(0, "X");
        assert_eq!(findings(&body), vec![(2, MessageKind::Static)]);
    }

    #[test]
    fn test_member_outside_any_body() {
        // GIVEN
        let mut checker = Checker::new();
        let node = MockNode::new(NodeType::MethodDef, false, "run", 1);

        // WHEN
        let result = checker.member_declaration(&node);

        // THEN
        assert!(matches!(result, Err(CheckError::NoActiveScope { .. })));
    }
}
