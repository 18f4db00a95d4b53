//! Declaration order in parsed Java sources.

use declorder_tests::prelude::*;

mod fixtures {
    use super::*;

    #[test]
    fn test_ordered_class_is_clean() {
        Scenario::new("ordered")
            .fixture("Ordered.java")
            .expect(|a| a.clean())
            .run()
            .unwrap();
    }

    #[test]
    fn test_disordered_class() {
        Scenario::new("disordered")
            .fixture("Disordered.java")
            .expect(|a| {
                a.finding(5, MessageKind::Static)
                    .finding(11, MessageKind::Instance)
                    .finding(17, MessageKind::Constructor)
                    .finding(21, MessageKind::Static)
                    .members(&["MAX_LINES", "total", "Disordered", "currency"])
            })
            .run()
            .unwrap();
    }

    #[test]
    fn test_nested_types() {
        Scenario::new("nested")
            .fixture("Nested.java")
            .expect(|a| {
                a.finding(15, MessageKind::Static)
                    .finding(18, MessageKind::Constructor)
                    .finding(28, MessageKind::Instance)
                    .finding(40, MessageKind::Static)
                    .finding(58, MessageKind::Static)
                    .members(&["EMPTY", "Nested", "calls", "count", "LIMIT"])
            })
            .run()
            .unwrap();
    }

    #[test]
    fn test_unbalanced_source_is_rejected() {
        Scenario::new("broken")
            .fixture("Broken.java")
            .expect(|a| a.error(":4:24: unclosed '{'"))
            .run()
            .unwrap();
    }
}

mod inline {
    use super::*;

    #[test]
    fn test_multiple_top_level_types_are_checked_separately() {
        Scenario::new("two_types")
            .source(
                r#"
class First {
    void run() {}
}

class Second {
    static int COUNT;
}
"#,
            )
            .expect(|a| a.clean())
            .run()
            .unwrap();
    }

    #[test]
    fn test_field_position_is_its_first_annotation() {
        Scenario::new("annotated")
            .source(
                r#"
class A {
    void run() {}

    @Inject
    @Named("db")
    static Object SOURCE;
}
"#,
            )
            .expect(|a| a.finding(5, MessageKind::Static).members(&["SOURCE"]))
            .run()
            .unwrap();
    }

    #[test]
    fn test_local_variables_are_not_fields() {
        Scenario::new("locals")
            .source(
                r#"
class A {
    void run() {
        int local = 0;
        class Local {
            void f() {}
            static int X;
        }
    }
}
"#,
            )
            .expect(|a| a.clean())
            .run()
            .unwrap();
    }

    #[test]
    fn test_interface_constants_after_methods_are_allowed() {
        Scenario::new("interface")
            .source(
                r#"
public interface Shape {
    double area();
    double UNIT = 1.0;
    default String describe() { return "shape"; }
    static Shape unit() { return () -> UNIT; }
}
"#,
            )
            .expect(|a| a.clean())
            .run()
            .unwrap();
    }

    #[test]
    fn test_annotation_type_with_nested_class() {
        Scenario::new("annotation")
            .source(
                r#"
@interface Retry {
    int times() default 3;
    String[] on() default {};

    class Policy {
        Policy() {}
        private int backoff;
    }
}
"#,
            )
            .expect(|a| a.finding(8, MessageKind::Instance))
            .run()
            .unwrap();
    }

    #[test]
    fn test_abstract_and_native_methods() {
        Scenario::new("abstract")
            .source(
                r#"
abstract class Base {
    protected abstract void step();
    public native int handle();
    protected Base() {}
}
"#,
            )
            .expect(|a| a.count(1).finding(5, MessageKind::Constructor))
            .run()
            .unwrap();
    }

    #[test]
    fn test_comments_and_strings_do_not_confuse_the_parser() {
        Scenario::new("comments")
            .source(
                r#"
class A {
    // static int COMMENTED;
    private String brace = "{ not a block";
    /* void hidden() {} */
    private char quote = '}';
    A() {}
}
"#,
            )
            .expect(|a| a.clean())
            .run()
            .unwrap();
    }

    #[test]
    fn test_scenario_without_source() {
        let err = Scenario::new("empty").run().unwrap_err();
        assert!(matches!(err, ScenarioError::NoSource { .. }));
    }

    #[test]
    fn test_failed_expectation_is_reported() {
        let err = Scenario::new("wrong")
            .source("class A { void f() {} int x; }")
            .expect(|a| a.clean())
            .run()
            .unwrap_err();
        assert!(err.to_string().contains("wrong"), "{}", err);
    }
}
