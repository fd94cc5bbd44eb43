use super::*;
use crate::builtins::builtin_environment;
use crate::errors::ProgramError;
use logo_lexer::tokenize;
use pretty_assertions::assert_eq;

fn analyze_first(source: &str, env: &Environment) -> AnalyzeResult<Analyzed> {
    let keywords = Keywords::default();
    Analyzer::new(env, &keywords).analyze(&tokenize(source), 0)
}

fn analyze_err(source: &str) -> LogoError {
    let env = builtin_environment();
    let keywords = Keywords::default();
    match Analyzer::new(&env, &keywords).analyze_program(&tokenize(source)) {
        Ok(node) => panic!("expected an error for {source:?}, got {node:?}"),
        Err(err) => err,
    }
}

#[test]
fn integer_and_float_literals() {
    let env = Environment::new();
    let (node, next) = analyze_first("3", &env).unwrap();
    assert!(matches!(node, Some(Node::Literal(Value::Int(3)))));
    assert_eq!(next, 1);

    let (node, _) = analyze_first("3.5", &env).unwrap();
    assert!(matches!(node, Some(Node::Literal(Value::Float(f))) if f == 3.5));
}

#[test]
fn invalid_number() {
    assert_eq!(
        analyze_err("12abc"),
        LogoError::Parse(ParseError::InvalidNumber("12abc".to_string()))
    );
}

#[test]
fn string_keeps_case_and_joins_with_spaces() {
    let env = Environment::new();
    let (node, next) = analyze_first("\" Bonjour   le Monde \" 5", &env).unwrap();
    match node {
        Some(Node::Literal(Value::Str(s))) => assert_eq!(&*s, "Bonjour le Monde"),
        other => panic!("expected a string literal, got {other:?}"),
    }
    assert_eq!(next, 5);
}

#[test]
fn unterminated_constructs() {
    let cases = [
        ("\" abc", Construct::String),
        ("[ 1 2", Construct::List),
        ("( 1", Construct::Group),
        ("si 1", Construct::Conditional),
        ("repete 3", Construct::Loop),
        ("tantque 1", Construct::While),
        ("pour f :n + :n 1", Construct::Procedure),
        ("pour", Construct::Procedure),
        ("donne x", Construct::Variable),
        ("+ 3", Construct::Call),
        ("3 +", Construct::Operator),
    ];
    for (source, construct) in cases {
        let err = analyze_err(source);
        assert_eq!(
            err,
            LogoError::Parse(ParseError::Unterminated(construct)),
            "{source}"
        );
        assert!(err.is_incomplete());
    }
}

#[test]
fn group_with_wrong_closer() {
    assert_eq!(
        analyze_err("( 1 2 )"),
        LogoError::Parse(ParseError::UnclosedGroup {
            found: "2".to_string()
        })
    );
}

#[test]
fn definition_where_value_required() {
    assert_eq!(
        analyze_err("si pour f fin 1"),
        LogoError::Parse(ParseError::ExpectedExpression {
            construct: Construct::Conditional
        })
    );
}

#[test]
fn infix_is_right_associative() {
    let env = builtin_environment();
    let (node, next) = analyze_first("10 - 5 - 2", &env).unwrap();
    assert_eq!(next, 5);
    let Some(Node::Infix { op, left, right }) = node else {
        panic!("expected an infix node");
    };
    assert_eq!(op, InfixOp::Sub);
    assert!(matches!(*left, Node::Literal(Value::Int(10))));
    assert!(matches!(*right, Node::Infix { op: InfixOp::Sub, .. }));
}

#[test]
fn call_consumes_arity_arguments() {
    let env = builtin_environment();
    let (node, next) = analyze_first("+ 1 2 3", &env).unwrap();
    assert_eq!(next, 3);
    assert!(matches!(node, Some(Node::Call { ref args, .. }) if args.len() == 2));
}

#[test]
fn call_arguments_do_not_absorb_operators() {
    let env = builtin_environment();
    let (node, next) = analyze_first("- 10 - 5 2", &env).unwrap();
    assert_eq!(next, 5);
    let Some(Node::Call { args, .. }) = node else {
        panic!("expected a call");
    };
    assert!(matches!(args[0], Node::Literal(Value::Int(10))));
    assert!(matches!(args[1], Node::Call { .. }));
}

#[test]
fn operator_after_call_applies_to_the_call() {
    let env = builtin_environment();
    let (node, next) = analyze_first("+ 1 2 * 3", &env).unwrap();
    assert_eq!(next, 5);
    assert!(matches!(
        node,
        Some(Node::Infix { op: InfixOp::Mul, ref left, .. }) if matches!(**left, Node::Call { .. })
    ));
}

#[test]
fn unbound_names_are_deferred_lookups() {
    let env = Environment::new();
    let (node, _) = analyze_first("Taille", &env).unwrap();
    assert!(matches!(node, Some(Node::VarRef(ref name)) if name == "taille"));
}

#[test]
fn procedure_definition_binds_name_and_yields_nothing() {
    let env = builtin_environment();
    let (node, next) = analyze_first("POUR Carre :Cote * :cote :cote FIN 1", &env).unwrap();
    assert!(node.is_none());
    assert_eq!(next, 7);
    match env.get("carre") {
        Some(Value::Callable(Callable::Procedure(procedure))) => {
            assert_eq!(procedure.params().to_vec(), vec![":cote".to_string()]);
            assert_eq!(procedure.arity(), 1);
        }
        other => panic!("expected a procedure, got {other:?}"),
    }
}

#[test]
fn procedure_body_can_call_itself() {
    let env = builtin_environment();
    let (_, _) = analyze_first("pour f :n si :n f - :n 1 sinon 0 fin", &env).unwrap();
    let (node, _) = analyze_first("f 3", &env).unwrap();
    assert!(matches!(node, Some(Node::Call { .. })));
}

#[test]
fn make_executes_during_analysis() {
    let env = builtin_environment();
    let (node, next) = analyze_first("donne X + 1 2 x", &env).unwrap();
    assert!(node.is_none());
    assert_eq!(next, 5);
    assert_eq!(env.lookup("x"), Ok(Value::int(3)));
}

#[test]
fn program_drops_definitions() {
    let env = builtin_environment();
    let keywords = Keywords::default();
    let node = Analyzer::new(&env, &keywords)
        .analyze_program(&tokenize("pour f fin 1 2"))
        .unwrap();
    assert!(matches!(node, Node::Block(ref nodes) if nodes.len() == 2));

    let empty = Analyzer::new(&env, &keywords)
        .analyze_program(&[])
        .unwrap();
    assert!(matches!(empty, Node::Literal(Value::Unit)));
}

#[test]
fn english_keywords() {
    let env = builtin_environment();
    let keywords = Keywords::english();
    let node = Analyzer::new(&env, &keywords)
        .analyze_program(&tokenize("if 1 2 else 3"))
        .unwrap();
    assert!(matches!(node, Node::If { .. }));
}

#[test]
fn deep_nesting_compiles_and_runs() {
    let env = builtin_environment();
    let keywords = Keywords::default();
    let depth = MAX_NESTING_DEPTH - 1;

    let source = format!("{}1{}", "[ ".repeat(depth - 1), " ]".repeat(depth - 1));
    let node = Analyzer::new(&env, &keywords)
        .analyze_program(&tokenize(&source))
        .unwrap();
    assert!(matches!(node, Node::List(_)));
    assert!(matches!(execute(&node, &env), Ok(Value::List(_))));

    let chain = format!("{}1", "1 + ".repeat(depth - 1));
    let node = Analyzer::new(&env, &keywords)
        .analyze_program(&tokenize(&chain))
        .unwrap();
    assert_eq!(execute(&node, &env), Ok(Value::int(i64::try_from(depth).unwrap())));
}

#[test]
fn nesting_past_the_limit_is_rejected() {
    let too_deep = LogoError::Parse(ParseError::TooDeep {
        limit: MAX_NESTING_DEPTH,
    });

    let chain = format!("{}1", "1 + ".repeat(50_000));
    assert_eq!(analyze_err(&chain), too_deep);

    let lists = format!("{}1{}", "[ ".repeat(50_000), " ]".repeat(50_000));
    assert_eq!(analyze_err(&lists), too_deep);

    let prefix = format!("{}1", "+ 1 ".repeat(MAX_NESTING_DEPTH));
    assert_eq!(analyze_err(&prefix), too_deep);
    assert!(!too_deep.is_incomplete());
}

#[test]
fn depth_resets_between_expressions() {
    let env = builtin_environment();
    let keywords = Keywords::default();
    let expression = format!("{}1 ", "1 + ".repeat(MAX_NESTING_DEPTH / 2));
    let node = Analyzer::new(&env, &keywords)
        .analyze_program(&tokenize(&expression.repeat(4)))
        .unwrap();
    assert!(matches!(node, Node::Block(ref nodes) if nodes.len() == 4));
}

#[test]
fn operator_procedure_replaces_infix_operator() {
    let env = builtin_environment();
    let keywords = Keywords::default();
    let node = Analyzer::new(&env, &keywords)
        .analyze_program(&tokenize("pour + :a :b * :a :b fin 3 + 4"))
        .unwrap();
    assert!(matches!(node, Node::Call { ref args, .. } if args.len() == 2));
    assert_eq!(execute(&node, &env), Ok(Value::int(12)));
}

#[test]
fn call_argument_does_not_take_trailing_operator() {
    let env = builtin_environment();
    let keywords = Keywords::default();
    env.define(
        "av",
        Value::Callable(Callable::from(crate::callable::Primitive::named(
            "av",
            1,
            |_| Ok(Value::Unit),
        ))),
    );
    let node = Analyzer::new(&env, &keywords)
        .analyze_program(&tokenize("donne pas 10 av pas * 2"))
        .unwrap();
    assert!(matches!(
        node,
        Node::Infix { op: InfixOp::Mul, ref left, .. } if matches!(**left, Node::Call { .. })
    ));
    assert!(matches!(
        execute(&node, &env),
        Err(ProgramError::TypeMismatch { .. })
    ));
}
