use std::fs;

use lispwalk::{
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::core::Context, lexer::{Location, lex}, parser::program::parse_program,
        value::core::Value,
    },
    run,
};
use walkdir::WalkDir;

#[test]
fn example_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "lisp"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {expected_path:?}: {e}"));

        count += 1;
        match run(&source) {
            Ok(value) => assert_eq!(render(value.as_ref()),
                                    expected.trim(),
                                    "program {path:?} printed the wrong value"),
            Err(e) => panic!("Program {:?} failed:\n{}", path, e.report(&source, "test")),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn render(value: Option<&Value>) -> String {
    value.map_or_else(|| "nil".to_string(), ToString::to_string)
}

fn assert_value(src: &str, expected: Value) {
    match run(src) {
        Ok(value) => assert_eq!(value, Some(expected), "script: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_int(src: &str, expected: i64) {
    assert_value(src, Value::Integer(expected));
}

fn assert_bool(src: &str, expected: bool) {
    assert_value(src, Value::Bool(expected));
}

fn runtime_error(src: &str) -> RuntimeError {
    match run(src) {
        Err(Error::Runtime(e)) => e,
        Err(e) => panic!("Script failed before evaluation: {e}\n{src}"),
        Ok(v) => panic!("Script succeeded with {v:?} but was expected to fail\n{src}"),
    }
}

#[test]
fn arithmetic() {
    assert_int("(+ 1 2)", 3);
    assert_int("(- 10 3 2)", 5);
    assert_int("(+)", 0);
    assert_int("(+ 7)", 7);
    assert_int("(- 5)", 5);
    assert_int("(+ 1 2 3 4 5)", 15);
    assert_int("(- 3 10)", -7);
    assert_int("(+ (- 10 4) (+ 1 1))", 8);
}

#[test]
fn comparison() {
    assert_bool("(< 1 2)", true);
    assert_bool("(< 2 1)", false);
    assert_bool("(< 2 2)", false);
    assert_bool("(< (- 0 5) 0)", true);
}

#[test]
fn conditionals() {
    assert_int("(if (< 1 2) 10 20)", 10);
    assert_int("(if (< 2 1) 10 20)", 20);
    assert_int("(if (< 1 2) (if (< 3 2) 1 2) 3)", 2);
}

#[test]
fn unchosen_branch_is_never_evaluated() {
    let err = runtime_error("(if (< 1 2) 10 (func g () (+ 1)))\n(g)");
    assert!(matches!(err, RuntimeError::ExpectedFunction { ref name, .. } if name == "g"));

    assert_int("(if (< 1 2) 10 (+ undefined-name 1))", 10);
    assert_int("(if (< 2 1) (< 1 (< 1 2)) 20)", 20);
}

#[test]
fn begin_returns_the_last_value() {
    assert_int("(begin 1 2 3)", 3);
    assert_bool("(begin (+ 1 1) (< 1 2))", true);
    assert_eq!(run("(begin)").unwrap(), None);
    assert_eq!(run("").unwrap(), None);
    assert_eq!(run("  \n ").unwrap(), None);
}

#[test]
fn top_level_forms_run_in_order() {
    assert_int("(+ 1 1) (+ 2 2) (+ 3 3)", 6);
    assert_int("(func one () (+ 1)) (one)", 1);
}

#[test]
fn user_defined_function_and_calls() {
    assert_int("(begin (func add (a b) (+ a b)) (add 3 4))", 7);
    assert_int("(func add (a b) (+ a b))\n(add (add 1 2) (add 3 4))", 10);
    assert_int("(func five () (+ 5)) (five)", 5);
}

#[test]
fn recursion() {
    let fib = "(func fib (n)
                 (if (< n 2)
                     n
                     (+ (fib (- n 1)) (fib (- n 2)))))
               (fib 15)";
    assert_int(fib, 610);
}

#[test]
fn func_returns_the_closure() {
    let value = run("(func f (x) (+ x))").unwrap().unwrap();
    assert!(matches!(&value, Value::Function(c) if c.name == "f" && c.params == ["x"]));
    assert_eq!(value.to_string(), "<func f>");
}

#[test]
fn multi_form_body_runs_as_a_sequence() {
    assert_int("(func quad (a) ((func dbl (x) (+ x x)) (dbl (dbl a))))\n(quad 3)", 12);
}

#[test]
fn call_bindings_do_not_leak_to_the_caller() {
    let err = runtime_error("(func f (x) (func g () (+ 1))) (f 1) (g)");
    assert!(matches!(err, RuntimeError::ExpectedFunction { ref name, .. } if name == "g"));

    let err = runtime_error("(func f (x) (+ x)) (f 5) (+ x)");
    assert!(matches!(err, RuntimeError::UnknownVariable { ref name, .. } if name == "x"));
}

#[test]
fn parameters_shadow_caller_bindings() {
    assert_int("(func x () (+ 1))
                  (func f (x) (+ x 1))
                  (f 41)",
               42);
}

#[test]
fn closures_see_the_call_site_not_the_definition_site() {
    let program = "(func make (x) (func inner (y) (+ x y)))
                   (func apply (f x) (f x))
                   (apply (make 5) 1)";
    assert_int(program, 2);

    let program = "(func make (x) (func inner (y) (+ x y)))
                   (func apply (f a) (f a))
                   (apply (make 5) 1)";
    let err = runtime_error(program);
    assert!(matches!(err, RuntimeError::UnknownVariable { ref name, .. } if name == "x"));
}

#[test]
fn wrong_function_arity_is_error() {
    let err = runtime_error("(func add (a b) (+ a b))\n(add 1)");
    assert!(matches!(err,
                     RuntimeError::ArgumentCountMismatch { ref name,
                                                           expected: 2,
                                                           found: 1,
                                                           location }
                     if name == "add" && location == Location::new(2, 1)));
    assert_eq!(err.to_string(), "Expected 2 args to `add`, got 1");
}

#[test]
fn builtin_arity_is_checked() {
    let err = runtime_error("(-)");
    assert!(matches!(err, RuntimeError::BuiltinArity { name: "-", found: 0, .. }));

    let err = runtime_error("(if (< 1 2) 1)");
    assert!(matches!(err, RuntimeError::BuiltinArity { name: "if", found: 2, .. }));
    assert_eq!(err.to_string(), "`if` takes exactly 3 args, got 2");

    let err = runtime_error("(< 1 2 3)");
    assert!(matches!(err, RuntimeError::BuiltinArity { name: "<", found: 3, .. }));
}

#[test]
fn type_errors() {
    let err = runtime_error("(if 1 2 3)");
    assert_eq!(err,
               RuntimeError::ExpectedBoolean { found:    "integer".to_string(),
                                               location: Location::new(1, 5), });

    let err = runtime_error("(+ 1 (< 1 2))");
    assert_eq!(err,
               RuntimeError::ExpectedInteger { found:    "boolean".to_string(),
                                               location: Location::new(1, 6), });

    let err = runtime_error("(func f () (+ 1)) (< f 1)");
    assert!(matches!(err, RuntimeError::ExpectedInteger { ref found, .. } if found == "function"));

    let err = runtime_error("(- 1 (begin))");
    assert!(matches!(err, RuntimeError::ExpectedInteger { ref found, .. } if found == "nothing"));
}

#[test]
fn unknown_variable_is_error() {
    let err = runtime_error("(+ x 1)");
    assert_eq!(err,
               RuntimeError::UnknownVariable { name:     "x".to_string(),
                                               location: Location::new(1, 4), });
}

#[test]
fn head_must_name_a_function() {
    let err = runtime_error("(frob 1 2)");
    assert!(matches!(err, RuntimeError::ExpectedFunction { ref name, .. } if name == "frob"));

    let err = runtime_error("(1 2)");
    assert!(matches!(err, RuntimeError::ExpectedFunction { ref name, .. } if name == "1"));

    let err = runtime_error("()");
    assert!(matches!(err, RuntimeError::ExpectedFunction { ref name, .. } if name == "()"));

    let err = runtime_error("((+ 1 2) 3)");
    assert!(matches!(err, RuntimeError::ExpectedFunction { ref name, .. } if name == "(+ 1 2)"));

    let err = runtime_error("(func f (x) (x)) (f 1)");
    assert!(matches!(err, RuntimeError::ExpectedFunction { ref name, .. }
                          if name == "x (integer)"));
}

#[test]
fn missing_argument_value_is_error() {
    let err = runtime_error("(func f (x) (+ x)) (f (begin))");
    assert!(matches!(err, RuntimeError::MissingValue { .. }));
}

#[test]
fn invalid_function_definitions() {
    for src in ["(func 1 (a) (+ a))",
                "(func f a (+ a))",
                "(func f (a 2) (+ a))",
                "(func f (a) a)",
                "(func if (a) (+ a))"]
    {
        let err = runtime_error(src);
        assert!(matches!(err, RuntimeError::InvalidFunctionDefinition { .. }),
                "expected an invalid definition for {src}, got {err:?}");
    }
}

#[test]
fn integer_literals_must_fit() {
    let err = runtime_error("(+ 99999999999999999999 1)");
    assert!(matches!(err, RuntimeError::NumericFormat { ref text, .. }
                          if text == "99999999999999999999"));

    assert_int("(+ 9223372036854775807)", i64::MAX);
}

#[test]
fn overflow_is_error() {
    let err = runtime_error("(+ 9223372036854775807 1)");
    assert!(matches!(err, RuntimeError::Overflow { .. }));

    let err = runtime_error("(- (- 0 9223372036854775807) 2)");
    assert!(matches!(err, RuntimeError::Overflow { .. }));
}

#[test]
fn parse_errors_surface_from_run() {
    assert!(matches!(run("(+ 1 2"), Err(Error::Parse(_))));
    assert!(matches!(run("5"), Err(Error::Parse(_))));
    assert!(matches!(run("(+ 1 2))"), Err(Error::Parse(_))));
}

#[test]
fn reevaluation_is_idempotent() {
    let tokens = lex("(func add (a b) (+ a b)) (add 20 22)").unwrap();
    let program = parse_program(&tokens).unwrap();

    let first = Context::new().eval_program(&program).unwrap();
    let second = Context::new().eval_program(&program).unwrap();

    assert_eq!(first, Some(Value::Integer(42)));
    assert_eq!(first, second);
}

#[test]
fn context_keeps_top_level_definitions() {
    let mut context = Context::new();

    let define = parse_program(&lex("(func inc (n) (+ n 1))").unwrap()).unwrap();
    let call = parse_program(&lex("(inc 41)").unwrap()).unwrap();

    context.eval_program(&define).unwrap();
    assert_eq!(context.eval_program(&call).unwrap(), Some(Value::Integer(42)));
    assert_eq!(context.globals.len(), 1);
}

#[test]
fn report_points_at_the_offending_token() {
    let source = "(+ 1\n   (< 1 2))";
    let err = run(source).unwrap_err();

    assert_eq!(err.location(), Location::new(2, 4));
    assert_eq!(err.report(source, "main.lisp"),
               "Expected integer, got boolean [at line 2, column 4 in file main.lisp]\n   (< 1 \
                2))\n   ^ near here\n");
}

#[test]
fn report_for_unclosed_list() {
    let source = "(func f (x)\n  (+ x 1)";
    let err = run(source).unwrap_err();

    assert_eq!(err.report(source, "f.lisp"),
               "Expected closing parenthesis [at line 2, column 9 in file f.lisp]\n  (+ x \
                1)\n        ^ near here\n");
}
