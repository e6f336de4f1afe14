//! Integration tests for the front end.
//!
//! These tests go through the public `parse` entry point the way a REPL or
//! an evaluator would, from source text to the program and its error list.

use intlang::{
    ast::ast::{Expr, Node, Stmt},
    lexer::tokens::FUNCTION_KEYWORD,
    parse,
};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_small_program() {
    let source = format!(
        "@ five = 5;\n\
         @ ten = 10;\n\
         @ add = {}(x, y) {{\n\
         \tx + y;\n\
         }};\n\
         @ result = add(five, ten);\n\
         if (result > 10) {{ ret true; }} el {{ ret false; }}\n",
        FUNCTION_KEYWORD
    );

    let (program, errors) = parse(&source);

    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(program.statements.len(), 5);
    assert_eq!(
        program.to_string(),
        format!(
            "@ five = 5;\n\
             @ ten = 10;\n\
             @ add = {}(x, y) {{ (x + y) }};\n\
             @ result = add(five, ten);\n\
             if (result > 10) {{ ret true; }} el {{ ret false; }}",
            FUNCTION_KEYWORD
        )
    );
}

#[test]
fn test_binding_captures_function_value() {
    let source = format!("@ double = {}(n) {{ n * 2 }};", FUNCTION_KEYWORD);
    let (program, errors) = parse(&source);

    assert!(errors.is_empty());
    let Stmt::Binding(binding) = &program.statements[0] else {
        panic!("expected binding statement");
    };
    let Expr::Function(function) = &binding.value else {
        panic!("expected function literal value");
    };
    assert_eq!(function.parameters.len(), 1);
    assert_eq!(function.body.body[0].to_string(), "(n * 2)");
}

#[test]
fn test_partial_program_with_errors() {
    let (program, errors) = parse("@ a = 1;\n@ 2 = b;\n@ c = (3 + ;\n@ d = 4;");

    assert_eq!(
        errors,
        vec![
            String::from("expected identifier but got integer"),
            String::from("no prefix parse function for `;` found"),
        ]
    );
    let names: Vec<&str> = program
        .statements
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::Binding(binding) => Some(binding.name.value.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["a", "d"]);
}

#[test]
fn test_repl_style_single_expressions() {
    for (line, expected) in [("5", "5"), ("-a", "(-a)"), ("!!true", "(!(!true))"), ("x(1)(2)", "x(1)(2)")] {
        let (program, errors) = parse(line);

        assert!(errors.is_empty(), "{line}: {errors:?}");
        assert_eq!(program.to_string(), expected);
        assert_eq!(program.statements[0].token_literal(), &line[..1]);
    }
}

#[test]
fn test_garbage_input_terminates() {
    let (_, errors) = parse("}}}{{{ ))(( ;;; @@ ret ret el el [ ] \" : , # $ %");

    assert!(!errors.is_empty());
}

#[test]
fn test_deeply_nested_grouping() {
    let depth = 64;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let (program, errors) = parse(&source);

    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "1");
}
