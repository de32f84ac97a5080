use moose::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::{
        evaluator::{Evaluator, evaluate},
        lexer::scan,
        parser::parse,
        token::{Token, TokenKind},
    },
};

fn eval_source(source: &str) -> Result<f64, RuntimeError> {
    let expr = parse(&scan(source).tokens).unwrap_or_else(|e| panic!("{source:?}: {e}"));
    evaluate(&expr)
}

fn number(value: f64) -> Expr {
    Expr::Number { value,
                   token: Token::number(value.to_string(), value, 1, 1) }
}

#[test]
fn folds_left_to_right() {
    assert_eq!(eval_source("(+ 1 2 3)"), Ok(6.0));
    assert_eq!(eval_source("(- 10 1 2)"), Ok(7.0));
    assert_eq!(eval_source("(* 2 3 4)"), Ok(24.0));
    assert_eq!(eval_source("(/ 64 2 4 2)"), Ok(4.0));
}

#[test]
fn signs_apply_to_their_operand() {
    assert_eq!(eval_source("-5"), Ok(-5.0));
    assert_eq!(eval_source("+(+ 2 3)"), Ok(5.0));
    assert_eq!(eval_source("-(- 2 3)"), Ok(1.0));
}

#[test]
fn dividing_zero_is_fine() {
    assert_eq!(eval_source("(/ 0 4)"), Ok(0.0));
}

#[test]
fn division_by_zero_reports_the_operator_token() {
    let error = eval_source("(/ 4 0)").unwrap_err();

    let RuntimeError::DivisionByZero { token } = &error else {
        panic!("expected division by zero, got {error:?}");
    };
    assert_eq!(token.kind, TokenKind::Slash);
    assert_eq!((token.line, token.column), (1, 2));
    assert_eq!(error.to_string(), "Error on line 1, column 2: cannot divide by 0.");
}

#[test]
fn division_by_zero_anywhere_in_the_fold() {
    assert!(matches!(eval_source("(/ 8 2 0 1)"), Err(RuntimeError::DivisionByZero { .. })));

    let error = eval_source("(* 1\n   (/ 2 (- 1 1)))").unwrap_err();
    assert_eq!((error.token().line, error.token().column), (2, 5));
}

#[test]
fn evaluator_is_reusable() {
    let evaluator = Evaluator::new();
    let sum = parse(&scan("(+ 1 2)").tokens).unwrap();
    let broken = parse(&scan("(/ 1 0)").tokens).unwrap();

    assert_eq!(evaluator.evaluate(&sum), Ok(3.0));
    assert!(evaluator.evaluate(&broken).is_err());
    assert_eq!(evaluator.evaluate(&sum), Ok(3.0));
}

#[test]
fn hand_built_trees_are_evaluated() {
    let token = Token::new(TokenKind::Minus, "-", 1, 2);

    let single = Expr::Operation { operator: Operator::Subtract,
                                   token:    token.clone(),
                                   operands: vec![number(4.0)], };
    assert_eq!(evaluate(&single), Ok(4.0));

    let empty = Expr::Operation { operator: Operator::Subtract,
                                  token:    token.clone(),
                                  operands: Vec::new(), };
    assert_eq!(evaluate(&empty), Err(RuntimeError::MissingOperands { token }));
}

#[test]
fn overflow_yields_infinity() {
    let source = format!("(* 1{} 10)", "0".repeat(308));
    let value = eval_source(&source).unwrap();

    assert!(value.is_infinite());
    assert_eq!(moose::util::num::format_number(value), "Infinity");
}
