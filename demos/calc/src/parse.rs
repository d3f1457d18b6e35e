//! Calculator grammar.
//!
//! ```text
//! program    := terminator* (statement (terminator+ | EOF))*
//! statement  := IDENT '=' expr | expr
//! expr       := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := '-' unary | atom
//! atom       := INT | IDENT | '(' expr ')'
//! terminator := ';' | NEWLINE
//! ```
//!
//! The user state is the set of names assigned so far; using a name before
//! its assignment is reported at the name.

use std::collections::BTreeSet;

use parsekit::combinator::Map;
use parsekit::prelude::*;

use crate::Tok;
use crate::ast::{BinOp, Expr, Program, Stmt};

/// Names defined so far.
pub type Scope = BTreeSet<String>;

type Rule<'i, V> = PResult<'i, Tok, Scope, V>;
type Fold = fn(Expr, Expr) -> Expr;

fn ident<'i>(state: State<'i, Tok, Scope>) -> Rule<'i, String> {
    match state.peek() {
        Some(Tok::Ident(name)) => {
            let name = name.clone();
            Ok(Outcome::success(name, state.advance()?, true))
        }
        found => Ok(Outcome::failure(
            ParseError::unexpected_at(state.cursor(), found).expecting("identifier"),
            false,
        )),
    }
}

fn int<'i>(state: State<'i, Tok, Scope>) -> Rule<'i, Expr> {
    match state.peek() {
        Some(Tok::Int(n)) => {
            let n = *n;
            Ok(Outcome::success(Expr::Int(n), state.advance()?, true))
        }
        found => Ok(Outcome::failure(
            ParseError::unexpected_at(state.cursor(), found).expecting("integer"),
            false,
        )),
    }
}

fn variable<'i>(state: State<'i, Tok, Scope>) -> Rule<'i, Expr> {
    let start = state.cursor();
    match ident(state)? {
        Outcome::Success {
            value,
            state,
            consumed,
        } => {
            if state.user().contains(&value) {
                Ok(Outcome::success(Expr::Var(value), state, consumed))
            } else {
                let error = ParseError::message(start, format!("undefined variable `{}`", value));
                Ok(Outcome::failure(error, consumed))
            }
        }
        Outcome::Failure { error, consumed } => Ok(Outcome::failure(error, consumed)),
    }
}

fn atom<'i>(state: State<'i, Tok, Scope>) -> Rule<'i, Expr> {
    let parens = between(token(Tok::LParen), token(Tok::RParen), lazy(|| expr));
    int.or(variable).or(parens).apply(state)
}

fn unary<'i>(state: State<'i, Tok, Scope>) -> Rule<'i, Expr> {
    token(Tok::Minus)
        .then(lazy(|| unary))
        .map(Expr::neg)
        .or(atom)
        .apply(state)
}

fn operator(tok: Tok, op: BinOp) -> impl for<'i> Parser<'i, Tok, Scope, Output = Fold> {
    let fold: Fold = match op {
        BinOp::Add => |l, r| Expr::binary(BinOp::Add, l, r),
        BinOp::Sub => |l, r| Expr::binary(BinOp::Sub, l, r),
        BinOp::Mul => |l, r| Expr::binary(BinOp::Mul, l, r),
        BinOp::Div => |l, r| Expr::binary(BinOp::Div, l, r),
    };
    Map::new(token(tok), move |_: Tok| fold)
}

fn term<'i>(state: State<'i, Tok, Scope>) -> Rule<'i, Expr> {
    let op = operator(Tok::Star, BinOp::Mul).or(operator(Tok::Slash, BinOp::Div));
    chain_left1(unary, op).apply(state)
}

/// `expr` is the entry point for a single expression.
pub fn expr<'i>(state: State<'i, Tok, Scope>) -> Rule<'i, Expr> {
    let op = operator(Tok::Plus, BinOp::Add).or(operator(Tok::Minus, BinOp::Sub));
    chain_left1(term, op).apply(state)
}

fn assignment<'i>(state: State<'i, Tok, Scope>) -> Rule<'i, Stmt> {
    // `x` alone is an expression; only `x =` commits to an assignment
    let target = attempt(ident.skip(token(Tok::Assign)));
    match target.and(expr).apply(state)? {
        Outcome::Success {
            value: (name, value),
            state,
            consumed,
        } => {
            let state = state.map_user(|mut scope| {
                scope.insert(name.clone());
                scope
            });
            Ok(Outcome::success(Stmt::Assign { name, value }, state, consumed))
        }
        Outcome::Failure { error, consumed } => Ok(Outcome::failure(error, consumed)),
    }
}

fn statement<'i>(state: State<'i, Tok, Scope>) -> Rule<'i, Stmt> {
    assignment
        .or(expr.map(Stmt::Expr))
        .label("statement")
        .apply(state)
}

fn terminator<'i>(state: State<'i, Tok, Scope>) -> Rule<'i, Tok> {
    token(Tok::Semi).or(token(Tok::Newline)).apply(state)
}

/// A whole program, statements separated by `;` or newlines.
pub fn program<'i>(state: State<'i, Tok, Scope>) -> Rule<'i, Program> {
    let end_of_statement = skip_many1(terminator).or(eof());
    skip_many(terminator)
        .then(statement.skip(end_of_statement).many())
        .map(|statements: Vec<Stmt>| Program { statements })
        .apply(state)
}
