//! Tree-walking evaluation with checked `i64` arithmetic.

use std::collections::BTreeMap;

use crate::CalcError;
use crate::ast::{BinOp, Expr, Program, Stmt};

/// Variable bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Env {
    vars: BTreeMap<String, i64>,
}

impl Env {
    pub fn get(&self, name: &str) -> Option<i64> {
        self.vars.get(name).copied()
    }

    /// Evaluates `expr` with an explicit frame stack, so operator chains of
    /// any length run in constant native stack.
    pub fn eval(&self, expr: &Expr) -> Result<i64, CalcError> {
        let mut frames = Vec::new();
        let mut current = expr;
        loop {
            let mut value = loop {
                match current {
                    Expr::Int(n) => break *n,
                    Expr::Var(name) => {
                        break self
                            .get(name)
                            .ok_or_else(|| CalcError::UndefinedVariable(name.clone()))?;
                    }
                    Expr::Neg(inner) => {
                        frames.push(Frame::Negate);
                        current = &**inner;
                    }
                    Expr::Binary { op, lhs, rhs } => {
                        frames.push(Frame::Left { op: *op, rhs: &**rhs });
                        current = &**lhs;
                    }
                }
            };

            loop {
                match frames.pop() {
                    None => return Ok(value),
                    Some(Frame::Negate) => {
                        value = value.checked_neg().ok_or(CalcError::Overflow)?;
                    }
                    Some(Frame::Left { op, rhs }) => {
                        frames.push(Frame::Right { op, lhs: value });
                        current = rhs;
                        break;
                    }
                    Some(Frame::Right { op, lhs }) => value = apply(op, lhs, value)?,
                }
            }
        }
    }

    /// Executes every statement, collecting expression results.
    pub fn run(&mut self, program: &Program) -> Result<Vec<i64>, CalcError> {
        let mut results = Vec::new();
        for statement in &program.statements {
            match statement {
                Stmt::Assign { name, value } => {
                    let value = self.eval(value)?;
                    self.vars.insert(name.clone(), value);
                }
                Stmt::Expr(expr) => results.push(self.eval(expr)?),
            }
        }
        Ok(results)
    }
}

/// Pending work above the expression being evaluated.
enum Frame<'e> {
    Negate,
    /// Left operand in progress; `rhs` is next.
    Left { op: BinOp, rhs: &'e Expr },
    /// Right operand in progress.
    Right { op: BinOp, lhs: i64 },
}

fn apply(op: BinOp, l: i64, r: i64) -> Result<i64, CalcError> {
    match op {
        BinOp::Add => l.checked_add(r).ok_or(CalcError::Overflow),
        BinOp::Sub => l.checked_sub(r).ok_or(CalcError::Overflow),
        BinOp::Mul => l.checked_mul(r).ok_or(CalcError::Overflow),
        BinOp::Div if r == 0 => Err(CalcError::DivisionByZero),
        BinOp::Div => l.checked_div(r).ok_or(CalcError::Overflow),
    }
}
