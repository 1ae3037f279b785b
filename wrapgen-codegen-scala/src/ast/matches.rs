//! Pattern matches and exception handling.

use wrapgen_codegen::builder::{CodeFragment, Renderable};

/// One `case` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub pattern: String,
    /// One line renders inline after `=>`; more lines go below it.
    pub body: Vec<String>,
}

impl Case {
    pub fn new(pattern: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            body: vec![body.into()],
        }
    }

    pub fn multiline(pattern: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            pattern: pattern.into(),
            body,
        }
    }
}

impl Renderable for Case {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self.body.as_slice() {
            [single] => vec![CodeFragment::line(format!(
                "case {} => {}",
                self.pattern, single
            ))],
            lines => vec![CodeFragment::block(
                format!("case {} =>", self.pattern),
                lines.iter().map(CodeFragment::line).collect(),
                None,
            )],
        }
    }
}

/// `scrutinee match { ... }`.
#[derive(Debug, Clone)]
pub struct Match {
    scrutinee: String,
    cases: Vec<Case>,
}

impl Match {
    pub fn new(scrutinee: impl Into<String>) -> Self {
        Self {
            scrutinee: scrutinee.into(),
            cases: Vec::new(),
        }
    }

    pub fn case(mut self, case: Case) -> Self {
        self.cases.push(case);
        self
    }

    pub fn cases(mut self, cases: impl IntoIterator<Item = Case>) -> Self {
        self.cases.extend(cases);
        self
    }
}

impl Renderable for Match {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            format!("{} match", self.scrutinee),
            self.cases.iter().flat_map(Renderable::to_fragments).collect(),
        )]
    }
}

/// Evaluates an expression into `Right`, turning the listed exceptions into `Left`.
#[derive(Debug, Clone)]
pub struct TryCatch {
    expr: String,
    exceptions: Vec<String>,
}

impl TryCatch {
    pub fn new(expr: impl Into<String>, exceptions: Vec<String>) -> Self {
        Self {
            expr: expr.into(),
            exceptions,
        }
    }
}

impl Renderable for TryCatch {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line(format!("try Right({})", self.expr)),
            CodeFragment::braced(
                "catch",
                self.exceptions
                    .iter()
                    .map(|e| CodeFragment::line(format!("case e: {} => Left(e)", e)))
                    .collect(),
            ),
        ]
    }
}
