use super::*;

mod eval;

/// A boolean expression over single-bit signals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// A reference to a signal. Eg, `A` or the latch output `L'`.
    Signal(Name),
    /// Logical and. Eg, `A * B`.
    And(Box<Expr>, Box<Expr>),
    /// Logical or. Eg, `A + B`.
    Or(Box<Expr>, Box<Expr>),
    /// Logical not. Eg, `/A`.
    Not(Box<Expr>),
    /// A call to a user definition. Eg, `xor(A, /B)`.
    Call(Name, Vec<Expr>),
}

impl Expr {
    pub fn signal(name: &str) -> Expr {
        Expr::Signal(name.to_string())
    }

    pub fn and(e1: Expr, e2: Expr) -> Expr {
        Expr::And(Box::new(e1), Box::new(e2))
    }

    pub fn or(e1: Expr, e2: Expr) -> Expr {
        Expr::Or(Box::new(e1), Box::new(e2))
    }

    pub fn not(e: Expr) -> Expr {
        Expr::Not(Box::new(e))
    }

    pub fn call(name: &str, args: Vec<Expr>) -> Expr {
        Expr::Call(name.to_string(), args)
    }

    /// Walk the expression tree in-order, calling `callback` for each subexpression.
    pub fn with_subexprs(&self, callback: &mut dyn FnMut(&Expr)) {
        callback(self);
        match self {
            Expr::Signal(_name) => (),
            Expr::And(e1, e2) | Expr::Or(e1, e2) => {
                e1.with_subexprs(callback);
                e2.with_subexprs(callback);
            },
            Expr::Not(e) => e.with_subexprs(callback),
            Expr::Call(_name, args) => {
                for arg in args {
                    arg.with_subexprs(callback);
                }
            },
        }
    }

    /// The signals this expression reads, sorted and without duplicates.
    pub fn signals(&self) -> Vec<Name> {
        let mut results = vec![];
        self.with_subexprs(&mut |e: &Expr| {
            if let Expr::Signal(name) = e {
                results.push(name.clone());
            }
        });
        results.sort();
        results.dedup();
        results
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Expr::Signal(name) => write!(f, "{name}"),
            Expr::And(e1, e2) => write!(f, "({e1} * {e2})"),
            Expr::Or(e1, e2) => write!(f, "({e1} + {e2})"),
            Expr::Not(e) => write!(f, "/{e}"),
            Expr::Call(name, args) => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    write!(f, "{arg}")?;
                    if i + 1 < args.len() {
                        write!(f, ", ")?;
                    }
                }
                write!(f, ")")
            },
        }
    }
}
