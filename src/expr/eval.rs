use super::*;

impl Expr {
    /// Evaluate the expression against the signal values bound in `env`.
    ///
    /// A call evaluates its arguments in `env`, then runs the body of the definition
    /// in a child environment holding only the parameters. The body never sees the
    /// caller's signals.
    pub fn eval(&self, env: &Environment) -> Result<bool, HdlError> {
        match self {
            Expr::Signal(name) => env.get_variable(name),
            Expr::And(e1, e2) => Ok(e1.eval(env)? && e2.eval(env)?),
            Expr::Or(e1, e2) => Ok(e1.eval(env)? || e2.eval(env)?),
            Expr::Not(e) => Ok(!e.eval(env)?),
            Expr::Call(name, args) => {
                let def = env.get_def(name)?;
                if def.arity() != args.len() {
                    return Err(HdlError::ArityMismatch(name.clone(), def.arity(), args.len()));
                }

                let values = args
                    .iter()
                    .map(|arg| arg.eval(env))
                    .collect::<Result<Vec<bool>, HdlError>>()?;

                let mut callee_env = env.child();
                for (param, value) in def.params().iter().zip(values) {
                    callee_env.set_variable(param, value);
                }
                def.body().eval(&callee_env)
            },
        }
    }
}
