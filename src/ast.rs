use super::*;

/// A user definition of a boolean function.
///
/// ``` text
/// .def xor(A, B) = A * /B + /A * B
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Def {
    name: Name,
    params: Vec<Name>,
    body: Expr,
}

impl Def {
    pub fn new(name: &str, params: Vec<Name>, body: Expr) -> Def {
        Def {
            name: name.to_string(),
            params,
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[Name] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }
}

impl std::fmt::Display for Def {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ".def {}({}) = {}", self.name, self.params.join(", "), self.body)
    }
}

/// An equation from the `.update` section. Eg, `C = xor(A, L')`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update {
    target: Name,
    value: Expr,
}

impl Update {
    pub fn new(target: &str, value: Expr) -> Update {
        Update {
            target: target.to_string(),
            value,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn value(&self) -> &Expr {
        &self.value
    }

    /// Evaluate the right hand side and bind the result to the target signal.
    pub fn eval(&self, env: &mut Environment) -> Result<(), HdlError> {
        let value = self.value.eval(env)?;
        trace!("    {} = {} => {}", self.target, self.value, value as u8);
        env.set_variable(&self.target, value);
        Ok(())
    }
}

impl std::fmt::Display for Update {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}

/// A parsed `.hw` program, exactly as written.
///
/// This is what the front end hands to [`Circuit::new`] and to [`crate::html::render_html`].
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub name: Name,
    pub inputs: Vec<Name>,
    pub outputs: Vec<Name>,
    pub latches: Vec<Name>,
    pub defs: Vec<Def>,
    pub updates: Vec<Update>,
    pub sim_inputs: Vec<Trace>,
}
