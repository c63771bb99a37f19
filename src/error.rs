use super::*;

/// Every way parsing or simulating a circuit can fail.
///
/// All of these are fatal to a run: the simulator stops at the first one and
/// hands it back to the caller.
#[derive(Debug, Clone)]
pub enum HdlError {
    /// The text is not a well-formed `.hw` program.
    Parse(Loc, String),
    /// An expression referenced a signal that has no value in its environment.
    UnboundSignal(Name),
    /// A call referenced a function that was never defined.
    UndefinedFunction(Name),
    /// A call supplied the wrong number of arguments: function, expected, found.
    ArityMismatch(Name, usize, usize),
    /// An input signal has no trace, or its trace is too short for the cycle.
    MissingSimInput(Name, usize),
    /// A simulation input does not have the length of the first one: signal, expected, found.
    UnequalTraceLengths(Name, usize, usize),
    /// A bit string contained something other than `0` or `1`.
    InvalidTrace(Name, char),
    /// An error raised while evaluating the given cycle.
    Cycle(usize, Box<HdlError>),
}

impl HdlError {
    /// Strips off any [`HdlError::Cycle`] context.
    pub fn root(&self) -> &HdlError {
        match self {
            HdlError::Cycle(_cycle, inner) => inner.root(),
            _ => self,
        }
    }

    pub(crate) fn at_cycle(self, cycle: usize) -> HdlError {
        match self {
            HdlError::Cycle(..) => self,
            _ => HdlError::Cycle(cycle, Box::new(self)),
        }
    }
}

impl std::fmt::Display for HdlError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HdlError::Parse(loc, message) => write!(f, "{loc}: {message}"),
            HdlError::UnboundSignal(name) => write!(f, "Signal not defined: {name}"),
            HdlError::UndefinedFunction(name) => write!(f, "Function not defined: {name}"),
            HdlError::ArityMismatch(name, expected, found) => {
                write!(f, "Function {name} expects {expected} arguments but was given {found}")
            },
            HdlError::MissingSimInput(name, 0) => {
                write!(f, "Simulation input not defined or has length 0 for input signal: {name}")
            },
            HdlError::MissingSimInput(name, cycle) => {
                write!(f, "Simulation input not defined for input signal: {name} at cycle {cycle}")
            },
            HdlError::UnequalTraceLengths(name, expected, found) => {
                write!(f, "Simulation input {name} has length {found} but expected {expected}")
            },
            HdlError::InvalidTrace(name, c) => write!(f, "Simulation input {name} contains {c:?}, expected 0 or 1"),
            HdlError::Cycle(cycle, inner) => write!(f, "cycle {cycle}: {inner}"),
        }
    }
}

impl std::error::Error for HdlError {}
