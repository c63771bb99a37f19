use super::*;

/// A named sequence of bits, one per simulation cycle.
///
/// Simulation inputs are fully defined. Output traces start out with every cell
/// unset and are filled in as the simulation runs; an unset cell prints as `X`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    signal: Name,
    values: Vec<Option<bool>>,
}

impl Trace {
    pub fn new(signal: &str, values: Vec<bool>) -> Trace {
        Trace {
            signal: signal.to_string(),
            values: values.into_iter().map(Some).collect(),
        }
    }

    /// A trace of `len` cycles with no values set yet.
    pub fn undefined(signal: &str, len: usize) -> Trace {
        Trace {
            signal: signal.to_string(),
            values: vec![None; len],
        }
    }

    /// Convert a bit string such as `"0110"` into a trace.
    pub fn from_bits(signal: &str, bits: &str) -> Result<Trace, HdlError> {
        let values = bits
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(HdlError::InvalidTrace(signal.to_string(), c)),
            })
            .collect::<Result<Vec<bool>, HdlError>>()?;
        Ok(Trace::new(signal, values))
    }

    pub fn signal(&self) -> &str {
        &self.signal
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value at `cycle`, or `None` if it is out of range or unset.
    pub fn get(&self, cycle: usize) -> Option<bool> {
        self.values.get(cycle).copied().flatten()
    }

    /// Record the value for `cycle`. The cycle must be within the trace.
    pub fn set(&mut self, cycle: usize, value: bool) {
        self.values[cycle] = Some(value);
    }

    /// The bits as text, one character per cycle.
    pub fn bits(&self) -> String {
        self.values
            .iter()
            .map(|value| match value {
                Some(true) => '1',
                Some(false) => '0',
                None => 'X',
            })
            .collect()
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.bits(), self.signal)
    }
}

#[test]
fn trace_bits() {
    let trace = Trace::from_bits("A", "101").unwrap();
    assert_eq!(trace.len(), 3);
    assert_eq!(trace.get(0), Some(true));
    assert_eq!(trace.get(1), Some(false));
    assert_eq!(trace.get(3), None);
    assert_eq!(trace.bits(), "101");
    assert_eq!(trace.to_string(), "101 A");

    let mut output = Trace::undefined("B", 3);
    assert_eq!(output.to_string(), "XXX B");
    output.set(1, true);
    assert_eq!(output.bits(), "X1X");

    assert!(matches!(Trace::from_bits("A", "10a"), Err(HdlError::InvalidTrace(_, 'a'))));
}
