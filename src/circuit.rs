use super::*;

/// Name of the register output of a latch: the latch name with a `'` appended.
pub fn latch_output(latch: &str) -> Name {
    format!("{latch}'")
}

/// A circuit ready for simulation.
///
/// Built once from a [`Program`]. The syntactic parts never change afterwards. Only
/// the output traces are written, by [`Circuit::run_simulator`].
#[derive(Debug, Clone)]
pub struct Circuit {
    name: Name,
    inputs: Vec<Name>,
    outputs: Vec<Name>,
    latches: Vec<Name>,
    definitions: Definitions,
    updates: Vec<Update>,
    sim_inputs: Vec<Trace>,
    sim_outputs: Vec<Trace>,
    sim_length: usize,
}

impl Circuit {
    /// Build a circuit from a parsed program.
    ///
    /// The number of simulation cycles is the length of the first simulation input.
    /// Every other simulation input must have that same length.
    pub fn new(program: Program) -> Result<Circuit, HdlError> {
        let Program { name, inputs, outputs, latches, defs, updates, sim_inputs } = program;

        let sim_length = sim_inputs.first().map(|trace| trace.len()).unwrap_or(0);
        for trace in &sim_inputs {
            if trace.len() != sim_length {
                return Err(HdlError::UnequalTraceLengths(trace.signal().to_string(), sim_length, trace.len()));
            }
        }

        let sim_outputs = outputs
            .iter()
            .map(|output| Trace::undefined(output, sim_length))
            .collect();

        info!(
            "Circuit {name}: {} inputs, {} outputs, {} latches, {} definitions, {} updates, {sim_length} cycles",
            inputs.len(),
            outputs.len(),
            latches.len(),
            defs.len(),
            updates.len(),
        );

        Ok(Circuit {
            name,
            inputs,
            outputs,
            latches,
            definitions: defs.into_iter().collect(),
            updates,
            sim_inputs,
            sim_outputs,
            sim_length,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &[Name] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Name] {
        &self.outputs
    }

    pub fn latches(&self) -> &[Name] {
        &self.latches
    }

    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    pub fn updates(&self) -> &[Update] {
        &self.updates
    }

    pub fn sim_inputs(&self) -> &[Trace] {
        &self.sim_inputs
    }

    pub fn sim_outputs(&self) -> &[Trace] {
        &self.sim_outputs
    }

    pub fn sim_length(&self) -> usize {
        self.sim_length
    }

    /// The simulation input driving `signal`, if there is one.
    pub fn sim_input(&self, signal: &str) -> Option<&Trace> {
        self.sim_inputs.iter().find(|trace| trace.signal() == signal)
    }

    /// Simulate every cycle and store the results in [`Circuit::sim_outputs`].
    pub fn run_simulator(&mut self) -> Result<(), HdlError> {
        let outputs = {
            let mut sim = Sim::new(self);
            sim.run()?;
            sim.into_outputs()
        };
        self.sim_outputs = outputs;
        Ok(())
    }
}
