use super::*;


/// Where a [`Sim`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    /// Nothing has been evaluated yet.
    Uninitialized,
    /// The given cycle has been evaluated and its outputs recorded.
    Cycle(usize),
    /// Every cycle has been simulated.
    Done,
}

/// A cycle-by-cycle simulation of a [`Circuit`] over its simulation inputs.
///
/// Each cycle runs in a fixed order:
///
/// 1. Bind every input to its trace value for the cycle.
/// 2. Latch: every latch output takes the value its latch input had at the end of
///    the previous cycle. At cycle 0 latch outputs are reset to `0` instead.
/// 3. Evaluate every update, in declaration order.
/// 4. Record every output.
///
/// Step 2 must come before step 3, since the updates recompute the latch inputs.
pub struct Sim<'a> {
    circuit: &'a Circuit,
    env: Environment<'a>,
    state: SimState,
    outputs: Vec<Trace>,
}

impl<'a> Sim<'a> {
    pub fn new(circuit: &'a Circuit) -> Sim<'a> {
        Sim {
            circuit,
            env: Environment::new(circuit.definitions()),
            state: SimState::Uninitialized,
            outputs: Sim::empty_outputs(circuit),
        }
    }

    fn empty_outputs(circuit: &Circuit) -> Vec<Trace> {
        circuit
            .outputs()
            .iter()
            .map(|output| Trace::undefined(output, circuit.sim_length()))
            .collect()
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn env(&self) -> &Environment<'a> {
        &self.env
    }

    /// The current value of a signal.
    pub fn peek(&self, signal: &str) -> Result<bool, HdlError> {
        self.env.get_variable(signal)
    }

    /// The output traces recorded so far. Cycles not yet simulated are unset.
    pub fn outputs(&self) -> &[Trace] {
        &self.outputs
    }

    pub fn into_outputs(self) -> Vec<Trace> {
        self.outputs
    }

    /// Start over and simulate cycle 0.
    pub fn reset(&mut self) -> Result<(), HdlError> {
        let circuit = self.circuit;
        self.env = Environment::new(circuit.definitions());
        self.outputs = Sim::empty_outputs(circuit);

        self.poke_inputs(0)?;

        if circuit.sim_length() == 0 {
            info!("Circuit {} has no simulation cycles", circuit.name());
            self.state = SimState::Done;
            return Ok(());
        }

        for latch in circuit.latches() {
            self.env.set_variable(&latch_output(latch), false);
        }

        self.eval_updates().map_err(|e| e.at_cycle(0))?;
        self.record_outputs(0).map_err(|e| e.at_cycle(0))?;
        debug!("cycle 0: {}", self.env);
        self.state = SimState::Cycle(0);
        Ok(())
    }

    /// Advance to the next cycle.
    ///
    /// An uninitialized simulation is reset. Once the last cycle has been simulated,
    /// the simulation moves to [`SimState::Done`] and further clocks do nothing.
    pub fn clock(&mut self) -> Result<(), HdlError> {
        match self.state {
            SimState::Uninitialized => self.reset(),
            SimState::Cycle(cycle) if cycle + 1 >= self.circuit.sim_length() => {
                self.state = SimState::Done;
                Ok(())
            },
            SimState::Cycle(cycle) => self.next_cycle(cycle + 1),
            SimState::Done => Ok(()),
        }
    }

    /// Simulate every remaining cycle.
    pub fn run(&mut self) -> Result<(), HdlError> {
        while self.state != SimState::Done {
            self.clock()?;
        }
        info!("Simulated {} cycles of {}", self.circuit.sim_length(), self.circuit.name());
        Ok(())
    }

    fn next_cycle(&mut self, cycle: usize) -> Result<(), HdlError> {
        self.poke_inputs(cycle)?;
        self.latch().map_err(|e| e.at_cycle(cycle))?;
        self.eval_updates().map_err(|e| e.at_cycle(cycle))?;
        self.record_outputs(cycle).map_err(|e| e.at_cycle(cycle))?;
        debug!("cycle {cycle}: {}", self.env);
        self.state = SimState::Cycle(cycle);
        Ok(())
    }

    fn poke_inputs(&mut self, cycle: usize) -> Result<(), HdlError> {
        let circuit = self.circuit;
        for input in circuit.inputs() {
            let value = circuit
                .sim_input(input)
                .and_then(|trace| trace.get(cycle))
                .ok_or_else(|| HdlError::MissingSimInput(input.clone(), cycle))?;
            self.env.set_variable(input, value);
        }
        Ok(())
    }

    fn latch(&mut self) -> Result<(), HdlError> {
        for latch in self.circuit.latches() {
            let value = self.env.get_variable(latch)?;
            self.env.set_variable(&latch_output(latch), value);
        }
        Ok(())
    }

    fn eval_updates(&mut self) -> Result<(), HdlError> {
        for update in self.circuit.updates() {
            update.eval(&mut self.env)?;
        }
        Ok(())
    }

    fn record_outputs(&mut self, cycle: usize) -> Result<(), HdlError> {
        for (output, trace) in self.circuit.outputs().iter().zip(self.outputs.iter_mut()) {
            trace.set(cycle, self.env.get_variable(output)?);
        }
        Ok(())
    }
}
