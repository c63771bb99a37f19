use super::*;

use serde_json::{json, Value};

/// One line per trace, `<bits> <signal>`, for the given traces.
pub fn trace_lines(traces: &[Trace]) -> String {
    let mut out = String::new();
    for trace in traces {
        out.push_str(&trace.to_string());
        out.push('\n');
    }
    out
}

/// Simulation inputs followed by simulation outputs.
pub fn text_report(circuit: &Circuit) -> String {
    let mut out = trace_lines(circuit.sim_inputs());
    out.push_str(&trace_lines(circuit.sim_outputs()));
    out
}

pub fn json_report(circuit: &Circuit) -> Value {
    let traces = |traces: &[Trace]| -> Vec<Value> {
        traces
            .iter()
            .map(|trace| json!({ "signal": trace.signal(), "bits": trace.bits() }))
            .collect()
    };

    json!({
        "circuit": circuit.name(),
        "length": circuit.sim_length(),
        "inputs": traces(circuit.sim_inputs()),
        "outputs": traces(circuit.sim_outputs()),
    })
}
