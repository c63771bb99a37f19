use super::*;

const XOR: &str = "
    .hardware xor_gate
    .inputs A B
    .outputs C
    // exclusive or
    .def xor(A, B) = A * /B + /A * B
    .update
    C = xor(A, B)
    .simulate
    A = 0011
    B = 0101
";

const COUNTER: &str = "
    .hardware counter
    .inputs Reset
    .outputs C0 C1
    .latches L0 L1
    /* two bit counter, C1 is the high bit */
    .def xor(A, B) = A * /B + /A * B
    .update
    C0 = L0'
    C1 = L1'
    L0 = /Reset * /L0'
    L1 = /Reset * xor(L1', L0')
    .simulate
    Reset = 10000001
";

fn eval_with(expr: &Expr, definitions: &Definitions, bindings: &[(&str, bool)]) -> Result<bool, HdlError> {
    let mut env = Environment::new(definitions);
    for (name, value) in bindings {
        env.set_variable(name, *value);
    }
    expr.eval(&env)
}

fn xor_def() -> Def {
    let body: Expr = "A * /B + /A * B".parse().unwrap();
    Def::new("xor", vec!["A".to_string(), "B".to_string()], body)
}

#[test]
fn parse_xor() {
    let program = parse_program(XOR).unwrap();
    assert_eq!(program.name, "xor_gate");
    assert_eq!(program.inputs, vec!["A", "B"]);
    assert_eq!(program.outputs, vec!["C"]);
    assert!(program.latches.is_empty());
    assert_eq!(program.defs, vec![xor_def()]);
    assert_eq!(program.updates.len(), 1);
    assert_eq!(program.updates[0].to_string(), "C = xor(A, B)");
    assert_eq!(program.sim_inputs.len(), 2);
    assert_eq!(program.sim_inputs[1].to_string(), "0101 B");
}

#[test]
fn parse_precedence() {
    let tests = vec![
        ("A", "A"),
        ("/A", "/A"),
        ("A + B * C", "(A + (B * C))"),
        ("A * B + C", "((A * B) + C)"),
        ("/A * B", "(/A * B)"),
        ("/(A * B)", "/(A * B)"),
        ("A + B + C", "((A + B) + C)"),
        ("A * (B + C)", "(A * (B + C))"),
        ("f(A, /B * C)", "f(A, (/B * C))"),
        ("L' * /L'", "(L' * /L')"),
        ("f()", "f()"),
    ];

    for (text, expected) in tests {
        let expr: Expr = text.parse().unwrap();
        assert_eq!(expr.to_string(), expected, "{text} parsed as {expr}");
    }
}

#[test]
fn parse_latches() {
    let program = parse_program(COUNTER).unwrap();
    assert_eq!(program.latches, vec!["L0", "L1"]);
    assert_eq!(program.updates[0].value(), &Expr::signal("L0'"));
    assert_eq!(program.updates[3].target(), "L1");
}

#[test]
fn parse_errors() {
    let err = parse_program(".hardware top\n.inputs A\n.outputs B\n.update\nB = A *\n.simulate\nA = 01\n").unwrap_err();
    match err {
        HdlError::Parse(loc, message) => {
            assert_eq!(loc.start().line(), 6);
            assert!(message.contains("Unexpected"), "{message}");
        },
        _ => panic!("Expected a parse error, got {err:?}"),
    }

    assert!(matches!(parse_program(".hardware top\n.inputs A\n"), Err(HdlError::Parse(..))));
    assert!(matches!(parse_program(".hardware top .inputs A .outputs B .update B = A .simulate A = 012"), Err(HdlError::Parse(..))));
    assert!(matches!("A +".parse::<Expr>(), Err(HdlError::Parse(..))));
}

#[test]
fn eval_truth_tables() {
    let definitions: Definitions = vec![xor_def()].into_iter().collect();
    let and = Expr::and(Expr::signal("A"), Expr::signal("B"));
    let or = Expr::or(Expr::signal("A"), Expr::signal("B"));
    let not = Expr::not(Expr::signal("A"));
    let xor = Expr::call("xor", vec![Expr::signal("A"), Expr::signal("B")]);

    for a in [false, true] {
        for b in [false, true] {
            let bindings = [("A", a), ("B", b)];
            assert_eq!(eval_with(&and, &definitions, &bindings).unwrap(), a && b);
            assert_eq!(eval_with(&or, &definitions, &bindings).unwrap(), a || b);
            assert_eq!(eval_with(&not, &definitions, &bindings).unwrap(), !a);
            assert_eq!(eval_with(&xor, &definitions, &bindings).unwrap(), a ^ b, "xor({a}, {b})");
        }
    }
}

#[test]
fn eval_call_arguments_in_caller() {
    // The arguments are evaluated where the call is, then bound by position.
    let definitions: Definitions = vec![
        xor_def(),
        Def::new("nand", vec!["X".to_string(), "Y".to_string()], "/(X * Y)".parse().unwrap()),
        Def::new("xnor", vec!["B".to_string(), "A".to_string()], "/xor(B, A)".parse().unwrap()),
    ].into_iter().collect();

    let expr: Expr = "nand(xor(A, B), A)".parse().unwrap();
    assert_eq!(eval_with(&expr, &definitions, &[("A", true), ("B", false)]).unwrap(), false);
    assert_eq!(eval_with(&expr, &definitions, &[("A", true), ("B", true)]).unwrap(), true);

    let expr: Expr = "xnor(A, /A)".parse().unwrap();
    assert_eq!(eval_with(&expr, &definitions, &[("A", true)]).unwrap(), false);
}

#[test]
fn eval_scope_isolation() {
    let definitions: Definitions = vec![
        Def::new("f", vec!["X".to_string()], "X * Y".parse().unwrap()),
    ].into_iter().collect();

    let expr: Expr = "f(A)".parse().unwrap();
    let result = eval_with(&expr, &definitions, &[("A", true), ("X", true), ("Y", true)]);
    assert!(matches!(result, Err(HdlError::UnboundSignal(ref name)) if name == "Y"), "{result:?}");
}

#[test]
fn eval_errors() {
    let definitions: Definitions = vec![xor_def()].into_iter().collect();

    let result = eval_with(&Expr::signal("A"), &definitions, &[]);
    assert!(matches!(result, Err(HdlError::UnboundSignal(ref name)) if name == "A"));

    let expr: Expr = "and(A, A)".parse().unwrap();
    let result = eval_with(&expr, &definitions, &[("A", true)]);
    assert!(matches!(result, Err(HdlError::UndefinedFunction(ref name)) if name == "and"));

    let expr: Expr = "xor(A)".parse().unwrap();
    let result = eval_with(&expr, &definitions, &[("A", true)]);
    assert!(matches!(result, Err(HdlError::ArityMismatch(ref name, 2, 1)) if name == "xor"));

    let expr: Expr = "xor(A, A, A)".parse().unwrap();
    let result = eval_with(&expr, &definitions, &[("A", true)]);
    assert!(matches!(result, Err(HdlError::ArityMismatch(_, 2, 3))));
}

#[test]
fn environment() {
    let definitions: Definitions = vec![
        xor_def(),
        Def::new("xor", vec!["P".to_string(), "Q".to_string()], "P + Q".parse().unwrap()),
    ].into_iter().collect();
    assert_eq!(definitions.len(), 2);
    assert_eq!(definitions.get("xor").unwrap().params(), &["P".to_string(), "Q".to_string()]);

    let mut env = Environment::new(&definitions);
    assert!(!env.has_variable("A"));
    env.set_variable("A", true);
    env.set_variable("A", false);
    assert!(env.has_variable("A"));
    assert_eq!(env.get_variable("A").unwrap(), false);
    assert_eq!(env.to_string(), "[A : 0]");

    let child = env.child();
    assert!(!child.has_variable("A"));
    assert!(child.get_def("xor").is_ok());
    assert!(matches!(child.get_def("nor"), Err(HdlError::UndefinedFunction(_))));
}

#[test]
fn update_eval() {
    let definitions = Definitions::new();
    let mut env = Environment::new(&definitions);
    env.set_variable("A", true);
    env.set_variable("B", true);

    let update = Update::new("B", "/A".parse().unwrap());
    update.eval(&mut env).unwrap();
    assert_eq!(env.get_variable("B").unwrap(), false);

    let update = Update::new("C", "Z".parse().unwrap());
    assert!(matches!(update.eval(&mut env), Err(HdlError::UnboundSignal(_))));
    assert!(!env.has_variable("C"));
}

#[test]
fn expr_signals() {
    let expr: Expr = "xor(A, L') * /A + B".parse().unwrap();
    assert_eq!(expr.signals(), vec!["A", "B", "L'"]);
}

#[test]
fn end_to_end_xor() {
    let mut circuit = Circuit::new(parse_program(XOR).unwrap()).unwrap();
    circuit.run_simulator().unwrap();
    assert_eq!(report::text_report(&circuit), "0011 A\n0101 B\n0110 C\n");
}

#[test]
fn end_to_end_counter() {
    let mut circuit = Circuit::new(parse_program(COUNTER).unwrap()).unwrap();
    circuit.run_simulator().unwrap();
    let outputs: Vec<String> = circuit.sim_outputs().iter().map(|trace| trace.bits()).collect();
    // cycle:  01234567
    assert_eq!(outputs, vec![
        "00101010".to_string(),
        "00011001".to_string(),
    ]);
}

#[test]
fn render_html() {
    let html = html::render_html(&parse_program(COUNTER).unwrap());
    assert!(html.starts_with("<!DOCTYPE html>\n<html><head><title> counter</title>"));
    assert!(html.contains("<h1>counter</h1>"));
    assert!(html.contains("<h2> Latches </h2>\nL0 L1 \n"));
    assert!(html.contains("\\(\\mathit{xor}(A,B) = ((\\mathrm{A}\\wedge \\neg(\\mathrm{B}))\\vee (\\neg(\\mathrm{A})\\wedge \\mathrm{B}))\\)<br>"));
    assert!(html.contains("L1&larr;\\((\\neg(\\mathrm{Reset})\\wedge \\mathit{xor}(\\mathrm{L1'},\\mathrm{L0'}))\\)<br>"));
    assert!(html.contains("<b>Reset</b>: 10000001<br>"));
    assert!(html.ends_with("</body></html>\n"));
}

#[test]
fn render_html_without_simulation() {
    // Rendering doesn't care whether the simulation inputs make sense.
    let program = parse_program(".hardware broken .inputs A B .outputs C .update C = A .simulate A = 01 B = 1").unwrap();
    assert!(html::render_html(&program).contains("<b>B</b>: 1<br>"));
    assert!(matches!(Circuit::new(program), Err(HdlError::UnequalTraceLengths(..))));
}

#[test]
fn json_report() {
    let mut circuit = Circuit::new(parse_program(XOR).unwrap()).unwrap();
    circuit.run_simulator().unwrap();
    let report = report::json_report(&circuit);
    assert_eq!(report["circuit"], "xor_gate");
    assert_eq!(report["length"], 4);
    assert_eq!(report["inputs"][0]["signal"], "A");
    assert_eq!(report["outputs"][0]["bits"], "0110");
}
