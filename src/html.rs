//! Renders a parsed program as an HTML page, typesetting the expressions with MathJax.
use super::*;

use std::fmt::{Display, Formatter, Result};

pub fn render_html(program: &Program) -> String {
    Html(program).to_string()
}

struct Html<'a>(&'a Program);

impl Display for Html<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let program = self.0;
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html><head><title> {}</title>", program.name)?;
        writeln!(f, "<script src = \"https://polyfill.io/v3/polyfill.min.js?features = es6\"></script>")?;
        writeln!(f, "<script type = \"text/javascript\" id = \"MathJax-script\" async src = \"https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-chtml.js\">")?;
        writeln!(f, "</script></head><body>")?;
        writeln!(f, "<h1>{}</h1>", program.name)?;

        writeln!(f, "<h2> Inputs </h2>")?;
        write_names(f, &program.inputs)?;
        writeln!(f, "<h2> Outputs </h2>")?;
        write_names(f, &program.outputs)?;
        writeln!(f, "<h2> Latches </h2>")?;
        write_names(f, &program.latches)?;

        writeln!(f, "<h2> Definitions </h2>")?;
        for def in &program.defs {
            writeln!(f, "\\(\\mathit{{{}}}({}) = {}\\)<br>", def.name(), def.params().join(","), Latex(def.body()))?;
        }

        writeln!(f, "<h2> Updates </h2>")?;
        for update in &program.updates {
            writeln!(f, "{}&larr;\\({}\\)<br>", update.target(), Latex(update.value()))?;
        }

        writeln!(f, "<h2> Simulation inputs </h2>")?;
        for trace in &program.sim_inputs {
            writeln!(f, "<b>{}</b>: {}<br>", trace.signal(), trace.bits())?;
        }

        writeln!(f, "</body></html>")
    }
}

fn write_names(f: &mut Formatter, names: &[Name]) -> Result {
    for name in names {
        write!(f, "{name} ")?;
    }
    writeln!(f)
}

struct Latex<'a>(&'a Expr);

impl Display for Latex<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.0 {
            Expr::Signal(name) => write!(f, "\\mathrm{{{name}}}"),
            Expr::And(e1, e2) => write!(f, "({}\\wedge {})", Latex(e1), Latex(e2)),
            Expr::Or(e1, e2) => write!(f, "({}\\vee {})", Latex(e1), Latex(e2)),
            Expr::Not(e) => write!(f, "\\neg({})", Latex(e)),
            Expr::Call(name, args) => {
                write!(f, "\\mathit{{{name}}}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", Latex(arg))?;
                }
                write!(f, ")")
            },
        }
    }
}
