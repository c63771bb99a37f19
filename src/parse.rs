use super::*;

use anyhow::Context;
use lalrpop_util::lalrpop_mod;
use lalrpop_util::{lexer::Token, ParseError};
lalrpop_mod!(
    #[allow(clippy::all, unused)]
    grammar
);

pub fn load_program_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Program> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Couldn't read {}", path.as_ref().display()))?;
    let source_info = SourceInfo::from_file(path.as_ref(), &text);
    Ok(program_from_string(&source_info, &text)?)
}

pub fn parse_program(text: &str) -> Result<Program, HdlError> {
    let source_info = SourceInfo::from_string(text);
    program_from_string(&source_info, text)
}

fn program_from_string(source_info: &SourceInfo, text: &str) -> Result<Program, HdlError> {
    let program = grammar::ProgramParser::new()
        .parse(source_info, text)
        .map_err(|error| to_hdl_error(source_info, error))?;
    info!("Parsed circuit {}", program.name);
    Ok(program)
}

fn to_hdl_error(source_info: &SourceInfo, error: ParseError<usize, Token<'_>, HdlError>) -> HdlError {
    match error {
        ParseError::InvalidToken { location } => {
            HdlError::Parse(Loc::from(source_info, location, location), "Parse error: Invalid token".to_string())
        },
        ParseError::UnrecognizedEof { location, expected } => {
            let message = format!("Parse error: Unexpected end of input. Expected one of {}", expected.join(" "));
            HdlError::Parse(Loc::from(source_info, location, location), message)
        },
        ParseError::UnrecognizedToken { token: (start, token, end), expected } => {
            let message = format!("Parse error: Unexpected {:?}. Expected one of {}", token.1, expected.join(" "));
            HdlError::Parse(Loc::from(source_info, start, end), message)
        },
        ParseError::ExtraToken { token: (start, token, end) } => {
            let message = format!("Parse error: Unexpected {:?}", token.1);
            HdlError::Parse(Loc::from(source_info, start, end), message)
        },
        ParseError::User { error } => error,
    }
}

impl std::str::FromStr for Expr {
    type Err = HdlError;

    fn from_str(text: &str) -> Result<Expr, HdlError> {
        let source_info = SourceInfo::from_string(text);
        grammar::ExprParser::new()
            .parse(&source_info, text)
            .map_err(|error| to_hdl_error(&source_info, error))
    }
}
