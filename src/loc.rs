use std::sync::Arc;

type Pos = usize;

/// A [`SourceInfo`] records where a parsed text came from.
/// Maintains the filename (if from a file) and the line lengths of the text,
/// so byte positions reported by the parser can be turned into a [`LineCol`].
#[derive(Clone, Debug)]
pub struct SourceInfo {
    source: Source,
    linelens: LineLens,
}

impl SourceInfo {
    pub fn unknown() -> SourceInfo {
        SourceInfo {
            source: Source::Unknown,
            linelens: LineLens::from(""),
        }
    }

    pub fn from_file(filepath: &std::path::Path, contents: &str) -> SourceInfo {
        SourceInfo {
            source: Source::File(Arc::new(filepath.to_owned())),
            linelens: LineLens::from(contents),
        }
    }

    pub fn from_string(contents: &str) -> SourceInfo {
        SourceInfo {
            source: Source::String,
            linelens: LineLens::from(contents),
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn linecol_from(&self, pos: Pos) -> LineCol {
        self.linelens.linecol(pos)
    }
}

#[derive(Clone, Debug)]
pub enum Source {
    File(Arc<std::path::PathBuf>),
    String,
    Unknown,
}

/// A [`LineCol`] is a container for a line and column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineCol(usize, usize);

impl LineCol {
    /// The line number. Starts with line 1.
    pub fn line(&self) -> usize {
        self.0 + 1
    }

    /// The column. Starts with column 1.
    pub fn col(&self) -> usize {
        self.1 + 1
    }
}

impl std::fmt::Display for LineCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}:{}", self.line(), self.col())
    }
}

/// A [`Loc`] tracks the span of something in a parsed source.
#[derive(Clone, Debug)]
pub struct Loc {
    start: Pos,
    end: Pos,
    source_info: SourceInfo,
}

impl Loc {
    /// When the location of something is unknown, you can use this.
    pub fn unknown() -> Loc {
        Loc {
            start: 0,
            end: 0,
            source_info: SourceInfo::unknown(),
        }
    }

    pub fn from(source_info: &SourceInfo, start: Pos, end: Pos) -> Loc {
        Loc {
            start,
            end,
            source_info: source_info.clone(),
        }
    }

    /// The start of the span.
    pub fn start(&self) -> LineCol {
        self.source_info.linecol_from(self.start)
    }

    /// The end of the span.
    pub fn end(&self) -> LineCol {
        self.source_info.linecol_from(self.end)
    }
}

impl std::fmt::Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self.source_info.source() {
            Source::File(path) => write!(f, "{}:{}", path.display(), self.start()),
            Source::String => write!(f, "{}", self.start()),
            Source::Unknown => write!(f, "<unknown>"),
        }
    }
}

#[derive(Clone, Debug)]
struct LineLens(Vec<usize>);

impl LineLens {
    fn from(text: &str) -> LineLens {
        let mut lens = vec![];
        for line in text.split('\n') {
            lens.push(line.len() + 1);
        }
        LineLens(lens)
    }

    fn linecol(&self, pos: Pos) -> LineCol {
        let mut line = 0;
        let mut col = pos;
        for line_len in &self.0 {
            if col >= *line_len {
                col -= *line_len;
                line += 1;
            } else {
                break
            }
        }
        LineCol(line, col)
    }
}

#[test]
fn linelens() {
    let text = ".hardware top
.inputs A
.outputs B";

    let linelens = LineLens::from(text);
    assert_eq!(linelens.linecol(0).to_string(), "1:1");
    assert_eq!(linelens.linecol(10).to_string(), "1:11");
    assert_eq!(linelens.linecol(13).to_string(), "1:14");
    assert_eq!(linelens.linecol(14).to_string(), "2:1");
    assert_eq!(linelens.linecol(22).to_string(), "2:9");
    assert_eq!(linelens.linecol(24).to_string(), "3:1");
}

#[test]
fn loc_display() {
    let text = ".hardware top\n.inputs A\n";
    let info = SourceInfo::from_string(text);
    assert_eq!(Loc::from(&info, 15, 16).to_string(), "2:2");

    let info = SourceInfo::from_file(std::path::Path::new("circuits/top.hw"), text);
    assert_eq!(Loc::from(&info, 0, 9).to_string(), "circuits/top.hw:1:1");
    assert_eq!(Loc::unknown().to_string(), "<unknown>");
}
