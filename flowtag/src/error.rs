use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("CSV error in {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("cannot load configuration file {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },
    #[error("cannot read input")]
    Prompt(#[source] io::Error),
    #[error("no {0} given")]
    MissingInput(&'static str),
    #[error("cannot read report at line {line}")]
    ReportRead {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("malformed report at line {line}: {detail}")]
    Report { line: usize, detail: String },
}

impl TaggerError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TaggerError::Io {
            path: path.into(),
            source,
        }
    }
}
