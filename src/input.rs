// std imports
use std::{
    fmt,
    fs::{self, File},
    io::{self, BufRead, BufReader, stdin},
    path::PathBuf,
};

// local imports
use crate::error::{Error, Result};

// ---

pub type InputStream = Box<dyn BufRead + Send>;

// ---

/// A reference to an input file or stdin.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Opens the input for reading.
    pub fn open(&self) -> Result<Input> {
        let stream: InputStream = match self {
            Self::Stdin => Box::new(BufReader::new(stdin())),
            Self::File(path) => {
                let meta = fs::metadata(path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => Error::FileNotFoundError {
                        filename: path.to_string_lossy().into(),
                    },
                    _ => io::Error::new(
                        e.kind(),
                        format!("failed to get information on {}: {}", self.description(), e),
                    )
                    .into(),
                })?;
                if meta.is_dir() {
                    return Err(Error::IsDirectory {
                        filename: path.to_string_lossy().into(),
                    });
                }
                let file = File::open(path)
                    .map_err(|e| io::Error::new(e.kind(), format!("failed to open {}: {}", self.description(), e)))?;
                Box::new(BufReader::new(file))
            }
        };

        log::debug!("opened {}", self.description());

        Ok(Input::new(self.clone(), stream))
    }

    /// Returns a description of the input reference.
    pub fn description(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".into(),
            Self::File(path) => format!("file {:?}", path),
        }
    }
}

impl From<PathBuf> for InputReference {
    /// Converts a command line argument, `-` stands for stdin.
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

// ---

/// An opened input.
pub struct Input {
    pub reference: InputReference,
    pub stream: InputStream,
}

impl Input {
    pub fn new(reference: InputReference, stream: InputStream) -> Self {
        Self { reference, stream }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input").field("reference", &self.reference).finish_non_exhaustive()
    }
}
