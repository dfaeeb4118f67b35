use std::{
    fs,
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("unable to read input file {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to read input from stdin")]
    Stdin(#[from] io::Error),
}

/// Sets up `env_logger`, honouring `RUST_LOG` and falling back to `warn`.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

pub fn read_input_lines() -> Result<Vec<String>, InputError> {
    let stdin = io::stdin();

    stdin
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(InputError::from)
}

pub fn read_input_file(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();

    let body = fs::read_to_string(path).map_err(|source| InputError::File {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("read {} lines from {}", body.lines().count(), path.display());

    Ok(body.lines().map(str::to_string).collect())
}
