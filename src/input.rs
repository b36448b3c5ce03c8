use std::io::Read;

use tracing::debug;

use crate::jwt::Error;

/// Picks the token from the argument, falling back to `stdin`.
///
/// A terminal on stdin is never read from; the caller gets
/// [`Error::MissingToken`] instead of a prompt that waits for EOF.
pub fn resolve_token<R: Read>(
    arg: Option<&str>,
    mut stdin: R,
    stdin_is_terminal: bool,
) -> Result<String, Error> {
    if let Some(token) = arg.map(str::trim).filter(|t| !t.is_empty()) {
        debug!("reading token from argument");
        return Ok(token.to_string());
    }

    if stdin_is_terminal {
        return Err(Error::MissingToken);
    }

    debug!("reading token from stdin");
    let mut buf = String::new();
    stdin.read_to_string(&mut buf).map_err(Error::ReadStdin)?;

    match buf.trim() {
        "" => Err(Error::MissingToken),
        token => Ok(token.to_string()),
    }
}
