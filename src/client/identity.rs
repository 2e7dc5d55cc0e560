//! Stable per-client identity
//!
//! The original client kept an anonymous id in browser storage; here it is a
//! small file next to the client, generated once and reused across sessions.
//! The id is opaque: the server only ever compares it for equality.

use std::fs;
use std::io;
use std::path::Path;

/// Load the persisted client id, or generate and persist a fresh one
pub fn load_or_create(path: &Path) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let id = contents.trim().to_string();
            if !id.is_empty() {
                return Ok(id);
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    let id = uuid::Uuid::new_v4().to_string();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &id)?;
    Ok(id)
}
