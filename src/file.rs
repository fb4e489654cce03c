use std::{fs::File, io, io::Read, path::Path};

/**
 * Read the entire file at the given path into memory. The file handle is dropped before this
 * function returns, whether the read succeeded or not.
 */
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes: Vec<u8> = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}
