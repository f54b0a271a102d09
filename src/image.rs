use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use log::debug;


/// Creates (or truncates) a sparse disk image of exactly `size` bytes.
///
/// # Arguments
/// * `path` - Path of the image file to create
/// * `size` - Length of the image in bytes
///
/// # Returns
/// `io::Result<()>` indicating success or failure
pub fn create_image<P>(path: P, size: u64) -> io::Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!("Opening {:?} for writing", path);
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    file.set_len(size)?;
    debug!("Set length of {:?} to {} bytes", path, size);
    Ok(())
}
