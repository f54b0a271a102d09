use std::path::PathBuf;

use clap::Parser;
use log::info;

mod image;
mod util;

use crate::util::{parse_size, Result};


/// Creates a new empty disk image file of the specified size
#[derive(Debug, Parser)]
#[command(name = "mkimage", version)]
#[command(bin_name = "mkimage")]
struct MkImageCLI {
    /// The path to the disk image file to create
    path: PathBuf,
    /// The size of the file. The default is bytes, however the suffixes K, M,
    /// and G can be used
    #[arg(allow_hyphen_values = true)]
    size: String,
}


fn main() -> Result<()> {
    pretty_env_logger::init();
    let args = MkImageCLI::parse();

    let size = match parse_size(&args.size) {
        Ok(size) => size,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };

    image::create_image(&args.path, size)?;
    info!("Created image {} with size {} bytes", args.path.display(), size);
    Ok(())
}
