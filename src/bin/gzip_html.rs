use anyhow::Result;

use sitepack::batch;
use sitepack::config::{self, GzipArgs};

fn main() -> Result<()> {
    env_logger::init();

    let args: GzipArgs = config::parse_or_exit();

    println!("-- HTML gzip compression:");
    for report in batch::compress_dir(&args.input_dir, &args.output_dir)? {
        println!("  {report}");
    }
    Ok(())
}
