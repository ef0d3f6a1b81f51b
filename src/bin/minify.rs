use anyhow::Result;

use sitepack::batch;
use sitepack::config::{self, MinifyArgs};
use sitepack::minify::Minifier;

fn main() -> Result<()> {
    env_logger::init();

    let args: MinifyArgs = config::parse_or_exit();
    let minifier = Minifier::new(args.backend)?;

    println!("-- HTML minification:");
    for report in batch::minify_dir(&minifier, &args.input_dir, &args.output_dir)? {
        println!("  {report}");
    }
    Ok(())
}
