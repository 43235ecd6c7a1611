use anyhow::Result;
use commentscope::cli;

fn main() -> Result<()> {
    cli::run(cli::parse_args())
}
