use anyhow::Result;
use mindcare::cli::{run, ux};

fn main() -> Result<()> {
    if let Err(e) = run() {
        ux::present_error(e);
        std::process::exit(1);
    }
    Ok(())
}
