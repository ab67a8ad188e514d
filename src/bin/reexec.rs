use anyhow::Result;

fn main() -> Result<()> {
    reexec::cli::run()
}
