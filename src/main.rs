use anyhow::Result;

fn main() -> Result<()> {
    let args = unaccent::cli::parse();
    unaccent::app::run(args)
}
