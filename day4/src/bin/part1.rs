use anyhow::Result;
use day4::count_accessible;

fn main() -> Result<()> {
    util::init_logger();

    let lines = util::read_input_lines()?;

    let total = count_accessible(&lines);

    println!("{total}");

    Ok(())
}
