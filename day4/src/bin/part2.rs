use anyhow::Result;
use day4::total_removed;

fn main() -> Result<()> {
    util::init_logger();

    let lines = util::read_input_lines()?;

    let total = total_removed(&lines);

    println!("{total}");

    Ok(())
}
