use colored::Colorize;
use std::time::Duration;

pub const NUMBER_DASHES: usize = 80;

pub fn print_header() {
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
    println!(
        "{} {} {}",
        "-".repeat(NUMBER_DASHES / 2 - 6).red().bold(),
        "Crab Cups".bold(),
        "-".repeat(NUMBER_DASHES / 2 - 5).red().bold()
    );
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
}

pub fn print_result(name: &str, value: &str) {
    println!("- {}: {}", name.bold(), value.green().bold());
}

pub fn print_time(d: Duration) {
    println!(
        "- {}.{}{}{:03} {}",
        format!("{:03}", d.as_secs()).bright_red(),
        format!("{:03}", d.subsec_millis()).red(),
        format!("{:03}", d.subsec_micros() % 1_000).yellow(),
        format!("{}", d.subsec_nanos() % 1_000).green(),
        "seconds".bold(),
    );
}
