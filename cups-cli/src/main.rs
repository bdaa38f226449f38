use anyhow::{Context, Result};
use clap::Parser;
use cups::{parse_labels, play};
use std::time::Instant;

mod output;

fn main() -> Result<()> {
    let app: App = App::parse();
    app.run()?;
    Ok(())
}

/// Crab cups simulator
#[derive(Debug, Parser)]
struct App {
    /// Initial cup labels, one digit per cup (e.g. 389125467)
    labels: String,

    /// Total number of cups; the circle is padded with ascending labels up
    /// to this count. Defaults to the number of supplied labels.
    #[clap(short, long)]
    total: Option<u32>,

    /// Number of moves to play
    #[clap(short, long, default_value = "100")]
    moves: u64,
}

impl App {
    #[allow(clippy::cast_possible_truncation)]
    fn run(&self) -> Result<()> {
        let labels =
            parse_labels(&self.labels).context("unparseable cup labelling")?;
        let total = self.total.unwrap_or(labels.len() as u32);

        let now = Instant::now();
        let circle = play(&labels, total, self.moves)
            .context("unable to play the game")?;
        let elapsed = now.elapsed();

        output::print_header();
        if total <= 9 {
            output::print_result(
                "Order after cup 1",
                &circle.order_after_one(),
            );
        } else {
            output::print_result(
                "Pair product",
                &circle.pair_product().to_string(),
            );
        }
        output::print_time(elapsed);

        Ok(())
    }
}
