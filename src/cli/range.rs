//! Range-check command.
//!
//! Evaluates the composed region predicate for one target position and
//! prints the verdict.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::region;
use crate::types::Point;

/// Check whether a target position lies in range
#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Own position as x,y
    #[arg(long, default_value = "0,0")]
    pub own: Point,

    /// Target position as x,y
    #[arg(long)]
    pub target: Point,

    /// Friendly position as x,y
    #[arg(long)]
    pub friendly: Point,

    /// Maximum range
    #[arg(long)]
    pub range: f64,

    /// Minimum safe distance from both own and friendly positions
    #[arg(long, default_value = "0")]
    pub min_distance: f64,
}

pub fn run(args: RangeArgs) -> Result<()> {
    let printer = Printer::new();
    printer.status(
        "Checking",
        &format!(
            "target {} from {} (range {}, min distance {}, friendly {})",
            args.target, args.own, args.range, args.min_distance, args.friendly
        ),
    );

    let verdict = region::in_range(
        args.own,
        args.target,
        args.friendly,
        args.range,
        args.min_distance,
    );

    if verdict {
        println!("in range");
    } else {
        println!("out of range");
    }

    Ok(())
}
