//! Compare array-list and linked-list costs for middle reads and front
//! inserts, writing `<n> <microseconds>` rows under `gen/`.
//!
//! ```text
//! cargo run --release -p strand-bench --example compare
//! ```

use std::error::Error;
use std::fs;
use std::path::Path;

use strand_bench::{get_middle, insert_front, sweep, write_timings, ContainerKind, DEFAULT_RUNS, SIZES};

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("gen");
    fs::create_dir_all(out_dir)?;

    for kind in ContainerKind::ALL {
        println!("\n{kind} - get");
        let rows = sweep(&SIZES, |n| get_middle(kind, n, DEFAULT_RUNS));
        for row in &rows {
            println!("{row}");
        }
        write_timings(&out_dir.join(format!("{}_get.txt", kind.stem())), &rows)?;

        println!("{kind} - insert front");
        let rows = sweep(&SIZES, |n| insert_front(kind, n));
        for row in &rows {
            println!("{row}");
        }
        write_timings(&out_dir.join(format!("{}_insert.txt", kind.stem())), &rows)?;
    }
    Ok(())
}
