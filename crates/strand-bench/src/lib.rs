//! Timing drivers for comparing the Strand sequence containers.
//!
//! Reproduces the array-versus-linked-list comparison: for each size in
//! [`SIZES`], fill a container and measure
//!
//! - [`get_middle`]: average cost of reading index `n / 2`
//! - [`insert_front`]: average cost of inserting at index 0
//!
//! Results are [`Timing`] rows, written one `"<n> <microseconds>"` line
//! per size by [`write_timings`]. Criterion micro-benchmarks for the same
//! workloads live under `benches/`.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;
use std::fs::File;
use std::hint::black_box;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use strand_array::ArrayList;
use strand_core::Sequence;
use strand_list::LinkedList;

/// Container sizes measured by the comparison drivers.
pub const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

/// Reads per size in [`get_middle`].
pub const DEFAULT_RUNS: usize = 1_000;

/// Which container a driver exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    /// [`ArrayList`].
    ArrayList,
    /// [`LinkedList`].
    LinkedList,
}

impl ContainerKind {
    /// Both kinds, array first.
    pub const ALL: [ContainerKind; 2] = [ContainerKind::ArrayList, ContainerKind::LinkedList];

    /// File-name stem used for result files.
    pub fn stem(self) -> &'static str {
        match self {
            Self::ArrayList => "array_list",
            Self::LinkedList => "linked_list",
        }
    }

    /// An empty container of this kind.
    pub fn empty(self) -> Box<dyn Sequence> {
        match self {
            Self::ArrayList => Box::new(ArrayList::new()),
            Self::LinkedList => Box::new(LinkedList::new()),
        }
    }

    /// A container of this kind holding `0..n`.
    pub fn filled(self, n: usize) -> Box<dyn Sequence> {
        let mut seq = self.empty();
        for i in 0..n {
            seq.append(i as i32);
        }
        seq
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// One measurement: container size and average microseconds per operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Container size.
    pub n: usize,
    /// Average microseconds per operation.
    pub micros: f64,
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.n, self.micros)
    }
}

/// Average time to read the middle element of an `n`-element container,
/// over `runs` reads.
///
/// `n` and `runs` of zero yield a zero timing rather than dividing by zero.
pub fn get_middle(kind: ContainerKind, n: usize, runs: usize) -> Timing {
    let seq = kind.filled(n);
    if n == 0 || runs == 0 {
        return Timing { n, micros: 0.0 };
    }
    let start = Instant::now();
    for _ in 0..runs {
        let _ = black_box(seq.get(black_box(n / 2)));
    }
    let elapsed = start.elapsed();
    Timing {
        n,
        micros: elapsed.as_secs_f64() * 1e6 / runs as f64,
    }
}

/// Average time per insertion when building an `n`-element container by
/// repeatedly inserting at index 0.
pub fn insert_front(kind: ContainerKind, n: usize) -> Timing {
    let mut seq = kind.empty();
    if n == 0 {
        return Timing { n, micros: 0.0 };
    }
    let start = Instant::now();
    for i in 0..n {
        let _ = black_box(seq.insert(i as i32, 0));
    }
    let elapsed = start.elapsed();
    black_box(seq.len());
    Timing {
        n,
        micros: elapsed.as_secs_f64() * 1e6 / n as f64,
    }
}

/// Run `driver` for every size in `sizes`.
pub fn sweep(sizes: &[usize], mut driver: impl FnMut(usize) -> Timing) -> Vec<Timing> {
    sizes.iter().map(|&n| driver(n)).collect()
}

/// Write one `"<n> <microseconds>"` line per timing.
pub fn write_timings(path: &Path, timings: &[Timing]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for t in timings {
        writeln!(out, "{t}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_container_holds_ascending_values() {
        for kind in ContainerKind::ALL {
            let seq = kind.filled(10);
            assert_eq!(seq.len(), 10);
            assert_eq!(seq.get(5), Ok(5));
        }
    }

    #[test]
    fn drivers_report_requested_size() {
        for kind in ContainerKind::ALL {
            let t = get_middle(kind, 100, 10);
            assert_eq!(t.n, 100);
            assert!(t.micros >= 0.0);
            let t = insert_front(kind, 100);
            assert_eq!(t.n, 100);
            assert!(t.micros >= 0.0);
        }
    }

    #[test]
    fn zero_size_is_zero_timing() {
        assert_eq!(
            get_middle(ContainerKind::LinkedList, 0, 10),
            Timing { n: 0, micros: 0.0 }
        );
        assert_eq!(
            insert_front(ContainerKind::ArrayList, 0),
            Timing { n: 0, micros: 0.0 }
        );
    }

    #[test]
    fn sweep_visits_each_size_in_order() {
        let rows = sweep(&[3, 1, 2], |n| Timing { n, micros: 1.5 });
        let ns: Vec<usize> = rows.iter().map(|t| t.n).collect();
        assert_eq!(ns, vec![3, 1, 2]);
    }

    #[test]
    fn timings_written_one_pair_per_line() {
        let dir = std::env::temp_dir().join(format!("strand-bench-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("timings.txt");
        let rows = [
            Timing { n: 100, micros: 0.5 },
            Timing { n: 1000, micros: 2.0 },
        ];
        write_timings(&path, &rows).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "100 0.5\n1000 2\n");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn kind_stems_name_result_files() {
        assert_eq!(ContainerKind::ArrayList.to_string(), "array_list");
        assert_eq!(ContainerKind::LinkedList.stem(), "linked_list");
    }
}
