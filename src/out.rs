use std::fmt::Display;
use std::io::Write;

/// Runs the computation and writes `label: value` on a line of its own.
pub fn print_to<W, F, T>(out: &mut W, label: &str, computation: F) -> std::io::Result<()>
where
    W: Write,
    F: FnOnce() -> T,
    T: Display,
{
    let value = computation();
    writeln!(out, "{}: {}", label, value)
}

pub fn print<F, T>(label: &str, computation: F) -> std::io::Result<()>
where
    F: FnOnce() -> T,
    T: Display,
{
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    print_to(&mut stdout, label, computation)
}

#[test]
fn label_and_value() {
    let mut out = Vec::new();
    print_to(&mut out, "Part 1", || 7).unwrap();
    print_to(&mut out, "Part 2", || 336u64).unwrap();
    assert_eq!(out, b"Part 1: 7\nPart 2: 336\n");
}
