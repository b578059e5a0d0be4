pub mod models;

use std::{
    fs::File,
    io::{self, Error, ErrorKind},
    path::{Path, PathBuf},
};

use rand::{Rng, seq::SliceRandom};

pub type Row = Vec<usize>;

pub const INPUT_SIZE_DEFAULT: usize = 512;

/// Number of permutation rows written for size `n`, `None` if it does not fit
/// in `usize`.
pub fn rows_count(n: usize) -> Option<usize> {
    n.checked_mul(2)
}

pub fn default_file_name(n: usize) -> PathBuf {
    PathBuf::from(format!("{n}.in"))
}

pub fn base_sequence(n: usize) -> Row {
    (1..=n).collect()
}

/// Fresh copy of `base` in uniformly random order.
pub fn shuffled_row<R>(base: &[usize], rng: &mut R) -> Row
where
    R: Rng + ?Sized,
{
    let mut row = base.to_vec();
    row.shuffle(rng);
    row
}

/// Rows count for a valid size, `InvalidInput` otherwise.
pub fn check_size(n: usize) -> io::Result<usize> {
    if n == 0 {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "size must be at least 1",
        ));
    }
    rows_count(n).ok_or_else(|| {
        Error::new(ErrorKind::InvalidInput, format!("size {n} is too large"))
    })
}

/// Writes `n` followed by `2 * n` shuffled permutations of `1..=n`, one per
/// line. `tick_func` is called after every row.
pub fn generate<W, R, F>(writer: W, n: usize, rng: &mut R, mut tick_func: F) -> io::Result<()>
where
    W: io::Write,
    R: Rng + ?Sized,
    F: FnMut(),
{
    let rows = check_size(n)?;

    let mut writer = models::writer_builder().from_writer(writer);
    models::write_size(&mut writer, n)?;

    let base = base_sequence(n);
    for _ in 0..rows {
        models::write_row(&mut writer, &shuffled_row(&base, rng))?;
        tick_func();
    }

    writer.flush()?;
    Ok(())
}

/// Same as [`generate`], into a file at `path` which is created or truncated.
pub fn generate_file<P, R, F>(path: P, n: usize, rng: &mut R, tick_func: F) -> io::Result<()>
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
    F: FnMut(),
{
    check_size(n)?;
    let file = File::create(path)?;
    generate(file, n, rng, tick_func)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn base_sequence_counts_from_one() {
        assert_eq!(base_sequence(4), vec![1, 2, 3, 4]);
        assert!(base_sequence(0).is_empty());
    }

    #[test]
    fn shuffled_row_keeps_base_untouched() {
        let base = base_sequence(10);
        let mut rng = StdRng::seed_from_u64(7);
        let row = shuffled_row(&base, &mut rng);

        assert_eq!(base, base_sequence(10));
        let mut sorted = row.clone();
        sorted.sort();
        assert_eq!(sorted, base);
    }

    #[test]
    fn single_value_file() {
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        generate(&mut out, 1, &mut rng, || ()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n1\n1\n");
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(&mut out, 0, &mut rng, || ()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }

    #[test]
    fn tick_once_per_row() {
        let mut ticks = 0;
        let mut rng = StdRng::seed_from_u64(3);
        generate(io::sink(), 6, &mut rng, || ticks += 1).unwrap();
        assert_eq!(ticks, 12);
    }

    #[test]
    fn oversized_size_is_rejected() {
        assert_eq!(rows_count(usize::MAX), None);
        assert_eq!(rows_count(usize::MAX / 2), Some(usize::MAX - 1));
        assert_eq!(check_size(usize::MAX).unwrap_err().kind(), ErrorKind::InvalidInput);

        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(&mut out, usize::MAX, &mut rng, || ()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }

    #[test]
    fn file_name_from_size() {
        assert_eq!(default_file_name(INPUT_SIZE_DEFAULT), PathBuf::from("512.in"));
    }
}
