use groups::{CyclicGroup, GeneralLinearGroup, Group};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn small_matrix(entries: &[i8], n: usize) -> Vec<Vec<i64>> {
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| entries.get(i * n + j).copied().unwrap_or(0) as i64)
                .collect()
        })
        .collect()
}

#[quickcheck]
fn cyclic_elements_exist_iff_in_range(n: u8, value: i64) -> bool {
    let group = CyclicGroup::new(n as usize);
    group.element(value).is_ok() == (0 <= value && value < n as i64)
}

#[quickcheck]
fn cyclic_composition_is_associative(n: u8, a: u8, b: u8, c: u8) -> TestResult {
    if n == 0 {
        return TestResult::discard();
    }
    let group = CyclicGroup::new(n as usize);
    let [a, b, c] = [a, b, c].map(|v| (v % n) as i64);

    let outcome = (|| {
        let a = group.element(a)?;
        let b = group.element(b)?;
        let c = group.element(c)?;
        let left = (&(&a * &b)? * &c)?;
        let right = (&a * &(&b * &c)?)?;
        Ok::<_, groups::GroupError>(left == right && group.validate(left.value()).is_ok())
    })();

    match outcome {
        Ok(holds) => TestResult::from_bool(holds),
        Err(err) => TestResult::error(err.to_string()),
    }
}

#[quickcheck]
fn matrix_elements_exist_iff_square_of_degree(n: u8, rows: u8, cols: u8) -> bool {
    let [n, rows, cols] = [n, rows, cols].map(|v| v % 9);
    let group = GeneralLinearGroup::<i64>::new(n as usize);
    let matrix = vec![vec![1i64; cols as usize]; rows as usize];

    let expected = rows == n && (cols == n || rows == 0);
    group.element(matrix).is_ok() == expected
}

#[quickcheck]
fn matrix_composition_is_closed_and_associative(
    n: u8,
    a: Vec<i8>,
    b: Vec<i8>,
    c: Vec<i8>,
) -> TestResult {
    let n = (n % 5) as usize;
    let group = GeneralLinearGroup::<i64>::new(n);

    let outcome = (|| {
        let a = group.element(small_matrix(&a, n))?;
        let b = group.element(small_matrix(&b, n))?;
        let c = group.element(small_matrix(&c, n))?;
        let ab = (&a * &b)?;
        let left = (&ab * &c)?;
        let right = (&a * &(&b * &c)?)?;
        Ok::<_, groups::GroupError>(group.validate(ab.value()).is_ok() && left == right)
    })();

    match outcome {
        Ok(holds) => TestResult::from_bool(holds),
        Err(err) => TestResult::error(err.to_string()),
    }
}
