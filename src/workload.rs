use std::hint::black_box;

/// Burns CPU by summing the integers `0..iterations`.
///
/// The sum is returned so tests can observe it, but the point of the call
/// is the cycles it spends: `black_box` keeps the loop from being folded
/// into the closed-form sum or deleted outright, and `#[inline(never)]`
/// keeps the work attributable to this frame in a profiler's output.
#[inline(never)]
pub fn burn(iterations: u64) -> u64 {
    let mut sum: u64 = 0;
    for i in 0..iterations {
        sum = black_box(sum.wrapping_add(i));
    }
    sum
}
