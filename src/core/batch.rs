//! Document batching
//!
//! Splits the ordered document sequence into consecutive fixed-size chunks
//! for the classifier. The final chunk holds the remainder.

/// Partition `items` into ordered chunks of `batch_size`
///
/// Lazy, finite, not restartable once consumed. Produces ⌈N / B⌉ chunks;
/// concatenating them in order reproduces the input exactly. An empty input
/// produces no chunks.
///
/// `batch_size` must be >= 1; it is validated at configuration load.
pub fn partition<T>(items: &[T], batch_size: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(batch_size)
}
