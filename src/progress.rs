// src/progress.rs
/// Lightweight progress reporting for a search (fetch + extraction).
/// Frontends implement this to surface status; every call happens on the
/// thread that started the search, never on a worker.
pub trait Progress {
    /// Called once rows are selected, with the number about to be extracted.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One row finished extracting (successfully or not). `index` is its
    /// position in selection order.
    fn row_done(&mut self, _index: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
