// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// The CLI implements this to print one line per shop.
pub trait Progress {
    /// Called once the shop list is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when a shop page is about to be fetched. With several workers
    /// these can interleave with other shops' `item_done`.
    fn item_started(&mut self, _index: usize, _name: &str, _url: &str) {}

    /// Called when one shop page was fetched and parsed.
    fn item_done(&mut self, _index: usize, _name: &str, _flyers: usize) {}

    /// Called when a shop page could not be fetched.
    fn item_failed(&mut self, _index: usize, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
