/// Fixed-interval wait used to throttle the poll loop.
pub trait Ticker {
    fn wait(&mut self);
}
