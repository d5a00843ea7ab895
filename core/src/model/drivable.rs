use guide_common::output::Console;

/// Contract for anything that can be driven hard and has a known range.
pub trait Drivable {
    fn accelerate_hard(&mut self, out: &mut dyn Console);
    fn max_range(&self) -> i32;
}
