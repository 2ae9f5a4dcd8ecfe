mod aggregate;
mod numeric;

pub use aggregate::*;
pub use numeric::*;

pub fn register_builtins() {
    crate::register_functions!(SumFn, AverageFn, MaxOfFn, MinOfFn, DistanceFn, LogBaseFn);
}
