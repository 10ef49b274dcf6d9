/// Control actions supported by the piecewise integrator.
///
/// There are none. A run either produces a trajectory for every sub-interval
/// or fails, so observers can watch but cannot stop or steer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {}
