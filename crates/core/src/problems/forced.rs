/// Defines an ODE right-hand side driven by an exogenous forcing value.
///
/// The state is a fixed-size vector of `N` components. The forcing is not part
/// of the state: callers supply it, and a piecewise integrator holds it
/// constant over each sub-interval of its time grid. This keeps the
/// right-hand side smooth within every solve even when the forcing jumps.
///
/// Implementations must be pure: the same state and forcing always yield the
/// same rates.
pub trait ForcedSystem<const N: usize> {
    /// The forcing value that parameterizes the rates.
    type Forcing: Copy;

    /// Returns `dy/dt` for state `y` under `forcing`.
    fn rates(&self, y: &[f64; N], forcing: Self::Forcing) -> [f64; N];
}

impl<S, const N: usize> ForcedSystem<N> for &S
where
    S: ForcedSystem<N> + ?Sized,
{
    type Forcing = S::Forcing;

    fn rates(&self, y: &[f64; N], forcing: Self::Forcing) -> [f64; N] {
        (**self).rates(y, forcing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `dy/dt = k * y` with the growth rate as forcing.
    struct Growth;

    impl ForcedSystem<1> for Growth {
        type Forcing = f64;

        fn rates(&self, y: &[f64; 1], forcing: f64) -> [f64; 1] {
            [forcing * y[0]]
        }
    }

    fn rates_via<S: ForcedSystem<1, Forcing = f64>>(system: S, y: f64, k: f64) -> f64 {
        system.rates(&[y], k)[0]
    }

    #[test]
    fn references_forward_to_the_system() {
        let system = Growth;
        assert_eq!(rates_via(&system, 2.0, 3.0), 6.0);
        assert_eq!(rates_via(system, 2.0, -0.5), -1.0);
    }
}
