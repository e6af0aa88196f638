//! # Pivot engines
//!
//! The primal and the dual simplex method share their structure: starting from a basis, each
//! iteration either concludes or exchanges one basis index for another. They differ only in the
//! body of an iteration, which is what the `PivotEngine` trait captures. The loop around it, with
//! its iteration limit, lives here.
use crate::error::SolverError;

/// Result of a single iteration.
#[derive(Debug, PartialEq)]
pub enum Step<S, O> {
    /// A basis exchange was made; continue from this state.
    Continue(S),
    /// A terminal state was reached.
    Done(O),
}

/// Iteration body of a simplex-type method.
///
/// The state is moved into each iteration and moved out again, such that there is no shared
/// mutable state between iterations.
pub trait PivotEngine {
    /// Everything that is carried from one iteration to the next.
    type State;
    /// What the method concludes.
    type Outcome;

    /// Perform one iteration.
    ///
    /// # Errors
    ///
    /// Only when an invariant is broken, such as a singular basis matrix.
    fn iterate(&mut self, state: Self::State) -> Result<Step<Self::State, Self::Outcome>, SolverError>;

    /// Conclusion when the iteration limit was reached without reaching a terminal state.
    fn give_up(&mut self, state: Self::State) -> Self::Outcome;
}

/// Drive an engine until it reaches a terminal state or the iteration limit.
///
/// # Arguments
///
/// * `engine`: Iteration body.
/// * `initial`: State to start from.
/// * `max_iterations`: Number of iterations after which the engine gives up.
///
/// # Return value
///
/// The outcome and the number of iterations performed, including the final one that concluded.
pub fn run<E: PivotEngine>(
    engine: &mut E,
    initial: E::State,
    max_iterations: usize,
) -> Result<(E::Outcome, usize), SolverError> {
    let mut state = initial;
    for iteration in 1..=max_iterations {
        match engine.iterate(state)? {
            Step::Continue(next) => state = next,
            Step::Done(outcome) => return Ok((outcome, iteration)),
        }
    }

    Ok((engine.give_up(state), max_iterations))
}
