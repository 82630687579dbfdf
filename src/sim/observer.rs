use nalgebra::Vector2;

/// Receives the post-step state after every engine step.
///
/// Implementations get a read-only view and cannot reach back into the
/// engine, so recording and diagnostics stay decoupled from the physics.
pub trait StepObserver {
    fn on_step(&mut self, position: &Vector2<f64>, velocity: &Vector2<f64>, angle: f64);
}

/// Ignores every step. The engine default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _position: &Vector2<f64>, _velocity: &Vector2<f64>, _angle: f64) {}
}

/// Adapts a closure into a [`StepObserver`]. See [`observe_fn`].
#[derive(Debug, Clone)]
pub struct FnObserver<F>(F);

/// Wrap `f` so it is called with `(position, velocity, angle)` after each step.
pub fn observe_fn<F>(f: F) -> FnObserver<F>
where
    F: FnMut(&Vector2<f64>, &Vector2<f64>, f64),
{
    FnObserver(f)
}

impl<F> StepObserver for FnObserver<F>
where
    F: FnMut(&Vector2<f64>, &Vector2<f64>, f64),
{
    fn on_step(&mut self, position: &Vector2<f64>, velocity: &Vector2<f64>, angle: f64) {
        (self.0)(position, velocity, angle)
    }
}

/// Fan out to both observers, first then second.
impl<A: StepObserver, B: StepObserver> StepObserver for (A, B) {
    fn on_step(&mut self, position: &Vector2<f64>, velocity: &Vector2<f64>, angle: f64) {
        self.0.on_step(position, velocity, angle);
        self.1.on_step(position, velocity, angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn closure_observer_sees_arguments() {
        let mut seen = Vec::new();
        {
            let mut obs = observe_fn(|p: &Vector2<f64>, v: &Vector2<f64>, a: f64| {
                seen.push((p.y, v.y, a))
            });
            obs.on_step(&Vector2::new(0.0, 1.0), &Vector2::new(0.0, -2.0), 0.5);
        }
        assert_eq!(seen, vec![(1.0, -2.0, 0.5)]);
    }

    #[test]
    fn pair_calls_both_in_order() {
        let log = RefCell::new(Vec::new());
        let first = observe_fn(|_: &Vector2<f64>, _: &Vector2<f64>, _: f64| log.borrow_mut().push("first"));
        let second = observe_fn(|_: &Vector2<f64>, _: &Vector2<f64>, _: f64| log.borrow_mut().push("second"));
        let mut pair = (first, second);
        pair.on_step(&Vector2::zeros(), &Vector2::zeros(), 0.0);
        pair.on_step(&Vector2::zeros(), &Vector2::zeros(), 0.0);
        drop(pair);
        assert_eq!(log.into_inner(), vec!["first", "second", "first", "second"]);
    }
}
