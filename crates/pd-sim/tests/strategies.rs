//! Cross-checks between the integration strategies on problems with known
//! solutions.

use pd_core::{Real, TimeGrid};
use pd_sim::{ClosedForm, FixedStepEuler, GeneralOdeSolve, OdeMethod, OdeSystem, State};
use proptest::prelude::*;

/// dP/dt = r P (1 - P/K)
struct Logistic {
    p0: Real,
    r: Real,
    k: Real,
}

impl Logistic {
    fn exact(&self, t: Real) -> Real {
        self.k / (1.0 + (self.k / self.p0 - 1.0) * (-self.r * t).exp())
    }
}

impl OdeSystem<1> for Logistic {
    fn initial_state(&self) -> State<1> {
        State::<1>::new(self.p0)
    }

    fn rhs(&self, _t: Real, x: &State<1>) -> State<1> {
        State::<1>::new(self.r * x[0] * (1.0 - x[0] / self.k))
    }
}

fn max_error(model: &Logistic, values: &[Real], grid: &TimeGrid) -> Real {
    grid.times()
        .iter()
        .zip(values)
        .map(|(&t, &v)| (v - model.exact(t)).abs())
        .fold(0.0, Real::max)
}

#[test]
fn closed_form_reproduces_exact_solution() {
    let model = Logistic {
        p0: 10.0,
        r: 0.3,
        k: 100.0,
    };
    let grid = TimeGrid::uniform(40.0, 50).unwrap();
    let record = ClosedForm.sample(&grid, |t| State::<1>::new(model.exact(t)));
    assert_eq!(max_error(&model, &record.component(0), &grid), 0.0);
}

#[test]
fn euler_error_shrinks_with_finer_grid() {
    let model = Logistic {
        p0: 10.0,
        r: 0.3,
        k: 100.0,
    };
    let errors: Vec<Real> = [50, 200, 800]
        .into_iter()
        .map(|n| {
            let grid = TimeGrid::uniform(40.0, n).unwrap();
            let record = FixedStepEuler::new().integrate(&model, &grid).unwrap();
            max_error(&model, &record.component(0), &grid)
        })
        .collect();
    assert!(errors[1] < errors[0] / 2.0);
    assert!(errors[2] < errors[1] / 2.0);
}

#[test]
fn general_solver_beats_euler_on_same_grid() {
    let model = Logistic {
        p0: 10.0,
        r: 0.3,
        k: 100.0,
    };
    let grid = TimeGrid::uniform(40.0, 100).unwrap();
    let euler = FixedStepEuler::new().integrate(&model, &grid).unwrap();
    let dopri = GeneralOdeSolve::default().integrate(&model, &grid).unwrap();

    let euler_err = max_error(&model, &euler.component(0), &grid);
    let dopri_err = max_error(&model, &dopri.component(0), &grid);
    assert!(dopri_err < 1e-5);
    assert!(dopri_err < euler_err);
}

#[test]
fn inputs_are_not_consumed() {
    let model = Logistic {
        p0: 5.0,
        r: 0.5,
        k: 50.0,
    };
    let grid = TimeGrid::uniform(10.0, 20).unwrap();
    let solver = GeneralOdeSolve::new(OdeMethod::Rk4);
    let first = solver.integrate(&model, &grid).unwrap();
    let second = solver.integrate(&model, &grid).unwrap();
    assert_eq!(first, second);
    assert_eq!(grid.len(), 20);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn dopri5_tracks_logistic_solution(
        p0 in 1.0f64..50.0,
        r in 0.05f64..1.0,
        k in 60.0f64..500.0,
        t_max in 1.0f64..60.0,
    ) {
        let model = Logistic { p0, r, k };
        let grid = TimeGrid::uniform(t_max, 64).unwrap();
        let record = GeneralOdeSolve::default().integrate(&model, &grid).unwrap();
        prop_assert_eq!(record.len(), 64);
        prop_assert!(max_error(&model, &record.component(0), &grid) <= 1e-5 * k);
    }

    #[test]
    fn euler_records_every_grid_time(n in 2usize..500, t_max in 0.0f64..100.0) {
        let model = Logistic { p0: 1.0, r: 0.1, k: 10.0 };
        let grid = TimeGrid::uniform(t_max, n).unwrap();
        let record = FixedStepEuler::new().integrate(&model, &grid).unwrap();
        prop_assert_eq!(&record.t, &grid.times().to_vec());
    }
}
