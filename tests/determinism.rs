mod common;

use common::PenBuilder;
use cowsim_core::Environment;

fn seeded_pen(seed: u64, steps: u64) -> Environment {
    PenBuilder::new()
        .with_seed(seed)
        .with_steps(steps)
        .with_founders("Purple Angus", 20)
        .build()
}

#[test]
fn test_determinism_consistency() {
    let mut env1 = seeded_pen(12345, 30);
    let mut env2 = seeded_pen(12345, 30);

    env1.run();
    env2.run();

    assert_eq!(env1.steps(), env2.steps(), "Step counts should match");
    assert_eq!(env1.populations(), env2.populations());
    for (a, b) in env1.cohorts().iter().zip(env2.cohorts()) {
        assert_eq!(a.members, b.members, "Members should match");
        assert_eq!(a.telemetry, b.telemetry, "Telemetry should match");
    }
    assert_eq!(env1.metrics().births, env2.metrics().births);
    assert_eq!(env1.metrics().deaths, env2.metrics().deaths);
}

#[test]
fn test_different_seeds_diverge() {
    let env1 = seeded_pen(1, 10);
    let env2 = seeded_pen(2, 10);
    assert_ne!(env1.cohorts()[0].members, env2.cohorts()[0].members);
}

#[test]
fn test_manual_steps_match_run() {
    let steps = 25;
    let mut ran = seeded_pen(777, steps);
    ran.run();

    let mut stepped = seeded_pen(777, steps);
    for _ in 0..steps {
        if stepped.extinct_cohort().is_some() {
            break;
        }
        stepped.step();
    }

    assert_eq!(ran.steps(), stepped.steps());
    assert_eq!(ran.populations(), stepped.populations());
    assert_eq!(ran.cohorts()[0].telemetry, stepped.cohorts()[0].telemetry);
}
