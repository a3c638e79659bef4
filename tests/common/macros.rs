/// Asserts the current head count of a cohort.
#[macro_export]
macro_rules! assert_population {
    ($env:expr, $cohort:expr, $count:expr) => {
        assert_eq!(
            $env.cohort($cohort)
                .map(|c| c.population())
                .expect("Cohort not found in pen"),
            $count,
            "Population count mismatch"
        );
    };
}

/// Asserts that an animal with the given id is no longer in any cohort.
#[macro_export]
macro_rules! assert_cow_gone {
    ($env:expr, $id:expr) => {
        let present = $env
            .cohorts()
            .iter()
            .flat_map(|c| c.members.iter())
            .any(|cow| cow.id() == $id);
        assert!(!present, "Animal {} should be gone but is still in the pen", $id);
    };
}
