use crate::lifecycle::Organism;
use cowsim_data::CauseOfDeath;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

/// An animal removed from its cohort because it died.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Death {
    pub id: Uuid,
    pub age: u32,
    pub cause: CauseOfDeath,
}

/// Removes every member whose cause of death is not [`CauseOfDeath::NotDead`].
/// Survivors keep their relative order.
pub fn remove_dead<O: Organism>(cohort: &mut Vec<O>) -> Vec<Death> {
    let mut deaths = Vec::new();
    cohort.retain(|member| {
        let cause = member.cause_of_death();
        if cause.is_dead() {
            deaths.push(Death {
                id: member.id(),
                age: member.age(),
                cause,
            });
        }
        !cause.is_dead()
    });
    deaths
}

/// Trims the cohort to `capacity` members chosen uniformly at random and
/// returns the ids of the culled animals. Survivors keep their relative order.
pub fn cull_to_capacity<O: Organism, R: Rng>(
    cohort: &mut Vec<O>,
    capacity: usize,
    rng: &mut R,
) -> Vec<Uuid> {
    if cohort.len() <= capacity {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..cohort.len()).collect();
    order.shuffle(rng);
    let culled_idx: HashSet<usize> = order[capacity..].iter().copied().collect();

    let mut culled = Vec::with_capacity(culled_idx.len());
    let mut index = 0;
    cohort.retain(|member| {
        let keep = !culled_idx.contains(&index);
        if !keep {
            culled.push(member.id());
        }
        index += 1;
        keep
    });
    culled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breed::Breed;
    use crate::lifecycle::Cow;
    use cowsim_data::Sex;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cow(age: u32, weight: f64) -> Cow {
        Cow::new(Uuid::new_v4(), Breed::PurpleAngus, age, Sex::Female, 20000.0, weight)
    }

    #[test]
    fn test_remove_dead_reports_causes() {
        let p = Breed::PurpleAngus.profile();
        let mut herd = vec![
            cow(1000, 2000.0),
            cow(p.max_age + 1, 2000.0),
            cow(1000, p.max_weight + 1.0),
            cow(p.adult_age, 100.0),
        ];
        let healthy = herd[0].id();
        let deaths = remove_dead(&mut herd);

        assert_eq!(herd.len(), 1);
        assert_eq!(herd[0].id(), healthy);
        let causes: Vec<_> = deaths.iter().map(|d| d.cause).collect();
        assert_eq!(
            causes,
            vec![
                CauseOfDeath::OldAge,
                CauseOfDeath::Overweight,
                CauseOfDeath::Malnourished
            ]
        );
    }

    #[test]
    fn test_cull_to_capacity_keeps_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut herd: Vec<Cow> = (0..10).map(|_| cow(1000, 2000.0)).collect();
        let original: Vec<Uuid> = herd.iter().map(Organism::id).collect();

        let culled = cull_to_capacity(&mut herd, 4, &mut rng);
        assert_eq!(herd.len(), 4);
        assert_eq!(culled.len(), 6);

        let positions: Vec<usize> = herd
            .iter()
            .map(|c| original.iter().position(|id| *id == c.id()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(culled.iter().all(|id| !herd.iter().any(|c| c.id() == *id)));
    }

    #[test]
    fn test_cull_under_capacity_is_noop() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let mut herd: Vec<Cow> = (0..3).map(|_| cow(1000, 2000.0)).collect();
        assert!(cull_to_capacity(&mut herd, 3, &mut rng).is_empty());
        assert_eq!(herd.len(), 3);
    }
}
