use crate::lifecycle::Organism;
use rand::Rng;
use uuid::Uuid;

/// A calf born during the reproduction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birth {
    pub id: Uuid,
    pub parents: (Uuid, Uuid),
}

/// Evaluates every ordered pair of the cohort's current members and appends a
/// newborn for each pair that decides to mate.
///
/// Calves born here are not themselves paired this step. An animal may mate
/// with several partners in the same step, and both orderings of a pair are
/// tried independently.
pub fn reproduce<O: Organism, R: Rng>(cohort: &mut Vec<O>, rng: &mut R) -> Vec<Birth> {
    let parents = cohort.len();
    let mut births = Vec::new();

    for i in 0..parents {
        for j in 0..parents {
            if i == j || !O::should_reproduce(&cohort[i], &cohort[j], rng) {
                continue;
            }
            let calf = O::newborn(cohort[i].breed(), rng);
            births.push(Birth {
                id: calf.id(),
                parents: (cohort[i].id(), cohort[j].id()),
            });
            cohort.push(calf);
        }
    }

    births
}
