use cowsim_core::feed::{FeedAllocator, FeedKind};
use cowsim_core::{Breed, CauseOfDeath, Cow, Organism};
use cowsim_data::Sex;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

prop_compose! {
    fn arb_sex()(male in any::<bool>()) -> Sex {
        if male { Sex::Male } else { Sex::Female }
    }
}

prop_compose! {
    fn arb_cow()(
        age in 0u32..=9200,
        sex in arb_sex(),
        calories in 0.0f64..40000.0,
        weight in 0.0f64..7000.0
    ) -> Cow {
        Cow::new(Uuid::new_v4(), Breed::PurpleAngus, age, sex, calories, weight)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_generated_cows_within_bounds(seed in any::<u64>()) {
        let p = Breed::PurpleAngus.profile();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cow = Cow::generate(Breed::PurpleAngus, &mut rng);
        prop_assert!((p.min_age..=p.max_age).contains(&cow.age()));
        prop_assert!(cow.calories() >= p.min_caloric_bound && cow.calories() <= p.max_caloric_bound);
        prop_assert!(cow.weight() >= p.min_weight && cow.weight() <= p.max_weight);
        prop_assert_ne!(cow.cause_of_death(), CauseOfDeath::OldAge);
        prop_assert_ne!(cow.cause_of_death(), CauseOfDeath::Overweight);
    }

    #[test]
    fn test_state_never_negative(mut cow in arb_cow(), seed in any::<u64>(), days in 1usize..20) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..days {
            cow.expend_calories(&mut rng);
            prop_assert!(cow.calories() >= 0.0);
            prop_assert!(cow.weight() >= 0.0);
            prop_assert!(cow.milk_yield(&mut rng) >= 0.0);
            prop_assert!(cow.methane_yield() >= 0.0);
            cow.increment_age();
        }
    }

    #[test]
    fn test_intake_clamps_reserve(mut cow in arb_cow(), kcal in 0.0f64..100000.0) {
        let p = Breed::PurpleAngus.profile();
        let weight = cow.weight();
        let before = cow.calories();
        cow.caloric_intake(kcal);
        if before + kcal <= p.max_caloric_bound {
            prop_assert_eq!(cow.weight(), weight);
        } else {
            prop_assert_eq!(cow.calories(), p.max_caloric_bound);
            prop_assert!(cow.weight() >= weight);
        }
    }

    #[test]
    fn test_old_age_wins_over_overweight(extra in 1u32..1000, fat in 1.0f64..1000.0) {
        let p = Breed::PurpleAngus.profile();
        let cow = Cow::new(
            Uuid::new_v4(),
            Breed::PurpleAngus,
            p.max_age + extra,
            Sex::Female,
            10000.0,
            p.max_weight + fat,
        );
        prop_assert_eq!(cow.cause_of_death(), CauseOfDeath::OldAge);
        prop_assert_eq!(cow.cause_of_death(), cow.cause_of_death());
    }

    #[test]
    fn test_feeding_respects_budget(
        herd in prop::collection::vec(arb_cow(), 1..30),
        servings in 0u32..500
    ) {
        let mut herd = herd;
        let mut grass = FeedAllocator::new(FeedKind::OrangeGrass, servings, &herd);
        let mut served = 0;
        for cow in &mut herd {
            served += grass.feed(cow);
        }
        prop_assert!(served <= servings);
        prop_assert_eq!(grass.current_serving_total(), servings - served);
    }
}
