use dialecta_challenge::{ClassGrade, ClickDebouncer, ClickEvent};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_millis(250);

proptest! {
    #[test]
    fn exact_selection_grades_clean(truth in proptest::collection::btree_set("[a-z]{1,6}", 1..12)) {
        let g = ClassGrade::compare(&truth, &truth);
        prop_assert!(g.is_exact());
        prop_assert_eq!(g.correct, truth);
    }

    #[test]
    fn grading_partitions_truth_and_selection(
        truth in proptest::collection::btree_set(0u8..32, 0..16),
        selected in proptest::collection::btree_set(0u8..32, 0..16),
    ) {
        let g = ClassGrade::compare(&truth, &selected);

        let covered: BTreeSet<u8> = g.correct.union(&g.missed).copied().collect();
        prop_assert_eq!(&covered, &truth);
        let chosen: BTreeSet<u8> = g.correct.union(&g.wrong).copied().collect();
        prop_assert_eq!(&chosen, &selected);
        prop_assert!(g.missed.is_disjoint(&selected));
        prop_assert!(g.wrong.is_disjoint(&truth));
    }

    #[test]
    fn every_press_is_accounted_for(presses in proptest::collection::vec((0u8..3, 0u64..400), 1..40)) {
        let start = Instant::now();
        let mut now = start;
        let mut debouncer = ClickDebouncer::new(WINDOW);
        let (mut singles, mut doubles) = (0usize, 0usize);

        let mut count = |event: &ClickEvent<u8>| match event {
            ClickEvent::Single(_) => singles += 1,
            ClickEvent::Double(_) => doubles += 1,
        };

        for (target, gap) in &presses {
            now += Duration::from_millis(*gap);
            if let Some(event) = debouncer.poll(now) {
                count(&event);
            }
            for event in debouncer.press(*target, now) {
                count(&event);
            }
        }
        if let Some(event) = debouncer.poll(now + WINDOW) {
            count(&event);
        }

        prop_assert_eq!(singles + 2 * doubles, presses.len());
    }
}
