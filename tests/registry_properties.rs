// tests/registry_properties.rs

//! Property coverage for the registry's counting invariant: at every
//! observable instant, each submission is in exactly one of running /
//! succeeded / failed, and the totals always add up.

mod common;

use proptest::prelude::*;
use runherd::registry::StateKind;

const COMMANDS: [&str; 3] = ["alpha", "beta", "gamma"];

proptest! {
    #[test]
    fn counting_invariant_holds_for_arbitrary_submission_mixes(
        submissions in proptest::collection::vec((0usize..COMMANDS.len(), any::<bool>()), 1..32),
    ) {
        let (registry, _dir) = common::registry_with_log();

        for (index, _) in &submissions {
            registry.begin(COMMANDS[*index]);
        }

        // All submissions in flight, none terminal.
        prop_assert_eq!(registry.snapshot(StateKind::Running).len(), submissions.len());
        prop_assert!(registry.snapshot(StateKind::Succeeded).is_empty());
        prop_assert!(registry.snapshot(StateKind::Failed).is_empty());

        for (completed, (index, succeeded)) in submissions.iter().enumerate() {
            registry.complete(common::bare_outcome(COMMANDS[*index], *succeeded));

            let running = registry.snapshot(StateKind::Running).len();
            let done = registry.snapshot(StateKind::Succeeded).len()
                + registry.snapshot(StateKind::Failed).len();

            // Every submission is in exactly one place at all times.
            prop_assert_eq!(done, completed + 1);
            prop_assert_eq!(running + done, submissions.len());
        }

        prop_assert!(registry.snapshot(StateKind::Running).is_empty());

        // Terminal tallies match the submitted outcomes per command.
        for (index, command) in COMMANDS.iter().enumerate() {
            let expected_ok = submissions
                .iter()
                .filter(|(i, ok)| *i == index && *ok)
                .count();
            let expected_fail = submissions
                .iter()
                .filter(|(i, ok)| *i == index && !*ok)
                .count();

            let ok = registry
                .snapshot(StateKind::Succeeded)
                .iter()
                .filter(|c| c.as_str() == *command)
                .count();
            let fail = registry
                .snapshot(StateKind::Failed)
                .iter()
                .filter(|c| c.as_str() == *command)
                .count();

            prop_assert_eq!(ok, expected_ok);
            prop_assert_eq!(fail, expected_fail);
        }
    }
}
