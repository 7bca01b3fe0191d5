use entrench::{
    base::{Base, ContractOk, ExpandOk, ReviseOk},
    config::{Config, SplitSelection},
    structures::formula::Formula,
};

fn formula(text: &str) -> Formula {
    Formula::parse(text).unwrap()
}

mod closure {
    use super::*;

    #[test]
    fn revision_without_a_formula_changes_nothing() {
        let mut base = Base::default();
        base.revise(Some(formula("p")), 0.5);
        base.revise(Some(formula("q")), 0.6);

        let before = base.snapshot();

        assert_eq!(base.revise(None, 0.9), ReviseOk::Noop);
        assert_eq!(base.snapshot(), before);

        assert_eq!(base.revise(None, 0.0), ReviseOk::Noop);
        assert_eq!(base.snapshot(), before);
    }

    #[test]
    fn on_an_empty_base_too() {
        let mut base = Base::default();
        assert_eq!(base.revise(None, 0.5), ReviseOk::Noop);
        assert!(base.is_empty());
    }
}

mod success {
    use super::*;

    #[test]
    fn revised_formula_is_entailed() {
        let mut base = Base::default();
        assert_eq!(base.revise(Some(formula("p")), 0.5), ReviseOk::Expanded);
        assert!(base.entails(&formula("p")));
    }

    #[test]
    fn after_contraction_too() {
        let mut base = Base::default();
        base.revise(Some(formula("p")), 0.5);
        assert_eq!(base.revise(Some(formula("~p")), 0.7), ReviseOk::Contracted);
        assert!(base.entails(&formula("~p")));
    }
}

mod inclusion {
    use super::*;

    #[test]
    fn contraction_only_removes() {
        let mut base = Base::default();
        base.revise(Some(formula("p")), 0.5);
        base.revise(Some(formula("q")), 0.6);

        let before = base.snapshot();
        let incoming = formula("~q");

        assert_eq!(base.revise(Some(incoming.clone()), 0.7), ReviseOk::Contracted);

        // Everything held afterwards was held before, or is the incoming formula.
        for held in base.formulas() {
            assert!(before.contains_key(held) || *held == incoming);
        }

        assert!(base.contains(&formula("p")));
        assert!(!base.contains(&formula("q")));
    }
}

mod vacuity {
    use super::*;

    #[test]
    fn no_contradiction_means_plain_expansion() {
        let mut base = Base::default();
        base.revise(Some(formula("p")), 0.5);
        let before = base.snapshot();

        assert_eq!(base.revise(Some(formula("q")), 0.6), ReviseOk::Expanded);

        // Every prior belief survives, at its prior priority.
        for (held, priority) in before {
            assert_eq!(base.priority_of(&held), Some(priority));
        }
        assert_eq!(base.len(), 2);
    }
}

mod consistency {
    use super::*;

    #[test]
    fn base_stays_satisfiable_through_revision() {
        let mut base = Base::default();
        base.revise(Some(formula("p")), 0.5);
        base.revise(Some(formula("q")), 0.6);
        base.revise(Some(formula("~p")), 0.7);
        base.revise(Some(formula("q > r")), 0.4);
        base.revise(Some(formula("~r")), 0.9);

        assert!(base.is_consistent());

        // No held formula has its negation entailed.
        let held: Vec<Formula> = base.formulas().cloned().collect();
        for f in held {
            assert!(!base.entails(&Formula::not(f)));
        }
    }

    #[test]
    fn a_self_contradictory_formula_is_vetoed() {
        // No belief is the cause of the contradiction, so none gives way.
        let mut base = Base::default();
        base.revise(Some(formula("p")), 0.5);
        base.revise(Some(formula("q")), 0.6);

        assert_eq!(base.revise(Some(formula("r & ~r")), 0.9), ReviseOk::Vetoed);

        assert!(base.is_consistent());
        assert_eq!(base.priority_of(&formula("p")), Some(0.5));
        assert_eq!(base.priority_of(&formula("q")), Some(0.6));
        assert!(!base.contains(&formula("r & ~r")));
    }

    #[test]
    fn even_on_an_empty_base() {
        let mut base = Base::default();

        assert_eq!(base.revise(Some(formula("r & ~r")), 0.9), ReviseOk::Vetoed);

        assert!(base.is_empty());
        assert!(base.is_consistent());
    }

    #[test]
    fn direct_contraction_agrees() {
        let mut base = Base::default();
        base.expand(formula("p"), 0.5);

        assert_eq!(base.contract(formula("q & ~q"), 0.9), ContractOk::Vetoed);

        assert_eq!(base.priority_of(&formula("p")), Some(0.5));
        assert!(base.is_consistent());
    }
}

mod priority {
    use super::*;

    #[test]
    fn contraction_never_removes_an_equally_entrenched_belief() {
        let mut base = Base::default();
        base.revise(Some(formula("p")), 0.5);

        assert_eq!(base.revise(Some(formula("~p")), 0.5), ReviseOk::Vetoed);
        assert_eq!(base.priority_of(&formula("p")), Some(0.5));
    }

    #[test]
    fn a_veto_removes_nothing_at_all() {
        // a would lose to the incoming formula, but b vetoes the whole contraction,
        // so a survives as well.
        let mut base = Base::default();
        base.expand(formula("a"), 0.3);
        base.expand(formula("b"), 0.9);

        assert_eq!(base.contract(formula("~a & ~b"), 0.5), ContractOk::Vetoed);

        assert_eq!(base.priority_of(&formula("a")), Some(0.3));
        assert_eq!(base.priority_of(&formula("b")), Some(0.9));
        assert!(!base.contains(&formula("~a & ~b")));
    }

    #[test]
    fn lower_priority_contradictions_give_way() {
        let mut base = Base::default();
        base.expand(formula("a"), 0.3);
        base.expand(formula("b"), 0.9);

        // Only a contradicts the incoming formula, and a is less entrenched.
        assert_eq!(base.contract(formula("~a"), 0.5), ContractOk::Contracted);

        assert!(!base.contains(&formula("a")));
        assert_eq!(base.priority_of(&formula("b")), Some(0.9));
        assert_eq!(base.priority_of(&formula("~a")), Some(0.5));
    }
}

mod expansion {
    use super::*;

    #[test]
    fn raises_strictly_lower_priorities() {
        let mut base = Base::default();

        assert_eq!(base.expand(formula("p"), 0.4), ExpandOk::Added);
        assert_eq!(base.expand(formula("p"), 0.6), ExpandOk::Raised);
        assert_eq!(base.priority_of(&formula("p")), Some(0.6));

        assert_eq!(base.expand(formula("p"), 0.6), ExpandOk::Unchanged);
        assert_eq!(base.expand(formula("p"), 0.2), ExpandOk::Unchanged);
        assert_eq!(base.priority_of(&formula("p")), Some(0.6));

        assert_eq!(base.len(), 1);
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn revision_of_an_empty_base() {
        let mut base = Base::default();
        base.revise(Some(formula("p")), 0.5);

        assert_eq!(base.len(), 1);
        assert_eq!(base.priority_of(&formula("p")), Some(0.5));
    }

    #[test]
    fn independent_formulas_accumulate() {
        let mut base = Base::default();
        base.revise(Some(formula("p")), 0.5);
        base.revise(Some(formula("q")), 0.6);

        assert_eq!(base.len(), 2);
        assert_eq!(base.priority_of(&formula("p")), Some(0.5));
        assert_eq!(base.priority_of(&formula("q")), Some(0.6));
    }

    #[test]
    fn a_stronger_negation_replaces() {
        let mut base = Base::default();
        base.revise(Some(formula("p")), 0.5);
        base.revise(Some(formula("~p")), 0.7);

        assert_eq!(base.len(), 1);
        assert_eq!(base.priority_of(&formula("~p")), Some(0.7));
    }

    #[test]
    fn a_weaker_negation_is_rejected() {
        let mut base = Base::default();
        base.revise(Some(formula("p")), 0.5);
        base.revise(Some(formula("~p")), 0.3);

        assert_eq!(base.len(), 1);
        assert_eq!(base.priority_of(&formula("p")), Some(0.5));
        assert!(!base.contains(&formula("~p")));
    }

    #[test]
    fn the_same_under_random_splits() {
        let config = Config {
            split_selection: SplitSelection::Random,
            rng_seed: 3,
        };
        let mut base = Base::from_config(config);

        base.revise(Some(formula("p")), 0.5);
        base.revise(Some(formula("q")), 0.6);
        base.revise(Some(formula("~p")), 0.7);
        base.revise(Some(formula("~q")), 0.2);

        assert_eq!(base.priority_of(&formula("~p")), Some(0.7));
        assert_eq!(base.priority_of(&formula("q")), Some(0.6));
        assert!(!base.contains(&formula("p")));
        assert!(!base.contains(&formula("~q")));
    }

    #[test]
    fn clearing_empties_the_base() {
        let mut base = Base::default();
        base.revise(Some(formula("p")), 0.5);
        base.clear();

        assert!(base.is_empty());
        assert!(base.snapshot().is_empty());
    }
}
