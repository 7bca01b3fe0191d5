use entrench::{
    base::Base,
    config::{Config, SplitSelection},
    structures::{cnf::Cnf, formula::Formula},
};

fn formula(text: &str) -> Formula {
    Formula::parse(text).unwrap()
}

mod oracle {
    use super::*;

    #[test]
    fn the_empty_base_entails_tautologies() {
        let mut base = Base::default();

        assert!(base.entails(&formula("p | ~p")));
        assert!(base.entails(&formula("p > p")));
        assert!(base.entails(&formula("(p & q) > p")));

        assert!(!base.entails(&formula("p")));
        assert!(!base.entails(&formula("p | q")));
    }

    #[test]
    fn conjunction_elimination() {
        let mut base = Base::default();
        base.expand(formula("p & q"), 0.5);

        assert!(base.entails(&formula("p")));
        assert!(base.entails(&formula("q")));
        assert!(!base.entails(&formula("~p")));
    }

    #[test]
    fn modus_ponens() {
        let mut base = Base::default();
        base.expand(formula("p"), 0.5);
        base.expand(formula("p > q"), 0.5);

        assert!(base.entails(&formula("q")));
        assert!(!base.entails(&formula("~q")));
    }

    #[test]
    fn chained_implications() {
        let mut base = Base::default();
        base.expand(formula("p > q"), 0.5);
        base.expand(formula("q > r"), 0.5);
        base.expand(formula("p"), 0.5);

        assert!(base.entails(&formula("r")));
    }

    #[test]
    fn disjunction_is_weaker_than_its_disjuncts() {
        let mut base = Base::default();
        base.expand(formula("p | q"), 0.5);

        assert!(base.entails(&formula("p | q")));
        assert!(!base.entails(&formula("p")));
        assert!(!base.entails(&formula("q")));
    }

    #[test]
    fn equivalence() {
        // (a = (b | c)) & a settles b | c, but neither disjunct.
        let mut base = Base::default();
        let belief = Formula::and(
            Formula::equivalent(formula("a"), formula("b | c")),
            formula("a"),
        );
        base.expand(belief, 0.5);

        assert!(base.entails(&formula("b | c")));
        assert!(!base.entails(&formula("~b")));
        assert!(!base.entails(&formula("b")));
    }

    #[test]
    fn contradiction_detection() {
        let mut base = Base::default();
        base.expand(formula("p"), 0.5);
        base.expand(formula("q"), 0.5);

        assert!(base.has_contradiction(&formula("~p")));
        assert!(base.has_contradiction(&formula("~p | ~q")));
        assert!(base.has_contradiction(&formula("p > ~q")));
        assert!(!base.has_contradiction(&formula("r")));
        assert!(!base.has_contradiction(&formula("p & q")));

        // A self-contradictory candidate contradicts any base.
        assert!(base.has_contradiction(&formula("r & ~r")));
    }

    #[test]
    fn random_split_selection_agrees() {
        let config = Config {
            split_selection: SplitSelection::Random,
            rng_seed: 11,
        };
        let mut base = Base::from_config(config);

        assert!(base.entails(&formula("p | ~p")));
        assert!(!base.entails(&formula("p")));

        base.expand(formula("p > q"), 0.5);
        base.expand(formula("q > r"), 0.5);
        base.expand(formula("p"), 0.5);

        assert!(base.entails(&formula("r")));
        assert!(!base.entails(&formula("~r")));
    }
}

mod round_trip {
    use super::*;

    /// A formula with the shape of the cnf: the conjunction of its clauses, each clause the
    /// disjunction of its literals.
    fn formula_of(cnf: &Cnf) -> Formula {
        cnf.clauses()
            .iter()
            .map(|clause| {
                clause
                    .literals()
                    .map(|literal| {
                        let variable = Formula::variable(literal.variable().name());
                        match literal.polarity() {
                            true => variable,
                            false => Formula::not(variable),
                        }
                    })
                    .reduce(Formula::or)
                    .unwrap()
            })
            .reduce(Formula::and)
            .unwrap()
    }

    #[test]
    fn conversion_is_idempotent_under_entailment() {
        let samples = [
            "p",
            "~p",
            "p & (q | r)",
            "(p > q) > r",
            "~(p & q) | (r > s)",
            "(a | b) & (c | ~d) & ~a",
        ];

        for text in samples {
            let original = formula(text);
            let rebuilt = formula_of(&original.to_cnf());
            let re_rebuilt = formula_of(&rebuilt.to_cnf());

            let mut forward = Base::default();
            forward.expand(original.clone(), 0.5);
            assert!(forward.entails(&rebuilt), "{text}");
            assert!(forward.entails(&re_rebuilt), "{text}");

            let mut backward = Base::default();
            backward.expand(rebuilt, 0.5);
            assert!(backward.entails(&original), "{text}");
        }
    }
}
