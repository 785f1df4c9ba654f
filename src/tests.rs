#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;

    use crate::builder::{BuilderInvalidReason, PuzzleBuilder};
    use crate::{Assignment, CrosswordSolver, Direction, Location, SearchOutcome, SolverConfig, SolverFailure, Variable, WordList, Worklist};

    fn dims(width: usize, height: usize) -> (NonZero<usize>, NonZero<usize>) {
        (NonZero::new(width).unwrap(), NonZero::new(height).unwrap())
    }

    const FRAME: &str = "____
_##_
____
";

    const FRAME_WORDS: [&str; 6] = ["ABCD", "AEF", "DGH", "FIJH", "XYZW", "QRS"];

    #[test]
    fn derive_slots_from_structure() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();

        assert_eq!(puzzle.variables().collect_vec(), vec![
            Variable::new(Location(0, 0), Direction::Across, 4),
            Variable::new(Location(0, 2), Direction::Across, 4),
            Variable::new(Location(0, 0), Direction::Down, 3),
            Variable::new(Location(3, 0), Direction::Down, 3),
        ]);
        assert_eq!(puzzle.dims(), dims(4, 3));
        assert!(puzzle.is_open(Location(3, 1)));
        assert!(!puzzle.is_open(Location(1, 1)));
        assert!(!puzzle.is_open(Location(9, 9)));
    }

    #[test]
    fn overlaps_are_symmetric() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();
        let bottom = Variable::new(Location(0, 2), Direction::Across, 4);
        let right = Variable::new(Location(3, 0), Direction::Down, 3);
        let top = Variable::new(Location(0, 0), Direction::Across, 4);

        assert_eq!(puzzle.overlap(bottom, right), Some((3, 2)));
        assert_eq!(puzzle.overlap(right, bottom), Some((2, 3)));
        assert_eq!(puzzle.overlap(top, bottom), None);
        assert_eq!(puzzle.degree(top), 2);
        assert_eq!(puzzle.neighbors(right).sorted().collect_vec(), vec![top, bottom]);
    }

    #[test]
    fn structure_display_pads_short_rows() {
        let puzzle = PuzzleBuilder::from_structure("__\n_\n#x_\n").build().unwrap();

        assert_eq!(format!("{}", puzzle), "__#
_##
##_
");
    }

    #[test]
    fn empty_structure_is_invalid() {
        let builder = PuzzleBuilder::from_structure("");

        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::EmptyStructure]));
        assert!(builder.build().is_err());
    }

    #[test]
    fn slot_out_of_bounds_is_invalid() {
        let mut builder = PuzzleBuilder::with_dims(dims(3, 3));
        builder
            .open_slot(Location(1, 0), Direction::Across, 3)
            .open(Location(0, 0));

        // the slot was rejected whole, and later calls were ignored
        assert_eq!(builder.build().err(), Some(&vec![BuilderInvalidReason::OutOfBounds]));

        let mut valid = PuzzleBuilder::with_dims(dims(3, 3));
        valid.open(Location(0, 0)).open(Location(1, 0)).block(Location(1, 0));
        assert_eq!(valid.build().unwrap().variable_count(), 0);
    }

    #[test]
    fn parse_word_list() {
        let words: WordList = "one\n  Two \n\nONE\r\n".parse().unwrap();

        assert_eq!(words.len(), 2);
        assert!(words.contains("ONE"));
        assert!(words.contains("TWO"));
        assert_eq!(words.iter().collect_vec(), vec!["ONE", "TWO"]);
    }

    #[test]
    fn parse_worklist() {
        assert_eq!("fifo".parse::<Worklist>(), Ok(Worklist::Fifo));
        assert_eq!("LIFO".parse::<Worklist>(), Ok(Worklist::Lifo));
        assert!("stack".parse::<Worklist>().is_err());
        assert_eq!(Worklist::Fifo.to_string(), "fifo");
    }

    #[test]
    fn node_consistency_keeps_matching_lengths() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();
        let mut solver = CrosswordSolver::new(&puzzle, ["AB", "ABC", "ABCD", "ABCDE", "XYZ"]);
        solver.enforce_node_consistency();

        for variable in puzzle.variables() {
            let domain = solver.domains().get(variable);
            assert!(!domain.is_empty());
            assert!(domain.iter().all(|word| word.chars().count() == variable.length()));
        }
        assert_eq!(solver.statistics().node_consistency_removed, 4 * 5 - (2 * 1 + 2 * 2));
    }

    #[test]
    fn revise_without_overlap_changes_nothing() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();
        let top = Variable::new(Location(0, 0), Direction::Across, 4);
        let bottom = Variable::new(Location(0, 2), Direction::Across, 4);
        let mut solver = CrosswordSolver::new(&puzzle, FRAME_WORDS);
        solver.enforce_node_consistency();
        let before = solver.domains().clone();

        assert!(!solver.revise(top, bottom));
        assert_eq!(solver.domains(), &before);
    }

    #[test]
    fn revise_rejects_support_from_the_same_word() {
        // across[2] shares a cell with down[0]
        let mut builder = PuzzleBuilder::with_dims(dims(3, 3));
        builder
            .open_slot(Location(0, 0), Direction::Across, 3)
            .open_slot(Location(2, 0), Direction::Down, 3);
        let puzzle = builder.build().unwrap();
        let across = Variable::new(Location(0, 0), Direction::Across, 3);
        let down = Variable::new(Location(2, 0), Direction::Down, 3);

        let mut solver = CrosswordSolver::new(&puzzle, ["ABA"]);
        assert!(solver.revise(across, down));
        assert!(solver.domains().get(across).is_empty());

        let mut solver = CrosswordSolver::new(&puzzle, ["ABA", "AXE"]);
        assert!(solver.revise(across, down));
        assert_eq!(solver.domains().get(across).iter().collect_vec(), vec!["ABA"]);
        assert!(!solver.revise(across, down));
    }

    #[test]
    fn ac3_prunes_to_unique_fill() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();
        let mut solver = CrosswordSolver::new(&puzzle, FRAME_WORDS);
        solver.enforce_node_consistency();
        solver.ac3(None).unwrap();

        for variable in puzzle.variables() {
            assert_eq!(solver.domains().len_of(variable), 1, "{:?}", variable);
        }
        assert_eq!(solver.statistics().arc_consistency_removed, 8);
    }

    #[test]
    fn ac3_is_idempotent() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();
        let mut solver = CrosswordSolver::new(&puzzle, ["ABCD", "AXCD", "AEF", "ABF", "DGH", "DXH", "FIJH", "FOOH", "QRS"]);
        solver.enforce_node_consistency();
        solver.ac3(None).unwrap();
        let fixpoint = solver.domains().clone();

        solver.ac3(None).unwrap();
        assert_eq!(solver.domains(), &fixpoint);
    }

    #[test]
    fn worklist_disciplines_agree() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();
        let words = ["ABCD", "AXCD", "AEF", "ABF", "DGH", "DXH", "FIJH", "FOOH", "QRS", "QRSQ"];

        let mut lifo = CrosswordSolver::new(&puzzle, words);
        lifo.enforce_node_consistency();
        lifo.ac3(None).unwrap();

        let mut fifo = CrosswordSolver::new(&puzzle, words)
            .with_config(SolverConfig::default().with_worklist(Worklist::Fifo));
        fifo.enforce_node_consistency();
        fifo.ac3(None).unwrap();

        assert_eq!(lifo.domains(), fifo.domains());
    }

    #[test]
    fn ac3_with_no_arcs_does_nothing() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();
        let mut solver = CrosswordSolver::new(&puzzle, FRAME_WORDS);
        solver.enforce_node_consistency();
        let before = solver.domains().clone();

        solver.ac3(Some(vec![])).unwrap();
        assert_eq!(solver.domains(), &before);
    }

    #[test]
    fn consistency_checks() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();
        let solver = CrosswordSolver::new(&puzzle, FRAME_WORDS);
        let top = Variable::new(Location(0, 0), Direction::Across, 4);
        let bottom = Variable::new(Location(0, 2), Direction::Across, 4);
        let left = Variable::new(Location(0, 0), Direction::Down, 3);

        let mut assignment = Assignment::new();
        assert!(solver.consistent(&assignment));

        assignment.assign(top, "ABCD");
        assignment.assign(left, "AEF");
        assert!(solver.consistent(&assignment));
        assert!(!solver.assignment_complete(&assignment));

        assignment.assign(left, "QRS");
        assert!(!solver.consistent(&assignment), "crossing letters disagree");

        assignment.assign(left, "ABCD");
        assert!(!solver.consistent(&assignment), "word too long for its slot");

        assignment.unassign(left);
        assignment.assign(bottom, "ABCD");
        assert!(!solver.consistent(&assignment), "word used twice");
    }

    #[test]
    fn select_prefers_fewest_candidates() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();
        let mut solver = CrosswordSolver::new(&puzzle, ["ABCD", "FIJH", "XYZW", "AEF", "DGH", "QRS", "ZZZ"]);
        solver.enforce_node_consistency();
        let top = Variable::new(Location(0, 0), Direction::Across, 4);
        let bottom = Variable::new(Location(0, 2), Direction::Across, 4);

        let mut assignment = Assignment::new();
        assert_eq!(solver.select_unassigned_variable(&assignment), Some(top));

        assignment.assign(top, "ABCD");
        assert_eq!(solver.select_unassigned_variable(&assignment), Some(bottom));
    }

    #[test]
    fn select_breaks_ties_by_degree() {
        let puzzle = PuzzleBuilder::from_structure("___\n#_#\n___\n").build().unwrap();
        let mut solver = CrosswordSolver::new(&puzzle, ["ONE", "TWO", "SIX"]);
        solver.enforce_node_consistency();
        let middle = Variable::new(Location(1, 0), Direction::Down, 3);

        assert_eq!(puzzle.degree(middle), 2);
        assert_eq!(solver.select_unassigned_variable(&Assignment::new()), Some(middle));
    }

    #[test]
    fn select_never_returns_assigned_variables() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();
        let solver = CrosswordSolver::new(&puzzle, FRAME_WORDS);
        let mut assignment = Assignment::new();

        while let Some(variable) = solver.select_unassigned_variable(&assignment) {
            assert!(!assignment.is_assigned(variable));
            assignment.assign(variable, "X");
        }
        assert!(solver.assignment_complete(&assignment));
    }

    #[test]
    fn order_least_constraining_first() {
        let mut builder = PuzzleBuilder::with_dims(dims(3, 3));
        builder
            .open_slot(Location(0, 0), Direction::Across, 3)
            .open_slot(Location(2, 0), Direction::Down, 3);
        let puzzle = builder.build().unwrap();
        let across = Variable::new(Location(0, 0), Direction::Across, 3);
        let down = Variable::new(Location(2, 0), Direction::Down, 3);

        let mut solver = CrosswordSolver::new(&puzzle, ["CAT", "TOP", "TAN", "SAX", "XYZ"]);
        solver.enforce_node_consistency();

        assert_eq!(
            solver.order_domain_values(across, &Assignment::new()),
            vec!["CAT", "SAX", "TAN", "TOP", "XYZ"],
        );

        // an assigned neighbor no longer counts, leaving alphabetical order
        let mut assignment = Assignment::new();
        assignment.assign(down, "TOP");
        assert_eq!(
            solver.order_domain_values(across, &assignment),
            vec!["CAT", "SAX", "TAN", "TOP", "XYZ"],
        );
        assert_eq!(
            solver.order_domain_values(down, &Assignment::new()),
            vec!["TAN", "TOP", "XYZ", "CAT", "SAX"],
        );
    }

    #[test]
    fn backtrack_from_partial_assignment() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();
        let mut solver = CrosswordSolver::new(&puzzle, FRAME_WORDS);
        solver.enforce_node_consistency();
        let top = Variable::new(Location(0, 0), Direction::Across, 4);

        let mut assignment = Assignment::new();
        assignment.assign(top, "XYZW");
        assert_eq!(solver.backtrack(assignment), SearchOutcome::Exhausted);

        let mut assignment = Assignment::new();
        assignment.assign(top, "ABCD");
        match solver.backtrack(assignment) {
            SearchOutcome::Solved(solved) => assert_eq!(solved.word(top), Some("ABCD")),
            SearchOutcome::Exhausted => panic!("expected a fill"),
        }
    }

    #[test]
    fn solve_frame() {
        let puzzle = PuzzleBuilder::from_structure(FRAME).build().unwrap();
        let solved = puzzle.solve(FRAME_WORDS).unwrap();

        assert_eq!(format!("{}", solved), "ABCD
E██G
FIJH
");
        assert_eq!(solved.assignment().len(), 4);
        assert_eq!(solved.letter_grid()[[1, 3]], Some('G'));
        assert_eq!(solved.letter_grid()[[1, 1]], None);
    }

    #[test]
    fn solve_numbers() {
        let structure = "#___#
#_##_
#_##_
#_##_
#____
";
        let words: WordList = "one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\nnine\nten\n".parse().unwrap();
        let puzzle = PuzzleBuilder::from_structure(structure).build().unwrap();
        let solved = puzzle.solve(words).unwrap();

        assert_eq!(format!("{}", solved), "█SIX█
█E██F
█V██I
█E██V
█NINE
");
        assert!(solved.statistics().states >= 5);
    }

    #[test]
    fn crossing_letters_never_match() {
        // across[0] shares a cell with down[2]
        let mut builder = PuzzleBuilder::with_dims(dims(3, 3));
        builder
            .open_slot(Location(0, 2), Direction::Across, 3)
            .open_slot(Location(0, 0), Direction::Down, 3);
        let puzzle = builder.build().unwrap();

        assert!(matches!(puzzle.solve(["cat", "dog"]), Err(SolverFailure::Inconsistent { .. })));

        // the last arc queued, down against across, is revised first and empties down
        let down = Variable::new(Location(0, 0), Direction::Down, 3);
        let mut solver = CrosswordSolver::new(&puzzle, ["cat", "dog"]);
        solver.enforce_node_consistency();
        assert_eq!(solver.ac3(None), Err(SolverFailure::Inconsistent { variable: down }));
        assert!(solver.domains().is_empty_for(down));
        assert_eq!(solver.statistics().states, 0);
        assert_eq!(solver.statistics().backtracks, 0);
    }

    #[test]
    fn crossing_letters_match() {
        let mut builder = PuzzleBuilder::with_dims(dims(3, 3));
        builder
            .open_slot(Location(0, 0), Direction::Across, 3)
            .open_slot(Location(2, 0), Direction::Down, 3);
        let puzzle = builder.build().unwrap();
        let solved = puzzle.solve(["cat", "two"]).unwrap();

        assert_eq!(solved.assignment().word(Variable::new(Location(0, 0), Direction::Across, 3)), Some("cat"));
        assert_eq!(solved.assignment().word(Variable::new(Location(2, 0), Direction::Down, 3)), Some("two"));
    }

    #[test]
    fn isolated_slot_takes_any_word() {
        let mut builder = PuzzleBuilder::with_dims(dims(4, 1));
        builder.open_slot(Location(0, 0), Direction::Across, 4);
        let puzzle = builder.build().unwrap();
        let solved = puzzle.solve(["word", "test"]).unwrap();

        let word = solved.assignment().word(Variable::new(Location(0, 0), Direction::Across, 4));
        assert!(matches!(word, Some("word") | Some("test")));
    }

    #[test]
    fn no_word_of_slot_length() {
        let mut builder = PuzzleBuilder::with_dims(dims(5, 1));
        builder.open_slot(Location(0, 0), Direction::Across, 5);
        let puzzle = builder.build().unwrap();
        let slot = Variable::new(Location(0, 0), Direction::Across, 5);

        let failure = puzzle.solve(["cat", "dog"]).err();
        assert_eq!(failure, Some(SolverFailure::Inconsistent { variable: slot }));
        assert_eq!(
            failure.unwrap().to_string(),
            "no word fits the across slot of length 5 at row 0, column 0",
        );
    }

    #[test]
    fn search_exhausts_without_reusing_words() {
        let puzzle = PuzzleBuilder::from_structure("___\n###\n___\n").build().unwrap();

        assert_eq!(puzzle.variable_count(), 2);
        assert_eq!(puzzle.solve(["CAT"]).err(), Some(SolverFailure::Exhausted));
        assert!(puzzle.solve(["CAT", "DOG"]).is_ok());
    }
}
