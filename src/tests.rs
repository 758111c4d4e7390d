#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;

    use crate::board::Board;
    use crate::builder::{BoardBuilder, BuilderInvalidReason};
    use crate::input::{parse, parse_board, InputError, MAX_CELLS};
    use crate::location::{Dimension, Location};
    use crate::report::{render, write_report, Report};

    fn dims(rows: usize, cols: usize) -> (Dimension, Dimension) {
        (NonZero::new(rows).unwrap(), NonZero::new(cols).unwrap())
    }

    fn solve_text(text: &str) -> String {
        render(&parse_board(text).unwrap().solve())
    }

    #[test]
    fn single_edible_cell() {
        assert_eq!(solve_text("1 1\n0\n"), "1
1 1
");
    }

    #[test]
    fn single_poisoned_cell() {
        assert_eq!(solve_text("1 1\n1\n"), "0\n");
    }

    #[test]
    fn fully_edible_two_by_two() {
        let board = parse_board("2 2\n0 0\n").unwrap();
        assert_eq!(format!("{}", board), "..
..
");

        let table = board.solve();
        assert_eq!(format!("{}", table), "WW
WW
");
        assert_eq!(render(&table), "4
1 1
1 2
2 1
2 2
");
    }

    #[test]
    fn right_neighbour_is_read_before_it_is_filled() {
        // (1, 0) is poisoned and (0, 1) is still false when (0, 0) looks at it
        let table = parse_board("2 2 0 1").unwrap().solve();
        assert_eq!(format!("{}", table), ".W
.W
");
        assert_eq!(render(&table), "2
1 2
2 2
");
    }

    #[test]
    fn staircase() {
        let board = parse_board("4 5\n3 2 1 0\n").unwrap();
        assert_eq!(format!("{}", board), "###..
##...
#....
.....
");

        let table = board.solve();
        assert_eq!(format!("{}", table), "...WW
..WWW
.WWWW
WWWWW
");
        assert_eq!(table.count(), 14);
    }

    #[test]
    fn blocked_last_row_starves_rows_above() {
        let table = parse_board("3 3\n0 0 3\n").unwrap().solve();
        assert_eq!(table.count(), 0);
        assert_eq!(render(&table), "0\n");
    }

    #[test]
    fn poisoned_gap_cuts_the_chain() {
        // the middle row is poisoned everywhere except its last column
        let table = parse_board("3 3\n0 2 0\n").unwrap().solve();
        assert_eq!(format!("{}", table), "..W
..W
WWW
");
        assert_eq!(render(&table), "5
1 3
2 3
3 1
3 2
3 3
");
    }

    #[test]
    fn fully_poisoned_rows_never_win() {
        let table = parse_board("4 3\n0 3 1 3\n").unwrap().solve();
        for row in [1, 3] {
            assert_eq!(table.count_in_row(row), 0);
            assert!((0..3).all(|col| !table.is_winning(Location(row, col))));
        }
    }

    #[test]
    fn last_row_follows_threshold() {
        for eaten in 0..=6 {
            let table = Board::from_thresholds(dims(3, 6), &[1, 4, eaten]).unwrap().solve();
            for col in 0..6 {
                assert_eq!(table.is_winning(Location(2, col)), col >= eaten, "eaten {eaten}, col {col}");
            }
        }
    }

    #[test]
    fn more_poison_never_adds_wins_to_a_row() {
        let base = [0, 2, 1, 3, 0];
        for row in 0..base.len() {
            let counts = (0..=4)
                .map(|eaten| {
                    let mut thresholds = base;
                    thresholds[row] = eaten;
                    Board::from_thresholds(dims(5, 4), &thresholds).unwrap().solve().count_in_row(row)
                })
                .collect_vec();

            assert!(counts.iter().tuple_windows().all(|(a, b)| a >= b), "row {row}: {counts:?}");
        }
    }

    #[test]
    fn evaluation_is_repeatable() {
        let board = parse_board("3 4\n1 0 2\n").unwrap();
        assert_eq!(board.solve(), board.solve());
    }

    #[test]
    fn winning_cells_are_row_major() {
        let table = parse_board("3 3\n0 1 0\n").unwrap().solve();
        let cells = table.winning_vec();
        assert_eq!(cells.len(), table.count());
        assert!(cells.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[test]
    fn report_writer_matches_render() {
        let table = parse_board("3 4\n2 0 1\n").unwrap().solve();
        let mut out = Vec::new();
        write_report(&table, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render(&table));
        assert_eq!(format!("{}", Report(&table)), render(&table));
        assert_eq!(render(&table), "8
1 3
1 4
2 2
2 3
2 4
3 2
3 3
3 4
");
    }

    #[test]
    fn builder_single_cells() {
        let board = BoardBuilder::with_dims(dims(2, 3))
            .poison(Location(0, 2))
            .poison(Location(1, 0))
            .build()
            .unwrap();

        assert_eq!(format!("{}", board), "..#
#..
");
    }

    #[test]
    fn builder_rejects_out_of_bounds() {
        let mut builder = BoardBuilder::with_dims(dims(2, 3));
        builder.poison_prefix(0, 4);
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::ThresholdOutOfBounds { row: 0, eaten: 4 }]));

        // once invalid, later calls are ignored
        builder.poison_prefix(5, 0);
        assert_eq!(builder.build().unwrap_err().len(), 1);

        let mut builder = BoardBuilder::with_dims(dims(2, 3));
        assert!(builder.poison_prefix(2, 0).build().is_err());

        let mut builder = BoardBuilder::with_dims(dims(2, 3));
        assert_eq!(
            builder.poison(Location(0, 3)).is_valid(),
            Some(&vec![BuilderInvalidReason::LocationOutOfBounds { location: Location(0, 3) }])
        );
    }

    #[test]
    fn parse_accepts_any_whitespace() {
        let puzzle = parse("  3\t2\n\n1\n0   2 ").unwrap();
        assert_eq!(puzzle.dims, dims(3, 2));
        assert_eq!(puzzle.eaten, vec![1, 0, 2]);
    }

    #[test]
    fn parse_ignores_trailing_tokens() {
        assert_eq!(parse("1 2 1 9 9").unwrap().eaten, vec![1]);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(parse(""), Err(InputError::MissingToken { .. })));
        assert!(matches!(parse("2 2\n1"), Err(InputError::MissingToken { .. })));
        assert_eq!(parse("2 x"), Err(InputError::NotAnInteger { token: "x".to_string() }));
        assert_eq!(parse("1 1 -1"), Err(InputError::NotAnInteger { token: "-1".to_string() }));
        assert_eq!(parse("0 3"), Err(InputError::ZeroDimension));
        assert_eq!(parse("3 0 0 0 0"), Err(InputError::ZeroDimension));
        assert_eq!(parse("2 3\n0 4"), Err(InputError::ThresholdOutOfRange { row: 2, eaten: 4, cols: 3 }));
    }

    #[test]
    fn oversized_boards_are_rejected_before_allocation() {
        assert_eq!(
            parse_board("1 10000000000000000000 0"),
            Err(InputError::BoardTooLarge { rows: 1, cols: 10000000000000000000 })
        );
        // rows * cols overflows usize
        assert!(matches!(parse("4294967296 4294967296"), Err(InputError::BoardTooLarge { .. })));
        assert!(matches!(
            parse(&format!("2 {}", MAX_CELLS / 2 + 1)),
            Err(InputError::BoardTooLarge { rows: 2, .. })
        ));

        // the limit itself is accepted
        assert_eq!(parse(&format!("1 {} 0", MAX_CELLS)).unwrap().dims, dims(1, MAX_CELLS));
    }

    #[test]
    fn puzzle_with_wrong_threshold_count_is_rejected() {
        let mut puzzle = parse("2 2\n0 0").unwrap();
        puzzle.eaten.push(1);
        assert_eq!(puzzle.board(), Err(InputError::RowCountMismatch { rows: 2, thresholds: 3 }));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            InputError::ThresholdOutOfRange { row: 2, eaten: 4, cols: 3 }.to_string(),
            "row 2 poisons 4 cells but the board has only 3 columns"
        );
        assert_eq!(
            parse("2 2\n1").unwrap_err().to_string(),
            "input ended early, expected threshold for row 2"
        );
    }
}
