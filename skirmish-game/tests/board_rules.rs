use skirmish_game::{Board, CellIndex, Mark};

fn place_all(board: &mut Board, cells: &[u32], mark: Mark) {
    for &value in cells {
        board.place(CellIndex::from_user(value).unwrap(), mark).unwrap();
    }
}

#[test]
fn cell_addressing_is_one_indexed_row_major() {
    assert_eq!(CellIndex::from_user(0), None);
    assert_eq!(CellIndex::from_user(10), None);
    assert_eq!(CellIndex::from_user(1).unwrap().as_usize(), 0);
    assert_eq!(CellIndex::from_user(5).unwrap().as_usize(), 4);
    assert_eq!(CellIndex::from_user(9).unwrap().as_usize(), 8);
}

#[test]
fn empty_board_accepts_every_cell() {
    let board = Board::new();
    for value in 1..=9 {
        assert!(board.is_legal(value));
    }
    assert!(!board.is_legal(0));
    assert!(!board.is_legal(10));
}

#[test]
fn occupied_cell_is_never_overwritten() {
    let mut board = Board::new();
    let center = CellIndex::from_user(5).unwrap();
    board.place(center, Mark::X).unwrap();
    assert!(!board.is_legal(5));
    assert!(board.place(center, Mark::O).is_err());
    assert_eq!(board.get(center), Some(Mark::X));
}

#[test]
fn all_eight_lines_win() {
    let lines: [[u32; 3]; 8] = [
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
        [1, 4, 7],
        [2, 5, 8],
        [3, 6, 9],
        [1, 5, 9],
        [3, 5, 7],
    ];
    for line in lines {
        let mut board = Board::new();
        place_all(&mut board, &line, Mark::O);
        assert_eq!(board.winner(), Some(Mark::O), "line {line:?}");
    }
}

#[test]
fn no_winner_without_a_complete_line() {
    let mut board = Board::new();
    assert_eq!(board.winner(), None);
    place_all(&mut board, &[1, 2], Mark::X);
    place_all(&mut board, &[3], Mark::O);
    assert_eq!(board.winner(), None);
}

#[test]
fn mixed_line_does_not_win() {
    let mut board = Board::new();
    place_all(&mut board, &[1, 3], Mark::X);
    place_all(&mut board, &[2], Mark::O);
    assert_eq!(board.winner(), None);
}

#[test]
fn full_board_is_detected() {
    let mut board = Board::new();
    assert!(!board.is_full());
    place_all(&mut board, &[1, 2, 3, 4, 5, 6, 7, 8], Mark::X);
    assert!(!board.is_full());
    place_all(&mut board, &[9], Mark::O);
    assert!(board.is_full());
    assert_eq!(board.occupied(), 9);
}

#[test]
fn empty_board_renders_blank_grid() {
    let board = Board::new();
    let expected = concat!(
        "\n",
        "     |     |    \n",
        "     |     |   \n",
        "____ | ___ | ____\n",
        "     |     |    \n",
        "     |     |   \n",
        "____ | ___ | ____\n",
        "     |     |    \n",
        "     |     |   \n",
        "     |     |    \n",
        "\n",
    );
    assert_eq!(board.render(), expected);
}

#[test]
fn render_shows_marks_in_place() {
    let mut board = Board::new();
    place_all(&mut board, &[1, 5], Mark::X);
    place_all(&mut board, &[9], Mark::O);
    let rendered = board.render();
    assert!(rendered.contains("  X  |     |   \n"));
    assert!(rendered.contains("     |  X  |   \n"));
    assert!(rendered.contains("     |     |  O\n"));
}

#[test]
fn render_is_idempotent() {
    let mut board = Board::new();
    place_all(&mut board, &[2, 4, 6], Mark::X);
    assert_eq!(board.render(), board.render());
}
