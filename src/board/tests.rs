use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.to_index(3), 5);
    assert_eq!(pos.to_index(4), 6);

    assert_eq!(Pos::from_index(5, 3), pos);
    assert_eq!(Pos::from_index(15, 4), Pos::new(3, 3));
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(4);
    assert_eq!(board.size(), 4);
    assert_eq!(board.empty_count(), 16);
    assert!(!board.is_full());
    assert!(board.cells().iter().all(|c| c.is_empty()));
}

#[test]
fn test_try_place_accepts_empty_cell() {
    let mut board = Board::new(3);
    assert_eq!(board.try_place(Pos::new(1, 1), Mark::X), Ok(()));
    assert_eq!(board.get(Pos::new(1, 1)), Cell::Mark(Mark::X));
    assert_eq!(board.count(Mark::X), 1);
}

#[test]
fn test_try_place_rejects_occupied_cell() {
    let mut board = Board::new(3);
    board.place(Pos::new(0, 0), Mark::O);
    let before = board.clone();

    assert_eq!(
        board.try_place(Pos::new(0, 0), Mark::X),
        Err(MoveError::Occupied(Pos::new(0, 0)))
    );
    assert_eq!(board, before);
}

#[test]
fn test_try_place_rejects_out_of_bounds() {
    let mut board = Board::new(3);
    assert_eq!(
        board.try_place(Pos::new(3, 0), Mark::X),
        Err(MoveError::OutOfBounds(Pos::new(3, 0)))
    );
    assert_eq!(
        board.try_place(Pos::new(0, 7), Mark::X),
        Err(MoveError::OutOfBounds(Pos::new(0, 7)))
    );
    assert_eq!(board.empty_count(), 9);
}

#[test]
fn test_place_and_clear_restore_board() {
    let mut board = Board::new(3);
    let before = board.clone();
    board.place(Pos::new(2, 1), Mark::X);
    board.clear(Pos::new(2, 1));
    assert_eq!(board, before);
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new(3);
    board.place(Pos::new(0, 1), Mark::X);
    board.place(Pos::new(1, 1), Mark::O);

    let cells: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(
        cells,
        vec![
            Pos::new(0, 0),
            Pos::new(0, 2),
            Pos::new(1, 0),
            Pos::new(1, 2),
            Pos::new(2, 0),
            Pos::new(2, 1),
            Pos::new(2, 2),
        ]
    );
}

#[test]
fn test_get_signed_bounds() {
    let board = Board::new(3);
    assert_eq!(board.get_signed(0, 0), Some(Cell::Empty));
    assert_eq!(board.get_signed(-1, 0), None);
    assert_eq!(board.get_signed(0, 3), None);
}

#[test]
fn test_parse_board() {
    let board: Board = "XX./.O./...".parse().unwrap();
    assert_eq!(board.size(), 3);
    assert_eq!(board.get(Pos::new(0, 0)), Cell::Mark(Mark::X));
    assert_eq!(board.get(Pos::new(0, 1)), Cell::Mark(Mark::X));
    assert_eq!(board.get(Pos::new(1, 1)), Cell::Mark(Mark::O));
    assert_eq!(board.empty_count(), 6);
}

#[test]
fn test_parse_board_multiline() {
    let board: Board = "
        X..O
        ....
        .O..
        ...X
    "
    .parse()
    .unwrap();
    assert_eq!(board.size(), 4);
    assert_eq!(board.count(Mark::X), 2);
    assert_eq!(board.count(Mark::O), 2);
}

#[test]
fn test_parse_board_errors() {
    assert_eq!("".parse::<Board>(), Err(ParseBoardError::Empty));
    assert_eq!(
        "XX/...".parse::<Board>(),
        Err(ParseBoardError::NotSquare { rows: 2, row: 1, len: 3 })
    );
    assert_eq!(
        "X?/..".parse::<Board>(),
        Err(ParseBoardError::InvalidChar('?'))
    );
}

#[test]
fn test_display_round_trip() {
    let text = "XO./.X./..O";
    let board: Board = text.parse().unwrap();
    assert_eq!(board.to_string(), "XO.\n.X.\n..O");
}
