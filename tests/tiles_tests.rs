use vindinium::{BoardDefect, GameError, Position, Tile, Tiles};

fn sample_board() -> Tiles {
    // row 0: hero 1, empty, wood
    // row 1: tavern, unowned mine, mine owned by hero 3
    // row 2: empty, hero 4, unknown
    Tiles::parse(3, concat!("@1  ##", "[]$-$3", "  @4??")).unwrap()
}

#[test]
fn parse_decodes_every_canonical_token() {
    let tiles = sample_board();
    assert_eq!(tiles.tile_at(Position::new(0, 0)), Tile::Hero(0));
    assert_eq!(tiles.tile_at(Position::new(0, 1)), Tile::Empty);
    assert_eq!(tiles.tile_at(Position::new(0, 2)), Tile::Wood);
    assert_eq!(tiles.tile_at(Position::new(1, 0)), Tile::Tavern);
    assert_eq!(tiles.tile_at(Position::new(1, 1)), Tile::Mine(None));
    assert_eq!(tiles.tile_at(Position::new(1, 2)), Tile::Mine(Some(2)));
    assert_eq!(tiles.tile_at(Position::new(2, 1)), Tile::Hero(3));
    assert_eq!(tiles.tile_at(Position::new(2, 2)), Tile::Unknown);
}

#[test]
fn parse_rejects_unknown_tokens() {
    let result = Tiles::parse(2, "  XX    ");
    match result {
        Err(GameError::MalformedBoard(BoardDefect::UnknownToken { index, token })) => {
            assert_eq!(index, 1);
            assert_eq!(token, "XX");
        }
        other => panic!("expected unknown token error, got {:?}", other),
    }
}

#[test]
fn parse_rejects_wrong_stream_length() {
    let result = Tiles::parse(3, "    ");
    match result {
        Err(GameError::MalformedBoard(BoardDefect::WrongLength { expected, actual })) => {
            assert_eq!(expected, 18);
            assert_eq!(actual, 4);
        }
        other => panic!("expected wrong length error, got {:?}", other),
    }
}

#[test]
fn parse_lossy_maps_unknown_tokens_to_unknown() {
    let tiles = Tiles::parse_lossy(2, "  XX    ").unwrap();
    assert_eq!(tiles.tile_at(Position::new(0, 1)), Tile::Unknown);
    assert_eq!(tiles.tile_at(Position::new(0, 0)), Tile::Empty);
}

#[test]
fn parse_lossy_still_rejects_wrong_length() {
    assert!(Tiles::parse_lossy(2, "  ").is_err());
}

#[test]
fn token_round_trip() {
    let tiles = sample_board();
    let text = tiles.to_token_string();
    let reparsed = Tiles::parse(3, &text).unwrap();
    assert_eq!(tiles, reparsed);
}

#[test]
fn neutralize_strips_heroes_and_mine_owners() {
    let background = sample_board().neutralize();
    assert_eq!(background.tile_at(Position::new(0, 0)), Tile::Empty);
    assert_eq!(background.tile_at(Position::new(2, 1)), Tile::Empty);
    assert_eq!(background.tile_at(Position::new(1, 2)), Tile::Mine(None));
    // static cells untouched
    assert_eq!(background.tile_at(Position::new(0, 2)), Tile::Wood);
    assert_eq!(background.tile_at(Position::new(1, 0)), Tile::Tavern);
    assert_eq!(background.tile_at(Position::new(2, 2)), Tile::Unknown);
}

#[test]
fn neutralize_is_idempotent() {
    let once = sample_board().neutralize();
    let twice = once.neutralize();
    assert_eq!(once, twice);
}

#[test]
fn extract_owned_mines_is_per_seat() {
    let tiles = Tiles::parse(2, "$1$3$1  ").unwrap();
    let owned = tiles.extract_owned_mines();
    assert_eq!(owned[0].len(), 2);
    assert!(owned[0].contains(&Position::new(0, 0)));
    assert!(owned[0].contains(&Position::new(1, 0)));
    assert_eq!(owned[1].len(), 0);
    assert_eq!(owned[2].len(), 1);
    assert!(owned[2].contains(&Position::new(0, 1)));
    assert_eq!(owned[3].len(), 0);
}

#[test]
fn checked_lookup_reads_out_of_bounds_as_unknown() {
    let tiles = sample_board();
    assert_eq!(tiles.tile_at_checked(Position::new(-1, 0)), Tile::Unknown);
    assert_eq!(tiles.tile_at_checked(Position::new(0, -1)), Tile::Unknown);
    assert_eq!(tiles.tile_at_checked(Position::new(3, 0)), Tile::Unknown);
    assert_eq!(tiles.tile_at_checked(Position::new(0, 3)), Tile::Unknown);
    assert_eq!(tiles.tile_at_checked(Position::new(0, 0)), Tile::Hero(0));
}

#[test]
fn hash_depends_on_content_and_dimensions() {
    let aa = Tiles::parse(2, "        ").unwrap();
    let bb = Tiles::parse(2, "      ##").unwrap();
    assert_ne!(aa.hash_value(), bb.hash_value());
    assert_eq!(aa.hash_value(), Tiles::parse(2, "        ").unwrap().hash_value());
}
