use vindinium::{
    BoardDto, Game, GameDto, GameError, GameMessage, HeroDto, Position, PositionDto,
    SnapshotDefect, Tile,
};

// 3x3 board with a mine owned by hero 1 at (0,0).
const BOARD_TILES: &str = "$1                ";

fn hero_dto(id: i32, x: i32, y: i32, mine_count: usize) -> HeroDto {
    HeroDto {
        id,
        name: format!("hero-{}", id),
        user_id: None,
        elo: None,
        pos: PositionDto { x, y },
        spawn_pos: PositionDto { x, y },
        life: 100,
        gold: 0,
        mine_count,
        crashed: false,
    }
}

fn valid_message() -> GameMessage {
    GameMessage {
        game: GameDto {
            id: String::from("g1"),
            turn: 0,
            max_turns: 40,
            heroes: vec![
                hero_dto(1, 0, 1, 1),
                hero_dto(2, 1, 0, 0),
                hero_dto(3, 1, 2, 0),
                hero_dto(4, 2, 1, 0),
            ],
            board: BoardDto {
                size: 3,
                tiles: String::from(BOARD_TILES),
            },
            finished: false,
        },
        hero: hero_dto(1, 0, 1, 1),
        token: None,
        view_url: String::from("http://example/view"),
        play_url: String::from("http://example/play"),
    }
}

#[test]
fn decodes_a_raw_json_snapshot() {
    let raw = r#"{
        "game": {
            "id": "g1",
            "turn": 4,
            "maxTurns": 40,
            "heroes": [
                {"id": 1, "name": "alice", "userId": "u1", "elo": 1200,
                 "pos": {"x": 0, "y": 1}, "spawnPos": {"x": 0, "y": 1},
                 "life": 87, "gold": 3, "mineCount": 1, "crashed": false},
                {"id": 2, "name": "bot",
                 "pos": {"x": 1, "y": 0}, "spawnPos": {"x": 1, "y": 0},
                 "life": 100, "gold": 0, "mineCount": 0, "crashed": false},
                {"id": 3, "name": "bot",
                 "pos": {"x": 1, "y": 2}, "spawnPos": {"x": 1, "y": 2},
                 "life": 100, "gold": 0, "mineCount": 0, "crashed": false},
                {"id": 4, "name": "bot",
                 "pos": {"x": 2, "y": 1}, "spawnPos": {"x": 2, "y": 1},
                 "life": 100, "gold": 0, "mineCount": 0, "crashed": true}
            ],
            "board": {"size": 3, "tiles": "$1                "},
            "finished": false
        },
        "hero": {"id": 1, "name": "alice", "userId": "u1", "elo": 1200,
                 "pos": {"x": 0, "y": 1}, "spawnPos": {"x": 0, "y": 1},
                 "life": 87, "gold": 3, "mineCount": 1, "crashed": false},
        "token": "abc",
        "viewUrl": "http://example/view",
        "playUrl": "http://example/play"
    }"#;

    let message: GameMessage = serde_json::from_str(raw).unwrap();
    assert_eq!(message.hero.id, 1);
    assert_eq!(message.game.max_turns, 40);

    let game = Game::from_message(&message).unwrap();
    assert_eq!(game.turn, 4);
    assert_eq!(game.state.next_hero_index, 0);

    // the mine on the board seeded seat 0's set
    let hero = &game.state.heroes[0];
    assert_eq!(hero.life, 87);
    assert_eq!(hero.gold, 3);
    assert!(hero.mine_positions.contains(&Position::new(0, 0)));

    // optional fields: present on seat 0, absent on the practice bots
    assert!(game.hero_infos[0].is_real_bot());
    assert_eq!(game.hero_infos[0].user_id.as_deref(), Some("u1"));
    assert!(!game.hero_infos[1].is_real_bot());
    assert!(game.hero_infos[3].crashed);

    // the background kept only the owner-agnostic mine marker
    assert_eq!(
        game.state.background().tiles().tile_at(Position::new(0, 0)),
        Tile::Mine(None)
    );
}

#[test]
fn ingestion_accepts_a_consistent_snapshot() {
    let game = Game::from_message(&valid_message()).unwrap();
    assert_eq!(game.state.heroes[0].mine_positions.len(), 1);
    assert!(game.state.heroes[1].mine_positions.is_empty());
}

#[test]
fn ingestion_rejects_a_wrong_hero_count() {
    let mut message = valid_message();
    message.game.heroes.pop();
    match Game::from_message(&message) {
        Err(GameError::MalformedSnapshot(SnapshotDefect::HeroCount { count })) => {
            assert_eq!(count, 3);
        }
        other => panic!("expected hero count defect, got {:?}", other),
    }
}

#[test]
fn ingestion_rejects_a_seat_id_mismatch() {
    let mut message = valid_message();
    message.game.heroes[2].id = 9;
    match Game::from_message(&message) {
        Err(GameError::MalformedSnapshot(SnapshotDefect::SeatId { seat, id })) => {
            assert_eq!(seat, 2);
            assert_eq!(id, 9);
        }
        other => panic!("expected seat id defect, got {:?}", other),
    }
}

#[test]
fn ingestion_cross_checks_the_mine_count() {
    let mut message = valid_message();
    message.game.heroes[0].mine_count = 2;
    match Game::from_message(&message) {
        Err(GameError::MalformedSnapshot(SnapshotDefect::MineCount {
            seat,
            reported,
            derived,
        })) => {
            assert_eq!(seat, 0);
            assert_eq!(reported, 2);
            assert_eq!(derived, 1);
        }
        other => panic!("expected mine count defect, got {:?}", other),
    }
}

#[test]
fn ingestion_rejects_an_unknown_board_token() {
    let mut message = valid_message();
    message.game.board.tiles = String::from("zz                ");
    assert!(matches!(
        Game::from_message(&message),
        Err(GameError::MalformedBoard(_))
    ));
}

#[test]
fn sync_replaces_hero_data_and_the_turn_counter() {
    let mut game = Game::from_message(&valid_message()).unwrap();

    let mut reply = valid_message();
    reply.game.turn = 6;
    reply.game.heroes[0].gold = 12;
    reply.game.heroes[0].pos = PositionDto { x: 1, y: 1 };
    reply.game.heroes[3].crashed = true;

    game.sync_with(&reply).unwrap();
    assert_eq!(game.turn, 6);
    assert_eq!(game.state.next_hero_index, 2);
    assert_eq!(game.state.heroes[0].gold, 12);
    assert_eq!(game.state.heroes[0].position, Position::new(1, 1));
    assert!(game.state.heroes[3].crashed);
    assert!(game.hero_infos[3].crashed);
}

#[test]
fn sync_rejects_a_regressed_turn_counter() {
    let mut game = Game::from_message(&valid_message()).unwrap();
    game.turn = 8;
    game.state.next_hero_index = 0;

    let mut reply = valid_message();
    reply.game.turn = 4;
    assert!(matches!(
        game.sync_with(&reply),
        Err(GameError::MalformedSnapshot(SnapshotDefect::TurnRegressed {
            previous: 8,
            reported: 4,
        }))
    ));
}

#[test]
fn sync_rejects_a_changed_turn_limit() {
    let mut game = Game::from_message(&valid_message()).unwrap();
    let mut reply = valid_message();
    reply.game.max_turns = 80;
    assert!(matches!(
        game.sync_with(&reply),
        Err(GameError::MalformedSnapshot(SnapshotDefect::TurnMaxChanged {
            expected: 40,
            actual: 80,
        }))
    ));
}

#[test]
fn sync_rejects_a_changed_background() {
    let mut game = Game::from_message(&valid_message()).unwrap();
    let mut reply = valid_message();
    // same length, but a wall appeared out of nowhere
    reply.game.board.tiles = String::from("$1              ##");
    assert!(matches!(
        game.sync_with(&reply),
        Err(GameError::MalformedSnapshot(SnapshotDefect::BoardChanged))
    ));
}

#[test]
fn mine_ownership_moves_between_snapshots() {
    let mut game = Game::from_message(&valid_message()).unwrap();

    let mut reply = valid_message();
    // hero 3 took the mine
    reply.game.board.tiles = String::from("$3                ");
    reply.game.heroes[0].mine_count = 0;
    reply.game.heroes[2].mine_count = 1;
    reply.game.turn = 1;

    game.sync_with(&reply).unwrap();
    assert!(game.state.heroes[0].mine_positions.is_empty());
    assert!(game.state.heroes[2].mine_positions.contains(&Position::new(0, 0)));
}
