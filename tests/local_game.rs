use vindinium::{play_game, Direction, Game, LocalTransport, RandomBot, Transport};

#[tokio::test]
async fn a_full_local_game_runs_to_the_turn_limit() {
    let mut transport = LocalTransport::on_default_map(25, 7).unwrap();
    let mut bot = RandomBot::from_seed(7);

    let outcome = play_game(&mut transport, &mut bot, false, false)
        .await
        .unwrap();

    assert_eq!(outcome.seat, 0);
    assert_eq!(outcome.turns_played, 100, "25 turns per seat");
    assert!(outcome.rank < 4);
    assert!(outcome.gold >= 0);
    assert!(transport.game().is_finished());
}

#[tokio::test]
async fn snapshots_survive_ingestion_checks_every_round() {
    let mut transport = LocalTransport::on_default_map(10, 99).unwrap();
    let mut bot = RandomBot::from_seed(99);

    let message = transport.start().await.unwrap();
    let mut game = Game::from_message(&message).unwrap();
    assert_eq!(game.turn, 0);
    assert_eq!(game.state.next_hero_index, 0);

    while !game.is_finished() {
        let direction = bot.choose_direction(&game);
        let reply = transport.play(direction).await.unwrap();
        game.sync_with(&reply).unwrap();

        // authority and local copy agree exactly after every replacement
        assert_eq!(game.state.hash_value(), transport.game().state.hash_value());
        assert_eq!(game.state, transport.game().state);
        assert_eq!(game.state.next_hero_index, (game.turn % 4) as usize);
    }

    assert_eq!(game.turn, 40);
}

#[tokio::test]
async fn identical_seeds_replay_identically() {
    let mut first = LocalTransport::on_default_map(15, 42).unwrap();
    let mut second = LocalTransport::on_default_map(15, 42).unwrap();
    let mut bot_aa = RandomBot::from_seed(5);
    let mut bot_bb = RandomBot::from_seed(5);

    play_game(&mut first, &mut bot_aa, false, false).await.unwrap();
    play_game(&mut second, &mut bot_bb, false, false).await.unwrap();

    assert_eq!(
        first.game().state.hash_value(),
        second.game().state.hash_value()
    );
    assert_eq!(first.game().state, second.game().state);
}

#[tokio::test]
async fn playing_after_the_final_turn_is_refused() {
    let mut transport = LocalTransport::on_default_map(1, 3).unwrap();
    let mut bot = RandomBot::from_seed(3);

    play_game(&mut transport, &mut bot, false, false).await.unwrap();
    assert!(transport.play(Direction::Stay).await.is_err());
}

#[tokio::test]
async fn local_prediction_matches_the_authority_for_our_own_move() {
    let mut transport = LocalTransport::on_default_map(10, 11).unwrap();

    let message = transport.start().await.unwrap();
    let mut game = Game::from_message(&message).unwrap();

    // predict our move locally, then let the authority resolve the same
    // move plus the three replies; our hero's post-move fields only change
    // again if an opponent interacts with it
    let mut prediction = game.clone();
    prediction.advance(Direction::East).unwrap();

    let reply = transport.play(Direction::East).await.unwrap();
    game.sync_with(&reply).unwrap();

    // seat 0 spawns in a corner out of reach of the other seats' first
    // moves, so the prediction for our hero must be exact
    assert_eq!(prediction.state.heroes[0], game.state.heroes[0]);
}
