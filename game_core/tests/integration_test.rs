use game_core::*;
use glam::Vec2;
use hecs::World;

fn new_game() -> (World, Arena, Config, InputState, Score, Events) {
    let arena = Arena::new(640.0, 480.0);
    let config = Config::new();
    let mut world = World::new();

    create_ball(&mut world, &arena, &config);
    create_player(&mut world, &arena, &config);
    create_computer(&mut world, &arena, &config);

    (
        world,
        arena,
        config,
        InputState::new(),
        Score::new(),
        Events::new(),
    )
}

fn ball(world: &World) -> Ball {
    let mut query = world.query::<&Ball>();
    let (_e, ball) = query.iter().next().expect("no ball");
    *ball
}

fn set_ball(world: &mut World, pos: Vec2, vel: Vec2) {
    for (_e, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = pos;
        ball.vel = vel;
    }
}

fn paddle_y<M: hecs::Component>(world: &World) -> f32 {
    let mut query = world.query::<(&Paddle, &M)>();
    let (_e, (paddle, _)) = query.iter().next().expect("no paddle");
    paddle.pos.y
}

#[test]
fn test_initial_layout() {
    let (world, arena, config, ..) = new_game();

    let ball = ball(&world);
    assert_eq!(ball.pos, arena.center());
    assert_eq!(ball.vel, Vec2::new(5.0, 5.0));

    let mut player = world.query::<(&Paddle, &Human)>();
    let (_e, (player, _)) = player.iter().next().unwrap();
    assert_eq!(player.pos, Vec2::new(10.0, 200.0));
    assert_eq!(player.size, Vec2::new(10.0, 80.0));

    let mut cpu = world.query::<(&Paddle, &Cpu)>();
    let (_e, (cpu, _)) = cpu.iter().next().unwrap();
    assert_eq!(cpu.pos, Vec2::new(config.cpu_x(&arena), 200.0));
    assert_eq!(cpu.size, Vec2::new(10.0, 60.0));
}

#[test]
fn test_tick_integrates_ball() {
    let (mut world, arena, _config, input, mut score, mut events) = new_game();

    step(&mut world, &arena, &input, &mut score, &mut events);

    assert_eq!(ball(&world).pos, Vec2::new(325.0, 245.0));
}

#[test]
fn test_scoring_through_full_tick() {
    let (mut world, arena, _config, input, mut score, mut events) = new_game();
    set_ball(&mut world, Vec2::new(637.0, 240.0), Vec2::new(5.0, 5.0));

    step(&mut world, &arena, &input, &mut score, &mut events);

    assert_eq!(score.player, 1);
    assert_eq!(score.computer, 0);
    assert_eq!(ball(&world).pos, arena.center());
    assert!(events.player_scored);
}

#[test]
fn test_scores_accumulate_across_points() {
    let (mut world, arena, _config, input, mut score, mut events) = new_game();

    for _ in 0..3 {
        set_ball(&mut world, Vec2::new(637.0, 240.0), Vec2::new(5.0, 5.0));
        step(&mut world, &arena, &input, &mut score, &mut events);
    }
    set_ball(&mut world, Vec2::new(3.0, 240.0), Vec2::new(-5.0, 5.0));
    step(&mut world, &arena, &input, &mut score, &mut events);

    assert_eq!(score.player, 3);
    assert_eq!(score.computer, 1);
}

#[test]
fn test_up_beats_down_through_full_tick() {
    let (mut world, arena, _config, mut input, mut score, mut events) = new_game();
    input.set(Key::Up, true);
    input.set(Key::Down, true);

    step(&mut world, &arena, &input, &mut score, &mut events);

    assert_eq!(paddle_y::<Human>(&world), 195.0);
}

#[test]
fn test_computer_tracks_ball_through_full_tick() {
    let (mut world, arena, _config, input, mut score, mut events) = new_game();
    // Ball well above the paddle top: the tracker moves one speed-step up.
    set_ball(&mut world, Vec2::new(320.0, 50.0), Vec2::new(5.0, 5.0));
    for (_e, (paddle, _)) in world.query_mut::<(&mut Paddle, &Cpu)>() {
        paddle.pos.y = 100.0;
    }

    step(&mut world, &arena, &input, &mut score, &mut events);

    assert_eq!(paddle_y::<Cpu>(&world), 95.0);
}

#[test]
fn test_per_axis_speed_is_invariant() {
    let (mut world, arena, _config, mut input, mut score, mut events) = new_game();
    input.set(Key::Down, true);

    for _ in 0..600 {
        step(&mut world, &arena, &input, &mut score, &mut events);
        let vel = ball(&world).vel;
        assert_eq!(vel.x.abs(), 5.0);
        assert_eq!(vel.y.abs(), 5.0);
    }
}

#[test]
fn test_player_stays_clamped_during_play() {
    let (mut world, arena, config, mut input, mut score, mut events) = new_game();

    input.set(Key::Up, true);
    for _ in 0..100 {
        step(&mut world, &arena, &input, &mut score, &mut events);
        let y = paddle_y::<Human>(&world);
        assert!(y >= 0.0 && y + config.player_paddle_height <= arena.height);
    }

    input.set(Key::Up, false);
    input.set(Key::Down, true);
    for _ in 0..200 {
        step(&mut world, &arena, &input, &mut score, &mut events);
        let y = paddle_y::<Human>(&world);
        assert!(y >= 0.0 && y + config.player_paddle_height <= arena.height);
    }
}

#[test]
fn test_bounce_events_readable_after_tick() {
    // The frontend reads the flags after stepping, so they must survive the
    // tick that raised them and only clear on the next one.
    let (mut world, arena, _config, input, mut score, mut events) = new_game();
    set_ball(&mut world, Vec2::new(320.0, 8.0), Vec2::new(5.0, -5.0));

    step(&mut world, &arena, &input, &mut score, &mut events);
    assert!(events.ball_hit_wall);

    step(&mut world, &arena, &input, &mut score, &mut events);
    assert!(!events.ball_hit_wall, "flags reset at the start of a tick");

    set_ball(&mut world, Vec2::new(20.0, 240.0), Vec2::new(-5.0, 0.0));
    step(&mut world, &arena, &input, &mut score, &mut events);
    assert!(events.ball_hit_paddle);
}

#[test]
fn test_entities_survive_scoring() {
    // Scoring recentres the ball in place; nothing is despawned or respawned.
    let (mut world, arena, _config, input, mut score, mut events) = new_game();
    let ball_entity = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(e, _)| e).unwrap()
    };

    set_ball(&mut world, Vec2::new(637.0, 240.0), Vec2::new(5.0, 5.0));
    step(&mut world, &arena, &input, &mut score, &mut events);

    assert!(world.contains(ball_entity));
    assert_eq!(world.len(), 3);
}
