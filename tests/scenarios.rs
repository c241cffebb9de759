// End-to-end scenarios driven through the public library API.

use anthill_sim::prelude::*;
use anthill_sim::simulation::{plan_walk, tick_npc, tick_player, FoodStock, NpcStep, PlayerStep};

#[test]
fn upgrade_from_level_zero_hatches_five_workers() {
    let mut engine =
        SimulationEngine::new(TileGrid::bordered(20, 20), SimConfig::default(), fastrand::Rng::with_seed(1))
            .unwrap();
    assert_eq!(engine.player().food_count, 0);
    assert!(engine.player().in_anthill);
    assert_eq!(engine.anthill().level, 0);

    engine.grant_food(10);
    assert!(engine.request_upgrade());

    assert_eq!(engine.player().food_count, 0);
    assert_eq!(engine.npcs().len(), 5);
    assert_eq!(engine.anthill().level, 1);
}

#[test]
fn wall_in_the_middle_stops_the_player() {
    let cfg = SimConfig::default();
    let mut grid = TileGrid::new(3, 3);
    grid.set(1, 1, TileKind::Wall);
    let mut food = FoodStock::new(&grid, 0);

    // bottom edge of cell (0, 1), facing down toward the wall
    let mut player = Player::new(75.0, 49.0, &cfg, 0);
    player.agent.set_angle(180);
    player.set_controls(cfg.velocity_max, 0);
    let before = (player.agent.x, player.agent.y);

    assert_eq!(tick_player(&mut player, &mut grid, &mut food, &cfg), PlayerStep::Blocked);
    assert_eq!((player.agent.x, player.agent.y), before);
    assert!(!player.in_anthill);
}

#[test]
fn worker_walks_one_cell_east() {
    let cfg = SimConfig::default();
    let mut grid = TileGrid::new(11, 11);
    let mut food = FoodStock::new(&grid, 0);
    let mut rng = fastrand::Rng::with_seed(5);
    let (x, y) = cfg.cell_center(5, 5);
    let mut npc = Npc::new(NpcId(0), Agent::new(x, y, 1.0, 0), 5, 5);

    assert_eq!(
        plan_walk(&mut npc, &grid, 2, TurnDirection::Clockwise),
        NpcStep::Planned(Direction::East)
    );
    while npc.state == NpcState::Turn {
        tick_npc(&mut npc, &mut grid, &mut food, &cfg, &mut rng);
    }
    assert_eq!(npc.state, NpcState::Step);

    for _ in 0..cfg.step_len {
        tick_npc(&mut npc, &mut grid, &mut food, &cfg, &mut rng);
    }

    assert_eq!((npc.agent.x, npc.agent.y), cfg.cell_center(5, 6));
    assert_eq!(npc.state, NpcState::Prepare);
}

#[test]
fn player_never_enters_walls() {
    let cfg = SimConfig::default();
    let mut grid = TileGrid::bordered(12, 12);
    for row in 3..9 {
        grid.set(row, 6, TileKind::Wall);
    }
    let mut food = FoodStock::new(&grid, 0);
    let mut rng = fastrand::Rng::with_seed(99);
    let (x, y) = cfg.cell_center(5, 3);
    let mut player = Player::new(x, y, &cfg, 0);

    for _ in 0..20_000 {
        if rng.u8(..50) == 0 {
            player.set_controls(rng.i32(-1..=2), rng.i32(-3..=3));
        }
        let before = (player.agent.x, player.agent.y);
        let step = tick_player(&mut player, &mut grid, &mut food, &cfg);

        let (row, col) = player.agent.cell(cfg.cell()).unwrap();
        assert_ne!(grid.get(row, col), Some(TileKind::Wall));
        assert!((0..360).contains(&player.agent.angle()));
        if step == PlayerStep::Blocked {
            assert_eq!((player.agent.x, player.agent.y), before);
        }
    }
}

#[test]
fn workers_stay_on_the_map_and_out_of_walls() {
    let config = SimConfig {
        world_food: 15,
        ..SimConfig::default()
    };
    let mut grid = TileGrid::bordered(16, 16);
    grid.set(4, 4, TileKind::Enclosed);
    grid.set(4, 5, TileKind::Wall);
    let mut engine = SimulationEngine::new(grid, config, fastrand::Rng::with_seed(21)).unwrap();
    for _ in 0..8 {
        engine.spawn_npc().unwrap();
    }

    for _ in 0..10_000 {
        engine.tick();
        engine.drain_events();
        for npc in engine.npcs().iter() {
            let (row, col) = npc.cell();
            let kind = engine.grid().get(row, col);
            assert!(kind.is_some());
            assert_ne!(kind, Some(TileKind::Wall));
            assert!((0..360).contains(&npc.agent.angle()));
        }
        assert_eq!(engine.world_food(), 15);
    }
    assert_eq!(engine.agents().count(), 9);
}
