use crate::config::SimConfig;
use crate::direction::Direction;
use crate::npc::{Npc, NpcState, TurnDirection};
use crate::simulation::progression::FoodStock;
use crate::utils::{heading, wrap_degrees};
use crate::world::TileGrid;
use log::trace;
use std::f32::consts::SQRT_2;

/// Largest turn an NPC considers, in 45 degree units
const MAX_TURN_STEPS: u32 = 4;

/// What a single NPC tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NpcStep {
    /// The rolled heading leads into a wall, the anthill or off the map; retry next tick
    Blocked,
    /// A heading was chosen and its cell reserved
    Planned(Direction),
    Turning,
    /// Heading reached, walking starts next tick
    Aligned,
    Walking,
    /// Snapped onto the reserved cell
    Arrived,
    /// Snapped onto the reserved cell and ate the food there
    Ate { row: usize, col: usize },
}

/// Drive one NPC through its walk cycle by one tick
pub fn tick_npc(
    npc: &mut Npc,
    grid: &mut TileGrid,
    food: &mut FoodStock,
    config: &SimConfig,
    rng: &mut fastrand::Rng,
) -> NpcStep {
    match npc.state {
        NpcState::Prepare => {
            let turn_steps = rng.u32(..=MAX_TURN_STEPS);
            let direction = if rng.bool() {
                TurnDirection::Clockwise
            } else {
                TurnDirection::CounterClockwise
            };
            plan_walk(npc, grid, turn_steps, direction)
        }
        NpcState::Turn => turn_toward_target(npc, config),
        NpcState::Step => step_forward(npc, grid, food, config),
    }
}

/// Choose the next heading and reserve the cell it points at.
///
/// `turn_steps` is the turn in 45 degree units. The NPC stays in `Prepare`
/// when the target cell is blocked.
pub fn plan_walk(
    npc: &mut Npc,
    grid: &TileGrid,
    turn_steps: u32,
    turn_direction: TurnDirection,
) -> NpcStep {
    let turn = (turn_steps.min(MAX_TURN_STEPS) * 45) as i32;
    npc.turn_direction = turn_direction;
    npc.target_angle = wrap_degrees(npc.agent.angle() + turn * turn_direction.sign());
    npc.steps_completed = 0;

    let direction = Direction::from_angle(npc.target_angle);
    let (dx, dy) = direction.delta();
    let next = grid.checked_cell(npc.gm_y as i64 + i64::from(dy), npc.gm_x as i64 + i64::from(dx));

    match next {
        Some((row, col)) if grid.get_or_wall(row, col).is_walkable_for_npc() => {
            trace!(
                "npc {} heads {} to ({}, {})",
                npc.id.0,
                direction.as_str(),
                row,
                col
            );
            npc.gm_y = row;
            npc.gm_x = col;
            npc.state = NpcState::Turn;
            NpcStep::Planned(direction)
        }
        _ => NpcStep::Blocked,
    }
}

fn turn_toward_target(npc: &mut Npc, config: &SimConfig) -> NpcStep {
    let sign = npc.turn_direction.sign();
    let remaining = wrap_degrees((npc.target_angle - npc.agent.angle()) * sign);
    if remaining == 0 {
        npc.state = NpcState::Step;
        return NpcStep::Aligned;
    }
    // never overshoot when the rate does not divide 45
    let rate = config.npc_turn_rate.max(1).min(remaining);
    npc.agent.rotate(rate * sign);
    NpcStep::Turning
}

fn step_forward(
    npc: &mut Npc,
    grid: &mut TileGrid,
    food: &mut FoodStock,
    config: &SimConfig,
) -> NpcStep {
    let step_len = config.step_len.max(1);
    let angle = npc.agent.angle();
    let (hx, hy) = heading(angle);
    let mut stride = config.cell() / step_len as f32;
    if Direction::from_angle(angle).is_diagonal() {
        stride *= SQRT_2;
    }

    npc.steps_completed += 1;
    npc.agent.translate(hx * stride, hy * stride);
    if npc.steps_completed < step_len {
        return NpcStep::Walking;
    }

    // remove accumulated float drift
    let (x, y) = config.cell_center(npc.gm_y, npc.gm_x);
    npc.agent.x = x;
    npc.agent.y = y;
    npc.state = NpcState::Prepare;

    let (row, col) = npc.cell();
    if food.consume(grid, row, col) {
        NpcStep::Ate { row, col }
    } else {
        NpcStep::Arrived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::Agent;
    use crate::npc::NpcId;
    use crate::world::TileKind;

    fn npc_at(cfg: &SimConfig, row: usize, col: usize) -> Npc {
        let (x, y) = cfg.cell_center(row, col);
        Npc::new(NpcId(0), Agent::new(x, y, 1.0, 0), col, row)
    }

    fn setup() -> (TileGrid, FoodStock, SimConfig) {
        let grid = TileGrid::new(11, 11);
        let food = FoodStock::new(&grid, 0);
        (grid, food, SimConfig::default())
    }

    /// Tick until the NPC is back in `Prepare`, returning the number of ticks and the last step
    fn finish_cycle(
        npc: &mut Npc,
        grid: &mut TileGrid,
        food: &mut FoodStock,
        cfg: &SimConfig,
    ) -> (usize, NpcStep) {
        let mut rng = fastrand::Rng::with_seed(0);
        let mut ticks = 0;
        loop {
            let step = tick_npc(npc, grid, food, cfg, &mut rng);
            ticks += 1;
            if npc.state == NpcState::Prepare {
                return (ticks, step);
            }
            assert!(ticks < 10_000, "walk cycle never finished");
        }
    }

    #[test]
    fn test_plan_commits_cell() {
        let (grid, _, _) = setup();
        let cfg = SimConfig::default();
        let mut npc = npc_at(&cfg, 5, 5);

        let step = plan_walk(&mut npc, &grid, 2, TurnDirection::Clockwise);

        assert_eq!(step, NpcStep::Planned(Direction::East));
        assert_eq!(npc.target_angle, 90);
        assert_eq!(npc.cell(), (5, 6));
        assert_eq!(npc.state, NpcState::Turn);
    }

    #[test]
    fn test_plan_wraps_counter_clockwise() {
        let (grid, _, cfg) = setup();
        let mut npc = npc_at(&cfg, 5, 5);

        assert_eq!(
            plan_walk(&mut npc, &grid, 1, TurnDirection::CounterClockwise),
            NpcStep::Planned(Direction::NorthWest)
        );
        assert_eq!(npc.target_angle, 315);
        assert_eq!(npc.cell(), (4, 4));
    }

    #[test]
    fn test_plan_blocked_by_wall_and_anthill() {
        let (mut grid, _, cfg) = setup();
        grid.set(4, 5, TileKind::Wall);
        grid.set(6, 5, TileKind::Anthill);
        let mut npc = npc_at(&cfg, 5, 5);

        assert_eq!(plan_walk(&mut npc, &grid, 0, TurnDirection::Clockwise), NpcStep::Blocked);
        assert_eq!(plan_walk(&mut npc, &grid, 4, TurnDirection::Clockwise), NpcStep::Blocked);
        assert_eq!(npc.state, NpcState::Prepare);
        assert_eq!(npc.cell(), (5, 5));
    }

    #[test]
    fn test_plan_blocked_off_map() {
        let (grid, _, cfg) = setup();
        let mut npc = npc_at(&cfg, 0, 0);

        assert_eq!(plan_walk(&mut npc, &grid, 0, TurnDirection::Clockwise), NpcStep::Blocked);
        assert_eq!(plan_walk(&mut npc, &grid, 2, TurnDirection::CounterClockwise), NpcStep::Blocked);
        assert_eq!(npc.cell(), (0, 0));
    }

    #[test]
    fn test_boxed_in_keeps_retrying() {
        let mut grid = TileGrid::filled(3, 3, TileKind::Wall);
        grid.set(1, 1, TileKind::Free);
        let mut food = FoodStock::new(&grid, 0);
        let cfg = SimConfig::default();
        let mut npc = npc_at(&cfg, 1, 1);
        let mut rng = fastrand::Rng::with_seed(11);

        for _ in 0..100 {
            assert_eq!(tick_npc(&mut npc, &mut grid, &mut food, &cfg, &mut rng), NpcStep::Blocked);
        }
        assert_eq!(npc.cell(), (1, 1));
        assert_eq!((npc.agent.x, npc.agent.y), (75.0, 75.0));
    }

    #[test]
    fn test_turn_converges_and_wraps() {
        let (mut grid, mut food, cfg) = setup();
        let mut npc = npc_at(&cfg, 5, 5);
        let mut rng = fastrand::Rng::with_seed(0);
        plan_walk(&mut npc, &grid, 3, TurnDirection::CounterClockwise);
        assert_eq!(npc.target_angle, 225);

        let mut turning = 0;
        while npc.state == NpcState::Turn {
            let step = tick_npc(&mut npc, &mut grid, &mut food, &cfg, &mut rng);
            assert!((0..360).contains(&npc.agent.angle()));
            if step == NpcStep::Turning {
                turning += 1;
            }
        }
        assert_eq!(turning, 27);
        assert_eq!(npc.agent.angle(), 225);
        assert_eq!(npc.state, NpcState::Step);
    }

    #[test]
    fn test_axis_step_lands_on_center() {
        let (mut grid, mut food, cfg) = setup();
        let mut npc = npc_at(&cfg, 5, 5);
        plan_walk(&mut npc, &grid, 2, TurnDirection::Clockwise);
        let mut rng = fastrand::Rng::with_seed(0);
        while npc.state != NpcState::Step {
            tick_npc(&mut npc, &mut grid, &mut food, &cfg, &mut rng);
        }

        let (ticks, last) = finish_cycle(&mut npc, &mut grid, &mut food, &cfg);

        assert_eq!(ticks, cfg.step_len as usize);
        assert_eq!(last, NpcStep::Arrived);
        assert_eq!((npc.agent.x, npc.agent.y), cfg.cell_center(5, 6));
    }

    #[test]
    fn test_diagonal_step_covers_one_cell_per_axis() {
        let (mut grid, mut food, cfg) = setup();
        let mut npc = npc_at(&cfg, 5, 5);
        plan_walk(&mut npc, &grid, 3, TurnDirection::Clockwise);
        let mut rng = fastrand::Rng::with_seed(0);
        while npc.state != NpcState::Step {
            tick_npc(&mut npc, &mut grid, &mut food, &cfg, &mut rng);
        }
        let (x0, y0) = (npc.agent.x, npc.agent.y);

        // one tick before the snap the agent is already within a pixel of the target
        for _ in 0..cfg.step_len - 1 {
            tick_npc(&mut npc, &mut grid, &mut food, &cfg, &mut rng);
        }
        let (tx, ty) = cfg.cell_center(6, 6);
        assert!((npc.agent.x - tx).abs() <= 1.01);
        assert!((npc.agent.y - ty).abs() <= 1.01);

        tick_npc(&mut npc, &mut grid, &mut food, &cfg, &mut rng);
        assert_eq!(npc.agent.x - x0, cfg.cell());
        assert_eq!(npc.agent.y - y0, cfg.cell());
        assert_eq!(npc.state, NpcState::Prepare);
    }

    #[test]
    fn test_eats_food_on_arrival() {
        let (mut grid, _, cfg) = setup();
        grid.set(4, 5, TileKind::Food);
        let mut food = FoodStock::new(&grid, 1);
        let mut npc = npc_at(&cfg, 5, 5);
        plan_walk(&mut npc, &grid, 0, TurnDirection::Clockwise);

        let (_, last) = finish_cycle(&mut npc, &mut grid, &mut food, &cfg);

        assert_eq!(last, NpcStep::Ate { row: 4, col: 5 });
        assert_eq!(grid.get(4, 5), Some(TileKind::Free));
        assert_eq!(food.world_food(), 0);
    }
}
