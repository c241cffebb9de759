use crate::npc::NpcId;

/// Who ate a food item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eater {
    Player,
    Npc(NpcId),
}

/// Notifications for the outer game loop (HUD refresh, victory screen)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    FoodConsumed { by: Eater, row: usize, col: usize },
    FoodSpawned { row: usize, col: usize },
    NpcSpawned { id: NpcId },
    Upgraded { level: usize, cost: u32, spawned: usize },
    Won,
}
