use crate::ant::Agent;

/// Phase of an NPC's walk cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NpcState {
    /// Pick a heading and reserve the next cell
    #[default]
    Prepare,
    /// Rotate toward the chosen heading
    Turn,
    /// Walk into the reserved cell
    Step,
}

/// Rotation sense chosen in `Prepare`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i8)]
pub enum TurnDirection {
    Clockwise = 1,
    CounterClockwise = -1,
}

impl TurnDirection {
    /// +1 or -1
    #[inline]
    pub const fn sign(self) -> i32 {
        self as i32
    }
}

/// Stable handle of an NPC inside the ant registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NpcId(pub u32);

/// An autonomous worker ant
#[derive(Clone, Debug)]
pub struct Npc {
    pub id: NpcId,
    pub agent: Agent,
    pub state: NpcState,
    pub target_angle: i32,
    pub turn_direction: TurnDirection,
    pub steps_completed: u32,
    /// Column of the cell the NPC occupies or is walking into
    pub gm_x: usize,
    /// Row of the cell the NPC occupies or is walking into
    pub gm_y: usize,
}

impl Npc {
    /// Create an NPC standing on `(gm_y, gm_x)` with its agent already centered there
    pub fn new(id: NpcId, agent: Agent, gm_x: usize, gm_y: usize) -> Self {
        Self {
            id,
            agent,
            state: NpcState::Prepare,
            target_angle: 0,
            turn_direction: TurnDirection::Clockwise,
            steps_completed: 0,
            gm_x,
            gm_y,
        }
    }

    /// Grid cell as `(row, col)`
    #[inline]
    pub fn cell(&self) -> (usize, usize) {
        (self.gm_y, self.gm_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npc_creation() {
        let npc = Npc::new(NpcId(3), Agent::new(75.0, 25.0, 1.0, 0), 1, 0);

        assert_eq!(npc.id, NpcId(3));
        assert_eq!(npc.state, NpcState::Prepare);
        assert_eq!(npc.cell(), (0, 1));
        assert_eq!(npc.steps_completed, 0);
    }

    #[test]
    fn test_turn_sign() {
        assert_eq!(TurnDirection::Clockwise.sign(), 1);
        assert_eq!(TurnDirection::CounterClockwise.sign(), -1);
    }
}
