use crate::ant::Agent;
use crate::error::SpawnError;
use crate::npc::{Npc, NpcId};

/// Insertion-ordered store of every live NPC.
///
/// Append-only during play: NPCs are never removed, so ids stay valid and
/// iteration order is spawn order.
#[derive(Clone, Debug)]
pub struct AntRegistry {
    npcs: Vec<Npc>,
    limit: usize,
}

impl AntRegistry {
    /// Create an empty registry holding at most `limit` NPCs
    pub fn new(limit: usize) -> Self {
        Self {
            npcs: Vec::new(),
            limit,
        }
    }

    /// Register a new NPC on cell `(gm_y, gm_x)` and return its id
    pub fn spawn(&mut self, agent: Agent, gm_x: usize, gm_y: usize) -> Result<NpcId, SpawnError> {
        if self.npcs.len() >= self.limit {
            return Err(SpawnError::ColonyFull { limit: self.limit });
        }
        self.npcs
            .try_reserve(1)
            .map_err(|_| SpawnError::OutOfMemory)?;

        let id = NpcId(self.npcs.len() as u32);
        self.npcs.push(Npc::new(id, agent, gm_x, gm_y));
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.npcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.npcs.is_empty()
    }

    /// Get an NPC by id
    #[inline]
    pub fn get(&self, id: NpcId) -> Option<&Npc> {
        self.npcs.get(id.0 as usize)
    }

    /// Get a mutable NPC by id
    #[inline]
    pub fn get_mut(&mut self, id: NpcId) -> Option<&mut Npc> {
        self.npcs.get_mut(id.0 as usize)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Npc> {
        self.npcs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Npc> {
        self.npcs.iter_mut()
    }
}
