//! Battle value bonuses from shared targeting networks
//!
//! Networked units share fire-control data, which makes each member worth
//! more than its standalone battle value. Every counted member gains 5% of
//! the network's total BV, but never more than 35% of its own.

use serde::{Deserialize, Serialize};

pub const NETWORK_SHARE_PERCENT: u64 = 5;
pub const NETWORK_CAP_PERCENT: u64 = 35;

/// Kind of shared targeting network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkKind {
    /// Master/slave C3 (a company of up to 12)
    C3,
    /// Improved C3, peer-to-peer lance of up to 6
    C3i,
    /// Nova combined electronic warfare system, 3 units
    NovaCews,
}

impl NetworkKind {
    /// Members that count toward (and benefit from) the network
    pub fn max_members(&self) -> usize {
        match self {
            NetworkKind::C3 => 12,
            NetworkKind::C3i => 6,
            NetworkKind::NovaCews => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkMember {
    pub name: String,
    pub base_bv: u32,
}

/// A network and its members in join order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleValueNetwork {
    pub kind: NetworkKind,
    pub members: Vec<NetworkMember>,
}

impl BattleValueNetwork {
    pub fn new(kind: NetworkKind) -> Self {
        Self { kind, members: Vec::new() }
    }

    pub fn join(mut self, name: impl Into<String>, base_bv: u32) -> Self {
        self.members.push(NetworkMember { name: name.into(), base_bv });
        self
    }

    /// Members past the network's capacity sit outside it
    fn counted(&self) -> &[NetworkMember] {
        let n = self.members.len().min(self.kind.max_members());
        &self.members[..n]
    }

    /// Sum of the counted members' base BV
    pub fn total_bv(&self) -> u64 {
        self.counted().iter().map(|m| m.base_bv as u64).sum()
    }

    /// Bonus for the member at `index`; zero for members beyond capacity
    pub fn bonus_for(&self, index: usize) -> u32 {
        let Some(member) = self.counted().get(index) else {
            return 0;
        };
        // A lone unit has no one to share data with
        if self.counted().len() < 2 {
            return 0;
        }
        let share = self.total_bv() * NETWORK_SHARE_PERCENT / 100;
        let cap = member.base_bv as u64 * NETWORK_CAP_PERCENT / 100;
        share.min(cap) as u32
    }

    /// Every member's BV including its network bonus, in join order
    pub fn adjusted_bv(&self) -> Vec<u32> {
        self.members
            .iter()
            .enumerate()
            .map(|(i, m)| m.base_bv + self.bonus_for(i))
            .collect()
    }

    pub fn total_adjusted_bv(&self) -> u64 {
        self.adjusted_bv().iter().map(|&bv| bv as u64).sum()
    }
}
