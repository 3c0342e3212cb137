pub mod config;
pub mod eval;
pub mod greedy;
pub mod minimax;

pub use greedy::GreedyAI;
pub use minimax::MinimaxAI;

use crate::core::{Difficulty, Player};
use crate::player::PlayerController;
use config::AIConfig;

/// Builds the opponent a difficulty setting calls for.
pub fn for_difficulty(player: Player, difficulty: Difficulty) -> Box<dyn PlayerController> {
    let search = &AIConfig::get().search;
    match difficulty {
        Difficulty::Easy => Box::new(GreedyAI::new(player, "Greedy AI")),
        Difficulty::Medium => Box::new(MinimaxAI::new(
            player,
            "Minimax AI (medium)",
            search.medium_depth as u32,
        )),
        Difficulty::Hard => Box::new(MinimaxAI::new(
            player,
            "Minimax AI (hard)",
            search.hard_depth as u32,
        )),
    }
}
