use rand::{prelude::SliceRandom, Rng};
use risk_shared::{
    map::World,
    mission::{Mission, MissionKind, Objective},
    player::PlayerId,
};

use crate::config::RulesConfig;

/// Draws one mission per player. Each opponent is the target of at most one elimination
/// mission; a kind that cannot be satisfied falls back to a territory-count mission.
pub fn assign_missions<R: Rng>(
    rng: &mut R,
    world: &World,
    players: &[PlayerId],
    config: &RulesConfig,
) -> Vec<Mission> {
    let threshold = config.mission_threshold(world.territories().len());
    let mut targeted = Vec::new();

    players
        .iter()
        .map(|&owner| {
            let kind = *MissionKind::ALL
                .choose(rng)
                .unwrap_or(&MissionKind::ConquerTerritories);

            let objective = match kind {
                MissionKind::ConquerTerritories => None,
                MissionKind::ConquerContinents => {
                    let continents = world
                        .continents()
                        .choose_multiple(rng, 2)
                        .map(|c| c.id)
                        .collect::<Vec<_>>();

                    match continents[..] {
                        [a, b] => Some(Objective::ConquerContinents([a, b])),
                        _ => None,
                    }
                }
                MissionKind::EliminatePlayer => {
                    let candidates = players
                        .iter()
                        .copied()
                        .filter(|&p| p != owner && !targeted.contains(&p))
                        .collect::<Vec<_>>();

                    candidates.choose(rng).map(|&target| {
                        targeted.push(target);
                        Objective::EliminatePlayer(target)
                    })
                }
            };

            let objective = objective.unwrap_or(Objective::ConquerTerritories { threshold });
            log::debug!("player {owner:?} was given mission {objective:?}");
            Mission::new(owner, objective)
        })
        .collect()
}
