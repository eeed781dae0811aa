use rand::Rng;

pub const MAX_ATTACK_DICE: u32 = 3;
pub const MAX_DEFEND_DICE: u32 = 2;

/// Armies a territory holding `troops` may commit to one attack. One always stays behind.
pub fn max_attack_count(troops: u32) -> u32 {
    std::cmp::min(MAX_ATTACK_DICE, troops.saturating_sub(1))
}

pub fn defending_dice(attacking_troops: u32, defending_troops: u32) -> u32 {
    if attacking_troops == 1 || defending_troops <= 1 {
        1
    } else {
        MAX_DEFEND_DICE
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Battle {
    pub attacking_rolls: Vec<u8>,
    pub defending_rolls: Vec<u8>,
    pub attacking_lost: u32,
    pub defending_lost: u32,
}

/// Rolls both sides and pairs the dice highest against highest. Ties go to the defender.
pub fn resolve<R: Rng>(rng: &mut R, attacking_troops: u32, defending_troops: u32) -> Battle {
    let attacking_rolls = roll_sorted(rng, attacking_troops);
    let defending_rolls = roll_sorted(rng, defending_dice(attacking_troops, defending_troops));

    compare(attacking_rolls, defending_rolls)
}

pub fn compare(attacking_rolls: Vec<u8>, defending_rolls: Vec<u8>) -> Battle {
    let (attacking_lost, defending_lost) = attacking_rolls
        .iter()
        .zip(&defending_rolls)
        .fold((0, 0), |(a, d), (x, y)| if x > y { (a, d + 1) } else { (a + 1, d) });

    Battle {
        attacking_rolls,
        defending_rolls,
        attacking_lost,
        defending_lost,
    }
}

fn roll_sorted<R: Rng>(rng: &mut R, count: u32) -> Vec<u8> {
    let mut rolls = std::iter::repeat_with(|| rng.gen_range(1..=6))
        .take(count as usize)
        .collect::<Vec<u8>>();

    rolls.sort_unstable_by_key(|&x| std::cmp::Reverse(x));
    rolls
}
