use risk_shared::player::PlayerColor;

/// Tunable rule constants. [`RulesConfig::default`] gives the standard rules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Seats at the table. Capped by the number of [`PlayerColor`]s.
    pub palette_size: usize,
    pub min_reinforcement: u32,
    pub territories_per_reinforcement: u32,
    pub continent_bonus: u32,
    /// Bonus for the first series turned in, the second, and so on.
    pub series_bonuses: Vec<u32>,
    /// Added for each series past the end of `series_bonuses`.
    pub series_increment: u32,
    /// Armies placed when a single card is released for an owned territory.
    pub territory_card_bonus: u32,
    /// Territory-count missions require `numerator / denominator` of the world.
    pub mission_territory_numerator: usize,
    pub mission_territory_denominator: usize,
    pub starting_troops: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            palette_size: PlayerColor::ALL.len(),
            min_reinforcement: 3,
            territories_per_reinforcement: 3,
            continent_bonus: 5,
            series_bonuses: vec![3, 5, 7, 10],
            series_increment: 5,
            territory_card_bonus: 2,
            mission_territory_numerator: 4,
            mission_territory_denominator: 7,
            starting_troops: 1,
        }
    }
}

impl RulesConfig {
    pub fn palette(&self) -> &[PlayerColor] {
        &PlayerColor::ALL[..self.palette_size.min(PlayerColor::ALL.len())]
    }

    /// Bonus for the series at zero-based `index` in match order.
    pub fn series_bonus(&self, index: u32) -> u32 {
        let fixed = &self.series_bonuses;
        fixed.get(index as usize).copied().unwrap_or_else(|| {
            let last = fixed.last().copied().unwrap_or(0);
            last + (index + 1 - fixed.len() as u32) * self.series_increment
        })
    }

    pub fn territory_bonus(&self, territories_held: u32) -> u32 {
        std::cmp::max(
            self.min_reinforcement,
            territories_held / self.territories_per_reinforcement.max(1),
        )
    }

    pub fn mission_threshold(&self, territory_count: usize) -> usize {
        territory_count * self.mission_territory_numerator
            / self.mission_territory_denominator.max(1)
    }
}
