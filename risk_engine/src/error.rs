use risk_shared::{map::TerritoryId, player::PlayerId};

/// Which operation ran short of armies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArmyOperation {
    Allocate,
    Attack,
    Move,
}

/// Rejected calls. None of them leave any trace in the match state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no player has joined the match")]
    NoPlayerLoggedIn,
    #[error("at least two players are needed to start")]
    NotEnoughPlayers,
    #[error("no world has been set")]
    WorldNotDefined,
    #[error("the match has already started")]
    MatchAlreadyStarted,
    #[error("every seat is taken")]
    NoSlotAvailable,
    #[error("the match has not started")]
    MatchNotStarted,
    #[error("the match is over")]
    MatchFinished,
    #[error("player {0:?} does not own territory {1:?}")]
    CountryOwner(PlayerId, TerritoryId),
    #[error("territories {0:?} and {1:?} are not neighbors")]
    CountriesNotInRelation(TerritoryId, TerritoryId),
    #[error("territory {0:?} belongs to the attacker")]
    IsOwnCountry(TerritoryId),
    #[error("not enough armies to {0:?}")]
    NotEnoughArmies(ArmyOperation),
    #[error("player {0:?} is not part of the match")]
    UnknownPlayer(PlayerId),
    #[error("territory {0:?} is not part of the world")]
    UnknownTerritory(TerritoryId),
}
