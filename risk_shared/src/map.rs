mod classic;

pub use classic::classic;

use std::ops::{Index, IndexMut};

use crate::player::PlayerId;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerritoryId(pub u16);

impl TerritoryId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinentId(pub u8);

impl ContinentId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("continent {0:?} is not part of the world")]
    UnknownContinent(ContinentId),
    #[error("territory {0:?} is not part of the world")]
    UnknownTerritory(TerritoryId),
    #[error("territory {0:?} cannot neighbor itself")]
    SelfLoop(TerritoryId),
    #[error("no territory is named {0:?}")]
    UnknownName(String),
    #[error("continent {0:?} is out of place")]
    MisplacedContinent(ContinentId),
    #[error("territory {0:?} is out of place")]
    MisplacedTerritory(TerritoryId),
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Territory {
    pub id: TerritoryId,
    pub name: String,
    pub continent: ContinentId,
    pub occupier: Option<PlayerId>,
    pub troops: u32,
    /// How many of `troops` were moved here during the current turn.
    pub moved_troops: u32,
}

impl Territory {
    pub fn new(id: TerritoryId, name: impl Into<String>, continent: ContinentId) -> Self {
        Self {
            id,
            name: name.into(),
            continent,
            occupier: None,
            troops: 0,
            moved_troops: 0,
        }
    }

    pub fn add_troops(&mut self, count: u32, moved: bool) {
        self.troops += count;
        if moved {
            self.moved_troops += count;
        }
    }

    pub fn remove_troops(&mut self, count: u32) {
        self.troops = self.troops.saturating_sub(count);
        self.moved_troops = self.moved_troops.min(self.troops);
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Continent {
    pub id: ContinentId,
    pub name: String,
}

/// Territories grouped into continents and joined by a static, undirected neighbor relation.
/// Territory ownership lives here and nowhere else.
///
/// Deserializing goes through [`WorldBuilder`], so ids stay dense and edges symmetric.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "WorldData")
)]
pub struct World {
    name: String,
    continents: Vec<Continent>,
    territories: Vec<Territory>,
    edges: Vec<Vec<TerritoryId>>,
}

impl World {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn continents(&self) -> &[Continent] {
        &self.continents
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn territory(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id.index())
    }

    pub fn territory_mut(&mut self, id: TerritoryId) -> Option<&mut Territory> {
        self.territories.get_mut(id.index())
    }

    pub fn territory_by_name(&self, name: &str) -> Option<&Territory> {
        self.territories.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, id: TerritoryId) -> bool {
        id.index() < self.territories.len()
    }

    pub fn neighbors(&self, id: TerritoryId) -> &[TerritoryId] {
        self.edges.get(id.index()).map_or(&[], Vec::as_slice)
    }

    pub fn are_neighbors(&self, a: TerritoryId, b: TerritoryId) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn owner(&self, id: TerritoryId) -> Option<PlayerId> {
        self.territory(id).and_then(|t| t.occupier)
    }

    pub fn continent_territories(
        &self,
        continent: ContinentId,
    ) -> impl Iterator<Item = &Territory> + '_ {
        self.territories
            .iter()
            .filter(move |t| t.continent == continent)
    }

    pub fn territories_of(&self, player: PlayerId) -> impl Iterator<Item = &Territory> + '_ {
        self.territories
            .iter()
            .filter(move |t| t.occupier == Some(player))
    }

    pub fn territories_mut_of(
        &mut self,
        player: PlayerId,
    ) -> impl Iterator<Item = &mut Territory> + '_ {
        self.territories
            .iter_mut()
            .filter(move |t| t.occupier == Some(player))
    }

    pub fn territory_count_of(&self, player: PlayerId) -> usize {
        self.territories_of(player).count()
    }

    /// Empty continents are never owned.
    pub fn owns_continent(&self, player: PlayerId, continent: ContinentId) -> bool {
        let mut territories = self.continent_territories(continent).peekable();
        territories.peek().is_some() && territories.all(|t| t.occupier == Some(player))
    }

    pub fn continents_held(&self, player: PlayerId) -> Vec<ContinentId> {
        self.continents
            .iter()
            .map(|c| c.id)
            .filter(|&c| self.owns_continent(player, c))
            .collect()
    }

    pub fn total_troops(&self) -> u64 {
        self.territories.iter().map(|t| u64::from(t.troops)).sum()
    }

    /// Forgets every owner and army, leaving the graph itself untouched.
    pub fn clear_occupation(&mut self) {
        for territory in &mut self.territories {
            territory.occupier = None;
            territory.troops = 0;
            territory.moved_troops = 0;
        }
    }
}

impl Index<TerritoryId> for World {
    type Output = Territory;

    fn index(&self, id: TerritoryId) -> &Self::Output {
        &self.territories[id.index()]
    }
}

impl IndexMut<TerritoryId> for World {
    fn index_mut(&mut self, id: TerritoryId) -> &mut Self::Output {
        &mut self.territories[id.index()]
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct WorldData {
    name: String,
    continents: Vec<Continent>,
    territories: Vec<Territory>,
    edges: Vec<Vec<TerritoryId>>,
}

#[cfg(feature = "serde")]
impl TryFrom<WorldData> for World {
    type Error = WorldError;

    fn try_from(data: WorldData) -> Result<Self, Self::Error> {
        let mut builder = WorldBuilder::new(data.name);

        for (i, continent) in data.continents.into_iter().enumerate() {
            if continent.id.index() != i {
                return Err(WorldError::MisplacedContinent(continent.id));
            }
            builder.continent(continent.name);
        }

        let mut occupation = Vec::with_capacity(data.territories.len());
        for (i, territory) in data.territories.into_iter().enumerate() {
            if territory.id.index() != i {
                return Err(WorldError::MisplacedTerritory(territory.id));
            }
            builder.territory(territory.name, territory.continent)?;
            occupation.push((territory.occupier, territory.troops, territory.moved_troops));
        }

        for (i, neighbors) in data.edges.into_iter().enumerate() {
            for neighbor in neighbors {
                builder.edge(TerritoryId(i as u16), neighbor)?;
            }
        }

        let mut world = builder.build();
        for (territory, (occupier, troops, moved_troops)) in
            world.territories.iter_mut().zip(occupation)
        {
            territory.occupier = occupier;
            territory.troops = troops;
            territory.moved_troops = moved_troops.min(troops);
        }

        Ok(world)
    }
}

/// Builds a [`World`] while keeping ids dense and edges symmetric.
#[derive(Debug)]
pub struct WorldBuilder {
    world: World,
}

impl WorldBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            world: World {
                name: name.into(),
                continents: Vec::new(),
                territories: Vec::new(),
                edges: Vec::new(),
            },
        }
    }

    pub fn continent(&mut self, name: impl Into<String>) -> ContinentId {
        let id = ContinentId(self.world.continents.len() as u8);
        self.world.continents.push(Continent {
            id,
            name: name.into(),
        });
        id
    }

    pub fn territory(
        &mut self,
        name: impl Into<String>,
        continent: ContinentId,
    ) -> Result<TerritoryId, WorldError> {
        if continent.index() >= self.world.continents.len() {
            return Err(WorldError::UnknownContinent(continent));
        }

        let id = TerritoryId(self.world.territories.len() as u16);
        self.world
            .territories
            .push(Territory::new(id, name, continent));
        self.world.edges.push(Vec::new());
        Ok(id)
    }

    pub fn edge(&mut self, a: TerritoryId, b: TerritoryId) -> Result<&mut Self, WorldError> {
        for id in [a, b] {
            if !self.world.contains(id) {
                return Err(WorldError::UnknownTerritory(id));
            }
        }

        if a == b {
            return Err(WorldError::SelfLoop(a));
        }

        if !self.world.edges[a.index()].contains(&b) {
            self.world.edges[a.index()].push(b);
            self.world.edges[b.index()].push(a);
        }

        Ok(self)
    }

    pub fn edge_by_name(&mut self, a: &str, b: &str) -> Result<&mut Self, WorldError> {
        let lookup = |name: &str| {
            self.world
                .territory_by_name(name)
                .map(|t| t.id)
                .ok_or_else(|| WorldError::UnknownName(name.to_owned()))
        };

        let (a, b) = (lookup(a)?, lookup(b)?);
        self.edge(a, b)
    }

    pub fn build(self) -> World {
        self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> World {
        let mut builder = WorldBuilder::new("line");
        let continent = builder.continent("Only");
        let a = builder.territory("A", continent).unwrap();
        let b = builder.territory("B", continent).unwrap();
        let c = builder.territory("C", continent).unwrap();
        builder.edge(a, b).unwrap().edge(b, c).unwrap();
        builder.build()
    }

    #[test]
    fn adjacency_is_symmetric() {
        let world = line();
        let (a, b, c) = (TerritoryId(0), TerritoryId(1), TerritoryId(2));

        assert!(world.are_neighbors(a, b));
        assert!(world.are_neighbors(b, a));
        assert!(world.are_neighbors(c, b));
        assert!(!world.are_neighbors(a, c));
        assert_eq!(world.neighbors(b), &[a, c]);
    }

    #[test]
    fn duplicate_edges_are_collapsed() {
        let mut builder = WorldBuilder::new("pair");
        let continent = builder.continent("Only");
        let a = builder.territory("A", continent).unwrap();
        let b = builder.territory("B", continent).unwrap();
        builder.edge(a, b).unwrap().edge(b, a).unwrap();

        assert_eq!(builder.build().neighbors(a), &[b]);
    }

    #[test]
    fn builder_rejects_bad_references() {
        let mut builder = WorldBuilder::new("bad");
        let continent = builder.continent("Only");
        let a = builder.territory("A", continent).unwrap();

        assert_eq!(
            builder.territory("X", ContinentId(3)),
            Err(WorldError::UnknownContinent(ContinentId(3)))
        );
        assert_eq!(
            builder.edge(a, a).map(|_| ()),
            Err(WorldError::SelfLoop(a))
        );
        assert_eq!(
            builder.edge(a, TerritoryId(9)).map(|_| ()),
            Err(WorldError::UnknownTerritory(TerritoryId(9)))
        );
        assert_eq!(
            builder.edge_by_name("A", "Nowhere").map(|_| ()),
            Err(WorldError::UnknownName("Nowhere".to_owned()))
        );
    }

    #[test]
    fn ownership_queries() {
        let mut world = line();
        let (p, q) = (PlayerId(1), PlayerId(2));
        world[TerritoryId(0)].occupier = Some(p);
        world[TerritoryId(1)].occupier = Some(p);
        world[TerritoryId(2)].occupier = Some(q);

        assert_eq!(world.territory_count_of(p), 2);
        assert_eq!(world.owner(TerritoryId(2)), Some(q));
        assert!(!world.owns_continent(p, ContinentId(0)));

        world[TerritoryId(2)].occupier = Some(p);
        assert_eq!(world.continents_held(p), vec![ContinentId(0)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_worlds_are_rebuilt() {
        let json = r#"{
            "name": "pair",
            "continents": [{ "id": 0, "name": "Only" }],
            "territories": [
                { "id": 0, "name": "A", "continent": 0, "occupier": 4, "troops": 2, "moved_troops": 0 },
                { "id": 1, "name": "B", "continent": 0, "occupier": null, "troops": 0, "moved_troops": 0 }
            ],
            "edges": [[1], []]
        }"#;

        let world: World = serde_json::from_str(json).unwrap();
        assert!(world.are_neighbors(TerritoryId(1), TerritoryId(0)));
        assert_eq!(world.owner(TerritoryId(0)), Some(PlayerId(4)));
        assert_eq!(world[TerritoryId(0)].troops, 2);

        let round_trip: World =
            serde_json::from_str(&serde_json::to_string(&world).unwrap()).unwrap();
        assert_eq!(round_trip.neighbors(TerritoryId(0)), &[TerritoryId(1)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_worlds_are_rejected() {
        let misplaced = r#"{
            "name": "swapped",
            "continents": [{ "id": 0, "name": "Only" }],
            "territories": [
                { "id": 1, "name": "B", "continent": 0, "occupier": null, "troops": 0, "moved_troops": 0 },
                { "id": 0, "name": "A", "continent": 0, "occupier": null, "troops": 0, "moved_troops": 0 }
            ],
            "edges": []
        }"#;
        let dangling = r#"{
            "name": "dangling",
            "continents": [{ "id": 0, "name": "Only" }],
            "territories": [
                { "id": 0, "name": "A", "continent": 0, "occupier": null, "troops": 0, "moved_troops": 0 }
            ],
            "edges": [[7]]
        }"#;

        assert!(serde_json::from_str::<World>(misplaced).is_err());
        assert!(serde_json::from_str::<World>(dangling).is_err());
    }

    #[test]
    fn removing_troops_clamps_moved_units() {
        let mut territory = Territory::new(TerritoryId(0), "A", ContinentId(0));
        territory.add_troops(2, false);
        territory.add_troops(3, true);
        assert_eq!((territory.troops, territory.moved_troops), (5, 3));

        territory.remove_troops(4);
        assert_eq!((territory.troops, territory.moved_troops), (1, 1));
    }
}
