//! Board model: players, turns, pits and the game aggregate.
//!
//! Positions are 1-based and run `1..=2N`. Positions `1..=N` belong to
//! player one, `N+1..=2N` to player two. The two stores are not pits; they
//! are the per-player scores, and a store sits just before its owner's
//! store boundary (see [`Game::store_boundary`]).

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Upper bound on little pits per player accepted at creation.
pub const MAX_LITTLE_PITS_PER_PLAYER: u32 = 1_000;
/// Upper bound on stones per pit accepted at creation.
pub const MAX_STONES_PER_PIT: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "PLAYER_ONE")]
    One,
    #[serde(rename = "PLAYER_TWO")]
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::One => "PLAYER_ONE",
            Player::Two => "PLAYER_TWO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Turn {
    PlayerOne,
    PlayerTwo,
    /// Terminal; no transitions out.
    GameOver,
}

impl Turn {
    /// Human-readable label used by the status projection.
    pub fn label(self) -> &'static str {
        match self {
            Turn::PlayerOne => "Player one",
            Turn::PlayerTwo => "Player two",
            Turn::GameOver => "Game Over",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Turn::PlayerOne => "PLAYER_ONE",
            Turn::PlayerTwo => "PLAYER_TWO",
            Turn::GameOver => "GAME_OVER",
        }
    }

    /// The player to move, or `None` once the game is over.
    pub fn player(self) -> Option<Player> {
        match self {
            Turn::PlayerOne => Some(Player::One),
            Turn::PlayerTwo => Some(Player::Two),
            Turn::GameOver => None,
        }
    }

    pub fn is_over(self) -> bool {
        self == Turn::GameOver
    }
}

impl From<Player> for Turn {
    fn from(p: Player) -> Self {
        match p {
            Player::One => Turn::PlayerOne,
            Player::Two => Turn::PlayerTwo,
        }
    }
}

/// Pick the opening player uniformly; never yields `GameOver`.
pub fn random_turn<R: Rng + ?Sized>(rng: &mut R) -> Turn {
    if rng.random_bool(0.5) {
        Turn::PlayerOne
    } else {
        Turn::PlayerTwo
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pit {
    pub position: u32,
    pub owner: Player,
    pub stones: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: String,
    pub turn: Turn,
    pub score_one: u32,
    pub score_two: u32,
    pub stones_per_pit: u32,
    /// Ordered by position; `pits[i].position == i + 1`.
    pits: Vec<Pit>,
}

impl Game {
    /// Fresh board: every pit holds `stones_per_pit`, both scores zero.
    pub fn new(
        id: impl Into<String>,
        little_pits_per_player: u32,
        stones_per_pit: u32,
        first: Player,
    ) -> Result<Game, DomainError> {
        validate_dimensions(little_pits_per_player, stones_per_pit)?;

        let n = little_pits_per_player;
        let pits = (1..=2 * n)
            .map(|position| Pit {
                position,
                owner: if position <= n { Player::One } else { Player::Two },
                stones: stones_per_pit,
            })
            .collect();

        Ok(Game {
            id: id.into(),
            turn: Turn::from(first),
            score_one: 0,
            score_two: 0,
            stones_per_pit,
            pits,
        })
    }

    /// Rebuild a game from stored parts, rejecting anything that breaks the
    /// board invariants.
    pub fn restore(
        id: impl Into<String>,
        turn: Turn,
        score_one: u32,
        score_two: u32,
        stones_per_pit: u32,
        mut pits: Vec<Pit>,
    ) -> Result<Game, DomainError> {
        let id = id.into();
        if pits.is_empty() || pits.len() % 2 != 0 {
            return Err(DomainError::corrupt(format!(
                "game {id} has {} pits; expected an even, non-zero count",
                pits.len()
            )));
        }
        pits.sort_by_key(|p| p.position);

        let n = (pits.len() / 2) as u32;
        for (idx, pit) in pits.iter().enumerate() {
            let expected_position = idx as u32 + 1;
            let expected_owner = if expected_position <= n {
                Player::One
            } else {
                Player::Two
            };
            if pit.position != expected_position || pit.owner != expected_owner {
                return Err(DomainError::corrupt(format!(
                    "game {id} pit layout broken at position {}",
                    pit.position
                )));
            }
        }

        let game = Game {
            id,
            turn,
            score_one,
            score_two,
            stones_per_pit,
            pits,
        };
        if game.total_stones() != game.expected_total() {
            return Err(DomainError::corrupt(format!(
                "game {} holds {} stones; expected {}",
                game.id,
                game.total_stones(),
                game.expected_total()
            )));
        }
        Ok(game)
    }

    pub fn pits(&self) -> &[Pit] {
        &self.pits
    }

    pub fn pit_at(&self, position: u32) -> Option<&Pit> {
        if position == 0 {
            return None;
        }
        self.pits.get(position as usize - 1)
    }

    pub(crate) fn pit_at_mut(&mut self, position: u32) -> Option<&mut Pit> {
        if position == 0 {
            return None;
        }
        self.pits.get_mut(position as usize - 1)
    }

    /// Stones in the pit at `position`; 0 when out of range.
    pub fn stones_at(&self, position: u32) -> u32 {
        self.pit_at(position).map_or(0, |p| p.stones)
    }

    pub fn total_little_pits(&self) -> u32 {
        self.pits.len() as u32
    }

    pub fn little_pits_per_player(&self) -> u32 {
        self.total_little_pits() / 2
    }

    pub fn owner_of(&self, position: u32) -> Player {
        if position <= self.little_pits_per_player() {
            Player::One
        } else {
            Player::Two
        }
    }

    pub fn opposite_of(&self, position: u32) -> u32 {
        self.total_little_pits() - position + 1
    }

    pub fn next_position(&self, position: u32) -> u32 {
        if position >= self.total_little_pits() {
            1
        } else {
            position + 1
        }
    }

    /// First position of the opponent's zone. A player's store is sown
    /// right before the cursor reaches this position.
    pub fn store_boundary(&self, player: Player) -> u32 {
        match player {
            Player::One => self.little_pits_per_player() + 1,
            Player::Two => 1,
        }
    }

    pub fn score_of(&self, player: Player) -> u32 {
        match player {
            Player::One => self.score_one,
            Player::Two => self.score_two,
        }
    }

    pub(crate) fn add_to_score(&mut self, player: Player, stones: u32) {
        match player {
            Player::One => self.score_one += stones,
            Player::Two => self.score_two += stones,
        }
    }

    pub fn side(&self, player: Player) -> impl Iterator<Item = &Pit> + '_ {
        self.pits.iter().filter(move |p| p.owner == player)
    }

    pub fn stones_on_side(&self, player: Player) -> u32 {
        self.side(player).map(|p| p.stones).sum()
    }

    pub fn side_is_empty(&self, player: Player) -> bool {
        self.side(player).all(|p| p.stones == 0)
    }

    /// Scores plus every stone still on the board.
    pub fn total_stones(&self) -> u64 {
        let on_board: u64 = self.pits.iter().map(|p| u64::from(p.stones)).sum();
        u64::from(self.score_one) + u64::from(self.score_two) + on_board
    }

    pub fn expected_total(&self) -> u64 {
        u64::from(self.total_little_pits()) * u64::from(self.stones_per_pit)
    }

    pub fn is_over(&self) -> bool {
        self.turn.is_over()
    }
}

/// Range check shared by creation and request validation.
pub fn validate_dimensions(
    little_pits_per_player: u32,
    stones_per_pit: u32,
) -> Result<(), DomainError> {
    if !(1..=MAX_LITTLE_PITS_PER_PLAYER).contains(&little_pits_per_player) {
        return Err(DomainError::validation(
            ValidationKind::InvalidGameConfig,
            format!(
                "little_pits_per_player must be between 1 and {MAX_LITTLE_PITS_PER_PLAYER}, got {little_pits_per_player}"
            ),
        ));
    }
    if !(1..=MAX_STONES_PER_PIT).contains(&stones_per_pit) {
        return Err(DomainError::validation(
            ValidationKind::InvalidGameConfig,
            format!("stones_per_pit must be between 1 and {MAX_STONES_PER_PIT}, got {stones_per_pit}"),
        ));
    }
    Ok(())
}
