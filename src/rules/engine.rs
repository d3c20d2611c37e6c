//! The turn-resolution state machine.
//!
//! `GameEngine` owns the board, the boneyard and the roster for one match.
//! Everything it exposes acts on "the current player"; the caller drives it
//! one operation at a time:
//!
//! ```text
//! start_match
//!   loop until result():
//!     legal_tiles non-empty -> play_tile(i)  [Both -> play_left / play_right]
//!     else boneyard left    -> draw_tile()   [Both -> play_left / play_right]
//!     else                  -> pass_turn()
//!     advance_turn()
//! ```
//!
//! `play_turn` runs that body in one call given a `TurnDecider`.
//!
//! ## Example
//!
//! ```
//! use domino_engine::core::DominoSettings;
//! use domino_engine::rules::GameEngine;
//!
//! let mut engine = GameEngine::with_seed(DominoSettings::new().with_players(2), 7);
//! let starter = engine.start_match().unwrap();
//!
//! assert_eq!(engine.current_turn(), Some(starter));
//! assert!(engine.board().is_empty());
//! assert_eq!(engine.legal_tiles().len(), 14);
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::core::action::{ActionRecord, GameAction};
use crate::core::config::DominoSettings;
use crate::core::error::{DominoError, DominoResult};
use crate::core::player::{Player, PlayerId, PlayerMap, PlayerRole};
use crate::core::rng::{GameRng, GameRngState};
use crate::core::tile::{attach, AttachSide, Ends, Tile, TileId};
use crate::zones::{Board, Boneyard, Side};

use super::decider::{TurnDecider, TurnOutcome};
use super::result::GameResult;
use super::snapshot::MatchSnapshot;

/// A tile that matched both ends, waiting for the caller to pick a side.
#[derive(Clone, Debug)]
struct Pending {
    tile: Tile,
    from_draw: bool,
}

/// A prearranged position to start a match from instead of a random deal.
///
/// Tiles are given as `(left, right)` pips. Board tiles are laid left to
/// right and must chain. Ids are assigned in the order board, hands (seat
/// order), boneyard.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    pub board: Vec<(u8, u8)>,
    pub hands: Vec<Vec<(u8, u8)>>,
    pub boneyard: Vec<(u8, u8)>,
    pub current: PlayerId,
}

/// Rules engine for one table.
#[derive(Clone, Debug)]
pub struct GameEngine {
    settings: DominoSettings,
    rng: GameRng,

    board: Board,
    boneyard: Boneyard,
    players: PlayerMap<Player>,

    /// `None` until a match is started.
    current_turn: Option<PlayerId>,
    turn_number: u32,
    pass_count: usize,

    pending: Option<Pending>,
    last_drawn: Option<TileId>,
    last_played: Option<TileId>,
    last_action: Option<GameAction>,
    history: Vector<ActionRecord>,

    /// Number of tiles in play this match.
    set_size: usize,
}

impl GameEngine {
    /// Create an engine whose shuffles are seeded from entropy.
    #[must_use]
    pub fn new(settings: DominoSettings) -> Self {
        Self::with_rng(settings, GameRng::from_entropy())
    }

    /// Create an engine with reproducible shuffles.
    #[must_use]
    pub fn with_seed(settings: DominoSettings, seed: u64) -> Self {
        Self::with_rng(settings, GameRng::new(seed))
    }

    /// Create an engine that continues a captured shuffle sequence.
    ///
    /// With the state from `rng_state()` (or a `MatchSnapshot`), the next
    /// `start_match` deals exactly what the original engine would have.
    #[must_use]
    pub fn with_rng_state(settings: DominoSettings, state: &GameRngState) -> Self {
        Self::with_rng(settings, GameRng::from_state(state))
    }

    fn with_rng(settings: DominoSettings, rng: GameRng) -> Self {
        Self {
            settings,
            rng,
            board: Board::new(),
            boneyard: Boneyard::new(),
            players: PlayerMap::default(),
            current_turn: None,
            turn_number: 0,
            pass_count: 0,
            pending: None,
            last_drawn: None,
            last_played: None,
            last_action: None,
            history: Vector::new(),
            set_size: 0,
        }
    }

    /// Start a match from a prearranged layout instead of a shuffled deal.
    ///
    /// The settings' roster must match the number of hands; the pip range is
    /// not consulted.
    pub fn from_layout(settings: DominoSettings, layout: Layout) -> DominoResult<Self> {
        settings.validate_roster()?;
        if layout.hands.len() != settings.players {
            return Err(DominoError::InvalidLayout {
                reason: "hand count does not match the roster",
            });
        }
        if layout.current.index() >= settings.players {
            return Err(DominoError::InvalidLayout {
                reason: "current player is not seated",
            });
        }
        let total = layout.board.len()
            + layout.boneyard.len()
            + layout.hands.iter().map(Vec::len).sum::<usize>();
        if total > usize::from(u16::MAX) {
            return Err(DominoError::InvalidLayout {
                reason: "too many tiles",
            });
        }

        let mut engine = Self::new(settings);
        let mut next_id = 0u16;
        let mut make = |(left, right): (u8, u8)| {
            let tile = Tile::new(TileId::new(next_id), left, right);
            next_id += 1;
            tile
        };

        for pips in layout.board {
            engine
                .board
                .insert_right(make(pips))
                .map_err(|_| DominoError::InvalidLayout {
                    reason: "board tiles do not chain",
                })?;
        }
        engine.players = PlayerMap::new(settings.players, |p| seat(&settings, p));
        for (player, hand) in PlayerId::all(settings.players).zip(layout.hands) {
            for pips in hand {
                engine.players[player].add(make(pips));
            }
        }
        for pips in layout.boneyard {
            engine.boneyard.add(make(pips));
        }

        engine.set_size = total;
        engine.current_turn = Some(layout.current);
        engine.turn_number = 1;
        Ok(engine)
    }

    // === Settings ===

    /// A copy of the current settings.
    #[must_use]
    pub fn settings(&self) -> DominoSettings {
        self.settings
    }

    /// Replace the settings. Takes effect at the next `start_match`.
    pub fn set_settings(&mut self, settings: DominoSettings) {
        self.settings = settings;
    }

    /// Seed of the shuffle RNG, for replaying a match.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current position of the shuffle RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Match control ===

    /// Reset all match state, deal, and pick the starting player.
    ///
    /// Deals again from a fresh shuffle until some player holds a double; the
    /// holder of the highest double starts.
    #[instrument(skip(self), fields(seed = self.rng.seed()))]
    pub fn start_match(&mut self) -> DominoResult<PlayerId> {
        self.settings.validate()?;
        self.reset();

        let mut deals = 0u32;
        let starter = loop {
            deals += 1;
            self.deal();
            if let Some(starter) = self.pick_starting_player() {
                break starter;
            }
            debug!(deals, "no double dealt, dealing again");
        };

        self.current_turn = Some(starter);
        self.turn_number = 1;
        debug!(%starter, deals, players = self.players.player_count(), "match started");
        Ok(starter)
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.boneyard = Boneyard::new();
        self.players = PlayerMap::default();
        self.current_turn = None;
        self.turn_number = 0;
        self.pass_count = 0;
        self.pending = None;
        self.last_drawn = None;
        self.last_played = None;
        self.last_action = None;
        self.history = Vector::new();
        self.set_size = 0;
    }

    fn deal(&mut self) {
        let settings = self.settings;
        self.board = Board::new();
        self.boneyard = Boneyard::new();
        self.players = PlayerMap::new(settings.players, |p| seat(&settings, p));

        let mut next_id = 0u16;
        for left in settings.min_pips..=settings.max_pips {
            for right in left..=settings.max_pips {
                self.boneyard.add(Tile::new(TileId::new(next_id), left, right));
                next_id += 1;
            }
        }
        self.set_size = self.boneyard.count();
        self.boneyard.shuffle(&mut self.rng);

        let per_player = self.set_size / self.players.player_count();
        for (_, player) in self.players.iter_mut() {
            for _ in 0..per_player {
                if let Some(tile) = self.boneyard.draw_one() {
                    player.add(tile);
                }
            }
        }
        debug!(
            tiles = self.set_size,
            per_player,
            remaining = self.boneyard.count(),
            "tiles dealt"
        );
    }

    fn pick_starting_player(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .filter_map(|(id, p)| p.biggest_double().map(|d| (id, d.left())))
            .max_by_key(|&(_, pips)| pips)
            .map(|(id, _)| id)
    }

    // === Queries ===

    /// True once a match has been started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.current_turn.is_some()
    }

    /// Whose turn it is; `None` before the first match.
    #[must_use]
    pub fn current_turn(&self) -> Option<PlayerId> {
        self.current_turn
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_turn?)
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// The roster in seat order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn boneyard(&self) -> &Boneyard {
        &self.boneyard
    }

    /// The board's open ends, `None` while it is empty.
    #[must_use]
    pub fn ends(&self) -> Option<Ends> {
        self.board.ends()
    }

    /// Whether a tile could be placed right now. Every tile fits an empty board.
    #[must_use]
    pub fn is_playable(&self, tile: &Tile) -> bool {
        self.board
            .ends()
            .map_or(true, |ends| attach(ends, tile).attaches())
    }

    /// The current player's playable tiles, in hand order.
    #[must_use]
    pub fn legal_tiles(&self) -> Vec<&Tile> {
        self.current_player()
            .map(|player| {
                player
                    .tiles()
                    .iter()
                    .filter(|t| self.is_playable(t))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn legal_positions(&self) -> SmallVec<[usize; 8]> {
        self.current_player()
            .map(|player| {
                player
                    .tiles()
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| self.is_playable(t))
                    .map(|(i, _)| i)
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn can_current_player_play(&self) -> bool {
        !self.legal_positions().is_empty()
    }

    /// The tile waiting for `play_left`/`play_right`.
    #[must_use]
    pub fn pending_tile(&self) -> Option<&Tile> {
        self.pending.as_ref().map(|p| &p.tile)
    }

    #[must_use]
    pub fn last_action(&self) -> Option<GameAction> {
        self.last_action
    }

    #[must_use]
    pub fn last_played_tile(&self) -> Option<&Tile> {
        self.find_tile(self.last_played?)
    }

    #[must_use]
    pub fn last_drawn_tile(&self) -> Option<&Tile> {
        self.find_tile(self.last_drawn?)
    }

    /// Consecutive turns resolved without placing a tile.
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.pass_count
    }

    /// Turn number within the match, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every resolved action this match, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Read-only view of the whole table for presentation.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(self)
    }

    fn find_tile(&self, id: TileId) -> Option<&Tile> {
        if let Some(pending) = &self.pending {
            if pending.tile.id() == id {
                return Some(&pending.tile);
            }
        }
        self.board
            .tiles()
            .chain(self.players.values().flat_map(|p| p.tiles()))
            .find(|t| t.id() == id)
    }

    /// Check that every tile of the match sits in exactly one place.
    #[must_use]
    pub fn verify_conservation(&self) -> bool {
        let mut seen = FxHashSet::default();
        let tiles = self
            .boneyard
            .tiles()
            .chain(self.board.tiles())
            .chain(self.players.values().flat_map(|p| p.tiles()))
            .chain(self.pending.iter().map(|p| &p.tile));

        for tile in tiles {
            if !seen.insert(tile.id()) {
                return false;
            }
        }
        seen.len() == self.set_size
    }

    // === Terminal detection ===

    fn regular_winner(&self) -> Option<PlayerId> {
        if self.pending.is_some() {
            return None;
        }
        self.players
            .iter()
            .find(|(_, p)| !p.has_any_tile())
            .map(|(id, _)| id)
    }

    /// Some player has emptied their hand.
    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.regular_winner().is_some()
    }

    /// At least a full round passed without a placement, the boneyard is
    /// empty and every hand is non-empty.
    ///
    /// Draw-and-passes count as passes, so the counter can run past the
    /// roster size before the boneyard empties.
    #[must_use]
    pub fn has_draw(&self) -> bool {
        self.is_started()
            && self.pending.is_none()
            && self.pass_count >= self.players.player_count()
            && self.boneyard.is_empty()
            && self.players.values().all(Player::has_any_tile)
    }

    /// The outcome, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if let Some(winner) = self.regular_winner() {
            return Some(GameResult::Domino(winner));
        }
        if !self.has_draw() {
            return None;
        }
        self.players
            .iter()
            .map(|(id, p)| (id, p.hand_sum()))
            .min_by_key(|&(id, sum)| (sum, id))
            .map(|(winner, hand_sum)| GameResult::Blocked { winner, hand_sum })
    }

    /// The winning seat, once the match is over.
    #[must_use]
    pub fn winner_turn(&self) -> Option<PlayerId> {
        self.result().map(|r| r.winner())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.has_winner() || self.has_draw()
    }

    // === Mutations ===

    fn ensure_can_act(&self) -> DominoResult<PlayerId> {
        let player = self.current_turn.ok_or(DominoError::NoMatchInProgress)?;
        if self.pending.is_some() {
            return Err(DominoError::PendingSideChoice);
        }
        if self.is_over() {
            return Err(DominoError::MatchOver);
        }
        Ok(player)
    }

    /// Play the current player's `legal_index`-th legal tile.
    ///
    /// Returns where it fits. On `Both` nothing is placed yet: the tile waits
    /// for `play_left` or `play_right`.
    pub fn play_tile(&mut self, legal_index: usize) -> DominoResult<AttachSide> {
        let player = self.ensure_can_act()?;
        let positions = self.legal_positions();
        let out_of_range = DominoError::IndexOutOfRange {
            index: legal_index,
            len: positions.len(),
        };

        let position = *positions.get(legal_index).ok_or(out_of_range.clone())?;
        let tile = self.players[player]
            .remove_at(position)
            .ok_or(out_of_range)?;

        let side = self.resolve(player, tile, false);
        debug_assert!(self.verify_conservation());
        Ok(side)
    }

    /// Draw the front boneyard tile and play it if it fits.
    ///
    /// A tile that fits nowhere goes into the hand and the turn is a
    /// `DrawAndPass`. On `Both` the tile waits for a side.
    pub fn draw_tile(&mut self) -> DominoResult<AttachSide> {
        let player = self.ensure_can_act()?;
        let tile = self.boneyard.draw_one().ok_or(DominoError::BoneyardEmpty)?;
        debug!(%player, %tile, remaining = self.boneyard.count(), "tile drawn");

        let side = self.resolve(player, tile, true);
        debug_assert!(self.verify_conservation());
        Ok(side)
    }

    /// Resolve the turn as a pass.
    pub fn pass_turn(&mut self) -> DominoResult<()> {
        let player = self.ensure_can_act()?;
        self.record_pass(player, None);
        Ok(())
    }

    /// Place the pending tile on the left end.
    pub fn play_left(&mut self) -> DominoResult<bool> {
        self.play_pending(Side::Left)
    }

    /// Place the pending tile on the right end.
    pub fn play_right(&mut self) -> DominoResult<bool> {
        self.play_pending(Side::Right)
    }

    fn play_pending(&mut self, side: Side) -> DominoResult<bool> {
        let player = self.current_turn.ok_or(DominoError::NoMatchInProgress)?;
        let Pending { tile, from_draw } = self.pending.take().ok_or(DominoError::NoPendingTile)?;

        let placed = self.place(player, tile, side, from_draw);
        debug_assert!(self.verify_conservation());
        Ok(placed)
    }

    /// Hand the turn to the next seat.
    pub fn advance_turn(&mut self) -> DominoResult<PlayerId> {
        let current = self.current_turn.ok_or(DominoError::NoMatchInProgress)?;
        if self.pending.is_some() {
            return Err(DominoError::PendingSideChoice);
        }

        let next = current.next(self.players.player_count());
        self.current_turn = Some(next);
        self.turn_number += 1;
        Ok(next)
    }

    /// Run one whole turn: play, draw or pass, ask for a side if needed, and
    /// advance to the next seat.
    pub fn play_turn<D>(&mut self, decider: &mut D) -> DominoResult<TurnOutcome>
    where
        D: TurnDecider + ?Sized,
    {
        let player = self.ensure_can_act()?;

        let legal = self.legal_tiles();
        let side = if !legal.is_empty() {
            let choice = decider.choose_tile(self, &legal);
            self.play_tile(choice)?
        } else if !self.boneyard.is_empty() {
            self.draw_tile()?
        } else {
            self.pass_turn()?;
            AttachSide::None
        };

        if side == AttachSide::Both {
            let tile = self.pending_tile().ok_or(DominoError::NoPendingTile)?;
            match decider.choose_side(self, tile) {
                Side::Left => self.play_left()?,
                Side::Right => self.play_right()?,
            };
        }

        let record = self.history.back().cloned();
        let result = self.result();
        let next = self.advance_turn()?;

        Ok(TurnOutcome {
            player,
            action: record.as_ref().map_or(GameAction::Pass, |r| r.action),
            tile: record.and_then(|r| r.tile),
            next,
            result,
        })
    }

    fn resolve(&mut self, player: PlayerId, tile: Tile, from_draw: bool) -> AttachSide {
        let side = match self.board.ends() {
            None => AttachSide::Left,
            Some(ends) => attach(ends, &tile),
        };

        match side {
            AttachSide::None => {
                let id = tile.id();
                self.players[player].add(tile);
                self.record_pass(player, from_draw.then_some(id));
            }
            AttachSide::Left => {
                self.place(player, tile, Side::Left, from_draw);
            }
            AttachSide::Right => {
                self.place(player, tile, Side::Right, from_draw);
            }
            AttachSide::Both => {
                debug!(%player, %tile, "tile fits both ends, waiting for a side");
                if from_draw {
                    self.last_drawn = Some(tile.id());
                }
                self.pending = Some(Pending { tile, from_draw });
            }
        }
        side
    }

    fn place(&mut self, player: PlayerId, tile: Tile, side: Side, from_draw: bool) -> bool {
        let id = tile.id();
        match self.board.insert(side, tile) {
            Ok(()) => {
                let action = match side {
                    Side::Left => GameAction::PlayLeft,
                    Side::Right => GameAction::PlayRight,
                };
                let action = if from_draw { action.after_draw() } else { action };

                self.pass_count = 0;
                self.last_played = Some(id);
                self.last_drawn = from_draw.then_some(id);
                let pips = self.board.last_placed().map(Tile::pips);
                self.record(player, action, pips);
                true
            }
            Err(tile) => {
                // Only reachable for a side the tile does not fit; it stays with the player.
                self.players[player].add(tile);
                self.record_pass(player, from_draw.then_some(id));
                false
            }
        }
    }

    fn record_pass(&mut self, player: PlayerId, drawn: Option<TileId>) {
        self.pass_count += 1;
        self.last_played = None;
        self.last_drawn = drawn;

        let action = match drawn {
            Some(_) => GameAction::DrawAndPass,
            None => GameAction::Pass,
        };
        let pips = drawn.and_then(|id| self.find_tile(id)).map(Tile::pips);
        self.record(player, action, pips);
    }

    fn record(&mut self, player: PlayerId, action: GameAction, tile: Option<(u8, u8)>) {
        self.last_action = Some(action);
        self.history
            .push_back(ActionRecord::new(player, action, tile, self.turn_number));

        let hand = self.players.get(player).map_or(0, Player::tile_count);
        debug!(%player, %action, ?tile, hand, passes = self.pass_count, "action resolved");
        if let Some(result) = self.result() {
            debug!(?result, turn = self.turn_number, "match over");
        }
    }
}

fn seat(settings: &DominoSettings, player: PlayerId) -> Player {
    if player.index() < settings.humans {
        Player::new(PlayerRole::Human)
    } else {
        Player::new(PlayerRole::Automated)
    }
}
