//! The game state machine.

use super::draw;
use super::{CapturedRoster, GameResult, MoveError, PromotionChooser, RuleParams};
use crate::board::{
    Board, CastleSide, Color, Move, MoveKind, Occupant, Piece, PositionError, Square,
    KING_HOME_FILE, PROMOTION_PIECES,
};

/// What a committed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// The move as executed, promotion choice included
    pub mv: Move,
    /// Kind of the piece that moved (a pawn for promotions)
    pub moved: Piece,
    pub captured: Option<Piece>,
    /// Whether the side now to move is in check
    pub gives_check: bool,
    /// Game result after the move
    pub result: GameResult,
}

/// A game of chess from one position onward.
///
/// Every request either commits fully or leaves the game untouched.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    active: Color,
    halfmove_clock: u32,
    /// Square of the pawn that just advanced two ranks, for one ply only
    en_passant_target: Option<Square>,
    history: Vec<Board>,
    captured: CapturedRoster,
    result: GameResult,
    draw_offer: Option<Color>,
    params: RuleParams,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard initial position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), Color::White)
    }

    fn with_board(board: Board, active: Color) -> Self {
        Game {
            board,
            active,
            halfmove_clock: 0,
            en_passant_target: None,
            history: Vec::new(),
            captured: CapturedRoster::default(),
            result: GameResult::InProgress,
            draw_offer: None,
            params: RuleParams::default(),
        }
    }

    /// Start from a custom position.
    ///
    /// Both sides need exactly one king, no pawn may stand on the first or
    /// last rank, and the side not to move must not be in check. A position
    /// that is already mate, stalemate or a material draw starts finished.
    pub fn from_position(board: Board, to_move: Color) -> Result<Self, PositionError> {
        for color in Color::BOTH {
            let kings = board
                .pieces_of(color)
                .filter(|(_, o)| o.piece == Piece::King)
                .count();
            match kings {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                count => return Err(PositionError::ExtraKing { color, count }),
            }
        }

        for color in Color::BOTH {
            if let Some((square, _)) = board
                .pieces_of(color)
                .find(|(sq, o)| o.piece == Piece::Pawn && (sq.rank() == 0 || sq.rank() == 7))
            {
                return Err(PositionError::PawnOnBackRank { square });
            }
        }

        let waiting = to_move.opponent();
        if board.is_in_check(waiting) {
            return Err(PositionError::OpponentInCheck { color: waiting });
        }

        let mut game = Self::with_board(board, to_move);
        game.result = game.evaluate();
        Ok(game)
    }

    /// Replace the draw rule thresholds and re-evaluate the position.
    #[must_use]
    pub fn with_params(mut self, params: RuleParams) -> Self {
        self.params = params;
        self.refresh();
        self
    }

    /// Set the half-move clock, e.g. when resuming a game.
    #[must_use]
    pub fn with_halfmove_clock(mut self, halfmove_clock: u32) -> Self {
        self.halfmove_clock = halfmove_clock;
        self.refresh();
        self
    }

    /// Recompute any result derived from the position. Agreed draws and
    /// resignations stand.
    fn refresh(&mut self) {
        if !matches!(
            self.result,
            GameResult::DrawAgreed | GameResult::Resignation { .. }
        ) {
            self.result = self.evaluate();
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Square of the pawn that may be captured en passant on this ply
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Board snapshots, one per committed ply, oldest first
    #[must_use]
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// `color`'s pieces that have been captured
    #[must_use]
    pub fn captured(&self, color: Color) -> &[Piece] {
        self.captured.of(color)
    }

    #[must_use]
    pub fn roster(&self) -> &CapturedRoster {
        &self.captured
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[must_use]
    pub fn params(&self) -> &RuleParams {
        &self.params
    }

    /// Side with an unanswered draw offer
    #[must_use]
    pub fn pending_draw_offer(&self) -> Option<Color> {
        self.draw_offer
    }

    /// Is the side to move in check?
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.active)
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.result.is_terminal() {
            Err(MoveError::GameOver {
                result: self.result,
            })
        } else {
            Ok(())
        }
    }

    /// Validate, classify and commit a move request.
    ///
    /// `chooser` is consulted only for a pawn reaching its last rank, and only
    /// after the move is known not to expose the king.
    pub fn play_move<C>(
        &mut self,
        from: Square,
        to: Square,
        chooser: &mut C,
    ) -> Result<MoveReport, MoveError>
    where
        C: PromotionChooser + ?Sized,
    {
        self.ensure_in_progress()?;
        Square::try_from((from.0, from.1))?;
        Square::try_from((to.0, to.1))?;

        let mover = self
            .board
            .occupant(from)
            .filter(|o| o.color == self.active)
            .ok_or(MoveError::WrongPieceOwnership { square: from })?;

        let mut mv = self.classify(from, to, mover).inspect_err(|_err| {
            #[cfg(feature = "logging")]
            log::trace!("rejected {from} {to}: {_err}");
        })?;

        if self.board.leaves_king_in_check(&mv) {
            #[cfg(feature = "logging")]
            log::trace!("rejected {from} {to}: king left in check");
            return Err(MoveError::SelfCheckViolation { from, to });
        }

        if let MoveKind::Promotion(_) = mv.kind {
            let piece = chooser.choose(self.active, to);
            if !piece.is_promotion_choice() {
                return Err(MoveError::InvalidPromotionChoice { piece });
            }
            mv = Move::promotion(from, to, piece);
        }

        Ok(self.commit(mv, mover.piece))
    }

    /// Play an already classified move, e.g. one from [`Game::legal_moves`].
    ///
    /// The move is validated like any request; a promotion without a piece
    /// promotes to a queen.
    pub fn play(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        let piece = mv.promotion_piece().unwrap_or(Piece::Queen);
        self.play_move(mv.from, mv.to, &mut |_: Color, _: Square| piece)
    }

    /// Every legal move for the side to move, promotions once per choice.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let candidates = self.candidate_moves();
        candidates
            .into_iter()
            .filter(|mv| !self.board.leaves_king_in_check(mv))
            .collect()
    }

    fn has_legal_move(&mut self) -> bool {
        let candidates = self.candidate_moves();
        candidates
            .iter()
            .any(|mv| !self.board.leaves_king_in_check(mv))
    }

    /// Offer a draw on behalf of the side to move.
    pub fn offer_draw(&mut self) -> Result<(), MoveError> {
        self.ensure_in_progress()?;
        self.draw_offer = Some(self.active);
        #[cfg(feature = "logging")]
        log::debug!("{} offers a draw", self.active);
        Ok(())
    }

    /// Answer the pending draw offer. Declining clears it.
    pub fn respond_to_draw(&mut self, accept: bool) -> Result<GameResult, MoveError> {
        self.ensure_in_progress()?;
        if self.draw_offer.take().is_none() {
            return Err(MoveError::NoDrawOffer);
        }
        if accept {
            self.finish(GameResult::DrawAgreed);
        }
        Ok(self.result)
    }

    /// The side to move resigns.
    pub fn resign(&mut self) -> Result<GameResult, MoveError> {
        self.ensure_in_progress()?;
        self.finish(GameResult::Resignation {
            winner: self.active.opponent(),
        });
        Ok(self.result)
    }

    fn finish(&mut self, result: GameResult) {
        self.result = result;
        self.draw_offer = None;
        #[cfg(feature = "logging")]
        log::info!("game over: {result}");
    }

    fn classify(&self, from: Square, to: Square, mover: Occupant) -> Result<Move, MoveError> {
        let illegal = MoveError::IllegalDestination { from, to };

        if mover.piece == Piece::King {
            if let Some(side) = self.castle_side(from, to) {
                return self.castle_move(from, side).ok_or(illegal);
            }
        }

        if mover.piece == Piece::Pawn {
            if let Some(mv) = self.en_passant_move(from).filter(|mv| mv.to == to) {
                return Ok(mv);
            }
        }

        if !self.board.pseudo_legal_targets(from).contains(to) {
            return Err(illegal);
        }
        Ok(Self::reach_move(from, to, mover))
    }

    /// A pseudo-legal destination turned into a move. Promotions carry a
    /// queen until the chooser has been asked.
    fn reach_move(from: Square, to: Square, mover: Occupant) -> Move {
        if mover.piece != Piece::Pawn {
            Move::normal(from, to)
        } else if to.rank() == mover.color.promotion_rank() {
            Move::promotion(from, to, Piece::Queen)
        } else if from.rank().abs_diff(to.rank()) == 2 {
            Move::double_step(from, to)
        } else {
            Move::normal(from, to)
        }
    }

    /// King from its home square to the castling destination on its back rank
    fn castle_side(&self, from: Square, to: Square) -> Option<CastleSide> {
        let rank = self.active.back_rank();
        if from != Square(rank, KING_HOME_FILE) || to.rank() != rank {
            return None;
        }
        CastleSide::from_king_target(to.file())
    }

    /// The castling move on `side` if every castling condition holds.
    ///
    /// King and rook unmoved on their home squares, the squares between them
    /// empty, and the king's start, transit and destination squares not
    /// attacked.
    fn castle_move(&self, from: Square, side: CastleSide) -> Option<Move> {
        let color = self.active;
        let rank = color.back_rank();
        if from != Square(rank, KING_HOME_FILE) {
            return None;
        }

        let king = self.board.occupant(from)?;
        let rook = self.board.occupant(Square(rank, side.rook_file()))?;
        if !king.is(color, Piece::King) || king.has_moved {
            return None;
        }
        if !rook.is(color, Piece::Rook) || rook.has_moved {
            return None;
        }

        if side
            .between_files()
            .iter()
            .any(|&file| !self.board.is_empty(Square(rank, file)))
        {
            return None;
        }

        let enemy = color.opponent();
        if side
            .king_path_files()
            .iter()
            .any(|&file| self.board.is_square_attacked(Square(rank, file), enemy))
        {
            return None;
        }

        Some(Move::castle(
            from,
            Square(rank, side.king_target_file()),
            side,
        ))
    }

    /// En passant capture by the pawn on `from`, if the window is open and
    /// the double-stepped pawn stands right beside it.
    fn en_passant_move(&self, from: Square) -> Option<Move> {
        let target = self.en_passant_target?;
        let pawn = self.board.occupant(from)?;
        if !pawn.is(self.active, Piece::Pawn)
            || target.rank() != from.rank()
            || target.file().abs_diff(from.file()) != 1
        {
            return None;
        }
        let victim = self.board.occupant(target)?;
        if !victim.is(self.active.opponent(), Piece::Pawn) {
            return None;
        }
        let to = target
            .offset(self.active.pawn_direction(), 0)
            .filter(|&sq| self.board.is_empty(sq))?;
        Some(Move::en_passant(from, to, target))
    }

    /// Classified moves for the side to move, before the king safety test.
    pub(crate) fn candidate_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        let pieces: Vec<(Square, Occupant)> = self.board.pieces_of(self.active).collect();

        for (from, occupant) in pieces {
            for to in self.board.pseudo_legal_targets(from).iter() {
                match Self::reach_move(from, to, occupant) {
                    Move {
                        kind: MoveKind::Promotion(_),
                        ..
                    } => moves.extend(
                        PROMOTION_PIECES
                            .iter()
                            .map(|&piece| Move::promotion(from, to, piece)),
                    ),
                    mv => moves.push(mv),
                }
            }

            match occupant.piece {
                Piece::Pawn => moves.extend(self.en_passant_move(from)),
                Piece::King => moves.extend(
                    CastleSide::BOTH
                        .iter()
                        .filter_map(|&side| self.castle_move(from, side)),
                ),
                _ => {}
            }
        }
        moves
    }

    fn commit(&mut self, mv: Move, moved: Piece) -> MoveReport {
        let mover = self.active;
        let info = self.board.make_move(&mv);
        let captured = info.captured();

        if let Some(victim) = captured {
            self.captured.record(victim.color, victim.piece);
        }

        self.en_passant_target = match mv.kind {
            MoveKind::DoubleStep => Some(mv.to),
            _ => None,
        };

        if moved == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.history.push(self.board.clone());
        self.active = mover.opponent();
        self.draw_offer = None;

        let gives_check = self.board.is_in_check(self.active);
        self.result = self.evaluate();

        #[cfg(feature = "logging")]
        {
            log::debug!(
                "{mover} plays {mv}{}{}",
                if captured.is_some() { " (capture)" } else { "" },
                if gives_check { " (check)" } else { "" }
            );
            if self.result.is_terminal() {
                log::info!("game over: {}", self.result);
            }
        }

        MoveReport {
            mv,
            moved,
            captured: captured.map(|o| o.piece),
            gives_check,
            result: self.result,
        }
    }

    /// Terminal evaluation for the side to move: checkmate and stalemate,
    /// then insufficient material, the fifty-move rule and repetition.
    fn evaluate(&mut self) -> GameResult {
        if !self.has_legal_move() {
            return if self.board.is_in_check(self.active) {
                GameResult::Checkmate {
                    winner: self.active.opponent(),
                }
            } else {
                GameResult::Stalemate
            };
        }
        draw::detect(
            &self.board,
            self.halfmove_clock,
            &self.history,
            &self.params,
        )
        .unwrap_or(GameResult::InProgress)
    }
}
