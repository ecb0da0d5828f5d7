//! Type definitions for the chess values the controller passes around
//!
//! Provides newtype patterns for board coordinates plus the small piece/move
//! vocabulary shared by the game model, the selection state machine and the
//! wire protocol. None of these types know any chess rules.

use crate::game::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Board coordinate representing a file (column) on the chessboard
///
/// Values range from 0 (file 'a') to 7 (file 'h').
/// This newtype prevents mixing up x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    /// Create a file from a character ('a'..='h')
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let file = File::from_char('e').unwrap(); // File 4
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Create a file from its index (0-7)
    pub fn from_index(index: u8) -> Option<Self> {
        (index < 8).then_some(File(index))
    }

    /// Convert file to character ('a'..='h')
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Get the file index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board coordinate representing a rank (row) on the chessboard
///
/// Values range from 0 (rank 1) to 7 (rank 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    /// Create a rank from a number (1-8)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let rank = Rank::from_number(4).unwrap(); // Rank 3 (0-indexed)
    /// ```
    pub fn from_number(n: u8) -> Option<Self> {
        (1..=8).contains(&n).then(|| Rank(n - 1))
    }

    /// Create a rank from its index (0-7)
    pub fn from_index(index: u8) -> Option<Self> {
        (index < 8).then_some(Rank(index))
    }

    /// Convert rank to number (1-8)
    pub fn to_number(self) -> u8 {
        self.0 + 1
    }

    /// Get the rank index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board square position (file, rank)
///
/// Combines File and Rank into a single type-safe coordinate. Displays and
/// parses in algebraic notation (`"e4"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    /// Create a square from file and rank indices (both 0-7)
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        Some(Square {
            file: File::from_index(file)?,
            rank: Rank::from_index(rank)?,
        })
    }

    /// Create a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let rank_num = u8::try_from(rank_char.to_digit(10)?).ok()?;

        Some(Square {
            file: File::from_char(file_char)?,
            rank: Rank::from_number(rank_num)?,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_number())
    }
}

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| GameError::InvalidSquare {
            text: s.to_string(),
        })
    }
}

/// Side to move / piece owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The rank a pawn of this color promotes on
    pub fn last_rank(self) -> Rank {
        match self {
            PieceColor::White => Rank(7),
            PieceColor::Black => Rank(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// Lowercase letter used in UCI promotion suffixes
    pub fn uci_char(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Pawn => 'p',
        }
    }

    pub fn from_uci_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceType::King),
            'q' => Some(PieceType::Queen),
            'b' => Some(PieceType::Bishop),
            'n' => Some(PieceType::Knight),
            'r' => Some(PieceType::Rook),
            'p' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

/// A move request handed to the game model
///
/// `promotion` is only meaningful for a pawn reaching its last rank; see
/// [`ChessMove::with_auto_queen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

impl ChessMove {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    /// Build a move, promoting to a queen when `mover` is a pawn landing on
    /// its last rank. Under-promotion is not reachable through this path.
    pub fn with_auto_queen(from: Square, to: Square, mover: Option<Piece>) -> Self {
        let promotion = match mover {
            Some(Piece {
                color,
                piece_type: PieceType::Pawn,
            }) if to.rank == color.last_rank() => Some(PieceType::Queen),
            _ => None,
        };
        Self {
            from,
            to,
            promotion,
        }
    }

    /// Parse a UCI move string such as `"e2e4"` or `"e7e8q"`
    pub fn from_uci(text: &str) -> Option<Self> {
        let text = text.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return None;
        }
        let from = Square::from_algebraic(&text[0..2])?;
        let to = Square::from_algebraic(&text[2..4])?;
        let promotion = match text[4..].chars().next() {
            Some(c) => Some(PieceType::from_uci_char(c)?),
            None => None,
        };
        Some(Self {
            from,
            to,
            promotion,
        })
    }

    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(role) => format!("{}{}{}", self.from, self.to, role.uci_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

/// Verbose record of a move, as produced by the game model for both legal
/// candidates and played history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<PieceType>,
    pub promotion: Option<PieceType>,
    pub san: String,
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
