use core::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::bitboard::bitboard::Bitboard;

/// A single square, indexed 0..64 with A1 = 0, B1 = 1, .. H8 = 63.
#[derive(Clone, Copy, PartialEq, Debug, PartialOrd, Eq, Ord, Hash)]
pub struct Square(u8);

static ALGEBRAIC_COORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("algebraic coordinate pattern is valid")
});

impl Square {
    pub const COUNT: usize = 64;

    pub fn new(index: u8) -> Self {
        assert!(index < Self::COUNT as u8);
        Square(index)
    }

    pub fn from_rank_file(rank: u8, file: u8) -> Self {
        assert!(rank < 8 && file < 8);
        Square(rank * 8 + file)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// File 0..8, where 0 is the A file.
    pub fn file(&self) -> u8 {
        self.0 & 7
    }

    /// Rank 0..8, where 0 is rank 1.
    pub fn rank(&self) -> u8 {
        self.0 >> 3
    }

    /// Chebyshev distance: the number of king steps between two squares.
    pub fn distance(&self, other: Square) -> u8 {
        let file_delta = (self.file() as i8 - other.file() as i8).abs() as u8;
        let rank_delta = (self.rank() as i8 - other.rank() as i8).abs() as u8;
        file_delta.max(rank_delta)
    }

    /// The square one rank up from White's point of view (A2 -> A3).
    pub fn north(&self) -> Square {
        Square::new(self.0 + 8)
    }

    /// Reflects the square across the vertical board axis (A file <-> H file).
    pub fn mirror_file(&self) -> Square {
        Square(self.0 ^ 7)
    }

    pub fn bitboard(&self) -> Bitboard {
        Bitboard(1u64 << self.0)
    }

    pub fn from_algebraic(coord: &str) -> Result<Self, &'static str> {
        let caps = ALGEBRAIC_COORD
            .captures(coord)
            .ok_or("invalid square; expected a coordinate like e4")?;
        let file_char = caps[1].chars().next().ok_or("invalid square")?;
        let rank_char = caps[2].chars().next().ok_or("invalid square")?;
        let file = file_char.to_ascii_lowercase() as u8 - b'a';
        let rank = rank_char as u8 - b'1';
        Ok(Square::from_rank_file(rank, file))
    }

    pub fn to_algebraic(&self) -> &'static str {
        tables::ALGEBRAIC[self.index()]
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

// used for parsing cli args
impl FromStr for Square {
    type Err = &'static str;

    fn from_str(coord: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(coord)
    }
}

#[rustfmt::skip]
impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

#[rustfmt::skip]
mod tables {
    pub const ALGEBRAIC: [&str; 64] = [
        "A1", "B1", "C1", "D1", "E1", "F1", "G1", "H1",
        "A2", "B2", "C2", "D2", "E2", "F2", "G2", "H2",
        "A3", "B3", "C3", "D3", "E3", "F3", "G3", "H3",
        "A4", "B4", "C4", "D4", "E4", "F4", "G4", "H4",
        "A5", "B5", "C5", "D5", "E5", "F5", "G5", "H5",
        "A6", "B6", "C6", "D6", "E6", "F6", "G6", "H6",
        "A7", "B7", "C7", "D7", "E7", "F7", "G7", "H7",
        "A8", "B8", "C8", "D8", "E8", "F8", "G8", "H8",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rank_file() {
        assert_eq!(Square::A1, Square::from_rank_file(0, 0));
        assert_eq!(Square::B2, Square::from_rank_file(1, 1));
        assert_eq!(Square::E4, Square::from_rank_file(3, 4));
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(Ok(Square::A1), Square::from_algebraic("A1"));
        assert_eq!(Ok(Square::A1), Square::from_algebraic("a1"));
        assert_eq!(Ok(Square::E5), Square::from_algebraic("E5"));
        assert!(Square::from_algebraic("j9").is_err());
        assert!(Square::from_algebraic("e45").is_err());
    }

    #[test]
    fn test_to_algebraic() {
        assert_eq!("A1", Square::A1.to_algebraic());
        assert_eq!("A8", Square::A8.to_algebraic());
        assert_eq!("B8", Square::B8.to_algebraic());
        assert_eq!("H8", Square::H8.to_algebraic());
    }

    #[test]
    fn test_file_and_rank() {
        assert_eq!((4, 3), (Square::E4.file(), Square::E4.rank()));
        assert_eq!((0, 7), (Square::A8.file(), Square::A8.rank()));
    }

    #[test]
    fn test_distance() {
        assert_eq!(0, Square::E4.distance(Square::E4));
        assert_eq!(1, Square::E4.distance(Square::D5));
        assert_eq!(7, Square::A1.distance(Square::H8));
        assert_eq!(7, Square::A8.distance(Square::H8));
    }

    #[test]
    fn test_mirror_file() {
        assert_eq!(Square::H1, Square::A1.mirror_file());
        assert_eq!(Square::D4, Square::E4.mirror_file());
        assert_eq!(Square::A8, Square::H8.mirror_file());
        for index in 0..64 {
            let square = Square::new(index);
            assert_eq!(square, square.mirror_file().mirror_file());
            assert_eq!(square.rank(), square.mirror_file().rank());
        }
    }

    #[test]
    fn test_north() {
        assert_eq!(Square::E5, Square::E4.north());
        assert_eq!(Square::A8, Square::A7.north());
    }
}
