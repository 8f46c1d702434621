use crate::clock::state::ClockState;
use crate::clock::{Region, Surface};

/// Latest text for every display region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub main_time: String,
    pub meridiem: String,
    pub date_info: String,
    pub world: Vec<String>,
    pub status: String,
}

impl Surface for Board {
    fn set(&mut self, region: Region, text: String) {
        match region {
            Region::MainTime => self.main_time = text,
            Region::Meridiem => self.meridiem = text,
            Region::DateInfo => self.date_info = text,
            Region::Status => self.status = text,
            Region::World(i) => {
                if self.world.len() <= i {
                    self.world.resize(i + 1, String::new());
                }
                self.world[i] = text;
            }
        }
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub clock: ClockState,
    pub board: Board,
}

impl AppState {
    pub fn new(clock: ClockState) -> Self {
        Self {
            should_quit: false,
            clock,
            board: Board::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_grows_world_rows() {
        let mut board = Board::default();
        board.set(Region::World(2), "Tokyo".into());
        assert_eq!(board.world, ["", "", "Tokyo"]);
        board.set(Region::World(0), "New York".into());
        assert_eq!(board.world, ["New York", "", "Tokyo"]);
    }

    #[test]
    fn test_board_overwrites_regions() {
        let mut board = Board::default();
        board.set(Region::Status, "a".into());
        board.set(Region::Status, "b".into());
        board.set(Region::MainTime, "big".into());
        board.set(Region::DateInfo, "date".into());
        board.set(Region::Meridiem, "PM".into());
        assert_eq!(board.status, "b");
        assert_eq!(board.meridiem, "PM");
        assert_eq!(board.main_time, "big");
        assert_eq!(board.date_info, "date");
    }
}
