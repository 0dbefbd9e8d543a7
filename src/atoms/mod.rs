pub mod clock;
pub mod launcher;
pub mod storage;
pub mod widgets;
