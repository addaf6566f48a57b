pub mod claim;
pub mod close_window;
pub mod initialize;
pub mod mark_paid;
pub mod open_round;
pub mod pick_winner;
pub mod rollover;

pub use claim::*;
pub use close_window::*;
pub use initialize::*;
pub use mark_paid::*;
pub use open_round::*;
pub use pick_winner::*;
pub use rollover::*;
