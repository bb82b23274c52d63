//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from board storage so the search can evaluate scratch boards with
//! exactly the same checks the controller uses.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{is_winner, winner};
